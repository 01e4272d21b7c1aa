use std::collections::VecDeque;

use crate::parsing::split::split_blocks;
use crate::parsing::state::{ParserState, State};
use crate::tree::{NodeId, Tree};

/// Mutable state threaded through one parse: the tree being built and the
/// state stack. Children see every state their callers pushed.
pub struct ParseContext<'t> {
    pub tree: &'t mut Tree,
    pub state: ParserState,
}

impl<'t> ParseContext<'t> {
    pub fn new(tree: &'t mut Tree) -> Self {
        Self {
            tree,
            state: ParserState::default(),
        }
    }

    /// Runs `f` with `state` pushed, resetting it afterwards.
    pub fn scoped<R>(&mut self, state: State, f: impl FnOnce(&mut Self) -> R) -> R {
        self.state.set(state);
        let out = f(self);
        self.state.reset();
        out
    }
}

/// A handler for one kind of block.
///
/// `test` must not mutate anything; `run` must consume at least the first
/// block from `blocks`.
pub trait BlockProcessor {
    fn name(&self) -> &'static str;

    fn test(&self, cx: &ParseContext<'_>, parent: NodeId, block: &str) -> bool;

    fn run(
        &self,
        parser: &BlockParser,
        cx: &mut ParseContext<'_>,
        parent: NodeId,
        blocks: &mut VecDeque<String>,
    );
}

/// Offers blocks to registered processors in priority order.
#[derive(Default)]
pub struct BlockParser {
    processors: Vec<Box<dyn BlockProcessor + Send + Sync>>,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a processor after all previously registered ones.
    pub fn register(&mut self, processor: impl BlockProcessor + Send + Sync + 'static) {
        self.processors.push(Box::new(processor));
    }

    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Parses `blocks` in order as children of `parent`.
    pub fn parse_blocks(
        &self,
        cx: &mut ParseContext<'_>,
        parent: NodeId,
        mut blocks: VecDeque<String>,
    ) {
        while let Some(block) = blocks.front() {
            let Some(processor) = self
                .processors
                .iter()
                .find(|p| p.test(cx, parent, block))
            else {
                log::debug!("no processor accepted block {block:?}, dropping it");
                blocks.pop_front();
                continue;
            };

            log::trace!(
                "{} handles block under <{}>: {block:?}",
                processor.name(),
                cx.tree.tag(parent)
            );
            let before = blocks.len();
            processor.run(self, cx, parent, &mut blocks);
            if blocks.len() >= before {
                log::warn!("{} did not consume its block", processor.name());
                blocks.pop_front();
            }
        }
    }

    /// Parses a single block as a child of `parent`.
    pub fn parse_block(&self, cx: &mut ParseContext<'_>, parent: NodeId, block: String) {
        self.parse_blocks(cx, parent, VecDeque::from([block]))
    }

    /// Splits `text` at blank lines and parses the pieces under `parent`.
    pub fn parse_chunk(&self, cx: &mut ParseContext<'_>, parent: NodeId, text: &str) {
        self.parse_blocks(cx, parent, split_blocks(text))
    }
}
