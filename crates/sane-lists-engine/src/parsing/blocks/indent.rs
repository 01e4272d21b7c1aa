//! # Indent Resolver and Continuation Dispatch
//!
//! An indented block that follows list content is rehomed into the deepest
//! existing list or item its indentation reaches. Indentation alone never
//! creates nesting: the walk only descends through `ol`/`ul`/`li` nodes that
//! list processing already built.

use std::collections::VecDeque;

use crate::config::{ListConfig, ListConfigError};
use crate::parsing::blocks::detab::{indent_units, strip_indent_level};
use crate::parsing::blocks::processor::{BlockParser, BlockProcessor, ParseContext};
use crate::parsing::state::{ParserState, State};
use crate::tree::{ITEM_TAG, NodeId, PARAGRAPH_TAG, Tree, is_list_tag};

/// Finds the node an indented block continues and the nesting level its
/// indentation stands for.
///
/// Inside a list the first unit of indentation is already accounted for, so
/// counting starts at 1. Descending into a list container adds a level;
/// descending into an item does not. The walk stops as soon as the last
/// child is not a list or item.
pub fn resolve_level(
    tree: &Tree,
    state: &ParserState,
    parent: NodeId,
    block: &str,
    indent_width: usize,
) -> (usize, NodeId) {
    let indent_level = indent_units(block, indent_width);
    let mut level = usize::from(state.is_set(State::List));
    let mut parent = parent;

    while indent_level > level {
        let Some(child) = tree.last_child(parent) else {
            break;
        };
        let tag = tree.tag(child);
        if is_list_tag(tag) {
            level += 1;
        } else if tag != ITEM_TAG {
            break;
        }
        parent = child;
    }

    (level, parent)
}

/// Rehomes indented blocks into the list structure they continue.
pub struct IndentProcessor {
    indent_width: usize,
    indent: String,
}

impl IndentProcessor {
    pub fn new(config: &ListConfig) -> Result<Self, ListConfigError> {
        config.validate()?;
        Ok(Self {
            indent_width: config.indent_width,
            indent: " ".repeat(config.indent_width),
        })
    }
}

impl BlockProcessor for IndentProcessor {
    fn name(&self) -> &'static str {
        "indent"
    }

    fn test(&self, cx: &ParseContext<'_>, parent: NodeId, block: &str) -> bool {
        block.starts_with(&self.indent)
            && !cx.state.is_set(State::Detabbed)
            && !cx.state.is_full()
            && (cx.tree.tag(parent) == ITEM_TAG
                || cx
                    .tree
                    .last_child(parent)
                    .is_some_and(|child| is_list_tag(cx.tree.tag(child))))
    }

    fn run(
        &self,
        parser: &BlockParser,
        cx: &mut ParseContext<'_>,
        parent: NodeId,
        blocks: &mut VecDeque<String>,
    ) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        let (level, sibling) =
            resolve_level(cx.tree, &cx.state, parent, &block, self.indent_width);
        let block = strip_indent_level(&block, self.indent_width, level);
        log::debug!(
            "indented block resolved to level {level} under <{}>",
            cx.tree.tag(sibling)
        );

        cx.scoped(State::Detabbed, |cx| {
            if cx.tree.tag(parent) == ITEM_TAG {
                // A list already nested in this item takes the block.
                match cx.tree.last_child(parent) {
                    Some(child) if is_list_tag(cx.tree.tag(child)) => {
                        parser.parse_block(cx, child, block);
                    }
                    _ => parser.parse_block(cx, parent, block),
                }
            } else if cx.tree.tag(sibling) == ITEM_TAG {
                parser.parse_block(cx, sibling, block);
            } else if let Some(item) = cx.tree.last_child(sibling)
                && cx.tree.tag(item) == ITEM_TAG
            {
                // The item becomes loose: its inline text moves into a
                // leading paragraph ahead of any nested lists.
                if !cx.tree.node(item).text.is_empty() {
                    let text = std::mem::take(&mut cx.tree.node_mut(item).text);
                    let p = cx.tree.insert_child(item, 0, PARAGRAPH_TAG);
                    cx.tree.node_mut(p).text = text;
                }
                parser.parse_chunk(cx, item, &block);
            } else {
                let li = cx.tree.append_child(sibling, ITEM_TAG);
                parser.parse_block(cx, li, block);
            }
        });
    }
}
