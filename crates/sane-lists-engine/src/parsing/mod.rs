pub mod blocks;
pub mod snapshot;
pub mod split;
pub mod state;

#[cfg(test)]
mod tests;

use blocks::{BlockParser, IndentProcessor, ListKind, ListProcessor, Paragraph, ParseContext};
use split::{normalize_whitespace, split_blocks};

use crate::config::{ListConfig, ListConfigError};
use crate::tree::Tree;

/// A configured list parser.
///
/// Construction validates the configuration and compiles every marker
/// pattern; the parser is immutable afterwards and may be reused for any
/// number of documents.
pub struct ListParser {
    config: ListConfig,
    blocks: BlockParser,
}

impl ListParser {
    pub fn new(config: ListConfig) -> Result<Self, ListConfigError> {
        config.validate()?;

        let mut blocks = BlockParser::new();
        blocks.register(IndentProcessor::new(&config)?);
        blocks.register(ListProcessor::new(ListKind::Ordered, &config)?);
        blocks.register(ListProcessor::new(ListKind::Unordered, &config)?);
        blocks.register(Paragraph);

        log::debug!(
            "list parser ready (indent_width={}, strict_mode={}, processors={:?})",
            config.indent_width,
            config.strict_mode,
            blocks.processor_names()
        );
        Ok(Self { config, blocks })
    }

    pub fn parse_document(&self, source: &str) -> Tree {
        let mut tree = Tree::new();
        let root = tree.root();
        {
            let mut cx = ParseContext::new(&mut tree);
            let text = normalize_whitespace(source, self.config.tab_length);
            self.blocks.parse_blocks(&mut cx, root, split_blocks(&text));
            debug_assert!(cx.state.is_empty(), "parser state leaked: {:?}", cx.state);
        }
        tree
    }
}

/// Parses `source` with a one-off parser built from `config`.
pub fn parse_document(source: &str, config: &ListConfig) -> Result<Tree, ListConfigError> {
    Ok(ListParser::new(*config)?.parse_document(source))
}
