//! # List Block Processor
//!
//! One processor serves both list kinds; [`ListKind`] supplies the container
//! tag and the marker patterns.
//!
//! A list block is split into item groups, one per marker line. Each group is
//! parsed recursively into its own `li`, except groups that start indented by
//! one unit: those continue the previous item and are handed to the indent
//! processor through that item.

use std::collections::VecDeque;

use crate::config::{ListConfig, ListConfigError};
use crate::parsing::blocks::kinds::list_marker::{Line, ListKind, ListMarker};
use crate::parsing::blocks::processor::{BlockParser, BlockProcessor, ParseContext};
use crate::parsing::state::State;
use crate::tree::{ITEM_TAG, NodeId, PARAGRAPH_TAG, is_list_tag};

/// Raw item groups extracted from one list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroups {
    /// One entry per item, in source order.
    pub items: Vec<String>,
    /// Number of the first ordered marker (`None` for unordered lists).
    pub start: Option<String>,
}

pub struct ListProcessor {
    marker: ListMarker,
    indent: String,
    tab: String,
    strict_mode: bool,
    lazy_ol: bool,
}

impl ListProcessor {
    pub fn new(kind: ListKind, config: &ListConfig) -> Result<Self, ListConfigError> {
        config.validate()?;
        Ok(Self {
            marker: ListMarker::new(kind, config.indent_width)?,
            indent: " ".repeat(config.indent_width),
            tab: " ".repeat(config.tab_length),
            strict_mode: config.strict_mode,
            lazy_ol: config.lazy_ol,
        })
    }

    pub fn kind(&self) -> ListKind {
        self.marker.kind()
    }

    /// Splits a list block into item groups.
    ///
    /// Marker lines start a new group holding the text after the marker.
    /// A nested marker line joins the previous group when that group starts
    /// with a full tab stop, otherwise it starts a group of its own (kept
    /// raw, so it is recognised as indented later). Any other line is
    /// appended to the current group.
    pub fn split_items(&self, block: &str) -> ItemGroups {
        let mut items: Vec<String> = Vec::new();
        let mut start = None;

        for line in block.split('\n') {
            match self.marker.classify(line) {
                Line::Item { marker, text } => {
                    if items.is_empty() && self.kind() == ListKind::Ordered {
                        start = Some(marker.trim_end_matches('.').to_string());
                    }
                    items.push(text.to_string());
                }
                Line::Indented => match items.last_mut() {
                    Some(last) if last.starts_with(&self.tab) => {
                        last.push('\n');
                        last.push_str(line);
                    }
                    _ => items.push(line.to_string()),
                },
                Line::Continuation => match items.last_mut() {
                    Some(last) => {
                        last.push('\n');
                        last.push_str(line);
                    }
                    None => items.push(line.to_string()),
                },
            }
        }

        ItemGroups { items, start }
    }

    /// Appends a new loose item to an existing `list` of the same kind.
    ///
    /// The previous item's bare text and its last child's tail are moved
    /// into `p` nodes first, so old and new content do not run together.
    fn merge_into_sibling(
        &self,
        parser: &BlockParser,
        cx: &mut ParseContext<'_>,
        list: NodeId,
        first: Option<String>,
    ) {
        if let Some(last) = cx.tree.last_child(list) {
            if !cx.tree.node(last).text.is_empty() {
                let text = std::mem::take(&mut cx.tree.node_mut(last).text);
                let p = cx.tree.insert_child(last, 0, PARAGRAPH_TAG);
                cx.tree.node_mut(p).text = text;
            }
            if let Some(child) = cx.tree.last_child(last)
                && !cx.tree.node(child).tail.is_empty()
            {
                let tail = std::mem::take(&mut cx.tree.node_mut(child).tail);
                let p = cx.tree.append_child(last, PARAGRAPH_TAG);
                cx.tree.node_mut(p).text = tail.trim_start().to_string();
            }
        }

        let li = cx.tree.append_child(list, ITEM_TAG);
        if let Some(first) = first {
            cx.scoped(State::LooseList, |cx| parser.parse_block(cx, li, first));
        }
    }
}

impl BlockProcessor for ListProcessor {
    fn name(&self) -> &'static str {
        self.kind().processor_name()
    }

    fn test(&self, cx: &ParseContext<'_>, _parent: NodeId, block: &str) -> bool {
        !cx.state.is_full() && self.marker.test(block)
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
        let ItemGroups { items, start } = self.split_items(&block);
        let mut items = items.into_iter();
        let kind = self.kind();

        let sibling = cx.tree.last_child(parent);
        let list = match sibling {
            Some(sibling) if !self.strict_mode && cx.tree.tag(sibling) == kind.sibling_tag() => {
                log::debug!("merging {} block into preceding <{}>", self.name(), kind.tag());
                self.merge_into_sibling(parser, cx, sibling, items.next());
                sibling
            }
            _ if is_list_tag(cx.tree.tag(parent)) => {
                log::trace!("continuing <{}> in place", cx.tree.tag(parent));
                parent
            }
            _ => {
                let list = cx.tree.append_child(parent, kind.tag());
                if !self.lazy_ol
                    && let Some(start) = start.filter(|s| s != "1")
                {
                    cx.tree.node_mut(list).attrs.insert("start".to_string(), start);
                }
                log::trace!("opened <{}> under <{}>", kind.tag(), cx.tree.tag(parent));
                list
            }
        };

        cx.scoped(State::List, |cx| {
            for item in items {
                let continues_previous = item.starts_with(&self.indent);
                match cx.tree.last_child(list) {
                    Some(previous) if continues_previous => {
                        parser.parse_block(cx, previous, item);
                    }
                    _ => {
                        let li = cx.tree.append_child(list, ITEM_TAG);
                        parser.parse_block(cx, li, item);
                    }
                }
            }
        });
    }
}
