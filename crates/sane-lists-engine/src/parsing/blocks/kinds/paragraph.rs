use std::collections::VecDeque;

use crate::parsing::blocks::processor::{BlockParser, BlockProcessor, ParseContext};
use crate::parsing::state::State;
use crate::tree::{NodeId, PARAGRAPH_TAG};

/// Paragraph block type: the fallback when no other processor matches.
///
/// Inside a tight list the text stays inline on the item (or on the tail of
/// the item's last child); everywhere else it becomes a `p` node.
pub struct Paragraph;

impl BlockProcessor for Paragraph {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn test(&self, _cx: &ParseContext<'_>, _parent: NodeId, _block: &str) -> bool {
        true
    }

    fn run(
        &self,
        _parser: &BlockParser,
        cx: &mut ParseContext<'_>,
        parent: NodeId,
        blocks: &mut VecDeque<String>,
    ) {
        let Some(block) = blocks.pop_front() else {
            return;
        };
        if block.trim().is_empty() {
            return;
        }

        if cx.state.is_set(State::List) {
            match cx.tree.last_child(parent) {
                Some(sibling) => {
                    let tail = &mut cx.tree.node_mut(sibling).tail;
                    tail.push('\n');
                    tail.push_str(&block);
                }
                None => {
                    let text = &mut cx.tree.node_mut(parent).text;
                    if text.is_empty() {
                        text.push_str(block.trim_start());
                    } else {
                        text.push('\n');
                        text.push_str(&block);
                    }
                }
            }
        } else {
            let p = cx.tree.append_child(parent, PARAGRAPH_TAG);
            cx.tree.node_mut(p).text = block.trim_start().to_string();
        }
    }
}
