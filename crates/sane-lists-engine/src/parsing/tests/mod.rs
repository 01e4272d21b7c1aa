//! Integration tests for the parsing module.
//!
//! Fixture documents live in `fixtures/`; their parsed trees are checked as
//! inline outline snapshots.

use std::collections::VecDeque;

use crate::config::ListConfig;
use crate::parsing::{
    ListParser,
    blocks::{BlockParser, ListKind, ListProcessor, Paragraph, ParseContext},
    snapshot,
    state::{ParserState, State},
};
use crate::tree::Tree;

fn parse_fixture(name: &str, config: ListConfig) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let tree = ListParser::new(config).unwrap().parse_document(&md);
    snapshot::invariants(&tree);
    snapshot::outline(&tree)
}

fn legacy() -> ListConfig {
    ListConfig::default().with_strict_mode(false)
}

// Fixture-based snapshot tests

#[test]
fn fixture_nested_ordered() {
    insta::assert_snapshot!(parse_fixture("nested_ordered", ListConfig::default()), @r#"
    div
      ol
        li "a"
        li "b"
          ol
            li "c"
    "#);
}

#[test]
fn fixture_nested_unordered_wide() {
    let config = ListConfig::default().with_indent_width(4);
    insta::assert_snapshot!(parse_fixture("nested_unordered_wide", config), @r#"
    div
      ul
        li "a"
          ul
            li "b"
    "#);
}

#[test]
fn fixture_nested_unordered_wide_at_default_width_is_deeper() {
    // Four spaces are two units at width 2: too deep to open a nested item.
    insta::assert_snapshot!(parse_fixture("nested_unordered_wide", ListConfig::default()), @r#"
    div
      ul
        li "a\n    - b"
    "#);
}

#[test]
fn fixture_deep_nesting() {
    insta::assert_snapshot!(parse_fixture("deep_nesting", ListConfig::default()), @r#"
    div
      ul
        li "a"
          ul
            li "b"
              ul
                li "c"
        li "d"
    "#);
}

#[test]
fn fixture_mixed_kinds() {
    insta::assert_snapshot!(parse_fixture("mixed_kinds", ListConfig::default()), @r#"
    div
      ol
        li "one"
        li "two"
          ul
            li "bullet"
            li "bullet"
        li "three"
    "#);
}

#[test]
fn fixture_mixed_nested_markers() {
    // A nested marker of the other kind joins the nested list already there.
    insta::assert_snapshot!(parse_fixture("mixed_nested_markers", ListConfig::default()), @r#"
    div
      ul
        li "a"
          ul
            li "b"
            li "c"
    "#);
}

#[test]
fn fixture_mixed_nested_markers_ordered() {
    insta::assert_snapshot!(parse_fixture("mixed_nested_markers_ordered", ListConfig::default()), @r#"
    div
      ol
        li "a"
          ol
            li "b"
            li "c"
    "#);
}

#[test]
fn fixture_indent_floor() {
    insta::assert_snapshot!(parse_fixture("indent_floor", ListConfig::default()), @r#"
    div
      ol
        li "a"
          ol
            li "b"
    "#);
}

#[test]
fn fixture_loose_continuation() {
    insta::assert_snapshot!(parse_fixture("loose_continuation", ListConfig::default()), @r#"
    div
      ul
        li
          p "a"
          p "more"
    "#);
}

#[test]
fn fixture_text_after_nested_list() {
    insta::assert_snapshot!(parse_fixture("text_after_nested_list", ListConfig::default()), @r#"
    div
      ul
        li
          p "a"
          ul
            li "b"
          p "after"
    "#);
}

#[test]
fn fixture_deeper_than_tree() {
    insta::assert_snapshot!(parse_fixture("deeper_than_tree", ListConfig::default()), @r#"
    div
      ul
        li "a"
          p "deep"
    "#);
}

#[test]
fn fixture_adjacent_lists_strict() {
    insta::assert_snapshot!(parse_fixture("adjacent_lists", ListConfig::default()), @r#"
    div
      ol
        li "a"
      ol
        li "b"
    "#);
}

#[test]
fn fixture_adjacent_lists_legacy() {
    insta::assert_snapshot!(parse_fixture("adjacent_lists", legacy()), @r#"
    div
      ol
        li
          p "a"
        li
          p "b"
    "#);
}

#[test]
fn fixture_adjacent_nested_lists_legacy() {
    insta::assert_snapshot!(parse_fixture("adjacent_nested_lists", legacy()), @r#"
    div
      ul
        li
          p "a"
          ul
            li "b"
        li
          p "c"
    "#);
}

#[test]
fn fixture_adjacent_mixed_kinds_legacy() {
    insta::assert_snapshot!(parse_fixture("adjacent_mixed_kinds", legacy()), @r#"
    div
      ul
        li "a"
      ol
        li "b"
    "#);
}

#[test]
fn fixture_start_number() {
    let config = ListConfig::default().with_lazy_ol(false);
    insta::assert_snapshot!(parse_fixture("start_number", config), @r#"
    div
      ol start="3"
        li "a"
        li "b"
    "#);
}

#[test]
fn fixture_start_number_lazy() {
    insta::assert_snapshot!(parse_fixture("start_number", ListConfig::default()), @r#"
    div
      ol
        li "a"
        li "b"
    "#);
}

#[test]
fn fixture_paragraphs() {
    insta::assert_snapshot!(parse_fixture("paragraphs", ListConfig::default()), @r#"
    div
      p "Intro"
      ul
        li "a\n  continued"
        li "b"
      p "Intro\n- not a list"
    "#);
}

// Behaviour tests

fn list_parser(config: &ListConfig) -> BlockParser {
    ListParser::new(*config).unwrap().blocks
}

/// State pushed while parsing nested content is always popped again.
#[test]
fn state_stack_is_empty_after_parsing() {
    let parser = list_parser(&legacy());
    let mut tree = Tree::new();
    let root = tree.root();
    let mut cx = ParseContext::new(&mut tree);

    parser.parse_chunk(
        &mut cx,
        root,
        "- a\n  - b\n    - c\n\n  more\n\n- d\n\n      deep",
    );
    assert!(cx.state.is_empty());
}

/// Already dedented content is not dispatched to the indent processor again.
#[test]
fn detabbed_block_becomes_content() {
    let parser = list_parser(&ListConfig::default());
    let mut tree = Tree::new();
    let li = tree.append_child(tree.root(), "li");
    let mut cx = ParseContext::new(&mut tree);

    cx.scoped(State::Detabbed, |cx| {
        parser.parse_block(cx, li, "    still indented".to_string());
    });

    assert_eq!(
        snapshot::outline(&tree),
        "div\n  li\n    p \"still indented\""
    );
}

/// Indentation deeper than any list is kept as content of the item.
#[test]
fn indentation_past_tree_depth_is_content() {
    let parser = list_parser(&ListConfig::default());
    let mut tree = Tree::new();
    let li = tree.append_child(tree.root(), "li");
    let mut cx = ParseContext::new(&mut tree);

    parser.parse_block(&mut cx, li, "        deep".to_string());
    assert!(cx.state.is_empty());
    assert_eq!(snapshot::outline(&tree), "div\n  li\n    p \"deep\"");
}

/// Merging into a sibling list moves the previous item's tail into a `p`.
#[test]
fn merge_promotes_tail_of_last_child() {
    let config = legacy();
    let mut parser = BlockParser::new();
    parser.register(ListProcessor::new(ListKind::Unordered, &config).unwrap());
    parser.register(Paragraph);

    let mut tree = Tree::new();
    let root = tree.root();
    let ul = tree.append_child(root, "ul");
    let li = tree.append_child(ul, "li");
    tree.node_mut(li).text = "head".to_string();
    let nested = tree.append_child(li, "ul");
    tree.node_mut(nested).tail = "\n  trailing".to_string();

    let mut cx = ParseContext::new(&mut tree);
    parser.parse_blocks(&mut cx, root, VecDeque::from(["- next".to_string()]));

    insta::assert_snapshot!(snapshot::outline(&tree), @r#"
    div
      ul
        li
          p "head"
          ul
          p "trailing"
        li
          p "next"
    "#);
}

/// A list processor re-entered with a list as parent keeps using that list.
#[test]
fn list_parent_is_reused() {
    let parser = list_parser(&ListConfig::default());
    let mut tree = Tree::new();
    let ol = tree.append_child(tree.root(), "ol");
    let mut cx = ParseContext::new(&mut tree);

    parser.parse_block(&mut cx, ol, "1. x\n2. y".to_string());
    insta::assert_snapshot!(snapshot::outline(&tree), @r#"
    div
      ol
        li "x"
        li "y"
    "#);
}

/// Nesting beyond the depth limit is kept as item text instead of recursing.
#[test]
fn nesting_is_capped() {
    let source = (0..1000)
        .map(|level| format!("{}- x", " ".repeat(level)))
        .collect::<Vec<_>>()
        .join("\n");

    let tree = ListParser::new(ListConfig::default().with_indent_width(1))
        .unwrap()
        .parse_document(&source);
    snapshot::invariants(&tree);

    let outline = snapshot::outline(&tree);
    let lists = outline.lines().filter(|line| line.trim() == "ul").count();
    assert_eq!(lists, ParserState::MAX_DEPTH / 2);
}

#[test]
fn empty_document() {
    let tree = ListParser::new(ListConfig::default())
        .unwrap()
        .parse_document("");
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn blank_lines_only() {
    let tree = ListParser::new(ListConfig::default())
        .unwrap()
        .parse_document("\n \n\t\n");
    assert_eq!(snapshot::outline(&tree), "div");
}
