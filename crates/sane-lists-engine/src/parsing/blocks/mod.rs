//! # Block Processing
//!
//! Blocks are offered, one at a time and in document order, to processors
//! registered on a [`BlockParser`]. The first processor whose `test` accepts a
//! block runs it; list processors recurse into item content through the same
//! parser, depth first.
//!
//! ## Modules
//!
//! - **`processor`**: `BlockProcessor` trait, `BlockParser` and `ParseContext`
//! - **`detab`**: indentation measurement and removal
//! - **`kinds`**: marker matchers (`ListMarker`) and the `Paragraph` fallback
//! - **`indent`**: `resolve_level` and the `IndentProcessor`
//! - **`list`**: `ListProcessor`, shared by ordered and unordered lists
//!
//! ## Priority
//!
//! `indent`, then `olist`, then `ulist`, then `paragraph`. An indented block
//! under list content never reaches the list processors; `paragraph` accepts
//! everything.

pub mod detab;
pub mod indent;
pub mod kinds;
pub mod list;
pub mod processor;

pub use indent::{IndentProcessor, resolve_level};
pub use kinds::{Line, ListKind, ListMarker, Paragraph};
pub use list::{ItemGroups, ListProcessor};
pub use processor::{BlockParser, BlockProcessor, ParseContext};
