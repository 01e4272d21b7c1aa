pub mod config;
pub mod parsing;
pub mod tree;

// Re-export key types for easier usage
pub use config::{ListConfig, ListConfigError};
pub use parsing::{ListParser, parse_document, snapshot};
pub use tree::{Node, NodeId, Tree};
