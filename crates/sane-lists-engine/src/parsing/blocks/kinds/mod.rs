pub mod list_marker;
pub mod paragraph;

pub use list_marker::{Line, ListKind, ListMarker};
pub use paragraph::Paragraph;
