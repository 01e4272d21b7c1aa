//! # Snapshot Testing Support
//!
//! Utilities for checking parser output in tests and for dumping it from the
//! command line.
//!
//! ## Modules
//!
//! - **`outline`**: renders a [`Tree`](crate::Tree) as an indented plain-text
//!   outline, one node per line, stable enough for `insta` snapshots
//! - **`invariants`**: structural checks every parse result must satisfy

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
