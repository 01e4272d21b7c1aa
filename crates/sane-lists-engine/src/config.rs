use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListConfigError {
    #[error("Indent width must be at least 1, got {0}")]
    InvalidIndentWidth(usize),

    #[error("Tab length must be at least 1, got {0}")]
    InvalidTabLength(usize),

    #[error("Failed to compile list marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parser-wide list settings.
///
/// Fixed once a [`ListParser`](crate::ListParser) is built; every marker
/// pattern is compiled from `indent_width` at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Spaces that make up one nesting level.
    pub indent_width: usize,
    /// When false, a list block directly following a list of the same kind
    /// is merged into it as a loose item.
    pub strict_mode: bool,
    /// Ignore the number of the first ordered marker (no `start` attribute).
    pub lazy_ol: bool,
    /// Column width used when expanding tabs in the source.
    pub tab_length: usize,
}

impl ListConfig {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;
    pub const DEFAULT_TAB_LENGTH: usize = 4;

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn with_lazy_ol(mut self, lazy_ol: bool) -> Self {
        self.lazy_ol = lazy_ol;
        self
    }

    pub fn with_tab_length(mut self, tab_length: usize) -> Self {
        self.tab_length = tab_length;
        self
    }

    pub fn validate(&self) -> Result<(), ListConfigError> {
        if self.indent_width < 1 {
            return Err(ListConfigError::InvalidIndentWidth(self.indent_width));
        }
        if self.tab_length < 1 {
            return Err(ListConfigError::InvalidTabLength(self.tab_length));
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            indent_width: Self::DEFAULT_INDENT_WIDTH,
            strict_mode: true,
            lazy_ol: true,
            tab_length: Self::DEFAULT_TAB_LENGTH,
        }
    }
}
