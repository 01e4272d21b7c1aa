use regex::Regex;

/// Which list family a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.`, `2.`, ... rendered as `ol`.
    Ordered,
    /// `*`, `+`, `-` rendered as `ul`.
    Unordered,
}

impl ListKind {
    /// Container tag this kind creates.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }

    /// Tag of a preceding list this kind may be merged into.
    pub fn sibling_tag(self) -> &'static str {
        self.tag()
    }

    /// Processor name used when registering with the block parser.
    pub fn processor_name(self) -> &'static str {
        match self {
            ListKind::Ordered => "olist",
            ListKind::Unordered => "ulist",
        }
    }

    fn marker_pattern(self) -> &'static str {
        match self {
            ListKind::Ordered => r"\d+\.",
            ListKind::Unordered => r"[*+-]",
        }
    }
}

/// Classification of a single line by a [`ListMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A marker of this matcher's kind at the current level.
    Item {
        /// The marker itself, e.g. `3.` or `-`.
        marker: &'a str,
        /// Text after the marker and its separating spaces.
        text: &'a str,
    },
    /// A marker of either kind indented by one unit: the first line of an
    /// adjacent nested list.
    Indented,
    /// Anything else; belongs to the current item.
    Continuation,
}

/// Marker patterns for one [`ListKind`], compiled for a fixed indent width.
#[derive(Debug, Clone)]
pub struct ListMarker {
    kind: ListKind,
    start: Regex,
    child: Regex,
    indent: Regex,
}

impl ListMarker {
    pub fn new(kind: ListKind, indent_width: usize) -> Result<Self, regex::Error> {
        let lead = indent_width.saturating_sub(1);
        let nested_max = (indent_width * 2).saturating_sub(1);
        let marker = kind.marker_pattern();

        Ok(Self {
            kind,
            start: Regex::new(&format!(r"^[ ]{{0,{lead}}}{marker}[ ]+(.*)"))?,
            child: Regex::new(&format!(r"^[ ]{{0,{lead}}}({marker})[ ]+(.*)"))?,
            indent: Regex::new(&format!(
                r"^[ ]{{{indent_width},{nested_max}}}(\d+\.|[*+-])[ ]+.*"
            ))?,
        })
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Whether `block` opens a list of this kind on its first line.
    pub fn test(&self, block: &str) -> bool {
        self.start.is_match(block)
    }

    /// Classifies a single line (without its newline).
    pub fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        if let Some(caps) = self.child.captures(line) {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Line::Item { marker, text };
        }
        if self.indent.is_match(line) {
            return Line::Indented;
        }
        Line::Continuation
    }
}
