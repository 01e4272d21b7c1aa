use std::borrow::Cow;
use std::collections::VecDeque;

/// Prepares raw source for block splitting.
///
/// Line endings become `\n`, tabs are expanded to `tab_length` columns and
/// whitespace-only lines become empty, so a blank line is always `\n\n`.
/// A `tab_length` of 0 removes tabs.
pub fn normalize_whitespace(source: &str, tab_length: usize) -> String {
    let source = source.replace("\r\n", "\n").replace('\r', "\n");
    source
        .split('\n')
        .map(|line| {
            let expanded = expand_tabs(line, tab_length);
            if expanded.trim().is_empty() {
                Cow::Borrowed("")
            } else {
                expanded
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits normalized text into blocks at blank lines.
///
/// Newlines around each block are dropped, as are blocks left empty.
pub fn split_blocks(text: &str) -> VecDeque<String> {
    text.split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

fn expand_tabs(line: &str, tab_length: usize) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }
    if tab_length == 0 {
        return Cow::Owned(line.replace('\t', ""));
    }

    let mut out = String::with_capacity(line.len() + tab_length);
    let mut column = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = tab_length - column % tab_length;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    Cow::Owned(out)
}
