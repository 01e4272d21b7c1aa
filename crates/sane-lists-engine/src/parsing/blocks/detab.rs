//! Indentation measurement and removal against a nesting unit width.

/// Splits off the leading run of lines indented by `width` spaces.
///
/// Returns `(consumed, remainder)`: `consumed` holds that run with one unit
/// of indentation removed (blank lines inside the run are kept as empty
/// lines), `remainder` starts at the first line that is neither indented nor
/// blank and is returned untouched.
pub fn strip_block_indent(text: &str, width: usize) -> (String, String) {
    let prefix = " ".repeat(width);
    let lines: Vec<&str> = text.split('\n').collect();

    let mut consumed = Vec::with_capacity(lines.len());
    for line in &lines {
        if let Some(rest) = line.strip_prefix(prefix.as_str()) {
            consumed.push(rest);
        } else if line.trim().is_empty() {
            consumed.push("");
        } else {
            break;
        }
    }

    let remainder = lines[consumed.len()..].join("\n");
    (consumed.join("\n"), remainder)
}

/// Removes `width * level` leading spaces from every line that has them.
///
/// Lines indented less than that are left as they are.
pub fn strip_indent_level(text: &str, width: usize, level: usize) -> String {
    let prefix = " ".repeat(width * level);
    text.split('\n')
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole indentation units at the start of `text`, rounded down. A zero
/// `width` has no units.
pub fn indent_units(text: &str, width: usize) -> usize {
    let spaces = text.bytes().take_while(|&b| b == b' ').count();
    spaces.checked_div(width).unwrap_or(0)
}
