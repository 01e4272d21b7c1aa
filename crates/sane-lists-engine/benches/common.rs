// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

/// Flat lists of both kinds separated by paragraphs, repeated `size` times.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n1. First\n2. Second\n  - Mixed child\n3. Third\n\n";
    base.repeat(size)
}

/// Lists nested `depth` levels deep with `width`-space indentation, one list
/// per section.
#[allow(dead_code)]
pub fn generate_nested_lists(sections: usize, depth: usize, width: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("Section {section}\n\n"));
        for level in 0..depth {
            let indent = " ".repeat(width * level);
            content.push_str(&format!("{indent}- Item at level {level}\n"));
            content.push_str(&format!("{indent}- Sibling at level {level}\n"));
        }
        content.push('\n');
        content.push_str(&format!("{}Loose continuation\n\n", " ".repeat(width)));
    }

    content
}
