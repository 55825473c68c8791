// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_document(size: usize) -> String {
    let base = "@title\n  A Section\n\nSome paragraph with @em{emphasis} and @link(https://example.org)[a link].\nIt continues on a second line.\n\n@code*(rust)\n  fn example() {\n      println!(\"Hello\");\n  }\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_document(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("@section({section})\n"));
        content.push_str(&generate_nested_content(depth, 1));
    }
    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let indent = "  ".repeat(level);
    let mut content = String::new();
    content.push_str(&format!(
        "{indent}Paragraph at level {level} with @b{{bold}} text and @a[[@b[nested]]] brackets.\n\n"
    ));
    for i in 0..3 {
        content.push_str(&format!("{indent}@item({i}, {level})[entry {i}]\n"));
    }
    content.push('\n');

    if remaining_depth > 1 {
        content.push_str(&format!("{indent}@group\n"));
        content.push_str(&generate_nested_content(remaining_depth - 1, level + 1));
    }
    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_nested_document(50, 6)
}
