use std::fmt::Write;

use crate::model::{BlockItem, Children, Document, InlineItem};

/// Renders a tree one node per line, children indented two spaces:
///
/// ```text
/// B.section ["intro"]
///   P
///     "Some "
///     I.em
///       "text"
/// B.code*
///   "fn main() {}\n"
/// ```
///
/// `P` is a paragraph, `B.`/`I.` a block/inline element with `*` marking raw
/// ones, quoted lines are text or raw bodies in Rust string syntax, and the
/// bracketed list is present only when the element has arguments.
pub fn repr(doc: &Document) -> String {
    let mut out = String::new();
    for item in &doc.children {
        block_item(&mut out, item, 0);
    }
    out
}

fn line(out: &mut String, level: usize, content: std::fmt::Arguments<'_>) {
    let _ = writeln!(out, "{:indent$}{content}", "", indent = level * 2);
}

fn element_line(
    out: &mut String,
    level: usize,
    prefix: &str,
    name: &str,
    args: &Option<Vec<String>>,
    is_raw: bool,
) {
    let raw = if is_raw { "*" } else { "" };
    match args {
        Some(args) => line(out, level, format_args!("{prefix}.{name}{raw} {args:?}")),
        None => line(out, level, format_args!("{prefix}.{name}{raw}")),
    }
}

fn block_item(out: &mut String, item: &BlockItem, level: usize) {
    match item {
        BlockItem::Paragraph(p) => {
            line(out, level, format_args!("P"));
            for child in &p.children {
                inline_item(out, child, level + 1);
            }
        }
        BlockItem::Element(el) => {
            element_line(out, level, "B", &el.name, &el.args, el.is_raw());
            match &el.children {
                Children::Items(items) => {
                    for child in items {
                        block_item(out, child, level + 1);
                    }
                }
                Children::Raw(raw) => line(out, level + 1, format_args!("{raw:?}")),
            }
        }
    }
}

fn inline_item(out: &mut String, item: &InlineItem, level: usize) {
    match item {
        InlineItem::Text(t) => line(out, level, format_args!("{:?}", t.text)),
        InlineItem::Element(el) => {
            element_line(out, level, "I", &el.name, &el.args, el.is_raw());
            match &el.children {
                Children::Items(items) => {
                    for child in items {
                        inline_item(out, child, level + 1);
                    }
                }
                Children::Raw(raw) => line(out, level + 1, format_args!("{raw:?}")),
            }
        }
    }
}
