use crate::{
    model::{BlockItem, Children, Document, InlineItem},
    parsing::kinds::{self, RAW_SUFFIX},
};

/// Validates the structural invariants of a parsed tree.
///
/// Asserts that:
/// - Element names are non-empty and contain no marker, space or bracket
/// - Structured element names never end in the raw suffix
/// - Paragraphs and block element bodies are never empty
/// - Texts are non-empty and never span lines
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for item in &doc.children {
        check_block(item);
    }
}

fn check_name(name: &str, raw: bool) {
    assert!(kinds::is_valid_name(name), "invalid element name: {name:?}");
    assert!(
        raw || !name.ends_with(RAW_SUFFIX),
        "structured element name ends with the raw suffix: {name:?}"
    );
}

fn check_block(item: &BlockItem) {
    match item {
        BlockItem::Paragraph(p) => {
            assert!(!p.children.is_empty(), "empty paragraph");
            p.children.iter().for_each(check_inline);
        }
        BlockItem::Element(el) => {
            check_name(&el.name, el.is_raw());
            assert!(
                !el.children.is_empty(),
                "block element {:?} has an empty body",
                el.name
            );
            if let Children::Items(items) = &el.children {
                items.iter().for_each(check_block);
            }
        }
    }
}

fn check_inline(item: &InlineItem) {
    match item {
        InlineItem::Text(t) => {
            assert!(!t.text.is_empty(), "empty text node");
            assert!(!t.text.contains('\n'), "text spans lines: {:?}", t.text);
        }
        InlineItem::Element(el) => {
            check_name(&el.name, el.is_raw());
            if let Children::Items(items) = &el.children {
                items.iter().for_each(check_inline);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{BlockElement, Paragraph},
        parse,
    };

    #[test]
    fn parsed_trees_pass() {
        let doc = parse("@a\n  b @c[d] @e*\n@f*\n  g\n").unwrap();
        check(&doc);
    }

    #[test]
    #[should_panic(expected = "empty paragraph")]
    fn empty_paragraph_fails() {
        check(&Document::new(vec![Paragraph::default().into()]));
    }

    #[test]
    #[should_panic(expected = "invalid element name")]
    fn bad_name_fails() {
        check(&Document::new(vec![BlockElement::raw("a[b", None, "x\n").into()]));
    }
}
