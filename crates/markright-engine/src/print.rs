//! # Printer
//!
//! Serializes a tree back to canonical markright. Output is not a verbatim
//! echo of the source: spacing between tokens is normalized, paragraphs are
//! one line each and inline bodies get the narrowest safe delimiter. Printing
//! a re-parsed printout gives the same text again.

use crate::{
    error::PrintError,
    model::{Args, BlockElement, BlockItem, Children, Document, InlineElement, InlineItem, Paragraph},
    parsing::kinds::{self, Bracket, INDENT, MARKER, RAW_SUFFIX},
};

/// Bracket kinds tried for inline bodies, in order. Round brackets are never
/// used since `(` right after a name opens an argument list.
const BODY_BRACKETS: [Bracket; 3] = [Bracket::Square, Bracket::Curly, Bracket::Angle];

pub fn print(doc: &Document) -> Result<String, PrintError> {
    let mut printer = Printer::default();
    printer.block_items(&doc.children, 0)?;
    Ok(printer.out)
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn indent(&mut self, level: usize) {
        self.out.extend(std::iter::repeat_n(' ', level * INDENT));
    }

    fn block_items(&mut self, items: &[BlockItem], level: usize) -> Result<(), PrintError> {
        let mut prev_paragraph = false;
        for item in items {
            match item {
                BlockItem::Paragraph(p) => {
                    if prev_paragraph {
                        self.out.push('\n');
                    }
                    self.paragraph(p, level)?;
                    prev_paragraph = true;
                }
                BlockItem::Element(el) => {
                    self.block_element(el, level)?;
                    prev_paragraph = false;
                }
            }
        }
        Ok(())
    }

    fn block_element(&mut self, el: &BlockElement, level: usize) -> Result<(), PrintError> {
        self.indent(level);
        self.out.push_str(&head(&el.name, &el.args, el.is_raw())?);
        self.out.push('\n');

        match &el.children {
            Children::Items(items) => {
                if items.is_empty() {
                    return Err(PrintError::EmptyBlock(el.name.clone()));
                }
                self.block_items(items, level + 1)
            }
            Children::Raw(raw) => self.raw_block(&el.name, raw, level + 1),
        }
    }

    fn raw_block(&mut self, name: &str, raw: &str, level: usize) -> Result<(), PrintError> {
        if raw.is_empty() {
            return Err(PrintError::EmptyBlock(name.to_string()));
        }
        if raw.starts_with([' ', '\n']) {
            return Err(PrintError::IndentedRawBody(name.to_string()));
        }
        let body = raw.strip_suffix('\n').unwrap_or(raw);
        for line in body.split('\n') {
            if !line.is_empty() {
                self.indent(level);
                self.out.push_str(line);
            }
            self.out.push('\n');
        }
        Ok(())
    }

    fn paragraph(&mut self, p: &Paragraph, level: usize) -> Result<(), PrintError> {
        if p.children.is_empty() {
            return Err(PrintError::EmptyParagraph);
        }
        self.indent(level);
        self.out.push_str(&inline_items(&p.children)?);
        self.out.push('\n');
        Ok(())
    }
}

/// Prints inline items on one line.
///
/// A text right after a text gets a separating space (they came from
/// different source lines). A text right after a bodiless element gets one
/// too unless it already starts with a space or a closing bracket, so it
/// cannot run into the element's name, arguments or body.
fn inline_items(items: &[InlineItem]) -> Result<String, PrintError> {
    let mut out = String::new();
    let mut prev: Option<&InlineItem> = None;
    for item in items {
        match item {
            InlineItem::Text(t) => {
                check_text(&t.text)?;
                let needs_space = match prev {
                    Some(InlineItem::Text(_)) => true,
                    Some(InlineItem::Element(el)) => {
                        el.children.is_empty() && !separates_from_head(&t.text)
                    }
                    None => false,
                };
                if needs_space {
                    out.push(' ');
                }
                out.push_str(&t.text);
            }
            InlineItem::Element(el) => out.push_str(&inline_element(el)?),
        }
        prev = Some(item);
    }
    Ok(out)
}

fn separates_from_head(text: &str) -> bool {
    text.bytes().next().is_some_and(|b| {
        b == b' ' || Bracket::ALL.into_iter().any(|br| br.close() == b)
    })
}

fn inline_element(el: &InlineElement) -> Result<String, PrintError> {
    let mut out = head(&el.name, &el.args, el.is_raw())?;
    let (body, scanned, ends_in_text) = match &el.children {
        Children::Items(items) => {
            let texts: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    InlineItem::Text(t) => Some(t.text.as_str()),
                    InlineItem::Element(_) => None,
                })
                .collect();
            let ends_in_text = matches!(items.last(), Some(InlineItem::Text(_)));
            (inline_items(items)?, texts, ends_in_text)
        }
        Children::Raw(raw) => {
            if raw.contains('\n') {
                return Err(PrintError::UnprintableText(raw.clone()));
            }
            (raw.clone(), vec![raw.as_str()], true)
        }
    };
    if !body.is_empty() {
        let (bracket, width) = body_delimiter(&body, &scanned, ends_in_text)?;
        out.push_str(&bracket.open_run(width));
        out.push_str(&body);
        out.push_str(&bracket.close_run(width));
    }
    Ok(out)
}

/// The first bracket and width under which `body` reads back unchanged.
///
/// `scanned` is the text the parser searches for the closing run: the
/// top-level texts of an element body, since nested elements close
/// themselves, or the whole of a raw body. The width must exceed every
/// closing run in it. A body starting with the opening character would widen
/// the opening run, and one ending in text with the closing character would
/// close early, so those brackets are skipped. That rules out at most two of
/// the three.
fn body_delimiter(
    body: &str,
    scanned: &[&str],
    ends_in_text: bool,
) -> Result<(Bracket, usize), PrintError> {
    for bracket in BODY_BRACKETS {
        let (open, close) = (char::from(bracket.open()), char::from(bracket.close()));
        if body.starts_with(open) || (ends_in_text && body.ends_with(close)) {
            continue;
        }
        let widest = scanned
            .iter()
            .copied()
            .flat_map(|text| text.split(|c| c != close))
            .map(str::len)
            .max()
            .unwrap_or(0);
        return Ok((bracket, widest + 1));
    }
    Err(PrintError::UnprintableText(body.to_string()))
}

fn head(name: &str, args: &Args, is_raw: bool) -> Result<String, PrintError> {
    if !kinds::is_valid_name(name) || (!is_raw && name.ends_with(RAW_SUFFIX)) {
        return Err(PrintError::InvalidName(name.to_string()));
    }
    let mut out = String::new();
    out.push(char::from(MARKER));
    out.push_str(name);
    if is_raw {
        out.push(RAW_SUFFIX);
    }
    if let Some(args) = args {
        for arg in args {
            let bad = arg.contains([',', ')', '\n']) || arg.trim() != arg;
            if bad {
                return Err(PrintError::InvalidArgument {
                    element: name.to_string(),
                    argument: arg.clone(),
                });
            }
        }
        out.push('(');
        out.push_str(&args.join(", "));
        out.push(')');
    }
    Ok(out)
}

fn check_text(text: &str) -> Result<(), PrintError> {
    if text.is_empty() || text.contains(['\n', char::from(MARKER)]) {
        return Err(PrintError::UnprintableText(text.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Text, Paragraph},
        parse,
    };
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn reprint(source: &str) -> String {
        print(&parse(source).unwrap()).unwrap()
    }

    fn args(list: &[&str]) -> Args {
        Some(list.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn nested_blocks_and_paragraphs() {
        let out = reprint("@doc\n  @title\n    Hello\n  first\n  line\n\n\n  second\n");
        assert_snapshot!(out, @r"
        @doc
          @title
            Hello
          first line

          second
        ");
    }

    #[test]
    fn raw_block_keeps_lines() {
        let out = reprint("@code*(cpp)\n  int main() {\n    return 0;\n\n  }\n");
        assert_snapshot!(out, @r"
        @code*(cpp)
          int main() {
            return 0;

          }
        ");
    }

    #[test]
    fn empty_raw_lines_have_no_indentation() {
        assert_eq!(reprint("@c*\n  a\n\n  b\n"), "@c*\n  a\n\n  b\n");
    }

    #[test]
    fn inline_body_uses_square_brackets() {
        assert_eq!(reprint("@em{word} @b<x>\n"), "@em[word] @b[x]\n");
    }

    #[test]
    fn inline_body_widens_or_switches_brackets() {
        assert_eq!(reprint("@a{x]y}\n"), "@a[[x]y]]\n");
        assert_eq!(reprint("@a{x]}\n"), "@a{x]}\n");
        assert_eq!(reprint("@a{x]]y]}\n"), "@a{x]]y]}\n");
        assert_eq!(reprint("@a{x]]y}\n"), "@a[[[x]]y]]]\n");
        assert_eq!(reprint("@a<[x>\n"), "@a{[x}\n");
    }

    #[test]
    fn nested_bodies_closing_together() {
        assert_eq!(reprint("@a[[@b[2@c]]]\n"), "@a[@b[2@c]]\n");
    }

    #[test]
    fn closing_bracket_after_the_element_stays_outside() {
        assert_eq!(reprint("@em[word]] tail\n"), "@em[word]] tail\n");
        assert_eq!(reprint("@a{x}]\n"), "@a[x]]\n");
        assert_eq!(reprint("@a<<{x>>>]\n"), "@a[{x]>]\n");
    }

    #[test]
    fn closing_runs_inside_nested_elements_do_not_widen() {
        assert_eq!(reprint("@a{@b{x]]y}}\n"), "@a[@b[[[x]]y]]]]\n");
        assert_eq!(reprint("@a{@b{x]}}\n"), "@a[@b{x]}]\n");
        assert_eq!(reprint("@a{@b]}\n"), "@a{@b]}\n");
    }

    #[test]
    fn arguments_are_normalized() {
        assert_eq!(reprint("@cmd(  a , , b )\n"), "@cmd(a, , b)\n");
    }

    #[test]
    fn bodiless_element_before_text_gets_a_space() {
        assert_eq!(reprint("@a\nb\n"), "@a b\n");
        assert_eq!(reprint("@a\n(x)\n"), "@a (x)\n");
        assert_eq!(reprint("@a(1)\n[x\n"), "@a(1) [x\n");
    }

    #[test]
    fn bodiless_element_before_closing_bracket_stays_tight() {
        assert_eq!(reprint("@a[@b]\n"), "@a[@b]\n");
    }

    #[test]
    fn raw_inline_is_verbatim() {
        assert_eq!(reprint("@code*<a @b[c>\n"), "@code*[a @b[c]\n");
        assert_eq!(reprint("@x*\n"), "@x*\n");
    }

    #[test]
    fn empty_document_prints_nothing() {
        assert_eq!(reprint(""), "");
    }

    #[test]
    fn hand_built_tree() {
        let doc = Document::new(vec![
            BlockElement::new(
                "list",
                args(&["ordered"]),
                vec![Paragraph::new(vec![Text::new("one").into(), Text::new("two").into()]).into()],
            )
            .into(),
        ]);
        assert_eq!(print(&doc).unwrap(), "@list(ordered)\n  one two\n");
    }

    #[test]
    fn invalid_trees_are_rejected() {
        let bad_name = Document::new(vec![BlockElement::raw("a b", None, "x\n").into()]);
        assert_eq!(print(&bad_name), Err(PrintError::InvalidName("a b".into())));

        let bad_arg = Document::new(vec![
            Paragraph::new(vec![InlineElement::new("a", args(&["x,y"]), vec![]).into()]).into(),
        ]);
        assert!(matches!(print(&bad_arg), Err(PrintError::InvalidArgument { .. })));

        let bad_text = Document::new(vec![Paragraph::new(vec![Text::new("a@b").into()]).into()]);
        assert!(matches!(print(&bad_text), Err(PrintError::UnprintableText(_))));

        let empty_block = Document::new(vec![BlockElement::new("a", None, vec![]).into()]);
        assert_eq!(print(&empty_block), Err(PrintError::EmptyBlock("a".into())));

        let indented = Document::new(vec![BlockElement::raw("a", None, "  x\n").into()]);
        assert_eq!(print(&indented), Err(PrintError::IndentedRawBody("a".into())));

        let empty_paragraph = Document::new(vec![Paragraph::default().into()]);
        assert_eq!(print(&empty_paragraph), Err(PrintError::EmptyParagraph));

        let starred = Document::new(vec![
            Paragraph::new(vec![InlineElement::new("a*", None, vec![]).into()]).into(),
        ]);
        assert_eq!(print(&starred), Err(PrintError::InvalidName("a*".into())));
    }
}
