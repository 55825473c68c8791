use crate::{
    error::ParseError,
    model::{InlineElement, InlineItem, Text},
};

use super::{
    cursor::Cursor,
    head::parse_head,
    kinds::{Bracket, MARKER},
};

/// Scans one line of inline content into text and inline elements.
///
/// # Arguments
/// - `line`: 1-based source line, for error positions
/// - `base`: 0-based column where `s` starts in that line
/// - `s`: the text to scan
///
/// Plain characters are kept exactly as written, including runs of spaces,
/// and are flushed as a [`Text`] whenever an element starts.
pub fn parse_inline(line: usize, base: usize, s: &str) -> Result<Vec<InlineItem>, ParseError> {
    scan(&mut Cursor::new(s, line, base), None)
}

/// Scans items until the end of `cur`, or until `closing` starts at the top
/// level. Nested elements consume their own bodies first, so a closing run
/// inside them never ends the enclosing body.
fn scan(cur: &mut Cursor<'_>, closing: Option<&str>) -> Result<Vec<InlineItem>, ParseError> {
    let s = cur.s;
    let mut out = vec![];
    let mut text_start = cur.i;

    fn flush_text(out: &mut Vec<InlineItem>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Text::new(&s[start..end]).into());
        }
    }

    while !cur.eof() {
        if closing.is_some_and(|run| cur.starts_with(run.as_bytes())) {
            break;
        }
        if cur.peek() == Some(MARKER) {
            flush_text(&mut out, s, text_start, cur.i);
            let element = parse_element(cur)?;
            out.push(element.into());
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.i);
    Ok(out)
}

/// Parses a complete inline element, head and optional body.
///
/// The opening run `[[` has a width and the body ends at the first closing
/// run of that width outside any nested element, so `@em[word]] tail` keeps
/// the second `]` as text after the element. Raw bodies are not scanned for
/// elements and end at the first closing run.
fn parse_element(cur: &mut Cursor<'_>) -> Result<InlineElement, ParseError> {
    let head = parse_head(cur)?;
    let Some(bracket) = cur.peek().and_then(Bracket::from_open) else {
        return Ok(if head.is_raw {
            InlineElement::raw(head.name, head.args, "")
        } else {
            InlineElement::new(head.name, head.args, vec![])
        });
    };

    let open = cur.clone();
    let width = cur.run_of(bracket.open());
    cur.bump_n(width);
    let closing = bracket.close_run(width);

    if head.is_raw {
        let Some(end) = cur.find(closing.as_bytes()) else {
            return Err(open.unclosed_body(closing));
        };
        let s = cur.s;
        let body = &s[cur.i..end];
        cur.bump_n(end - cur.i + width);
        return Ok(InlineElement::raw(head.name, head.args, body));
    }

    let mut body = cur.nested(cur.rest(), cur.base + cur.i)?;
    let children = scan(&mut body, Some(closing.as_str()))?;
    if body.eof() {
        return Err(open.unclosed_body(closing));
    }
    cur.bump_n(body.i + width);
    Ok(InlineElement::new(head.name, head.args, children))
}
