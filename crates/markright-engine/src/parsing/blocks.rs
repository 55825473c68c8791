use crate::{
    error::ParseError,
    model::{BlockElement, BlockItem, Paragraph},
};

use super::{
    cursor::Cursor,
    head::parse_head,
    inline::parse_inline,
    kinds::{INDENT, MARKER, MAX_NESTING},
    lines::Line,
};

/// Groups scanned lines into paragraphs and block elements.
///
/// Holds the line stream and a cursor into it; each nesting level is one
/// recursive call of [`BlockParser::parse_items`] that returns when a line
/// drops below its depth.
pub struct BlockParser<'a> {
    lines: Vec<Line<'a>>,
    curr: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(lines: Vec<Line<'a>>) -> Self {
        Self { lines, curr: 0 }
    }

    /// Parses block items at indentation `depth` until a shallower line or
    /// the end of input.
    pub fn parse_items(&mut self, depth: usize) -> Result<Vec<BlockItem>, ParseError> {
        let mut children = vec![];
        let mut paragraph: Option<Paragraph> = None;

        fn flush(children: &mut Vec<BlockItem>, paragraph: &mut Option<Paragraph>) {
            if let Some(p) = paragraph.take() {
                children.push(p.into());
            }
        }

        while let Some(line) = self.lines.get(self.curr).copied() {
            if line.is_blank() {
                flush(&mut children, &mut paragraph);
                self.curr += 1;
                continue;
            }
            if line.indent < depth {
                break;
            }
            if line.indent % INDENT != 0 {
                return Err(ParseError::OddIndentation {
                    line: line.number,
                    indent: line.indent,
                });
            }

            if self.at_block_head(&line, depth) {
                flush(&mut children, &mut paragraph);
                let element = self.parse_block_element(line, depth)?;
                children.push(element.into());
                continue;
            }

            let items = parse_inline(line.number, line.indent, line.text)?;
            paragraph
                .get_or_insert_with(Paragraph::default)
                .children
                .extend(items);
            self.curr += 1;
        }

        flush(&mut children, &mut paragraph);
        Ok(children)
    }

    /// A head sits at exactly `depth` and the following line is indented
    /// further. Blank lines have no indentation, so a head followed by a
    /// blank line stays inline.
    fn at_block_head(&self, line: &Line<'_>, depth: usize) -> bool {
        line.indent == depth
            && line.text.as_bytes().first() == Some(&MARKER)
            && self
                .lines
                .get(self.curr + 1)
                .is_some_and(|next| next.indent > line.indent)
    }

    fn parse_block_element(
        &mut self,
        line: Line<'a>,
        depth: usize,
    ) -> Result<BlockElement, ParseError> {
        let body_depth = depth + INDENT;
        if body_depth / INDENT > MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                line: line.number,
                limit: MAX_NESTING,
            });
        }
        if let Some(next) = self
            .lines
            .get(self.curr + 1)
            .filter(|next| next.indent != body_depth)
        {
            return Err(ParseError::IndentJump {
                line: next.number,
                expected: body_depth,
                found: next.indent,
            });
        }

        let mut cur = Cursor::new(line.text, line.number, line.indent);
        let head = parse_head(&mut cur)?;
        let trailing = cur.rest().trim();
        if !trailing.is_empty() {
            return Err(ParseError::TrailingHeadContent {
                line: line.number,
                content: trailing.to_string(),
            });
        }
        self.curr += 1;

        log::trace!("block element '{}' at line {}", head.name, line.number);
        if head.is_raw {
            let body = self.collect_raw(body_depth);
            Ok(BlockElement::raw(head.name, head.args, body))
        } else {
            let children = self.parse_items(body_depth)?;
            Ok(BlockElement::new(head.name, head.args, children))
        }
    }

    /// Collects every following line indented at least `base` as literal text.
    ///
    /// `base` spaces are stripped from each line and any excess kept. A run
    /// of blank lines between content lines becomes one empty line; blank
    /// lines after the last content line are dropped.
    fn collect_raw(&mut self, base: usize) -> String {
        let mut body = String::new();
        let mut pending_blank = false;

        while let Some(line) = self.lines.get(self.curr) {
            if line.is_blank() {
                pending_blank = true;
                self.curr += 1;
                continue;
            }
            if line.indent < base {
                break;
            }
            if pending_blank && !body.is_empty() {
                body.push('\n');
            }
            pending_blank = false;
            body.extend(std::iter::repeat_n(' ', line.indent - base));
            body.push_str(line.text);
            body.push('\n');
            self.curr += 1;
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::scan_lines;
    use pretty_assertions::assert_eq;

    fn parse_at_root(source: &str) -> Result<Vec<BlockItem>, ParseError> {
        BlockParser::new(scan_lines(source)).parse_items(0)
    }

    fn raw_body(source: &str) -> String {
        let items = parse_at_root(source).unwrap();
        match &items[0] {
            BlockItem::Element(el) => el.children.raw().unwrap().to_string(),
            other => panic!("expected a block element, got {other:?}"),
        }
    }

    #[test]
    fn raw_body_keeps_relative_indentation() {
        assert_eq!(
            raw_body("@code*\n  line one\n    line two\n"),
            "line one\n  line two\n"
        );
    }

    #[test]
    fn raw_body_collapses_blank_runs() {
        assert_eq!(raw_body("@code*\n  a\n\n\n\n  b\n"), "a\n\nb\n");
    }

    #[test]
    fn raw_body_drops_trailing_blanks() {
        assert_eq!(raw_body("@code*\n  a\n\n\n@next\n"), "a\n");
        assert_eq!(raw_body("@code*\n  a\n\n"), "a\n");
    }

    #[test]
    fn raw_body_keeps_markup_literal() {
        assert_eq!(
            raw_body("@command*\n  1st@@b@@c\n    2nd @z\n  @3rd\n"),
            "1st@@b@@c\n  2nd @z\n@3rd\n"
        );
    }

    #[test]
    fn raw_body_accepts_odd_excess_indentation() {
        assert_eq!(raw_body("@code*\n  a\n   b\n"), "a\n b\n");
    }

    #[test]
    fn head_followed_by_blank_line_is_inline() {
        let items = parse_at_root("@a\n\n  b\n").unwrap();
        assert!(matches!(items[0], BlockItem::Paragraph(_)));
    }

    #[test]
    fn indent_jump_of_four_is_an_error() {
        assert_eq!(
            parse_at_root("@a\n    b\n"),
            Err(ParseError::IndentJump {
                line: 2,
                expected: 2,
                found: 4,
            })
        );
    }

    #[test]
    fn odd_indentation_is_an_error() {
        assert_eq!(
            parse_at_root("a\n b\n"),
            Err(ParseError::OddIndentation { line: 2, indent: 1 })
        );
    }

    #[test]
    fn odd_jump_after_head_is_an_indent_jump() {
        assert!(matches!(
            parse_at_root("@a\n   b\n"),
            Err(ParseError::IndentJump { found: 3, .. })
        ));
    }

    #[test]
    fn content_after_block_head_is_an_error() {
        assert_eq!(
            parse_at_root("@a[x]\n  b\n"),
            Err(ParseError::TrailingHeadContent {
                line: 1,
                content: "[x]".to_string(),
            })
        );
    }

    #[test]
    fn trailing_spaces_after_block_head_are_allowed() {
        assert!(parse_at_root("@a(1)  \n  b\n").is_ok());
    }

    #[test]
    fn deep_block_nesting_is_rejected() {
        let source: String = (0..=MAX_NESTING + 1)
            .map(|level| format!("{}@e\n", " ".repeat(level * INDENT)))
            .collect();
        assert!(matches!(
            parse_at_root(&source),
            Err(ParseError::NestingTooDeep { .. })
        ));
    }
}
