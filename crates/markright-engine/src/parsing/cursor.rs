use crate::error::ParseError;

use super::kinds::MAX_NESTING;

/// A byte cursor over one line of inline content.
///
/// Tracks the source line and the column at which `s` begins so that
/// errors raised while scanning nested bodies still point into the
/// source text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// 1-based source line.
    pub line: usize,
    /// 0-based column of `s[0]` in the source line.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
    /// How many inline bodies enclose `s`.
    pub depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, line: usize, base: usize) -> Self {
        Self {
            s,
            line,
            base,
            i: 0,
            depth: 0,
        }
    }

    /// A cursor over a body found inside this one, starting at `base`.
    pub fn nested(&self, s: &'a str, base: usize) -> Result<Cursor<'a>, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                line: self.line,
                limit: MAX_NESTING,
            });
        }
        Ok(Cursor {
            s,
            line: self.line,
            base,
            i: 0,
            depth: self.depth + 1,
        })
    }

    /// 1-based column of the current position.
    pub fn column(&self) -> usize {
        self.base + self.i + 1
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Counts how many times `b` repeats from the current position.
    pub fn run_of(&self, b: u8) -> usize {
        self.s.as_bytes()[self.i..]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    /// Consumes bytes while `pred` holds and returns them as a slice.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        &self.s[start..self.i]
    }

    /// Local index of the first occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        self.s.as_bytes()[self.i..]
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Everything from the cursor to the end.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    pub fn unclosed_body(&self, delimiter: String) -> ParseError {
        ParseError::UnclosedBody {
            line: self.line,
            column: self.column(),
            delimiter,
        }
    }

    pub fn unclosed_arguments(&self) -> ParseError {
        ParseError::UnclosedArguments {
            line: self.line,
            column: self.column(),
        }
    }

    pub fn empty_name(&self) -> ParseError {
        ParseError::EmptyElementName {
            line: self.line,
            column: self.column(),
        }
    }
}
