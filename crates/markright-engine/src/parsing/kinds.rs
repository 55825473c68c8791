//! # Syntax Kinds
//!
//! All markright punctuation lives here; the scanners and the printer refer
//! to these constants and never hardcode `@`, `*` or bracket characters.

/// Element marker.
pub const MARKER: u8 = b'@';

/// Name suffix that makes an element raw.
pub const RAW_SUFFIX: char = '*';

/// Spaces per nesting level.
pub const INDENT: usize = 2;

/// Deepest element nesting accepted, counted separately for block levels
/// and for inline bodies within one line.
pub const MAX_NESTING: usize = 256;

/// Opens an argument list directly after an element name.
pub const ARGS_OPEN: u8 = b'(';
pub const ARGS_CLOSE: u8 = b')';
pub const ARGS_SEPARATOR: u8 = b',';

/// The four bracket pairs that can delimit an inline body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Square,
    Curly,
    Round,
    Angle,
}

impl Bracket {
    pub const ALL: [Bracket; 4] = [
        Bracket::Square,
        Bracket::Curly,
        Bracket::Round,
        Bracket::Angle,
    ];

    pub fn open(self) -> u8 {
        match self {
            Bracket::Square => b'[',
            Bracket::Curly => b'{',
            Bracket::Round => b'(',
            Bracket::Angle => b'<',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Bracket::Square => b']',
            Bracket::Curly => b'}',
            Bracket::Round => b')',
            Bracket::Angle => b'>',
        }
    }

    pub fn from_open(b: u8) -> Option<Bracket> {
        Self::ALL.into_iter().find(|br| br.open() == b)
    }

    fn is_bracket(b: u8) -> bool {
        Self::ALL.into_iter().any(|br| br.open() == b || br.close() == b)
    }

    /// `count` copies of the opening character.
    pub fn open_run(self, count: usize) -> String {
        char::from(self.open()).to_string().repeat(count)
    }

    /// `count` copies of the closing character.
    pub fn close_run(self, count: usize) -> String {
        char::from(self.close()).to_string().repeat(count)
    }
}

/// Bytes that terminate an element name.
pub fn ends_name(b: u8) -> bool {
    b == MARKER || b == b' ' || Bracket::is_bracket(b)
}

/// Whether `name` can be stored as an element name: non-empty and free of
/// name-terminating characters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.bytes().any(ends_name)
}
