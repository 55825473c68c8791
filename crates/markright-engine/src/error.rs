use thiserror::Error;

/// Parse failures. The parser is fail-fast: the first error aborts the
/// parse and no partial tree is returned. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}, column {column}: expected '{delimiter}' before end of line")]
    UnclosedBody {
        line: usize,
        column: usize,
        delimiter: String,
    },

    #[error("line {line}, column {column}: argument list is not closed with ')'")]
    UnclosedArguments { line: usize, column: usize },

    #[error("line {line}, column {column}: element name is empty")]
    EmptyElementName { line: usize, column: usize },

    #[error("line {line}: indentation of {indent} spaces is not a multiple of 2")]
    OddIndentation { line: usize, indent: usize },

    #[error("line {line}: block body must be indented by {expected} spaces, found {found}")]
    IndentJump {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unexpected '{content}' after block element head")]
    TrailingHeadContent { line: usize, content: String },

    #[error("line {line}: elements nested deeper than {limit} levels")]
    NestingTooDeep { line: usize, limit: usize },
}

impl ParseError {
    /// The 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnclosedBody { line, .. }
            | ParseError::UnclosedArguments { line, .. }
            | ParseError::EmptyElementName { line, .. }
            | ParseError::OddIndentation { line, .. }
            | ParseError::IndentJump { line, .. }
            | ParseError::TrailingHeadContent { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }
}

/// Raised by the printer for hand-built trees that the parser could never
/// produce and that would not survive a re-parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("invalid element name '{0}'")]
    InvalidName(String),

    #[error("invalid argument '{argument}' on element '{element}'")]
    InvalidArgument { element: String, argument: String },

    #[error("text {0:?} cannot be printed inside a line")]
    UnprintableText(String),

    #[error("block element '{0}' has no children")]
    EmptyBlock(String),

    #[error("raw body of block element '{0}' must start with an unindented line")]
    IndentedRawBody(String),

    #[error("paragraph has no children")]
    EmptyParagraph,
}

/// Failure reported by a walker handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("handler '{key}' failed: {message}")]
    Handler { key: String, message: String },
}

impl WalkError {
    pub fn handler(key: impl Into<String>, message: impl Into<String>) -> Self {
        WalkError::Handler {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// A fixture document that does not describe runnable test cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("fixture file does not parse: {0}")]
    Parse(#[from] ParseError),

    #[error("test #{index} has no name")]
    MissingName { index: usize },

    #[error("test '{name}' has no raw @input* block")]
    MissingInput { name: String },

    #[error("test '{name}' needs exactly one raw @output* or @error* block")]
    MissingExpectation { name: String },
}
