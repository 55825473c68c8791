use crate::{error::ParseError, model::Args};

use super::{
    cursor::Cursor,
    kinds::{self, ARGS_CLOSE, ARGS_OPEN, ARGS_SEPARATOR, MARKER, RAW_SUFFIX},
};

/// The part of an element before its body: `@name*(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    /// Name with the raw suffix already stripped.
    pub name: String,
    pub args: Args,
    pub is_raw: bool,
}

/// Parses an element head at the cursor, which must sit on the marker.
///
/// The name runs until a marker, space or bracket. An argument list is only
/// recognised when `(` follows the name immediately; its entries are split on
/// commas and trimmed, so `@cmd()` yields one empty argument.
pub fn parse_head(cur: &mut Cursor<'_>) -> Result<Head, ParseError> {
    debug_assert_eq!(cur.peek(), Some(MARKER));
    let at = cur.clone();
    cur.bump();

    let written = cur.take_while(|b| !kinds::ends_name(b));
    let (name, is_raw) = match written.strip_suffix(RAW_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (written, false),
    };
    if name.is_empty() {
        return Err(at.empty_name());
    }

    let args = if cur.peek() == Some(ARGS_OPEN) {
        Some(parse_args(cur)?)
    } else {
        None
    };

    Ok(Head {
        name: name.to_string(),
        args,
        is_raw,
    })
}

fn parse_args(cur: &mut Cursor<'_>) -> Result<Vec<String>, ParseError> {
    let open = cur.clone();
    cur.bump();
    let close = cur
        .rest()
        .bytes()
        .position(|b| b == ARGS_CLOSE)
        .map(|off| cur.i + off)
        .ok_or_else(|| open.unclosed_arguments())?;
    let list = &cur.s[cur.i..close];
    cur.bump_n(close - cur.i + 1);
    Ok(list
        .split(char::from(ARGS_SEPARATOR))
        .map(|arg| arg.trim().to_string())
        .collect())
}
