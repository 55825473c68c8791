pub mod blocks;
pub mod cursor;
pub mod head;
pub mod inline;
pub mod kinds;
pub mod lines;

#[cfg(test)]
mod tests;

use crate::{error::ParseError, model::Document};

use blocks::BlockParser;
use lines::scan_lines;

/// Parses a whole document.
///
/// Fails on the first malformed construct; no partial tree is returned.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let lines = scan_lines(source);
    log::debug!("parsing {} lines", lines.len());
    let children = BlockParser::new(lines).parse_items(0)?;
    Ok(Document::new(children))
}
