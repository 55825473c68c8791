/// One logical source line with its indentation split off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source.
    pub number: usize,
    /// Count of leading spaces. Always 0 for blank lines.
    pub indent: usize,
    /// Line content after the indentation, without the line terminator.
    pub text: &'a str,
}

impl Line<'_> {
    /// Empty and whitespace-only lines never carry indentation meaning.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits a document into lines annotated with their indentation depth.
///
/// A trailing newline does not produce an empty final line, a trailing
/// `\r` is dropped, and lines made only of spaces come back as blank
/// depth-0 lines.
pub fn scan_lines(source: &str) -> Vec<Line<'_>> {
    let body = source.strip_suffix('\n').unwrap_or(source);
    if source.is_empty() {
        return vec![];
    }
    body.split('\n')
        .enumerate()
        .map(|(idx, raw)| classify(idx + 1, raw.strip_suffix('\r').unwrap_or(raw)))
        .collect()
}

fn classify(number: usize, raw: &str) -> Line<'_> {
    let text = raw.trim_start_matches(' ');
    if text.is_empty() {
        return Line {
            number,
            indent: 0,
            text: "",
        };
    }
    Line {
        number,
        indent: raw.len() - text.len(),
        text,
    }
}
