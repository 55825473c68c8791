//! # Fixture Runner
//!
//! Parser test cases written in markright itself:
//!
//! ```text
//! @test(nested inline)
//!   @input*
//!     @a[[@b[2]]]
//!   @output*
//!     P
//!       I.a
//!         I.b
//!           "2"
//!
//! @test(odd indentation)
//!   @input*
//!      x
//!   @error*
//!     not a multiple of 2
//! ```
//!
//! `@output*` holds the expected [`repr`] of the parsed input, compared with
//! trailing whitespace ignored. `@error*` holds a fragment of the expected
//! error message.

use crate::{
    error::{FixtureError, ParseError},
    model::Node,
    parse,
    snapshot::repr,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Tree(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    pub name: String,
    pub input: String,
    pub expectation: Expectation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The input parsed, or failed, differently than expected.
    Failed { expected: String, actual: String },
    /// A tree was expected but the input did not parse.
    Errored(ParseError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Extracts every `@test` block of a fixture document, in order.
pub fn load_cases(source: &str) -> Result<Vec<FixtureCase>, FixtureError> {
    let doc = parse(source)?;
    doc.query_all("test")
        .into_iter()
        .enumerate()
        .map(|(index, node)| case_from(index + 1, node))
        .collect()
}

fn case_from(index: usize, node: Node<'_>) -> Result<FixtureCase, FixtureError> {
    let name = node
        .args()
        .and_then(<[String]>::first)
        .filter(|name| !name.is_empty())
        .ok_or(FixtureError::MissingName { index })?
        .clone();

    let input = raw_child(node, "input").ok_or_else(|| FixtureError::MissingInput {
        name: name.clone(),
    })?;
    let expectation = match (raw_child(node, "output"), raw_child(node, "error")) {
        (Some(tree), None) => Expectation::Tree(tree),
        (None, Some(message)) => Expectation::Error(message),
        _ => return Err(FixtureError::MissingExpectation { name }),
    };

    Ok(FixtureCase {
        name,
        input,
        expectation,
    })
}

fn raw_child(node: Node<'_>, name: &str) -> Option<String> {
    node.query(name).and_then(|child| child.raw()).map(str::to_string)
}

impl FixtureCase {
    pub fn run(&self) -> Outcome {
        let parsed = parse(&self.input);
        log::debug!("fixture '{}': {}", self.name, if parsed.is_ok() { "parsed" } else { "failed" });

        match (&self.expectation, parsed) {
            (Expectation::Tree(expected), Ok(doc)) => {
                let actual = repr(&doc);
                if actual.trim_end() == expected.trim_end() {
                    Outcome::Passed
                } else {
                    Outcome::Failed {
                        expected: expected.trim_end().to_string(),
                        actual: actual.trim_end().to_string(),
                    }
                }
            }
            (Expectation::Tree(_), Err(err)) => Outcome::Errored(err),
            (Expectation::Error(fragment), Err(err)) => {
                let message = err.to_string();
                if message.contains(fragment.trim()) {
                    Outcome::Passed
                } else {
                    Outcome::Failed {
                        expected: fragment.trim().to_string(),
                        actual: message,
                    }
                }
            }
            (Expectation::Error(fragment), Ok(doc)) => Outcome::Failed {
                expected: format!("error containing '{}'", fragment.trim()),
                actual: repr(&doc).trim_end().to_string(),
            },
        }
    }
}
