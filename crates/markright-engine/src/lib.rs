//! # markright
//!
//! An indentation-sensitive markup notation built from one construct, the
//! `@name(args)[body]` element. Source text is parsed into a typed tree
//! ([`model`]), which can be walked into arbitrary values ([`walk`]),
//! printed back to canonical text ([`print`]) or searched ([`query`]).
//!
//! ```
//! use markright_engine::{parse, print};
//!
//! let doc = parse("@doc\n  Hello @em{world}\n").unwrap();
//! assert_eq!(doc.query("doc").unwrap().inner_text(), "Hello world");
//! assert_eq!(print(&doc).unwrap(), "@doc\n  Hello @em[world]\n");
//! ```

pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod model;
pub mod parsing;
pub mod print;
pub mod query;
pub mod snapshot;
pub mod walk;

pub use error::{FixtureError, ParseError, PrintError, WalkError};
pub use model::{
    Args, BlockElement, BlockItem, Children, Document, InlineElement, InlineItem, Node, NodeKind,
    Paragraph, Text,
};
pub use parsing::parse;
pub use print::print;
pub use query::Selector;
pub use walk::{Fragment, HandlerMap, Value, WalkResult, walk, walk_node};
