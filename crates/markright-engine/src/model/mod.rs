//! # Tree Model
//!
//! The typed tree produced by [`crate::parse`]. Every node is owned by its
//! parent, trees are acyclic, and nothing mutates a tree once the parser
//! has returned it.
//!
//! ## Containment
//!
//! - [`Document`] holds [`BlockItem`]s
//! - [`BlockElement`] holds [`BlockItem`]s or a raw string
//! - [`Paragraph`] holds [`InlineItem`]s
//! - [`InlineElement`] holds [`InlineItem`]s or a raw string
//!
//! Structural and raw children are variants of [`Children`], so a node can
//! never carry both.

pub mod node;

use serde::Serialize;

pub use node::{Node, NodeKind};

/// Element arguments. `None` means no parenthesized list was written;
/// `Some(vec![])` can only be built by hand.
pub type Args = Option<Vec<String>>;

/// The body of an element: parsed items, or a literal string for raw
/// elements (names written with the `*` suffix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Children<T> {
    Items(Vec<T>),
    Raw(String),
}

impl<T> Children<T> {
    pub fn is_raw(&self) -> bool {
        matches!(self, Children::Raw(_))
    }

    /// Structural items, or `None` for raw children.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Children::Items(items) => Some(items),
            Children::Raw(_) => None,
        }
    }

    /// The literal body of a raw element.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Children::Items(_) => None,
            Children::Raw(text) => Some(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Children::Items(items) => items.is_empty(),
            Children::Raw(text) => text.is_empty(),
        }
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Children::Items(vec![])
    }
}

/// A run of plain text inside a paragraph or inline body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// An element written inside a line, e.g. `@em[word]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineElement {
    pub name: String,
    pub args: Args,
    pub children: Children<InlineItem>,
}

impl InlineElement {
    pub fn new(name: impl Into<String>, args: Args, children: Vec<InlineItem>) -> Self {
        Self {
            name: name.into(),
            args,
            children: Children::Items(children),
        }
    }

    pub fn raw(name: impl Into<String>, args: Args, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args,
            children: Children::Raw(body.into()),
        }
    }

    pub fn is_raw(&self) -> bool {
        self.children.is_raw()
    }
}

/// An element whose head sits on its own line with its body indented below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockElement {
    pub name: String,
    pub args: Args,
    pub children: Children<BlockItem>,
}

impl BlockElement {
    pub fn new(name: impl Into<String>, args: Args, children: Vec<BlockItem>) -> Self {
        Self {
            name: name.into(),
            args,
            children: Children::Items(children),
        }
    }

    pub fn raw(name: impl Into<String>, args: Args, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args,
            children: Children::Raw(body.into()),
        }
    }

    pub fn is_raw(&self) -> bool {
        self.children.is_raw()
    }
}

/// Contiguous inline content at one indentation level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub children: Vec<InlineItem>,
}

impl Paragraph {
    pub fn new(children: Vec<InlineItem>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineItem {
    Text(Text),
    Element(InlineElement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockItem {
    Paragraph(Paragraph),
    Element(BlockElement),
}

impl From<Text> for InlineItem {
    fn from(text: Text) -> Self {
        InlineItem::Text(text)
    }
}

impl From<InlineElement> for InlineItem {
    fn from(element: InlineElement) -> Self {
        InlineItem::Element(element)
    }
}

impl From<Paragraph> for BlockItem {
    fn from(paragraph: Paragraph) -> Self {
        BlockItem::Paragraph(paragraph)
    }
}

impl From<BlockElement> for BlockItem {
    fn from(element: BlockElement) -> Self {
        BlockItem::Element(element)
    }
}

/// The root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub children: Vec<BlockItem>,
}

impl Document {
    pub fn new(children: Vec<BlockItem>) -> Self {
        Self { children }
    }

    /// Top-level items as [`Node`] references.
    pub fn nodes(&self) -> Vec<Node<'_>> {
        self.children.iter().map(Node::from).collect()
    }

    /// Text content of the whole document, see [`Node::inner_text`].
    pub fn inner_text(&self) -> String {
        node::join_block_text(&self.children)
    }
}
