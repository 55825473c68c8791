use std::fmt;

use super::{BlockElement, BlockItem, Children, InlineElement, InlineItem, Paragraph, Text};

/// Structural category of a node, independent of element names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Paragraph,
    BlockElement,
    InlineElement,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Text => "Text",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::BlockElement => "BlockElement",
            NodeKind::InlineElement => "InlineElement",
        };
        f.write_str(name)
    }
}

/// A borrowed view of any non-root node, used by the query engine and by
/// consumers that need to treat block and inline nodes uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Text(&'a Text),
    Paragraph(&'a Paragraph),
    BlockElement(&'a BlockElement),
    InlineElement(&'a InlineElement),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::BlockElement(_) => NodeKind::BlockElement,
            Node::InlineElement(_) => NodeKind::InlineElement,
        }
    }

    /// Element name; `None` for text and paragraphs.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Node::BlockElement(el) => Some(&el.name),
            Node::InlineElement(el) => Some(&el.name),
            Node::Text(_) | Node::Paragraph(_) => None,
        }
    }

    pub fn args(&self) -> Option<&'a [String]> {
        match self {
            Node::BlockElement(el) => el.args.as_deref(),
            Node::InlineElement(el) => el.args.as_deref(),
            Node::Text(_) | Node::Paragraph(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::BlockElement(_) | Node::InlineElement(_))
    }

    /// The literal body of a raw element.
    pub fn raw(&self) -> Option<&'a str> {
        match self {
            Node::BlockElement(el) => el.children.raw(),
            Node::InlineElement(el) => el.children.raw(),
            Node::Text(_) | Node::Paragraph(_) => None,
        }
    }

    /// Direct structural children. Raw bodies and text have none.
    pub fn children(&self) -> Vec<Node<'a>> {
        match self {
            Node::Text(_) => vec![],
            Node::Paragraph(p) => p.children.iter().map(Node::from).collect(),
            Node::BlockElement(el) => match &el.children {
                Children::Items(items) => items.iter().map(Node::from).collect(),
                Children::Raw(_) => vec![],
            },
            Node::InlineElement(el) => match &el.children {
                Children::Items(items) => items.iter().map(Node::from).collect(),
                Children::Raw(_) => vec![],
            },
        }
    }

    /// Plain text content of the node.
    ///
    /// Texts are concatenated as written, except that a text directly
    /// following another text is separated by a space (they came from
    /// separate source lines). Block items are joined with newlines and raw
    /// bodies are returned verbatim.
    pub fn inner_text(&self) -> String {
        match self {
            Node::Text(t) => t.text.clone(),
            Node::Paragraph(p) => join_inline_text(&p.children),
            Node::BlockElement(el) => match &el.children {
                Children::Items(items) => join_block_text(items),
                Children::Raw(raw) => raw.clone(),
            },
            Node::InlineElement(el) => match &el.children {
                Children::Items(items) => join_inline_text(items),
                Children::Raw(raw) => raw.clone(),
            },
        }
    }
}

pub(crate) fn join_inline_text(items: &[InlineItem]) -> String {
    let mut out = String::new();
    let mut prev_text = false;
    for item in items {
        match item {
            InlineItem::Text(t) => {
                if prev_text {
                    out.push(' ');
                }
                out.push_str(&t.text);
                prev_text = true;
            }
            InlineItem::Element(_) => {
                out.push_str(&Node::from(item).inner_text());
                prev_text = false;
            }
        }
    }
    out
}

pub(crate) fn join_block_text(items: &[BlockItem]) -> String {
    items
        .iter()
        .map(|item| Node::from(item).inner_text())
        .collect::<Vec<_>>()
        .join("\n")
}

impl<'a> From<&'a InlineItem> for Node<'a> {
    fn from(item: &'a InlineItem) -> Self {
        match item {
            InlineItem::Text(t) => Node::Text(t),
            InlineItem::Element(el) => Node::InlineElement(el),
        }
    }
}

impl<'a> From<&'a BlockItem> for Node<'a> {
    fn from(item: &'a BlockItem) -> Self {
        match item {
            BlockItem::Paragraph(p) => Node::Paragraph(p),
            BlockItem::Element(el) => Node::BlockElement(el),
        }
    }
}
