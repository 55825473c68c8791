//! # Walker
//!
//! Turns a [`Document`] into caller-defined values by dispatching every node
//! to a [`HandlerMap`]. Children are always walked before their parent's
//! handler runs, left to right, and nothing is skipped or reordered.
//!
//! Dispatch per node:
//! - text: the `text` handler, else the string itself
//! - element: the handler for its exact name `(args, children)`, else the
//!   generic block or inline handler `(name, args, children)`, else a
//!   warning and the element's untransformed children
//! - paragraph: the `paragraph` handler over the walked items, else the
//!   items trimmed and joined with single spaces when all of them are
//!   strings, else the walked items as a list
//! - item lists: the `block-children` or `inline-children` handler, else a
//!   list

pub mod handlers;

use crate::model::{
    BlockElement, BlockItem, Children, Document, InlineElement, InlineItem, NodeKind, Paragraph,
    node::Node,
};

pub use handlers::{HandlerMap, Reserved, Resolution, WalkResult};

/// Untransformed children handed back when an element has no handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Inline(Vec<InlineItem>),
    Block(Vec<BlockItem>),
}

impl Fragment {
    pub fn inner_text(&self) -> String {
        match self {
            Fragment::Inline(items) => crate::model::node::join_inline_text(items),
            Fragment::Block(items) => crate::model::node::join_block_text(items),
        }
    }
}

/// What a walk produces for a node.
///
/// `Custom` carries whatever the handlers build; the other variants are
/// produced by the walker's own defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Str(String),
    List(Vec<Value<T>>),
    Tree(Fragment),
    Custom(T),
}

impl<T> Value<T> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// All strings in the value concatenated; untransformed fragments
    /// contribute their inner text and custom values nothing.
    pub fn text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::List(items) => items.iter().map(Value::text).collect(),
            Value::Tree(fragment) => fragment.inner_text(),
            Value::Custom(_) => String::new(),
        }
    }

    /// Like [`Value::text`], but list entries are joined with `sep`.
    pub fn join(&self, sep: &str) -> String {
        match self {
            Value::List(items) => items
                .iter()
                .map(|item| item.join(sep))
                .collect::<Vec<_>>()
                .join(sep),
            other => other.text(),
        }
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Walks a whole document. The result is the walked top-level item list,
/// after the `block-children` handler if one is registered.
pub fn walk<T>(doc: &Document, handlers: &HandlerMap<T>) -> WalkResult<T> {
    Walker { handlers }.walk_block_items(&doc.children)
}

/// Walks a single node, dispatching exactly as a full walk would.
pub fn walk_node<T>(node: Node<'_>, handlers: &HandlerMap<T>) -> WalkResult<T> {
    let walker = Walker { handlers };
    match node {
        Node::Text(t) => walker.walk_text(&t.text),
        Node::Paragraph(p) => walker.walk_paragraph(p),
        Node::BlockElement(el) => walker.walk_block_element(el),
        Node::InlineElement(el) => walker.walk_inline_element(el),
    }
}

struct Walker<'h, T> {
    handlers: &'h HandlerMap<T>,
}

impl<T> Walker<'_, T> {
    fn walk_text(&self, text: &str) -> WalkResult<T> {
        match self.handlers.text_fn() {
            Some(f) => f(text),
            None => Ok(Value::Str(text.to_string())),
        }
    }

    fn walk_inline_element(&self, el: &InlineElement) -> WalkResult<T> {
        let children = match &el.children {
            Children::Raw(raw) => Value::Str(raw.clone()),
            Children::Items(items) => self.walk_inline_items(items)?,
        };
        self.dispatch(
            &el.name,
            el.args.as_deref(),
            NodeKind::InlineElement,
            children,
            || match &el.children {
                Children::Raw(raw) => Value::Str(raw.clone()),
                Children::Items(items) => Value::Tree(Fragment::Inline(items.clone())),
            },
        )
    }

    fn walk_block_element(&self, el: &BlockElement) -> WalkResult<T> {
        let children = match &el.children {
            Children::Raw(raw) => Value::Str(raw.clone()),
            Children::Items(items) => self.walk_block_items(items)?,
        };
        self.dispatch(
            &el.name,
            el.args.as_deref(),
            NodeKind::BlockElement,
            children,
            || match &el.children {
                Children::Raw(raw) => Value::Str(raw.clone()),
                Children::Items(items) => Value::Tree(Fragment::Block(items.clone())),
            },
        )
    }

    /// `untransformed` builds the pass-through value and is only called when
    /// no handler takes the element.
    fn dispatch(
        &self,
        name: &str,
        args: Option<&[String]>,
        kind: NodeKind,
        children: Value<T>,
        untransformed: impl FnOnce() -> Value<T>,
    ) -> WalkResult<T> {
        match self.handlers.resolve(name, kind) {
            Resolution::Named => match self.handlers.named(name) {
                Some(f) => f(args, children),
                None => Ok(untransformed()),
            },
            Resolution::Generic(key) => match self.handlers.generic_fn(key) {
                Some(f) => f(name, args, children),
                None => Ok(untransformed()),
            },
            Resolution::Missing => {
                log::warn!("no handler for {kind} '{name}', passing its children through");
                Ok(untransformed())
            }
        }
    }

    fn walk_paragraph(&self, paragraph: &Paragraph) -> WalkResult<T> {
        let items = paragraph
            .children
            .iter()
            .map(|item| self.walk_inline_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(f) = self.handlers.paragraph_fn() {
            return f(items);
        }
        if items.iter().all(Value::is_str) {
            let words: Vec<&str> = items.iter().filter_map(Value::as_str).map(str::trim).collect();
            return Ok(Value::Str(words.join(" ")));
        }
        Ok(Value::List(items))
    }

    fn walk_inline_item(&self, item: &InlineItem) -> WalkResult<T> {
        match item {
            InlineItem::Text(t) => self.walk_text(&t.text),
            InlineItem::Element(el) => self.walk_inline_element(el),
        }
    }

    fn walk_inline_items(&self, items: &[InlineItem]) -> WalkResult<T> {
        let walked = items
            .iter()
            .map(|item| self.walk_inline_item(item))
            .collect::<Result<Vec<_>, _>>()?;
        self.post_process(Reserved::InlineChildren, walked)
    }

    fn walk_block_items(&self, items: &[BlockItem]) -> WalkResult<T> {
        let walked = items
            .iter()
            .map(|item| match item {
                BlockItem::Paragraph(p) => self.walk_paragraph(p),
                BlockItem::Element(el) => self.walk_block_element(el),
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.post_process(Reserved::BlockChildren, walked)
    }

    fn post_process(&self, key: Reserved, walked: Vec<Value<T>>) -> WalkResult<T> {
        match self.handlers.children_fn(key) {
            Some(f) => f(walked),
            None => Ok(Value::List(walked)),
        }
    }
}
