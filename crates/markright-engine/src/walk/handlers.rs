use std::{collections::HashMap, fmt};

use crate::{error::WalkError, model::NodeKind};

use super::Value;

pub type WalkResult<T> = Result<Value<T>, WalkError>;

/// Handler for one element name: `(args, children)`.
pub type ElementFn<T> = Box<dyn Fn(Option<&[String]>, Value<T>) -> WalkResult<T>>;
/// Fallback for any block or inline element: `(name, args, children)`.
pub type GenericFn<T> = Box<dyn Fn(&str, Option<&[String]>, Value<T>) -> WalkResult<T>>;
pub type TextFn<T> = Box<dyn Fn(&str) -> WalkResult<T>>;
/// Receives an already walked sequence: paragraph items, or block / inline
/// children lists.
pub type SequenceFn<T> = Box<dyn Fn(Vec<Value<T>>) -> WalkResult<T>>;

/// The fixed set of fallback keys a handler map can fill besides element
/// names. They live apart from element names, so an element called `text`
/// never clashes with the text handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    Text,
    Paragraph,
    BlockElement,
    InlineElement,
    BlockChildren,
    InlineChildren,
}

impl Reserved {
    pub const ALL: [Reserved; 6] = [
        Reserved::Text,
        Reserved::Paragraph,
        Reserved::BlockElement,
        Reserved::InlineElement,
        Reserved::BlockChildren,
        Reserved::InlineChildren,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Reserved::Text => "text",
            Reserved::Paragraph => "paragraph",
            Reserved::BlockElement => "block-element",
            Reserved::InlineElement => "inline-element",
            Reserved::BlockChildren => "block-children",
            Reserved::InlineChildren => "inline-children",
        }
    }

    /// The generic element key for an element of the given kind.
    pub fn generic_for(kind: NodeKind) -> Option<Reserved> {
        match kind {
            NodeKind::BlockElement => Some(Reserved::BlockElement),
            NodeKind::InlineElement => Some(Reserved::InlineElement),
            NodeKind::Text | NodeKind::Paragraph => None,
        }
    }
}

impl fmt::Display for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an element will be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A handler registered under the element's exact name.
    Named,
    /// The generic block or inline element handler.
    Generic(Reserved),
    /// Nothing registered; children pass through untransformed.
    Missing,
}

/// Caller-supplied transformations, keyed by element name or by a
/// [`Reserved`] fallback key. Every entry is optional.
///
/// ```
/// use markright_engine::walk::{HandlerMap, Value};
///
/// let handlers: HandlerMap<()> = HandlerMap::new()
///     .element("em", |_args, children| Ok(Value::Str(format!("*{}*", children.text()))))
///     .text(|text| Ok(Value::Str(text.to_uppercase())));
/// assert!(handlers.has_element("em"));
/// ```
pub struct HandlerMap<T> {
    named: HashMap<String, ElementFn<T>>,
    text: Option<TextFn<T>>,
    paragraph: Option<SequenceFn<T>>,
    block_element: Option<GenericFn<T>>,
    inline_element: Option<GenericFn<T>>,
    block_children: Option<SequenceFn<T>>,
    inline_children: Option<SequenceFn<T>>,
}

impl<T> Default for HandlerMap<T> {
    fn default() -> Self {
        Self {
            named: HashMap::new(),
            text: None,
            paragraph: None,
            block_element: None,
            inline_element: None,
            block_children: None,
            inline_children: None,
        }
    }
}

impl<T> HandlerMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(
        mut self,
        name: impl Into<String>,
        f: impl Fn(Option<&[String]>, Value<T>) -> WalkResult<T> + 'static,
    ) -> Self {
        self.named.insert(name.into(), Box::new(f));
        self
    }

    pub fn text(mut self, f: impl Fn(&str) -> WalkResult<T> + 'static) -> Self {
        self.text = Some(Box::new(f));
        self
    }

    pub fn paragraph(mut self, f: impl Fn(Vec<Value<T>>) -> WalkResult<T> + 'static) -> Self {
        self.paragraph = Some(Box::new(f));
        self
    }

    pub fn generic_block(
        mut self,
        f: impl Fn(&str, Option<&[String]>, Value<T>) -> WalkResult<T> + 'static,
    ) -> Self {
        self.block_element = Some(Box::new(f));
        self
    }

    pub fn generic_inline(
        mut self,
        f: impl Fn(&str, Option<&[String]>, Value<T>) -> WalkResult<T> + 'static,
    ) -> Self {
        self.inline_element = Some(Box::new(f));
        self
    }

    pub fn block_children(
        mut self,
        f: impl Fn(Vec<Value<T>>) -> WalkResult<T> + 'static,
    ) -> Self {
        self.block_children = Some(Box::new(f));
        self
    }

    pub fn inline_children(
        mut self,
        f: impl Fn(Vec<Value<T>>) -> WalkResult<T> + 'static,
    ) -> Self {
        self.inline_children = Some(Box::new(f));
        self
    }

    pub fn has_element(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub fn has(&self, key: Reserved) -> bool {
        match key {
            Reserved::Text => self.text.is_some(),
            Reserved::Paragraph => self.paragraph.is_some(),
            Reserved::BlockElement => self.block_element.is_some(),
            Reserved::InlineElement => self.inline_element.is_some(),
            Reserved::BlockChildren => self.block_children.is_some(),
            Reserved::InlineChildren => self.inline_children.is_some(),
        }
    }

    /// Exact name first, then the generic handler for the element's kind.
    pub fn resolve(&self, name: &str, kind: NodeKind) -> Resolution {
        if self.has_element(name) {
            return Resolution::Named;
        }
        match Reserved::generic_for(kind) {
            Some(key) if self.has(key) => Resolution::Generic(key),
            _ => Resolution::Missing,
        }
    }

    pub(super) fn named(&self, name: &str) -> Option<&ElementFn<T>> {
        self.named.get(name)
    }

    pub(super) fn text_fn(&self) -> Option<&TextFn<T>> {
        self.text.as_ref()
    }

    pub(super) fn paragraph_fn(&self) -> Option<&SequenceFn<T>> {
        self.paragraph.as_ref()
    }

    pub(super) fn generic_fn(&self, key: Reserved) -> Option<&GenericFn<T>> {
        match key {
            Reserved::BlockElement => self.block_element.as_ref(),
            Reserved::InlineElement => self.inline_element.as_ref(),
            _ => None,
        }
    }

    pub(super) fn children_fn(&self, key: Reserved) -> Option<&SequenceFn<T>> {
        match key {
            Reserved::BlockChildren => self.block_children.as_ref(),
            Reserved::InlineChildren => self.inline_children.as_ref(),
            _ => None,
        }
    }
}

impl<T> fmt::Debug for HandlerMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.named.keys().map(String::as_str).collect();
        names.sort_unstable();
        let reserved: Vec<&str> = Reserved::ALL
            .into_iter()
            .filter(|key| self.has(*key))
            .map(Reserved::as_str)
            .collect();
        f.debug_struct("HandlerMap")
            .field("elements", &names)
            .field("reserved", &reserved)
            .finish()
    }
}
