//! # Query Engine
//!
//! Path lookups over a tree. A path is a whitespace-separated list of
//! selectors; each selector is an element name or one of the structural
//! wildcards `<Text>`, `<Paragraph>`, `<BlockElement>`, `<InlineElement>`.

use crate::model::{Document, Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'p> {
    Name(&'p str),
    Kind(NodeKind),
}

impl<'p> Selector<'p> {
    pub fn parse(segment: &'p str) -> Self {
        let kind = match segment {
            "<Text>" => Some(NodeKind::Text),
            "<Paragraph>" => Some(NodeKind::Paragraph),
            "<BlockElement>" => Some(NodeKind::BlockElement),
            "<InlineElement>" => Some(NodeKind::InlineElement),
            _ => None,
        };
        kind.map_or(Selector::Name(segment), Selector::Kind)
    }

    pub fn matches(&self, node: &Node<'_>) -> bool {
        match self {
            Selector::Name(name) => node.name() == Some(*name),
            Selector::Kind(kind) => node.kind() == *kind,
        }
    }
}

fn selectors(path: &str) -> Vec<Selector<'_>> {
    path.split_whitespace().map(Selector::parse).collect()
}

/// Follows `path` one level per selector, taking the first matching child
/// each time.
fn query_in<'a>(mut nodes: Vec<Node<'a>>, path: &str) -> Option<Node<'a>> {
    let path = selectors(path);
    let mut found = None;
    for selector in &path {
        let node = nodes.into_iter().find(|n| selector.matches(n))?;
        nodes = node.children();
        found = Some(node);
    }
    found
}

/// Collects every node reached by `path` in document order.
///
/// A node that matches the next selector consumes it; the search continues
/// below every node, matched or not, so `title` finds titles at any depth
/// and `doc title` finds titles anywhere under any `doc`.
fn query_all_in<'a>(nodes: Vec<Node<'a>>, path: &str) -> Vec<Node<'a>> {
    let path = selectors(path);
    let mut out = vec![];
    if !path.is_empty() {
        collect(nodes, &path, &mut out);
    }
    out
}

fn collect<'a>(nodes: Vec<Node<'a>>, path: &[Selector<'_>], out: &mut Vec<Node<'a>>) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    for node in nodes {
        if first.matches(&node) {
            if rest.is_empty() {
                out.push(node);
                collect(node.children(), path, out);
            } else {
                collect(node.children(), rest, out);
            }
        } else {
            collect(node.children(), path, out);
        }
    }
}

impl Document {
    /// First node reached by `path` from the top level, or `None`.
    pub fn query(&self, path: &str) -> Option<Node<'_>> {
        query_in(self.nodes(), path)
    }

    pub fn query_all(&self, path: &str) -> Vec<Node<'_>> {
        query_all_in(self.nodes(), path)
    }
}

impl<'a> Node<'a> {
    /// Like [`Document::query`], starting from this node's children.
    pub fn query(&self, path: &str) -> Option<Node<'a>> {
        query_in(self.children(), path)
    }

    pub fn query_all(&self, path: &str) -> Vec<Node<'a>> {
        query_all_in(self.children(), path)
    }
}
