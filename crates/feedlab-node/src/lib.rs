//! Binary-link node container for feedlab.
//!
//! A [`Node`] holds a value and two owned links. The stack threads its
//! elements through `left`; the search trees use both links as children.
//! Links are exclusively owned, so no node is shared and cycles cannot form.

use serde::Serialize;

/// Owned link to the next node, or `None` at the end of a chain.
pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// A boxed node with both links empty.
    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Tear down a chain or tree without recursion.
///
/// The default `Drop` of nested boxes recurses once per level, which
/// overflows the thread stack on long chains.
pub fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// Number of nodes reachable from `link` through either child.
pub fn count<T>(link: &Link<T>) -> usize {
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    let mut seen = 0;
    while let Some(node) = pending.pop() {
        seen += 1;
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }
    seen
}
