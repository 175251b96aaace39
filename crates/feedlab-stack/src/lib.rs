//! Linked stack for feedlab.
//!
//! The feed snapshot is built by pushing posts in ascending id order and
//! reading the stack back top-first, which yields newest posts first.

use feedlab_node::{Link, Node, dismantle};

/// A LIFO stack threaded through [`Node::left`].
///
/// `len` always equals the number of nodes reachable from the head.
#[derive(Debug)]
pub struct LinkedStack<T> {
    head: Link<T>,
    length: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Pushes an element onto the stack.
    pub fn push(&mut self, value: T) {
        let mut node = Node::leaf(value);
        node.left = self.head.take();
        self.head = Some(node);
        self.length += 1;
    }

    /// Removes and returns the top element from the stack.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.left;
            self.length -= 1;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn clear(&mut self) {
        dismantle(self.head.take());
        self.length = 0;
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Values from the top of the stack down (most recently pushed first).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consume the stack, yielding values top-first.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.length);
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        dismantle(self.head.take());
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.left.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_new() {
        let stack: LinkedStack<i32> = LinkedStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.to_vec().is_empty());
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_pop_empty() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_to_vec_is_most_recent_first() {
        let stack: LinkedStack<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(stack.to_vec(), vec!["c", "b", "a"]);
        // Reading does not consume.
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_peek() {
        let mut stack = LinkedStack::new();
        assert_eq!(stack.peek(), None);
        stack.push(42);
        stack.push(99);
        assert_eq!(stack.peek(), Some(&99));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut stack: LinkedStack<i32> = (0..10).collect();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_into_vec() {
        let mut stack = LinkedStack::new();
        stack.extend([1, 2]);
        assert_eq!(stack.into_vec(), vec![2, 1]);
    }

    #[test]
    fn test_drop_deep_stack() {
        let stack: LinkedStack<usize> = (0..300_000).collect();
        assert_eq!(stack.len(), 300_000);
        drop(stack);
    }
}
