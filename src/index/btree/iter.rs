//! In-order traversal.

use std::iter::FusedIterator;

use crate::index::btree::Node;

/// In-order iterator over an index's (key, value) pairs.
///
/// Keys come out in ascending order, and equal keys come out in the order
/// they were inserted. Created by [`OrderedIndex::iter`](crate::OrderedIndex::iter).
pub struct Iter<'a, V> {
    /// Path from the root to the current node, with the next key index
    /// to yield at each level.
    stack: Vec<(&'a Node<V>, usize)>,

    /// Pairs not yet yielded.
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost(root);
        iter
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn push_leftmost(&mut self, mut node: &'a Node<V>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            let node = top.0;
            let idx = top.1;

            if idx < node.keys.len() {
                top.1 += 1;
                // Subtree right of this key comes before the next key
                if let Some(child) = node.children.get(idx + 1) {
                    self.push_leftmost(child);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some((node.keys[idx], &node.values[idx]));
            }

            self.stack.pop();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
