//! An unbalanced Binary Search Tree. Values go wherever the ordering sends them so inserting
//! sorted input produces a tree as tall as it is large.
//!
//! The recursive insert and delete here also drive the [AVL tree][crate::avl::Tree]: both take
//! a [`Rebalance`] hook which runs at every node on the way back up from the change. This tree
//! passes a hook that leaves nodes alone.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{bst::Tree, SearchTree};
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Ascending input makes a tree with one node per level.
//! let tree = tree.insert(1).insert(2).insert(3);
//! assert_eq!(tree.height(), 3);
//!
//! // Delete it for good measure.
//! let tree = tree.delete(&2);
//! assert_eq!(tree.inorder(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::node::{Branch, Node};
use crate::tree::SearchTree;

/// Runs on a node right after one of its subtrees has changed and returns the node that should
/// take its place.
pub(crate) type Rebalance<T> = fn(Node<T>) -> Node<T>;

/// A Binary Search Tree that never rebalances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Node::new() }
    }
}

impl<T: Ord> SearchTree<T> for Tree<T> {
    fn root(&self) -> &Node<T> {
        &self.root
    }

    fn insert(self, value: T) -> Self {
        Self {
            root: insert(self.root, value, unbalanced),
        }
    }

    fn delete(self, value: &T) -> Self {
        Self {
            root: delete(self.root, value, unbalanced),
        }
    }
}

fn unbalanced<T>(node: Node<T>) -> Node<T> {
    node
}

/// Inserts `value` below `node`, running `rebalance` on every node whose subtree grew.
pub(crate) fn insert<T: Ord>(node: Node<T>, value: T, rebalance: Rebalance<T>) -> Node<T> {
    let mut branch = match node {
        Node::Empty => return Node::leaf(value),
        Node::Branch(b) => b,
    };

    match value.cmp(&branch.value) {
        Ordering::Less => {
            let left = mem::take(&mut *branch.left);
            *branch.left = insert(left, value, rebalance);
        }
        Ordering::Equal => return Node::Branch(branch),
        Ordering::Greater => {
            let right = mem::take(&mut *branch.right);
            *branch.right = insert(right, value, rebalance);
        }
    }

    branch.fix_height();
    rebalance(Node::Branch(branch))
}

/// Deletes `value` from below `node`, running `rebalance` on every node on the path to the
/// change.
///
/// A node with two children is never removed itself. Its value is overwritten by a replacement
/// taken from the taller subtree (the left one on a tie): the largest value on the left or the
/// smallest on the right. The node holding the replacement is the one that gets removed.
pub(crate) fn delete<T: Ord>(node: Node<T>, value: &T, rebalance: Rebalance<T>) -> Node<T> {
    let mut branch = match node {
        Node::Empty => return Node::Empty,
        Node::Branch(b) => b,
    };

    match value.cmp(&branch.value) {
        Ordering::Less => {
            let left = mem::take(&mut *branch.left);
            *branch.left = delete(left, value, rebalance);
        }
        Ordering::Greater => {
            let right = mem::take(&mut *branch.right);
            *branch.right = delete(right, value, rebalance);
        }
        Ordering::Equal => {
            let left = mem::take(&mut *branch.left);
            let right = mem::take(&mut *branch.right);
            match (left, right) {
                (Node::Empty, Node::Empty) => return Node::Empty,
                (Node::Empty, child) | (child, Node::Empty) => return child,
                (Node::Branch(left), Node::Branch(right)) => {
                    if left.height >= right.height {
                        let (replacement, left) = remove_max(left, rebalance);
                        branch.value = replacement;
                        *branch.left = left;
                        *branch.right = Node::Branch(right);
                    } else {
                        let (replacement, right) = remove_min(right, rebalance);
                        branch.value = replacement;
                        *branch.left = Node::Branch(left);
                        *branch.right = right;
                    }
                }
            }
        }
    }

    branch.fix_height();
    rebalance(Node::Branch(branch))
}

/// Returns the largest value below `branch` and the subtree without it.
fn remove_max<T>(mut branch: Branch<T>, rebalance: Rebalance<T>) -> (T, Node<T>) {
    match mem::take(&mut *branch.right) {
        Node::Empty => (branch.value, *branch.left),
        Node::Branch(right) => {
            let (max, right) = remove_max(right, rebalance);
            *branch.right = right;
            branch.fix_height();
            (max, rebalance(Node::Branch(branch)))
        }
    }
}

/// Returns the smallest value below `branch` and the subtree without it.
fn remove_min<T>(mut branch: Branch<T>, rebalance: Rebalance<T>) -> (T, Node<T>) {
    match mem::take(&mut *branch.left) {
        Node::Empty => (branch.value, *branch.right),
        Node::Branch(left) => {
            let (min, left) = remove_min(left, rebalance);
            *branch.left = left;
            branch.fix_height();
            (min, rebalance(Node::Branch(branch)))
        }
    }
}
