//! A self-balancing Binary Search Tree (specifically, an AVL tree). After every insert or
//! delete each node on the path back to the root is checked and, if the heights of its
//! subtrees differ by more than one, rotated back into balance. This keeps the height of the
//! tree in `O(lg N)` no matter what order values arrive in.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{avl::Tree, SearchTree};
//!
//! // Ascending input is the worst case for an unbalanced tree.
//! let tree = (1..=7).fold(Tree::new(), |tree, x| tree.insert(x));
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.preorder(), [&4, &2, &1, &3, &6, &5, &7]);
//! ```

use std::mem;

use log::trace;

use crate::bst;
use crate::node::Node;
use crate::tree::SearchTree;

/// A Binary Search Tree that keeps the heights of every node's subtrees within one of each
/// other.
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
            root: bst::insert(self.root, value, rebalance),
        }
    }

    fn delete(self, value: &T) -> Self {
        Self {
            root: bst::delete(self.root, value, rebalance),
        }
    }
}

/// Balances a node using the heights of its children. Expects both children to already be
/// balanced and to differ in height by at most two.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
fn rebalance<T>(node: Node<T>) -> Node<T> {
    let balance_factor = node.balance_factor();
    let balanced = if balance_factor > 1 {
        if node.left().map_or(0, Node::balance_factor) >= 0 {
            trace!("left-heavy node ({balance_factor}), single right rotation");
            rotate_right(node)
        } else {
            trace!("left-heavy node ({balance_factor}), double right rotation");
            rotate_double_right(node)
        }
    } else if balance_factor < -1 {
        if node.right().map_or(0, Node::balance_factor) <= 0 {
            trace!("right-heavy node ({balance_factor}), single left rotation");
            rotate_left(node)
        } else {
            trace!("right-heavy node ({balance_factor}), double left rotation");
            rotate_double_left(node)
        }
    } else {
        node
    };

    debug_assert!(balanced.balance_factor().abs() <= 1);
    balanced
}

/// Rotates the right child up to become the root. The old root becomes the new root's left
/// child and adopts the new root's old left child as its right child. Nodes without a right
/// child are returned as they are.
///
/// # Diagram
///
/// ```text
///   old_root                     new_root
///    /    \                       /    \
///   x   new_root   rotate ->  old_root  z
///        /  \                  /  \
///       y    z                x    y
/// ```
fn rotate_left<T>(node: Node<T>) -> Node<T> {
    let mut old_root = match node {
        Node::Empty => return node,
        Node::Branch(b) => b,
    };
    let mut new_root = match mem::take(&mut *old_root.right) {
        Node::Empty => return Node::Branch(old_root),
        Node::Branch(b) => b,
    };

    *old_root.right = mem::take(&mut *new_root.left);
    old_root.fix_height();

    *new_root.left = Node::Branch(old_root);
    new_root.fix_height();
    Node::Branch(new_root)
}

/// Rotates the left child up to become the root. The mirror image of [`rotate_left`].
///
/// # Diagram
///
/// ```text
///      old_root              new_root
///       /    \                /    \
///   new_root  z   rotate ->  x   old_root
///    /  \                         /  \
///   x    y                       y    z
/// ```
fn rotate_right<T>(node: Node<T>) -> Node<T> {
    let mut old_root = match node {
        Node::Empty => return node,
        Node::Branch(b) => b,
    };
    let mut new_root = match mem::take(&mut *old_root.left) {
        Node::Empty => return Node::Branch(old_root),
        Node::Branch(b) => b,
    };

    *old_root.left = mem::take(&mut *new_root.right);
    old_root.fix_height();

    *new_root.right = Node::Branch(old_root);
    new_root.fix_height();
    Node::Branch(new_root)
}

/// Fixes a left child that leans right by rotating it left, then rotates the node right.
fn rotate_double_right<T>(node: Node<T>) -> Node<T> {
    let mut branch = match node {
        Node::Branch(b) if !b.left.is_empty() => b,
        _ => return node,
    };

    let left = mem::take(&mut *branch.left);
    *branch.left = rotate_left(left);
    branch.fix_height();
    rotate_right(Node::Branch(branch))
}

/// Fixes a right child that leans left by rotating it right, then rotates the node left.
fn rotate_double_left<T>(node: Node<T>) -> Node<T> {
    let mut branch = match node {
        Node::Branch(b) if !b.right.is_empty() => b,
        _ => return node,
    };

    let right = mem::take(&mut *branch.right);
    *branch.right = rotate_right(right);
    branch.fix_height();
    rotate_left(Node::Branch(branch))
}
