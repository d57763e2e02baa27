//! This crate exposes an unbalanced Binary Search Tree (BST) and a self-balancing AVL tree
//! built on top of it, mostly for educational purposes. Both can be inspected and drawn level
//! by level.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. Here those children are the
//! > [`Empty`][Node::Empty] marker rather than a missing pointer.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. That is what the [`avl`] tree does: after every change it rotates
//! subtrees so that no node's subtrees differ in height by more than one. The
//! [`bst`] tree does nothing of the sort and degrades to a list on sorted input.
//!
//! ## Rebinding
//!
//! Both trees own their nodes outright. `insert` and `delete` consume the tree and return the
//! one to use from then on:
//!
//! ```
//! use avl_bst::{avl::Tree, SearchTree};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9, 2] {
//!     tree = tree.insert(x);
//! }
//! tree = tree.delete(&5);
//!
//! assert_eq!(tree.inorder(), [&1, &2, &3, &4, &7, &8, &9]);
//! assert_eq!(tree.level_order_padded().len(), 2usize.pow(tree.height() as u32) - 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod node;
pub mod render;
pub mod shell;
mod tree;

pub use node::{Branch, Node};
pub use tree::SearchTree;
