//! The surface shared by the [unbalanced][crate::bst::Tree] and [AVL][crate::avl::Tree]
//! trees. Only `insert` and `delete` differ between them; every query is answered by the
//! root [`Node`].

use crate::node::Node;

/// A set of ordered values stored in a binary search tree.
///
/// Operations that change the tree consume it and return the tree to use from then on, since
/// the root itself may be replaced.
pub trait SearchTree<T: Ord>: Default {
    /// The root of the tree.
    fn root(&self) -> &Node<T>;

    /// Returns a tree that also holds `value`. Inserting a value that is already present
    /// returns the tree unchanged.
    fn insert(self, value: T) -> Self;

    /// Returns a tree without `value`. Deleting a value that isn't present returns the tree
    /// unchanged.
    fn delete(self, value: &T) -> Self;

    /// Returns `true` if the tree holds no values.
    fn is_empty(&self) -> bool {
        self.root().is_empty()
    }

    /// Returns `true` if the tree holds `value`.
    fn contains(&self, value: &T) -> bool {
        self.root().contains(value)
    }

    /// How many values are in the tree.
    fn size(&self) -> usize {
        self.root().size()
    }

    /// The longest path from the root to the bottom of the tree, counted in nodes.
    fn height(&self) -> usize {
        self.root().height()
    }

    /// See [`Node::preorder`].
    fn preorder(&self) -> Vec<&T> {
        self.root().preorder()
    }

    /// See [`Node::inorder`].
    fn inorder(&self) -> Vec<&T> {
        self.root().inorder()
    }

    /// See [`Node::postorder`].
    fn postorder(&self) -> Vec<&T> {
        self.root().postorder()
    }

    /// See [`Node::level_order_padded`].
    fn level_order_padded(&self) -> Vec<Option<&T>> {
        self.root().level_order_padded()
    }
}
