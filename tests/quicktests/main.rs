#[macro_use]
extern crate quickcheck_macros;

mod avl;
mod bst;

use avl_bst::{Node, SearchTree};
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Delete the T from the tree
    Delete(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Applies one operation to a tree and returns the tree to keep using.
pub(crate) fn apply<S, T>(tree: S, op: &Op<T>) -> S
where
    S: SearchTree<T>,
    T: Ord + Clone,
{
    match op {
        Op::Insert(x) => tree.insert(x.clone()),
        Op::Delete(x) => tree.delete(x),
    }
}

/// Whether the in-order walk of the tree is strictly increasing.
pub(crate) fn is_ordered<T: Ord>(root: &Node<T>) -> bool {
    root.inorder().windows(2).all(|w| w[0] < w[1])
}

/// Whether the padded level order has one slot per node of a perfect tree of the same height.
pub(crate) fn is_padded<T>(root: &Node<T>) -> bool {
    root.level_order_padded().len() == (1usize << root.height()) - 1
}
