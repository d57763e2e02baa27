//! The structural primitive shared by both trees. A [`Node`] is either the
//! [`Empty`][Node::Empty] marker at the bottom of a subtree or a [`Branch`] holding a value and
//! two children.
//!
//! Everything here is read-only except [`Node::set_value`] and [`Node::attach`], which consume
//! the node and hand it back so callers can chain them while building structure by hand.
//!
//! # Examples
//!
//! ```
//! use avl_bst::Node;
//!
//! let tree = Node::new()
//!     .set_value(5)
//!     .attach(Node::new().set_value(3), Node::new().set_value(8));
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.inorder(), [&3, &5, &8]);
//! assert_eq!(tree.level_order_padded(), [Some(&5), Some(&3), Some(&8)]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A binary tree. Children of a [`Branch`] are themselves `Node`s so "no child" is always
/// represented by [`Empty`][Node::Empty], never by a missing pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<T> {
    /// A marker for the empty pointer at the bottom of a subtree. Also the state of a freshly
    /// created tree.
    Empty,
    /// A value with two children, either of which may be [`Empty`][Node::Empty].
    Branch(Branch<T>),
}

/// A value-bearing node. It exclusively owns both of its subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch<T> {
    pub(crate) value: T,
    pub(crate) left: Box<Node<T>>,
    pub(crate) right: Box<Node<T>>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Branch<T> {
    /// Recomputes the cached height from the children. Must be called after either child is
    /// replaced.
    pub(crate) fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Generates a new, empty `Node`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// A branch holding `value` with two empty children.
    pub(crate) fn leaf(value: T) -> Self {
        Self::Branch(Branch {
            value,
            left: Box::new(Self::Empty),
            right: Box::new(Self::Empty),
            height: 1,
        })
    }

    /// Returns `true` for the [`Empty`][Node::Empty] marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The value stored here, if this is a branch.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Branch(b) => Some(&b.value),
        }
    }

    /// The left subtree, if this is a branch.
    pub fn left(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Branch(b) => Some(&*b.left),
        }
    }

    /// The right subtree, if this is a branch.
    pub fn right(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Branch(b) => Some(&*b.right),
        }
    }

    /// Stores `value` in this node. An empty node becomes a branch with two empty children;
    /// a branch keeps its children and only has its value overwritten.
    pub fn set_value(self, value: T) -> Self {
        match self {
            Self::Empty => Self::leaf(value),
            Self::Branch(b) => Self::Branch(Branch { value, ..b }),
        }
    }

    /// Replaces both children of this node. Attaching children to an empty node has no
    /// effect since it has nowhere to hold them.
    ///
    /// Note that this does not check the ordering of the attached subtrees.
    pub fn attach(self, left: Node<T>, right: Node<T>) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Branch(mut b) => {
                *b.left = left;
                *b.right = right;
                b.fix_height();
                Self::Branch(b)
            }
        }
    }

    /// Gets the height of this tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Branch(b) => b.height,
        }
    }

    /// The height of the left subtree minus the height of the right subtree. Positive values
    /// mean the node is left-heavy. An empty node has a balance factor of 0.
    pub fn balance_factor(&self) -> isize {
        match self {
            Self::Empty => 0,
            Self::Branch(b) => b.left.height() as isize - b.right.height() as isize,
        }
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Empty => false,
            Self::Branch(b) => match value.cmp(&b.value) {
                Ordering::Less => b.left.contains(value),
                Ordering::Equal => true,
                Ordering::Greater => b.right.contains(value),
            },
        }
    }

    /// How many values are in the tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Branch(b) => 1 + b.left.size() + b.right.size(),
        }
    }

    /// The smallest value in the tree, found by following left children.
    pub fn min(&self) -> Option<&T> {
        let mut node = self;
        let mut min = None;
        while let Self::Branch(b) = node {
            min = Some(&b.value);
            node = &b.left;
        }
        min
    }

    /// The largest value in the tree, found by following right children.
    pub fn max(&self) -> Option<&T> {
        let mut node = self;
        let mut max = None;
        while let Self::Branch(b) = node {
            max = Some(&b.value);
            node = &b.right;
        }
        max
    }

    /// Values in node, left subtree, right subtree order.
    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk(&mut out, Order::Pre);
        out
    }

    /// Values in left subtree, node, right subtree order. For a valid search tree this is
    /// strictly increasing.
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk(&mut out, Order::In);
        out
    }

    /// Values in left subtree, right subtree, node order.
    pub fn postorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk(&mut out, Order::Post);
        out
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a T>, order: Order) {
        if let Self::Branch(b) = self {
            if order == Order::Pre {
                out.push(&b.value);
            }
            b.left.walk(out, order);
            if order == Order::In {
                out.push(&b.value);
            }
            b.right.walk(out, order);
            if order == Order::Post {
                out.push(&b.value);
            }
        }
    }

    /// A breadth-first walk of the tree padded out to a perfect binary tree of this tree's
    /// height. Missing nodes show up as `None` and keep producing `None` children until the
    /// last level, so the result always has `2^height - 1` entries and level `l` (starting
    /// at 0) occupies indices `2^l - 1 .. 2^(l+1) - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::{bst, SearchTree};
    ///
    /// let tree = bst::Tree::new().insert(2).insert(1).insert(3).insert(4);
    ///
    /// assert_eq!(
    ///     tree.level_order_padded(),
    ///     [Some(&2), Some(&1), Some(&3), None, None, None, Some(&4)]
    /// );
    /// ```
    pub fn level_order_padded(&self) -> Vec<Option<&T>> {
        let height = self.height();
        let mut out = Vec::new();
        if height == 0 {
            return out;
        }

        // `None` stands in for the placeholder children of an empty slot.
        let mut queue: VecDeque<(Option<&Node<T>>, usize)> = VecDeque::new();
        queue.push_back((Some(self), 1));
        while let Some((node, level)) = queue.pop_front() {
            match node {
                Some(Self::Branch(b)) => {
                    out.push(Some(&b.value));
                    if level < height {
                        queue.push_back((Some(&*b.left), level + 1));
                        queue.push_back((Some(&*b.right), level + 1));
                    }
                }
                Some(Self::Empty) | None => {
                    out.push(None);
                    if level < height {
                        queue.push_back((None, level + 1));
                        queue.push_back((None, level + 1));
                    }
                }
            }
        }

        out
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}
