use avl_bst::{avl::Tree, Node, SearchTree};

use std::collections::{BTreeSet, HashSet};

use crate::{apply, is_ordered, is_padded, Op};

/// Every subtree's heights are within one of each other.
fn is_balanced<T>(node: &Node<T>) -> bool {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => {
            node.balance_factor().abs() <= 1 && is_balanced(left) && is_balanced(right)
        }
        _ => true,
    }
}

/// The classic upper bound on the height of an AVL tree with `n` nodes.
fn within_height_bound(height: usize, n: usize) -> bool {
    n == 0 || height as f64 <= 1.44 * ((n + 2) as f64).log2() - 0.328
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    for op in &ops {
        tree = apply(tree, op);
        match op {
            Op::Insert(x) => set.insert(*x),
            Op::Delete(x) => set.remove(x),
        };
    }

    tree.inorder().into_iter().eq(set.iter()) && tree.size() == set.len()
}

#[quickcheck]
fn stays_balanced_and_ordered(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    for op in &ops {
        tree = apply(tree, op);
        if !is_balanced(tree.root()) || !is_ordered(tree.root()) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree = xs.into_iter().fold(Tree::new(), |tree, x| tree.insert(x));

    within_height_bound(tree.height(), tree.size())
}

#[quickcheck]
fn height_is_logarithmic_for_sorted_input(n: u8) -> bool {
    let tree = (0..n).fold(Tree::new(), |tree, x| tree.insert(x));

    tree.size() == n as usize && within_height_bound(tree.height(), tree.size())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && is_balanced(tree.root())
}

#[quickcheck]
fn delete_after_insert(xs: Vec<i8>, x: i8) -> bool {
    let tree = xs.into_iter().fold(Tree::new(), |tree, x| tree.insert(x));

    !tree.insert(x).delete(&x).contains(&x)
}

#[quickcheck]
fn padded_level_order(xs: Vec<i16>) -> bool {
    let tree = xs.into_iter().fold(Tree::new(), |tree, x| tree.insert(x));

    is_padded(tree.root())
}
