use avl_bst::{bst::Tree, SearchTree};

use std::collections::BTreeSet;

use crate::{apply, is_ordered, is_padded, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops(ops: &[Op<i8>], mut bst: Tree<i8>, set: &mut BTreeSet<i8>) -> Tree<i8> {
    for op in ops {
        bst = apply(bst, op);
        match op {
            Op::Insert(x) => set.insert(*x),
            Op::Delete(x) => set.remove(x),
        };
    }

    bst
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    tree.inorder().into_iter().eq(set.iter()) && tree.size() == set.len()
}

#[quickcheck]
fn stays_ordered(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    for op in &ops {
        tree = apply(tree, op);
        if !is_ordered(tree.root()) {
            return false;
        }
    }
    true
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
fn delete_missing_keeps_tree(xs: Vec<i8>, missing: i8) -> bool {
    let tree = xs
        .into_iter()
        .filter(|x| *x != missing)
        .fold(Tree::new(), |tree, x| tree.insert(x));

    tree.clone().delete(&missing) == tree
}

#[quickcheck]
fn padded_level_order(xs: Vec<i8>) -> bool {
    // Unbalanced trees can get tall; keep the padded output small.
    let tree = xs
        .into_iter()
        .take(12)
        .fold(Tree::new(), |tree, x| tree.insert(x));

    is_padded(tree.root())
}
