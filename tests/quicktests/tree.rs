use bst_rebalance::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                let _ = bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
                assert_eq!(bst.iter().len(), set.len());
            }
        }
    }
}

fn keys<K: Clone>(keys: Vec<&K>) -> Vec<K> {
    keys.into_iter().cloned().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn build_yields_sorted_unique_keys(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected: BTreeSet<_> = xs.into_iter().collect();

    keys(tree.in_order()) == expected.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_and_rebalance_are_balanced(xs: Vec<i32>, extra: Vec<i32>) -> bool {
    let mut tree = Tree::build(xs);
    let built = tree.is_balanced();

    for x in extra {
        tree.insert(x);
    }
    tree.rebalance();

    built && tree.is_balanced()
}

#[quickcheck]
fn rebalanced_height_is_minimal(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }
    tree.rebalance();

    let n = tree.len() as f64;
    match tree.tree_height() {
        None => n == 0.0,
        Some(height) => height == (n + 1.0).log2().ceil() as usize - 1,
    }
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = Tree::build(xs.clone());
    let before = keys(tree.pre_order());

    !tree.insert(xs[pick % xs.len()]) && keys(tree.pre_order()) == before
}

#[quickcheck]
fn insert_then_delete_restores_keys(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    if tree.contains(&x) {
        return true;
    }
    let before = keys(tree.in_order());

    tree.insert(x);
    let deleted = tree.delete(&x);

    deleted == Ok(x) && tree.find(&x).is_none() && keys(tree.in_order()) == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // We may have inserted or deleted the same value multiple times.
    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        let expected = if still_present.remove(delete) {
            Ok(*delete)
        } else {
            Err(Error::NotFound)
        };
        if tree.delete(delete) != expected {
            return false;
        }
    }

    let in_order = tree.in_order();
    deletes.iter().all(|x| tree.find(x).is_none())
        && in_order.windows(2).all(|w| w[0] < w[1])
        && in_order.into_iter().eq(still_present.iter())
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }
    tree.rebalance();
    let once = (
        keys(tree.in_order()),
        keys(tree.pre_order()),
        keys(tree.level_order()),
    );
    tree.rebalance();
    let twice = (
        keys(tree.in_order()),
        keys(tree.pre_order()),
        keys(tree.level_order()),
    );

    once == twice
}

#[quickcheck]
fn traversals_cover_every_key(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let sorted = |mut keys: Vec<i8>| {
        keys.sort_unstable();
        keys
    };
    let in_order = keys(tree.in_order());

    let covered = [tree.level_order(), tree.pre_order(), tree.post_order()]
        .into_iter()
        .all(|order| sorted(keys(order)) == in_order);
    covered
}

#[test]
fn delete_two_child_root() {
    let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    assert_eq!(tree.tree_height(), Some(2));

    assert_eq!(tree.delete(&5), Ok(5));
    assert_eq!(tree.root().map(|n| *n.key()), Some(7));
    assert_eq!(tree.in_order(), [&1, &3, &4, &7, &8, &9]);
}

#[test]
fn insert_present_key() {
    let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

    assert!(!tree.insert(5));
    assert_eq!(tree.in_order(), [&1, &3, &4, &5, &7, &8, &9]);
}
