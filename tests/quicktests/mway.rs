use adt_tree::{MWayTree, SearchTree, Tree, TreeError};

use std::collections::BTreeSet;

use crate::{naive_height, Op};

/// Builds a tree of order `m` holding the sorted, unique `keys` across as many levels as it
/// takes: each node keeps a few evenly spaced keys and every gap between them becomes a
/// subtree of its own. How full a node is varies with its smallest key, so some nodes keep
/// room for inserts.
fn build(m: usize, keys: &[i8]) -> MWayTree<i8> {
    let mut tree = MWayTree::new(m).unwrap();
    let Some(first) = keys.first() else {
        return tree;
    };
    let count = (usize::from(first.unsigned_abs()) % (m - 1) + 1).min(keys.len());
    let picks: Vec<usize> = (1..=count).map(|i| i * keys.len() / (count + 1)).collect();
    for &pick in &picks {
        tree.insert(keys[pick]).unwrap();
    }

    let mut start = 0;
    for (slot, end) in picks.iter().copied().chain([keys.len()]).enumerate() {
        let gap = &keys[start..end];
        if !gap.is_empty() {
            tree.attach_subtree(slot, build(m, gap)).unwrap();
        }
        start = end + 1;
    }
    tree
}

fn nodes_within_capacity(tree: &MWayTree<i8>) -> bool {
    let mut pending = vec![tree];
    while let Some(node) = pending.pop() {
        if node.key_count() > node.capacity() || node.order() != tree.order() {
            return false;
        }
        pending.extend((0..node.fanout()).filter_map(|slot| node.child(slot).ok()));
    }
    true
}

fn order_from(order: u8) -> usize {
    usize::from(order % 6) + 2
}

quickcheck::quickcheck! {
    fn node_never_exceeds_its_capacity(order: u8, xs: Vec<i8>) -> bool {
        let m = usize::from(order % 8) + 2;
        let mut tree = MWayTree::new(m).unwrap();

        for x in xs {
            let before: Vec<i8> = tree.iter().copied().collect();
            match tree.insert(x) {
                Ok(()) => assert!(tree.is_member(&x)),
                Err(TreeError::NodeOverflow { capacity }) => {
                    assert_eq!(capacity, m - 1);
                    assert!(tree.iter().copied().eq(before.iter().copied()));
                }
                Err(error) => assert_eq!(error, TreeError::DuplicateKey),
            }
            assert!(tree.key_count() <= m - 1);
        }
        tree.iter().collect::<Vec<_>>().windows(2).all(|pair| pair[0] < pair[1])
    }

    fn withdraw_removes_exactly_one_key(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = MWayTree::new(9).unwrap();
        for k in xs {
            let _ = tree.insert(k);
        }
        let mut expected: Vec<i8> = tree.iter().copied().collect();
        let found = expected.iter().position(|k| *k == x);

        match (tree.withdraw(&x), found) {
            (Ok(removed), Some(position)) => {
                expected.remove(position);
                removed == x && tree.iter().copied().eq(expected)
            }
            (Err(TreeError::KeyNotFound), None) => tree.iter().copied().eq(expected),
            _ => false,
        }
    }

    fn multi_level_tree_is_well_formed(order: u8, xs: Vec<i8>) -> bool {
        let m = order_from(order);
        let set: BTreeSet<i8> = xs.into_iter().collect();
        let keys: Vec<i8> = set.iter().copied().collect();
        let tree = build(m, &keys);

        tree.iter().copied().eq(keys.iter().copied())
            && tree.height() == naive_height(&tree)
            && nodes_within_capacity(&tree)
            && tree.find_min().ok() == set.first()
            && tree.find_max().ok() == set.last()
            && keys.iter().all(|key| tree.find(key) == Ok(key))
            && tree.count() == keys.len()
    }

    fn multi_level_tree_matches_a_set(order: u8, xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let m = order_from(order);
        let mut set: BTreeSet<i8> = xs.into_iter().collect();
        let keys: Vec<i8> = set.iter().copied().collect();
        let mut tree = build(m, &keys);

        for op in ops {
            match op {
                Op::Insert(k) => match tree.insert(k) {
                    Ok(()) => assert!(set.insert(k)),
                    Err(TreeError::DuplicateKey) => assert!(set.contains(&k)),
                    Err(TreeError::NodeOverflow { capacity }) => {
                        assert_eq!(capacity, m - 1);
                        assert!(!set.contains(&k));
                    }
                    Err(error) => panic!("unexpected insert error: {error}"),
                },
                Op::Withdraw(k) => assert_eq!(tree.withdraw(&k).ok(), set.take(&k)),
            }
            assert!(tree.iter().eq(set.iter()));
            assert_eq!(tree.height(), naive_height(&tree));
            assert!(nodes_within_capacity(&tree));
        }
        tree.find_min().ok() == set.first() && tree.find_max().ok() == set.last()
    }
}
