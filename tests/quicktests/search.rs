use adt_tree::{AvlTree, BinaryTree, Bst, SearchTree, Tree};

use std::collections::BTreeSet;

use crate::{naive_height, Op};

/// Applies a set of operations to a tree and a set, calling `check` on the tree after each
/// one. This way we can ensure that after a random smattering of inserts and withdraws we
/// have the same set of keys in both.
fn do_ops<T>(ops: &[Op<i8>], tree: &mut T, set: &mut BTreeSet<i8>, check: impl Fn(&T))
where
    T: SearchTree<Item = i8>,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(*k).is_ok(), set.insert(*k));
            }
            Op::Withdraw(k) => {
                assert_eq!(tree.withdraw(k).ok(), set.take(k));
            }
        }
        check(tree);
    }
}

fn is_strictly_ascending<T: Tree<Item = i8>>(tree: &T) -> bool {
    let keys: Vec<_> = tree.iter().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

fn assert_avl(tree: &AvlTree<i8>) {
    fn walk(tree: &AvlTree<i8>) {
        let (Ok(left), Ok(right)) = (tree.left(), tree.right()) else {
            return;
        };
        assert!((left.height() - right.height()).abs() <= 1);
        walk(left);
        walk(right);
    }
    assert!(is_strictly_ascending(tree));
    assert_eq!(tree.height(), naive_height(tree));
    walk(tree);
}

quickcheck::quickcheck! {
    fn bst_in_order_is_ascending(xs: Vec<i8>) -> bool {
        let tree: Bst<i8> = xs.into_iter().collect();
        is_strictly_ascending(&tree)
    }

    fn bst_matches_a_set(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Bst::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set, |tree| assert!(is_strictly_ascending(tree)));
        tree.iter().eq(set.iter()) && tree.count() == set.len()
    }

    fn avl_stays_balanced(ops: Vec<Op<i8>>) -> bool {
        let mut tree = AvlTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set, assert_avl);
        set.iter().all(|key| tree.find(key) == Ok(key))
    }

    fn height_matches_definition(xs: Vec<i8>) -> bool {
        let bst: Bst<i8> = xs.iter().copied().collect();
        let avl: AvlTree<i8> = xs.iter().copied().collect();

        bst.height() == naive_height(&bst) && avl.height() == naive_height(&avl)
    }

    fn plain_binary_tree_height(xs: Vec<i8>) -> bool {
        // Builds a left spine with a right leaf hanging off every other node.
        let mut tree = BinaryTree::new();
        for (i, x) in xs.iter().enumerate() {
            let mut parent = BinaryTree::leaf(*x);
            parent.attach_left(tree).unwrap();
            if i % 2 == 1 {
                parent.attach_right(BinaryTree::leaf(*x)).unwrap();
            }
            tree = parent;
        }
        tree.height() == naive_height(&tree) && tree.height() == xs.len() as isize - 1
    }

    fn insert_then_withdraw_round_trips(xs: Vec<i8>, x: i8) -> bool {
        let mut bst: Bst<i8> = xs.iter().copied().filter(|k| *k != x).collect();
        let mut avl: AvlTree<i8> = xs.iter().copied().filter(|k| *k != x).collect();
        let before: Vec<i8> = bst.iter().copied().collect();

        bst.insert(x).unwrap();
        avl.insert(x).unwrap();
        assert_eq!(bst.withdraw(&x), Ok(x));
        assert_eq!(avl.withdraw(&x), Ok(x));
        assert_avl(&avl);

        !bst.is_member(&x)
            && !avl.is_member(&x)
            && bst.iter().copied().eq(before.iter().copied())
            && avl.iter().copied().eq(before.iter().copied())
    }
}
