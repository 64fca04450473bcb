use adt_tree::{AvlTree, Bst, Order, Tree};

/// Pulls `consumed` keys, resets, and drains.
fn drain_after_reset<T: Tree<Item = i8>>(tree: &T, consumed: usize) -> Vec<i8> {
    let mut iter = tree.iter();
    iter.by_ref().take(consumed).for_each(drop);
    iter.reset();
    iter.copied().collect()
}

fn in_order_walk<T: Tree<Item = i8>>(tree: &T) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.walk(Order::InOrder, |key: &i8| keys.push(*key));
    keys
}

quickcheck::quickcheck! {
    fn reset_restarts_the_traversal(xs: Vec<i8>, consumed: usize) -> bool {
        let bst: Bst<i8> = xs.iter().copied().collect();
        let avl: AvlTree<i8> = xs.iter().copied().collect();
        let consumed = consumed % (xs.len() + 2);

        drain_after_reset(&bst, consumed) == in_order_walk(&bst)
            && drain_after_reset(&avl, consumed) == in_order_walk(&avl)
    }

    fn is_done_exactly_when_drained(xs: Vec<i8>) -> bool {
        let tree: AvlTree<i8> = xs.into_iter().collect();
        let mut iter = tree.iter();

        for _ in 0..tree.count() {
            if iter.is_done() || iter.next().is_none() {
                return false;
            }
        }
        iter.is_done() && iter.next().is_none()
    }
}
