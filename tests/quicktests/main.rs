//! Property tests run against every tree kind.

use adt_tree::Tree;
use quickcheck::{Arbitrary, Gen};

mod iter;
mod mway;
mod search;

/// Something to do to a search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Withdraw the K from the tree
    Withdraw(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Inserts are twice as likely as withdraws so trees get some depth.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]) {
            Some(0) => Op::Insert(K::arbitrary(g)),
            _ => Op::Withdraw(K::arbitrary(g)),
        }
    }
}

/// Height from the definition, ignoring any cached value.
pub fn naive_height<T: Tree>(tree: &T) -> isize {
    (0..tree.fanout())
        .filter_map(|slot| tree.child(slot).ok())
        .map(naive_height)
        .max()
        .map_or(if tree.is_empty() { -1 } else { 0 }, |height| height + 1)
}
