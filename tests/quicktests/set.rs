use rbtree::Set;

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a `Set` and a `BTreeSet`, checking that both report the same
/// outcome for every operation.
fn do_ops<T>(ops: &[Op<T, ()>], set: &mut Set<T>, model: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agreed = match op {
            Op::Insert(x, ()) => set.insert(x.clone()) == model.insert(x.clone()),
            Op::Erase(x) => set.erase(x) == model.remove(x),
        };
        if !agreed || !set.is_red_black_tree() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, ()>>) -> bool {
    init_logging();
    let mut set = Set::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut set, &mut model)
        && set.len() == model.len()
        && set.iter().eq(model.iter())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: Set<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !set.contains(x) && set.get(x).is_none())
}

#[quickcheck]
fn min_and_max(xs: Vec<i16>) -> bool {
    let set: Set<_> = xs.iter().copied().collect();

    set.min().ok() == xs.iter().min() && set.max().ok() == xs.iter().max()
}

#[quickcheck]
fn iterates_from_both_ends(xs: Vec<u8>) -> bool {
    let set: Set<_> = xs.iter().copied().collect();
    let model: BTreeSet<_> = xs.into_iter().collect();

    set.iter().rev().eq(model.iter().rev()) && set.into_iter().eq(model.into_iter())
}
