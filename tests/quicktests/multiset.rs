use rbtree::Multiset;

use crate::{init_logging, Op};

/// A sorted vector is the simplest multiset there is.
fn model_insert(model: &mut Vec<u8>, x: u8) {
    let pos = model.partition_point(|y| *y <= x);
    model.insert(pos, x);
}

fn model_erase(model: &mut Vec<u8>, x: u8) -> bool {
    match model.binary_search(&x) {
        Ok(pos) => {
            model.remove(pos);
            true
        }
        Err(_) => false,
    }
}

#[quickcheck]
fn fuzz_multiple_operations_u8(ops: Vec<Op<u8, ()>>) -> bool {
    init_logging();
    let mut multiset = Multiset::new();
    let mut model = Vec::new();

    for op in &ops {
        // Squash keys into a small range so duplicates are common.
        match *op {
            Op::Insert(x, ()) => {
                multiset.insert(x % 8);
                model_insert(&mut model, x % 8);
            }
            Op::Erase(x) => {
                if multiset.erase(&(x % 8)) != model_erase(&mut model, x % 8) {
                    return false;
                }
            }
        }
        if !multiset.is_red_black_tree() {
            return false;
        }
    }

    multiset.len() == model.len() && multiset.iter().eq(model.iter())
}

#[quickcheck]
fn counts_every_copy(xs: Vec<u8>) -> bool {
    let multiset: Multiset<_> = xs.iter().map(|x| x % 8).collect();

    (0..8).all(|x| multiset.count(&x) == xs.iter().filter(|y| *y % 8 == x).count())
}

#[quickcheck]
fn erase_all_leaves_nothing_behind(xs: Vec<u8>, target: u8) -> bool {
    let mut multiset: Multiset<_> = xs.iter().map(|x| x % 8).collect();
    let target = target % 8;
    let expected = xs.iter().filter(|x| *x % 8 == target).count();

    multiset.erase_all(&target) == expected
        && !multiset.contains(&target)
        && multiset.len() == xs.len() - expected
        && multiset.is_red_black_tree()
}
