use rbtree::{Error, Map};

use std::collections::BTreeMap;

use crate::{init_logging, Op};

/// Applies a set of operations to a `Map` and a `BTreeMap`. Inserts go through
/// `insert_or_assign` so both sides overwrite.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut Map<K, V>, model: &mut BTreeMap<K, V>) -> bool
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    for op in ops {
        let agreed = match op {
            Op::Insert(k, v) => {
                map.insert_or_assign(k.clone(), v.clone()) == model.insert(k.clone(), v.clone())
            }
            Op::Erase(k) => map.erase(k) == model.remove(k),
        };
        if !agreed || !map.is_red_black_tree() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    init_logging();
    let mut map = Map::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut map, &mut model)
        && map.len() == model.len()
        && map.iter().eq(model.iter())
        && model.iter().all(|(k, v)| map.at(k) == Ok(v))
}

#[quickcheck]
fn insert_keeps_the_first_value(pairs: Vec<(i8, i8)>) -> bool {
    let mut map = Map::new();
    let mut model = BTreeMap::new();
    for (k, v) in &pairs {
        map.insert(*k, *v);
        model.entry(*k).or_insert(*v);
    }

    map.iter().eq(model.iter())
}

#[quickcheck]
fn at_misses_are_errors(keys: Vec<i8>, misses: Vec<i8>) -> bool {
    let map: Map<_, _> = keys.iter().map(|k| (*k, ())).collect();

    misses
        .iter()
        .filter(|k| !keys.contains(*k))
        .all(|k| map.at(k) == Err(Error::KeyNotFound) && map.get(k).is_none())
}

#[quickcheck]
fn default_insert_counts(words: Vec<u8>) -> bool {
    let mut map: Map<u8, usize> = Map::new();
    for word in &words {
        *map.get_or_insert_default(*word % 16) += 1;
    }

    map.values().sum::<usize>() == words.len()
        && map
            .iter()
            .all(|(k, count)| *count == words.iter().filter(|w| *w % 16 == *k).count())
}
