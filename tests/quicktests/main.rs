#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod map;
mod multiset;
mod set;

/// Something to do to a container in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Erase the K from the data structure
    Erase(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g), V::arbitrary(g))
        } else {
            Op::Erase(K::arbitrary(g))
        }
    }
}

/// Turns on logging for a test run. Set `RUST_LOG=rbtree=trace` to watch every rotation.
pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}
