use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

use crate::map::Map;
use crate::maps;

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

/// Fill a map with `size` random pairs.
///
/// Colliding keys are collapsed, so the map can hold fewer than `size` entries.
pub fn random_map<K, V, M>(size: usize, rng: &mut ThreadRng) -> M
where
    K: Random,
    V: Random + Default,
    M: Map<K, V>,
{
    let size = isize::try_from(size).unwrap_or(isize::MAX);
    let mut key_rng = rng.clone();

    maps::from_fns(size, Some(|| K::gen(&mut key_rng)), Some(|| V::gen(rng)))
}
