//! Lazy views over a possibly absent map.
//!
//! Each call starts a fresh pass. Dropping the iterator early is fine and
//! leaves the map untouched. An absent map yields nothing.

use crate::map::Map;

pub fn iter<'a, K, V, M>(m: Option<&'a M>) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
where
    K: 'a,
    V: 'a,
    M: Map<K, V> + 'a,
{
    m.into_iter().flat_map(|m| m.iter())
}

pub fn iter_keys<'a, K, V, M>(m: Option<&'a M>) -> impl Iterator<Item = &'a K> + 'a
where
    K: 'a,
    V: 'a,
    M: Map<K, V> + 'a,
{
    iter(m).map(|(k, _)| k)
}

pub fn iter_values<'a, K, V, M>(m: Option<&'a M>) -> impl Iterator<Item = &'a V> + 'a
where
    K: 'a,
    V: 'a,
    M: Map<K, V> + 'a,
{
    iter(m).map(|(_, v)| v)
}

/// Build a map from (key, value) pairs. A later pair overwrites an earlier
/// one with the same key; the result is present even for an empty sequence.
pub fn collect<K, V, M, I>(seq: I) -> M
where
    M: Map<K, V>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut m = M::default();

    for (k, v) in seq {
        m.insert(k, v);
    }

    m
}
