//! Helpers over a single, possibly absent, map.
//!
//! `None` stands for a map that was never allocated. It is distinct from an
//! allocated map with no entries: helpers that return a map or a list hand
//! back `None` for an absent input and `Some` (possibly empty) otherwise.

use log::{debug, trace, warn};

use crate::error::{MapError, Result};
use crate::item::Item;
use crate::map::Map;
use crate::some_or;

/// Copy a map into fresh storage. An absent map stays absent.
pub fn clone<K, V, M>(m: Option<&M>) -> Option<M>
where
    M: Map<K, V> + Clone,
{
    m.map(M::clone)
}

/// Overwrite or add every entry of `src` into `dst`.
///
/// An absent `src` is a no-op. An absent `dst` cannot be written to and is
/// reported before anything happens.
pub fn try_update<K, V, M>(dst: Option<&mut M>, src: Option<&M>) -> Result<()>
where
    K: Clone,
    V: Clone,
    M: Map<K, V>,
{
    let dst = some_or!(dst, return Err(MapError::AbsentDestination));
    let src = some_or!(src, return Ok(()));

    for (k, v) in src.iter() {
        dst.insert(k.clone(), v.clone());
    }
    trace!("update: merged {} entries, now {}", src.len(), dst.len());

    Ok(())
}

/// Like [`try_update`], but panics on an absent `dst`.
pub fn update<K, V, M>(dst: Option<&mut M>, src: Option<&M>)
where
    K: Clone,
    V: Clone,
    M: Map<K, V>,
{
    if let Err(e) = try_update(dst, src) {
        warn!("update: {}", e);
        panic!("{}", e);
    }
}

/// Remove every entry. Clearing an absent map does nothing.
pub fn clear<K, V, M>(m: Option<&mut M>)
where
    M: Map<K, V>,
{
    if let Some(m) = m {
        trace!("clear: dropping {} entries", m.len());
        m.clear();
    }
}

pub fn contains<K, V, M>(m: Option<&M>, key: &K) -> bool
where
    M: Map<K, V>,
{
    m.map_or(false, |m| m.lookup(key).is_some())
}

/// The value of `key`, or `default` if the map is absent or lacks the key.
pub fn get<K, V, M>(m: Option<&M>, key: &K, default: V) -> V
where
    V: Clone,
    M: Map<K, V>,
{
    m.and_then(|m| m.lookup(key)).cloned().unwrap_or(default)
}

pub fn keys<K, V, M>(m: Option<&M>) -> Option<Vec<K>>
where
    K: Clone,
    M: Map<K, V>,
{
    m.map(|m| m.iter().map(|(k, _)| k.clone()).collect())
}

pub fn values<K, V, M>(m: Option<&M>) -> Option<Vec<V>>
where
    V: Clone,
    M: Map<K, V>,
{
    m.map(|m| m.iter().map(|(_, v)| v.clone()).collect())
}

/// True if both maps hold the same keys mapped to equal values.
///
/// Two absent maps are equal. An absent map never equals a present one,
/// even an empty one.
pub fn equal<K, V, M>(m1: Option<&M>, m2: Option<&M>) -> bool
where
    V: PartialEq,
    M: Map<K, V>,
{
    equal_by(m1, m2, |v1, v2| v1 == v2)
}

/// [`equal`] with values compared by `eq` instead of `PartialEq`.
pub fn equal_by<K, V, M, F>(m1: Option<&M>, m2: Option<&M>, mut eq: F) -> bool
where
    M: Map<K, V>,
    F: FnMut(&V, &V) -> bool,
{
    let (m1, m2) = match (m1, m2) {
        (None, None) => return true,
        (Some(m1), Some(m2)) => (m1, m2),
        _ => return false,
    };

    if m1.len() != m2.len() {
        return false;
    }

    m1.iter()
        .all(|(k, v1)| m2.lookup(k).map_or(false, |v2| eq(v1, v2)))
}

pub fn items<K, V, M>(m: Option<&M>) -> Option<Vec<Item<K, V>>>
where
    K: Clone,
    V: Clone,
    M: Map<K, V>,
{
    m.map(|m| {
        m.iter()
            .map(|(k, v)| Item::new(k.clone(), v.clone()))
            .collect()
    })
}

/// Build a map from a list of items; a later item overwrites an earlier one
/// with the same key.
pub fn from_items<K, V, M, I>(items: Option<I>) -> Option<M>
where
    M: Map<K, V>,
    I: IntoIterator<Item = Item<K, V>>,
{
    let items = items?.into_iter();
    let mut m = M::with_capacity(items.size_hint().0);

    for item in items {
        m.insert(item.key, item.value);
    }

    Some(m)
}

/// Pair `keys[i]` with `values[i]`.
///
/// Keys past the end of `values` get `V::default()`, surplus values are
/// ignored and a repeated key keeps its last value. Absent keys give an
/// absent map.
pub fn from_slices<K, V, M>(keys: Option<&[K]>, values: &[V]) -> Option<M>
where
    K: Clone,
    V: Clone + Default,
    M: Map<K, V>,
{
    let keys = keys?;
    let mut m = M::with_capacity(keys.len());

    for (i, k) in keys.iter().enumerate() {
        let v = values.get(i).cloned().unwrap_or_default();
        m.insert(k.clone(), v);
    }

    if m.len() < keys.len() {
        debug!(
            "from_slices: {} keys collapsed into {} entries",
            keys.len(),
            m.len()
        );
    }

    Some(m)
}

/// Call `values` (if any) and then `keys` `size` times, inserting each pair.
///
/// Without a value function every value is `V::default()`. Keys produced
/// more than once keep their last value, so the map may end up smaller
/// than `size`.
pub fn try_from_fns<K, V, M, FK, FV>(
    size: isize,
    keys: Option<FK>,
    mut values: Option<FV>,
) -> Result<M>
where
    V: Default,
    M: Map<K, V>,
    FK: FnMut() -> K,
    FV: FnMut() -> V,
{
    if size < 0 {
        return Err(MapError::NegativeSize(size));
    }
    let mut keys = some_or!(keys, return Err(MapError::MissingKeyFn));

    let size = size as usize;
    let mut m = M::with_capacity(size);

    for _ in 0..size {
        let v = match values.as_mut() {
            Some(values) => values(),
            None => V::default(),
        };
        m.insert(keys(), v);
    }

    if m.len() < size {
        debug!("from_fns: {} rounds produced {} entries", size, m.len());
    }

    Ok(m)
}

/// Like [`try_from_fns`], but panics on a negative size or missing key function.
pub fn from_fns<K, V, M, FK, FV>(size: isize, keys: Option<FK>, values: Option<FV>) -> M
where
    V: Default,
    M: Map<K, V>,
    FK: FnMut() -> K,
    FV: FnMut() -> V,
{
    match try_from_fns(size, keys, values) {
        Ok(m) => m,
        Err(e) => {
            warn!("from_fns: {}", e);
            panic!("{}", e);
        }
    }
}

/// Every key mapped to `value`. Present maps always give `Some`, possibly empty.
pub fn keys_for_value<K, V, M>(m: Option<&M>, value: &V) -> Option<Vec<K>>
where
    K: Clone,
    V: PartialEq,
    M: Map<K, V>,
{
    keys_for_value_by(m, value, |v1, v2| v1 == v2)
}

/// [`keys_for_value`] with `eq(stored, value)` deciding a match.
pub fn keys_for_value_by<K, V, M, F>(m: Option<&M>, value: &V, mut eq: F) -> Option<Vec<K>>
where
    K: Clone,
    M: Map<K, V>,
    F: FnMut(&V, &V) -> bool,
{
    m.map(|m| {
        m.iter()
            .filter(|(_, v)| eq(*v, value))
            .map(|(k, _)| k.clone())
            .collect()
    })
}

/// Remove every entry for which `f(key, value)` holds and return how many went.
pub fn delete<K, V, M, F>(m: Option<&mut M>, mut f: F) -> usize
where
    M: Map<K, V>,
    F: FnMut(&K, &V) -> bool,
{
    let m = some_or!(m, return 0);
    let before = m.len();

    m.retain(|k, v| !f(k, v));

    let removed = before - m.len();
    trace!("delete: removed {} of {} entries", removed, before);
    removed
}
