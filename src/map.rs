use std::collections::hash_map::{self, HashMap};
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "btree")]
use std::collections::btree_map::{self, BTreeMap};

/// The container every helper in [`crate::maps`] and [`crate::iter`] works on.
///
/// An absent map is not a `Map` at all: helpers take `Option<&M>` and treat
/// `None` as a map that was never allocated.
pub trait Map<K, V>: Default {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Create an empty map with room for at least `capacity` entries.
    ///
    /// Maps without a notion of capacity ignore the hint.
    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert (key, value) into the map.
    ///
    /// If the key was already present, overwrite it and return Some(value) that was replaced.
    /// Otherwise, return None.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Lookup the value of the key.
    ///
    /// If success, return the reference of the value.
    /// If fail, return None.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Keep only the entries for which `f` returns true.
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool;

    fn clear(&mut self);

    /// Visit every (key, value) once, in the map's own order.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Iter<'a> = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        HashMap::retain(self, f)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

// capacity hints are meaningless for a B-tree
#[cfg(feature = "btree")]
impl<K, V> Map<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    type Iter<'a> = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        BTreeMap::retain(self, f)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}
