use std::collections::{BTreeMap, HashMap};

use mapkit::{iter, maps};

use crate::util::{hash_map, sorted};

#[test]
fn test_iter() {
    let m = hash_map([("a", 1), ("b", 2), ("c", 3)]);

    let got = sorted(iter::iter(Some(&m)).map(|(k, v)| (*k, *v)).collect());
    assert_eq!(got, vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_iter_absent() {
    let absent: Option<&HashMap<&str, i32>> = None;

    assert_eq!(iter::iter(absent).count(), 0);
    assert_eq!(iter::iter_keys(absent).count(), 0);
    assert_eq!(iter::iter_values(absent).count(), 0);
}

#[test]
fn test_iter_early_stop() {
    let m: HashMap<i32, i32> = (0..100).map(|i| (i, i * i)).collect();

    // stop after a few pairs, then start over
    let first = iter::iter(Some(&m)).take(3).count();
    assert_eq!(first, 3);

    let found = iter::iter(Some(&m)).find(|(k, _)| **k == 7);
    assert_eq!(found, Some((&7, &49)));

    assert_eq!(iter::iter(Some(&m)).count(), 100);
    assert_eq!(m.len(), 100);
}

#[test]
fn test_iter_keys_values() {
    let m = BTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);

    let keys = iter::iter_keys(Some(&m)).cloned().collect::<Vec<_>>();
    let values = iter::iter_values(Some(&m)).cloned().collect::<Vec<_>>();

    assert_eq!(keys, vec![1, 2, 3]);
    assert_eq!(values, vec!['a', 'b', 'c']);
}

#[test]
fn test_collect() {
    let m: HashMap<&str, i32> = iter::collect(vec![("a", 1), ("b", 2), ("a", 3)]);
    assert_eq!(m, hash_map([("a", 3), ("b", 2)]));

    let empty: HashMap<&str, i32> = iter::collect(Vec::new());
    assert!(empty.is_empty());
    assert!(!maps::equal(Some(&empty), None));
}

#[test]
fn test_collect_from_iter() {
    let m = hash_map([("a", 1), ("b", 2), ("c", 1)]);

    // swap keys and values through a lazy pass
    let swapped: BTreeMap<i32, &str> =
        iter::collect(iter::iter(Some(&m)).filter(|(k, _)| **k != "c").map(|(k, v)| (*v, *k)));
    assert_eq!(swapped, BTreeMap::from([(1, "a"), (2, "b")]));

    let back: HashMap<&str, i32> = iter::collect(iter::iter(Some(&m)).map(|(k, v)| (*k, *v)));
    assert!(maps::equal(Some(&back), Some(&m)));
}
