use std::collections::HashMap;

use crossbeam_utils::thread;
use mapkit::maps;
use parking_lot::Mutex;

const THREADS: u64 = 8;
const PER_THREAD: u64 = 1_000;

// callers serialize access to a shared map themselves
#[test]
fn test_serialized_update_delete() {
    let shared: Mutex<HashMap<u64, u64>> = Mutex::new(HashMap::new());

    thread::scope(|s| {
        for t in 0..THREADS {
            let shared = &shared;

            s.spawn(move |_| {
                let src: HashMap<u64, u64> = (0..PER_THREAD)
                    .map(|i| (t * PER_THREAD + i, t))
                    .collect();

                let mut guard = shared.lock();
                maps::update(Some(&mut *guard), Some(&src));
            });
        }
    })
    .unwrap();

    let mut map = shared.into_inner();
    assert_eq!(map.len(), (THREADS * PER_THREAD) as usize);

    for t in 0..THREADS {
        let keys = maps::keys_for_value(Some(&map), &t).unwrap();
        assert_eq!(keys.len(), PER_THREAD as usize);
    }

    let removed = maps::delete(Some(&mut map), |_, v| v % 2 == 0);
    assert_eq!(removed, (THREADS / 2 * PER_THREAD) as usize);
}
