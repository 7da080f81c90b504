use counter_snapshot_core::CounterStore;
use dashmap::DashMap;

/// DashMap-backed counter store
///
/// The entry API gives per-key atomic read-modify-write under shard locking,
/// so the writer never blocks the snapshotter's whole-map iteration for more
/// than a single shard at a time.
pub struct InMemoryStore {
    map: DashMap<u32, u64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore for InMemoryStore {
    fn increment_or_insert(&self, key: u32) {
        *self.map.entry(key).or_insert(0) += 1;
    }

    fn entries(&self) -> Vec<(u32, u64)> {
        self.map
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }
}
