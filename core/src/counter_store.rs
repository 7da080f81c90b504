/// Trait for abstracting the shared counter map
/// Different implementations handle per-key concurrency internally
pub trait CounterStore: Send + Sync {
    /// Increment the count for a key, inserting it with count 1 if absent
    ///
    /// Must be safe under unbounded concurrent calls while the map is being
    /// iterated by another thread. Per-key atomicity is required; no
    /// whole-map lock is.
    fn increment_or_insert(&self, key: u32);

    /// Read the entire mapping
    ///
    /// While the writer is still running the returned view may be torn
    /// (partially updated). Once the writer has signalled completion the
    /// view is exact.
    fn entries(&self) -> Vec<(u32, u64)>;
}
