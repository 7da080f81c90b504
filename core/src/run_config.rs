/// Fixed run parameters
///
/// There is no CLI or config file; the demo binary runs the defaults and
/// tests shrink them.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Keys are drawn uniformly from `[0, max_key)`
    pub max_key: u32,

    /// Total number of increments the writer performs
    pub insertion_count: u64,

    /// The snapshotter reports once per this many serializations
    pub snapshot_report_period: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_key: 10_000,
            insertion_count: 100_000_000,
            snapshot_report_period: 1_000,
        }
    }
}
