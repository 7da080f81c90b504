use counter_snapshot_core::{Coordinator, FastrandRandom, RunConfig};
use counter_snapshot_in_memory::InMemoryStore;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::default();

    println!("=== CONCURRENT COUNTER SNAPSHOT ===");
    println!("Configuration:");
    println!("  - Key space: [0, {})", config.max_key);
    println!("  - Insertions: {}", config.insertion_count);
    println!(
        "  - Snapshot report period: {}",
        config.snapshot_report_period
    );

    let store = Arc::new(InMemoryStore::new());
    let coordinator = Coordinator::new(store, FastrandRandom, config);
    coordinator.run()?;

    Ok(())
}
