// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::thread;

use crate::{
    AtomicCompletionSignal, CounterStore, Random, RunConfig, Snapshot, SnapshotError, Snapshotter,
    Writer,
};

/// Summary of a completed run, available once both loops have joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub insertions: u64,
    pub serializations: u64,

    /// The decoded final snapshot and the sum of its values
    pub final_snapshot: Snapshot,
    pub sum: u64,
}

/// Coordinator: owns the shared store, runs the writer and snapshotter on
/// two named threads, joins both, then consumes the final snapshot
///
/// All shared state is constructed here and handed out by `Arc`; neither
/// loop reaches for anything global.
pub struct Coordinator<S: CounterStore + 'static, R: Random + 'static> {
    store: Arc<S>,
    random: R,
    config: RunConfig,
}

impl<S: CounterStore + 'static, R: Random + 'static> Coordinator<S, R> {
    pub fn new(store: Arc<S>, random: R, config: RunConfig) -> Self {
        Self {
            store,
            random,
            config,
        }
    }

    /// Run both loops to completion and consume the final snapshot
    ///
    /// The only recognized failure is a decode failure on the final
    /// snapshot, which is unrecoverable and propagated to the caller.
    pub fn run(self) -> Result<RunSummary, SnapshotError> {
        let signal = AtomicCompletionSignal::new();

        let writer = Writer::new(
            Arc::clone(&self.store),
            self.random,
            signal.clone(),
            self.config.insertion_count,
            self.config.max_key,
        );
        let snapshotter = Snapshotter::new(
            Arc::clone(&self.store),
            signal,
            self.config.snapshot_report_period,
        );

        let writer_handle = thread::Builder::new()
            .name("writer".into())
            .spawn(move || writer.run())
            .expect("Failed to spawn writer thread");
        let snapshotter_handle = thread::Builder::new()
            .name("snapshotter".into())
            .spawn(move || snapshotter.run())
            .expect("Failed to spawn snapshotter thread");

        let insertions = writer_handle.join().expect("Writer thread panicked");
        let outcome = snapshotter_handle
            .join()
            .expect("Snapshotter thread panicked");

        let final_snapshot = Snapshot::decode(&outcome.final_snapshot)?;
        let sum = final_snapshot.sum();

        let ratio = insertions as f64 / outcome.serializations as f64;
        println!(
            "[coordinator] serialized {} times while updated {} times ({:.1} insertions for 1 serialization)",
            outcome.serializations, insertions, ratio
        );
        println!("[coordinator] final counter sum: {}", sum);

        Ok(RunSummary {
            insertions,
            serializations: outcome.serializations,
            final_snapshot,
            sum,
        })
    }
}
