// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use crate::{CompletionSignal, CounterStore, Snapshot};

/// What the snapshotter hands back to the coordinator once it returns
pub struct SnapshotOutcome {
    /// Encoded form of the final, authoritative snapshot
    pub final_snapshot: String,

    /// How many serializations the loop performed (the final authoritative
    /// one is taken on top of these, so this is always >= 1)
    pub serializations: u64,
}

/// Snapshotter loop: serializes the whole map as fast as it can until the
/// writer signals completion
///
/// Serializations taken while the writer is running may observe a torn view
/// of the map; that is accepted. Only the final snapshot, taken strictly
/// after the completion signal, is authoritative.
pub struct Snapshotter<S: CounterStore, C: CompletionSignal> {
    store: Arc<S>,
    signal: C,
    report_period: u64,
}

impl<S: CounterStore, C: CompletionSignal> Snapshotter<S, C> {
    pub fn new(store: Arc<S>, signal: C, report_period: u64) -> Self {
        Self {
            store,
            signal,
            // report_period is a modulus below
            report_period: report_period.max(1),
        }
    }

    pub fn run(self) -> SnapshotOutcome {
        println!("[snapshotter] started");

        let mut serializations = 0u64;
        loop {
            let _racy = Snapshot::from_entries(&self.store.entries()).encode();
            serializations += 1;

            if serializations % self.report_period == 0 {
                println!("[snapshotter] serialized {} times", serializations);
            }

            // The completion check comes after a full serialization, so the
            // loop body always runs at least once
            if self.signal.is_finished() {
                let final_snapshot = Snapshot::from_entries(&self.store.entries()).encode();
                println!("[snapshotter] finished");
                return SnapshotOutcome {
                    final_snapshot,
                    serializations,
                };
            }
        }
    }
}
