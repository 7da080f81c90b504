// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use crate::{CompletionSignal, CounterStore, Random};

/// Writer loop: hammers the shared store with random-key increments
///
/// The key space is kept small relative to the insertion count so the loop
/// lands on already-present keys almost every time.
pub struct Writer<S: CounterStore, R: Random, C: CompletionSignal> {
    store: Arc<S>,
    random: R,
    signal: C,
    insertion_count: u64,
    max_key: u32,
}

impl<S: CounterStore, R: Random, C: CompletionSignal> Writer<S, R, C> {
    pub fn new(store: Arc<S>, random: R, signal: C, insertion_count: u64, max_key: u32) -> Self {
        Self {
            store,
            random,
            signal,
            insertion_count,
            max_key,
        }
    }

    /// Perform all increments, then mark the completion signal
    ///
    /// Returns the number of increments performed.
    pub fn run(self) -> u64 {
        println!("[writer] started");

        // One report per 1% of the total; at least 1 so a tiny run never
        // divides by zero
        let report_period = (self.insertion_count / 100).max(1);

        for i in 0..self.insertion_count {
            let key = self.random.u32(0..self.max_key);
            self.store.increment_or_insert(key);

            if i % report_period == 0 {
                println!("[writer] {}%", i / report_period);
            }
        }

        // Ordering matters: the signal must only become visible once every
        // increment has landed in the store
        self.signal.mark_finished();
        println!("[writer] finished");

        self.insertion_count
    }
}
