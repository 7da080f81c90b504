// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod counter_store;
pub use counter_store::CounterStore;

mod random;
pub use random::Random;

mod fastrand_random;
pub use fastrand_random::FastrandRandom;

mod completion_signal;
pub use completion_signal::CompletionSignal;

mod atomic_completion_signal;
pub use atomic_completion_signal::AtomicCompletionSignal;

mod snapshot;
pub use snapshot::Snapshot;

mod snapshot_error;
pub use snapshot_error::SnapshotError;

mod run_config;
pub use run_config::RunConfig;

mod writer;
pub use writer::Writer;

mod snapshotter;
pub use snapshotter::{SnapshotOutcome, Snapshotter};

mod coordinator;
pub use coordinator::{Coordinator, RunSummary};
