use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::CompletionSignal;

/// Atomic-flag completion signal shared between threads
#[derive(Clone)]
pub struct AtomicCompletionSignal {
    flag: Arc<AtomicBool>,
}

impl AtomicCompletionSignal {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for AtomicCompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionSignal for AtomicCompletionSignal {
    fn mark_finished(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    fn is_finished(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
