use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::SnapshotError;

/// Full key/value view of the counter map at some instant, in a form that
/// round-trips through its textual encoding
///
/// Keys are held sorted, so encoding a quiesced map twice yields identical
/// text both times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    counts: BTreeMap<u32, u64>,
}

impl Snapshot {
    pub fn from_entries(entries: &[(u32, u64)]) -> Self {
        Self {
            counts: entries.iter().copied().collect(),
        }
    }

    /// Encode to the line-oriented JSON object form, e.g. `{"0": 3, "1": 2}`
    ///
    /// Encoding an integer-to-integer map cannot fail.
    pub fn encode(&self) -> String {
        serde_json::to_string_pretty(&self.counts).expect("counter map always encodes")
    }

    /// Decode a previously encoded snapshot
    ///
    /// This is the one fallible step in the whole program; a failure here is
    /// unrecoverable for the caller.
    pub fn decode(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    pub fn counts(&self) -> &BTreeMap<u32, u64> {
        &self.counts
    }

    /// Sum of all counter values
    pub fn sum(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
