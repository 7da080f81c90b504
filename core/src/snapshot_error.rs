#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The final snapshot text could not be decoded back into a counter map
    Decode(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Decode(msg) => {
                write!(f, "Failed to decode final snapshot: {}", msg)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
