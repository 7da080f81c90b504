/// Trait for signalling writer completion to the snapshotter
///
/// The snapshotter must rely on this rather than any approximation of the
/// writer thread's execution state, so the final snapshot is guaranteed to
/// be taken on a quiesced map.
pub trait CompletionSignal: Clone + Send + 'static {
    fn mark_finished(&self);
    fn is_finished(&self) -> bool;
}
