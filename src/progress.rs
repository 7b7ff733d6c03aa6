// src/progress.rs
use crate::status::Status;

/// Hook the controller drives while an extraction is in flight.
/// Frontends (GUI/CLI) implement this to disable triggers and show a busy line.
pub trait Progress {
    /// Extraction started; disable the trigger.
    fn begin(&mut self) {}

    /// Transient status for human eyes.
    fn status(&mut self, _status: &Status) {}

    /// Called at the end, successful or not; re-enable the trigger.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
