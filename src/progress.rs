// src/progress.rs
use crate::client::Outcome;

/// Lightweight status reporting for indexing requests.
/// Frontends (GUI/CLI) implement this to surface status to users.
/// Runs on the worker thread.
pub trait Progress: Send {
    /// Called once the request is issued, before the service answers.
    fn begin(&mut self, _url: &str) {}

    /// Called at the end, successful or not, after client state is updated.
    fn finish(&mut self, _outcome: &Outcome) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
