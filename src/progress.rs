// src/progress.rs
/// Lightweight progress reporting for a search (fetch, then extract).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once, before the request goes out.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
