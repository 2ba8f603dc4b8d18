// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of proteins requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One site of `protein` was queried (`done` of `total`).
    fn site_done(&mut self, _protein: &str, _done: usize, _total: usize) {}

    /// A protein's table was written.
    fn item_done(&mut self, _protein: &str, _rows: usize) {}

    /// A protein was abandoned; the run moves on.
    fn item_failed(&mut self, _protein: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
