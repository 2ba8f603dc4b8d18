// src/pacing.rs
//
// Delays between site queries. Every delay runs to completion; there is no
// early wake-up.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::options::{DelayRange, PacingOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseKind {
    Query,
    Batch,
}

/// Where the pacer's delays actually go.
pub trait Sleep {
    fn sleep(&mut self, kind: PauseKind, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, _kind: PauseKind, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records pauses instead of sleeping.
#[derive(Clone, Debug, Default)]
pub struct RecordSleep {
    pub pauses: Vec<(PauseKind, Duration)>,
}

impl RecordSleep {
    pub fn count(&self, kind: PauseKind) -> usize {
        self.pauses.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Sleep for RecordSleep {
    fn sleep(&mut self, kind: PauseKind, duration: Duration) {
        self.pauses.push((kind, duration));
    }
}

pub struct Pacer<S: Sleep = ThreadSleep> {
    opts: PacingOptions,
    sleeper: S,
    rng: StdRng,
}

impl<S: Sleep> Pacer<S> {
    pub fn new(opts: PacingOptions, sleeper: S) -> Self {
        Self { opts, sleeper, rng: StdRng::from_entropy() }
    }

    /// Reproducible delays.
    pub fn seeded(opts: PacingOptions, sleeper: S, seed: u64) -> Self {
        Self { opts, sleeper, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn options(&self) -> &PacingOptions {
        &self.opts
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn into_sleeper(self) -> S {
        self.sleeper
    }

    pub fn inter_query_delay(&mut self) {
        let d = self.draw(self.opts.query());
        logd!("sleeping {:.2}s before next query", d.as_secs_f64());
        self.sleeper.sleep(PauseKind::Query, d);
    }

    pub fn inter_batch_delay(&mut self) {
        let d = self.draw(self.opts.batch());
        logf!("waiting {:.1}s between batches...", d.as_secs_f64());
        self.sleeper.sleep(PauseKind::Batch, d);
    }

    /// Call once after every site query; `done` counts queries for the
    /// current protein so far, this one included.
    pub fn after_query(&mut self, done: usize) {
        self.inter_query_delay();
        if is_batch_boundary(done, self.opts.batch_size()) {
            self.inter_batch_delay();
        }
    }

    fn draw(&mut self, range: DelayRange) -> Duration {
        let secs = self.rng.gen_range(range.low()..=range.high());
        // DelayRange::new guarantees `high` fits
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// `done` is a positive multiple of `batch_size`.
pub fn is_batch_boundary(done: usize, batch_size: usize) -> bool {
    done > 0 && batch_size > 0 && done % batch_size == 0
}
