// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod normalize;
pub mod pacing;
pub mod progress;
pub mod runner;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::ScrapeError;
