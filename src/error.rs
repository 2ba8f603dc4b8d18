// src/error.rs
use std::io;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connect, TLS, timeout, body read. Fatal for the current protein.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The prediction page returned success but the block marker is gone.
    #[error("{protein} {site}: marker {marker:?} not found on prediction page (page layout changed?)")]
    MarkerNotFound {
        protein: String,
        site: String,
        marker: String,
    },

    #[error("{protein} {site}: kinase block needs {needed} tokens after the marker, page has {available}")]
    MalformedBlock {
        protein: String,
        site: String,
        needed: usize,
        available: usize,
    },

    #[error("{protein} {site}: column `{column}` value {value:?} is not a 32-bit integer")]
    TypeConversion {
        protein: String,
        site: String,
        column: &'static str,
        value: String,
    },

    #[error("invalid CSS selector: {0}")]
    Selector(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ScrapeError {
    pub fn transport(url: &str, source: impl Into<BoxError>) -> Self {
        Self::Transport { url: s!(url), source: source.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Page no longer matches the extraction contract.
    pub fn is_layout_violation(&self) -> bool {
        matches!(self, Self::MarkerNotFound { .. } | Self::MalformedBlock { .. })
    }
}
