// src/core/net.rs
//
// Blocking HTTP GET. One request at a time, no retries.

use std::collections::HashMap;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Status plus body. The body is only read for 2xx responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: s!() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can turn a URL into a `Page`.
///
/// `Err` is reserved for transport failures; an HTTP error status is a
/// normal `Page` the caller decides about.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Page>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::transport("<client init>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            logd!("GET {url} -> {status}");
            return Ok(Page::status(status.as_u16()));
        }
        let body = resp.text().map_err(|e| ScrapeError::transport(url, e))?;
        Ok(Page { status: status.as_u16(), body })
    }
}

/// Canned pages keyed by URL; unknown URLs answer 404.
/// Lets the pipeline run against fixtures.
#[derive(Clone, Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Page>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, page: Page) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, page: Page) {
        self.pages.insert(url.into(), page);
    }
}

impl Fetch for StaticFetcher {
    fn get(&self, url: &str) -> Result<Page> {
        Ok(self.pages.get(url).cloned().unwrap_or_else(|| Page::status(404)))
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<Page> {
        (**self).get(url)
    }
}
