// src/specs/sites.rs

use scraper::Html;

use crate::config::consts::SITE_CELL_SELECTOR;
use crate::config::options::Endpoints;
use crate::core::html::{parse_selector, select_texts};
use crate::core::net::Fetch;
use crate::data::PhosphoSite;
use crate::error::Result;

/// Phosphosites listed on the search page for `protein`.
///
/// A non-success status means phosphonet has nothing for this id and yields
/// an empty list. Only transport failures are errors.
pub fn discover_sites(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    protein: &str,
) -> Result<Vec<PhosphoSite>> {
    let url = endpoints.search_url(protein);
    let page = fetcher.get(&url)?;

    if !page.is_success() {
        logw!("{protein}: search page returned HTTP {}, no sites", page.status);
        return Ok(Vec::new());
    }

    let sites = parse_sites(&page.body)?;
    logf!("{protein}: {} phosphosites found", sites.len());
    Ok(sites)
}

/// Split out for unit tests.
pub fn parse_sites(html_doc: &str) -> Result<Vec<PhosphoSite>> {
    let selector = parse_selector(SITE_CELL_SELECTOR)?;
    let doc = Html::parse_document(html_doc);
    Ok(select_texts(&doc, &selector)
        .into_iter()
        .map(PhosphoSite::new)
        .collect())
}
