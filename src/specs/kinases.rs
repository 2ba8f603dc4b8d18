// src/specs/kinases.rs
//
// Kinase predictor page. The page has no usable structure around the
// predictions, so we flatten it to its text nodes, find the marker, and
// read a fixed-size block positionally.

use scraper::Html;

use crate::config::consts::{KINASE_BLOCK, KINASE_MARKER};
use crate::config::options::Endpoints;
use crate::core::html::stripped_strings;
use crate::core::net::Fetch;
use crate::data::{BlockShape, KinaseBlock, PhosphoSite};
use crate::error::{Result, ScrapeError};

/// Token stream ran out before the block was full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortStream {
    pub needed: usize,
    pub available: usize,
}

/// Fetch the prediction page for one site and cut out its kinase block.
///
/// `Ok(None)` when the page is unavailable (non-success status): the caller
/// skips the site. A page that loads but does not match the expected layout
/// is an error, never an empty result.
pub fn fetch_kinase_block(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    protein: &str,
    site: &PhosphoSite,
) -> Result<Option<KinaseBlock>> {
    let url = endpoints.predict_url(protein, site.label());
    let page = fetcher.get(&url)?;

    if !page.is_success() {
        logw!("{protein} {site}: prediction page returned HTTP {}, skipping site", page.status);
        return Ok(None);
    }

    logf!("querying kinases for: {url}");
    parse_kinase_block(&page.body, protein, site).map(Some)
}

/// Split out for unit tests and benches.
pub fn parse_kinase_block(html_doc: &str, protein: &str, site: &PhosphoSite) -> Result<KinaseBlock> {
    let doc = Html::parse_document(html_doc);
    let tokens = stripped_strings(&doc);
    extract_block(&tokens, KINASE_MARKER, KINASE_BLOCK).map_err(|e| match e {
        BlockError::NoMarker => ScrapeError::MarkerNotFound {
            protein: s!(protein),
            site: s!(site.label()),
            marker: s!(KINASE_MARKER),
        },
        BlockError::Short(ShortStream { needed, available }) => ScrapeError::MalformedBlock {
            protein: s!(protein),
            site: s!(site.label()),
            needed,
            available,
        },
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockError {
    NoMarker,
    Short(ShortStream),
}

/// Locate the first `marker` token and reshape what follows it.
pub(crate) fn extract_block(tokens: &[String], marker: &str, shape: BlockShape) -> Result<KinaseBlock, BlockError> {
    let at = tokens
        .iter()
        .position(|t| t == marker)
        .ok_or(BlockError::NoMarker)?;
    reshape(&tokens[at + 1..], shape).map_err(BlockError::Short)
}

/// Fill a `shape` grid row-major from the front of `tokens`.
///
/// Exactly `shape.len()` tokens are consumed; anything after them is page
/// footer and ignored. Fewer tokens is an error: the block is never padded
/// or truncated.
pub(crate) fn reshape(tokens: &[String], shape: BlockShape) -> Result<KinaseBlock, ShortStream> {
    let needed = shape.len();
    match tokens.get(..needed) {
        Some(cells) => Ok(KinaseBlock::from_cells(shape, cells.to_vec())),
        None => Err(ShortStream { needed, available: tokens.len() }),
    }
}
