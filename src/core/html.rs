// src/core/html.rs
use scraper::{Html, Node, Selector};

use crate::error::{Result, ScrapeError};

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Selector(format!("'{selector}': {e}")))
}

/// Text content of every element matching `selector`, trimmed, in document order.
pub fn select_texts(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// Every non-blank text node under the root, trimmed, in document order.
/// Script and style bodies are not page text and are skipped.
pub fn stripped_strings(doc: &Html) -> Vec<String> {
    doc.root_element()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else { return None };
            let in_code = node
                .parent()
                .and_then(|p| p.value().as_element())
                .is_some_and(|el| matches!(el.name(), "script" | "style"));
            if in_code {
                return None;
            }
            let t = text.trim();
            (!t.is_empty()).then(|| s!(t))
        })
        .collect()
}
