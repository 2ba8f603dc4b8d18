// src/specs/mod.rs
//
// One module per phosphonet page kind: fetch, then pull out just what the
// pipeline needs. Selectors and markers come from config::consts.

pub mod kinases;
pub mod sites;
