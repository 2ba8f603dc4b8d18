// src/normalize.rs

use crate::config::consts::{COL_KINASE_ID, COL_KINASE_NAME, COL_KINEXUS_SCORE, COL_KINEXUS_SCORE_V2};
use crate::data::{KinaseBlock, PhosphoSite, RawKinaseRecord};

/// One record per block row, rank = row index + 1, tagged with the protein
/// and the site's residue/position. Values stay as scraped; typing happens
/// in `table::finalize`.
///
/// A block narrower than the column map leaves the missing fields empty,
/// which `finalize` then rejects as non-integer scores.
pub fn to_records(block: &KinaseBlock, protein: &str, site: &PhosphoSite) -> Vec<RawKinaseRecord> {
    let (aa, position) = site.split();
    let cell = |cols: &[String], i: usize| cols.get(i).cloned().unwrap_or_default();

    block
        .rows()
        .zip(1u32..)
        .map(|(cols, rank)| RawKinaseRecord {
            substrate: s!(protein),
            aa: s!(aa),
            site: s!(position),
            kinase_rank: rank,
            kinase_name: cell(cols, COL_KINASE_NAME),
            kinase_id: cell(cols, COL_KINASE_ID),
            kinexus_score: cell(cols, COL_KINEXUS_SCORE),
            kinexus_score_v2: cell(cols, COL_KINEXUS_SCORE_V2),
        })
        .collect()
}
