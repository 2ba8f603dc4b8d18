// src/table.rs

use crate::core::sanitize::replace_commas;
use crate::data::{KinaseRecord, ProteinKinaseTable, RawKinaseRecord};
use crate::error::{Result, ScrapeError};

/// Cast `site` and both scores to `i32`, replace commas in `kinase_name`,
/// and wrap the rows as `protein`'s table. Row order is kept as given.
///
/// The first value that is not an integer literal fails the whole table.
pub fn finalize(protein: &str, records: Vec<RawKinaseRecord>) -> Result<ProteinKinaseTable> {
    let records = records
        .into_iter()
        .map(finalize_record)
        .collect::<Result<Vec<_>>>()?;

    Ok(ProteinKinaseTable { protein: s!(protein), records })
}

fn finalize_record(raw: RawKinaseRecord) -> Result<KinaseRecord> {
    let site = cast_i32(&raw, "site", &raw.site)?;
    let kinexus_score = cast_i32(&raw, "kinexus_score", &raw.kinexus_score)?;
    let kinexus_score_v2 = cast_i32(&raw, "kinexus_score_v2", &raw.kinexus_score_v2)?;
    let kinase_name = replace_commas(&raw.kinase_name);

    Ok(KinaseRecord {
        substrate: raw.substrate,
        aa: raw.aa,
        site,
        kinase_rank: raw.kinase_rank,
        kinase_name,
        kinase_id: raw.kinase_id,
        kinexus_score,
        kinexus_score_v2,
    })
}

fn cast_i32(raw: &RawKinaseRecord, column: &'static str, value: &str) -> Result<i32> {
    value.trim().parse::<i32>().map_err(|_| ScrapeError::TypeConversion {
        protein: raw.substrate.clone(),
        site: join!(&raw.aa, &raw.site),
        column,
        value: s!(value),
    })
}
