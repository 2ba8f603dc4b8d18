// src/data.rs
use std::fmt;

/// Phosphosite label as shown on the search page, e.g. `S245`.
///
/// Stored as scraped. The label is expected to be one residue letter followed
/// by a position, but nothing is checked here: an odd label simply splits
/// into an odd residue/position pair and fails later when the position is
/// cast to an integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhosphoSite(String);

impl PhosphoSite {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// (residue letter, position text)
    pub fn split(&self) -> (&str, &str) {
        let cut = self.0.chars().next().map_or(0, char::len_utf8);
        self.0.split_at(cut)
    }

    pub fn residue(&self) -> &str {
        self.split().0
    }

    pub fn position(&self) -> &str {
        self.split().1
    }
}

impl fmt::Display for PhosphoSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockShape {
    pub rows: usize,
    pub cols: usize,
}

impl BlockShape {
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row-major grid of raw text tokens. Always exactly `shape.len()` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KinaseBlock {
    shape: BlockShape,
    cells: Vec<String>,
}

impl KinaseBlock {
    /// Callers go through `specs::kinases::reshape`, which checks the length.
    pub(crate) fn from_cells(shape: BlockShape, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), shape.len());
        Self { shape, cells }
    }

    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    pub fn row(&self, i: usize) -> Option<&[String]> {
        let start = i.checked_mul(self.shape.cols)?;
        self.cells.get(start..start + self.shape.cols)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks_exact(self.shape.cols.max(1))
    }
}

/// One ranked kinase for one site, still text where the page gave text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawKinaseRecord {
    pub substrate: String,
    pub aa: String,
    pub site: String,
    pub kinase_rank: u32,
    pub kinase_name: String,
    pub kinase_id: String,
    pub kinexus_score: String,
    pub kinexus_score_v2: String,
}

/// Final, typed row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KinaseRecord {
    pub substrate: String,
    pub aa: String,
    pub site: i32,
    pub kinase_rank: u32,
    pub kinase_name: String,
    pub kinase_id: String,
    pub kinexus_score: i32,
    pub kinexus_score_v2: i32,
}

impl KinaseRecord {
    pub fn to_row(&self) -> Vec<String> {
        row![
            self.substrate,
            self.aa,
            self.site,
            self.kinase_rank,
            self.kinase_name,
            self.kinase_id,
            self.kinexus_score,
            self.kinexus_score_v2,
        ]
    }
}

/// Back to text form; finalizing the result again is a no-op.
impl From<KinaseRecord> for RawKinaseRecord {
    fn from(r: KinaseRecord) -> Self {
        Self {
            substrate: r.substrate,
            aa: r.aa,
            site: r.site.to_string(),
            kinase_rank: r.kinase_rank,
            kinase_name: r.kinase_name,
            kinase_id: r.kinase_id,
            kinexus_score: r.kinexus_score.to_string(),
            kinexus_score_v2: r.kinexus_score_v2.to_string(),
        }
    }
}

pub const COLUMNS: [&str; 8] = [
    "substrate",
    "aa",
    "site",
    "kinase_rank",
    "kinase_name",
    "kinase_id",
    "kinexus_score",
    "kinexus_score_v2",
];

/// All rows for one protein: site discovery order, then rank order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProteinKinaseTable {
    pub protein: String,
    pub records: Vec<KinaseRecord>,
}

impl ProteinKinaseTable {
    pub fn headers() -> Vec<String> {
        COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records.iter().map(KinaseRecord::to_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_splits_residue_and_position() {
        let s = PhosphoSite::new("S1070");
        assert_eq!(s.residue(), "S");
        assert_eq!(s.position(), "1070");
        assert_eq!(s.to_string(), "S1070");
    }

    #[test]
    fn odd_labels_split_without_panicking() {
        assert_eq!(PhosphoSite::new("").split(), ("", ""));
        assert_eq!(PhosphoSite::new("Y").split(), ("Y", ""));
        assert_eq!(PhosphoSite::new("é12").split(), ("é", "12"));
    }

    #[test]
    fn block_rows_are_row_major() {
        let shape = BlockShape { rows: 2, cols: 3 };
        let cells = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();
        let block = KinaseBlock::from_cells(shape, cells);
        assert_eq!(block.row(1).unwrap(), ["d", "e", "f"]);
        assert!(block.row(2).is_none());
        assert_eq!(block.rows().count(), 2);
    }

    #[test]
    fn record_row_follows_column_order() {
        let r = KinaseRecord {
            substrate: s!("P00533"),
            aa: s!("Y"),
            site: 845,
            kinase_rank: 1,
            kinase_name: s!("EGFR"),
            kinase_id: s!("K1"),
            kinexus_score: 950,
            kinexus_score_v2: 940,
        };
        assert_eq!(r.to_row(), ["P00533", "Y", "845", "1", "EGFR", "K1", "950", "940"]);
        assert_eq!(ProteinKinaseTable::headers().len(), r.to_row().len());
    }
}
