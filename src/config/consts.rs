// src/config/consts.rs
//
// Everything the scraper assumes about phosphonet.ca lives here.
// A change in the site's markup should only ever touch this file.

use crate::data::BlockShape;

// Net config
pub const SEARCH_URL_TMPL: &str = "http://www.phosphonet.ca/?search={uni}";
pub const PREDICT_URL_TMPL: &str = "http://www.phosphonet.ca/kinasepredictor.aspx?uni={uni}&ps={ps}";
pub const USER_AGENT: &str = concat!("phospho_scrape/", env!("CARGO_PKG_VERSION"));

// Search page: one cell per phosphosite label
pub const SITE_CELL_SELECTOR: &str = "td.pSiteNameCol";

// Prediction page: literal text node right before the first kinase's fields
pub const KINASE_MARKER: &str = "Kinase 1:";

// 50 kinases reported per site, 7 descriptor fields each
pub const KINASE_BLOCK: BlockShape = BlockShape { rows: 50, cols: 7 };

// Positional meaning of the block columns (0, 5, 6 are unused)
pub const COL_KINASE_NAME: usize = 1;
pub const COL_KINASE_ID: usize = 2;
pub const COL_KINEXUS_SCORE: usize = 3;
pub const COL_KINEXUS_SCORE_V2: usize = 4;

const _: () = assert!(COL_KINEXUS_SCORE_V2 < KINASE_BLOCK.cols);

// Pacing (seconds)
pub const QUERY_DELAY_SECS: (f64, f64) = (2.0, 5.0);
pub const BATCH_DELAY_SECS: (f64, f64) = (30.0, 40.0);
pub const BATCH_SIZE: usize = 30;

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const OUTPUT_SUFFIX: &str = "_phos_kinexus";
