// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub proteins: Vec<String>,
    pub endpoints: Endpoints,
    pub pacing: PacingOptions,
    pub export: ExportOptions,
}

impl RunOptions {
    pub fn new(proteins: Vec<String>) -> Self {
        Self {
            proteins,
            endpoints: Endpoints::default(),
            pacing: PacingOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/* ---------------- Endpoints ---------------- */

/// URL templates for the two page kinds. `{uni}` is the protein id,
/// `{ps}` the phosphosite label; both are substituted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub search_tmpl: String,
    pub predict_tmpl: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_tmpl: s!(SEARCH_URL_TMPL),
            predict_tmpl: s!(PREDICT_URL_TMPL),
        }
    }
}

impl Endpoints {
    pub fn search_url(&self, protein: &str) -> String {
        self.search_tmpl.replace("{uni}", protein)
    }

    pub fn predict_url(&self, protein: &str, site: &str) -> String {
        self.predict_tmpl
            .replace("{uni}", protein)
            .replace("{ps}", site)
    }
}

/* ---------------- Pacing ---------------- */

/// Closed interval of seconds a delay is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayRange {
    low: f64,
    high: f64,
}

impl DelayRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ScrapeError::config(format!("delay bounds must be finite, got [{low}, {high}]")));
        }
        if low < 0.0 {
            return Err(ScrapeError::config(format!("delay lower bound must be >= 0, got {low}")));
        }
        if low > high {
            return Err(ScrapeError::config(format!("delay lower bound {low} exceeds upper bound {high}")));
        }
        if Duration::try_from_secs_f64(high).is_err() {
            return Err(ScrapeError::config(format!("delay upper bound {high}s is too large")));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 { self.low }
    pub fn high(&self) -> f64 { self.high }

    pub fn contains(&self, d: Duration) -> bool {
        let secs = d.as_secs_f64();
        // Duration rounds to whole nanoseconds
        secs >= self.low - 1e-9 && secs <= self.high + 1e-9
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PacingOptions {
    query: DelayRange,
    batch: DelayRange,
    batch_size: usize,
}

impl Default for PacingOptions {
    fn default() -> Self {
        Self {
            query: DelayRange { low: QUERY_DELAY_SECS.0, high: QUERY_DELAY_SECS.1 },
            batch: DelayRange { low: BATCH_DELAY_SECS.0, high: BATCH_DELAY_SECS.1 },
            batch_size: BATCH_SIZE,
        }
    }
}

impl PacingOptions {
    pub fn new(query: DelayRange, batch: DelayRange, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(ScrapeError::config("batch size must be at least 1"));
        }
        Ok(Self { query, batch, batch_size })
    }

    /// Zero delays everywhere. Handy for tests and dry runs against fixtures.
    pub fn none() -> Self {
        let zero = DelayRange { low: 0.0, high: 0.0 };
        Self { query: zero, batch: zero, batch_size: BATCH_SIZE }
    }

    pub fn query(&self) -> DelayRange { self.query }
    pub fn batch(&self) -> DelayRange { self.batch }
    pub fn batch_size(&self) -> usize { self.batch_size }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub format: ExportFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>_phos_kinexus.<ext>`
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, OUTPUT_SUFFIX, ".", self.format.ext()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_substitute_verbatim() {
        let ep = Endpoints::default();
        assert_eq!(ep.search_url("P00533"), "http://www.phosphonet.ca/?search=P00533");
        assert_eq!(
            ep.predict_url("P00533", "Y845"),
            "http://www.phosphonet.ca/kinasepredictor.aspx?uni=P00533&ps=Y845"
        );
    }

    #[test]
    fn delay_range_rejects_bad_bounds() {
        assert!(DelayRange::new(5.0, 2.0).is_err());
        assert!(DelayRange::new(-1.0, 2.0).is_err());
        assert!(DelayRange::new(f64::NAN, 2.0).is_err());
        assert!(DelayRange::new(1.0, f64::INFINITY).is_err());
        assert!(DelayRange::new(3.0, 3.0).is_ok());
    }

    #[test]
    fn delay_range_rejects_bounds_beyond_duration() {
        assert!(matches!(DelayRange::new(1.0, 1e20), Err(ScrapeError::Config(_))));
        assert!(DelayRange::new(1e300, 1e300).is_err());
        assert!(DelayRange::new(0.0, 86_400.0 * 365.0).is_ok());
    }

    #[test]
    fn batch_size_zero_rejected() {
        let r = DelayRange::new(0.0, 1.0).unwrap();
        let err = PacingOptions::new(r, r, 0).unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
        assert!(PacingOptions::new(r, r, 1).is_ok());
    }

    #[test]
    fn defaults_match_documented_values() {
        let p = PacingOptions::default();
        assert_eq!((p.query().low(), p.query().high()), (2.0, 5.0));
        assert_eq!((p.batch().low(), p.batch().high()), (30.0, 40.0));
        assert_eq!(p.batch_size(), 30);
    }

    #[test]
    fn output_path_uses_suffix_and_format() {
        let mut e = ExportOptions { out_dir: PathBuf::from("out"), format: ExportFormat::Csv };
        assert_eq!(e.path_for("P00533"), PathBuf::from("out").join("P00533_phos_kinexus.csv"));
        e.format = ExportFormat::Tsv;
        assert!(e.path_for("P00533").to_string_lossy().ends_with("P00533_phos_kinexus.tsv"));
    }
}
