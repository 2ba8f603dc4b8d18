// src/runner.rs
use std::fmt;

use crate::config::options::Endpoints;
use crate::core::net::Fetch;
use crate::data::{PhosphoSite, ProteinKinaseTable, RawKinaseRecord};
use crate::error::{Result, ScrapeError};
use crate::normalize::to_records;
use crate::pacing::{Pacer, Sleep};
use crate::progress::Progress;
use crate::specs::{kinases::fetch_kinase_block, sites::discover_sites};
use crate::table::finalize;

/// Where finished tables go. Called once per successful protein.
pub trait TableSink {
    fn write(&mut self, table: &ProteinKinaseTable) -> Result<()>;
}

/// Keeps tables in memory.
impl TableSink for Vec<ProteinKinaseTable> {
    fn write(&mut self, table: &ProteinKinaseTable) -> Result<()> {
        self.push(table.clone());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    DiscoverSites,
    FetchBlock(String),
    Finalize,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DiscoverSites => f.write_str("discover sites"),
            Stage::FetchBlock(site) => write!(f, "fetch kinases for {site}"),
            Stage::Finalize => f.write_str("finalize"),
            Stage::Write => f.write_str("write"),
        }
    }
}

/// Why one protein produced no output.
#[derive(Debug)]
pub struct RunFailure {
    pub protein: String,
    pub stage: Stage,
    pub error: ScrapeError,
}

impl RunFailure {
    fn new(protein: &str, stage: Stage, error: ScrapeError) -> Self {
        Self { protein: s!(protein), stage, error }
    }
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.protein, self.stage, self.error)
    }
}

impl std::error::Error for RunFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// (protein, rows written)
    pub completed: Vec<(String, usize)>,
    pub failures: Vec<RunFailure>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives the per-protein pipeline: sites, then one prediction page per
/// site with pacing after each, then finalize and hand off.
pub struct Scraper<'a, S: Sleep> {
    fetcher: &'a dyn Fetch,
    endpoints: &'a Endpoints,
    pacer: Pacer<S>,
}

impl<'a, S: Sleep> Scraper<'a, S> {
    pub fn new(fetcher: &'a dyn Fetch, endpoints: &'a Endpoints, pacer: Pacer<S>) -> Self {
        Self { fetcher, endpoints, pacer }
    }

    pub fn pacer(&self) -> &Pacer<S> {
        &self.pacer
    }

    pub fn into_pacer(self) -> Pacer<S> {
        self.pacer
    }

    /// Every protein in order. A failing protein is recorded and skipped;
    /// its rows are dropped and nothing is written for it.
    pub fn run(
        &mut self,
        proteins: &[String],
        sink: &mut dyn TableSink,
        mut progress: Option<&mut dyn Progress>,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(proteins.len());
        }

        for protein in proteins {
            let outcome = self
                .scrape_protein(protein, progress.as_deref_mut())
                .and_then(|table| {
                    sink.write(&table)
                        .map(|_| table.len())
                        .map_err(|e| RunFailure::new(protein, Stage::Write, e))
                });

            match outcome {
                Ok(rows) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(protein, rows);
                    }
                    summary.completed.push((protein.clone(), rows));
                }
                Err(failure) => {
                    loge!("{failure}");
                    if failure.error.is_layout_violation() {
                        logw!("{protein}: prediction page layout no longer matches, check config::consts");
                    }
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(protein, &failure.to_string());
                    }
                    summary.failures.push(failure);
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        summary
    }

    /// One protein's finished table.
    pub fn scrape_protein(
        &mut self,
        protein: &str,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<ProteinKinaseTable, RunFailure> {
        let sites = discover_sites(self.fetcher, self.endpoints, protein)
            .map_err(|e| RunFailure::new(protein, Stage::DiscoverSites, e))?;

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{protein}: {} phosphosites", sites.len()));
        }

        let records = self.collect_sites(protein, &sites, progress)?;

        finalize(protein, records).map_err(|e| RunFailure::new(protein, Stage::Finalize, e))
    }

    fn collect_sites(
        &mut self,
        protein: &str,
        sites: &[PhosphoSite],
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<RawKinaseRecord>, RunFailure> {
        let mut records = Vec::new();

        for (idx, site) in sites.iter().enumerate() {
            match fetch_kinase_block(self.fetcher, self.endpoints, protein, site) {
                Ok(Some(block)) => records.extend(to_records(&block, protein, site)),
                Ok(None) => {}
                Err(e) => return Err(RunFailure::new(protein, Stage::FetchBlock(s!(site.label())), e)),
            }

            let done = idx + 1;
            if let Some(p) = progress.as_deref_mut() {
                p.site_done(protein, done, sites.len());
            }
            self.pacer.after_query(done);
        }
        Ok(records)
    }
}
