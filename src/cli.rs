// src/cli.rs
use std::{collections::HashMap, fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::config::consts::{BATCH_DELAY_SECS, BATCH_SIZE, DEFAULT_OUT_DIR, QUERY_DELAY_SECS};
use crate::config::options::{DelayRange, ExportFormat, ExportOptions, PacingOptions, RunOptions};
use crate::core::net::HttpFetcher;
use crate::core::sanitize::sanitize_file_stem;
use crate::file::FileSink;
use crate::pacing::{Pacer, ThreadSleep};
use crate::progress::Progress;
use crate::runner::Scraper;

/// Get protein phosphosites and their predicted kinases from phosphonet.ca
#[derive(Parser, Debug)]
#[command(name = "phospho_scrape", version, about)]
pub struct Args {
    /// Human UniProt accession numbers of proteins to retrieve
    #[arg(value_name = "UNIPROT_ID")]
    pub ids: Vec<String>,

    /// Read more ids from a file, one per line ('#' starts a comment)
    #[arg(long, value_name = "PATH")]
    pub ids_file: Option<PathBuf>,

    /// Directory to store output in, created if missing
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub outdir: PathBuf,

    /// Min sleep between phosphosite queries, seconds
    #[arg(long, value_name = "SECS", default_value_t = QUERY_DELAY_SECS.0)]
    pub sil: f64,

    /// Max sleep between phosphosite queries, seconds
    #[arg(long, value_name = "SECS", default_value_t = QUERY_DELAY_SECS.1)]
    pub sih: f64,

    /// Number of phosphosites per batch between long sleeps
    #[arg(long, value_name = "N", default_value_t = BATCH_SIZE)]
    pub bs: usize,

    /// Min sleep between batches, seconds
    #[arg(long, value_name = "SECS", default_value_t = BATCH_DELAY_SECS.0)]
    pub sbl: f64,

    /// Max sleep between batches, seconds
    #[arg(long, value_name = "SECS", default_value_t = BATCH_DELAY_SECS.1)]
    pub sbh: f64,

    /// Output delimiter
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate everything before the first request goes out.
    pub fn into_options(self) -> Result<RunOptions> {
        let pacing = PacingOptions::new(
            DelayRange::new(self.sil, self.sih).wrap_err("--sil/--sih")?,
            DelayRange::new(self.sbl, self.sbh).wrap_err("--sbl/--sbh")?,
            self.bs,
        )
        .wrap_err("--bs")?;

        let mut ids = self.ids;
        if let Some(path) = &self.ids_file {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading ids file {}", path.display()))?;
            ids.extend(parse_ids_file(&text));
        }
        let proteins = dedup_keep_order(ids);
        if proteins.is_empty() {
            bail!("no protein ids given (pass UNIPROT_ID arguments or --ids-file)");
        }
        if let Some((a, b)) = stem_collision(&proteins) {
            bail!("ids {a:?} and {b:?} would both be written to the same output file");
        }

        let mut opts = RunOptions::new(proteins);
        opts.pacing = pacing;
        opts.export = ExportOptions { out_dir: self.outdir, format: self.format };
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.into_options()?;
    run_with(&opts)
}

pub fn run_with(opts: &RunOptions) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let mut sink = FileSink::new(opts.export.clone())?;
    let pacer = Pacer::new(opts.pacing, ThreadSleep);
    let mut scraper = Scraper::new(&fetcher, &opts.endpoints, pacer);
    let mut progress = CliProgress::default();

    let summary = scraper.run(&opts.proteins, &mut sink, Some(&mut progress));

    for path in sink.written() {
        println!("{}", path.display());
    }
    if !summary.is_clean() {
        for f in &summary.failures {
            eprintln!("FAILED {f}");
        }
        let failed: Vec<&str> = summary.failures.iter().map(|f| f.protein.as_str()).collect();
        bail!(
            "{} of {} proteins failed; re-run with: {}",
            failed.len(),
            opts.proteins.len(),
            failed.join(" ")
        );
    }
    Ok(())
}

/// Ids one per line; blank lines and `#` comments ignored.
pub fn parse_ids_file(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.split('#').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

fn dedup_keep_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter()
        .map(|id| s!(id.trim()))
        .filter(|id| !id.is_empty() && seen.insert(id.clone()))
        .collect()
}

/// First pair of distinct ids whose output file stems are equal.
fn stem_collision(ids: &[String]) -> Option<(&str, &str)> {
    let mut stems: HashMap<String, &str> = HashMap::new();
    for id in ids {
        if let Some(prev) = stems.insert(sanitize_file_stem(id), id.as_str()) {
            return Some((prev, id.as_str()));
        }
    }
    None
}

/// Status lines on stderr.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn site_done(&mut self, protein: &str, done: usize, total: usize) {
        eprintln!("  {protein}: site {done}/{total}");
    }
    fn item_done(&mut self, protein: &str, rows: usize) {
        self.done += 1;
        eprintln!("{protein}: {rows} rows ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, protein: &str, _reason: &str) {
        self.done += 1;
        eprintln!("{protein}: failed ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Done ({}/{})", self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["phospho_scrape"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_documented_values() {
        let a = args(&["P00533"]);
        assert_eq!((a.sil, a.sih, a.bs, a.sbl, a.sbh), (2.0, 5.0, 30, 30.0, 40.0));
        assert_eq!(a.outdir, PathBuf::from("."));
        let o = a.into_options().unwrap();
        assert_eq!(o.proteins, ["P00533"]);
        assert_eq!(o.pacing, PacingOptions::default());
    }

    #[test]
    fn inverted_bounds_rejected_up_front() {
        assert!(args(&["P00533", "--sil", "6", "--sih", "5"]).into_options().is_err());
        assert!(args(&["P00533", "--sbl", "50"]).into_options().is_err());
        assert!(args(&["P00533", "--bs", "0"]).into_options().is_err());
        assert!(args(&["P00533", "--sih", "1e20"]).into_options().is_err());
    }

    #[test]
    fn needs_at_least_one_id() {
        assert!(args(&[]).into_options().is_err());
    }

    #[test]
    fn ids_dedup_in_first_seen_order() {
        let o = args(&["P2", "P1", "P2"]).into_options().unwrap();
        assert_eq!(o.proteins, ["P2", "P1"]);
    }

    #[test]
    fn ids_sharing_a_file_stem_rejected() {
        assert!(args(&["A/B", "A_B"]).into_options().is_err());
        assert!(args(&["A/B", "A/B"]).into_options().is_ok());
        assert_eq!(stem_collision(&[s!("P1"), s!("x y"), s!("x_y")]), Some(("x y", "x_y")));
    }

    #[test]
    fn ids_file_format() {
        let ids = parse_ids_file("P00533\n\n# comment\nQ9Y6R4  # trailing\n  O15530 \n");
        assert_eq!(ids, ["P00533", "Q9Y6R4", "O15530"]);
    }

    #[test]
    fn tsv_format_flag() {
        let o = args(&["P00533", "--format", "tsv", "-o", "out"]).into_options().unwrap();
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert_eq!(o.export.out_dir, PathBuf::from("out"));
    }
}
