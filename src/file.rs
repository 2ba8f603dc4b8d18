// src/file.rs

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::write_table;
use crate::data::{COLUMNS, ProteinKinaseTable};
use crate::error::{Result, ScrapeError};
use crate::runner::TableSink;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::config(format!(
            "output path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Write the table with its header row to `path`, replacing any old file.
pub fn write_table_file(path: &Path, table: &ProteinKinaseTable, format: ExportFormat) -> Result<()> {
    write_atomic(path, |w| write_table(w, &COLUMNS, table.rows(), format.delim()))
}

/// Fill a temp file next to `path`, then rename it over `path`.
/// On any error the temp file is removed and `path` is left as it was.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        fill(&mut out)?;
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// One file per protein under `ExportOptions::out_dir`.
pub struct FileSink {
    export: ExportOptions,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(export: ExportOptions) -> Result<Self> {
        ensure_directory(&export.out_dir)?;
        Ok(Self { export, written: Vec::new() })
    }

    pub fn path_for(&self, protein: &str) -> PathBuf {
        self.export.path_for(&sanitize_file_stem(protein))
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TableSink for FileSink {
    fn write(&mut self, table: &ProteinKinaseTable) -> Result<()> {
        let path = self.path_for(&table.protein);
        if self.written.contains(&path) {
            return Err(ScrapeError::config(format!(
                "{} would overwrite {} written earlier in this run",
                table.protein,
                path.display()
            )));
        }
        write_table_file(&path, table, self.export.format)?;
        logf!("{}: wrote {} rows to {}", table.protein, table.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}
