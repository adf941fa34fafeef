/// Append-only CSV summary table
///
/// The header is written only when the file does not exist yet, so
/// repeated runs against one path accumulate rows under a single header.
/// Concurrent writers to the same path are not coordinated.
use crate::error::ExtractError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct OutputTable {
    path: PathBuf,
}

impl OutputTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `row`, writing `header` first if the table is new.
    ///
    /// Rows may be shorter than the header.
    pub fn append(&self, header: &[&str], row: &[String]) -> Result<(), ExtractError> {
        let is_new = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ExtractError::io("open output table", &self.path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        if is_new {
            info!("Creating output table {}", self.path.display());
            writer.write_record(header).map_err(|e| self.csv_error(e))?;
        }
        writer.write_record(row).map_err(|e| self.csv_error(e))?;
        writer
            .flush()
            .map_err(|e| ExtractError::io("flush output table", &self.path, e))?;

        debug!("Appended {} fields to {}", row.len(), self.path.display());
        Ok(())
    }

    fn csv_error(&self, source: csv::Error) -> ExtractError {
        ExtractError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}
