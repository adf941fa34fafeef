/// One log in, one summary row out
use crate::error::ExtractError;
use crate::identifier::test_case_identifier;
use crate::input_log::InputLog;
use crate::layout::LogLayout;
use crate::output_table::OutputTable;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// What an invocation appended to the output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Appended { row: Vec<String> },
    /// The log was too short: a sentinel row was appended and the log
    /// file deleted
    ShortLog { row: Vec<String> },
}

impl Outcome {
    pub fn row(&self) -> &[String] {
        match self {
            Outcome::Appended { row } | Outcome::ShortLog { row } => row,
        }
    }
}

pub struct LogRowExtractor {
    layout: LogLayout,
}

impl LogRowExtractor {
    pub fn new(layout: LogLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LogLayout {
        &self.layout
    }

    /// Summarize the log at `input` into the table at `output`.
    ///
    /// Malformed logs leave both files untouched.
    pub fn process(&self, input: &Path, output: &Path) -> Result<Outcome, ExtractError> {
        let identifier = test_case_identifier(input);
        let log = InputLog::load(input)?;
        let table = OutputTable::new(output);

        if self.layout.is_short(&log) {
            warn!(
                "Error Data: {} has {} lines (at most {}), recording sentinel row",
                input.display(),
                log.line_count(),
                self.layout.short_log_threshold()
            );
            let row = self.layout.sentinel_row(&identifier);
            table.append(self.layout.header(), &row)?;

            fs::remove_file(input).map_err(|e| ExtractError::io("delete short log", input, e))?;
            info!("Deleted short log {}", input.display());

            return Ok(Outcome::ShortLog { row });
        }

        let mut row = Vec::with_capacity(self.layout.header().len());
        row.push(identifier);
        row.extend(self.layout.extract(&log)?);

        table.append(self.layout.header(), &row)?;
        info!(
            "Appended {} row for '{}' to {}",
            self.layout.name(),
            row[0],
            output.display()
        );

        Ok(Outcome::Appended { row })
    }
}
