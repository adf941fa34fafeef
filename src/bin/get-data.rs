/// Append compile time, total time, graph size, model count and property
/// flags of one solver log to a CSV table
///
/// Usage: get-data inputFile outputFile
use log_row_extractor::{cli, LogLayout};

fn main() -> anyhow::Result<()> {
    cli::run(
        "get-data",
        "Summarize a full-metrics solver log into a CSV table",
        LogLayout::full_metrics(),
    )
}
