/// Append compile time and graph size of one solver log to a CSV table
///
/// Usage: get-subdata inputFile outputFile
use log_row_extractor::{cli, LogLayout};

fn main() -> anyhow::Result<()> {
    cli::run(
        "get-subdata",
        "Summarize a compile/graph-size solver log into a CSV table",
        LogLayout::graph_size(),
    )
}
