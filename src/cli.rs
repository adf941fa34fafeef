/// Command line entry point shared by `get-data` and `get-subdata`
use crate::config::Config;
use crate::extractor::{LogRowExtractor, Outcome};
use crate::layout::LogLayout;
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Solver log to summarize. Deleted when it is too short.
    #[arg(value_name = "inputFile", allow_hyphen_values = true)]
    pub input_file: PathBuf,

    /// CSV table the row is appended to. Created with a header if absent.
    #[arg(value_name = "outputFile", allow_hyphen_values = true)]
    pub output_file: PathBuf,
}

impl ExtractArgs {
    /// Parse the process arguments for `program`.
    ///
    /// Any argument count other than two prints
    /// `Usage: <program> inputFile outputFile` and exits with status 2.
    /// There is no help flag and paths may start with `-`.
    pub fn parse_for(program: &'static str, about: &'static str) -> Self {
        let matches = Self::command()
            .name(program)
            .bin_name(program)
            .about(about)
            .disable_help_flag(true)
            .override_usage(format!("{} inputFile outputFile", program))
            .get_matches();

        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Run one extraction with `layout` and report the outcome.
pub fn run(program: &'static str, about: &'static str, layout: LogLayout) -> Result<()> {
    let args = ExtractArgs::parse_for(program, about);

    // Load .env file if present (fails silently if not found)
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_tracing(&config);
    config.log_config();

    let extractor = LogRowExtractor::new(layout);
    let outcome = extractor
        .process(&args.input_file, &args.output_file)
        .with_context(|| {
            format!(
                "{}: could not summarize {} into {}",
                program,
                args.input_file.display(),
                args.output_file.display()
            )
        })?;

    if let Outcome::ShortLog { .. } = outcome {
        if !config.quiet {
            println!("Error Data");
        }
    }

    Ok(())
}
