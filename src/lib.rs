// Core modules
pub mod extractor;
pub mod identifier;
pub mod input_log;
pub mod layout;
pub mod output_table;
pub mod rules;

// Ambient: configuration, errors, command line entry points
pub mod cli;
pub mod config;
pub mod error;

pub use error::ExtractError;
pub use extractor::{LogRowExtractor, Outcome};
pub use layout::LogLayout;
