use std::env;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Tracing filter directive, e.g. "debug" or "log_row_extractor=trace"
    pub log_level: String,

    // Suppress the "Error Data" line on stdout
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            quiet: false,
        }
    }
}

impl Config {
    /// Read `LOG_EXTRACT_LOG_LEVEL` and `LOG_EXTRACT_QUIET`.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Config {
            log_level: lookup("LOG_EXTRACT_LOG_LEVEL")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),

            quiet: lookup("LOG_EXTRACT_QUIET")
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.quiet),
        }
    }

    pub fn log_config(&self) {
        tracing::debug!("Configuration:");
        tracing::debug!("   Log level: {}", self.log_level);
        tracing::debug!("   Quiet: {}", self.quiet);
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
