/// Solver log loader
///
/// Reads a log once into memory. Every line keeps its terminator, so a
/// field slice that stops one character before the end removes exactly
/// the `\n`.
use crate::error::ExtractError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InputLog {
    path: PathBuf,
    lines: Vec<String>,
}

impl InputLog {
    /// Load all lines of the log at `path`
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let bytes = fs::read(path).map_err(|e| ExtractError::io("read log", path, e))?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(Self::from_content(path, &content))
    }

    /// Build a log from text already in memory
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let lines = content
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix("\r\n") {
                Some(body) => format!("{}\n", body),
                None => line.to_string(),
            })
            .collect();

        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = (usize, &str)> + '_ {
        self.lines.iter().map(String::as_str).enumerate()
    }

    /// Index of the final line, if the log is not empty
    pub fn last_index(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_terminators() {
        let log = InputLog::from_content("x.cnf.log", "first\nsecond\nthird");
        assert_eq!(log.line_count(), 3);
        assert_eq!(log.line(0), Some("first\n"));
        assert_eq!(log.line(2), Some("third"));
        assert_eq!(log.line(3), None);
        assert_eq!(log.last_index(), Some(2));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let log = InputLog::from_content("x.cnf.log", "a\r\nb\r\n");
        assert_eq!(log.line_count(), 2);
        assert_eq!(log.line(0), Some("a\n"));
        assert_eq!(log.line(1), Some("b\n"));
    }

    #[test]
    fn test_empty_log() {
        let log = InputLog::from_content("x.cnf.log", "");
        assert_eq!(log.line_count(), 0);
        assert_eq!(log.last_index(), None);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputLog::load(&dir.path().join("absent.cnf.log")).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(!err.is_malformed());
    }
}
