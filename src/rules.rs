/// Per-field extraction rules
///
/// A field is described by data: which line to read, where the value
/// starts on that line, how to clean it up and what ends up in the row.
/// Format drift in the solver output changes a [`FieldRule`], not code.
use crate::error::ExtractError;
use crate::input_log::InputLog;
use tracing::debug;

/// A fixed substring expected at a character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub start: usize,
    pub text: &'static str,
}

impl Marker {
    pub const fn new(start: usize, text: &'static str) -> Self {
        Self { start, text }
    }

    /// Characters `start..start + text.len()` of `line` equal `text`
    pub fn matches(&self, line: &str) -> bool {
        let width = self.text.chars().count();
        let window: String = line.chars().skip(self.start).take(width).collect();
        window == self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelector {
    /// 0-based line number
    Fixed(usize),
    /// Every line is tested; the last matching line wins
    LastMarked(Marker),
    /// Only the final line of the log is tested
    FinalLineMarked(Marker),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStep {
    /// Strip surrounding whitespace
    Trim,
    /// Remove a unit suffix such as `s`
    DropLastChar,
    /// Keep everything before the first space
    FirstToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Extracted,
    /// The value is still read from the log but the row records this
    /// literal instead. Consumers of the produced tables rely on it.
    Constant(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// A missing source line is a malformed log
    Required,
    /// A missing source line drops the column from the row
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub selector: LineSelector,
    /// Character offset where the value starts
    pub offset: usize,
    pub steps: &'static [PostStep],
    pub emit: Emit,
    pub presence: Presence,
}

impl FieldRule {
    /// Required field read from a fixed line
    pub const fn fixed(name: &'static str, line: usize, offset: usize, steps: &'static [PostStep]) -> Self {
        Self {
            name,
            selector: LineSelector::Fixed(line),
            offset,
            steps,
            emit: Emit::Extracted,
            presence: Presence::Required,
        }
    }

    pub const fn with_selector(mut self, selector: LineSelector) -> Self {
        self.selector = selector;
        self
    }

    pub const fn with_emit(mut self, emit: Emit) -> Self {
        self.emit = emit;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Apply the rule to `log`.
    ///
    /// Returns `Ok(None)` when an optional field's line is absent.
    pub fn apply(&self, log: &InputLog) -> Result<Option<String>, ExtractError> {
        let Some(index) = self.select_line(log)? else {
            debug!(field = self.name, "optional field absent");
            return Ok(None);
        };
        let line = log.line(index).unwrap_or_default();

        let raw = match slice_before_last(line, self.offset) {
            Some(raw) => raw,
            // The recorded value does not depend on the line
            None if matches!(self.emit, Emit::Constant(_)) => String::new(),
            None => {
                return Err(ExtractError::LineTooShort {
                    path: log.path().to_path_buf(),
                    field: self.name,
                    line: index,
                    offset: self.offset,
                })
            }
        };
        let value = post_process(&raw, self.steps);

        match self.emit {
            Emit::Extracted => {
                debug!(field = self.name, line = index, value = %value, "extracted field");
                Ok(Some(value))
            }
            Emit::Constant(constant) => {
                debug!(
                    field = self.name,
                    line = index,
                    discarded = %value,
                    recorded = constant,
                    "field recorded as constant"
                );
                Ok(Some(constant.to_string()))
            }
        }
    }

    fn select_line(&self, log: &InputLog) -> Result<Option<usize>, ExtractError> {
        let index = match self.selector {
            LineSelector::Fixed(line) => {
                if line < log.line_count() {
                    Some(line)
                } else if self.presence == Presence::Required {
                    return Err(ExtractError::MissingLine {
                        path: log.path().to_path_buf(),
                        field: self.name,
                        line,
                        count: log.line_count(),
                    });
                } else {
                    None
                }
            }
            LineSelector::LastMarked(marker) => log
                .lines()
                .rev()
                .find(|(_, line)| marker.matches(line))
                .map(|(index, _)| index),
            LineSelector::FinalLineMarked(marker) => log
                .last_index()
                .filter(|&index| log.line(index).is_some_and(|line| marker.matches(line))),
        };

        match (index, self.selector, self.presence) {
            (None, LineSelector::LastMarked(marker), Presence::Required)
            | (None, LineSelector::FinalLineMarked(marker), Presence::Required) => {
                Err(ExtractError::MissingMarker {
                    path: log.path().to_path_buf(),
                    field: self.name,
                    marker: marker.text,
                })
            }
            (index, _, _) => Ok(index),
        }
    }
}

/// Characters from `offset` up to, but excluding, the last character.
///
/// `None` when the line, terminator included, has fewer than `offset`
/// characters. A line that ends exactly at `offset` yields `""`.
pub fn slice_before_last(line: &str, offset: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < offset {
        return None;
    }
    let end = chars.len().saturating_sub(1).max(offset);
    Some(chars[offset..end].iter().collect())
}

pub fn post_process(raw: &str, steps: &[PostStep]) -> String {
    let mut value = raw.to_string();
    for step in steps {
        value = match step {
            PostStep::Trim => value.trim().to_string(),
            PostStep::DropLastChar => {
                let mut chars = value.chars();
                chars.next_back();
                chars.as_str().to_string()
            }
            PostStep::FirstToken => value.split(' ').next().unwrap_or_default().to_string(),
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIME: &[PostStep] = &[PostStep::Trim, PostStep::DropLastChar];

    fn log(lines: &[&str]) -> InputLog {
        let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        InputLog::from_content("case.cnf.log", &content)
    }

    #[test]
    fn test_marker_matches_window_only() {
        let marker = Marker::new(2, "Compile");
        assert!(marker.matches("  Compile time 0.50s\n"));
        assert!(!marker.matches("Compile time 0.50s\n"));
        assert!(!marker.matches("  Compil"));
        assert!(!marker.matches(""));
    }

    #[test]
    fn test_slice_before_last() {
        assert_eq!(slice_before_last("Nodes: 42\n", 7).as_deref(), Some("42"));
        assert_eq!(slice_before_last("Nodes: \n", 7).as_deref(), Some(""));
        assert_eq!(slice_before_last("Nodes\n", 7), None);
        assert_eq!(slice_before_last("Nodes:\n", 7).as_deref(), Some(""));
        assert_eq!(slice_before_last("  Nodes", 7).as_deref(), Some(""));
        assert_eq!(slice_before_last("  Node", 7), None);
        // Without a terminator the final real character is lost
        assert_eq!(slice_before_last("Nodes: 42", 7).as_deref(), Some("4"));
    }

    #[test]
    fn test_post_process_steps() {
        assert_eq!(post_process(" 1.23s ", TIME), "1.23");
        assert_eq!(
            post_process(" 5 (approx)", &[PostStep::Trim, PostStep::FirstToken]),
            "5"
        );
        assert_eq!(post_process("", TIME), "");
    }

    #[test]
    fn test_fixed_rule_reads_line() {
        let rule = FieldRule::fixed("Compile Time", 1, 14, TIME);
        let log = log(&["header", "Compile Time: 1.23s"]);
        assert_eq!(rule.apply(&log).unwrap().as_deref(), Some("1.23"));
    }

    #[test]
    fn test_fixed_rule_missing_line() {
        let rule = FieldRule::fixed("Total Time", 5, 11, TIME);
        let err = rule.apply(&log(&["only"])).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingLine { line: 5, count: 1, .. }
        ));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_fixed_rule_line_too_short() {
        let rule = FieldRule::fixed("Compile Time", 0, 14, TIME);
        let err = rule.apply(&log(&["short"])).unwrap_err();
        assert!(matches!(err, ExtractError::LineTooShort { offset: 14, .. }));
    }

    #[test]
    fn test_constant_rule_ignores_content() {
        let rule = FieldRule::fixed("Entailment", 0, 24, &[PostStep::Trim])
            .with_emit(Emit::Constant("1"));
        assert_eq!(rule.apply(&log(&["x"])).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_last_marked_keeps_last_match() {
        let rule = FieldRule::fixed("Compile Time", 0, 14, TIME)
            .with_selector(LineSelector::LastMarked(Marker::new(2, "Compile")));
        let log = log(&[
            "  Compile time 0.10s",
            "noise",
            "  Compile time 0.50s",
            "tail",
        ]);
        assert_eq!(rule.apply(&log).unwrap().as_deref(), Some("0.50"));
    }

    #[test]
    fn test_required_marker_missing() {
        let rule = FieldRule::fixed("Compile Time", 0, 14, TIME)
            .with_selector(LineSelector::LastMarked(Marker::new(2, "Compile")));
        let err = rule.apply(&log(&["nothing here"])).unwrap_err();
        assert!(matches!(err, ExtractError::MissingMarker { marker: "Compile", .. }));
    }

    #[test]
    fn test_final_line_marker_only_checks_last_line() {
        let rule = FieldRule::fixed("Nodes", 0, 7, &[PostStep::Trim])
            .with_selector(LineSelector::FinalLineMarked(Marker::new(2, "Nodes")))
            .optional();

        let hit = log(&["x", "  Nodes 10"]);
        assert_eq!(rule.apply(&hit).unwrap().as_deref(), Some("10"));

        let miss = log(&["  Nodes 10", "trailer"]);
        assert_eq!(rule.apply(&miss).unwrap(), None);

        assert_eq!(rule.apply(&log(&[])).unwrap(), None);
    }
}
