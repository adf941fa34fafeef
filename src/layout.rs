/// Log layouts understood by the extractors
///
/// A layout bundles the table header, the short-log threshold and the
/// ordered field rules for one flavour of solver log.
use crate::error::ExtractError;
use crate::input_log::InputLog;
use crate::rules::{Emit, FieldRule, LineSelector, Marker, PostStep};

/// Placeholder written into every data column of a short log's row
pub const SENTINEL: &str = "-1";

const TIME: &[PostStep] = &[PostStep::Trim, PostStep::DropLastChar];
const COUNT: &[PostStep] = &[PostStep::Trim];
const FIRST_TOKEN: &[PostStep] = &[PostStep::Trim, PostStep::FirstToken];

const FULL_METRICS_HEADER: &[&str] = &[
    "Test Case(Index)",
    "Compile Time",
    "Total Time",
    "Nodes",
    "Edges",
    "Models",
    "Decomposability",
    "Entailment",
];

const GRAPH_SIZE_HEADER: &[&str] = &["Test Case(Index)", "Compile Time", "Nodes", "Edges"];

#[derive(Debug, Clone)]
pub struct LogLayout {
    name: &'static str,
    header: &'static [&'static str],
    short_log_threshold: usize,
    fields: Vec<FieldRule>,
}

impl LogLayout {
    /// Compile time, total time, graph size, model count and the two
    /// property flags of a full compilation run.
    ///
    /// Logs of 30 lines or fewer are short.
    pub fn full_metrics() -> Self {
        Self {
            name: "full-metrics",
            header: FULL_METRICS_HEADER,
            short_log_threshold: 30,
            fields: vec![
                FieldRule::fixed("Compile Time", 20, 14, TIME),
                FieldRule::fixed("Total Time", 35, 11, TIME),
                FieldRule::fixed("Nodes", 30, 7, COUNT),
                FieldRule::fixed("Edges", 31, 7, COUNT),
                FieldRule::fixed("Models", 32, 13, FIRST_TOKEN),
                // Known debt: both flags are read and then recorded as 1
                FieldRule::fixed("Decomposability", 33, 29, FIRST_TOKEN)
                    .with_emit(Emit::Constant("1")),
                FieldRule::fixed("Entailment", 34, 24, FIRST_TOKEN)
                    .with_emit(Emit::Constant("1")),
            ],
        }
    }

    /// Compile time plus whichever graph size the final line reports.
    ///
    /// Logs of 24 lines or fewer are short. Nodes and edges are only
    /// found on the last line of the log, so at most one of them is
    /// recorded and the row can be shorter than the header.
    pub fn graph_size() -> Self {
        Self {
            name: "graph-size",
            header: GRAPH_SIZE_HEADER,
            short_log_threshold: 24,
            fields: vec![
                FieldRule::fixed("Compile Time", 0, 14, TIME)
                    .with_selector(LineSelector::LastMarked(Marker::new(2, "Compile"))),
                FieldRule::fixed("Nodes", 0, 7, COUNT)
                    .with_selector(LineSelector::FinalLineMarked(Marker::new(2, "Nodes")))
                    .optional(),
                FieldRule::fixed("Edges", 0, 7, COUNT)
                    .with_selector(LineSelector::FinalLineMarked(Marker::new(2, "Edges")))
                    .optional(),
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn header(&self) -> &'static [&'static str] {
        self.header
    }

    pub fn short_log_threshold(&self) -> usize {
        self.short_log_threshold
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Number of columns after the test-case identifier
    pub fn data_columns(&self) -> usize {
        self.header.len() - 1
    }

    pub fn is_short(&self, log: &InputLog) -> bool {
        log.line_count() <= self.short_log_threshold
    }

    pub fn sentinel_row(&self, identifier: &str) -> Vec<String> {
        std::iter::once(identifier.to_string())
            .chain(std::iter::repeat(SENTINEL.to_string()).take(self.data_columns()))
            .collect()
    }

    /// Extract the data columns of `log` in rule order.
    pub fn extract(&self, log: &InputLog) -> Result<Vec<String>, ExtractError> {
        let mut values = Vec::with_capacity(self.fields.len());
        for rule in &self.fields {
            if let Some(value) = rule.apply(log)? {
                values.push(value);
            }
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_metrics_layout() {
        let layout = LogLayout::full_metrics();
        assert_eq!(layout.short_log_threshold(), 30);
        assert_eq!(layout.data_columns(), 7);
        assert_eq!(layout.fields().len(), layout.data_columns());
    }

    #[test]
    fn test_graph_size_layout() {
        let layout = LogLayout::graph_size();
        assert_eq!(layout.short_log_threshold(), 24);
        assert_eq!(layout.data_columns(), 3);
        assert_eq!(layout.header()[0], "Test Case(Index)");
    }

    #[test]
    fn test_sentinel_row_width() {
        let row = LogLayout::graph_size().sentinel_row("uf20-01");
        assert_eq!(row, vec!["uf20-01", "-1", "-1", "-1"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let layout = LogLayout::graph_size();
        let at = InputLog::from_content("a.b.c", &"x\n".repeat(24));
        let above = InputLog::from_content("a.b.c", &"x\n".repeat(25));
        assert!(layout.is_short(&at));
        assert!(!layout.is_short(&above));
    }
}
