//! Per-step statistics collected while cleaning a table.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use super::steps::CleaningStep;

/// Shape change produced by a single cleaning step.
///
/// # Fields
///
/// * `step` - The step that ran
/// * `rows_before` / `rows_after` - Table height around the step
/// * `columns_added` - Columns present after the step but not before, in table order
/// * `columns_removed` - Columns present before the step but not after
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub step: CleaningStep,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_added: Vec<String>,
    pub columns_removed: Vec<String>,
}

impl StepSummary {
    /// Compare the table before and after `step`.
    pub fn between(step: CleaningStep, before: &DataFrame, after: &DataFrame) -> Self {
        let names = |df: &DataFrame| -> Vec<String> {
            df.get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect()
        };
        let before_names = names(before);
        let after_names = names(after);

        Self {
            step,
            rows_before: before.height(),
            rows_after: after.height(),
            columns_added: after_names
                .iter()
                .filter(|name| !before_names.contains(name))
                .cloned()
                .collect(),
            columns_removed: before_names
                .iter()
                .filter(|name| !after_names.contains(name))
                .cloned()
                .collect(),
        }
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Summary of a full cleaning run.
///
/// Serializes to JSON for the command-line report:
///
/// ```
/// use insurance_cleaner::preprocessing::CleaningReport;
///
/// let report = CleaningReport::new(120);
/// assert_eq!(report.rows_dropped(), 0);
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"input_rows\":120"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub steps: Vec<StepSummary>,
}

impl CleaningReport {
    pub fn new(input_rows: usize) -> Self {
        Self {
            input_rows,
            output_rows: input_rows,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, summary: StepSummary) {
        self.output_rows = summary.rows_after;
        self.steps.push(summary);
    }

    /// Rows removed across all steps
    pub fn rows_dropped(&self) -> usize {
        self.input_rows.saturating_sub(self.output_rows)
    }

    pub fn step(&self, step: CleaningStep) -> Option<&StepSummary> {
        self.steps.iter().find(|summary| summary.step == step)
    }
}
