pub mod pipeline;
pub mod report;
pub mod steps;


pub use pipeline::{CleanedTable, TableCleaner};
pub use report::{CleaningReport, StepSummary};
pub use steps::CleaningStep;
