//! Cleaning pipeline for raw insurance-policy tables.
//!
//! Loads a policy table into a polars `DataFrame`, then removes invalid rows,
//! normalizes categorical values and derives car age and policy duration.

pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod rules;
pub mod transformations;

pub use config::CleaningConfig;
pub use error::{CleaningError, CleaningResult};
pub use preprocessing::{CleanedTable, CleaningReport, CleaningStep, TableCleaner};
