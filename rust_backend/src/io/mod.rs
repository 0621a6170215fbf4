//! Reading raw policy tables and persisting cleaned ones.
//!
//! Format is chosen from the file extension: CSV and Parquet are supported in
//! both directions.
//!
//! # Example
//!
//! ```no_run
//! use insurance_cleaner::io::{SourceFormat, TableLoader, TableWriter};
//! use std::path::Path;
//!
//! let mut df = TableLoader::load(Path::new("data_insurance.csv"))
//!     .expect("Failed to load");
//! TableWriter::write(&mut df, Path::new("copy.parquet"), SourceFormat::Parquet)
//!     .expect("Failed to write");
//! ```

pub mod loaders;
pub mod writers;


pub use loaders::{SourceFormat, TableLoader};
pub use writers::TableWriter;
