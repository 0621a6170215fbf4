use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::error::{CleaningError, CleaningResult};
use crate::io::loaders::SourceFormat;

fn write_error(path: &Path, reason: impl ToString) -> CleaningError {
    CleaningError::Write {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Persists a cleaned table
pub struct TableWriter;

impl TableWriter {
    pub fn write(df: &mut DataFrame, path: &Path, format: SourceFormat) -> CleaningResult<()> {
        let mut file = File::create(path).map_err(|e| write_error(path, e))?;
        match format {
            SourceFormat::Csv => CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .map_err(|e| write_error(path, e))?,
            SourceFormat::Parquet => {
                ParquetWriter::new(&mut file)
                    .with_compression(ParquetCompression::Snappy)
                    .finish(df)
                    .map_err(|e| write_error(path, e))?;
            }
        }
        info!("wrote {} rows to {}", df.height(), path.display());
        Ok(())
    }
}
