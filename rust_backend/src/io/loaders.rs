use log::{debug, info};
use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use crate::error::{CleaningError, CleaningResult};

/// Rows sampled when inferring CSV column types.
const SCHEMA_INFERENCE_ROWS: usize = 10_000;

/// Tabular formats a policy table can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Parquet,
}

impl SourceFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> CleaningResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| load_error(path, "file has no extension"))?;

        match extension.to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "parquet" | "pq" => Ok(SourceFormat::Parquet),
            "xlsx" | "xls" => Err(load_error(
                path,
                "spreadsheet sources are not supported, export the sheet to CSV first",
            )),
            other => Err(load_error(path, format!("unsupported file format: {}", other))),
        }
    }
}

fn load_error(path: &Path, reason: impl ToString) -> CleaningError {
    CleaningError::Load {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(SCHEMA_INFERENCE_ROWS))
}

/// Loads a raw policy table into a `DataFrame`
pub struct TableLoader;

impl TableLoader {
    /// Load a table from a file (format detected from the extension)
    pub fn load(path: &Path) -> CleaningResult<DataFrame> {
        let format = SourceFormat::from_path(path)?;
        let df = match format {
            SourceFormat::Csv => Self::load_csv(path)?,
            SourceFormat::Parquet => Self::load_parquet(path)?,
        };
        Self::ensure_rectangular(path, df)
    }

    pub fn load_csv(csv_path: &Path) -> CleaningResult<DataFrame> {
        debug!("reading CSV {}", csv_path.display());
        csv_options()
            .try_into_reader_with_file_path(Some(csv_path.into()))
            .and_then(|reader| reader.finish())
            .map_err(|e| load_error(csv_path, e))
    }

    /// Load a table from in-memory CSV text
    pub fn load_csv_bytes(data: &[u8]) -> CleaningResult<DataFrame> {
        let mut cursor = Cursor::new(data);
        let df = CsvReader::new(&mut cursor)
            .with_options(csv_options())
            .finish()
            .map_err(|e| load_error(Path::new("<memory>"), e))?;
        Self::ensure_rectangular(Path::new("<memory>"), df)
    }

    pub fn load_parquet(parquet_path: &Path) -> CleaningResult<DataFrame> {
        debug!("reading Parquet {}", parquet_path.display());
        let file = File::open(parquet_path).map_err(|e| load_error(parquet_path, e))?;
        ParquetReader::new(file)
            .finish()
            .map_err(|e| load_error(parquet_path, e))
    }

    fn ensure_rectangular(path: &Path, df: DataFrame) -> CleaningResult<DataFrame> {
        if df.width() == 0 {
            return Err(load_error(path, "source contains no columns"));
        }
        info!(
            "loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        Ok(df)
    }
}
