use log::{debug, warn};
use polars::prelude::*;

use crate::error::{CleaningError, CleaningResult};
use crate::preprocessing::CleaningStep;

/// Identifier and demographic columns with no downstream use.
pub const IRRELEVANT_FEATURES: [&str; 5] = [
    "Unique number",
    "Citizenship",
    "Gender",
    "Loss_amount",
    "Accident_region",
];

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Look up a column a step cannot run without.
pub fn require_column<'a>(
    df: &'a DataFrame,
    step: CleaningStep,
    name: &str,
) -> CleaningResult<&'a Column> {
    df.column(name)
        .map_err(|_| CleaningError::missing_column(step.name(), name))
}

/// Read a column as optional strings, casting non-string columns first.
pub fn string_values(column: &Column) -> CleaningResult<Vec<Option<String>>> {
    let as_str = column.cast(&DataType::String)?;
    Ok(as_str
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Read a column as optional floats. Unparsable cells become null.
pub fn float_values(column: &Column) -> CleaningResult<Vec<Option<f64>>> {
    let as_f64 = column.cast(&DataType::Float64)?;
    Ok(as_f64.f64()?.into_iter().collect())
}

/// Keep the rows whose flag is `true`.
pub fn keep_rows(df: &DataFrame, keep: &[bool]) -> CleaningResult<DataFrame> {
    let mask: BooleanChunked = keep.iter().copied().collect();
    Ok(df.filter(&mask)?)
}

pub fn drop_columns(df: &mut DataFrame, names: &[&str]) -> CleaningResult<()> {
    for name in names {
        df.drop_in_place(name)?;
    }
    Ok(())
}

/// Drop [`IRRELEVANT_FEATURES`].
///
/// In strict mode every column must be present; otherwise absent names are
/// skipped with a warning.
pub fn drop_features(mut df: DataFrame, strict: bool) -> CleaningResult<DataFrame> {
    let step = CleaningStep::DropFeatures;
    let mut present = Vec::with_capacity(IRRELEVANT_FEATURES.len());

    for name in IRRELEVANT_FEATURES {
        if has_column(&df, name) {
            present.push(name);
        } else if strict {
            return Err(CleaningError::missing_column(step.name(), name));
        } else {
            warn!("{}: column '{}' not present, skipping", step, name);
        }
    }

    drop_columns(&mut df, &present)?;
    debug!("{}: dropped {:?}", step, present);
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> DataFrame {
        df!(
            "Unique number" => [1i64, 2],
            "Citizenship" => ["KZ", "KZ"],
            "Gender" => ["M", "F"],
            "Loss_amount" => [0.0, 120.5],
            "Accident_region" => ["Алматы", "Астана"],
            "Age" => [30i64, 40]
        )
        .unwrap()
    }

    #[test]
    fn test_drop_features_removes_all_five() {
        let out = drop_features(raw_frame(), true).unwrap();
        assert_eq!(out.width(), 1);
        assert!(has_column(&out, "Age"));
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_drop_features_strict_missing_column() {
        let mut df = raw_frame();
        df.drop_in_place("Gender").unwrap();

        let err = drop_features(df, true).unwrap_err();
        match err {
            CleaningError::Schema { step, column } => {
                assert_eq!(step, "drop_features");
                assert_eq!(column, "Gender");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_drop_features_lenient_skips_missing() {
        let mut df = raw_frame();
        df.drop_in_place("Gender").unwrap();

        let out = drop_features(df, false).unwrap();
        assert_eq!(out.width(), 1);
    }

    #[test]
    fn test_require_column_reports_step() {
        let df = raw_frame();
        let err = require_column(&df, CleaningStep::SplitInsuranceDates, "Insurance_period")
            .unwrap_err();
        assert!(err.to_string().contains("split_insurance_dates"));
    }

    #[test]
    fn test_keep_rows() {
        let df = raw_frame();
        let out = keep_rows(&df, &[false, true]).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(out.column("Age").unwrap().i64().unwrap().get(0), Some(40));
    }

    #[test]
    fn test_string_values_casts_numbers() {
        let df = raw_frame();
        let values = string_values(df.column("Unique number").unwrap()).unwrap();
        assert_eq!(values, vec![Some("1".to_string()), Some("2".to_string())]);
    }
}
