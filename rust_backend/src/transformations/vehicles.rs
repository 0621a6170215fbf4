use chrono::Datelike;
use log::{debug, info, warn};
use polars::prelude::*;

use crate::error::CleaningResult;
use crate::parsing::dates::{date_from_epoch_days, parse_manufacture_year, year_from_number};
use crate::preprocessing::CleaningStep;
use crate::rules::Lookup;
use crate::transformations::cleaning::{
    drop_columns, float_values, keep_rows, require_column, string_values,
};

pub const VEHICLE_TYPE: &str = "Vehicle_type";
pub const YEAR_OF_MANUFACTURE: &str = "Year_of_manufacture";
pub const CAR_AGE: &str = "Car_age";

/// Trim surrounding whitespace from every column name.
pub fn strip_column_names(df: &mut DataFrame) -> CleaningResult<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter_map(|name| {
            let trimmed = name.trim();
            (trimmed != name.as_str()).then(|| (name.to_string(), trimmed.to_string()))
        })
        .collect();

    for (old, new) in renames {
        debug!("renaming column '{}' -> '{}'", old, new);
        df.rename(&old, new.into())?;
    }
    Ok(())
}

/// Manufacture year per row, from date, numeric or textual cells.
pub fn manufacture_years(column: &Column) -> CleaningResult<Vec<Option<i32>>> {
    let dtype = column.dtype();
    let years = match dtype {
        DataType::Date | DataType::Datetime(_, _) => {
            let days = column.cast(&DataType::Date)?.cast(&DataType::Int32)?;
            days.i32()?
                .into_iter()
                .map(|d| d.and_then(date_from_epoch_days).map(|date| date.year()))
                .collect()
        }
        dt if dt.is_integer() || dt.is_float() => float_values(column)?
            .into_iter()
            .map(|v| v.and_then(year_from_number))
            .collect(),
        _ => string_values(column)?
            .into_iter()
            .map(|v| v.as_deref().and_then(parse_manufacture_year))
            .collect(),
    };
    Ok(years)
}

/// Normalize column names, remove trailers, canonicalize vehicle types and
/// replace the manufacture year with the car's age at `reference_year`.
pub fn clean_vehicle_and_insurance_info(
    mut df: DataFrame,
    vehicle_categories: &Lookup,
    trailer_types: &[&str],
    reference_year: i32,
) -> CleaningResult<DataFrame> {
    let step = CleaningStep::CleanVehicleAndInsuranceInfo;
    strip_column_names(&mut df)?;

    let vehicle_types = string_values(require_column(&df, step, VEHICLE_TYPE)?)?;
    let keep: Vec<bool> = vehicle_types
        .iter()
        .map(|v| v.as_deref().map_or(true, |v| !trailer_types.contains(&v)))
        .collect();
    let mapped: Vec<Option<&str>> = vehicle_types
        .iter()
        .map(|v| v.as_deref().and_then(|v| vehicle_categories.get(v).copied()))
        .collect();

    let years = manufacture_years(require_column(&df, step, YEAR_OF_MANUFACTURE)?)?;
    let unparsable = years.iter().filter(|y| y.is_none()).count();
    if unparsable > 0 {
        warn!(
            "{}: {} rows have no parsable {}; {} left empty",
            step, unparsable, YEAR_OF_MANUFACTURE, CAR_AGE
        );
    }
    let car_ages: Vec<Option<i32>> = years
        .into_iter()
        .map(|y| y.map(|year| reference_year - year))
        .collect();

    df.with_column(Series::new(VEHICLE_TYPE.into(), mapped))?;
    df.with_column(Series::new(CAR_AGE.into(), car_ages))?;
    drop_columns(&mut df, &[YEAR_OF_MANUFACTURE])?;

    let trailers = keep.iter().filter(|k| !**k).count();
    info!("{}: removed {} trailer rows", step, trailers);
    keep_rows(&df, &keep)
}
