use log::{info, warn};
use polars::prelude::*;

use crate::error::CleaningResult;
use crate::parsing::dates::{
    date_from_epoch_days, epoch_days, insurance_months, parse_period_date, split_period,
};
use crate::preprocessing::CleaningStep;
use crate::transformations::cleaning::{drop_columns, require_column, string_values};

pub const INSURANCE_PERIOD: &str = "Insurance_period";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";
pub const INSURANCE_MONTHS: &str = "Insurance_months";

fn date_series(name: &str, days: Vec<Option<i32>>) -> CleaningResult<Series> {
    Ok(Series::new(name.into(), days).cast(&DataType::Date)?)
}

fn date_values(column: &Column) -> CleaningResult<Vec<Option<chrono::NaiveDate>>> {
    let days = column.cast(&DataType::Date)?.cast(&DataType::Int32)?;
    Ok(days
        .i32()?
        .into_iter()
        .map(|d| d.and_then(date_from_epoch_days))
        .collect())
}

/// Split `Insurance_period` (`dd.mm.yyyy-dd.mm.yyyy`) into `start_date` and
/// `end_date` date columns.
///
/// A value without exactly one separator yields two empty dates, as does an
/// unparsable half for that half alone.
pub fn split_insurance_dates(mut df: DataFrame) -> CleaningResult<DataFrame> {
    let step = CleaningStep::SplitInsuranceDates;
    let periods = string_values(require_column(&df, step, INSURANCE_PERIOD)?)?;

    let mut starts = Vec::with_capacity(periods.len());
    let mut ends = Vec::with_capacity(periods.len());
    let mut malformed = 0usize;
    let mut unparsable = 0usize;

    for period in &periods {
        let (start, end) = match period.as_deref().map(split_period) {
            Some(Some((start, end))) => (parse_period_date(start), parse_period_date(end)),
            Some(None) => {
                malformed += 1;
                (None, None)
            }
            None => (None, None),
        };
        if period.is_some() && (start.is_none() || end.is_none()) {
            unparsable += 1;
        }
        starts.push(start.map(epoch_days));
        ends.push(end.map(epoch_days));
    }

    if malformed > 0 {
        warn!(
            "{}: {} periods do not contain exactly one '-' separator",
            step, malformed
        );
    }
    if unparsable > 0 {
        warn!("{}: {} periods produced an empty date", step, unparsable);
    }

    df.with_column(date_series(START_DATE, starts)?)?;
    df.with_column(date_series(END_DATE, ends)?)?;
    Ok(df)
}

/// Compute `Insurance_months` from the split dates, then drop the period and
/// both date columns. Rows missing either date keep an empty duration.
pub fn calculate_insurance_duration(mut df: DataFrame) -> CleaningResult<DataFrame> {
    let step = CleaningStep::CalculateInsuranceDuration;
    require_column(&df, step, INSURANCE_PERIOD)?;
    let starts = date_values(require_column(&df, step, START_DATE)?)?;
    let ends = date_values(require_column(&df, step, END_DATE)?)?;

    let months: Vec<Option<i32>> = starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| match (start, end) {
            (Some(start), Some(end)) => insurance_months(start, end),
            _ => None,
        })
        .collect();

    let undefined = months.iter().filter(|m| m.is_none()).count();
    info!(
        "{}: {} rows without a computable duration",
        step, undefined
    );

    df.with_column(Series::new(INSURANCE_MONTHS.into(), months))?;
    drop_columns(&mut df, &[INSURANCE_PERIOD, START_DATE, END_DATE])?;
    Ok(df)
}
