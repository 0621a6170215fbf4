use log::info;
use polars::prelude::*;

use crate::error::CleaningResult;
use crate::preprocessing::CleaningStep;
use crate::transformations::cleaning::{float_values, keep_rows, require_column};

pub const AGE: &str = "Age";
pub const DRIVING_EXPERIENCE: &str = "Driving_experience";

/// Outcome of checking one driver's reported experience against their age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperienceCheck {
    /// Experience exceeds age; the row is removed.
    Impossible,
    /// Experience implies driving before the minimum age; the value is reduced.
    Adjusted(f64),
    Unchanged(Option<f64>),
}

impl ExperienceCheck {
    /// Driving experience the row keeps, or `None` if the row is dropped.
    pub fn retained_value(self) -> Option<f64> {
        match self {
            ExperienceCheck::Impossible => None,
            ExperienceCheck::Adjusted(v) => Some(v),
            ExperienceCheck::Unchanged(v) => v,
        }
        .filter(|v| *v >= 0.0)
    }
}

/// Apply the driving-experience rules to a single row.
///
/// Null ages skip both rules, matching comparisons against a missing value.
pub fn check_experience(
    age: Option<f64>,
    experience: Option<f64>,
    min_driving_age: f64,
) -> ExperienceCheck {
    match (age, experience) {
        (Some(age), Some(exp)) if exp > age => ExperienceCheck::Impossible,
        (Some(age), Some(exp)) => {
            let age_gap = age - exp;
            if age_gap < min_driving_age {
                ExperienceCheck::Adjusted(exp - (min_driving_age - age_gap))
            } else {
                ExperienceCheck::Unchanged(Some(exp))
            }
        }
        (_, exp) => ExperienceCheck::Unchanged(exp),
    }
}

/// Drop impossible experience claims and clamp early starts to the minimum
/// driving age. Rows left with negative or missing experience are removed.
pub fn adjust_invalid_driving_experience(
    df: DataFrame,
    min_driving_age: f64,
) -> CleaningResult<DataFrame> {
    let step = CleaningStep::AdjustInvalidDrivingExperience;
    let ages = float_values(require_column(&df, step, AGE)?)?;
    let experience_col = require_column(&df, step, DRIVING_EXPERIENCE)?;
    let experience_dtype = experience_col.dtype().clone();
    let experience = float_values(experience_col)?;

    let mut impossible = 0usize;
    let mut adjusted = 0usize;
    let mut keep = Vec::with_capacity(df.height());
    let mut values = Vec::with_capacity(df.height());

    for (age, exp) in ages.into_iter().zip(experience) {
        let check = check_experience(age, exp, min_driving_age);
        match check {
            ExperienceCheck::Impossible => impossible += 1,
            ExperienceCheck::Adjusted(_) => adjusted += 1,
            ExperienceCheck::Unchanged(_) => {}
        }
        let retained = check.retained_value();
        keep.push(retained.is_some());
        values.push(retained);
    }

    info!(
        "{}: {} impossible rows, {} adjusted to minimum age {}",
        step, impossible, adjusted, min_driving_age
    );

    let mut series = Series::new(DRIVING_EXPERIENCE.into(), values);
    if experience_dtype.is_integer() || experience_dtype.is_float() {
        series = series.cast(&experience_dtype)?;
    }

    let mut df = df;
    df.with_column(series)?;
    keep_rows(&df, &keep)
}
