use std::collections::{HashMap, HashSet};

use log::{debug, info};
use polars::prelude::*;

use crate::error::CleaningResult;
use crate::rules::Lookup;
use crate::transformations::cleaning::{has_column, string_values};

pub const PRIVILEGES: &str = "Privileges";
pub const COLOR: &str = "Color";
pub const BRAND: &str = "Brand";
pub const MODEL: &str = "Model";

/// Privilege category for policy holders without a disability ("not disabled").
pub const NO_PRIVILEGE: &str = "Не инвалид";

/// Catch-all for brands and models outside the most frequent set.
pub const OTHER_CATEGORY: &str = "Other";

pub const BRAND_ALIAS: (&str, &str) = ("Лада", "Lada");
pub const MODEL_PLACEHOLDER: (&str, &str) = (".", "Unknown");

/// Distinct non-null values ranked by frequency, most frequent first.
///
/// Equal counts keep the order in which the values first appear.
pub fn most_frequent(values: &[Option<String>], n: usize) -> Vec<&str> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, value) in values.iter().enumerate() {
        if let Some(value) = value {
            counts.entry(value.as_str()).or_insert((0, idx)).0 += 1;
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().take(n).map(|(value, _, _)| value).collect()
}

/// Replace every value outside the `n` most frequent with `other`.
pub fn collapse_to_top_n(values: &[Option<String>], n: usize, other: &str) -> Vec<String> {
    let top: HashSet<&str> = most_frequent(values, n).into_iter().collect();
    values
        .iter()
        .map(|value| match value.as_deref() {
            Some(v) if top.contains(v) => v.to_string(),
            _ => other.to_string(),
        })
        .collect()
}

fn replace_value(values: &mut [Option<String>], (from, to): (&str, &str)) {
    for value in values.iter_mut().flatten() {
        if value == from {
            *value = to.to_string();
        }
    }
}

/// Fill empty `Privileges` cells with [`NO_PRIVILEGE`]. No-op without the column.
pub fn fill_missing_privileges(mut df: DataFrame) -> CleaningResult<DataFrame> {
    if !has_column(&df, PRIVILEGES) {
        debug!("no {} column, skipping", PRIVILEGES);
        return Ok(df);
    }

    let values = string_values(df.column(PRIVILEGES)?)?;
    let missing = values.iter().filter(|v| v.is_none()).count();
    let filled: Vec<String> = values
        .into_iter()
        .map(|v| v.unwrap_or_else(|| NO_PRIVILEGE.to_string()))
        .collect();

    info!("filled {} missing {} values", missing, PRIVILEGES);
    df.with_column(Series::new(PRIVILEGES.into(), filled))?;
    Ok(df)
}

/// Canonical hue for a raw color cell. Matching ignores case and surrounding
/// whitespace; unknown or empty cells map to `other`.
pub fn canonical_color<'a>(raw: Option<&str>, synonyms: &'a Lookup, other: &'a str) -> &'a str {
    raw.and_then(|c| synonyms.get(c.trim().to_lowercase().as_str()).copied())
        .unwrap_or(other)
}

/// Group color shades under their canonical hue. No-op without the column.
pub fn standardize_colors(
    mut df: DataFrame,
    synonyms: &Lookup,
    other: &str,
) -> CleaningResult<DataFrame> {
    if !has_column(&df, COLOR) {
        debug!("no {} column, skipping", COLOR);
        return Ok(df);
    }

    let values = string_values(df.column(COLOR)?)?;
    let colors: Vec<&str> = values
        .iter()
        .map(|v| canonical_color(v.as_deref(), synonyms, other))
        .collect();

    let unmatched = colors.iter().filter(|c| **c == other).count();
    info!("{} {} values mapped to '{}'", unmatched, COLOR, other);
    df.with_column(Series::new(COLOR.into(), colors))?;
    Ok(df)
}

/// Canonicalize the `Lada` alias and collapse rare brands and models into
/// [`OTHER_CATEGORY`]. Each column is optional.
pub fn standardize_brands_and_models(
    mut df: DataFrame,
    top_brands: usize,
    top_models: usize,
) -> CleaningResult<DataFrame> {
    if has_column(&df, BRAND) {
        let mut brands = string_values(df.column(BRAND)?)?;
        replace_value(&mut brands, BRAND_ALIAS);
        let collapsed = collapse_to_top_n(&brands, top_brands, OTHER_CATEGORY);
        df.with_column(Series::new(BRAND.into(), collapsed))?;
        debug!("kept the {} most frequent brands", top_brands);
    }

    if has_column(&df, MODEL) {
        let mut models = string_values(df.column(MODEL)?)?;
        replace_value(&mut models, MODEL_PLACEHOLDER);
        let collapsed = collapse_to_top_n(&models, top_models, OTHER_CATEGORY);
        df.with_column(Series::new(MODEL.into(), collapsed))?;
        debug!("kept the {} most frequent models", top_models);
    }

    Ok(df)
}
