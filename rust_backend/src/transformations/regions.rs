use log::{debug, info};
use polars::prelude::*;

use crate::error::CleaningResult;
use crate::rules::Lookup;
use crate::transformations::cleaning::{drop_columns, has_column, string_values};

pub const CITY: &str = "City";
pub const REGION: &str = "Region";

/// City name without the district or street suffix after the first comma.
pub fn base_city_name(city: &str) -> &str {
    city.split_once(',').map_or(city, |(base, _)| base).trim()
}

pub fn region_for<'a>(city: Option<&str>, city_regions: &'a Lookup, unknown: &'a str) -> &'a str {
    city.and_then(|c| city_regions.get(base_city_name(c)).copied())
        .unwrap_or(unknown)
}

/// Replace `City` with the administrative `Region` it belongs to.
/// No-op without the column.
pub fn map_city_to_region(
    mut df: DataFrame,
    city_regions: &Lookup,
    unknown: &str,
) -> CleaningResult<DataFrame> {
    if !has_column(&df, CITY) {
        debug!("no {} column, skipping", CITY);
        return Ok(df);
    }

    let cities = string_values(df.column(CITY)?)?;
    let regions: Vec<&str> = cities
        .iter()
        .map(|c| region_for(c.as_deref(), city_regions, unknown))
        .collect();

    let unmapped = regions.iter().filter(|r| **r == unknown).count();
    info!("{} cities without a known {}", unmapped, REGION);

    df.with_column(Series::new(REGION.into(), regions))?;
    drop_columns(&mut df, &[CITY])?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CITY_REGIONS, UNKNOWN_REGION};

    #[test]
    fn test_base_city_name() {
        assert_eq!(base_city_name("Алматы, мкр. Самал"), "Алматы");
        assert_eq!(base_city_name("  Актобе  "), "Актобе");
        assert_eq!(base_city_name("Нур-Султан,"), "Нур-Султан");
        assert_eq!(base_city_name(""), "");
    }

    #[test]
    fn test_map_city_to_region() {
        let df = df!(
            CITY => [Some("Алматы, мкр. Самал"), Some("Nowhereville"), Some(" Караганда"), None]
        )
        .unwrap();
        let out = map_city_to_region(df, &CITY_REGIONS, UNKNOWN_REGION).unwrap();

        assert!(out.column(CITY).is_err());
        let regions = out.column(REGION).unwrap().str().unwrap();
        assert_eq!(regions.get(0), Some("Алматинская область"));
        assert_eq!(regions.get(1), Some(UNKNOWN_REGION));
        assert_eq!(regions.get(2), Some("Карагандинская область"));
        assert_eq!(regions.get(3), Some(UNKNOWN_REGION));
    }

    #[test]
    fn test_only_region_is_added() {
        let df = df!("Age" => [30i64], CITY => ["Тараз"]).unwrap();
        let out = map_city_to_region(df, &CITY_REGIONS, UNKNOWN_REGION).unwrap();
        let names: Vec<String> = out
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["Age", REGION]);
    }

    #[test]
    fn test_no_city_column_is_noop() {
        let df = df!("Age" => [30i64]).unwrap();
        let out = map_city_to_region(df.clone(), &CITY_REGIONS, UNKNOWN_REGION).unwrap();
        assert!(out.equals(&df));
    }
}
