//! Table transformations applied by the cleaning pipeline.
//!
//! Every stage takes the table by value and returns the transformed table,
//! so each one can be exercised on a hand-built `DataFrame`.
//!
//! # Modules
//!
//! - [`cleaning`]: Column access helpers and removal of unused features
//! - [`filtering`]: Driving-experience plausibility rules
//! - [`vehicles`]: Vehicle categories, trailer removal and car age
//! - [`insurance`]: Policy period parsing and duration in months
//! - [`categories`]: Privileges, colors, brands and models
//! - [`regions`]: City to administrative region
//!
//! # Example
//!
//! ```no_run
//! use insurance_cleaner::transformations::{adjust_invalid_driving_experience, drop_features};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> insurance_cleaner::CleaningResult<()> {
//! let df = drop_features(df, true)?;
//! let df = adjust_invalid_driving_experience(df, 18.0)?;
//! println!("{} rows left", df.height());
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod cleaning;
pub mod filtering;
pub mod insurance;
pub mod regions;
pub mod vehicles;

pub use categories::{
    fill_missing_privileges, most_frequent, standardize_brands_and_models, standardize_colors,
};
pub use cleaning::{drop_features, IRRELEVANT_FEATURES};
pub use filtering::adjust_invalid_driving_experience;
pub use insurance::{calculate_insurance_duration, split_insurance_dates};
pub use regions::map_city_to_region;
pub use vehicles::clean_vehicle_and_insurance_info;
