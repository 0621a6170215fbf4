use log::info;
use polars::prelude::*;
use std::path::Path;

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::io::TableLoader;
use crate::preprocessing::report::{CleaningReport, StepSummary};
use crate::preprocessing::steps::CleaningStep;
use crate::rules::{
    CITY_REGIONS, COLOR_SYNONYMS, OTHER_COLOR, TRAILER_TYPES, UNKNOWN_REGION, VEHICLE_CATEGORIES,
};
use crate::transformations;

/// Result of a full cleaning run
#[derive(Debug)]
pub struct CleanedTable {
    pub dataframe: DataFrame,
    pub report: CleaningReport,
}

/// Owns one raw policy table and applies the cleaning steps to it.
///
/// Steps can be run one at a time through the named methods, but
/// [`TableCleaner::clean`] is the supported entry point: it runs every step
/// in [`CleaningStep::ORDER`].
///
/// ```no_run
/// use insurance_cleaner::TableCleaner;
///
/// let cleaned = TableCleaner::from_path("data_insurance.csv")?.clean()?;
/// println!("{} rows", cleaned.height());
/// # Ok::<(), insurance_cleaner::CleaningError>(())
/// ```
pub struct TableCleaner {
    df: DataFrame,
    config: CleaningConfig,
    report: CleaningReport,
}

impl TableCleaner {
    /// Load the table at `path` with the default configuration
    pub fn from_path<P: AsRef<Path>>(path: P) -> CleaningResult<Self> {
        Self::from_path_with_config(path, CleaningConfig::default())
    }

    /// Load the table at `path` with an explicit configuration
    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: CleaningConfig,
    ) -> CleaningResult<Self> {
        let df = TableLoader::load(path.as_ref())?;
        Ok(Self::from_dataframe(df, config))
    }

    /// Wrap an already-loaded table
    pub fn from_dataframe(df: DataFrame, config: CleaningConfig) -> Self {
        let report = CleaningReport::new(df.height());
        Self { df, config, report }
    }

    /// Current state of the table
    pub fn table(&self) -> &DataFrame {
        &self.df
    }

    /// Configuration the steps run with
    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Statistics of the steps run so far
    pub fn report(&self) -> &CleaningReport {
        &self.report
    }

    /// Drop the identifier and demographic columns with no downstream use
    pub fn drop_features(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::DropFeatures)
    }

    /// Remove impossible experience claims and clamp early starts
    pub fn adjust_invalid_driving_experience(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::AdjustInvalidDrivingExperience)
    }

    /// Remove trailers, canonicalize vehicle types and derive `Car_age`
    pub fn clean_vehicle_and_insurance_info(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::CleanVehicleAndInsuranceInfo)
    }

    /// Split `Insurance_period` into `start_date` and `end_date`
    pub fn split_insurance_dates(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::SplitInsuranceDates)
    }

    /// Derive `Insurance_months` and drop the period columns
    pub fn calculate_insurance_duration(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::CalculateInsuranceDuration)
    }

    /// Fill empty `Privileges` cells
    pub fn fill_missing_privileges(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::FillMissingPrivileges)
    }

    /// Group color shades under canonical hues
    pub fn standardize_colors(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::StandardizeColors)
    }

    /// Collapse rare brands and models into `Other`
    pub fn standardize_brands_and_models(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::StandardizeBrandsAndModels)
    }

    /// Replace `City` with its administrative `Region`
    pub fn map_city_to_region(&mut self) -> CleaningResult<&mut Self> {
        self.apply(CleaningStep::MapCityToRegion)
    }

    /// Run every step in order and return the cleaned table
    pub fn clean(self) -> CleaningResult<DataFrame> {
        Ok(self.clean_with_report()?.dataframe)
    }

    /// Run every step in order, keeping per-step statistics
    pub fn clean_with_report(mut self) -> CleaningResult<CleanedTable> {
        for step in CleaningStep::ORDER {
            self.apply(step)?;
        }

        info!(
            "cleaning finished: {} of {} rows kept, {} columns",
            self.report.output_rows,
            self.report.input_rows,
            self.df.width()
        );
        Ok(CleanedTable {
            dataframe: self.df,
            report: self.report,
        })
    }

    /// Run one step. A failing step leaves the table untouched.
    fn apply(&mut self, step: CleaningStep) -> CleaningResult<&mut Self> {
        let after = self.run(step, self.df.clone())?;
        let summary = StepSummary::between(step, &self.df, &after);

        info!(
            "{}: {} -> {} rows",
            step, summary.rows_before, summary.rows_after
        );
        self.report.record(summary);
        self.df = after;
        Ok(self)
    }

    fn run(&self, step: CleaningStep, df: DataFrame) -> CleaningResult<DataFrame> {
        let config = &self.config;
        match step {
            CleaningStep::DropFeatures => transformations::drop_features(df, config.strict_drop),
            CleaningStep::AdjustInvalidDrivingExperience => {
                transformations::adjust_invalid_driving_experience(df, config.min_driving_age)
            }
            CleaningStep::CleanVehicleAndInsuranceInfo => {
                transformations::clean_vehicle_and_insurance_info(
                    df,
                    &VEHICLE_CATEGORIES,
                    &TRAILER_TYPES,
                    config.reference_year,
                )
            }
            CleaningStep::SplitInsuranceDates => transformations::split_insurance_dates(df),
            CleaningStep::CalculateInsuranceDuration => {
                transformations::calculate_insurance_duration(df)
            }
            CleaningStep::FillMissingPrivileges => transformations::fill_missing_privileges(df),
            CleaningStep::StandardizeColors => {
                transformations::standardize_colors(df, &COLOR_SYNONYMS, OTHER_COLOR)
            }
            CleaningStep::StandardizeBrandsAndModels => {
                transformations::standardize_brands_and_models(
                    df,
                    config.top_brands,
                    config.top_models,
                )
            }
            CleaningStep::MapCityToRegion => {
                transformations::map_city_to_region(df, &CITY_REGIONS, UNKNOWN_REGION)
            }
        }
    }
}
