use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the cleaning pipeline.
///
/// Later stages read columns produced by earlier ones, so [`CleaningStep::ORDER`]
/// is the only valid execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStep {
    DropFeatures,
    AdjustInvalidDrivingExperience,
    CleanVehicleAndInsuranceInfo,
    SplitInsuranceDates,
    CalculateInsuranceDuration,
    FillMissingPrivileges,
    StandardizeColors,
    StandardizeBrandsAndModels,
    MapCityToRegion,
}

impl CleaningStep {
    pub const ORDER: [CleaningStep; 9] = [
        CleaningStep::DropFeatures,
        CleaningStep::AdjustInvalidDrivingExperience,
        CleaningStep::CleanVehicleAndInsuranceInfo,
        CleaningStep::SplitInsuranceDates,
        CleaningStep::CalculateInsuranceDuration,
        CleaningStep::FillMissingPrivileges,
        CleaningStep::StandardizeColors,
        CleaningStep::StandardizeBrandsAndModels,
        CleaningStep::MapCityToRegion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CleaningStep::DropFeatures => "drop_features",
            CleaningStep::AdjustInvalidDrivingExperience => "adjust_invalid_driving_experience",
            CleaningStep::CleanVehicleAndInsuranceInfo => "clean_vehicle_and_insurance_info",
            CleaningStep::SplitInsuranceDates => "split_insurance_dates",
            CleaningStep::CalculateInsuranceDuration => "calculate_insurance_duration",
            CleaningStep::FillMissingPrivileges => "fill_missing_privileges",
            CleaningStep::StandardizeColors => "standardize_colors",
            CleaningStep::StandardizeBrandsAndModels => "standardize_brands_and_models",
            CleaningStep::MapCityToRegion => "map_city_to_region",
        }
    }
}

impl fmt::Display for CleaningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
