//! Cleaning configuration file support.
//!
//! Every business constant the pipeline relies on has a named field here. The
//! defaults reproduce the reference cleaning rules; a `cleaning.toml` file may
//! pin or vary them (mostly useful in tests and backfills).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleaningError, CleaningResult};

/// Year that car ages are measured against. Fixed so output does not depend on
/// the run date.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Legal minimum driving age used when adjusting early-start experience claims.
pub const DEFAULT_MIN_DRIVING_AGE: f64 = 18.0;

pub const DEFAULT_TOP_BRANDS: usize = 37;
pub const DEFAULT_TOP_MODELS: usize = 50;

/// Config files probed by [`CleaningConfig::from_default_location`], in order.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["cleaning.toml", "rust_backend/cleaning.toml"];

/// Tunable constants of the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningConfig {
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    #[serde(default = "default_min_driving_age")]
    pub min_driving_age: f64,
    #[serde(default = "default_top_brands")]
    pub top_brands: usize,
    #[serde(default = "default_top_models")]
    pub top_models: usize,
    /// When `true`, a missing column in `drop_features` aborts the run.
    #[serde(default = "default_strict_drop")]
    pub strict_drop: bool,
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

fn default_min_driving_age() -> f64 {
    DEFAULT_MIN_DRIVING_AGE
}

fn default_top_brands() -> usize {
    DEFAULT_TOP_BRANDS
}

fn default_top_models() -> usize {
    DEFAULT_TOP_MODELS
}

fn default_strict_drop() -> bool {
    true
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            min_driving_age: default_min_driving_age(),
            top_brands: default_top_brands(),
            top_models: default_top_models(),
            strict_drop: default_strict_drop(),
        }
    }
}

impl CleaningConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CleaningConfig)` if successful
    /// * `Err(CleaningError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleaningResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CleaningError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CleaningResult<Self> {
        let config: CleaningConfig = toml::from_str(content)
            .map_err(|e| CleaningError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches [`CONFIG_SEARCH_PATHS`] relative to the current directory.
    /// Falls back to [`CleaningConfig::default`] when none is found.
    pub fn from_default_location() -> CleaningResult<Self> {
        Self::from_location_in(Path::new("."))
    }

    /// Load the first of [`CONFIG_SEARCH_PATHS`] that exists under `base`,
    /// or the defaults when none does.
    pub fn from_location_in(base: &Path) -> CleaningResult<Self> {
        let search_paths: Vec<PathBuf> = CONFIG_SEARCH_PATHS.iter().map(|p| base.join(p)).collect();

        for path in search_paths {
            if path.exists() {
                log::info!("Loading cleaning config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("no cleaning config under {}, using defaults", base.display());
        Ok(Self::default())
    }

    fn validate(&self) -> CleaningResult<()> {
        if self.top_brands == 0 || self.top_models == 0 {
            return Err(CleaningError::Config(
                "top_brands and top_models must be at least 1".to_string(),
            ));
        }
        if !self.min_driving_age.is_finite() || self.min_driving_age < 0.0 {
            return Err(CleaningError::Config(format!(
                "min_driving_age must be a non-negative number, got {}",
                self.min_driving_age
            )));
        }
        Ok(())
    }
}
