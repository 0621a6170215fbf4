//! Static lookup tables used by the categorical cleaning steps.
//!
//! Each table is an immutable map from a raw (or normalized) cell value to its
//! canonical category. Steps receive the table as an argument so a test can
//! exercise a step against a small hand-written map.

use std::collections::HashMap;

pub mod colors;
pub mod regions;
pub mod vehicles;

/// Raw value → canonical category.
pub type Lookup = HashMap<&'static str, &'static str>;

pub use colors::{COLOR_SYNONYMS, OTHER_COLOR};
pub use regions::{CITY_REGIONS, UNKNOWN_REGION};
pub use vehicles::{TRAILER_TYPES, VEHICLE_CATEGORIES};
