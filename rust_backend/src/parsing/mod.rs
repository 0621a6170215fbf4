//! Parsers for the raw cell formats found in policy exports.
//!
//! # Modules
//!
//! - [`dates`]: Insurance period dates, manufacture years and calendar-month
//!   differences

pub mod dates;

pub use dates::{
    calendar_months_between, insurance_months, parse_manufacture_year, parse_period_date,
    split_period,
};
