use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

/// Format of each half of an `Insurance_period` value, e.g. `01.01.2024`.
pub const PERIOD_DATE_FORMAT: &str = "%d.%m.%Y";

/// Separator between the start and end date of an `Insurance_period` value.
pub const PERIOD_SEPARATOR: char = '-';

/// `NaiveDate::from_ymd(1970, 1, 1).num_days_from_ce()`
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const MANUFACTURE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

const MANUFACTURE_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse one half of an insurance period (`dd.mm.yyyy`).
pub fn parse_period_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), PERIOD_DATE_FORMAT).ok()
}

/// Split a period string into its start and end halves.
///
/// Returns `None` unless the value contains exactly one separator.
pub fn split_period(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split(PERIOD_SEPARATOR);
    let start = parts.next()?;
    let end = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((start, end))
}

/// Extract the manufacture year from a textual date.
///
/// Accepts a bare four-digit year or one of the ISO / `dd.mm.yyyy` layouts.
pub fn parse_manufacture_year(raw: &str) -> Option<i32> {
    let s = raw.trim();
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }

    for fmt in MANUFACTURE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.year());
        }
    }
    for fmt in MANUFACTURE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date.year());
        }
    }

    None
}

/// Interpret a numeric cell as a bare manufacture year.
pub fn year_from_number(value: f64) -> Option<i32> {
    if value.fract() == 0.0 && (1000.0..=9999.0).contains(&value) {
        Some(value as i32)
    } else {
        None
    }
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Number of whole calendar months from `start` to `end`.
///
/// A month counts only if shifting `start` by it does not pass `end`; shifted
/// dates clamp to the last day of shorter months. Negative when `end` precedes
/// `start`.
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> Option<i32> {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

    if end >= start {
        while months > 0 && shift_months(start, months)? > end {
            months -= 1;
        }
    } else {
        while months < 0 && shift_months(start, months)? < end {
            months += 1;
        }
    }

    Some(months)
}

/// Policy duration in months, counting the final partial month as a full one.
pub fn insurance_months(start: NaiveDate, end: NaiveDate) -> Option<i32> {
    let total = calendar_months_between(start, end)?;
    let (years, months) = (total / 12, total % 12);
    Some(years * 12 + months + 1)
}
