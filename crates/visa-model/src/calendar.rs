//! Option lists for the date-of-birth selects.

use chrono::{Datelike, Local};
use serde::Serialize;

/// Number of years offered, counting down from the current year.
pub const YEAR_SPAN: i32 = 100;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateOptions {
    pub months: Vec<String>,
    pub days: Vec<String>,
    pub years: Vec<String>,
}

impl DateOptions {
    /// Options relative to today's local date.
    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }

    /// Options whose year list starts at `current_year`.
    pub fn for_year(current_year: i32) -> Self {
        Self {
            months: MONTHS.iter().map(|month| (*month).to_string()).collect(),
            days: (1..=31).map(|day| day.to_string()).collect(),
            years: (0..YEAR_SPAN)
                .map(|offset| (current_year - offset).to_string())
                .collect(),
        }
    }
}

impl Default for DateOptions {
    fn default() -> Self {
        Self::current()
    }
}
