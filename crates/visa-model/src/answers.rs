//! Answer and selection values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Answers keyed by question text.
pub type Answers = BTreeMap<String, AnswerValue>;

/// Validation messages keyed by question text (or [`COUNTRY_ERROR_KEY`]), in
/// the order the rules raised them.
///
/// [`COUNTRY_ERROR_KEY`]: crate::COUNTRY_ERROR_KEY
pub type ErrorMap = IndexMap<String, String>;

/// Date of birth as picked from three selects. Empty strings mean "not
/// selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOfBirth {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateOfBirth {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// True when day, month and year are all selected.
    pub fn is_complete(&self) -> bool {
        !self.day.is_empty() && !self.month.is_empty() && !self.year.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    pub fn get(&self, field: DobField) -> &str {
        match field {
            DobField::Day => &self.day,
            DobField::Month => &self.month,
            DobField::Year => &self.year,
        }
    }

    /// Copy of this date with one part replaced.
    #[must_use]
    pub fn with(&self, field: DobField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            DobField::Day => next.day = value,
            DobField::Month => next.month = value,
            DobField::Year => next.year = value,
        }
        next
    }
}

/// One of the three date-of-birth selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DobField {
    Day,
    Month,
    Year,
}

impl DobField {
    pub const fn all() -> &'static [DobField] {
        &[Self::Month, Self::Day, Self::Year]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for DobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DobField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!("unknown date-of-birth field: {other}")),
        }
    }
}

/// A recorded answer.
///
/// Yes/no questions store `Bool`, the state question stores the state name as
/// `Text`, and the date-of-birth question stores a `Date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Text(String),
    Date(DateOfBirth),
}

impl AnswerValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the answer counts as given when only its truthiness is
    /// inspected: `false` and the empty string do not, any date does.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => !value.is_empty(),
            Self::Date(_) => true,
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateOfBirth> for AnswerValue {
    fn from(value: DateOfBirth) -> Self {
        Self::Date(value)
    }
}
