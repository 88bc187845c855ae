//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How far back a birthday may lie.
const MAX_AGE_MONTHS: u32 = 100 * 12;

/// Today's date on the local clock.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A birth date within the last 100 years.
///
/// Valid dates lie in `[today - 100 years, today]`, both ends inclusive.
/// Construction fails before anything is stored, so an invalid `Birthday`
/// cannot exist.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::from_ymd(1990, 9, 11).unwrap();
/// assert_eq!(birthday.to_string(), "09-11-1990");
/// assert!(Birthday::from_ymd(1990, 2, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Build a birthday from a (year, month, day) triple, checked against today.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDate` if the triple is not a calendar date
    /// - `ValidationError::WrongBirthdayDate` if the date is out of range
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::InvalidDate { year, month, day })?;
        Self::new(date)
    }

    /// Validate `date` against today's local date.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_relative_to(date, today())
    }

    /// Validate `date` against an explicit `today`.
    pub fn new_relative_to(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        let earliest = today
            .checked_sub_months(Months::new(MAX_AGE_MONTHS))
            .unwrap_or(NaiveDate::MIN);

        if date < earliest || date > today {
            return Err(ValidationError::WrongBirthdayDate(date));
        }

        Ok(Self(date))
    }

    /// Replace the stored date. On failure the old value is kept.
    pub fn set(&mut self, year: i32, month: u32, day: u32) -> Result<(), ValidationError> {
        *self = Self::from_ymd(year, month, day)?;
        Ok(())
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Feb 29 falls on Feb 28 when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Days from `today` until the next anniversary; zero when it is today.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        let mut next = self.anniversary_in(today.year())?;
        if next < today {
            next = self.anniversary_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization re-checks the 100-year window against today.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date = NaiveDate::deserialize(deserializer)?;
        Birthday::new(date).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m-%d-%Y"))
    }
}
