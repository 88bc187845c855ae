//! Domain validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("WrongPhone: {0:?} must be exactly 10 digits")]
    WrongPhone(String),

    /// The (year, month, day) triple does not name a calendar date.
    #[error("WrongBirthdayDate: {year}-{month}-{day} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The birthday lies in the future or more than 100 years back.
    #[error("WrongBirthdayDate: {0} is outside the last 100 years")]
    WrongBirthdayDate(NaiveDate),
}

impl ValidationError {
    /// True for both birthday failure kinds.
    pub fn is_birthday_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. } | Self::WrongBirthdayDate(_)
        )
    }
}
