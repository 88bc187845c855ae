//! Record model representing one contact in the address book.

use crate::domain::birthday::today;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{AddressBookError, AddressBookResult, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with a birthday given as (year, month, day).
    pub fn with_birthday(
        name: impl Into<String>,
        (year, month, day): (i32, u32, u32),
    ) -> ValidationResult<Self> {
        let mut record = Self::new(name)?;
        record.birthday = Some(Birthday::from_ymd(year, month, day)?);
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = Phone::new(phone)?;
        tracing::trace!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        tracing::trace!(name = %self.name, phone, "Removed phone");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything changes, so a failed edit leaves
    /// the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let replacement = Phone::new(new)?;
        let index = self.position_of(old)?;
        tracing::debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// Return the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> AddressBookResult<&Phone> {
        self.phones
            .iter()
            .find(|p| *p == phone)
            .ok_or_else(|| self.missing_phone(phone))
    }

    /// Set or overwrite the birthday. On failure the old birthday is kept.
    pub fn add_birthday(&mut self, (year, month, day): (i32, u32, u32)) -> AddressBookResult<()> {
        let birthday = Birthday::from_ymd(year, month, day)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(today())
    }

    /// Same as [`Record::days_to_birthday`], counted from an explicit date.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until_next(today)
    }

    fn position_of(&self, phone: &str) -> AddressBookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| self.missing_phone(phone))
    }

    fn missing_phone(&self, phone: &str) -> AddressBookError {
        AddressBookError::not_found(format!("phone {} for {}", phone, self.name))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use chrono::Datelike;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert!(Record::new("").is_err());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 3);
        assert_eq!(record.phones()[2], "1234567890");
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = john();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            AddressBookError::Validation(ValidationError::WrongPhone("12345".to_string()))
        );
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        record.remove_phone("1234567890").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: 5555555555; 1234567890");
    }

    #[test]
    fn test_remove_phone_missing() {
        let mut record = john();
        assert!(record.remove_phone("0000000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = john();
        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record, john());
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(record, john());
    }

    #[test]
    fn test_find_phone_scans_past_first() {
        let record = john();
        let found = record.find_phone("5555555555").unwrap();
        assert_eq!(found.as_str(), "5555555555");
        assert!(record.find_phone("9999999999").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_phone_on_empty_record() {
        let record = Record::new("Nobody").unwrap();
        assert!(record.find_phone("1234567890").is_err());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = john();
        record.add_birthday((1990, 9, 11)).unwrap();
        record.add_birthday((1991, 1, 2)).unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01-02-1991");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = john();
        record.add_birthday((1990, 9, 11)).unwrap();
        assert!(record.add_birthday((1800, 1, 1)).is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "09-11-1990");
    }

    #[test]
    fn test_add_birthday_out_of_range_stores_nothing() {
        let next_year = today().year() + 1;
        for triple in [(next_year, 1, 1), (today().year() - 101, 1, 1)] {
            let mut record = john();
            let err = record.add_birthday(triple).unwrap_err();
            assert!(err.is_validation());
            assert!(record.birthday().is_none());
            assert_eq!(record.days_to_birthday(), None);
        }
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        assert_eq!(john().days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_from() {
        let record = Record::with_birthday("Jane", (1995, 5, 1)).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        assert_eq!(record.days_to_birthday_from(today), Some(1));
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = Record::with_birthday("Jane", (1995, 5, 1)).unwrap();
        record.add_phone("9876543210").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Jane, phones: 9876543210, birthday: 05-01-1995"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::new("Solo").unwrap();
        assert_eq!(record.to_string(), "Contact name: Solo, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::with_birthday("Jane", (1995, 5, 1)).unwrap();
        record.add_phone("9876543210").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Jane","phones":["9876543210"],"birthday":"1995-05-01"}"#
        );

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let json = r#"{"name":"Jane","phones":["12"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
