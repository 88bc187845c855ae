//! Test fixtures and sample data shared by the integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a record with the given phones and no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// Build a book holding one phone-less record per name, in order.
pub fn book_with(names: &[&str], records_per_page: usize) -> AddressBook {
    let mut book =
        AddressBook::with_records_per_page(records_per_page).expect("fixture page size is valid");
    for name in names {
        book.add_record(sample_record(name, &[]));
    }
    book
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}
