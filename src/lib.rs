//! Address Book - an in-memory contact manager.
//!
//! Stores named contacts with validated phone numbers and optional
//! birthdays, supports lookup and editing, counts the days to a contact's
//! next birthday and lists the book page by page.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` aggregate for a single contact
//! - **book**: The `AddressBook` collection and its pagination
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Page, Pages};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ValidationResult};
pub use models::Record;
