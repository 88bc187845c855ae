//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone or record matched the lookup
    #[error("NoSuchRecord: {0}")]
    NotFound(String),

    /// The pagination cursor has no pages left
    #[error("No more pages: the cursor is at the end of the book")]
    Exhausted,

    /// Page size must be at least one
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),
}

impl AddressBookError {
    /// Build a `NotFound` error for a missing phone or record.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
