//! The address book: records keyed by name, in insertion order.

use super::pages::{Page, Pages};
use crate::config::{Config, DEFAULT_RECORDS_PER_PAGE};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered collection of [`Record`]s keyed by name.
///
/// Re-adding a record under an existing name replaces the stored record but
/// keeps its original position.
///
/// Two ways to page through the book:
///
/// - [`AddressBook::next_page`] advances a single forward-only cursor owned
///   by the book. Once it reaches the end every call fails with
///   [`AddressBookError::Exhausted`] until [`AddressBook::reset_cursor`].
/// - [`AddressBook::pages`] returns an independent iterator that always starts
///   from the first record.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// for name in ["A", "B", "C"] {
///     book.add_record(Record::new(name).unwrap());
/// }
/// book.set_records_per_page(2).unwrap();
///
/// let names: Vec<Vec<&str>> = book.pages().map(|p| p.names()).collect();
/// assert_eq!(names, vec![vec!["A", "B"], vec!["C"]]);
/// ```
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    keys: Vec<String>,
    records_per_page: usize,
    current_index: usize,
    pages_served: usize,
}

impl AddressBook {
    /// Create an empty book with the default page size of 3.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            keys: Vec::new(),
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            current_index: 0,
            pages_served: 0,
        }
    }

    /// Create an empty book with a custom page size.
    pub fn with_records_per_page(records_per_page: usize) -> AddressBookResult<Self> {
        let mut book = Self::new();
        book.set_records_per_page(records_per_page)?;
        Ok(book)
    }

    /// Create an empty book using the configured page size.
    pub fn from_config(config: &Config) -> AddressBookResult<Self> {
        Self::with_records_per_page(config.records_per_page)
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.records.insert(key.clone(), record) {
            Some(_) => tracing::debug!(name = %key, "Replaced existing record"),
            None => {
                tracing::debug!(name = %key, "Added record");
                self.keys.push(key);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> AddressBookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| AddressBookError::not_found(name))
    }

    /// Look up a record by name for editing.
    ///
    /// Renaming is not possible through this handle since `Record` exposes
    /// no name setter.
    pub fn find_mut(&mut self, name: &str) -> AddressBookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AddressBookError::not_found(name))
    }

    /// Remove a record by name and return it.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AddressBookError::not_found(name))?;

        if let Some(index) = self.keys.iter().position(|k| k == name) {
            self.keys.remove(index);
            // Keep the cursor on the same next record.
            if index < self.current_index {
                self.current_index -= 1;
            }
        }

        tracing::debug!(name, "Deleted record");
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Records in book order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.keys.iter().filter_map(|key| self.records.get(key))
    }

    pub fn records_per_page(&self) -> usize {
        self.records_per_page
    }

    /// Change the page size for pages produced from now on.
    pub fn set_records_per_page(&mut self, records_per_page: usize) -> AddressBookResult<()> {
        if records_per_page == 0 {
            return Err(AddressBookError::InvalidPageSize(records_per_page));
        }
        tracing::debug!(records_per_page, "Set records per page");
        self.records_per_page = records_per_page;
        Ok(())
    }

    /// Position of the pagination cursor (index of the next record to show).
    pub fn cursor(&self) -> usize {
        self.current_index
    }

    /// Rewind the pagination cursor to the first record.
    pub fn reset_cursor(&mut self) {
        tracing::trace!("Reset pagination cursor");
        self.current_index = 0;
        self.pages_served = 0;
    }

    /// Advance the cursor by one page and return that page.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Exhausted` once the cursor has passed the
    /// last record.
    pub fn next_page_records(&mut self) -> AddressBookResult<Page<'_>> {
        if self.current_index >= self.keys.len() {
            return Err(AddressBookError::Exhausted);
        }

        let start = self.current_index;
        let end = start
            .saturating_add(self.records_per_page)
            .min(self.keys.len());
        let number = self.pages_served;
        self.current_index = end;
        self.pages_served += 1;
        tracing::trace!(start, end, page = number, "Advanced pagination cursor");

        let records = self.keys[start..end]
            .iter()
            .filter_map(|key| self.records.get(key))
            .collect();
        Ok(Page { number, records })
    }

    /// Advance the cursor by one page and render it, one record per line.
    pub fn next_page(&mut self) -> AddressBookResult<String> {
        self.next_page_records().map(|page| page.to_string())
    }

    /// A fresh page iterator starting at the first record.
    ///
    /// Uses the page size in effect now and does not move the cursor.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self.records().collect(), self.records_per_page)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Every record on its own line in book order, no trailing newline.
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
