//! Restartable pagination over an address book.

use crate::models::Record;
use std::fmt;

/// One page of records, in book order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Zero-based page number
    pub number: usize,
    pub records: Vec<&'a Record>,
}

impl<'a> Page<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names on this page, in order.
    pub fn names(&self) -> Vec<&'a str> {
        self.records.iter().copied().map(|r| r.name().as_str()).collect()
    }
}

/// Records one per line, no trailing newline.
impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Lazy iterator of pages. Created by [`AddressBook::pages`](super::AddressBook::pages).
///
/// Holds its own position, so every call to `pages()` starts again from the
/// first record and the book's cursor is left alone.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    next_page: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Vec<&'a Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size,
            next_page: 0,
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_page.checked_mul(self.page_size)?;
        if start >= self.records.len() {
            return None;
        }
        let end = start.saturating_add(self.page_size).min(self.records.len());
        let page = Page {
            number: self.next_page,
            records: self.records[start..end].to_vec(),
        };
        self.next_page += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let consumed = self.next_page.saturating_mul(self.page_size);
        let left = self.records.len().saturating_sub(consumed);
        let pages = left.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}
