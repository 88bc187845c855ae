//! Address book storage and pagination.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::{Page, Pages};
