//! Data models for the address book.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the document types used to persist a book as JSON.

pub mod address_book;
pub mod document;
pub mod record;

pub use address_book::{AddressBook, Pages};
pub use document::{BookDocument, RecordDocument};
pub use record::Record;
