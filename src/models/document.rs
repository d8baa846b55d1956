//! On-disk JSON shape of an address book.
//!
//! ```json
//! {
//!   "records": {
//!     "Ann": { "phones": ["1234567890"], "birthday": "2000-05-01" },
//!     "Bob": { "phones": [], "birthday": null }
//!   }
//! }
//! ```
//!
//! Both `phones` and `birthday` must be present on every record; `birthday`
//! may be `null`. Phones and birthdays are validated while deserializing, so
//! a document that parses is always a valid address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::models::{AddressBook, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level persisted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDocument {
    /// Records keyed by contact name, in book order
    pub records: IndexMap<String, RecordDocument>,
}

/// One persisted record. The name is the key in [`BookDocument::records`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDocument {
    /// Phone numbers in insertion order
    pub phones: Vec<PhoneNumber>,

    /// Birthday, `null` when unknown
    #[serde(deserialize_with = "deserialize_nullable")]
    pub birthday: Option<Birthday>,
}

/// Deserialize an `Option` whose key must be present even when the value is null.
///
/// A plain `Option` field would silently default to `None` when missing.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<&AddressBook> for BookDocument {
    fn from(book: &AddressBook) -> Self {
        Self {
            records: book
                .records()
                .map(|record| (record.name().to_string(), RecordDocument::from(record)))
                .collect(),
        }
    }
}

impl From<BookDocument> for AddressBook {
    fn from(document: BookDocument) -> Self {
        let mut book = AddressBook::new();
        for (name, entry) in document.records {
            book.add_record(Record::from_parts(
                ContactName::new(name),
                entry.phones,
                entry.birthday,
            ));
        }
        book
    }
}
