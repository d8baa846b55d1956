//! The address book: an insertion-ordered collection of records keyed by name.

use crate::error::{StorageError, StorageResult};
use crate::models::document::BookDocument;
use crate::models::Record;
use crate::repositories::{BookRepository, JsonFileRepository};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use std::iter::FusedIterator;
use std::path::Path;
use tracing::debug;

/// All contacts of one user, keyed by contact name.
///
/// Records are kept in the order they were first added. Adding a record
/// whose name is already present replaces the old record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in book order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing.
    ///
    /// Only the record's phones and birthday can change through this
    /// reference, so the name-to-key invariant holds.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        debug!(contact = %name, "Adding record");
        if self.records.insert(name, record).is_some() {
            debug!("Replaced existing record with the same name");
        }
    }

    /// Records whose name contains `query` (ignoring case) or, failing
    /// that, one of whose phones contains `query` verbatim.
    ///
    /// Each record appears at most once, in book order.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();

        self.records
            .iter()
            .filter(|(name, record)| {
                name.to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .map(|(_, record)| record)
            .collect()
    }

    /// Remove and return the record for `name`, if present.
    ///
    /// The remaining records keep their order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(contact = name, "Deleted record");
        }
        removed
    }

    /// Iterate over the book in pages of `page_size` entries.
    ///
    /// Each page is the concatenation of `"{name}: {record}"` for its
    /// entries. A trailing page with fewer than `page_size` entries is not
    /// yielded unless [`Pages::flush_partial`] is called. A page size of 0
    /// is treated as 1.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            entries: self.records.iter(),
            page_size: page_size.max(1),
            flush_partial: false,
        }
    }

    /// Every record with a birthday and the days left until it, counted
    /// from today's local date.
    pub fn upcoming_birthdays(&self) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Every record with a birthday and the days left until it, counted
    /// from `today`. Book order, no filtering by distance.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<(&Record, i64)> {
        self.records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .map(|days| (record, days))
            })
            .collect()
    }

    /// Serialize the whole book to its JSON document form.
    pub fn to_json(&self) -> StorageResult<String> {
        serde_json::to_string_pretty(&BookDocument::from(self)).map_err(StorageError::Serialize)
    }

    /// Rebuild a book from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::MalformedData` if the text is not valid JSON,
    /// a record lacks `phones` or `birthday`, or any phone or birthday fails
    /// validation. Nothing is partially loaded.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let document: BookDocument = serde_json::from_str(json)
            .map_err(|e| StorageError::MalformedData(e.to_string()))?;
        Ok(Self::from(document))
    }

    /// Load a book from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        JsonFileRepository::new(path.as_ref()).load()
    }

    /// Save the book to a JSON file, overwriting it.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        JsonFileRepository::new(path.as_ref()).save(self)
    }
}

/// Lazy page iterator returned by [`AddressBook::pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    entries: indexmap::map::Iter<'a, String, Record>,
    page_size: usize,
    flush_partial: bool,
}

impl<'a> Pages<'a> {
    /// Also yield the trailing page when it has fewer than `page_size` entries.
    pub fn flush_partial(mut self) -> Self {
        self.flush_partial = true;
        self
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut page = String::new();
        let mut count = 0;

        for (name, record) in self.entries.by_ref().take(self.page_size) {
            page.push_str(&format!("{}: {}", name, record));
            count += 1;
        }

        if count == self.page_size || (count > 0 && self.flush_partial) {
            Some(page)
        } else {
            None
        }
    }
}

impl<'a> FusedIterator for Pages<'a> {}
