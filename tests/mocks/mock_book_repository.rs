use address_book::error::{StorageError, StorageResult};
use address_book::models::AddressBook;
use address_book::repositories::BookRepository;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the saved book as its JSON document in memory, so loads and saves
/// go through the same serialization as the file repository. Clones share
/// state, which lets a test keep a handle after passing the mock to a shell.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    document: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        repo.set_document(book.to_json().unwrap());
        repo
    }

    /// Replace the stored document with raw text.
    pub fn set_document(&self, json: impl Into<String>) {
        *self.document.lock().unwrap() = Some(json.into());
    }

    /// The book as last saved, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        let document = self.document.lock().unwrap();
        document
            .as_deref()
            .map(|json| AddressBook::from_json(json).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        let document = self.document.lock().unwrap();
        match document.as_deref() {
            Some(json) => AddressBook::from_json(json),
            None => Err(StorageError::FileNotFound {
                path: PathBuf::from("mock://address_book.json"),
            }),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        let json = book.to_json()?;
        *self.document.lock().unwrap() = Some(json);
        Ok(())
    }
}
