use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Book repository backed by a single JSON document on disk.
///
/// Reads and writes always cover the whole file: a load reads the file
/// into memory before any record is built, and a save serializes the whole
/// book before the file is opened.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::FileNotFound {
                path: self.path.clone(),
            },
            _ => StorageError::Io(e),
        })?;

        debug!(path = %self.path.display(), bytes = contents.len(), "Read address book file");
        let book = AddressBook::from_json(&contents)?;

        info!(path = %self.path.display(), records = book.len(), "Address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = book.to_json()?;
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }
}
