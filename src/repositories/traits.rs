use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting an address book.
///
/// Provides abstraction over where a book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
/// Both operations act on the whole book at once.
pub trait BookRepository {
    /// Load the complete book.
    ///
    /// Returns `StorageError::FileNotFound` when nothing has been saved
    /// yet, so callers can start from an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
