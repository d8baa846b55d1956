//! Address Book - a personal contact manager.
//!
//! This library stores contacts with their phone numbers and birthdays,
//! answers searches and birthday queries, and persists the whole book to a
//! JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records, the address book, and the persisted document shape
//! - **repositories**: Loading and saving address books
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **shell**: Interactive menu loop driving an address book

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Pages, Record};
pub use repositories::{BookRepository, JsonFileRepository};
pub use shell::Shell;
