//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar fields of a
//! contact: its name, phone numbers, and birthday. Phone numbers and
//! birthdays are validated at construction time, which keeps invalid data
//! from ever being represented in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
