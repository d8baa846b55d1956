//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::debug;

/// A single contact: a name, any number of phones, and an optional birthday.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record.
    ///
    /// A `None` or empty birthday leaves the record without one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` if a non-empty
    /// birthday is not a valid `YYYY-MM-DD` date.
    pub fn new(
        name: impl Into<ContactName>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let birthday = match birthday {
            Some(raw) if !raw.is_empty() => Some(Birthday::parse(raw)?),
            _ => None,
        };

        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday,
        })
    }

    /// Reassemble a record from already-validated parts.
    pub(crate) fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if known.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            debug!(contact = %self.name, phone, removed, "Removed phone");
        }
        removed
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// All copies of `old_phone` are removed and `new_phone` is appended at
    /// the end. The record is left untouched on error.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if the record has no phone equal to
    ///   `old_phone`
    /// - `RecordError::Validation` if `new_phone` is not a valid number
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> RecordResult<()> {
        if self.find_phone(old_phone).is_none() {
            return Err(RecordError::PhoneNotFound(old_phone.to_string()));
        }

        let replacement = PhoneNumber::new(new_phone)?;
        self.remove_phone(old_phone);
        self.phones.push(replacement);
        Ok(())
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and replace the birthday. The old value survives a failure.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Forget the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` without one.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until_next(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
