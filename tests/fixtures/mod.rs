//! Test fixtures and sample data.
//!
//! Reusable builders for records and books shared by the integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a record from a name, its phones, and an optional birthday.
///
/// Panics on invalid input; fixtures are expected to be valid.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name, birthday).expect("fixture birthday is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// A small book with a name match, a phone match, and a birthday-less contact.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Ann", &["1234567890"], Some("2000-05-01")));
    book.add_record(sample_record("Bob", &["5551234567", "0987654321"], None));
    book.add_record(sample_record("Carol", &[], Some("1988-02-29")));
    book
}

/// A book of `n` contacts named "Contact 0", "Contact 1", ...
#[allow(dead_code)]
pub fn numbered_book(n: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..n {
        let phone = format!("{:010}", i);
        book.add_record(sample_record(&format!("Contact {}", i), &[&phone], None));
    }
    book
}

/// Shorthand for a calendar date.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records
        .into_iter()
        .map(|r| r.name().to_string())
        .collect()
}
