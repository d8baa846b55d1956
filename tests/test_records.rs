mod fixtures;

use address_book::{Record, RecordError, ValidationError};
use fixtures::{date, sample_record};

#[test]
fn test_ann_scenario_summary() {
    let mut ann = Record::new("Ann", Some("2000-05-01")).unwrap();
    ann.add_phone("1234567890").unwrap();
    ann.add_phone("0987654321").unwrap();

    assert_eq!(
        ann.to_string(),
        "Contact name: Ann, phones: 1234567890; 0987654321"
    );
    assert_eq!(ann.birthday().unwrap().to_string(), "2000-05-01");
}

#[test]
fn test_add_phone_rejects_phone_count_input() {
    // A phone count typed at a prompt is not a phone number
    let mut record = Record::new("Ann", None).unwrap();
    let err = record.add_phone("2").unwrap_err();

    assert_eq!(err, ValidationError::InvalidPhoneFormat("2".to_string()));
    assert!(record.phones().is_empty());
}

#[test]
fn test_edit_phone_invalid_replacement_is_atomic() {
    let mut record = sample_record("Bob", &["5551234567", "0987654321"], None);
    let before = record.clone();

    let err = record.edit_phone("5551234567", "555-123-4567").unwrap_err();
    assert!(matches!(
        err,
        RecordError::Validation(ValidationError::InvalidPhoneFormat(_))
    ));
    assert_eq!(record, before);
}

#[test]
fn test_edit_phone_missing_old_reported_before_validation() {
    let mut record = sample_record("Bob", &["5551234567"], None);

    let err = record.edit_phone("1111111111", "bad").unwrap_err();
    assert_eq!(err, RecordError::PhoneNotFound("1111111111".to_string()));
}

#[test]
fn test_edit_phone_replaces_every_copy() {
    let mut record = sample_record("Bob", &["5551234567", "0987654321", "5551234567"], None);

    record.edit_phone("5551234567", "1112223333").unwrap();
    assert!(record.find_phone("5551234567").is_none());
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0987654321", "1112223333"]);
}

#[test]
fn test_days_to_birthday_on_the_day() {
    let record = sample_record("Ann", &[], Some("1990-07-04"));
    assert_eq!(record.days_to_birthday_from(date(2026, 7, 4)), Some(0));
}

#[test]
fn test_days_to_birthday_day_after() {
    let record = sample_record("Ann", &[], Some("1990-07-04"));
    // 2026-07-05 -> 2027-07-04 (no Feb 29 in between)
    assert_eq!(record.days_to_birthday_from(date(2026, 7, 5)), Some(364));
    // 2027-07-05 -> 2028-07-04 (spans 2028-02-29)
    assert_eq!(record.days_to_birthday_from(date(2027, 7, 5)), Some(365));
}

#[test]
fn test_days_to_birthday_new_years_rollover() {
    let record = sample_record("Ann", &[], Some("1990-01-01"));
    assert_eq!(record.days_to_birthday_from(date(2026, 12, 31)), Some(1));
}

#[test]
fn test_leap_day_birthday_in_non_leap_years() {
    let record = sample_record("Carol", &[], Some("1988-02-29"));

    // Observed on March 1 when February has 28 days
    assert_eq!(record.days_to_birthday_from(date(2026, 2, 28)), Some(1));
    assert_eq!(record.days_to_birthday_from(date(2026, 3, 1)), Some(0));
    // 2026-03-02 -> 2027-03-01
    assert_eq!(record.days_to_birthday_from(date(2026, 3, 2)), Some(364));
    // In a leap year the real day is used
    assert_eq!(record.days_to_birthday_from(date(2028, 2, 28)), Some(1));
    assert_eq!(record.days_to_birthday_from(date(2028, 2, 29)), Some(0));
}

#[test]
fn test_record_without_birthday_has_no_countdown() {
    let record = sample_record("Bob", &["5551234567"], None);
    assert_eq!(record.days_to_birthday_from(date(2026, 1, 1)), None);
}
