use contacts_book::model::*;

// ==========================================================================
// NAME TESTS
// ==========================================================================

#[test]
fn name_trims_and_normalizes() {
    let name = Name::new("  anna  ").unwrap();
    assert_eq!(name.as_str(), "Anna");
}

#[test]
fn name_lowercases_everything_after_the_first_letter() {
    let name = Name::new("ANNA").unwrap();
    assert_eq!(name.as_str(), "Anna");
}

#[test]
fn name_rejects_blank() {
    assert!(Name::new("").is_err());
    assert!(Name::new("   ").is_err());
}

// ==========================================================================
// PHONE TESTS
// ==========================================================================

#[test]
fn phone_stores_value_verbatim() {
    let phone = Phone::new("+38 (050) 111-22-33").unwrap();
    assert_eq!(phone.as_str(), "+38 (050) 111-22-33");
}

#[test]
fn phone_rejects_blank() {
    assert!(Phone::new("  ").is_err());
}

// ==========================================================================
// BIRTHDAY TESTS
// ==========================================================================

#[test]
fn birthday_parse_then_display_round_trips() {
    for text in ["15.06.1990", "01.01.1980", "29.02.2000", "31.12.1999"] {
        let birthday = Birthday::parse(text).unwrap();
        assert_eq!(birthday.to_string(), text);
    }
}

#[test]
fn birthday_rejects_invalid_text() {
    for text in ["1990-06-15", "15/06/1990", "32.01.1990", "29.02.2023", "yesterday", ""] {
        assert!(Birthday::parse(text).is_err(), "accepted {:?}", text);
    }
}

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_add_and_find_phone() {
    let mut record = Record::new("Anna").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_phone("0987654321").unwrap();

    assert_eq!(record.phones().len(), 2);
    assert!(record.find_phone("1234567890").is_some());
    assert!(record.find_phone("5555555555").is_none());
}

#[test]
fn record_remove_phone_removes_all_matches() {
    let mut record = Record::new("Anna").unwrap();
    record.add_phone("111").unwrap();
    record.add_phone("222").unwrap();
    record.add_phone("111").unwrap();

    record.remove_phone("111");
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "222");
}

#[test]
fn record_remove_absent_phone_is_not_an_error() {
    let mut record = Record::new("Anna").unwrap();
    record.add_phone("111").unwrap();
    record.remove_phone("999");
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn record_edit_phone_replaces_matching_entries() {
    let mut record = Record::new("Anna").unwrap();
    record.add_phone("111").unwrap();
    record.add_phone("222").unwrap();

    record.edit_phone("111", "333").unwrap();
    assert!(record.find_phone("111").is_none());
    assert!(record.find_phone("333").is_some());
    assert!(record.find_phone("222").is_some());
}

#[test]
fn record_edit_absent_phone_leaves_list_unchanged() {
    let mut record = Record::new("Anna").unwrap();
    record.add_phone("111").unwrap();

    record.edit_phone("999", "333").unwrap();
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "111");
}

#[test]
fn record_add_birthday_replaces_existing() {
    let mut record = Record::new("Anna").unwrap();
    record.add_birthday("15.06.1990").unwrap();
    record.add_birthday("16.06.1990").unwrap();
    assert_eq!(record.birthday().unwrap().to_string(), "16.06.1990");
}

#[test]
fn record_invalid_birthday_keeps_previous_value() {
    let mut record = Record::new("Anna").unwrap();
    record.add_birthday("15.06.1990").unwrap();

    assert!(record.add_birthday("not-a-date").is_err());
    assert_eq!(record.birthday().unwrap().to_string(), "15.06.1990");
}

#[test]
fn record_invalid_birthday_leaves_none_when_unset() {
    let mut record = Record::new("Anna").unwrap();
    assert!(record.add_birthday("99.99.9999").is_err());
    assert!(record.birthday().is_none());
}

#[test]
fn record_display_joins_phones_and_appends_birthday() {
    let mut record = Record::new("anna").unwrap();
    record.add_phone("111").unwrap();
    record.add_phone("222").unwrap();
    assert_eq!(record.to_string(), "Name: Anna, Phones: 111, 222");

    record.add_birthday("15.06.1990").unwrap();
    assert_eq!(
        record.to_string(),
        "Name: Anna, Phones: 111, 222, Birthday: 15.06.1990"
    );
}
