//! Versioned JSON persistence for the address book.
//!
//! The on-disk schema is an explicit contract, independent of the
//! in-memory types: a version number plus a flat list of contacts with
//! named fields. Birthdays are stored in the same DD.MM.YYYY text the
//! user types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BookResult;
use crate::model::{AddressBook, Record};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<StoredContact>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

/// Loads the address book from `path`. A missing file or any read/parse
/// failure yields an empty book; the failure is logged, never surfaced
/// to the user.
pub fn load(path: &Path) -> AddressBook {
    if !path.exists() {
        return AddressBook::new();
    }
    match read_book(path) {
        Ok(book) => book,
        Err(e) => {
            log::warn!(
                "could not load address book from {}: {}; starting empty",
                path.display(),
                e
            );
            AddressBook::new()
        }
    }
}

/// Saves the address book to `path`, creating the parent directory if
/// needed. Writes to a temp file and renames over the destination so a
/// failed save leaves the previous file intact.
pub fn save(path: &Path, book: &AddressBook) -> BookResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = BookFile {
        version: FORMAT_VERSION,
        contacts: book.iter().map(stored_from_record).collect(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_book(path: &Path) -> BookResult<AddressBook> {
    let json = fs::read_to_string(path)?;
    let file: BookFile = serde_json::from_str(&json)?;

    let mut book = AddressBook::new();
    for contact in file.contacts {
        book.add_record(record_from_stored(contact)?);
    }
    Ok(book)
}

fn stored_from_record(record: &Record) -> StoredContact {
    StoredContact {
        name: record.name().as_str().to_string(),
        phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
        birthday: record.birthday().map(|b| b.to_string()),
    }
}

fn record_from_stored(contact: StoredContact) -> BookResult<Record> {
    let mut record = Record::new(&contact.name)?;
    for phone in &contact.phones {
        record.add_phone(phone)?;
    }
    if let Some(birthday) = &contact.birthday {
        record.add_birthday(birthday)?;
    }
    Ok(record)
}
