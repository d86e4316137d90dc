use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};
use crate::validation;

/// `add <name> <phone> [birthday]` — create a contact or append a phone
/// to an existing one. Adding a name+phone pair that already exists is
/// rejected without touching the book.
pub fn add(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    if args.len() < 2 {
        return Err(BookError::Usage("Give me name and phone please.".into()));
    }
    let (name, phone) = (args[0], args[1]);
    let birthday = args.get(2).copied();

    if let Some(record) = book.find_mut(name) {
        if record.find_phone(phone).is_some() {
            return Err(BookError::AlreadyExists {
                name: record.name().as_str().to_string(),
                phone: phone.to_string(),
            });
        }
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    if let Some(birthday) = birthday {
        record.add_birthday(birthday)?;
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>` replaces a phone number;
/// `change <name> <phone>` removes one.
pub fn change(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    match *args {
        [name, old_phone, new_phone] => {
            let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
            record.edit_phone(old_phone, new_phone)?;
            Ok("Phone number updated.".to_string())
        }
        [name, phone] => {
            let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
            if record.find_phone(phone).is_none() {
                return Err(BookError::PhoneNotFound {
                    name: record.name().as_str().to_string(),
                    phone: phone.to_string(),
                });
            }
            record.remove_phone(phone);
            Ok("Phone number removed.".to_string())
        }
        _ => Err(BookError::Usage(
            "Give me name, old phone and new phone please, or name and phone to remove.".into(),
        )),
    }
}

/// `phone <name>` — show the contact's phone numbers.
pub fn show_phone(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let &[name] = args else {
        return Err(BookError::Usage("Give me name, please.".into()));
    };
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(format!("{}: {}", record.name(), phones.join(", ")))
}

/// `all` — list every contact.
pub fn show_all(_args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("The address book is empty.".to_string());
    }
    let lines: Vec<String> = book.iter().map(|record| record.to_string()).collect();
    Ok(lines.join("\n"))
}

/// `delete <name>` — remove a contact.
pub fn delete(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let &[name] = args else {
        return Err(BookError::Usage("Give me name, please.".into()));
    };
    if book.delete(name) {
        Ok("Contact deleted.".to_string())
    } else {
        Err(not_found(name))
    }
}

fn not_found(name: &str) -> BookError {
    BookError::ContactNotFound {
        name: validation::capitalize(name.trim()),
    }
}
