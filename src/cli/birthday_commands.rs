use chrono::{Local, NaiveDate};

use crate::error::{BookError, BookResult};
use crate::model::record::BIRTHDAY_FORMAT;
use crate::model::AddressBook;
use crate::validation;

/// `add-birthday <name> <DD.MM.YYYY>` — attach or replace a birthday.
pub fn add(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let &[name, birthday] = args else {
        return Err(BookError::Usage("Give me name and birthday please.".into()));
    };
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — show the contact's birthday.
pub fn show(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let &[name] = args else {
        return Err(BookError::Usage("Give me name, please.".into()));
    };
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}", record.name(), birthday)),
        None => Ok(format!("No birthday set for {}.", record.name())),
    }
}

/// `change-birthday <name> <DD.MM.YYYY>` — replace an existing birthday.
/// Unlike `add-birthday`, this refuses when no birthday is set yet.
pub fn change(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let &[name, birthday] = args else {
        return Err(BookError::Usage(
            "Give me the name of the contact and the new birthday please.".into(),
        ));
    };
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    if record.birthday().is_none() {
        return Err(BookError::NoBirthdaySet {
            name: record.name().as_str().to_string(),
        });
    }
    record.add_birthday(birthday)?;
    Ok("Birthday updated.".to_string())
}

/// `birthdays` — contacts to congratulate within the next 7 days.
/// Extra arguments are ignored, as in the reference behavior.
pub fn upcoming(_args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    Ok(render_upcoming(book, Local::now().date_naive()))
}

/// Renders the upcoming-birthday list for a given reference date.
/// Weekend birthdays show the shifted (Monday) celebration date.
pub fn render_upcoming(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the next 7 days.".to_string();
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|entry| {
            let phones: Vec<&str> = entry.record.phones().iter().map(|p| p.as_str()).collect();
            format!(
                "{}: {} ({})",
                entry.record.name(),
                entry.celebration.format(BIRTHDAY_FORMAT),
                phones.join(", ")
            )
        })
        .collect();
    lines.join("\n")
}

fn not_found(name: &str) -> BookError {
    BookError::ContactNotFound {
        name: validation::capitalize(name.trim()),
    }
}
