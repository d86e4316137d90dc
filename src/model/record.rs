use std::fmt;

use chrono::NaiveDate;

use crate::error::{BookError, BookResult};
use crate::validation;

/// Textual format birthdays are parsed from and rendered to.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Trimmed, non-empty, stored in normalized form
/// (first letter uppercased, the rest lowercased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> BookResult<Self> {
        let trimmed = validation::non_blank(value, "name")?;
        Ok(Self(validation::capitalize(&trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, stored verbatim. The only requirement is non-blank;
/// formats vary too much across countries to validate here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> BookResult<Self> {
        Ok(Self(validation::non_blank(value, "phone number")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday parsed from DD.MM.YYYY text. Immutable once constructed;
/// changing a contact's birthday replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> BookResult<Self> {
        NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| BookError::InvalidBirthday {
                value: value.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// A single contact: one name, an ordered list of phones, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are not rejected here; the add-contact
    /// command checks for them before calling.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Removes every phone equal to `value`. Absent values are not an error.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replaces the value of every phone equal to `old` with `new`.
    /// Silently does nothing when `old` is not present.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        for phone in self.phones.iter_mut() {
            if phone.as_str() == old {
                *phone = replacement.clone();
            }
        }
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parses `value` and replaces any existing birthday. On parse failure
    /// the previous birthday (or none) is left untouched.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Name: {}, Phones: {}", self.name, phones.join(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
