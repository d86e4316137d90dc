use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::validation;

use super::record::Record;

/// A record whose birthday falls within the congratulation window,
/// together with the date the congratulation is due (weekend birthdays
/// are celebrated the following Monday).
#[derive(Debug, Clone)]
pub struct UpcomingBirthday {
    pub record: Record,
    pub celebration: NaiveDate,
}

/// The keyed collection of all contacts. Keys are normalized names;
/// iteration for display is deterministic (name order).
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// Days ahead (inclusive) that `upcoming_birthdays` looks at.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Inserts a record under its normalized name, overwriting any
    /// existing entry with the same key.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&validation::capitalize(name.trim()))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&validation::capitalize(name.trim()))
    }

    /// Removes the entry for `name`. Returns whether anything was removed;
    /// deleting an absent name is not an error.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records
            .remove(&validation::capitalize(name.trim()))
            .is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose next birthday occurrence falls within the next
    /// `BIRTHDAY_WINDOW_DAYS` days of `reference`, inclusive of both ends.
    /// Occurrences landing on a weekend are shifted to the following
    /// Monday before the window check, and the shifted date is what gets
    /// reported. Results are sorted by celebration date, then name.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = next_occurrence(birthday.date(), reference);
                let celebration = shift_off_weekend(occurrence);
                let days_until = (celebration - reference).num_days();
                if (0..=BIRTHDAY_WINDOW_DAYS).contains(&days_until) {
                    Some(UpcomingBirthday {
                        record: record.clone(),
                        celebration,
                    })
                } else {
                    None
                }
            })
            .collect();

        upcoming.sort_by(|a, b| {
            (a.celebration, a.record.name().as_str())
                .cmp(&(b.celebration, b.record.name().as_str()))
        });
        upcoming
    }
}

/// This year's occurrence of the birthday's month/day, or next year's if
/// it has already passed. Feb 29 resolves to March 1 in non-leap years.
fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in(reference.year(), birthday);
    if this_year < reference {
        occurrence_in(reference.year() + 1, birthday)
    } else {
        this_year
    }
}

fn occurrence_in(year: i32, birthday: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("March 1 exists in every year")
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
