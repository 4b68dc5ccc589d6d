use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation;

/// A person with an identity stamp and a birth date.
///
/// Fields are validated at construction and never mutated afterwards, so
/// every accessor is infallible. `version` is an opaque revision stamp owned
/// by whatever store manages the record; this type only carries it.
#[derive(Debug, Clone)]
pub struct Person {
    version: u32,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<Self> {
        Self::with_version(0, first_name, last_name, birth_date)
    }

    pub fn with_version(
        version: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<Self> {
        let first_name = validation::validate_person_name("first_name", &first_name.into())?;
        let last_name = validation::validate_person_name("last_name", &last_name.into())?;
        // A future birth date would make age() undefined, so reject it here
        // rather than in the accessor.
        let birth_date = validation::validate_birth_date(birth_date, Local::now().date_naive())?;

        Ok(Self {
            version,
            first_name,
            last_name,
            birth_date,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Canonical composition: first name, a single space, last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Age in whole years as of today (local calendar date).
    pub fn age(&self) -> u32 {
        self.age_on(Local::now().date_naive())
    }

    /// Age in whole years as of `on`. One year is counted per anniversary
    /// reached; a reference date before the birth date yields 0.
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        if on < self.birth_date {
            return 0;
        }

        let mut years = on.year() - self.birth_date.year();
        if (on.month(), on.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        years as u32
    }
}

/// Wire shape of a person as it appears in roster files. Construction of a
/// validated [`Person`] goes through `TryFrom`, which is where name and date
/// rules are enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub version: u32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl TryFrom<PersonRecord> for Person {
    type Error = crate::utils::error::RosterError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::with_version(
            record.version,
            record.first_name,
            record.last_name,
            record.birth_date,
        )
    }
}

/// One derived line of the roster report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub age: u32,
}

impl ReportRow {
    pub fn for_person(person: &Person, as_of: NaiveDate) -> Self {
        Self {
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            full_name: person.full_name(),
            birth_date: person.birth_date(),
            age: person.age_on(as_of),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RosterReport {
    pub rows: Vec<ReportRow>,
    pub csv_output: String,
    pub json_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ada() -> Person {
        Person::new("Ada", "Lovelace", date(2000, 6, 15)).unwrap()
    }

    #[test]
    fn test_full_name_composition() {
        assert_eq!(ada().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_age_before_birthday_this_year() {
        assert_eq!(ada().age_on(date(2024, 6, 14)), 23);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(ada().age_on(date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_age_after_birthday_this_year() {
        assert_eq!(ada().age_on(date(2024, 6, 16)), 24);
    }

    #[test]
    fn test_age_before_birth_date_saturates_to_zero() {
        assert_eq!(ada().age_on(date(1999, 1, 1)), 0);
    }

    #[test]
    fn test_age_on_exact_birth_date_is_zero() {
        assert_eq!(ada().age_on(date(2000, 6, 15)), 0);
    }

    #[test]
    fn test_leap_day_birthday_counts_on_march_first() {
        let person = Person::new("Leap", "Day", date(2004, 2, 29)).unwrap();
        assert_eq!(person.age_on(date(2005, 2, 28)), 0);
        assert_eq!(person.age_on(date(2005, 3, 1)), 1);
    }

    #[test]
    fn test_birth_date_accessor_is_idempotent() {
        let person = ada();
        let first = person.birth_date();
        let _ = person.full_name();
        let _ = person.age_on(date(2024, 6, 15));
        assert_eq!(person.birth_date(), first);
        assert_eq!(person.birth_date(), date(2000, 6, 15));
    }

    #[test]
    fn test_names_are_trimmed_at_construction() {
        let person = Person::new("  Ada ", " Lovelace  ", date(2000, 6, 15)).unwrap();
        assert_eq!(person.first_name(), "Ada");
        assert_eq!(person.last_name(), "Lovelace");
        assert_eq!(person.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_empty_names_are_rejected() {
        assert!(Person::new("", "Lovelace", date(2000, 6, 15)).is_err());
        assert!(Person::new("Ada", "   ", date(2000, 6, 15)).is_err());
    }

    #[test]
    fn test_future_birth_date_is_rejected() {
        let next_year = Local::now().date_naive().year() + 1;
        assert!(Person::new("Ada", "Lovelace", date(next_year, 1, 1)).is_err());
    }

    #[test]
    fn test_record_conversion_defaults_version() {
        let record = PersonRecord {
            version: 0,
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            birth_date: date(1912, 6, 23),
        };
        let person = Person::try_from(record).unwrap();
        assert_eq!(person.version(), 0);
        assert_eq!(person.full_name(), "Alan Turing");
    }

    #[test]
    fn test_report_row_for_person() {
        let row = ReportRow::for_person(&ada(), date(2024, 6, 15));
        assert_eq!(row.full_name, "Ada Lovelace");
        assert_eq!(row.birth_date, date(2000, 6, 15));
        assert_eq!(row.age, 24);
    }
}
