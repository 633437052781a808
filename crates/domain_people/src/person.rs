//! Person entity
//!
//! A [`Person`] owns an immutable [`Name`] plus optional birth and death
//! instants, gender, numeric id and version. Age and the life-stage
//! predicates are derived on every call from the birth date and the
//! person's [`Clock`], so they change as time passes.
//!
//! # Identity
//!
//! Two people are equal when they share a name and a birth date. The id,
//! version, gender and date of death are administrative or lifecycle fields
//! and do not take part in equality, hashing or ordering.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use domain_people::Person;
//!
//! let person = Person::named("Jon", "Bloom")?
//!     .born(Utc.with_ymd_and_hms(1974, 5, 27, 0, 0, 0).unwrap())?
//!     .as_male();
//!
//! assert!(person.is_adult());
//! assert!(person.is_alive());
//! # Ok::<(), domain_people::IdentityError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use core_kernel::{system_clock, whole_years_between_instants, years_before, SharedClock, VersionId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IdentityError, IdentityResult};
use crate::gender::Gender;
use crate::name::{Name, Nameable};

/// Age from which a person is an adult
pub const ADULT_AGE: u32 = 18;

/// Age from which a person is a teenager
pub const TEENAGE: u32 = 13;

const DATE_PATTERN: &str = "%Y-%m-%d";
const DATE_TIME_PATTERN: &str = "%Y-%m-%d %I:%M %p";
const UNKNOWN: &str = "Unknown";

/// A human being, living or dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    name: Name,
    birth_date: Option<DateTime<Utc>>,
    date_of_death: Option<DateTime<Utc>>,
    gender: Option<Gender>,
    id: Option<i64>,
    version: Option<VersionId>,
    #[serde(skip)]
    clock: SharedClock,
}

/// Unvalidated wire shape of a [`Person`]
#[derive(Deserialize)]
struct PersonRecord {
    name: Name,
    #[serde(default)]
    birth_date: Option<DateTime<Utc>>,
    #[serde(default)]
    date_of_death: Option<DateTime<Utc>>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    version: Option<VersionId>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = IdentityError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let mut person = Person::new(record.name);
        person.set_birth_date(record.birth_date)?;
        person.set_date_of_death(record.date_of_death)?;
        person.gender = record.gender;
        person.id = record.id;
        person.version = record.version;
        Ok(person)
    }
}

impl Person {
    /// Creates a person reading "now" from the system clock
    pub fn new(name: Name) -> Self {
        Self::with_clock(name, system_clock())
    }

    /// Creates a person reading "now" from the given clock
    pub fn with_clock(name: Name, clock: SharedClock) -> Self {
        Self {
            name,
            birth_date: None,
            date_of_death: None,
            gender: None,
            id: None,
            version: None,
            clock,
        }
    }

    /// Creates a person born at the given instant
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidArgument`] when the birth date lies
    /// in the future.
    pub fn born_on(name: Name, birth_date: DateTime<Utc>) -> IdentityResult<Self> {
        Self::new(name).born(birth_date)
    }

    /// Creates a person from free text such as `"Mr. Jon J Bloom"`
    pub fn parse(text: &str) -> IdentityResult<Self> {
        Ok(Self::new(Name::parse(text)?))
    }

    /// Creates a person from a first and last name
    pub fn named(first_name: &str, last_name: &str) -> IdentityResult<Self> {
        Ok(Self::new(Name::of(first_name, last_name)?))
    }

    /// Copies the name, birth date, gender and clock of another person
    ///
    /// The copy is unsaved: it carries no id, version or date of death.
    pub fn from_person(other: &Person) -> Self {
        Self {
            birth_date: other.birth_date,
            gender: other.gender,
            ..Self::with_clock(other.name.clone(), other.clock.clone())
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn first_name(&self) -> &str {
        self.name.first_name()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.name.middle_name()
    }

    pub fn last_name(&self) -> &str {
        self.name.last_name()
    }

    pub fn birth_date(&self) -> Option<DateTime<Utc>> {
        self.birth_date
    }

    pub fn date_of_death(&self) -> Option<DateTime<Utc>> {
        self.date_of_death
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the version of this person
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidState`] if no version was ever set.
    pub fn version(&self) -> IdentityResult<VersionId> {
        self.version
            .ok_or_else(|| IdentityError::invalid_state("Version was not initialized"))
    }

    /// Returns true if this person has not been assigned an id
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Returns the age in whole years
    ///
    /// Measured up to the date of death, or up to now for the living. A
    /// birth date in the future yields zero. `None` when the birth date is
    /// unknown.
    pub fn age(&self) -> Option<u32> {
        self.birth_date.map(|birth_date| {
            let end = self.date_of_death.unwrap_or_else(|| self.now());
            whole_years_between_instants(birth_date, end).max(0) as u32
        })
    }

    pub fn is_alive(&self) -> bool {
        self.date_of_death.is_none()
    }

    /// Returns true if the birth date is known and strictly before now
    pub fn is_born(&self) -> bool {
        self.birth_date
            .map_or(false, |birth_date| birth_date < self.now())
    }

    pub fn is_child(&self) -> bool {
        self.age().map_or(false, |age| age < TEENAGE)
    }

    pub fn is_teenager(&self) -> bool {
        self.age()
            .map_or(false, |age| (TEENAGE..ADULT_AGE).contains(&age))
    }

    pub fn is_adult(&self) -> bool {
        self.age().map_or(false, |age| age >= ADULT_AGE)
    }

    pub fn is_female(&self) -> bool {
        self.gender.map_or(false, |gender| gender.is_female())
    }

    pub fn is_male(&self) -> bool {
        self.gender.map_or(false, |gender| gender.is_male())
    }

    pub fn is_non_binary(&self) -> bool {
        self.gender.map_or(false, |gender| gender.is_non_binary())
    }

    /// Sets or clears the birth date
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidArgument`] when the birth date lies
    /// after now or after a known date of death. The person is left
    /// unchanged on error.
    pub fn set_birth_date(&mut self, birth_date: Option<DateTime<Utc>>) -> IdentityResult<()> {
        if let Some(birth_date) = birth_date {
            let now = self.now();

            if birth_date > now {
                debug!(person = %self.name, %birth_date, "rejected future birth date");
                return Err(IdentityError::invalid_argument(format!(
                    "Birth date [{}] must be on or before today [{}]",
                    birth_date.format(DATE_PATTERN),
                    now.format(DATE_PATTERN)
                )));
            }

            if let Some(date_of_death) = self.date_of_death.filter(|death| birth_date > *death) {
                debug!(person = %self.name, %birth_date, "rejected birth date after death");
                return Err(IdentityError::invalid_argument(format!(
                    "Birth date [{}] cannot be after the person's date of death [{}]",
                    birth_date.format(DATE_PATTERN),
                    date_of_death.format(DATE_PATTERN)
                )));
            }
        }

        self.birth_date = birth_date;
        Ok(())
    }

    /// Sets or clears the date of death
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidArgument`] when the date of death lies
    /// before a known birth date or after now. The person is left unchanged
    /// on error.
    pub fn set_date_of_death(&mut self, date_of_death: Option<DateTime<Utc>>) -> IdentityResult<()> {
        if let Some(date_of_death) = date_of_death {
            if let Some(birth_date) = self.birth_date.filter(|birth| date_of_death < *birth) {
                debug!(person = %self.name, %date_of_death, "rejected death before birth");
                return Err(IdentityError::invalid_argument(format!(
                    "Date of death [{}] cannot be before the person's date of birth [{}]",
                    date_of_death.format(DATE_PATTERN),
                    birth_date.format(DATE_PATTERN)
                )));
            }

            if date_of_death > self.now() {
                debug!(person = %self.name, %date_of_death, "rejected future death");
                return Err(IdentityError::invalid_argument(format!(
                    "A person's date of death [{}] cannot be known in the future",
                    date_of_death.format(DATE_PATTERN)
                )));
            }
        }

        self.date_of_death = date_of_death;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn set_version(&mut self, version: Option<VersionId>) {
        self.version = version;
    }

    /// Sets the birth date so that the person is `age` years old now
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidArgument`] when `age` is negative.
    pub fn age_of(self, age: i32) -> IdentityResult<Self> {
        let years = u32::try_from(age).map_err(|_| {
            IdentityError::invalid_argument(format!("Age [{}] must be greater than equal to 0", age))
        })?;

        let birth_date = years_before(self.now(), years)?;
        self.born(birth_date)
    }

    pub fn as_gender(mut self, gender: Option<Gender>) -> Self {
        self.set_gender(gender);
        self
    }

    pub fn as_female(self) -> Self {
        self.as_gender(Some(Gender::Female))
    }

    pub fn as_male(self) -> Self {
        self.as_gender(Some(Gender::Male))
    }

    pub fn as_non_binary(self) -> Self {
        self.as_gender(Some(Gender::NonBinary))
    }

    /// Sets the birth date; see [`Person::set_birth_date`]
    pub fn born(mut self, birth_date: DateTime<Utc>) -> IdentityResult<Self> {
        self.set_birth_date(Some(birth_date))?;
        Ok(self)
    }

    /// Sets the date of death; see [`Person::set_date_of_death`]
    pub fn died(mut self, date_of_death: DateTime<Utc>) -> IdentityResult<Self> {
        self.set_date_of_death(Some(date_of_death))?;
        Ok(self)
    }

    pub fn identified_by(mut self, id: i64) -> Self {
        self.set_id(Some(id));
        self
    }

    pub fn at_version(mut self, version: VersionId) -> Self {
        self.set_version(Some(version));
        self
    }

    /// Forks a new, unsaved person under a different name
    ///
    /// The new person keeps this person's birth date and clock but has no
    /// id, version, gender or date of death. This person is not modified.
    pub fn change(&self, name: Name) -> Person {
        Person {
            birth_date: self.birth_date,
            ..Person::with_clock(name, self.clock.clone())
        }
    }

    /// Forks a new, unsaved person with a different last name
    pub fn change_last_name(&self, last_name: &str) -> IdentityResult<Person> {
        Ok(self.change(self.name.change(last_name)?))
    }
}

impl Nameable for Person {
    fn name(&self) -> &Name {
        &self.name
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.birth_date == other.birth_date && self.name == other.name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.birth_date.hash(state);
        self.name.hash(state);
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.birth_date.cmp(&other.birth_date))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format_instant = |instant: Option<DateTime<Utc>>| {
            instant
                .map(|instant| instant.format(DATE_TIME_PATTERN).to_string())
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        write!(
            f,
            "{{ first_name = {}, middle_name = {}, last_name = {}, birth_date = {}, date_of_death = {}, gender = {} }}",
            self.first_name(),
            self.middle_name().unwrap_or(UNKNOWN),
            self.last_name(),
            format_instant(self.birth_date),
            format_instant(self.date_of_death),
            self.gender
                .map(|gender| gender.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        )
    }
}
