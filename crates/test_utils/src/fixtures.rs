//! Pre-built Test Fixtures
//!
//! Provides the Doe family at known ages. Every fixture reads "now" from a
//! [`FixedClock`] pinned at [`TemporalFixtures::now`], so ages and life
//! stages never drift between test runs.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{years_before, FixedClock};
use domain_people::{Name, People, Person};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference "now" for every fixture (June 15, 2024, noon UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// A clock frozen at [`TemporalFixtures::now`]
    pub fn clock() -> Arc<FixedClock> {
        FixedClock::shared(Self::now())
    }

    /// Midnight UTC of the given date
    pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    /// The instant `age` years before [`TemporalFixtures::now`]
    pub fn birth_date_for_age(age: u32) -> DateTime<Utc> {
        years_before(Self::now(), age).unwrap()
    }
}

/// Fixture for people test data
pub struct PeopleFixtures;

impl PeopleFixtures {
    /// Creates a person on the given clock
    pub fn person(name: Name, clock: &Arc<FixedClock>) -> Person {
        Person::with_clock(name, clock.clone())
    }

    fn doe(first: &str, middle: Option<&str>, birth_date: DateTime<Utc>, clock: &Arc<FixedClock>) -> Person {
        let name = Name::new(first, middle, "Doe").unwrap();
        Self::person(name, clock).born(birth_date).unwrap()
    }

    /// Jon R Doe, born May 27, 1974 (male, 50)
    pub fn jon_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Jon", Some("R"), TemporalFixtures::date(1974, 5, 27), clock).as_male()
    }

    /// Jane R Doe, born January 22, 1975 (female, 49)
    pub fn jane_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Jane", Some("R"), TemporalFixtures::date(1975, 1, 22), clock).as_female()
    }

    /// Bob Doe (male, 32)
    pub fn bob_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Bob", None, TemporalFixtures::birth_date_for_age(32), clock).as_male()
    }

    /// Cookie Doe (female, 9)
    pub fn cookie_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Cookie", None, TemporalFixtures::birth_date_for_age(9), clock).as_female()
    }

    /// Dill Doe (male, 7)
    pub fn dill_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Dill", None, TemporalFixtures::birth_date_for_age(7), clock).as_male()
    }

    /// Fro Doe (male, 21)
    pub fn fro_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Fro", None, TemporalFixtures::birth_date_for_age(21), clock).as_male()
    }

    /// Hoe R Doe (female, 24)
    pub fn hoe_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Hoe", Some("R"), TemporalFixtures::birth_date_for_age(24), clock).as_female()
    }

    /// Joe R Doe (male, 28)
    pub fn joe_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Joe", Some("R"), TemporalFixtures::birth_date_for_age(28), clock).as_male()
    }

    /// Pie Doe (female, 16)
    pub fn pie_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Pie", None, TemporalFixtures::birth_date_for_age(16), clock).as_female()
    }

    /// Sour Doe (male, 13)
    pub fn sour_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Sour", None, TemporalFixtures::birth_date_for_age(13), clock).as_male()
    }

    /// Play Doe (male, 92)
    pub fn play_doe(clock: &Arc<FixedClock>) -> Person {
        Self::doe("Play", None, TemporalFixtures::birth_date_for_age(92), clock).as_male()
    }

    /// Every Doe above, in no particular order
    pub fn doe_family(clock: &Arc<FixedClock>) -> Vec<Person> {
        vec![
            Self::pie_doe(clock),
            Self::jon_doe(clock),
            Self::cookie_doe(clock),
            Self::play_doe(clock),
            Self::jane_doe(clock),
            Self::sour_doe(clock),
            Self::bob_doe(clock),
            Self::dill_doe(clock),
            Self::fro_doe(clock),
            Self::hoe_doe(clock),
            Self::joe_doe(clock),
        ]
    }

    /// The whole Doe family as a group
    pub fn doe_people(clock: &Arc<FixedClock>) -> People {
        People::of(Self::doe_family(clock))
    }
}
