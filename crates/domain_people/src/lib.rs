//! People Domain
//!
//! This crate models personal identity: names recovered from free text,
//! people whose age and life stage derive from their birth date, and groups
//! of people supporting set algebra.
//!
//! # Components
//!
//! - **NameParser**: free text such as `"Dr. Jon J Bloom Jr."` to a [`Name`]
//! - **Name**: immutable first, optional middle, and last name
//! - **Person**: a name plus birth and death dates validated against a clock
//! - **Group**: set algebra derived from iteration and removal
//! - **People**: the concrete group of persons
//!
//! # Examples
//!
//! ```rust
//! use domain_people::{Group, People, Person};
//!
//! let mut family = People::of([
//!     Person::parse("Mr. Jon R Doe")?,
//!     Person::parse("Mrs. Jane R Doe")?,
//! ]);
//!
//! assert!(!family.join(Person::parse("Jon R Doe Jr.")?));
//! assert_eq!(family.size(), 2);
//! assert_eq!(family.name(), "GROUP of [Doe]");
//! assert_eq!(family.to_string(), "[Doe, Jane R; Doe, Jon R]");
//! # Ok::<(), domain_people::IdentityError>(())
//! ```

pub mod config;
pub mod error;
pub mod gender;
pub mod group;
pub mod name;
pub mod name_parser;
pub mod people;
pub mod person;

pub use config::NameParserConfig;
pub use error::{IdentityError, IdentityResult};
pub use gender::Gender;
pub use group::Group;
pub use name::{Name, Nameable};
pub use name_parser::NameParser;
pub use people::People;
pub use person::{Person, ADULT_AGE, TEENAGE};
