//! Personal name value type

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IdentityError, IdentityResult};
use crate::name_parser;

/// Anything that carries a [`Name`].
pub trait Nameable {
    fn name(&self) -> &Name;
}

/// An immutable first, optional middle, and last name.
///
/// Equality covers all three components, case-sensitively. Ordering is by
/// last name, then first name; the middle name only breaks ties that would
/// otherwise make two unequal names compare as equal.
///
/// # Examples
///
/// ```rust
/// use domain_people::Name;
///
/// let name = Name::parse("Mr. Jon Jason Bloom").unwrap();
/// assert_eq!(name, Name::with_middle("Jon", "Jason", "Bloom").unwrap());
/// assert_eq!(name.to_string(), "Jon Jason Bloom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NameRecord")]
pub struct Name {
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
}

/// Unvalidated wire shape of a [`Name`]
#[derive(Deserialize)]
struct NameRecord {
    first_name: String,
    #[serde(default)]
    middle_name: Option<String>,
    last_name: String,
}

impl TryFrom<NameRecord> for Name {
    type Error = IdentityError;

    fn try_from(record: NameRecord) -> Result<Self, Self::Error> {
        Name::new(&record.first_name, record.middle_name.as_deref(), &record.last_name)
    }
}

impl Name {
    /// Creates a name, validating its components
    ///
    /// A blank middle name is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidArgument`] when the first or last
    /// name is blank.
    pub fn new(first_name: &str, middle_name: Option<&str>, last_name: &str) -> IdentityResult<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if first_name.is_empty() {
            return Err(IdentityError::invalid_argument("First name is required"));
        }

        if last_name.is_empty() {
            return Err(IdentityError::invalid_argument("Last name is required"));
        }

        let middle_name = middle_name
            .map(str::trim)
            .filter(|middle| !middle.is_empty())
            .map(str::to_string);

        Ok(Self {
            first_name: first_name.to_string(),
            middle_name,
            last_name: last_name.to_string(),
        })
    }

    /// Creates a name with no middle name
    pub fn of(first_name: &str, last_name: &str) -> IdentityResult<Self> {
        Self::new(first_name, None, last_name)
    }

    /// Creates a name with a middle name or initial
    pub fn with_middle(first_name: &str, middle_name: &str, last_name: &str) -> IdentityResult<Self> {
        Self::new(first_name, Some(middle_name), last_name)
    }

    /// Copies the name carried by `source`
    pub fn from_nameable(source: &impl Nameable) -> Self {
        source.name().clone()
    }

    /// Parses free text such as `"Dr. Jon J Bloom Jr."`
    ///
    /// See [`crate::name_parser`] for the accepted format.
    pub fn parse(text: &str) -> IdentityResult<Self> {
        name_parser::parse(text)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the middle name or initial, if any
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns a new name with the last name replaced
    pub fn change(&self, last_name: &str) -> IdentityResult<Self> {
        Self::new(&self.first_name, self.middle_name(), last_name)
    }

    /// Returns true when the first names or the last names match
    pub fn like(&self, other: &Name) -> bool {
        self.first_name == other.first_name || self.last_name == other.last_name
    }

    /// Renders the name as `Last, First [Middle]`
    pub fn display_last_first(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{}, {} {}", self.last_name, self.first_name, middle),
            None => format!("{}, {}", self.last_name, self.first_name),
        }
    }
}

impl Nameable for Name {
    fn name(&self) -> &Name {
        self
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.middle_name.cmp(&other.middle_name))
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.middle_name {
            Some(middle) => write!(f, "{} {} {}", self.first_name, middle, self.last_name),
            None => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

impl std::str::FromStr for Name {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::parse(s)
    }
}
