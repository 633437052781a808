//! Gender enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

impl Gender {
    pub fn is_female(&self) -> bool {
        matches!(self, Gender::Female)
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Gender::Male)
    }

    pub fn is_non_binary(&self) -> bool {
        matches!(self, Gender::NonBinary)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-Binary",
        };
        f.write_str(label)
    }
}
