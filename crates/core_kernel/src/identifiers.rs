//! Strongly-typed identifiers
//!
//! Group ids and entity versions are both UUIDs underneath. Wrapping each in
//! its own newtype keeps one from being passed where the other is expected.
//! Rendered forms carry a short prefix (`GRP-...`, `VER-...`); parsing
//! accepts the value with or without it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $generate:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh identifier
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($generate)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Uuid::parse_str(raw).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies a group; time-ordered so later groups sort after earlier ones
    GroupId,
    "GRP",
    Uuid::now_v7()
);

define_id!(
    /// Identifies one saved version of an entity
    VersionId,
    "VER",
    Uuid::new_v4()
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_prefix() {
        let id = GroupId::new();
        assert_eq!(id.to_string(), format!("GRP-{}", id.as_uuid()));
    }

    #[test]
    fn test_parse_rendered_form() {
        let original = VersionId::new();
        let parsed: VersionId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_prefix_of_other_id_is_rejected() {
        let version = VersionId::new();
        assert!(version.to_string().parse::<GroupId>().is_err());
    }
}
