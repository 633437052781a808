//! Core Kernel - Foundational types for the identity domain
//!
//! This crate provides the building blocks shared by the domain modules:
//! - The clock boundary through which "now" is read
//! - Whole-year calendar arithmetic used for age derivation
//! - Strongly typed identifiers for groups and entity versions

pub mod clock;
pub mod temporal;
pub mod identifiers;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock, system_clock};
pub use temporal::{TemporalError, whole_years_between, whole_years_between_instants, years_before};
pub use identifiers::{GroupId, VersionId};
