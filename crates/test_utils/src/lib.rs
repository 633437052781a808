//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! people domain test suite.
//!
//! # Modules
//!
//! - `fixtures`: The Doe family pinned to a fixed clock
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `tracing`: One-time subscriber installation for test logs

pub mod fixtures;
pub mod assertions;
pub mod generators;
pub mod tracing;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
pub use self::tracing::init_tracing;
