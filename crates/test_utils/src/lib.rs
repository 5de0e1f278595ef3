//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built driver profiles and a shared engine
//! - `builders`: Builder for driver profiles with sensible defaults
//! - `assertions`: Custom assertion helpers for premiums
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
