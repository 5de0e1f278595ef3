//! Core Kernel - Foundational value types for the rating system
//!
//! This crate provides the building blocks shared by the rating domain and
//! its collaborators:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed quote identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::QuoteId;
