//! Driver Premium Rating Domain
//!
//! This crate prices a driver profile by running a fixed, ordered set of
//! pricing rules against a static knowledge base of rates and factors.
//!
//! # Architecture
//!
//! - **Knowledge base**: immutable table keyed by structured [`RateKey`]s
//! - **Vehicle classification**: pure make/model to [`VehicleCategory`] mapping
//! - **Pricing rules**: closed set of [`PricingRule`] variants sharing an
//!   `applies` / `apply` contract
//! - **Rating engine**: evaluates the rules in order into a [`Premium`]
//!
//! # Evaluation Order
//!
//! ```text
//! base rate -> age factor -> accident history
//! ```
//!
//! The age factor reads the base rate, so the order is part of correctness.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(18, "Ferrari", "488", 1);
//! let premium = engine.calculate_premium(&profile)?;
//! assert_eq!(premium.total().amount(), dec!(3900));
//! ```

pub mod error;
pub mod tiers;
pub mod vehicle;
pub mod knowledge_base;
pub mod profile;
pub mod premium;
pub mod rules;
pub mod engine;

pub use error::{ConfigurationError, RatingError};
pub use tiers::{AccidentTier, AgeBand};
pub use vehicle::{classify, VehicleCategory};
pub use knowledge_base::{KnowledgeBase, RateKey, RateTable};
pub use profile::DriverProfile;
pub use premium::{Adjustment, Premium};
pub use rules::PricingRule;
pub use engine::{Quote, RatingEngine, RuleEvaluation};
