//! Rating domain errors
//!
//! Configuration errors mean the knowledge base does not match what the
//! pricing rules need. They are fatal: a calculation that hits one is aborted
//! and the error is handed back to the caller unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;
use crate::knowledge_base::RateKey;

/// Problems with the knowledge base itself
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A rule looked up a key the knowledge base does not define
    #[error("missing knowledge base entry '{0}'")]
    MissingKey(RateKey),

    /// A textual key does not name any known table/tier
    #[error("unrecognized knowledge base key '{0}'")]
    UnknownKey(String),

    /// Rates, factors and surcharges are all non-negative
    #[error("knowledge base entry '{key}' must be non-negative, got {value}")]
    NegativeValue { key: RateKey, value: Decimal },

    /// The same key was supplied twice while building a table
    #[error("knowledge base entry '{0}' is defined more than once")]
    DuplicateKey(RateKey),
}

/// Errors that can occur while rating a driver
#[derive(Debug, Error)]
pub enum RatingError {
    /// Broken knowledge base; never caused by driver input
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Driver profile rejected at the input boundary
    #[error("Invalid driver profile: {0}")]
    InvalidProfile(String),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl RatingError {
    /// Creates an invalid profile error
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        RatingError::InvalidProfile(message.into())
    }

    /// Returns true for errors caused by a broken knowledge base
    pub fn is_configuration(&self) -> bool {
        matches!(self, RatingError::Configuration(_))
    }
}
