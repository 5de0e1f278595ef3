//! Driver profile
//!
//! The input fact sheet for one premium calculation. The engine only reads
//! it; ages and accident counts are unsigned, so negative values cannot be
//! expressed at all.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::RatingError;

/// Facts about a driver and their vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DriverProfile {
    /// Age in whole years
    pub age: u32,
    #[validate(length(min = 1, message = "vehicle make must not be empty"))]
    pub vehicle_make: String,
    #[validate(length(min = 1, message = "vehicle model must not be empty"))]
    pub vehicle_model: String,
    /// At-fault accidents in the last five years
    pub accidents_in_last_five_years: u32,
}

impl DriverProfile {
    pub fn new(
        age: u32,
        vehicle_make: impl Into<String>,
        vehicle_model: impl Into<String>,
        accidents_in_last_five_years: u32,
    ) -> Self {
        Self {
            age,
            vehicle_make: vehicle_make.into(),
            vehicle_model: vehicle_model.into(),
            accidents_in_last_five_years,
        }
    }

    /// Boundary check for caller-supplied profiles
    ///
    /// The rating engine itself does not call this; collaborators that accept
    /// profiles from outside (the CLI, tests) validate before rating.
    pub fn ensure_valid(&self) -> Result<(), RatingError> {
        self.validate()
            .map_err(|errors| RatingError::invalid_profile(errors.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = DriverProfile::new(30, "Toyota", "Camry", 0);
        assert!(profile.ensure_valid().is_ok());
    }

    #[test]
    fn test_empty_make_rejected() {
        let profile = DriverProfile::new(30, "", "Camry", 0);
        let err = profile.ensure_valid().unwrap_err();
        assert!(matches!(err, RatingError::InvalidProfile(_)));
        assert!(err.to_string().contains("vehicle make must not be empty"));
    }

    #[test]
    fn test_empty_model_rejected() {
        let profile = DriverProfile::new(30, "Toyota", "", 0);
        assert!(profile.ensure_valid().is_err());
    }
}
