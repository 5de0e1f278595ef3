//! Vehicle classification
//!
//! Maps a vehicle make and model to the category that selects its base rate.
//! Matching ignores case character by character, folding Unicode as well as
//! ASCII, and is total: anything not recognized is a sedan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle category used for the base-rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sports,
    Luxury,
    Suv,
    Sedan,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Sedan,
        VehicleCategory::Suv,
        VehicleCategory::Luxury,
        VehicleCategory::Sports,
    ];

    /// Knowledge-base tier name
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Sports => "sports",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Sedan => "sedan",
        }
    }

    pub(crate) fn from_tier(tier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tier)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table
struct CategoryMatcher {
    category: VehicleCategory,
    makes: &'static [&'static str],
    models: &'static [&'static str],
    make_models: &'static [(&'static str, &'static str)],
}

impl CategoryMatcher {
    fn matches(&self, make: &str, model: &str) -> bool {
        self.makes.iter().any(|m| eq_ignore_case(make, m))
            || self.models.iter().any(|m| eq_ignore_case(model, m))
            || self.make_models.iter().any(|(mk, md)| {
                eq_ignore_case(make, mk) && eq_ignore_case(model, md)
            })
    }
}

// Two characters match when they are equal, share an uppercase form, or
// share the lowercase of their uppercase form.
fn eq_ignore_case(candidate: &str, listed: &str) -> bool {
    fn fold(c: char) -> impl Iterator<Item = char> {
        c.to_uppercase().flat_map(char::to_lowercase)
    }

    candidate.chars().count() == listed.chars().count()
        && candidate.chars().zip(listed.chars()).all(|(a, b)| {
            a == b || a.to_uppercase().eq(b.to_uppercase()) || fold(a).eq(fold(b))
        })
}

// Checked top to bottom; the first matching row wins.
const CLASSIFICATION_TABLE: &[CategoryMatcher] = &[
    CategoryMatcher {
        category: VehicleCategory::Sports,
        makes: &["ferrari", "porsche", "corvette"],
        models: &[],
        make_models: &[("ford", "mustang")],
    },
    CategoryMatcher {
        category: VehicleCategory::Luxury,
        makes: &["bmw", "mercedes", "lexus", "audi"],
        models: &[],
        make_models: &[],
    },
    CategoryMatcher {
        category: VehicleCategory::Suv,
        makes: &[],
        models: &["suv", "explorer", "tahoe", "highlander"],
        make_models: &[],
    },
];

/// Classifies a vehicle by make and model
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(classify("Ford", "Mustang"), VehicleCategory::Sports);
/// assert_eq!(classify("Ford", "Explorer"), VehicleCategory::Suv);
/// assert_eq!(classify("BMW", "X5"), VehicleCategory::Luxury);
/// ```
pub fn classify(make: &str, model: &str) -> VehicleCategory {
    CLASSIFICATION_TABLE
        .iter()
        .find(|row| row.matches(make, model))
        .map(|row| row.category)
        .unwrap_or(VehicleCategory::Sedan)
}
