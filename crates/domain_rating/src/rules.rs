//! Pricing rules
//!
//! Every rule is a [`PricingRule`] variant with the same two-step contract:
//! [`applies`](PricingRule::applies) decides from the profile alone whether
//! the rule fires, and [`apply`](PricingRule::apply) records its effect on the
//! premium. Rules never call each other; they only communicate through the
//! premium being built and the shared knowledge base.
//!
//! # Ordering
//!
//! [`PricingRule::STANDARD_ORDER`] must keep `BaseRate` first: the age factor
//! is computed from the base rate already on the premium.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RatingError;
use crate::knowledge_base::{KnowledgeBase, RateKey};
use crate::premium::Premium;
use crate::profile::DriverProfile;
use crate::tiers::{AccidentTier, AgeBand};
use crate::vehicle::{classify, VehicleCategory};

/// Adjustment label written by the age factor rule
pub const AGE_FACTOR_LABEL: &str = "Age factor";
/// Adjustment label written by the accident history rule
pub const ACCIDENT_HISTORY_LABEL: &str = "Accident history";

/// The closed set of pricing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// Sets the base rate for the vehicle category
    BaseRate,
    /// Scales the base rate by the driver's age band
    AgeFactor,
    /// Adds a flat surcharge for recent accidents
    AccidentHistory,
}

impl PricingRule {
    /// Evaluation order used by the standard engine
    pub const STANDARD_ORDER: [PricingRule; 3] = [
        PricingRule::BaseRate,
        PricingRule::AgeFactor,
        PricingRule::AccidentHistory,
    ];

    /// Name used in diagnostics and the quote audit trail
    pub fn name(&self) -> &'static str {
        match self {
            PricingRule::BaseRate => "base rate",
            PricingRule::AgeFactor => "age factor",
            PricingRule::AccidentHistory => "accident history",
        }
    }

    /// Whether the rule fires for this profile
    pub fn applies(&self, profile: &DriverProfile) -> bool {
        match self {
            PricingRule::BaseRate | PricingRule::AgeFactor => true,
            PricingRule::AccidentHistory => profile.accidents_in_last_five_years > 0,
        }
    }

    /// Records the rule's effect on the premium
    ///
    /// Callers are expected to check [`applies`](Self::applies) first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the knowledge base lacks a key this
    /// rule needs, or a money error if an amount overflows.
    pub fn apply(
        &self,
        profile: &DriverProfile,
        knowledge_base: &KnowledgeBase,
        premium: &mut Premium,
    ) -> Result<(), RatingError> {
        match self {
            PricingRule::BaseRate => {
                let category = classify(&profile.vehicle_make, &profile.vehicle_model);
                let rate = knowledge_base.amount(RateKey::BaseRate(category))?;
                premium.set_base_rate(rate)?;
            }
            PricingRule::AgeFactor => {
                let band = AgeBand::for_age(profile.age);
                let factor = knowledge_base.get(RateKey::AgeFactor(band))?;
                let adjustment = premium.base_rate().checked_multiply(factor - dec!(1.0))?;
                premium.add_adjustment(AGE_FACTOR_LABEL, adjustment, band.explanation())?;
            }
            PricingRule::AccidentHistory => {
                let tier = AccidentTier::for_count(profile.accidents_in_last_five_years);
                let Some(explanation) = tier.surcharge_explanation() else {
                    return Ok(());
                };
                let surcharge = knowledge_base.amount(RateKey::AccidentSurcharge(tier))?;
                premium.add_adjustment(ACCIDENT_HISTORY_LABEL, surcharge, explanation)?;
            }
        }
        Ok(())
    }

    /// Every knowledge-base key the rule can read, for any profile
    pub fn required_keys(&self) -> Vec<RateKey> {
        match self {
            PricingRule::BaseRate => VehicleCategory::ALL
                .into_iter()
                .map(RateKey::BaseRate)
                .collect(),
            PricingRule::AgeFactor => AgeBand::ALL.into_iter().map(RateKey::AgeFactor).collect(),
            // the zero tier is never read: the rule does not fire without accidents
            PricingRule::AccidentHistory => vec![
                RateKey::AccidentSurcharge(AccidentTier::One),
                RateKey::AccidentSurcharge(AccidentTier::TwoOrMore),
            ],
        }
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
