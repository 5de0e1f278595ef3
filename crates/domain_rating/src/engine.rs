//! Rating engine
//!
//! The [`RatingEngine`] owns the knowledge base and the ordered rule list.
//! Both are fixed when the engine is built; rating a profile only mutates the
//! premium created for that call, so one engine can serve many threads by
//! shared reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use core_kernel::QuoteId;
use crate::error::RatingError;
use crate::knowledge_base::KnowledgeBase;
use crate::premium::Premium;
use crate::profile::DriverProfile;
use crate::rules::PricingRule;
use crate::vehicle::{classify, VehicleCategory};

/// Whether a rule fired during one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub rule: PricingRule,
    pub applied: bool,
}

/// A rated premium together with its audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub rated_at: DateTime<Utc>,
    pub profile: DriverProfile,
    pub vehicle_category: VehicleCategory,
    pub premium: Premium,
    /// One entry per rule, in evaluation order
    pub evaluations: Vec<RuleEvaluation>,
}

impl Quote {
    /// Names of the rules that fired, in order
    pub fn applied_rules(&self) -> Vec<&'static str> {
        self.evaluations
            .iter()
            .filter(|e| e.applied)
            .map(|e| e.rule.name())
            .collect()
    }
}

/// Evaluates pricing rules in a fixed order against a knowledge base
#[derive(Debug, Clone)]
pub struct RatingEngine {
    knowledge_base: KnowledgeBase,
    rules: Vec<PricingRule>,
}

impl RatingEngine {
    /// Creates an engine over the shipped knowledge base
    pub fn new() -> Self {
        Self {
            knowledge_base: KnowledgeBase::standard(),
            rules: PricingRule::STANDARD_ORDER.to_vec(),
        }
    }

    /// Creates an engine over a custom knowledge base
    ///
    /// Every key any rule could read is checked up front, so a calculation
    /// on the returned engine never hits a missing entry.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing key.
    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Result<Self, RatingError> {
        let rules = PricingRule::STANDARD_ORDER.to_vec();

        for rule in &rules {
            for key in rule.required_keys() {
                if let Err(err) = knowledge_base.get(key) {
                    warn!(rule = rule.name(), %key, "knowledge base is missing a required entry");
                    return Err(err.into());
                }
            }
        }

        Ok(Self {
            knowledge_base,
            rules,
        })
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// Calculates the premium for a driver
    ///
    /// # Errors
    ///
    /// A missing knowledge-base entry aborts the calculation with
    /// [`RatingError::Configuration`]. Nothing is defaulted or retried.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let engine = RatingEngine::new();
    /// let premium = engine.calculate_premium(&DriverProfile::new(30, "Toyota", "Camry", 0))?;
    /// assert_eq!(premium.total().amount(), dec!(1000));
    /// ```
    pub fn calculate_premium(&self, profile: &DriverProfile) -> Result<Premium, RatingError> {
        self.evaluate(profile).map(|(premium, _)| premium)
    }

    /// Rates a driver and records which rules fired
    pub fn quote(&self, profile: &DriverProfile) -> Result<Quote, RatingError> {
        let (premium, evaluations) = self.evaluate(profile)?;

        Ok(Quote {
            id: QuoteId::new(),
            rated_at: Utc::now(),
            profile: profile.clone(),
            vehicle_category: classify(&profile.vehicle_make, &profile.vehicle_model),
            premium,
            evaluations,
        })
    }

    #[instrument(
        level = "debug",
        skip(self, profile),
        fields(age = profile.age, accidents = profile.accidents_in_last_five_years)
    )]
    fn evaluate(
        &self,
        profile: &DriverProfile,
    ) -> Result<(Premium, Vec<RuleEvaluation>), RatingError> {
        let mut premium = Premium::new(self.knowledge_base.currency());
        let mut evaluations = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let applied = rule.applies(profile);
            if applied {
                rule.apply(profile, &self.knowledge_base, &mut premium)?;
            }
            debug!(rule = rule.name(), applied, "evaluated pricing rule");
            evaluations.push(RuleEvaluation {
                rule: *rule,
                applied,
            });
        }

        debug!(total = %premium.total(), "premium calculated");
        Ok((premium, evaluations))
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}
