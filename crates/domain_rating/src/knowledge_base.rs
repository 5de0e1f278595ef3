//! Rating knowledge base
//!
//! The knowledge base is the static table every pricing rule reads from:
//! base rates per vehicle category, multiplicative age factors, and flat
//! accident surcharges. It is built once and never mutated afterward, so a
//! single instance can be shared by any number of calculations.
//!
//! Keys are structured as a (table, tier) pair. The dotted text form
//! (`baseRate.sedan`, `ageFactor.20-24`, `accidentSurcharge.2+`) only exists
//! for display and for loading textual tables.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use core_kernel::{Currency, Money};
use crate::error::ConfigurationError;
use crate::tiers::{AccidentTier, AgeBand};
use crate::vehicle::VehicleCategory;

/// The tables held by the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RateTable {
    /// Annual base rate in currency units, per vehicle category
    BaseRate,
    /// Multiplier applied to the base rate, per age band
    AgeFactor,
    /// Flat surcharge in currency units, per accident tier
    AccidentSurcharge,
}

impl RateTable {
    /// Prefix used in the dotted key form
    pub fn prefix(&self) -> &'static str {
        match self {
            RateTable::BaseRate => "baseRate",
            RateTable::AgeFactor => "ageFactor",
            RateTable::AccidentSurcharge => "accidentSurcharge",
        }
    }

    /// Returns true when values in this table are amounts of money
    pub fn is_monetary(&self) -> bool {
        !matches!(self, RateTable::AgeFactor)
    }
}

/// A knowledge-base key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RateKey {
    BaseRate(VehicleCategory),
    AgeFactor(AgeBand),
    AccidentSurcharge(AccidentTier),
}

impl RateKey {
    pub fn table(&self) -> RateTable {
        match self {
            RateKey::BaseRate(_) => RateTable::BaseRate,
            RateKey::AgeFactor(_) => RateTable::AgeFactor,
            RateKey::AccidentSurcharge(_) => RateTable::AccidentSurcharge,
        }
    }

    pub fn tier(&self) -> &'static str {
        match self {
            RateKey::BaseRate(category) => category.as_str(),
            RateKey::AgeFactor(band) => band.tier(),
            RateKey::AccidentSurcharge(tier) => tier.tier(),
        }
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table().prefix(), self.tier())
    }
}

impl FromStr for RateKey {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigurationError::UnknownKey(s.to_string());
        let (table, tier) = s.split_once('.').ok_or_else(unknown)?;

        let key = match table {
            "baseRate" => VehicleCategory::from_tier(tier).map(RateKey::BaseRate),
            "ageFactor" => AgeBand::from_tier(tier).map(RateKey::AgeFactor),
            "accidentSurcharge" => AccidentTier::from_tier(tier).map(RateKey::AccidentSurcharge),
            _ => None,
        };

        key.ok_or_else(unknown)
    }
}

/// Immutable table of rates, factors and surcharges
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    /// Currency monetary entries are denominated in
    currency: Currency,
    entries: BTreeMap<RateKey, Decimal>,
}

impl KnowledgeBase {
    /// The shipped table, in US dollars
    pub fn standard() -> Self {
        Self::standard_in(Currency::USD)
    }

    /// The shipped table, denominated in `currency`
    pub fn standard_in(currency: Currency) -> Self {
        Self {
            currency,
            entries: standard_rows().into_iter().collect(),
        }
    }

    /// Builds a knowledge base from typed entries
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for any value below zero and `DuplicateKey`
    /// when a key appears more than once.
    pub fn from_entries(
        currency: Currency,
        entries: impl IntoIterator<Item = (RateKey, Decimal)>,
    ) -> Result<Self, ConfigurationError> {
        let mut table = BTreeMap::new();

        for (key, value) in entries {
            if value < Decimal::ZERO {
                return Err(ConfigurationError::NegativeValue { key, value });
            }
            if table.insert(key, value).is_some() {
                return Err(ConfigurationError::DuplicateKey(key));
            }
        }

        Ok(Self {
            currency,
            entries: table,
        })
    }

    /// Builds a knowledge base from dotted textual keys
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let kb = KnowledgeBase::from_dotted(Currency::USD, [
    ///     ("baseRate.sedan", dec!(1000)),
    ///     ("ageFactor.25-65", dec!(1.0)),
    /// ])?;
    /// ```
    pub fn from_dotted<'a>(
        currency: Currency,
        entries: impl IntoIterator<Item = (&'a str, Decimal)>,
    ) -> Result<Self, ConfigurationError> {
        let typed = entries
            .into_iter()
            .map(|(key, value)| key.parse::<RateKey>().map(|key| (key, value)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_entries(currency, typed)
    }

    /// Looks up a raw value
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` when the key is absent. With a verified engine
    /// this cannot happen; it indicates a broken table, not bad input.
    pub fn get(&self, key: RateKey) -> Result<Decimal, ConfigurationError> {
        self.entries
            .get(&key)
            .copied()
            .ok_or(ConfigurationError::MissingKey(key))
    }

    /// Looks up a monetary value in the table currency
    pub fn amount(&self, key: RateKey) -> Result<Money, ConfigurationError> {
        self.get(key).map(|value| Money::new(value, self.currency))
    }

    pub fn contains(&self, key: RateKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (RateKey, Decimal)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, *value))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_rows() -> [(RateKey, Decimal); 11] {
    [
        (RateKey::BaseRate(VehicleCategory::Sedan), dec!(1000.0)),
        (RateKey::BaseRate(VehicleCategory::Suv), dec!(1200.0)),
        (RateKey::BaseRate(VehicleCategory::Luxury), dec!(1500.0)),
        (RateKey::BaseRate(VehicleCategory::Sports), dec!(1800.0)),
        (RateKey::AgeFactor(AgeBand::Teen), dec!(2.0)),
        (RateKey::AgeFactor(AgeBand::YoungAdult), dec!(1.5)),
        (RateKey::AgeFactor(AgeBand::Standard), dec!(1.0)),
        (RateKey::AgeFactor(AgeBand::Senior), dec!(1.3)),
        (RateKey::AccidentSurcharge(AccidentTier::None), dec!(0.0)),
        (RateKey::AccidentSurcharge(AccidentTier::One), dec!(300.0)),
        (RateKey::AccidentSurcharge(AccidentTier::TwoOrMore), dec!(600.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let kb = KnowledgeBase::standard();
        assert_eq!(kb.len(), 11);
        assert_eq!(kb.currency(), Currency::USD);
        assert_eq!(kb.get(RateKey::BaseRate(VehicleCategory::Sports)).unwrap(), dec!(1800));
        assert_eq!(kb.get(RateKey::AgeFactor(AgeBand::Senior)).unwrap(), dec!(1.3));
    }

    #[test]
    fn test_standard_rows_pass_validation() {
        let validated = KnowledgeBase::from_entries(Currency::USD, standard_rows()).unwrap();
        assert_eq!(validated, KnowledgeBase::standard());
    }

    #[test]
    fn test_dotted_form() {
        assert_eq!(RateKey::BaseRate(VehicleCategory::Sedan).to_string(), "baseRate.sedan");
        assert_eq!(RateKey::AgeFactor(AgeBand::YoungAdult).to_string(), "ageFactor.20-24");
        assert_eq!(
            RateKey::AccidentSurcharge(AccidentTier::TwoOrMore).to_string(),
            "accidentSurcharge.2+"
        );
    }

    #[test]
    fn test_every_standard_key_parses_back() {
        for (key, _) in KnowledgeBase::standard().entries() {
            assert_eq!(key.to_string().parse::<RateKey>().unwrap(), key);
        }
    }
}
