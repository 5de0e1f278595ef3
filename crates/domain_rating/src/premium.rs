//! Premium accumulator
//!
//! A [`Premium`] is created fresh for each calculation, filled in by the
//! pricing rules in order, and handed back to the caller.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError};

/// A labeled, explained change to the base rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Short name shown on the itemized premium
    pub label: String,
    /// Signed amount added to the premium
    pub amount: Money,
    /// Human-readable reason for the adjustment
    pub explanation: String,
}

/// Priced result of one calculation
///
/// The adjustment sum and the total are maintained as amounts are recorded,
/// so an amount that would overflow is rejected when it is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    base_rate: Money,
    adjustments: Vec<Adjustment>,
    total_adjustments: Money,
    total: Money,
}

impl Premium {
    /// Creates an empty premium with a zero base rate
    pub fn new(currency: Currency) -> Self {
        Self {
            base_rate: Money::zero(currency),
            adjustments: Vec::new(),
            total_adjustments: Money::zero(currency),
            total: Money::zero(currency),
        }
    }

    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    pub fn currency(&self) -> Currency {
        self.base_rate.currency()
    }

    /// Adjustments in the order the rules appended them
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Finds the first adjustment with the given label
    pub fn adjustment(&self, label: &str) -> Option<&Adjustment> {
        self.adjustments.iter().find(|a| a.label == label)
    }

    /// Sets the base rate, replacing any previous value
    ///
    /// # Errors
    ///
    /// Rejects a rate in another currency, a negative rate, or one whose
    /// total with the recorded adjustments overflows.
    pub fn set_base_rate(&mut self, rate: Money) -> Result<(), MoneyError> {
        self.base_rate.ensure_same_currency(&rate)?;
        if rate.is_negative() {
            return Err(MoneyError::InvalidAmount(format!(
                "base rate cannot be negative: {}",
                rate
            )));
        }
        self.total = rate.checked_add(&self.total_adjustments)?;
        self.base_rate = rate;
        Ok(())
    }

    /// Appends an adjustment
    ///
    /// # Errors
    ///
    /// Rejects an amount in another currency or one that overflows the total.
    /// The premium is left unchanged on error.
    pub fn add_adjustment(
        &mut self,
        label: impl Into<String>,
        amount: Money,
        explanation: impl Into<String>,
    ) -> Result<(), MoneyError> {
        let total_adjustments = self.total_adjustments.checked_add(&amount)?;
        let total = self.base_rate.checked_add(&total_adjustments)?;

        self.adjustments.push(Adjustment {
            label: label.into(),
            amount,
            explanation: explanation.into(),
        });
        self.total_adjustments = total_adjustments;
        self.total = total;
        Ok(())
    }

    /// Sum of all adjustments
    pub fn total_adjustments(&self) -> Money {
        self.total_adjustments
    }

    /// Base rate plus every adjustment
    pub fn total(&self) -> Money {
        self.total
    }
}
