//! Custom Test Assertions
//!
//! Assertion helpers for premiums that print the whole itemization when
//! they fail.

use core_kernel::Money;
use domain_rating::Premium;
use rust_decimal::Decimal;

fn describe(premium: &Premium) -> String {
    let mut lines = vec![format!("base rate {}", premium.base_rate())];
    for adjustment in premium.adjustments() {
        lines.push(format!("{}: {}", adjustment.label, adjustment.amount));
    }
    lines.push(format!("total {}", premium.total()));
    lines.join("; ")
}

/// Asserts that a Money value has exactly the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} but got {}",
        expected,
        actual
    );
}

/// Asserts the base rate, the ordered adjustment amounts and the total
///
/// # Panics
///
/// Panics with the full itemization if any part differs.
pub fn assert_premium(
    premium: &Premium,
    base_rate: Decimal,
    adjustments: &[(&str, Decimal)],
    total: Decimal,
) {
    let actual: Vec<(&str, Decimal)> = premium
        .adjustments()
        .iter()
        .map(|a| (a.label.as_str(), a.amount.amount()))
        .collect();

    assert_eq!(
        premium.base_rate().amount(),
        base_rate,
        "Base rate mismatch in [{}]",
        describe(premium)
    );
    assert_eq!(actual, adjustments, "Adjustment mismatch in [{}]", describe(premium));
    assert_eq!(
        premium.total().amount(),
        total,
        "Total mismatch in [{}]",
        describe(premium)
    );
}

/// Asserts that the total equals the base rate plus every adjustment
pub fn assert_total_consistent(premium: &Premium) {
    let summed: Decimal = premium.base_rate().amount()
        + premium
            .adjustments()
            .iter()
            .map(|a| a.amount.amount())
            .sum::<Decimal>();

    assert_eq!(
        premium.total().amount(),
        summed,
        "Total is not base + adjustments in [{}]",
        describe(premium)
    );
}

/// Asserts that no adjustment carries the given label
pub fn assert_no_adjustment(premium: &Premium, label: &str) {
    assert!(
        premium.adjustment(label).is_none(),
        "Unexpected '{}' adjustment in [{}]",
        label,
        describe(premium)
    );
}
