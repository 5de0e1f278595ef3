//! Report rendering
//!
//! Presentation only: nothing here changes a premium. Amounts are rounded
//! to the currency's minor unit for display.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use core_kernel::Money;
use domain_rating::{KnowledgeBase, Quote};

const RULE: &str = "--------------------------------------------------------------------------";

fn money_column(money: Money) -> String {
    money.round_to_currency().to_string()
}

// fixed scale so JSON amounts always show the currency's minor digits
fn presented(money: Money) -> Decimal {
    let mut amount = money.round_to_currency().amount();
    amount.rescale(money.currency().decimal_places());
    amount
}

fn accidents_phrase(accidents: u32) -> String {
    match accidents {
        1 => "1 accident in the last 5 years".to_string(),
        n => format!("{} accidents in the last 5 years", n),
    }
}

/// Renders an itemized, human-readable quote
pub fn render_text(quote: &Quote) -> String {
    let profile = &quote.profile;
    let premium = &quote.premium;

    let mut lines = vec![
        format!("Premium quote {}", quote.id),
        format!("Rated at {}", quote.rated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        format!(
            "Driver: age {}, {} {} ({}), {}",
            profile.age,
            profile.vehicle_make,
            profile.vehicle_model,
            quote.vehicle_category,
            accidents_phrase(profile.accidents_in_last_five_years)
        ),
        RULE.to_string(),
        format!("{:<20}{:>14}", "Base rate", money_column(premium.base_rate())),
    ];
    lines.extend(premium.adjustments().iter().map(|adjustment| {
        format!(
            "{:<20}{:>14}  {}",
            adjustment.label,
            money_column(adjustment.amount),
            adjustment.explanation
        )
    }));
    lines.push(RULE.to_string());
    lines.push(format!("{:<20}{:>14}", "Total premium", money_column(premium.total())));
    lines.push(format!("Rules applied: {}", quote.applied_rules().join(", ")));

    with_trailing_newline(lines)
}

fn with_trailing_newline(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct AdjustmentView<'a> {
    label: &'a str,
    amount: Decimal,
    explanation: &'a str,
}

/// Renders a quote as a JSON document
pub fn render_json(quote: &Quote) -> Result<String, serde_json::Error> {
    let premium = &quote.premium;
    let adjustments: Vec<AdjustmentView<'_>> = premium
        .adjustments()
        .iter()
        .map(|a| AdjustmentView {
            label: &a.label,
            amount: presented(a.amount),
            explanation: &a.explanation,
        })
        .collect();

    let document = json!({
        "quote_id": quote.id.to_string(),
        "rated_at": quote.rated_at,
        "driver": quote.profile,
        "vehicle_category": quote.vehicle_category,
        "currency": premium.currency().code(),
        "base_rate": presented(premium.base_rate()),
        "adjustments": adjustments,
        "total": presented(premium.total()),
        "rules": quote.evaluations,
    });

    serde_json::to_string_pretty(&document)
}

fn rate_value(knowledge_base: &KnowledgeBase, key: domain_rating::RateKey, value: Decimal) -> String {
    if key.table().is_monetary() {
        Money::new(value, knowledge_base.currency()).round_to_currency().to_string()
    } else {
        format!("x{}", value)
    }
}

/// Renders the knowledge base as `key = value` lines
pub fn render_rates_text(knowledge_base: &KnowledgeBase) -> String {
    let lines = knowledge_base
        .entries()
        .map(|(key, value)| {
            format!(
                "{:<24} = {}",
                key.to_string(),
                rate_value(knowledge_base, key, value)
            )
        })
        .collect();
    with_trailing_newline(lines)
}

/// Renders the knowledge base as a JSON object keyed by dotted key
pub fn render_rates_json(knowledge_base: &KnowledgeBase) -> Result<String, serde_json::Error> {
    let rates: serde_json::Map<String, serde_json::Value> = knowledge_base
        .entries()
        .map(|(key, value)| {
            let value = if key.table().is_monetary() {
                presented(Money::new(value, knowledge_base.currency()))
            } else {
                value
            };
            Ok((key.to_string(), serde_json::to_value(value)?))
        })
        .collect::<Result<_, serde_json::Error>>()?;

    serde_json::to_string_pretty(&json!({
        "currency": knowledge_base.currency().code(),
        "rates": rates,
    }))
}
