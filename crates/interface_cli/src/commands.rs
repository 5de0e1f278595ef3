//! Command handlers
//!
//! Each handler takes already-parsed input and returns the rendered output,
//! leaving argument parsing and printing to the binary.

use domain_rating::{DriverProfile, KnowledgeBase, RatingEngine};
use tracing::{debug, info};

use crate::config::{OutputFormat, RatingConfig};
use crate::error::CliError;
use crate::report;

/// Builds and verifies the engine for the configured currency
pub fn build_engine(config: &RatingConfig) -> Result<RatingEngine, CliError> {
    let knowledge_base = KnowledgeBase::standard_in(config.currency);
    Ok(RatingEngine::with_knowledge_base(knowledge_base)?)
}

/// Validates the profile, rates it, and renders the quote
pub fn quote(
    engine: &RatingEngine,
    profile: &DriverProfile,
    format: OutputFormat,
) -> Result<String, CliError> {
    profile.ensure_valid()?;

    let quote = engine.quote(profile)?;
    info!(
        quote_id = %quote.id,
        category = %quote.vehicle_category,
        total = %quote.premium.total(),
        "Quote rated"
    );

    Ok(match format {
        OutputFormat::Text => report::render_text(&quote),
        OutputFormat::Json => report::render_json(&quote)? + "\n",
    })
}

/// Renders the engine's rate table
pub fn rates(engine: &RatingEngine, format: OutputFormat) -> Result<String, CliError> {
    let knowledge_base = engine.knowledge_base();
    debug!(entries = knowledge_base.len(), "Listing rate table");

    Ok(match format {
        OutputFormat::Text => report::render_rates_text(knowledge_base),
        OutputFormat::Json => report::render_rates_json(knowledge_base)? + "\n",
    })
}
