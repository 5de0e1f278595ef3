//! Rating Command-Line Interface
//!
//! Thin collaborator around the rating engine: it turns command-line input
//! into a validated [`DriverProfile`](domain_rating::DriverProfile), asks
//! the engine for a quote, and renders the result.
//!
//! # Modules
//!
//! - **commands**: Quote and rate-table handlers
//! - **config**: `RATING_*` environment configuration
//! - **report**: Text and JSON rendering of quotes and the rate table
//! - **telemetry**: Tracing subscriber setup
//! - **error**: CLI error type
//!
//! # Example
//!
//! ```bash
//! premium-rater quote --age 18 --make Ferrari --model 488 --accidents 1
//! premium-rater rates --format json
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;

pub use config::{OutputFormat, RatingConfig};
pub use error::CliError;
