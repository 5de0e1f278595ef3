//! CLI error handling

use thiserror::Error;

use domain_rating::RatingError;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// Bad input exits with 2; a broken rate table or anything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Rating(RatingError::InvalidProfile(_)) => 2,
            _ => 1,
        }
    }
}
