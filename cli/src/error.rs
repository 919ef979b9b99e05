use cekkirim_core_rs::{CarbonError, CreditError, PricingError, ReferenceError};
use thiserror::Error;

/// Everything that can stop a CLI command
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid score history in {path}: {source}")]
    History {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No subject given and {0} does not exist yet; pass --subject")]
    MissingSubject(String),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Carbon(#[from] CarbonError),

    #[error(transparent)]
    Credit(#[from] CreditError),

    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("Unknown tier '{tier}' for platform '{platform}'")]
    UnknownTier { platform: String, tier: String },

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
