use thiserror::Error;

/// Reasons a portfolio transition is refused. A refused transition leaves the
/// portfolio untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("outcome index {index} out of range for {len} outcomes")]
    IndexOutOfRange { index: usize, len: usize },

    /// The auto outcome's profit is derived, never written.
    #[error("outcome {index} is auto-balanced; its profit cannot be set")]
    AutoOutcomeProfit { index: usize },

    #[error("a portfolio keeps at least {min} outcomes")]
    BelowMinimumOutcomes { min: usize },
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;
