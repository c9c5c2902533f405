//! Settings compiled into the front-end from `hedgerunner.toml`.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::outcome::OutcomeSpec;
use crate::rebalance::DeficitPolicy;

const EMBEDDED: &str = include_str!("../hedgerunner.toml");

/// Minimum number of outcomes a portfolio ever holds.
pub const MIN_OUTCOMES: usize = 2;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub portfolio: SeedConfig,
    pub new_outcome: NewOutcomeConfig,
    pub rebalance: RebalanceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"hedgerunner=debug"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

/// The portfolio the page opens with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub budget: f64,
    pub auto_index: usize,
    pub outcomes: Vec<OutcomeSpec>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let row = |name: &str, price, profit| OutcomeSpec { name: name.into(), price, profit };
        Self {
            budget: 100.0,
            auto_index: 0,
            outcomes: vec![
                row("Driver A", 0.4, 20.0),
                row("Driver B", 0.37, 3.0),
                row("Driver C", 0.13, 0.0),
            ],
        }
    }
}

/// Template for rows appended by "add outcome".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewOutcomeConfig {
    pub name: String,
    pub price: f64,
}

impl Default for NewOutcomeConfig {
    fn default() -> Self {
        Self { name: "New Driver".into(), price: 0.2 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RebalanceConfig {
    pub deficit_policy: DeficitPolicy,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the settings compiled in from `hedgerunner.toml`.
    pub fn load_embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let seed = &self.portfolio;
        if !seed.budget.is_finite() || seed.budget < 0.0 {
            return Err(invalid("portfolio.budget", format!("must be a non-negative number, got {}", seed.budget)));
        }
        if seed.outcomes.len() < MIN_OUTCOMES {
            return Err(invalid(
                "portfolio.outcomes",
                format!("need at least {MIN_OUTCOMES} outcomes, got {}", seed.outcomes.len()),
            ));
        }
        if seed.auto_index >= seed.outcomes.len() {
            return Err(invalid(
                "portfolio.auto_index",
                format!("{} is out of range for {} outcomes", seed.auto_index, seed.outcomes.len()),
            ));
        }
        for o in &seed.outcomes {
            if !(0.0..=1.0).contains(&o.price) {
                return Err(invalid("portfolio.outcomes.price", format!("{} for '{}' is outside [0, 1]", o.price, o.name)));
            }
            if !o.profit.is_finite() || o.profit < 0.0 {
                return Err(invalid("portfolio.outcomes.profit", format!("{} for '{}' is negative", o.profit, o.name)));
            }
        }
        if !(0.0..=1.0).contains(&self.new_outcome.price) {
            return Err(invalid("new_outcome.price", format!("{} is outside [0, 1]", self.new_outcome.price)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}
