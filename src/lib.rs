//! Hedge calculator: spread a fixed budget over mutually exclusive YES bets so
//! that every outcome pays a chosen profit and one auto-balanced outcome soaks
//! up whatever is left.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod outcome;
pub mod portfolio;
pub mod rebalance;
pub mod telemetry;
pub mod view;

pub use config::Config;
pub use error::{ConfigError, PortfolioError};
pub use metrics::{derive_metrics, Metrics};
pub use outcome::{Outcome, OutcomeId};
pub use portfolio::{Portfolio, PortfolioAction};
pub use rebalance::{rebalance, rebalance_with_policy, DeficitPolicy};
pub use view::{PortfolioView, ProfitBounds};
