use std::fmt;

use serde::Deserialize;

/// Stable row key for an outcome. Ids are handed out by the portfolio and
/// never reused, so a removed row's id cannot resurface on a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutcomeId(pub u32);

impl fmt::Display for OutcomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One mutually exclusive binary bet: the YES price and the guaranteed
/// profit if this outcome wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub id: OutcomeId,
    pub name: String,
    pub price: f64,
    pub profit: f64,
}

impl Outcome {
    pub fn new(id: OutcomeId, name: impl Into<String>, price: f64, profit: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price: clamp_price(price),
            profit: clamp_profit(profit),
        }
    }

    /// Money risked on the YES side: the budget plus the profit target.
    pub fn stake(&self, budget: f64) -> f64 {
        budget + self.profit
    }

    pub fn cost(&self, budget: f64) -> f64 {
        self.price * self.stake(budget)
    }
}

/// Seed or template row as written in the settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutcomeSpec {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub profit: f64,
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Prices live in [0, 1]; anything unparsable collapses to 0.
pub fn clamp_price(v: f64) -> f64 {
    finite_or_zero(v).clamp(0.0, 1.0)
}

pub fn clamp_profit(v: f64) -> f64 {
    finite_or_zero(v).max(0.0)
}

pub fn clamp_budget(v: f64) -> f64 {
    finite_or_zero(v).max(0.0)
}
