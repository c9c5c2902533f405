use crate::config::MIN_OUTCOMES;
use crate::metrics::{derive_metrics, Metrics};
use crate::outcome::Outcome;

/// Slider range for a profit control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitBounds {
    pub min: f64,
    pub max: f64,
}

impl ProfitBounds {
    /// Twice the current profit, never less than 10, so the slider can always
    /// move both ways.
    pub fn for_profit(profit: f64) -> Self {
        Self { min: 0.0, max: (profit * 2.0).max(10.0) }
    }
}

/// Everything the UI renders for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub budget: f64,
    pub auto_index: usize,
    /// Rebalanced rows.
    pub outcomes: Vec<Outcome>,
    pub metrics: Metrics,
    pub arbitrage_impossible: bool,
}

/// One rendered outcome card.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeRow<'a> {
    pub index: usize,
    pub outcome: &'a Outcome,
    pub stake: f64,
    pub cost: f64,
    pub is_auto: bool,
    pub bounds: ProfitBounds,
}

impl PortfolioView {
    pub fn new(budget: f64, auto_index: usize, outcomes: Vec<Outcome>) -> Self {
        let metrics = derive_metrics(&outcomes, budget);
        Self {
            budget,
            auto_index,
            arbitrage_impossible: metrics.arbitrage_impossible(),
            outcomes,
            metrics,
        }
    }

    pub fn stakes(&self) -> &[f64] {
        &self.metrics.stakes
    }

    pub fn total_cost(&self) -> f64 {
        self.metrics.total_cost
    }

    pub fn price_sum(&self) -> f64 {
        self.metrics.price_sum
    }

    pub fn can_remove(&self) -> bool {
        self.outcomes.len() > MIN_OUTCOMES
    }

    pub fn rows(&self) -> impl Iterator<Item = OutcomeRow<'_>> {
        self.outcomes.iter().enumerate().map(move |(index, outcome)| OutcomeRow {
            index,
            outcome,
            stake: self.metrics.stakes[index],
            cost: self.metrics.costs[index],
            is_auto: index == self.auto_index,
            bounds: ProfitBounds::for_profit(outcome.profit),
        })
    }
}
