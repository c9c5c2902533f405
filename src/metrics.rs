use crate::outcome::Outcome;

/// Read-only figures derived from a (rebalanced) outcome list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metrics {
    /// `budget + profit` per outcome.
    pub stakes: Vec<f64>,
    /// `price * stake` per outcome.
    pub costs: Vec<f64>,
    pub total_cost: f64,
    pub price_sum: f64,
}

impl Metrics {
    /// With YES prices summing to 1 or more no allocation can guarantee profit.
    pub fn arbitrage_impossible(&self) -> bool {
        self.price_sum >= 1.0
    }
}

pub fn derive_metrics(outcomes: &[Outcome], budget: f64) -> Metrics {
    let stakes: Vec<f64> = outcomes.iter().map(|o| o.stake(budget)).collect();
    let costs: Vec<f64> = outcomes
        .iter()
        .zip(&stakes)
        .map(|(o, stake)| o.price * stake)
        .collect();
    Metrics {
        total_cost: costs.iter().sum(),
        price_sum: outcomes.iter().map(|o| o.price).sum(),
        stakes,
        costs,
    }
}
