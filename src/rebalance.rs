//! Auto-outcome rebalancing.
//!
//! Every outcome except the auto one carries a user-chosen profit target. The
//! auto outcome's profit is solved from the budget-exhaustion equation
//!
//! ```text
//! Σᵢ pᵢ · (B + πᵢ) = B
//! ```
//!
//! When the solve asks for a negative auto profit, the other targets already
//! overcommit the budget. The deficit is then pushed back into the outcome the
//! user just edited, if there is one.

use serde::Deserialize;
use tracing::debug;

use crate::outcome::{clamp_profit, Outcome};

/// What to do with an infeasible solve that no single edited outcome can absorb
/// (budget edits, auto-index switches, plain reads).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficitPolicy {
    /// Leave the other targets alone; the auto profit floors at zero and the
    /// total cost may exceed the budget.
    #[default]
    Clamp,
    /// Shrink every non-auto stake by one common ratio so that, with the auto
    /// profit at zero, the budget is spent exactly.
    Rescale,
}

/// Rebalance with the default [`DeficitPolicy::Clamp`].
pub fn rebalance(
    outcomes: &[Outcome],
    budget: f64,
    auto: usize,
    changed: Option<usize>,
) -> Vec<Outcome> {
    rebalance_with_policy(outcomes, budget, auto, changed, DeficitPolicy::Clamp)
}

pub fn rebalance_with_policy(
    outcomes: &[Outcome],
    budget: f64,
    auto: usize,
    changed: Option<usize>,
    policy: DeficitPolicy,
) -> Vec<Outcome> {
    let mut out = outcomes.to_vec();
    let Some(auto_price) = out.get(auto).map(|o| o.price) else {
        debug!(auto, len = out.len(), "auto index outside outcome list, nothing to rebalance");
        return out;
    };

    let mut k_auto = solve_auto_profit(&out, budget, auto);

    if k_auto < 0.0 {
        match changed.filter(|&i| i != auto && i < out.len()) {
            Some(i) => {
                let p_changed = out[i].price;
                // A zero-priced outcome costs nothing, so trimming it frees no budget.
                let delta = if p_changed > 0.0 { (-k_auto * auto_price) / p_changed } else { 0.0 };
                let before = out[i].profit;
                out[i].profit = clamp_profit(before - delta);
                debug!(changed = i, delta, before, after = out[i].profit, "shifted deficit into edited outcome");
                k_auto = solve_auto_profit(&out, budget, auto);
            }
            None if policy == DeficitPolicy::Rescale => {
                let cost = cost_except(&out, budget, auto);
                if cost > 0.0 {
                    // The auto outcome still needs `p_auto * budget` at zero profit.
                    let ratio = budget * (1.0 - auto_price) / cost;
                    for (j, o) in out.iter_mut().enumerate() {
                        if j != auto {
                            o.profit = clamp_profit((budget + o.profit) * ratio - budget);
                        }
                    }
                    debug!(ratio, "rescaled non-auto stakes to fit budget");
                    k_auto = solve_auto_profit(&out, budget, auto);
                }
            }
            None => {
                debug!(k_auto, "infeasible solve with no edited outcome, flooring auto profit");
            }
        }
    }

    out[auto].profit = k_auto.max(0.0);
    out
}

/// Σ over non-auto outcomes of `price · (budget + profit)`.
fn cost_except(outcomes: &[Outcome], budget: f64, auto: usize) -> f64 {
    outcomes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != auto)
        .map(|(_, o)| o.cost(budget))
        .sum()
}

/// Raw (unclamped) auto profit. A zero auto price cannot balance anything and
/// reports 0 instead of dividing by zero.
fn solve_auto_profit(outcomes: &[Outcome], budget: f64, auto: usize) -> f64 {
    let p_auto = outcomes[auto].price;
    if p_auto == 0.0 {
        return 0.0;
    }
    (budget - cost_except(outcomes, budget, auto)) / p_auto - budget
}
