//! The calculator state as an immutable value.
//!
//! Every transition takes `&self` and hands back a fresh [`Portfolio`]; the
//! caller swaps it in wholesale or keeps the old one when the transition is
//! refused. What the UI shows is never stored: [`Portfolio::view`] recomputes
//! the rebalanced projection from scratch on each read.

use tracing::debug;

use crate::config::{Config, NewOutcomeConfig, MIN_OUTCOMES};
use crate::error::{PortfolioError, Result};
use crate::outcome::{clamp_budget, clamp_price, clamp_profit, Outcome, OutcomeId};
use crate::rebalance::{rebalance_with_policy, DeficitPolicy};
use crate::view::PortfolioView;

/// One user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioAction {
    SetBudget(f64),
    SetName(usize, String),
    SetPrice(usize, f64),
    SetProfit(usize, f64),
    SetAutoIndex(usize),
    AddOutcome,
    RemoveOutcome(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    budget: f64,
    outcomes: Vec<Outcome>,
    auto_index: usize,
    next_id: u32,
    template: NewOutcomeConfig,
    policy: DeficitPolicy,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Portfolio {
    /// Seed a portfolio from settings. The settings are expected to be
    /// validated; the seed rows are normalized regardless.
    pub fn from_config(config: &Config) -> Self {
        let seed = &config.portfolio;
        let outcomes: Vec<Outcome> = seed
            .outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| Outcome::new(OutcomeId(i as u32), o.name.clone(), o.price, o.profit))
            .collect();
        let auto_index = if seed.auto_index < outcomes.len() { seed.auto_index } else { 0 };
        Self {
            budget: clamp_budget(seed.budget),
            next_id: outcomes.len() as u32,
            outcomes,
            auto_index,
            template: config.new_outcome.clone(),
            policy: config.rebalance.deficit_policy,
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Stored rows. Profits here are the last written values, not the
    /// rebalanced projection; see [`Portfolio::view`].
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn auto_index(&self) -> usize {
        self.auto_index
    }

    pub fn deficit_policy(&self) -> DeficitPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.outcomes.len() > MIN_OUTCOMES
    }

    pub fn apply(&self, action: PortfolioAction) -> Result<Portfolio> {
        match action {
            PortfolioAction::SetBudget(v) => Ok(self.set_budget(v)),
            PortfolioAction::SetName(i, name) => self.set_outcome_name(i, name),
            PortfolioAction::SetPrice(i, v) => self.set_outcome_price(i, v),
            PortfolioAction::SetProfit(i, v) => self.set_outcome_profit(i, v),
            PortfolioAction::SetAutoIndex(i) => self.set_auto_index(i),
            PortfolioAction::AddOutcome => Ok(self.add_outcome()),
            PortfolioAction::RemoveOutcome(i) => self.remove_outcome(i),
        }
    }

    /// Budget is global: nothing is rebalanced against a specific outcome here,
    /// the next read re-solves the auto profit.
    pub fn set_budget(&self, value: f64) -> Portfolio {
        let budget = clamp_budget(value);
        debug!(budget, "budget set");
        Portfolio { budget, ..self.clone() }
    }

    pub fn set_outcome_name(&self, index: usize, name: impl Into<String>) -> Result<Portfolio> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.outcomes[index].name = name.into();
        Ok(next)
    }

    /// Prices are stored clamped; the rebalanced figures follow on the next read.
    pub fn set_outcome_price(&self, index: usize, value: f64) -> Result<Portfolio> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.outcomes[index].price = clamp_price(value);
        debug!(index, price = next.outcomes[index].price, "price set");
        Ok(next)
    }

    /// Store a profit target and rebalance with this outcome as the one that
    /// absorbs any deficit.
    pub fn set_outcome_profit(&self, index: usize, value: f64) -> Result<Portfolio> {
        self.check_index(index)?;
        if index == self.auto_index {
            debug!(index, "refused profit write on auto outcome");
            return Err(PortfolioError::AutoOutcomeProfit { index });
        }
        let mut outcomes = self.outcomes.clone();
        outcomes[index].profit = clamp_profit(value);
        let outcomes = rebalance_with_policy(&outcomes, self.budget, self.auto_index, Some(index), self.policy);
        debug!(
            index,
            requested = value,
            stored = outcomes[index].profit,
            auto_profit = outcomes[self.auto_index].profit,
            "profit set"
        );
        Ok(Portfolio { outcomes, ..self.clone() })
    }

    /// Switch which outcome is derived. Stored values stay as they are.
    pub fn set_auto_index(&self, index: usize) -> Result<Portfolio> {
        self.check_index(index)?;
        debug!(from = self.auto_index, to = index, "auto outcome changed");
        Ok(Portfolio { auto_index: index, ..self.clone() })
    }

    pub fn add_outcome(&self) -> Portfolio {
        let mut next = self.clone();
        let id = OutcomeId(next.next_id);
        next.next_id += 1;
        next.outcomes.push(Outcome::new(id, self.template.name.clone(), self.template.price, 0.0));
        debug!(%id, len = next.outcomes.len(), "outcome added");
        next
    }

    pub fn remove_outcome(&self, index: usize) -> Result<Portfolio> {
        self.check_index(index)?;
        if !self.can_remove() {
            return Err(PortfolioError::BelowMinimumOutcomes { min: MIN_OUTCOMES });
        }
        let mut next = self.clone();
        let removed = next.outcomes.remove(index);
        next.auto_index = match self.auto_index {
            a if a == index => 0,
            a if a > index => a - 1,
            a => a,
        };
        debug!(id = %removed.id, auto_index = next.auto_index, "outcome removed");
        Ok(next)
    }

    /// The read projection: rebalanced rows plus derived metrics.
    pub fn view(&self) -> PortfolioView {
        let outcomes = rebalance_with_policy(&self.outcomes, self.budget, self.auto_index, None, self.policy);
        PortfolioView::new(self.budget, self.auto_index, outcomes)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.outcomes.len() {
            Ok(())
        } else {
            Err(PortfolioError::IndexOutOfRange { index, len: self.outcomes.len() })
        }
    }
}
