use hedgerunner::{Config, DeficitPolicy, Portfolio, PortfolioAction, PortfolioError};

const TOL: f64 = 1e-9;

fn apply_all(mut p: Portfolio, actions: Vec<PortfolioAction>) -> Portfolio {
    for action in actions {
        if let Ok(next) = p.apply(action) {
            p = next;
        }
    }
    p
}

#[test]
fn seeded_view_spends_budget() {
    let p = Portfolio::default().set_auto_index(2).unwrap();
    let view = p.view();

    assert!((view.outcomes[2].profit - 6.846_153_846).abs() < 1e-6);
    assert!((view.total_cost() - 100.0).abs() < TOL);
    assert!((view.price_sum() - 0.9).abs() < 1e-12);
    assert!(!view.arbitrage_impossible);
    assert_eq!(view.stakes()[0], 120.0);
    assert!(view.can_remove());
}

#[test]
fn infeasible_profit_edit_is_absorbed_by_edited_outcome() {
    let toml = r#"
[portfolio]
budget = 10.0
auto_index = 0

[[portfolio.outcomes]]
name = "Home"
price = 0.5

[[portfolio.outcomes]]
name = "Away"
price = 0.5
"#;
    let config = Config::from_toml_str(toml).unwrap();
    let p = Portfolio::from_config(&config).set_outcome_profit(1, 50.0).unwrap();

    assert_eq!(p.outcomes()[1].profit, 0.0);
    assert_eq!(p.outcomes()[0].profit, 0.0);
    let view = p.view();
    assert!((view.total_cost() - 10.0).abs() < TOL);
    assert!(view.arbitrage_impossible);
}

#[test]
fn budget_cut_is_not_redistributed() {
    // Profits that fit a budget of 100 overcommit a budget of 10; with no
    // edited outcome the auto profit floors at 0 and cost exceeds budget.
    let p = Portfolio::default().set_outcome_profit(1, 10.0).unwrap();
    assert!(p.outcomes()[0].profit > 0.0);
    let view = p.set_budget(10.0).view();

    // 0.4 * 10 + 0.37 * 20 + 0.13 * 10
    assert_eq!(view.outcomes[0].profit, 0.0);
    assert_eq!(view.outcomes[1].profit, 10.0);
    assert!((view.total_cost() - 12.7).abs() < TOL);
}

#[test]
fn rescale_policy_applies_to_budget_cuts() {
    let config = Config::from_toml_str("[rebalance]\ndeficit_policy = \"rescale\"\n").unwrap();
    let p = Portfolio::from_config(&config);
    assert_eq!(p.deficit_policy(), DeficitPolicy::Rescale);

    let clamp_view = Portfolio::default().set_outcome_profit(1, 10.0).unwrap().set_budget(10.0).view();
    let rescale_view = p.set_outcome_profit(1, 10.0).unwrap().set_budget(10.0).view();
    assert!(rescale_view.outcomes[1].profit < clamp_view.outcomes[1].profit);
    assert!(rescale_view.total_cost() < clamp_view.total_cost());
    assert!(rescale_view.outcomes.iter().all(|o| o.profit >= 0.0));
}

#[test]
fn name_edits_never_touch_profits() {
    let p = Portfolio::default().set_outcome_profit(1, 12.5).unwrap();
    let renamed = p.set_outcome_name(1, "Driver B (wet)").unwrap();

    let before: Vec<f64> = p.view().outcomes.iter().map(|o| o.profit).collect();
    let after: Vec<f64> = renamed.view().outcomes.iter().map(|o| o.profit).collect();
    assert_eq!(before, after);
}

#[test]
fn switching_auto_changes_only_the_projection() {
    let p = Portfolio::default();
    let q = p.set_auto_index(1).unwrap();

    assert_eq!(p.outcomes(), q.outcomes());
    let view = q.view();
    assert_eq!(view.auto_index, 1);
    assert!((view.total_cost() - 100.0).abs() < TOL);
    // Driver A is user-set again and keeps its stored profit.
    assert_eq!(view.outcomes[0].profit, 20.0);
}

#[test]
fn auto_profit_write_is_a_no_op() {
    let p = Portfolio::default();
    assert_eq!(
        p.apply(PortfolioAction::SetProfit(0, 99.0)),
        Err(PortfolioError::AutoOutcomeProfit { index: 0 })
    );
    assert_eq!(apply_all(p.clone(), vec![PortfolioAction::SetProfit(0, 99.0)]), p);
}

#[test]
fn removal_floor_leaves_portfolio_unchanged() {
    let two = apply_all(Portfolio::default(), vec![PortfolioAction::RemoveOutcome(2)]);
    assert_eq!(two.len(), 2);

    let after = apply_all(two.clone(), vec![PortfolioAction::RemoveOutcome(0), PortfolioAction::RemoveOutcome(1)]);
    assert_eq!(after, two);
}

#[test]
fn add_then_remove_tracks_auto_index() {
    let p = apply_all(
        Portfolio::default(),
        vec![
            PortfolioAction::AddOutcome,
            PortfolioAction::SetPrice(3, 0.05),
            PortfolioAction::SetAutoIndex(3),
            PortfolioAction::RemoveOutcome(1),
        ],
    );
    assert_eq!(p.len(), 3);
    assert_eq!(p.auto_index(), 2);
    assert_eq!(p.outcomes()[2].name, "New Driver");
    assert_eq!(p.outcomes()[2].price, 0.05);

    let p = p.remove_outcome(2).unwrap();
    assert_eq!(p.auto_index(), 0);
}

#[test]
fn every_view_has_non_negative_profits() {
    let p = apply_all(
        Portfolio::default(),
        vec![
            PortfolioAction::SetPrice(1, 0.9),
            PortfolioAction::SetProfit(1, 500.0),
            PortfolioAction::SetBudget(3.0),
            PortfolioAction::SetPrice(0, 0.0),
            PortfolioAction::SetProfit(2, 1e6),
        ],
    );
    assert!(p.view().outcomes.iter().all(|o| o.profit >= 0.0));
}
