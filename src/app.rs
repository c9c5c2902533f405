use std::rc::Rc;

use tracing::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::input::{format_money, format_price, format_stake, parse_amount};
use crate::portfolio::{Portfolio, PortfolioAction};
use crate::view::OutcomeRow;

impl Reducible for Portfolio {
    type Action = PortfolioAction;

    // A refused edit keeps the current value, so the UI simply doesn't move.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Ok(next) => Rc::new(next),
            Err(e) => {
                debug!(error = %e, "edit ignored");
                self
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub seed: Portfolio,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let portfolio = {
        let seed = props.seed.clone();
        use_reducer(move || seed)
    };
    // Raw text so a half-typed number ("12.") survives re-render.
    let budget_text = {
        let budget = props.seed.budget();
        use_state(move || budget.to_string())
    };

    let view = portfolio.view();
    let dispatcher = portfolio.dispatcher();
    let can_remove = view.can_remove();

    let on_budget_input = {
        let budget_text = budget_text.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let text = target.value();
            dispatcher.dispatch(PortfolioAction::SetBudget(parse_amount(&text)));
            budget_text.set(text);
        })
    };
    let on_add_outcome = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::AddOutcome))
    };

    html! {
        <div class="container">
            <header>
                <h1>{"HedgeRunner"}</h1>
                <div class="tooltip pill" data-tooltip="Spread a fixed budget over mutually exclusive YES bets">
                    {"Hedge Calculator"}
                </div>
            </header>

            <div class="card budget">
                <label for="budget">{"Available money to bet ($)"}</label>
                <input
                    id="budget"
                    type="number"
                    min="0"
                    step="1"
                    placeholder={"e.g. 100"}
                    value={(*budget_text).clone()}
                    oninput={on_budget_input}
                    aria-label="Budget" />
            </div>

            <div class="grid">
                { for view.rows().map(|row| outcome_card(row, can_remove, &dispatcher)) }
            </div>

            <button onclick={on_add_outcome} style="margin-top:8px; width: 100%;" aria-label="Add new outcome">
                {"+ Add Outcome"}
            </button>

            <div class="section-divider"></div>

            <div class="total">
                {format!("Total cost = {} / {}", format_money(view.total_cost()), view.budget)}
            </div>
            { if view.arbitrage_impossible {
                html!{ <div class="status-indicator danger">{"Arbitrage impossible: sum of YES prices ≥ 1."}</div> }
            } else { html!{} }}

            <footer>
                {"HedgeRunner v0.1 - guaranteed-profit splits across mutually exclusive outcomes"}
            </footer>
        </div>
    }
}

fn outcome_card(row: OutcomeRow<'_>, can_remove: bool, dispatcher: &UseReducerDispatcher<Portfolio>) -> Html {
    let i = row.index;
    let on_name = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let t: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(PortfolioAction::SetName(i, t.value()));
        })
    };
    let on_price = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let t: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(PortfolioAction::SetPrice(i, parse_amount(&t.value())));
        })
    };
    let on_auto = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: Event| dispatcher.dispatch(PortfolioAction::SetAutoIndex(i)))
    };
    let on_profit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let t: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(PortfolioAction::SetProfit(i, parse_amount(&t.value())));
        })
    };
    let on_remove = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::RemoveOutcome(i)))
    };

    let o = row.outcome;
    html! {
        <div key={o.id.0.to_string()} class="card">
            <div class="row three" style="gap:8px; align-items: end;">
                <div>
                    <label for={format!("name-{i}")}>{"Name"}</label>
                    <input id={format!("name-{i}")} placeholder="Outcome name" value={o.name.clone()} oninput={on_name} aria-label="Outcome name" />
                </div>
                <div>
                    <label for={format!("price-{i}")}>{"YES price"}</label>
                    <input
                        id={format!("price-{i}")}
                        type="number"
                        min="0"
                        max="1"
                        step="0.01"
                        placeholder="0.50"
                        value={format_price(o.price)}
                        oninput={on_price}
                        aria-label="YES price" />
                </div>
                <label class="tooltip" data-tooltip="This outcome's profit is solved so the whole budget is spent">
                    <input type="radio" name="auto" checked={row.is_auto} onchange={on_auto} />
                    {" Auto-balance"}
                </label>
                { if can_remove {
                    html!{ <button onclick={on_remove} class="danger" aria-label="Remove outcome">{"Remove"}</button> }
                } else { html!{} }}
            </div>

            <div class="input-group">
                <label for={format!("profit-{i}")}>
                    {"Profit if wins: "}<strong>{format_money(o.profit)}</strong>
                </label>
                <input
                    id={format!("profit-{i}")}
                    type="range"
                    min={row.bounds.min.to_string()}
                    max={row.bounds.max.to_string()}
                    step="0.01"
                    disabled={row.is_auto}
                    class={if row.is_auto { "muted" } else { "" }}
                    value={format!("{:.2}", o.profit)}
                    oninput={on_profit}
                    aria-label="Profit if wins" />
            </div>

            <div class="metric-grid">
                <div class="metric-item">
                    <div class="metric-value">{format_stake(row.stake)}</div>
                    <div class="metric-label">{"Stake"}</div>
                </div>
                <div class="metric-item">
                    <div class="metric-value">{format_money(row.cost)}</div>
                    <div class="metric-label">{"Cost"}</div>
                </div>
                <div class="metric-item">
                    <div class="metric-value">{format_money(o.price)}</div>
                    <div class="metric-label">{"YES price"}</div>
                </div>
            </div>
        </div>
    }
}
