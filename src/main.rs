use hedgerunner::app::{App, AppProps};
use hedgerunner::{telemetry, Config, Portfolio};
use tracing::{info, warn};

fn main() {
    let (config, rejected) = match Config::load_embedded() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    telemetry::init(&config.logging);
    if let Some(e) = rejected {
        warn!(error = %e, "embedded config rejected, using defaults");
    }

    let seed = Portfolio::from_config(&config);
    info!(
        budget = seed.budget(),
        outcomes = seed.len(),
        policy = ?seed.deficit_policy(),
        "starting hedge calculator"
    );
    yew::Renderer::<App>::with_props(AppProps { seed }).render();
}
