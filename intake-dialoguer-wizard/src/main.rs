use anyhow::Context;
use intake::{IntakeConfig, Route};
use intake_dialoguer_wizard::{App, DialoguerWizard, screens};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "survey_intake=info,intake=info,intake_dialoguer_wizard=info".into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = IntakeConfig::from_env().context("reading backend configuration")?;
    let store = config.open_store().context("opening survey store")?;

    // optional start path, e.g. `survey-intake /dashboard`
    let start = match std::env::args().nth(1) {
        None => Route::Landing,
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            eprintln!("{}", screens::not_found(&path));
            Route::Landing
        }),
    };

    App::new(&*store, DialoguerWizard::new()).run(start)?;
    Ok(())
}
