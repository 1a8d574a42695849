//! Rookery command-line runner.
//!
//! Reads `ROOKERY_*` settings from the environment, runs the simulation
//! and prints the outcome. Logging is controlled with `RUST_LOG`.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rookery::engine::EvolutionRun;
use rookery::report::{ColonyPrinter, Report};
use rookery::settings::{OutputFormat, Settings};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Rookery v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    info!(?settings, "loaded settings");

    let mut run = EvolutionRun::new(settings.run.clone())?;

    let stdout = io::stdout();
    let summary = if settings.prints_colony() {
        let mut printer = ColonyPrinter::new(settings.colony.clone(), stdout.lock());
        let summary = run.run_with(&mut printer);
        printer.finish()?;
        summary
    } else {
        run.run_to_end()
    };

    let report = Report::new(&run, &summary, &settings.colony)?;
    match settings.format {
        OutputFormat::Text => report.write_text(stdout.lock())?,
        OutputFormat::Json => report.write_json(stdout.lock())?,
    }

    Ok(())
}
