use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use health_feed::cli::Cli;
use health_feed::config::Config;
use health_feed::logging::init_tracing;
use health_feed::store::CounterStore;
use health_feed::ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "health-feed starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("health-feed-worker")
        .build()
        .context("Failed to start async runtime")?;

    // One counter for the life of the process, handed to each view.
    let store = CounterStore::new();
    let result = ui::runtime::run(runtime.handle(), &config, cli.username, store);

    // A fetch still in flight (e.g. stuck on DNS) must not hold up exit.
    runtime.shutdown_background();
    result
}
