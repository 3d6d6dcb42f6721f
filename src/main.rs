use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod components;
mod config;
mod engine;
mod error;
mod geometry;
mod input;
mod renderer;
mod scene;
mod selection;
mod systems;

use cli::Cli;
use config::Config;

const INFO: &str = "pendulum-simulator https://github.com/jacob-thompson/pendulum-simulator";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("could not load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    init_logging(&config.logging.level);

    println!("{INFO}");
    tracing::debug!(?config, "configuration loaded");

    engine::run(&config)?;

    tracing::info!("bye");
    Ok(())
}

/// RUST_LOG wins over the configured level. Logs go to stderr.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pendulum_simulator={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
