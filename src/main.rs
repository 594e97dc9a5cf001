#![allow(non_snake_case)]

mod cli;

use std::env;
use std::process;

use maintenanceCalendar::config::{self, RunMode};
use maintenanceCalendar::runtime;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maintenanceCalendar=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_file = env::var("CONFIG_FILE").ok();
    let settings = match config::load_settings(config_file.as_deref(), |key| env::var(key).ok()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    match settings.run_mode {
        RunMode::Api => runtime::run_api(settings).await,
        RunMode::Cli => cli::cli(settings).await,
    }
}
