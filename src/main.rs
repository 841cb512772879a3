use std::path::Path;
use std::sync::{Arc, Mutex};

extern crate serde_json;
extern crate toml;
#[macro_use]
extern crate serde_derive;

extern crate simple_server;
extern crate http;
extern crate chrono;
#[macro_use]
extern crate log;
extern crate fern;

mod web;
mod types;
mod dummy_data;
mod error;
mod config;
mod window;
mod chart;
mod readout;
mod dashboard;
mod clock;
mod source;
mod session;
mod render;

use anyhow::Context;
use fern::colors::{Color, ColoredLevelConfig};

use crate::config::Config;
use crate::source::{HttpSource, MetricsSource};

fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let colors = ColoredLevelConfig::default()
                .trace(Color::BrightBlue)
                .debug(Color::Cyan)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            out.finish(format_args!(
                "[{}][{}]{}",
                chrono::Local::now().format("%H:%M:%S"),
                colors.color(record.level()).to_string(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .level_for("simple_server", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        info!("No {} found, using defaults", path.display());
        return Ok(Config::default());
    }
    config::read_config(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    setup_logger().map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    let config = load_config(Path::new("config.toml"))?;

    let source: Box<dyn MetricsSource> = if config.simulate {
        info!("Using simulated vitals");
        Box::new(dummy_data::SimulatedSource::new())
    }
    else {
        let source = HttpSource::new(config.endpoint.clone(), config.request_timeout())
            .context("Failed to create http client")?;
        info!("Polling {}", source.endpoint());
        Box::new(source)
    };

    let mut session = session::Session::new(
        Arc::new(Mutex::new(dashboard::Dashboard::new())),
        source,
        Box::new(clock::LocalClock),
        session::POLL_INTERVAL,
    );

    // Fill the readouts before the first tick. A failure is logged and the timer carries on
    if session.poll_once().is_ok() {
        info!("Metrics endpoint answered");
    }
    session.start();

    let dashboard = Arc::clone(session.dashboard());
    web::run_server(&config.http_address, config.http_port, dashboard)
}
