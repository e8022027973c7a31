use std::rc::Rc;

use log::info;
use quack::{
    number_of_quacks, CountingDuckFactory, DuckSimulator, QuackError, QuackObserver, QuackTally,
    Quackologist,
};
use quack_ext::gateways::MetricsGateway;
use thiserror::Error;

use crate::config::app::AppConfig;

mod config;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Simulation error: {0}")]
    Simulation(#[from] QuackError),
}

fn run(app_config: &AppConfig) -> Result<u64, AppError> {
    let calls = app_config.calls();
    let simulator = DuckSimulator::new(&app_config.flock_name, &calls.goose);
    let factory = CountingDuckFactory::with_calls(QuackTally::global(), calls)?;
    let observers: [QuackObserver; 2] =
        [Rc::new(Quackologist), Rc::new(MetricsGateway::default())];

    Ok(simulator.simulate(&factory, &observers)?)
}

fn main() -> Result<(), AppError> {
    crate::config::log::init();

    let app_config = AppConfig::new()?;
    run(&app_config)?;
    info!("Quacks counted since start: {}", number_of_quacks());
    Ok(())
}
