use config::{Config, Environment, File, FileFormat};
use quack::DuckCalls;
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub flock_name: String,
    pub mallard_call: String,
    pub redhead_call: String,
    pub goose_call: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    pub fn calls(&self) -> DuckCalls {
        DuckCalls {
            mallard: self.mallard_call.clone(),
            redhead: self.redhead_call.clone(),
            goose: self.goose_call.clone(),
        }
    }
}
