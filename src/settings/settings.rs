use crate::logger::LogConfig;
use anyhow::{Result, anyhow};
use config::{Config, Environment, Map};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogConfig,
}

const ENV_PREFIX: &str = "TINTLOG";
const ENV_SEPARATOR: &str = "__";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

fn parse(source: Environment) -> Result<Settings> {
    let settings: Settings = Config::builder()
        .add_source(source)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

/// Reads `TINTLOG__LOG__LEVEL` and friends from the process environment.
pub fn parse_settings() -> Result<Settings> {
    parse(environment())
}

/// Same as [`parse_settings`] with `vars` standing in for the environment.
pub fn parse_settings_from(vars: Map<String, String>) -> Result<Settings> {
    parse(environment().source(Some(vars)))
}
