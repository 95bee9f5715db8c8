use std::path::Path;

use serde::Deserialize;

use crate::common::{error::AppError, money::Money};

/// Team that staffs the store by default.
const DEFAULT_ROSTER: [&str; 12] = [
    "Petr Michal",
    "Aleš Mörtl",
    "Daniel Rusín",
    "Michael Arnošt Beneš",
    "Jakub Škarda",
    "Terezie Beránková",
    "Vítek Hakr",
    "Josef Studený",
    "Barbora Grillová",
    "Eliška Hanáková",
    "No Name",
    "No Name",
];

/// Longest a goal celebration may stay up: one working day.
pub const MAX_CELEBRATION_SECS: i64 = 24 * 60 * 60;

/// Settings fixed at session start. Any field missing from a config file
/// falls back to its default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub roster: Vec<String>,
    /// Initial daily target per consultant, in whole units.
    pub consultant_target: i64,
    /// Initial store target, in whole units.
    pub store_target: i64,
    /// How long a goal celebration stays on screen.
    pub celebration_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            consultant_target: 1000,
            store_target: 5000,
            celebration_secs: 5,
        }
    }
}

impl SessionConfig {
    pub fn consultant_target(&self) -> Money {
        Money::from_units(self.consultant_target).non_negative()
    }

    pub fn store_target(&self) -> Money {
        Money::from_units(self.store_target).non_negative()
    }

    pub fn celebration_lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.celebration_secs.clamp(0, MAX_CELEBRATION_SECS))
    }
}

/// Load the session config from `path`, or the built-in defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig, AppError> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents =
                std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                })?;
            parse_config(&contents)
        }
        None => {
            tracing::info!("Using default embedded configuration");
            Ok(SessionConfig::default())
        }
    }
}

pub fn parse_config(contents: &str) -> Result<SessionConfig, AppError> {
    let config: SessionConfig = toml::from_str(contents)?;
    if config.celebration_secs > MAX_CELEBRATION_SECS {
        return Err(AppError::InvalidConfig(format!(
            "celebration_secs = {} exceeds {MAX_CELEBRATION_SECS}",
            config.celebration_secs
        )));
    }
    Ok(config)
}
