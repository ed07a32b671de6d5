//! Application-level configuration loading: database location and listening port.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/scorepad.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREPAD_CONFIG_PATH";
/// Environment variable that overrides the database file location.
const DATABASE_PATH_ENV: &str = "SCOREPAD_DATABASE_PATH";
/// Environment variable that overrides the listening port.
const PORT_ENV: &str = "PORT";

const DEFAULT_DATABASE_PATH: &str = "card_games.db";
const DEFAULT_PORT: u16 = 2283;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration resolved at start-up.
pub struct AppConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// TCP port bound on all interfaces.
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration file (if any) and apply environment overrides on top.
    pub fn load() -> Self {
        let config = Self::from_file();
        let config = config.with_overrides(
            env::var_os(DATABASE_PATH_ENV),
            env::var(PORT_ENV).ok().as_deref(),
        );
        info!(
            database = %config.database_path.display(),
            port = config.port,
            "configuration resolved"
        );
        config
    }

    fn from_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply the environment overrides. An unparsable port is ignored.
    fn with_overrides(
        mut self,
        database_path: Option<std::ffi::OsString>,
        port: Option<&str>,
    ) -> Self {
        if let Some(path) = database_path.filter(|path| !path.is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(raw) = port {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value = raw, error = %err, "ignoring invalid port override"),
            }
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    database_path: Option<PathBuf>,
    port: Option<u16>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            database_path: value.database_path.unwrap_or(defaults.database_path),
            port: value.port.unwrap_or(defaults.port),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        let config = AppConfig::from(raw);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("card_games.db"));
    }

    #[test]
    fn environment_overrides_win() {
        let config = AppConfig::default().with_overrides(Some("/tmp/games.db".into()), Some("9000"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/games.db"));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = AppConfig::default().with_overrides(Some("".into()), Some("eighty"));
        assert_eq!(config, AppConfig::default());
    }
}
