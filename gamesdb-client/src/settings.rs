//! Client settings: API base URL, account id, timeout and date policy.
//!
//! Values are resolved per field with the priority
//! environment variable > `~/.config/gamesdb/settings.toml` > default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GamesDbError;

pub const DEFAULT_BASE_URL: &str = "http://thegamesdb.net/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "GAMESDB_BASE_URL";
const ENV_ACCOUNT_ID: &str = "GAMESDB_ACCOUNT_ID";
const ENV_TIMEOUT_SECS: &str = "GAMESDB_TIMEOUT_SECS";

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    /// Opaque account identifier used by the rating and favourites endpoints.
    pub account_id: Option<String>,
    pub timeout_secs: u64,
    /// Fail a decode on an unrecognised release date instead of dropping it.
    pub strict_dates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_dates: true,
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    gamesdb: Option<GamesDbConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct GamesDbConfig {
    base_url: Option<String>,
    account_id: Option<String>,
    timeout_secs: Option<u64>,
    strict_dates: Option<bool>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    EnvVar(&'static str),
    ConfigFile,
    Default,
    Missing,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each settings field.
#[derive(Debug)]
pub struct SettingSources {
    pub base_url: SettingSource,
    pub account_id: SettingSource,
    pub timeout_secs: SettingSource,
    pub strict_dates: SettingSource,
}

impl Settings {
    /// Load settings from the environment and the default config file.
    pub fn load() -> Result<Self, GamesDbError> {
        let config = match config_path() {
            Some(path) => read_config_file(&path)?,
            None => None,
        };
        Self::resolve(config.as_ref(), |var| std::env::var(var).ok())
    }

    /// Load settings from the environment and an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self, GamesDbError> {
        let config = read_config_file(path)?;
        Self::resolve(config.as_ref(), |var| std::env::var(var).ok())
    }

    /// Settings as stored in a config file, ignoring the environment.
    ///
    /// This is the starting point for edits that are written back to the file.
    pub fn from_file(path: &Path) -> Result<Self, GamesDbError> {
        let config = read_config_file(path)?;
        Self::resolve(config.as_ref(), |_| None)
    }

    fn resolve(
        config: Option<&GamesDbConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, GamesDbError> {
        let defaults = Self::default();

        let mut base_url = env(ENV_BASE_URL)
            .or_else(|| config.and_then(|c| c.base_url.clone()))
            .unwrap_or(defaults.base_url);
        // Endpoint paths are joined onto the base, which needs a trailing slash.
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let account_id = env(ENV_ACCOUNT_ID)
            .or_else(|| config.and_then(|c| c.account_id.clone()))
            .filter(|id| !id.is_empty());

        let timeout_secs = match env(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                GamesDbError::config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got {raw:?}"))
            })?,
            None => config
                .and_then(|c| c.timeout_secs)
                .unwrap_or(defaults.timeout_secs),
        };

        let strict_dates = config
            .and_then(|c| c.strict_dates)
            .unwrap_or(defaults.strict_dates);

        Ok(Self {
            base_url,
            account_id,
            timeout_secs,
            strict_dates,
        })
    }

    /// Override the account id (e.g. from a command-line flag).
    pub fn with_account_id(mut self, account_id: Option<String>) -> Self {
        if let Some(id) = account_id {
            self.account_id = Some(id);
        }
        self
    }
}

/// Path of the settings file: `~/.config/gamesdb/settings.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamesdb").join("settings.toml"))
}

/// Save settings to an explicit path, creating parent directories as needed.
///
/// Fields equal to their default are left out of the file.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), GamesDbError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let defaults = Settings::default();
    let config = ConfigFile {
        gamesdb: Some(GamesDbConfig {
            base_url: (settings.base_url != defaults.base_url).then(|| settings.base_url.clone()),
            account_id: settings.account_id.clone(),
            timeout_secs: (settings.timeout_secs != defaults.timeout_secs)
                .then_some(settings.timeout_secs),
            strict_dates: (settings.strict_dates != defaults.strict_dates)
                .then_some(settings.strict_dates),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| GamesDbError::config(format!("Failed to serialize settings: {e}")))?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Determine where each settings field is coming from, given the config
/// file in use (if any).
pub fn settings_sources(path: Option<&Path>) -> SettingSources {
    let config = path.and_then(|p| read_config_file(p).ok().flatten());
    sources_from(config.as_ref(), |var| std::env::var(var).is_ok())
}

fn sources_from(config: Option<&GamesDbConfig>, has_env: impl Fn(&str) -> bool) -> SettingSources {
    let pick = |var: &'static str, in_file: bool, fallback: SettingSource| {
        if has_env(var) {
            SettingSource::EnvVar(var)
        } else if in_file {
            SettingSource::ConfigFile
        } else {
            fallback
        }
    };

    SettingSources {
        base_url: pick(
            ENV_BASE_URL,
            config.is_some_and(|c| c.base_url.is_some()),
            SettingSource::Default,
        ),
        account_id: pick(
            ENV_ACCOUNT_ID,
            config.is_some_and(|c| c.account_id.is_some()),
            SettingSource::Missing,
        ),
        timeout_secs: pick(
            ENV_TIMEOUT_SECS,
            config.is_some_and(|c| c.timeout_secs.is_some()),
            SettingSource::Default,
        ),
        strict_dates: if config.is_some_and(|c| c.strict_dates.is_some()) {
            SettingSource::ConfigFile
        } else {
            SettingSource::Default
        },
    }
}

/// Read the `[gamesdb]` table of a config file. A missing file is `None`.
fn read_config_file(path: &Path) -> Result<Option<GamesDbConfig>, GamesDbError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&content).map_err(|e| {
        GamesDbError::config(format!("Failed to parse {}: {e}", path.display()))
    })?;
    Ok(config.gamesdb)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
