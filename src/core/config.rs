//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.clifit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Theme colours stay as strings here; the TUI parses them, since core
//! knows nothing about terminals.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClifitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub workouts_file: Option<String>,
    pub default_workout: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub title: Option<String>,
    pub block: Option<String>,
    pub exercise: Option<String>,
    pub dim: Option<String>,
    pub highlight: Option<String>,
    pub selected: Option<String>,
    pub help: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WORKOUTS_FILE: &str = "workouts.yaml";
pub const DEFAULT_LOG_FILE: &str = "clifit.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options except where absence matters)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub workouts_file: PathBuf,
    /// Run this workout alone, skipping the menu.
    pub workout: Option<String>,
    pub log_file: PathBuf,
    pub log_level: String,
    pub theme: ThemeConfig,
}

/// Values taken from the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub workouts_file: Option<&'a Path>,
    pub workout: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.clifit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".clifit").join("config.toml"))
}

/// Load config from `~/.clifit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ClifitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ClifitConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ClifitConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ClifitConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ClifitConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ClifitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r##"# clifit Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# workouts_file = "workouts.yaml"   # Or set CLIFIT_WORKOUTS, or pass a path
# default_workout = "Pull Day"      # Skip the menu and run this workout
# log_file = "clifit.log"
# log_level = "info"                # Or set CLIFIT_LOG_LEVEL

# [theme]
# Colours: names ("cyan"), 256-colour indices ("212") or hex ("#ff87d7")
# title = "212"
# block = "86"
# exercise = "252"
# dim = "240"
# highlight = "229"
# selected = "212"
# help = "241"
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ClifitConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Workouts file: CLI → env → config → default
    let workouts_file = cli
        .workouts_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("CLIFIT_WORKOUTS").ok().map(PathBuf::from))
        .or_else(|| config.general.workouts_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKOUTS_FILE));

    // Single workout: CLI → config
    let workout = cli
        .workout
        .map(str::to_string)
        .or_else(|| config.general.default_workout.clone());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .map(str::to_string)
        .or_else(|| std::env::var("CLIFIT_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_file = config
        .general
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        workouts_file,
        workout,
        log_file,
        log_level,
        theme: config.theme.clone(),
    }
}
