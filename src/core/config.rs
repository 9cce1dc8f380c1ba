//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rsvp/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::scheduler::DEFAULT_WPM;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReaderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaybackConfig {
    pub wpm: Option<u32>,
    pub wpm_step: Option<u32>,
    pub max_wpm: Option<u32>,
    pub autoplay: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_ticks: Option<bool>,
    /// Empty rows between the pivot and each tick marker.
    pub tick_gap: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WPM_STEP: u32 = 25;
pub const DEFAULT_MAX_WPM: u32 = 1000;
pub const DEFAULT_TICK_GAP: u16 = 1;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub wpm: u32,
    pub wpm_step: u32,
    pub max_wpm: u32,
    pub autoplay: bool,
    pub show_ticks: bool,
    pub tick_gap: u16,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            wpm_step: DEFAULT_WPM_STEP,
            max_wpm: DEFAULT_MAX_WPM,
            autoplay: false,
            show_ticks: true,
            tick_gap: DEFAULT_TICK_GAP,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Settings given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub wpm: Option<u32>,
    pub autoplay: bool,
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

/// Returns `~/.rsvp/`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rsvp"))
}

/// Returns the path to `~/.rsvp/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.rsvp/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReaderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReaderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReaderConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ReaderConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<ReaderConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReaderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# RSVP Reader Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [playback]
# wpm = 300                          # Or set RSVP_WPM env var, or pass --wpm
# wpm_step = 25                      # Change per Up/Down key press
# max_wpm = 1000
# autoplay = false                   # Start reading as soon as text is loaded

# [display]
# show_ticks = true                  # Fixation markers above and below the pivot
# tick_gap = 1                       # Empty rows between pivot and markers
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ReaderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var("RSVP_WPM").ok().as_deref())
}

fn resolve_with_env(
    config: &ReaderConfig,
    cli: &CliOverrides,
    env_wpm: Option<&str>,
) -> ResolvedConfig {
    let max_wpm = config.playback.max_wpm.unwrap_or(DEFAULT_MAX_WPM);

    let env_wpm = env_wpm.and_then(|raw| match raw.trim().parse::<u32>() {
        Ok(wpm) => Some(wpm),
        Err(e) => {
            warn!("Ignoring RSVP_WPM={:?}: {}", raw, e);
            None
        }
    });

    // WPM: CLI → env → config → default, clamped to max_wpm
    let wpm = cli
        .wpm
        .or(env_wpm)
        .or(config.playback.wpm)
        .unwrap_or(DEFAULT_WPM)
        .min(max_wpm);

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using default", level);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        wpm,
        wpm_step: config.playback.wpm_step.unwrap_or(DEFAULT_WPM_STEP),
        max_wpm,
        autoplay: cli.autoplay || config.playback.autoplay.unwrap_or(false),
        show_ticks: config.display.show_ticks.unwrap_or(true),
        tick_gap: config.display.tick_gap.unwrap_or(DEFAULT_TICK_GAP),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ReaderConfig::default(), &CliOverrides::default(), None);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.wpm, 300);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ReaderConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
            },
            playback: PlaybackConfig {
                wpm: Some(450),
                wpm_step: Some(50),
                max_wpm: Some(1200),
                autoplay: Some(true),
            },
            display: DisplayConfig {
                show_ticks: Some(false),
                tick_gap: Some(2),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.wpm, 450);
        assert_eq!(resolved.wpm_step, 50);
        assert_eq!(resolved.max_wpm, 1200);
        assert!(resolved.autoplay);
        assert!(!resolved.show_ticks);
        assert_eq!(resolved.tick_gap, 2);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_precedence_cli_env_config() {
        let config = ReaderConfig {
            playback: PlaybackConfig {
                wpm: Some(200),
                ..Default::default()
            },
            ..Default::default()
        };

        let from_env = resolve_with_env(&config, &CliOverrides::default(), Some("350"));
        assert_eq!(from_env.wpm, 350);

        let cli = CliOverrides {
            wpm: Some(500),
            autoplay: false,
        };
        let from_cli = resolve_with_env(&config, &cli, Some("350"));
        assert_eq!(from_cli.wpm, 500);
    }

    #[test]
    fn test_resolve_bad_env_falls_through() {
        let config = ReaderConfig {
            playback: PlaybackConfig {
                wpm: Some(200),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), Some("fast"));
        assert_eq!(resolved.wpm, 200);
    }

    #[test]
    fn test_wpm_clamped_to_max() {
        let cli = CliOverrides {
            wpm: Some(5000),
            autoplay: false,
        };
        let resolved = resolve_with_env(&ReaderConfig::default(), &cli, None);
        assert_eq!(resolved.wpm, DEFAULT_MAX_WPM);
    }

    #[test]
    fn test_unknown_log_level_uses_default() {
        let config = ReaderConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[playback]
wpm = 420
"#;
        let config: ReaderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.playback.wpm, Some(420));
        assert!(config.playback.max_wpm.is_none());
        assert!(config.display.show_ticks.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
log_level = "info"

[playback]
wpm = 320
wpm_step = 10
max_wpm = 900
autoplay = true

[display]
show_ticks = false
tick_gap = 0
"#;
        let config: ReaderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.playback.wpm_step, Some(10));
        assert_eq!(config.playback.autoplay, Some(true));
        assert_eq!(config.display.tick_gap, Some(0));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("rsvp-config-test-{}.toml", std::process::id()));
        fs::write(&path, "[playback]\nwpm = \"fast\"\n").unwrap();

        let result = load_config_from(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("rsvp-config-test-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
