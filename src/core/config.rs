//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lectern/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::deck::DEFAULT_DECK;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LecternConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deck file path or built-in deck name.
    pub deck: Option<String>,
    pub start_fullscreen: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrandConfig {
    pub name: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TransitionConfig {
    pub style: Option<TransitionStyle>,
    pub duration_ms: Option<u64>,
    pub progress_duration_ms: Option<u64>,
}

/// How the outgoing and incoming slides are animated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// Fade, horizontal shift and blur.
    #[default]
    Slide,
    /// Fade and blur only.
    Fade,
    /// Swap instantly.
    None,
}

impl TransitionStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "slide" => Some(Self::Slide),
            "fade" => Some(Self::Fade),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 600;
pub const DEFAULT_PROGRESS_MS: u64 = 800;
pub const DEFAULT_BRAND_NAME: &str = "더국제";
pub const DEFAULT_BRAND_TAGLINE: &str = "VOCATIONAL COLLEGE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub deck: String,
    pub start_fullscreen: bool,
    pub brand_name: String,
    pub brand_tagline: String,
    pub transition_style: TransitionStyle,
    /// Length of each transition phase (exit, then enter).
    pub transition_duration: Duration,
    pub progress_duration: Duration,
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub deck: Option<String>,
    pub fullscreen: bool,
    pub transition: Option<TransitionStyle>,
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

/// Returns the path to `~/.lectern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern").join("config.toml"))
}

/// Load config from `~/.lectern/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LecternConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LecternConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LecternConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LecternConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LecternConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LecternConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Lectern Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck = "orientation"               # Built-in deck name or path to a .md file
# start_fullscreen = false

# [brand]
# name = "더국제"
# tagline = "VOCATIONAL COLLEGE"

# [transition]
# style = "slide"                    # "slide", "fade" or "none"
# duration_ms = 600                  # Per phase: exit, then enter
# progress_duration_ms = 800
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
pub fn resolve(config: &LecternConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &LecternConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Deck: CLI → env → config → built-in default
    let deck = cli
        .deck
        .clone()
        .or_else(|| env("LECTERN_DECK"))
        .or_else(|| config.general.deck.clone())
        .unwrap_or_else(|| DEFAULT_DECK.to_string());

    // Transition style: CLI → env → config → default
    let transition_style = cli
        .transition
        .or_else(|| {
            env("LECTERN_TRANSITION").and_then(|name| {
                let style = TransitionStyle::from_name(&name);
                if style.is_none() {
                    warn!("Ignoring unknown LECTERN_TRANSITION value: {}", name);
                }
                style
            })
        })
        .or(config.transition.style)
        .unwrap_or_default();

    ResolvedConfig {
        deck,
        start_fullscreen: cli.fullscreen || config.general.start_fullscreen.unwrap_or(false),
        brand_name: config
            .brand
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
        brand_tagline: config
            .brand
            .tagline
            .clone()
            .unwrap_or_else(|| DEFAULT_BRAND_TAGLINE.to_string()),
        transition_style,
        transition_duration: Duration::from_millis(
            config.transition.duration_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        ),
        progress_duration: Duration::from_millis(
            config
                .transition
                .progress_duration_ms
                .unwrap_or(DEFAULT_PROGRESS_MS),
        ),
    }
}
