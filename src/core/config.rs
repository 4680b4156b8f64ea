//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.juststream/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::carousel::{CarouselOptions, CarouselOverrides, MOBILE_BREAKPOINT_PX};
use crate::catalog::Genre;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JustStreamConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselOverrides,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub slots_per_genre: Option<usize>,
    pub mobile_breakpoint: Option<u32>,
    pub cell_width_px: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_SLOTS_PER_GENRE: usize = 7;
/// Fallback pixel width of a terminal column when the terminal doesn't report pixels.
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Options for the home screen rows, before the `[carousel]` overrides.
pub const ROW_OPTIONS: CarouselOptions = CarouselOptions {
    slides_to_scroll: 1,
    slides_visible: 4,
    looping: true,
    pagination: true,
    navigation: true,
};

pub fn default_genres() -> Vec<Genre> {
    vec![
        Genre::named("Sci-Fi"),
        Genre::named("Action"),
        Genre::new("Best", ""),
        Genre::named("Fantasy"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub slots_per_genre: usize,
    pub mobile_breakpoint: u32,
    pub cell_width_px: u16,
    pub carousel: CarouselOptions,
    pub genres: Vec<Genre>,
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

/// Returns the path to `~/.juststream/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".juststream").join("config.toml"))
}

/// Load config from `~/.juststream/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JustStreamConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JustStreamConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JustStreamConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JustStreamConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<JustStreamConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JustStreamConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# JustStream Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# slots_per_genre = 7          # Movies per row
# mobile_breakpoint = 800      # Narrower windows (px) show one movie at a time
# cell_width_px = 8            # Used when the terminal doesn't report its pixel size

# [api]
# base_url = "http://localhost:8000/api/v1"   # Or set JUSTSTREAM_API_URL env var

# [carousel]
# slides_visible = 4
# slides_to_scroll = 1
# loop = true
# pagination = true
# navigation = true

# [[genres]]
# label = "Best"
# filter = ""                  # Empty filter = all genres, best rated first

# [[genres]]
# label = "Sci-Fi"
# filter = "Sci-Fi"
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
///
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &JustStreamConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let api_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("JUSTSTREAM_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let genres = if config.genres.is_empty() {
        default_genres()
    } else {
        config.genres.clone()
    };

    ResolvedConfig {
        api_url,
        slots_per_genre: config
            .general
            .slots_per_genre
            .unwrap_or(DEFAULT_SLOTS_PER_GENRE),
        mobile_breakpoint: config
            .general
            .mobile_breakpoint
            .unwrap_or(MOBILE_BREAKPOINT_PX),
        cell_width_px: config
            .general
            .cell_width_px
            .unwrap_or(DEFAULT_CELL_WIDTH_PX)
            .max(1),
        carousel: config.carousel.apply_to(ROW_OPTIONS),
        genres,
    }
}
