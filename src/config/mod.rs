use crate::palette::{Command, Platform, Registry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Extra palette commands, appended after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_base_url() -> String {
    "https://gbeltrami.com".to_string()
}

fn default_owner() -> String {
    "Gustavo Beltrami".to_string()
}

fn default_tagline() -> String {
    "Founding CEO at dex".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            owner: default_owner(),
            tagline: default_tagline(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    #[default]
    Auto,
    Apple,
    Other,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::detect(),
            PlatformSetting::Apple => Platform::Apple,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub platform: PlatformSetting,
    /// Show "Tap to start" instead of the chord hint on narrow terminals
    #[serde(default = "default_true")]
    pub touch_hint: bool,
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_compact_width() -> u16 {
    60
}

fn default_focus_delay_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            platform: PlatformSetting::default(),
            touch_hint: true,
            compact_width: default_compact_width(),
            focus_delay_ms: default_focus_delay_ms(),
        }
    }
}

impl UiConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

impl Config {
    /// Built-in commands plus the configured extras.
    pub fn registry(&self) -> Result<Registry> {
        Registry::with_extra(&self.commands).context("Invalid [[commands]] in config")
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "folio")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn data_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "folio")
        .context("Could not determine data directory")?
        .data_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `path`, or from the default location.
///
/// An explicit path must exist. A missing default file means defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    // Surface duplicate ids at load time rather than on first palette open
    config.registry()?;

    Ok(config)
}

/// Write a default config file. Returns the path written.
pub fn init(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Pass --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
