use crate::dial::{CardinalLabels, DialResources};
use directories::ProjectDirs;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// A color written the way Android resource files write them:
/// `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(Srgba<u8>);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3, 4, 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits in {0:?}")]
    BadDigits(String),
}

impl HexColor {
    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(Srgba::new(r, g, b, a))
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        self.0.into_format()
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError::BadDigits(s.to_string()));
        }
        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(HexColorError::BadLength(digits.len()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| HexColorError::BadDigits(s.to_string()))?;

        // short forms repeat each nibble
        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;

        match digits.len() {
            3 => Ok(Self::argb(0xFF, nibble(8), nibble(4), nibble(0))),
            4 => Ok(Self::argb(nibble(12), nibble(8), nibble(4), nibble(0))),
            6 => Ok(Self::argb(0xFF, byte(16), byte(8), byte(0))),
            8 => Ok(Self::argb(byte(24), byte(16), byte(8), byte(0))),
            n => Err(HexColorError::BadLength(n)),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            c.alpha, c.red, c.green, c.blue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: HexColor,
    pub text: HexColor,
    pub marker: HexColor,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: HexColor::argb(0xFF, 0x55, 0x55, 0x55),
            text: HexColor::argb(0xAA, 0xFF, 0xFF, 0xFF),
            marker: HexColor::argb(0xAA, 0xFF, 0xFF, 0xFF),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub labels: CardinalLabels,
    pub colors: ColorConfig,
    pub text_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: CardinalLabels::default(),
            colors: ColorConfig::default(),
            text_size: 12.0,
        }
    }
}

impl Config {
    pub fn resources(&self) -> DialResources {
        DialResources {
            labels: self.labels.clone(),
            background: self.colors.background.to_srgba(),
            text: self.colors.text.to_srgba(),
            marker: self.colors.marker.to_srgba(),
            text_size: self.text_size,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "culturall", "compass").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `COMPASS_*` variables, with `__` between nested keys:
/// `COMPASS_LABELS__NORTH=Nord`, `COMPASS_TEXT_SIZE=16`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("COMPASS")
        .prefix_separator("_")
        .separator("__")
}

fn load_from(path: PathBuf, env: config::Environment) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Reads the resource file (explicit path or the platform default), then
/// applies environment overrides on top.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    load_from(config_path, environment())
}

pub fn load_or_default(path: Option<&Path>) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using built-in resources: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
