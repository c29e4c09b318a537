use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::Category;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid color '{value}' for '{key}', expected #RRGGBB")]
    InvalidColor { key: &'static str, value: String },
}

/// RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// 解析 `#RRGGBB`
    pub fn parse_hex(key: &'static str, value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor {
            key,
            value: value.to_string(),
        };

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// 配色表：每个分类一种颜色，外加错误与强调色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub underweight: Rgb,
    pub normal: Rgb,
    pub overweight: Rgb,
    pub obese_1: Rgb,
    pub obese_2: Rgb,
    pub obese_3: Rgb,
    pub error: Rgb,
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            underweight: Rgb(0xF4, 0xD0, 0x3F),
            normal: Rgb(0x2E, 0xCC, 0x71),
            overweight: Rgb(0xF1, 0xC4, 0x0F),
            obese_1: Rgb(0xE6, 0x7E, 0x22),
            obese_2: Rgb(0xE7, 0x4C, 0x3C),
            obese_3: Rgb(0xC0, 0x39, 0x2B),
            error: Rgb(0xE7, 0x4C, 0x3C),
            accent: Rgb(0x34, 0x98, 0xDB),
        }
    }
}

impl Palette {
    /// 按分类查颜色
    pub fn category_color(&self, category: Category) -> Rgb {
        match category {
            Category::Underweight => self.underweight,
            Category::Normal => self.normal,
            Category::Overweight => self.overweight,
            Category::Obese1 => self.obese_1,
            Category::Obese2 => self.obese_2,
            Category::Obese3 => self.obese_3,
        }
    }
}

/// TOML 文件结构，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    palette: PaletteFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    underweight: Option<String>,
    normal: Option<String>,
    overweight: Option<String>,
    obese_1: Option<String>,
    obese_2: Option<String>,
    obese_3: Option<String>,
    error: Option<String>,
    accent: Option<String>,
}

/// 运行时配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub palette: Palette,
}

impl Config {
    /// 默认配置文件路径 (~/.config/bmi-card/config.toml)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bmi-card")
            .join("config.toml")
    }

    /// 从文件加载配置，文件不存在时返回默认值
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_file(file)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Palette::default();
        let p = file.palette;

        let pick = |key: &'static str, value: Option<String>, fallback: Rgb| match value {
            Some(hex) => Rgb::parse_hex(key, &hex),
            None => Ok(fallback),
        };

        Ok(Self {
            palette: Palette {
                underweight: pick("underweight", p.underweight, defaults.underweight)?,
                normal: pick("normal", p.normal, defaults.normal)?,
                overweight: pick("overweight", p.overweight, defaults.overweight)?,
                obese_1: pick("obese_1", p.obese_1, defaults.obese_1)?,
                obese_2: pick("obese_2", p.obese_2, defaults.obese_2)?,
                obese_3: pick("obese_3", p.obese_3, defaults.obese_3)?,
                error: pick("error", p.error, defaults.error)?,
                accent: pick("accent", p.accent, defaults.accent)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("k", "#2ECC71").unwrap(), Rgb(0x2E, 0xCC, 0x71));
        assert_eq!(Rgb::parse_hex("k", "#c0392b").unwrap(), Rgb(0xC0, 0x39, 0x2B));
        assert!(Rgb::parse_hex("k", "2ECC71").is_err());
        assert!(Rgb::parse_hex("k", "#2ECC7").is_err());
        assert!(Rgb::parse_hex("k", "#GGGGGG").is_err());
        assert!(Rgb::parse_hex("k", "#ÄÄÄ").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_palette_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette]\nnormal = \"#00FF00\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.palette.normal, Rgb(0, 0xFF, 0));
        assert_eq!(config.palette.obese_3, Palette::default().obese_3);
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette]\naccent = \"blue\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { key: "accent", .. }));
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[palette\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_category_color_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.category_color(Category::Underweight), Rgb(0xF4, 0xD0, 0x3F));
        assert_eq!(palette.category_color(Category::Obese2), Rgb(0xE7, 0x4C, 0x3C));
    }
}
