use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which flavor of encoding the command-line tool uses by default.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Leading padding indicator, any input length.
    #[default]
    Padded,
    /// No padding indicator, input length must be a multiple of 5.
    Strict,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Padded => "padded",
            EncodingMode::Strict => "strict",
        }
    }
}

/// Default input size limit, in bytes (100 MiB).
pub const DEFAULT_MAX_SIZE: usize = 104_857_600;

/// Settings as written in a config file; unset keys fall through to the
/// layer below when merging.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Encoding flavor used when neither `--strict` nor `--padded` is given
    #[serde(default)]
    pub default_mode: Option<EncodingMode>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

/// bfh configuration loaded from TOML files.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct BfhConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl BfhConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the crate.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Layers, later ones winning per key:
    /// 1. Built-in defaults
    /// 2. `~/.config/bfh/config.toml` (user overrides)
    /// 3. `./bfh.toml` (project-local overrides)
    /// 4. `explicit`, if given
    ///
    /// Unreadable files in the standard locations only produce a warning; an
    /// unreadable `explicit` file is an error.
    pub fn load_with_overrides(
        explicit: Option<&Path>,
        quiet: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("bfh").join("config.toml");
            config.merge_optional(&user_config_path, "user", quiet);
        }

        config.merge_optional(Path::new("bfh.toml"), "local", quiet);

        if let Some(path) = explicit {
            let explicit_config = Self::load_from_file(path)
                .map_err(|e| format!("Failed to load config from {:?}: {}", path, e))?;
            config.merge(explicit_config);
        }

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, kind: &str, quiet: bool) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "Warning: Failed to load {} config from {:?}: {}",
                        kind, path, e
                    );
                }
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Keys set in `other` override the same keys in `self`.
    pub fn merge(&mut self, other: BfhConfig) {
        if let Some(mode) = other.settings.default_mode {
            self.settings.default_mode = Some(mode);
        }
        if let Some(max_size) = other.settings.max_size {
            self.settings.max_size = Some(max_size);
        }
    }

    /// Effective default encoding mode.
    pub fn default_mode(&self) -> EncodingMode {
        self.settings.default_mode.unwrap_or_default()
    }

    /// Effective input size limit (0 = unlimited).
    pub fn max_size(&self) -> usize {
        self.settings.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = BfhConfig::load_default().unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Padded);
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
default_mode = "strict"
max_size = 1024
"#;
        let config = BfhConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Strict);
        assert_eq!(config.max_size(), 1024);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = BfhConfig::from_toml("").unwrap();
        assert_eq!(config, BfhConfig::default());
        assert_eq!(config.default_mode(), EncodingMode::Padded);
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let toml_content = r#"
[settings]
default_mode = "relaxed"
"#;
        assert!(BfhConfig::from_toml(toml_content).is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = BfhConfig::from_toml(
            r#"
[settings]
default_mode = "strict"
max_size = 10
"#,
        )
        .unwrap();

        let overrides = BfhConfig::from_toml(
            r#"
[settings]
max_size = 0
"#,
        )
        .unwrap();

        base.merge(overrides);

        assert_eq!(base.default_mode(), EncodingMode::Strict);
        assert_eq!(base.max_size(), 0);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = Path::new("definitely/not/a/bfh.toml");
        assert!(BfhConfig::load_from_file(path).is_err());
        assert!(BfhConfig::load_with_overrides(Some(path), true).is_err());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(EncodingMode::Padded.as_str(), "padded");
        assert_eq!(EncodingMode::Strict.as_str(), "strict");
    }
}
