//! YAML configuration for the CLI.

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, loaded from `kesra.yaml`.
///
/// Every field is optional in the file; omitted fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset CSV path. Overridden by `--data`.
    #[serde(default)]
    pub data: Option<PathBuf>,
    /// Width of rendered chart bars/strips, in terminal cells.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    /// Whether to emit ANSI colors.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            chart_width: default_chart_width(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Parse a config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn default_chart_width() -> usize {
    40
}

const fn default_color() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.data.is_none());
        assert_eq!(config.chart_width, 40);
        assert!(config.color);
    }

    #[test]
    fn test_from_yaml_full() {
        let config = Config::from_yaml(
            "data: data/kesejahteraan_jatim.csv\nchart_width: 60\ncolor: false\n",
        )
        .unwrap();
        assert_eq!(
            config.data,
            Some(PathBuf::from("data/kesejahteraan_jatim.csv"))
        );
        assert_eq!(config.chart_width, 60);
        assert!(!config.color);
    }

    #[test]
    fn test_from_yaml_partial_takes_defaults() {
        let config = Config::from_yaml("chart_width: 20\n").unwrap();
        assert!(config.data.is_none());
        assert_eq!(config.chart_width, 20);
        assert!(config.color);
    }

    #[test]
    fn test_from_yaml_empty_object() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(Config::from_yaml("chart_width: banyak").is_err());
    }
}
