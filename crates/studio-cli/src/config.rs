//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use studio_metrics::MetricsConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,studio=info";

/// Studio configuration, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Startup data file used when no `--input` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Log filter directive (same syntax as `RUST_LOG`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// Metrics engine settings
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl StudioConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads the explicit path, or the default location.
    ///
    /// A missing file at the default location means defaults; a missing
    /// file the user named is an error.
    pub fn load(path: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(p) = path {
            if !p.exists() {
                return Err(CliError::Config(format!("{}: file not found", p.display())));
            }
            return Ok((Self::from_file(p)?, Some(p.to_path_buf())));
        }

        match default_path() {
            Some(p) if p.exists() => Ok((Self::from_file(&p)?, Some(p))),
            _ => Ok((Self::default(), None)),
        }
    }

    /// Template written by `config init`.
    pub fn template() -> Self {
        Self {
            data_file: None,
            format: Some(OutputFormat::Table),
            log_filter: Some(DEFAULT_LOG_FILTER.to_string()),
            metrics: MetricsConfig::default(),
        }
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Default config file location, `<config dir>/studio/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("studio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: StudioConfig = toml::from_str(
            r#"
            data_file = "data/startups.json"
            format = "json"
            log_filter = "debug"

            [metrics]
            parallel = false
            parallel_threshold = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("data/startups.json")));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.metrics, MetricsConfig::new().with_parallel(false).with_threshold(10));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: StudioConfig = toml::from_str("").unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_template_round_trip() {
        let text = StudioConfig::template().to_toml().unwrap();
        assert!(text.contains("format = \"table\""));
        let parsed: StudioConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, StudioConfig::template());
    }

    #[test]
    fn test_missing_named_file_is_an_error() {
        let err = StudioConfig::load(Some(Path::new("/nonexistent/studio.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/studio.toml: file not found"));
    }

    #[test]
    fn test_named_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("studio.toml");
        std::fs::write(&path, "format = \"csv\"\n").unwrap();

        let (config, source) = StudioConfig::load(Some(&path)).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert_eq!(source, Some(path));
    }
}
