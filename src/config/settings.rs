//! Configuration settings for pinkink.
//!
//! Settings are loaded from `~/.pinkink/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::JournalError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Journal settings.
    pub journal: JournalConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
    /// Completion API settings.
    pub ai: AiConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// How many entries `pinkink recent` shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Run sentiment analysis on every `pinkink write`.
    #[serde(default)]
    pub auto_analyze: bool,
}

/// Statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of days covered by the dashboard sparkline.
    #[serde(default = "default_sparkline_days")]
    pub sparkline_days: usize,
}

/// Longest sparkline the dashboard will draw.
pub const MAX_SPARKLINE_DAYS: usize = 366;

impl StatsConfig {
    /// `sparkline_days`, capped at [`MAX_SPARKLINE_DAYS`].
    #[must_use]
    pub fn sparkline_span(&self) -> usize {
        self.sparkline_days.min(MAX_SPARKLINE_DAYS)
    }
}

/// Completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// API key. `PINKINK_OPENAI_API_KEY` takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for sentiment analysis.
    #[serde(default = "default_sentiment_model")]
    pub sentiment_model: String,
    /// Model used for weekly summaries.
    #[serde(default = "default_summary_model")]
    pub summary_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Retries after the first failed attempt. Zero disables retrying.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry.
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    /// Upper bound for the retry delay.
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_recent_limit() -> usize {
    3
}

const fn default_sparkline_days() -> usize {
    7
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_sentiment_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_summary_model() -> String {
    "gpt-4".to_string()
}

const fn default_timeout_seconds() -> u64 {
    30
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_initial_backoff_ms() -> u64 {
    500
}

const fn default_max_backoff_ms() -> u64 {
    4000
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            auto_analyze: false,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sparkline_days: default_sparkline_days(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            sentiment_model: default_sentiment_model(),
            summary_model: default_summary_model(),
            timeout_seconds: default_timeout_seconds(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, JournalError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            JournalError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            JournalError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), JournalError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            JournalError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// A copy with the API key masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut redacted = self.clone();
        redacted.ai.api_key = redacted.ai.api_key.as_deref().map(mask_key);
        redacted
    }

    /// Render the configuration as YAML with the API key masked.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_redacted_yaml(&self) -> Result<String, JournalError> {
        serde_yaml::to_string(&self.redacted())
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {e}")))
    }
}

/// Mask all but the last four characters of a secret.
#[must_use]
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.journal.recent_limit, 3);
        assert!(!config.journal.auto_analyze);
        assert_eq!(config.ai.sentiment_model, "gpt-4o-mini");
        assert_eq!(config.ai.summary_model, "gpt-4");
        assert_eq!(config.ai.max_retries, 2);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert!(config.ai.api_key.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.journal.recent_limit = 5;
        config.ai.max_retries = 0;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.journal.recent_limit, 5);
        assert_eq!(loaded.ai.max_retries, 0);
    }

    #[test]
    fn test_sparkline_span_is_capped() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "stats:\n  sparkline_days: 200000000\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.stats.sparkline_days, 200_000_000);
        assert_eq!(config.stats.sparkline_span(), MAX_SPARKLINE_DAYS);
        assert_eq!(Config::default().stats.sparkline_span(), 7);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
ai:
  summary_model: gpt-4o
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.ai.summary_model, "gpt-4o");
        assert_eq!(config.ai.sentiment_model, "gpt-4o-mini");
        assert_eq!(config.ai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.journal.recent_limit, 3);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "journal: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }

    #[test]
    fn test_redacted_yaml_masks_key() {
        let mut config = Config::default();
        config.ai.api_key = Some("sk-secret-abcd".to_string());

        let yaml = config.to_redacted_yaml().unwrap();
        assert!(yaml.contains("**********abcd"));
        assert!(!yaml.contains("sk-secret"));
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("abcdef"), "**cdef");
    }
}
