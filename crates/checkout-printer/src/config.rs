//! # Printer Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_RECEIPT_COLUMNS=32                                        │
//! │     CHECKOUT_RECEIPT_OVERFLOW=reject                                   │
//! │     CHECKOUT_DECIMAL_SEPARATOR=,                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/receipt/receipt.toml (Linux)                             │
//! │     ~/Library/Application Support/com.checkout.receipt/receipt.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     40 columns, overflow, UK number format                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # receipt.toml
//! columns = 40
//! overflow = "overflow"  # overflow | reject
//!
//! [number_format]
//! decimal_separator = "."
//! ```
//!
//! Loading happens at the edge (CLI, embedding app). The printer itself only
//! receives a finished [`PrinterConfig`].

use checkout_core::validation::{validate_columns, validate_decimal_separator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::PrinterResult;
use crate::layout::OverflowPolicy;
use crate::numeric::NumberFormat;
use crate::DEFAULT_COLUMNS;

/// Environment variable overriding `columns`.
pub const ENV_COLUMNS: &str = "CHECKOUT_RECEIPT_COLUMNS";

/// Environment variable overriding `overflow`.
pub const ENV_OVERFLOW: &str = "CHECKOUT_RECEIPT_OVERFLOW";

/// Environment variable overriding `number_format.decimal_separator`.
pub const ENV_DECIMAL_SEPARATOR: &str = "CHECKOUT_DECIMAL_SEPARATOR";

// =============================================================================
// Printer Configuration
// =============================================================================

/// Everything a [`ReceiptPrinter`](crate::ReceiptPrinter) needs to lay out a
/// tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Tape width in characters.
    pub columns: usize,

    /// Behaviour for lines wider than the tape.
    pub overflow: OverflowPolicy,

    /// Decimal convention for prices and quantities.
    pub number_format: NumberFormat,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            overflow: OverflowPolicy::default(),
            number_format: NumberFormat::default(),
        }
    }
}

impl PrinterConfig {
    /// Default configuration with a different width.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> PrinterResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`receipt.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> PrinterResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with overrides taken from `lookup` instead of
    /// the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> PrinterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading printer config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load printer config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> PrinterResult<()> {
        validate_columns(self.columns)?;
        validate_decimal_separator(self.number_format.decimal_separator)?;
        Ok(())
    }

    /// Applies overrides from any key lookup. Unparseable values are logged
    /// and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(columns) = lookup(ENV_COLUMNS) {
            match columns.trim().parse::<usize>() {
                Ok(c) => {
                    debug!(columns = c, "Overriding columns from environment");
                    self.columns = c;
                }
                Err(_) => warn!(value = %columns, "Ignoring non-numeric {}", ENV_COLUMNS),
            }
        }

        if let Some(policy) = lookup(ENV_OVERFLOW) {
            match policy.parse::<OverflowPolicy>() {
                Ok(p) => {
                    debug!(overflow = %p, "Overriding overflow policy from environment");
                    self.overflow = p;
                }
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(separator) = lookup(ENV_DECIMAL_SEPARATOR) {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.number_format.decimal_separator = c,
                _ => warn!(value = %separator, "{} must be a single character", ENV_DECIMAL_SEPARATOR),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "receipt")
            .map(|dirs| dirs.config_dir().join("receipt.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrinterError;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.columns, 40);
        assert_eq!(config.overflow, OverflowPolicy::Overflow);
        assert_eq!(config.number_format.decimal_separator, '.');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_full() {
        let config = PrinterConfig::from_toml_str(
            r#"
            columns = 32
            overflow = "reject"

            [number_format]
            decimal_separator = ","
            "#,
        )
        .unwrap();
        assert_eq!(config.columns, 32);
        assert_eq!(config.overflow, OverflowPolicy::Reject);
        assert_eq!(config.number_format.decimal_separator, ',');
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = PrinterConfig::from_toml_str("columns = 24").unwrap();
        assert_eq!(config.columns, 24);
        assert_eq!(config.overflow, OverflowPolicy::Overflow);
        assert_eq!(config.number_format, NumberFormat::uk());
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        let err = PrinterConfig::from_toml_str(r#"overflow = "wrap""#).unwrap_err();
        assert!(matches!(err, PrinterError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let text = toml::to_string_pretty(&PrinterConfig::default()).unwrap();
        assert!(text.contains("columns = 40"));
        assert!(text.contains("[number_format]"));
    }

    #[test]
    fn test_validate() {
        assert!(PrinterConfig::with_columns(0).validate().is_err());

        let mut config = PrinterConfig::default();
        config.number_format.decimal_separator = '5';
        assert!(matches!(
            config.validate(),
            Err(PrinterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = PrinterConfig::default();
        config.apply_overrides(lookup(&[
            (ENV_COLUMNS, "32"),
            (ENV_OVERFLOW, "reject"),
            (ENV_DECIMAL_SEPARATOR, ","),
        ]));
        assert_eq!(config.columns, 32);
        assert_eq!(config.overflow, OverflowPolicy::Reject);
        assert_eq!(config.number_format.decimal_separator, ',');
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = PrinterConfig::default();
        config.apply_overrides(lookup(&[
            (ENV_COLUMNS, "wide"),
            (ENV_OVERFLOW, "wrap"),
            (ENV_DECIMAL_SEPARATOR, ".,"),
        ]));
        assert_eq!(config, PrinterConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "columns = 30").unwrap();

        let path = file.path().to_path_buf();
        let config = PrinterConfig::load_with(Some(path.clone()), lookup(&[])).unwrap();
        assert_eq!(config.columns, 30);
        assert_eq!(config.overflow, OverflowPolicy::Overflow);

        let config = PrinterConfig::load_with(Some(path), lookup(&[(ENV_COLUMNS, "24")])).unwrap();
        assert_eq!(config.columns, 24);
    }

    #[test]
    fn test_load_validates_after_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "columns = 30").unwrap();

        let result = PrinterConfig::load_with(
            Some(file.path().to_path_buf()),
            lookup(&[(ENV_COLUMNS, "0")]),
        );
        assert!(matches!(result, Err(PrinterError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "columns = \"forty\"").unwrap();

        let path = file.path().to_path_buf();
        assert!(PrinterConfig::load(Some(path.clone())).is_err());
        assert_eq!(
            PrinterConfig::load_or_default(Some(path)),
            PrinterConfig::default()
        );
    }
}
