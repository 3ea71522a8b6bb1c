//! # Printer Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Printer Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌────────────────────────┐ │
//! │  │     Layout      │  │  Configuration   │  │        Input           │ │
//! │  │                 │  │                  │  │                        │ │
//! │  │  LineTooWide    │  │  InvalidConfig   │  │  InvalidReceipt        │ │
//! │  │                 │  │  ConfigLoadFailed│  │  Io                    │ │
//! │  │                 │  │  UnknownOverflow │  │                        │ │
//! │  └─────────────────┘  └──────────────────┘  └────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_core::ValidationError;
use thiserror::Error;

/// Result type alias for printer operations.
pub type PrinterResult<T> = Result<T, PrinterError>;

/// Everything that can go wrong between reading a receipt and handing back
/// the tape text.
#[derive(Debug, Error)]
pub enum PrinterError {
    // =========================================================================
    // Layout Errors
    // =========================================================================
    /// A label/value pair does not fit the tape and the overflow policy is
    /// `reject`.
    #[error("Line '{label}' needs {required} columns but the tape has {columns}")]
    LineTooWide {
        label: String,
        required: usize,
        columns: usize,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration value failed validation.
    #[error("Invalid printer configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Unrecognised overflow policy name.
    #[error("Unknown overflow policy: '{0}'. Valid options: overflow, reject")]
    UnknownOverflowPolicy(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Receipt document is malformed or missing a referenced entity.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    /// I/O failure reading input or config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PrinterError {
    fn from(err: toml::de::Error) -> Self {
        PrinterError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PrinterError {
    fn from(err: serde_json::Error) -> Self {
        PrinterError::InvalidReceipt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_too_wide_message() {
        let err = PrinterError::LineTooWide {
            label: "Bulk discount(Flour)".to_string(),
            required: 24,
            columns: 20,
        };
        assert_eq!(
            err.to_string(),
            "Line 'Bulk discount(Flour)' needs 24 columns but the tape has 20"
        );
    }

    #[test]
    fn test_json_error_becomes_invalid_receipt() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PrinterError = json_err.into();
        assert!(matches!(err, PrinterError::InvalidReceipt(_)));
    }

    #[test]
    fn test_validation_error_becomes_invalid_config() {
        let err: PrinterError = ValidationError::Required {
            field: "columns".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid printer configuration: columns is required"
        );
    }
}
