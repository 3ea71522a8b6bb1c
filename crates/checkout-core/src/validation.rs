//! # Validation Module
//!
//! Input validation for the values that feed the receipt printer.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Construction                                                 │
//! │  └── Product::try_new → validate_product_name                          │
//! │                                                                         │
//! │  Layer 2: Printer configuration                                        │
//! │  ├── validate_columns                                                  │
//! │  └── validate_decimal_separator                                        │
//! │                                                                         │
//! │  NOT validated: receipt arithmetic. The printer trusts its input.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_columns, validate_product_name};
//!
//! validate_product_name("Toothpaste").unwrap();
//! validate_columns(40).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Widest tape layout accepted by the printer configuration.
pub const MAX_COLUMNS: usize = 1000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Flour").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Layout Validators
// =============================================================================

/// Validates a tape width in characters.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_COLUMNS`]
pub fn validate_columns(columns: usize) -> ValidationResult<()> {
    if columns == 0 || columns > MAX_COLUMNS {
        return Err(ValidationError::OutOfRange {
            field: "columns".to_string(),
            min: 1,
            max: MAX_COLUMNS as i64,
        });
    }

    Ok(())
}

/// Validates the decimal separator used for prices and quantities.
///
/// ## Rules
/// - Not an ASCII digit (would be indistinguishable from the number)
/// - Not `-` (reserved for the sign)
/// - Not whitespace (would look like column padding)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_decimal_separator;
///
/// assert!(validate_decimal_separator('.').is_ok());
/// assert!(validate_decimal_separator(',').is_ok());
/// assert!(validate_decimal_separator('7').is_err());
/// ```
pub fn validate_decimal_separator(separator: char) -> ValidationResult<()> {
    let reason = if separator.is_ascii_digit() {
        "must not be a digit"
    } else if separator == '-' {
        "must not be the minus sign"
    } else if separator.is_whitespace() {
        "must not be whitespace"
    } else {
        return Ok(());
    };

    Err(ValidationError::InvalidFormat {
        field: "decimal_separator".to_string(),
        reason: reason.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
