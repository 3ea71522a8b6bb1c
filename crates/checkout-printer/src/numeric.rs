//! # Numeric Presentation
//!
//! How prices and quantities look on the tape.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money           → [-]<major><sep><2 digits>      1.50   12.00   -0.50  │
//! │  Quantity (kilo) → <value rounded to 3 digits>    2.500  1.063          │
//! │  Quantity (each) → lowercase hex of the integer   3      a      ff      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Measured quantities round half away from zero on the shortest decimal
//! that reads back as the same `f64`, so `0.0625` kg prints `0.063`.
//!
//! The separator is carried by [`NumberFormat`], never by process-wide
//! locale state. There is no digit grouping.

use checkout_core::{Money, ProductUnit};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Digits after the separator for money.
pub const PRICE_DECIMALS: usize = 2;

/// Digits after the separator for measured quantities.
pub const QUANTITY_DECIMALS: usize = 3;

/// Explicit numeric-formatting convention for one printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Character between whole and fractional digits.
    pub decimal_separator: char,
}

impl NumberFormat {
    /// UK convention: `.` separator, no grouping.
    pub const fn uk() -> Self {
        Self {
            decimal_separator: '.',
        }
    }

    /// Same layout with a different decimal separator.
    pub const fn with_separator(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// Formats money with exactly [`PRICE_DECIMALS`] fraction digits.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    /// use checkout_printer::NumberFormat;
    ///
    /// let uk = NumberFormat::uk();
    /// assert_eq!(uk.price(Money::from_cents(1200)), "12.00");
    /// assert_eq!(NumberFormat::with_separator(',').price(Money::from_cents(150)), "1,50");
    /// ```
    pub fn price(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{:0width$}",
            sign,
            amount.major(),
            self.decimal_separator,
            amount.minor(),
            width = PRICE_DECIMALS
        )
    }

    /// Formats a quantity according to the product's unit.
    ///
    /// Discrete quantities are truncated to a 32-bit integer (saturating,
    /// NaN becomes 0) and printed in lowercase hexadecimal. Negative values
    /// print as their two's complement.
    ///
    /// Measured quantities get [`QUANTITY_DECIMALS`] fraction digits, halves
    /// rounded away from zero on the shortest decimal form (`1.0625` prints
    /// `1.063`). Non-finite values print as Rust renders them (`NaN`, `inf`).
    pub fn quantity(&self, quantity: f64, unit: ProductUnit) -> String {
        match unit {
            ProductUnit::Each => format!("{:x}", quantity as i32),
            ProductUnit::Kilo => self.measured(quantity),
        }
    }

    fn measured(&self, quantity: f64) -> String {
        let text = match Self::shortest_decimal(quantity) {
            Some(exact) => {
                let rounded = exact.round_dp_with_strategy(
                    QUANTITY_DECIMALS as u32,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                format!("{:.*}", QUANTITY_DECIMALS, rounded)
            }
            None => format!("{:.*}", QUANTITY_DECIMALS, quantity),
        };
        if self.decimal_separator == '.' {
            return text;
        }
        text.replacen('.', &self.decimal_separator.to_string(), 1)
    }

    /// The shortest decimal that reads back as `quantity` (what a person
    /// typed on the scale, not the binary expansion). `None` for non-finite
    /// values and magnitudes outside the decimal range.
    fn shortest_decimal(quantity: f64) -> Option<Decimal> {
        if !quantity.is_finite() {
            return None;
        }
        Decimal::from_str(&quantity.to_string()).ok()
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::uk()
    }
}
