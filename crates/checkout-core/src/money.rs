//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    printing "%.2f" then has to round, and rounding modes differ         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount on the tape is an exact number of cents, so the         │
//! │    printer never rounds a price.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_cents(120); // 1.20
//!
//! let doubled = price * 2;                      // 2.40
//! let total = price + Money::from_cents(30);    // 1.50
//! assert_eq!(total.to_string(), "1.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are allowed and printed as given
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serializes as a bare integer, so JSON receipts carry cents
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ReceiptItem.price ──► ReceiptItem.total_price ──► "1.50" on the tape  │
/// │                                                                         │
/// │  Discount.amount ────────────────────────────────► "0.50" on the tape  │
/// │                                                                         │
/// │  Receipt.total_price ──────────────► "Total:                  12.00"   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(12, 0).cents(), 1200);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the absolute major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), 5);
    /// ```
    #[inline]
    pub const fn major(&self) -> u64 {
        (self.0 / 100).unsigned_abs()
    }

    /// Returns the absolute minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> u64 {
        (self.0 % 100).unsigned_abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a measured (possibly fractional) quantity.
    ///
    /// The result is rounded to the nearest cent, halves away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let per_kilo = Money::from_cents(120);
    /// let line = per_kilo.multiply_measured(2.5).unwrap();
    /// assert_eq!(line.cents(), 300);
    /// ```
    ///
    /// ## Errors
    /// [`CoreError::PriceOverflow`] when the quantity is not finite or the
    /// product leaves the i64 range.
    pub fn multiply_measured(&self, qty: f64) -> CoreResult<Self> {
        let raw = (self.0 as f64 * qty).round();

        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if !raw.is_finite() || raw >= i64::MAX as f64 || raw < i64::MIN as f64 {
            return Err(CoreError::PriceOverflow {
                unit_price_cents: self.0,
                quantity: qty,
            });
        }

        Ok(Money(raw as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering with a `.` separator and no grouping
/// (`"12.00"`, `"-0.50"`).
///
/// ## Note
/// The printer formats through its own `NumberFormat` so the separator can be
/// configured; this is the default convention.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for whole quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(150).to_string(), "1.50");
        assert_eq!(Money::from_cents(1200).to_string(), "12.00");
        assert_eq!(Money::from_cents(-50).to_string(), "-0.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(123456789).to_string(), "1234567.89");
    }

    #[test]
    fn test_display_extremes_do_not_overflow() {
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let total: Money = [150, 300, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 500);
    }

    #[test]
    fn test_multiply_measured() {
        let per_kilo = Money::from_cents(120);
        assert_eq!(per_kilo.multiply_measured(2.5).unwrap().cents(), 300);
        // 199 * 0.5 = 99.5 → 100 (half away from zero)
        let price = Money::from_cents(199);
        assert_eq!(price.multiply_measured(0.5).unwrap().cents(), 100);
    }

    #[test]
    fn test_multiply_measured_rejects_non_finite() {
        let price = Money::from_cents(120);
        assert!(matches!(
            price.multiply_measured(f64::NAN),
            Err(CoreError::PriceOverflow { .. })
        ));
        assert!(price.multiply_measured(f64::INFINITY).is_err());
        assert!(Money::from_cents(i64::MAX).multiply_measured(2.0).is_err());
    }

    #[test]
    fn test_serde_is_bare_cents() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("-50").unwrap();
        assert_eq!(back.cents(), -50);
    }
}
