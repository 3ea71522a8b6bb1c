//! # Receipt Printer
//!
//! Lays a finished [`Receipt`] out as fixed-width tape text.
//!
//! ## Tape Structure
//! ```text
//! ┌────────────────────────────────────────┐
//! │Apple                               1.50│  ◄── item line
//! │  0.50 * 3                              │  ◄── only when quantity != 1
//! │Flour                               3.00│
//! │  1.20 * 2.500                          │
//! │Bulk discount(Flour)                0.50│  ◄── discount lines
//! │                                        │  ◄── blank separator
//! │Total:                              4.00│  ◄── total line
//! └────────────────────────────────────────┘
//! ```
//!
//! The printer is immutable after construction and holds no state between
//! calls, so one instance can serve any number of threads.

use checkout_core::{Discount, Receipt, ReceiptItem};
use tracing::debug;

use crate::config::PrinterConfig;
use crate::error::PrinterResult;
use crate::layout::{checked_line_pair, fits, LINE_END};

/// Label of the final line. The trailing space is part of the layout.
pub const TOTAL_LABEL: &str = "Total: ";

/// Formats receipts for a tape of fixed width.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Product, ProductUnit, Receipt};
/// use checkout_printer::ReceiptPrinter;
///
/// let mut receipt = Receipt::new();
/// receipt
///     .add_product(Product::new("Toothpaste", ProductUnit::Each), 1.0, Money::from_cents(150))
///     .unwrap();
/// receipt.set_total_price(Money::from_cents(150));
///
/// let text = ReceiptPrinter::new(20).format(&receipt).unwrap();
/// assert_eq!(text, "Toothpaste      1.50\n\nTotal:          1.50\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptPrinter {
    config: PrinterConfig,
}

impl ReceiptPrinter {
    /// Printer for a tape `columns` characters wide, default number format,
    /// overflowing lines allowed.
    pub fn new(columns: usize) -> Self {
        Self::with_config(PrinterConfig::with_columns(columns))
    }

    /// Printer with an explicit configuration. The configuration is used as
    /// given; call [`PrinterConfig::validate`] first for untrusted values.
    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Tape width in characters.
    #[inline]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Renders the receipt: items, discounts, a blank line, then the total.
    ///
    /// The receipt is trusted as is: totals are printed as stored, never
    /// recomputed.
    ///
    /// ## Errors
    /// [`PrinterError::LineTooWide`](crate::PrinterError::LineTooWide) when
    /// a line does not fit and the overflow policy is `reject`. Nothing is
    /// returned for the lines that did fit.
    pub fn format(&self, receipt: &Receipt) -> PrinterResult<String> {
        debug!(
            items = receipt.items.len(),
            discounts = receipt.discounts.len(),
            columns = self.config.columns,
            "Formatting receipt"
        );

        let mut tape = String::new();

        for item in &receipt.items {
            self.present_item(&mut tape, item)?;
        }

        for discount in &receipt.discounts {
            self.present_discount(&mut tape, discount)?;
        }

        tape.push(LINE_END);
        self.present_total(&mut tape, receipt)?;

        Ok(tape)
    }

    /// Same as [`format`](Self::format).
    pub fn print_receipt(&self, receipt: &Receipt) -> PrinterResult<String> {
        self.format(receipt)
    }

    // =========================================================================
    // Line Presenters
    // =========================================================================

    fn present_item(&self, tape: &mut String, item: &ReceiptItem) -> PrinterResult<()> {
        let numbers = &self.config.number_format;

        let total = numbers.price(item.total_price);
        self.push_line(tape, &item.product.name, &total)?;

        // Exact comparison: only a quantity of exactly one suppresses the
        // breakdown line, whatever the unit.
        if item.quantity != 1.0 {
            tape.push_str("  ");
            tape.push_str(&numbers.price(item.price));
            tape.push_str(" * ");
            tape.push_str(&numbers.quantity(item.quantity, item.product.unit));
            tape.push(LINE_END);
        }

        Ok(())
    }

    fn present_discount(&self, tape: &mut String, discount: &Discount) -> PrinterResult<()> {
        let label = format!("{}({})", discount.description, discount.product.name);
        let value = self.config.number_format.price(discount.amount);
        self.push_line(tape, &label, &value)
    }

    fn present_total(&self, tape: &mut String, receipt: &Receipt) -> PrinterResult<()> {
        let value = self.config.number_format.price(receipt.total_price);
        self.push_line(tape, TOTAL_LABEL, &value)
    }

    fn push_line(&self, tape: &mut String, label: &str, value: &str) -> PrinterResult<()> {
        let columns = self.config.columns;
        if !fits(label, value, columns) {
            debug!(label, value, columns, "Line wider than tape");
        }

        let line = checked_line_pair(label, value, columns, self.config.overflow)?;
        tape.push_str(&line);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
