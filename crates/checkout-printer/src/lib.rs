//! # checkout-printer: Receipt Tape Layout
//!
//! Turns a finished [`Receipt`](checkout_core::Receipt) into fixed-width
//! text for a narrow paper tape.
//!
//! ## Module Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout-printer                                  │
//! │                                                                         │
//! │   input ──► Receipt ──► printer::ReceiptPrinter ──► String (tape)      │
//! │                              │                                          │
//! │                   ┌──────────┴──────────┐                               │
//! │                   ▼                     ▼                               │
//! │              layout                numeric                              │
//! │         label ···· value       prices, quantities                      │
//! │                                                                         │
//! │   config: PrinterConfig (columns, overflow, number format)             │
//! │   error:  PrinterError                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use checkout_core::{Discount, Money, Product, ProductUnit, Receipt};
//! use checkout_printer::ReceiptPrinter;
//!
//! let flour = Product::new("Flour", ProductUnit::Kilo);
//!
//! let mut receipt = Receipt::new();
//! receipt.add_product(flour.clone(), 2.5, Money::from_cents(120)).unwrap();
//! receipt.add_discount(Discount::new(flour, "Bulk discount", Money::from_cents(50)));
//! receipt.set_total_price(receipt.computed_total());
//!
//! let tape = ReceiptPrinter::default().format(&receipt).unwrap();
//! assert!(tape.contains("  1.20 * 2.500\n"));
//! assert!(tape.ends_with("2.50\n"));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod numeric;
pub mod printer;

pub use config::PrinterConfig;
pub use error::{PrinterError, PrinterResult};
pub use layout::OverflowPolicy;
pub use numeric::NumberFormat;
pub use printer::ReceiptPrinter;

/// Tape width used when nothing else is configured.
pub const DEFAULT_COLUMNS: usize = 40;
