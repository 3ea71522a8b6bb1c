//! # checkout-core: Receipt Domain Types
//!
//! The data model a checkout hands to the receipt printer. Everything here is
//! pure: no I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Receipt Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Receipt assembly (cart, offers, discounts)             │   │
//! │  │     builds Receipt { items, discounts, total_price }            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │                  │   │
//! │  │   │  Receipt  │  │  (cents)  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &Receipt (read-only)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              checkout-printer (ReceiptPrinter)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ReceiptItem, Discount, Receipt
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Money, Product, ProductUnit, Receipt};
//!
//! let apple = Product::new("Apple", ProductUnit::Each);
//!
//! let mut receipt = Receipt::new();
//! receipt.add_product(apple, 3.0, Money::from_cents(50)).unwrap();
//! receipt.set_total_price(receipt.computed_total());
//!
//! assert_eq!(receipt.total_price.cents(), 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
