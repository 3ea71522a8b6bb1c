//! # Receipt Input
//!
//! Reads receipts handed over as JSON by the assembly side.
//!
//! A document missing a referenced entity (an item without its product, a
//! discount without its product) is rejected here with
//! [`PrinterError::InvalidReceipt`], before anything is formatted.

use checkout_core::Receipt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{PrinterError, PrinterResult};

/// Parses a JSON receipt document.
///
/// ## Example
/// ```rust
/// use checkout_printer::input::parse_receipt;
///
/// let receipt = parse_receipt(r#"{"total_price": 1200}"#).unwrap();
/// assert_eq!(receipt.total_price.cents(), 1200);
/// ```
pub fn parse_receipt(json: &str) -> PrinterResult<Receipt> {
    ensure_not_blank(json)?;
    let receipt: Receipt = serde_json::from_str(json)?;
    debug!(
        items = receipt.items.len(),
        discounts = receipt.discounts.len(),
        "Parsed receipt"
    );
    Ok(receipt)
}

/// Reads a receipt from a file, or from stdin when `path` is `None` or `-`.
pub fn read_receipt(path: Option<&Path>) -> PrinterResult<Receipt> {
    match path {
        Some(p) if p != Path::new("-") => {
            debug!(path = ?p, "Reading receipt from file");
            let contents = std::fs::read_to_string(p)?;
            parse_receipt(&contents)
        }
        _ => {
            debug!("Reading receipt from stdin");
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            parse_receipt(&contents)
        }
    }
}

/// Rejects an empty document with a clearer message than the JSON parser's.
fn ensure_not_blank(json: &str) -> PrinterResult<()> {
    if json.trim().is_empty() {
        return Err(PrinterError::InvalidReceipt("empty document".to_string()));
    }
    Ok(())
}
