//! # Domain Types
//!
//! The receipt model handed to the printer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │  ReceiptItem    │   │    Discount     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items[]   ─────┼──►│  product        │   │  product        │       │
//! │  │  discounts[] ───┼───┼─────────────────┼──►│  description    │       │
//! │  │  total_price    │   │  quantity (f64) │   │  amount         │       │
//! │  └─────────────────┘   │  price          │   └─────────────────┘       │
//! │                        │  total_price    │                              │
//! │  ┌─────────────────┐   └─────────────────┘   ┌─────────────────┐       │
//! │  │    Product      │                         │  ProductUnit    │       │
//! │  │  id (UUID)      │                         │  Each           │       │
//! │  │  name           │                         │  Kilo           │       │
//! │  │  unit           │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Items and discounts print in insertion order. Nothing here sorts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_product_name;

// =============================================================================
// Product Unit
// =============================================================================

/// How a product is counted at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Sold in whole, countable units.
    #[default]
    Each,
    /// Sold by weight; quantity is continuous.
    Kilo,
}

impl ProductUnit {
    /// Returns true for discrete ("each") units.
    #[inline]
    pub const fn is_discrete(&self) -> bool {
        matches!(self, ProductUnit::Each)
    }
}

impl std::fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductUnit::Each => write!(f, "each"),
            ProductUnit::Kilo => write!(f, "kilo"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as it appears on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4). Empty when the source did not carry one.
    #[serde(default)]
    pub id: String,

    /// Display name printed on the tape.
    pub name: String,

    /// Unit of measure.
    pub unit: ProductUnit,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            unit,
        }
    }

    /// Creates a product after validating its name.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Product, ProductUnit};
    ///
    /// assert!(Product::try_new("Flour", ProductUnit::Kilo).is_ok());
    /// assert!(Product::try_new("", ProductUnit::Each).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, unit: ProductUnit) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        Ok(Self::new(name, unit))
    }
}

// =============================================================================
// Receipt Item
// =============================================================================

/// One purchased product line.
///
/// `total_price` is computed upstream; the printer prints it as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub product: Product,
    /// Quantity bought. Fractional for measured units.
    pub quantity: f64,
    /// Unit price.
    pub price: Money,
    /// Line total (price × quantity).
    pub total_price: Money,
}

impl ReceiptItem {
    /// Creates an item with an already computed line total.
    pub fn new(product: Product, quantity: f64, price: Money, total_price: Money) -> Self {
        Self {
            product,
            quantity,
            price,
            total_price,
        }
    }

    /// Creates an item and computes `price × quantity`, rounded to the cent.
    pub fn priced(product: Product, quantity: f64, price: Money) -> CoreResult<Self> {
        let total_price = price.multiply_measured(quantity)?;
        Ok(Self::new(product, quantity, price, total_price))
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A price reduction tied to one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub product: Product,
    /// Human-readable offer text, e.g. "3 for 2".
    pub description: String,
    /// Positive magnitude subtracted from the total.
    pub amount: Money,
}

impl Discount {
    pub fn new(product: Product, description: impl Into<String>, amount: Money) -> Self {
        Self {
            product,
            description: description.into(),
            amount,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A finished purchase: items, discounts and the total to print.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub items: Vec<ReceiptItem>,

    #[serde(default)]
    pub discounts: Vec<Discount>,

    /// Amount due. Set by whoever assembles the receipt.
    pub total_price: Money,
}

impl Receipt {
    /// Creates an empty receipt with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn add_item(&mut self, item: ReceiptItem) {
        self.items.push(item);
    }

    /// Appends an item whose line total is computed from `price × quantity`.
    pub fn add_product(&mut self, product: Product, quantity: f64, price: Money) -> CoreResult<()> {
        let item = ReceiptItem::priced(product, quantity, price)?;
        self.add_item(item);
        Ok(())
    }

    /// Appends a discount.
    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// Overwrites the stored total.
    pub fn set_total_price(&mut self, total_price: Money) {
        self.total_price = total_price;
    }

    /// Sum of item totals minus sum of discount amounts.
    ///
    /// Only an assembly helper: the printer always prints `total_price`.
    pub fn computed_total(&self) -> Money {
        let items: Money = self.items.iter().map(|item| item.total_price).sum();
        let discounts: Money = self.discounts.iter().map(|d| d.amount).sum();
        items - discounts
    }

    /// Returns true when nothing was bought.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.discounts.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn flour() -> Product {
        Product::new("Flour", ProductUnit::Kilo)
    }

    #[test]
    fn test_product_new_generates_id() {
        let a = Product::new("Apple", ProductUnit::Each);
        let b = Product::new("Apple", ProductUnit::Each);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_try_new_validates_name() {
        assert!(Product::try_new("Flour", ProductUnit::Kilo).is_ok());
        let err = Product::try_new("  ", ProductUnit::Each).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_unit_default_and_display() {
        assert_eq!(ProductUnit::default(), ProductUnit::Each);
        assert!(ProductUnit::Each.is_discrete());
        assert!(!ProductUnit::Kilo.is_discrete());
        assert_eq!(ProductUnit::Kilo.to_string(), "kilo");
    }

    #[test]
    fn test_priced_item() {
        let item = ReceiptItem::priced(flour(), 2.5, Money::from_cents(120)).unwrap();
        assert_eq!(item.total_price.cents(), 300);
        assert!(ReceiptItem::priced(flour(), f64::NAN, Money::from_cents(120)).is_err());
    }

    #[test]
    fn test_receipt_assembly_keeps_order() {
        let mut receipt = Receipt::new();
        assert!(receipt.is_empty());

        receipt
            .add_product(Product::new("Apple", ProductUnit::Each), 3.0, Money::from_cents(50))
            .unwrap();
        receipt.add_product(flour(), 2.5, Money::from_cents(120)).unwrap();
        receipt.add_discount(Discount::new(flour(), "Bulk discount", Money::from_cents(50)));

        let names: Vec<_> = receipt.items.iter().map(|i| i.product.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Flour"]);
        assert_eq!(receipt.computed_total().cents(), 150 + 300 - 50);

        // Stored total is independent of the computed one.
        assert!(receipt.total_price.is_zero());
        receipt.set_total_price(receipt.computed_total());
        assert_eq!(receipt.total_price.cents(), 400);
    }

    #[test]
    fn test_receipt_from_json() {
        let json = r#"{
            "items": [
                {"product": {"name": "Apple", "unit": "each"},
                 "quantity": 3.0, "price": 50, "total_price": 150}
            ],
            "total_price": 150
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.items.len(), 1);
        assert!(receipt.discounts.is_empty());
        assert_eq!(receipt.items[0].product.id, "");
        assert_eq!(receipt.items[0].product.unit, ProductUnit::Each);
    }

    #[test]
    fn test_receipt_json_requires_product() {
        let json = r#"{
            "discounts": [{"description": "3 for 2", "amount": 50}],
            "total_price": 0
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
