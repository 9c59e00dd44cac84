//! Session-scoped shopping cart.
//!
//! The cart is a plain list of lines. Adding a product always appends a new
//! line with quantity 1; adding the same product twice yields two separate
//! lines, never a merged quantity. The Wonderland API recomputes the real
//! total at checkout, so the cart total here is display-only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::{OrderItem, Product};
use wonderland_core::ProductId;

/// One cart line: a product snapshot at the moment it was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Name at add time, for display.
    pub name: String,
    /// Unit price at add time, for display.
    pub price: Decimal,
    /// Image shown in the cart drawer.
    pub image_url: String,
}

/// The shopping cart stored in the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Append a line for the given product. Lines are never merged.
    pub fn add(&mut self, product: &Product) {
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        });
    }

    /// Remove the line at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (each line has quantity 1, so this is also the item count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display total: the sum of line prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Convert the cart into order line items for checkout.
    ///
    /// Each cart line becomes its own item with quantity 1, preserving
    /// duplicate lines as duplicate items.
    #[must_use]
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                quantity: 1,
            })
            .collect()
    }
}
