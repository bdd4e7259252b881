use serde::{Deserialize, Serialize};
use crate::domain::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// A shopper's cart. Lives with the session, never in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit, merging with an existing line for the same product.
    pub fn add(&mut self, product: Product) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { product, quantity: 1 }),
        }
    }

    pub fn remove(&mut self, product_id: u64) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Sets the quantity of a line; zero removes it.
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price times quantity over all lines, `None` on overflow.
    pub fn total_price(&self) -> Option<u64> {
        self.lines.iter().try_fold(0u64, |total, line| {
            line.product
                .price
                .checked_mul(u64::from(line.quantity))
                .and_then(|subtotal| total.checked_add(subtotal))
        })
    }
}
