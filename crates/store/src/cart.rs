// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shopping cart state.
//!
//! An ordered collection of cart lines, one per distinct product id.
//! Created empty, mutated only by [`Cart::add`], dropped with the view.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// One cart entry: a product and its selected quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Positive; starts at 1 and only ever increments.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: price × quantity.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// The cart: an insertion-ordered sequence of lines.
///
/// Invariant: at most one line per product id. Adding an already-present
/// product increments its quantity rather than duplicating the line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line's quantity if the product is already in
    /// the cart, otherwise appends a new line with quantity 1. Total over
    /// any valid product; cannot fail.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (the cart badge count — not total units).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Cart total: Σ price × quantity over all lines.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Quantity currently in the cart for a product id (0 if absent).
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[path = "cart_tests.rs"]
mod tests;
