// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Product record and price formatting.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Products are trusted static data: constructed once by the catalog and
/// never mutated. `price` is in the smallest currency unit (whole rupees).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, e.g. `rm-narzo-n53`
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in whole rupees
    pub price: u32,
    /// Free-text listing source, e.g. `amazon.in + others`
    pub source: String,
    /// Product image URL
    pub image_url: String,
}

impl Product {
    pub fn new(id: &str, name: &str, price: u32, source: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            source: source.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Price formatted for display, e.g. `₹7,499`.
    pub fn display_price(&self) -> String {
        format_rupees(u64::from(self.price))
    }
}

/// Format an amount in whole rupees with thousands separators.
///
/// `7499` → `₹7,499`. Totals can exceed `u32`, so this takes `u64`.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
