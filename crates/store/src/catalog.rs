// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in product catalog.
//!
//! Six fixed records, the only data source of the app. Trusted static data:
//! no loader, no validation.

use crate::product::Product;

/// The built-in "mobiles under ₹15,000" catalog, in display order.
pub fn builtin() -> Vec<Product> {
    vec![
        Product::new(
            "rm-narzo-n53",
            "Realme Narzo N53",
            7499,
            "Gostor.com + others",
            "https://m.media-amazon.com/images/I/71DSxfKzkJL.jpg",
        ),
        Product::new(
            "realme-c21y",
            "Realme C21Y",
            5599,
            "Fliptwirls.com + others",
            "https://m.media-amazon.com/images/I/71yP50Z4KrL._AC_UF894,1000_QL80_.jpg",
        ),
        Product::new(
            "motorola-g31",
            "Motorola G31",
            7417,
            "amazon.in + others",
            "https://m.media-amazon.com/images/I/51UmP5fdZzL._AC_UF894,1000_QL80_.jpg",
        ),
        Product::new(
            "xiaomi-redmi-10",
            "Xiaomi Redmi 10",
            9299,
            "amazon.in + others",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRhFSxkEYE9-6Ao1bAlpAgjMMGEqDeeEB_rFA&s",
        ),
        Product::new(
            "samsung-m13",
            "Samsung Galaxy M13",
            8999,
            "flipkart.com + others",
            "https://m.media-amazon.com/images/I/81KS+-vrBWL._AC_UF894,1000_QL80_.jpg",
        ),
        Product::new(
            "poco-m4",
            "POCO M4 Pro",
            12999,
            "amazon.in + others",
            "https://m.media-amazon.com/images/I/71dQzKo3XiL._AC_UF894,1000_QL80_.jpg",
        ),
    ]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
