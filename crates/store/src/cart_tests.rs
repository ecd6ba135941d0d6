// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use crate::catalog;
use proptest::prelude::*;
use std::collections::HashMap;

fn phone(id: &str, price: u32) -> Product {
    Product::new(id, "Test Phone", price, "test.shop", "https://example.com/p.jpg")
}

#[test]
fn new_cart_is_empty() {
    let cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.line_count(), 0);
    assert_eq!(cart.total(), 0);
}

#[test]
fn add_appends_line_with_quantity_one() {
    let mut cart = Cart::new();
    cart.add(&phone("a", 100));

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].quantity, 1);
    assert_eq!(cart.lines()[0].product.id, "a");
}

#[test]
fn adding_same_product_twice_increments_instead_of_duplicating() {
    let mut cart = Cart::new();
    let p = phone("a", 100);
    cart.add(&p);
    cart.add(&p);

    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
}

#[test]
fn add_preserves_insertion_order() {
    let mut cart = Cart::new();
    cart.add(&phone("b", 1));
    cart.add(&phone("a", 2));
    cart.add(&phone("b", 1));
    cart.add(&phone("c", 3));

    let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn increment_leaves_other_fields_unchanged() {
    let mut cart = Cart::new();
    let p = phone("a", 7499);
    cart.add(&p);
    cart.add(&p);

    let line = &cart.lines()[0];
    assert_eq!(line.product, p);
}

#[test]
fn total_is_sum_of_price_times_quantity() {
    let mut cart = Cart::new();
    let a = phone("a", 7499);
    let b = phone("b", 5599);
    cart.add(&a);
    cart.add(&a);
    cart.add(&b);

    assert_eq!(cart.total(), 7499 * 2 + 5599);
}

#[test]
fn line_count_is_distinct_lines_not_units() {
    let mut cart = Cart::new();
    let a = phone("a", 10);
    cart.add(&a);
    cart.add(&a);
    cart.add(&a);
    cart.add(&phone("b", 20));

    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.unit_count(), 4);
}

#[test]
fn quantity_of_reports_per_product_count() {
    let mut cart = Cart::new();
    let a = phone("a", 10);
    cart.add(&a);
    cart.add(&a);

    assert_eq!(cart.quantity_of("a"), 2);
    assert_eq!(cart.quantity_of("missing"), 0);
}

#[test]
fn works_over_the_builtin_catalog() {
    let catalog = catalog::builtin();
    let mut cart = Cart::new();
    for product in &catalog {
        cart.add(product);
    }

    assert_eq!(cart.line_count(), catalog.len());
    let expected: u64 = catalog.iter().map(|p| u64::from(p.price)).sum();
    assert_eq!(cart.total(), expected);
}

proptest! {
    /// For any sequence of adds, the cart holds one line per distinct id,
    /// each quantity equals that id's add count, and the total matches.
    #[test]
    fn add_sequences_preserve_counts_and_total(
        picks in proptest::collection::vec(0usize..6, 0..64),
    ) {
        let catalog = catalog::builtin();
        let mut cart = Cart::new();
        let mut counts: HashMap<String, u32> = HashMap::new();

        for &i in &picks {
            cart.add(&catalog[i]);
            *counts.entry(catalog[i].id.clone()).or_insert(0) += 1;
        }

        prop_assert_eq!(cart.line_count(), counts.len());
        for line in cart.lines() {
            prop_assert_eq!(line.quantity, counts[&line.product.id]);
        }

        let expected: u64 = counts
            .iter()
            .map(|(id, n)| {
                let price = catalog.iter().find(|p| &p.id == id).map(|p| p.price);
                u64::from(price.unwrap_or(0)) * u64::from(*n)
            })
            .sum();
        prop_assert_eq!(cart.total(), expected);
    }
}
