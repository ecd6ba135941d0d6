// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use rstest::rstest;

#[rstest]
#[case(0, "₹0")]
#[case(999, "₹999")]
#[case(1000, "₹1,000")]
#[case(7499, "₹7,499")]
#[case(12999, "₹12,999")]
#[case(100000, "₹100,000")]
#[case(1234567, "₹1,234,567")]
fn format_rupees_groups_thousands(#[case] amount: u64, #[case] expected: &str) {
    assert_eq!(format_rupees(amount), expected);
}

#[test]
fn display_price_uses_rupee_formatting() {
    let p = Product::new("x", "X", 7499, "s", "https://example.com/x.jpg");
    assert_eq!(p.display_price(), "₹7,499");
}

#[test]
fn product_serializes_round_trip() {
    let p = Product::new("x", "X Phone", 5599, "shop.example", "https://example.com/x.jpg");
    let json = serde_json::to_string(&p).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
