// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shopfront state library.
//!
//! Pure data and state transitions for the shopfront carousel: the static
//! product catalog, the shopping cart, and the scroll-geometry math that
//! drives the navigation arrows. No I/O and no terminal dependency live
//! here; the `shopfront` binary crate owns rendering and input.

pub mod cart;
pub mod catalog;
pub mod product;
pub mod scroll;

pub use cart::{Cart, CartLine};
pub use product::{format_rupees, Product};
pub use scroll::{ScrollMetrics, ScrollVisibility, RIGHT_EDGE_TOLERANCE, SCROLL_STEP};
