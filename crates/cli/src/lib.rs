// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shopfront
//!
//! A terminal storefront: a horizontally scrollable product carousel with an
//! add-to-cart affordance and a floating cart summary, rendered with the
//! iocraft component model. A non-interactive `--list` mode prints the
//! catalog as text or JSON.

#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod output;
/// Re-exported state types from the shopfront-store crate.
pub mod store {
    pub use shopfront_store::{
        format_rupees, Cart, CartLine, Product, ScrollMetrics, ScrollVisibility,
        RIGHT_EDGE_TOLERANCE, SCROLL_STEP,
    };
    pub use shopfront_store::catalog;
}
#[doc(hidden)]
pub mod tui;
