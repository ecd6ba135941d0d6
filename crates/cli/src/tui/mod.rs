// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal user interface for Shopfront.
//!
//! A horizontally scrollable product carousel with an add-to-cart
//! affordance and a floating cart summary. Built on the iocraft framework
//! with a declarative component model; all rendering happens in app.rs via
//! the element! macro, over pure line-composition helpers in card.rs and
//! carousel.rs.

mod app;
pub mod card;
pub mod carousel;
pub mod colors;
pub mod separator;

pub use app::{ExitReason, TuiApp, TuiAppState, TuiConfig};
pub use carousel::CarouselState;
