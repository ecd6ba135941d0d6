// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scroll geometry for the carousel navigation arrows.
//!
//! The container's reported metrics (offset, total size, visible size) are
//! stored as plain data; arrow visibility is recomputed from them by a pure
//! function on every scroll event and after programmatic scrolls — never
//! patched incrementally.

use serde::{Deserialize, Serialize};

/// Fixed offset for one programmatic scroll request, in scroll units.
pub const SCROLL_STEP: u32 = 320;

/// Right-edge tolerance: the right arrow disappears once the offset is
/// within this many units of the end. Kept at the original's literal 10.
pub const RIGHT_EDGE_TOLERANCE: u32 = 10;

/// Scroll position and extent of the carousel surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current horizontal offset
    pub scroll_left: u32,
    /// Total scrollable width of the content
    pub scroll_width: u32,
    /// Width of the visible viewport
    pub client_width: u32,
}

/// Whether each navigation arrow should render. Two independent flags;
/// no coupling, no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollVisibility {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollMetrics {
    /// Metrics for content of `scroll_width` shown through a
    /// `client_width` viewport, starting at offset 0.
    pub fn new(scroll_width: u32, client_width: u32) -> Self {
        Self {
            scroll_left: 0,
            scroll_width,
            client_width,
        }
    }

    /// Largest valid offset. Zero when the content fits the viewport.
    pub fn max_scroll(&self) -> u32 {
        self.scroll_width.saturating_sub(self.client_width)
    }

    /// Scroll one step to the right. Clamps at the surface edge, so
    /// requesting a scroll past the end is a safe no-op.
    pub fn scroll_next(&mut self) {
        self.scroll_left = self
            .scroll_left
            .saturating_add(SCROLL_STEP)
            .min(self.max_scroll());
    }

    /// Scroll one step to the left, clamping at offset 0.
    pub fn scroll_prev(&mut self) {
        self.scroll_left = self.scroll_left.saturating_sub(SCROLL_STEP);
    }

    /// Set an absolute offset, clamped to the valid range.
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_left = offset.min(self.max_scroll());
    }

    /// Update the viewport width (terminal resize), keeping the offset
    /// within the new valid range.
    pub fn set_client_width(&mut self, client_width: u32) {
        self.client_width = client_width;
        self.scroll_left = self.scroll_left.min(self.max_scroll());
    }

    /// Recompute arrow visibility from the current metrics.
    ///
    /// Left arrow iff the offset is past 0; right arrow iff the offset is
    /// more than [`RIGHT_EDGE_TOLERANCE`] units short of the end. Signed
    /// math so content narrower than the viewport yields `false` rather
    /// than wrapping.
    pub fn visibility(&self) -> ScrollVisibility {
        let right_limit = i64::from(self.scroll_width)
            - i64::from(self.client_width)
            - i64::from(RIGHT_EDGE_TOLERANCE);
        ScrollVisibility {
            can_scroll_left: self.scroll_left > 0,
            can_scroll_right: i64::from(self.scroll_left) < right_limit,
        }
    }
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod tests;
