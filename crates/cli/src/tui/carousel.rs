// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel view state: card focus plus scroll geometry.
//!
//! Scroll units are terminal columns. The card row is composed at full
//! content width and clipped to the viewport window; the scroll metrics and
//! arrow visibility live in `shopfront_store::scroll`.

use shopfront_store::{ScrollMetrics, ScrollVisibility};
use unicode_width::UnicodeWidthChar;

use super::card::{CARD_HEIGHT, CARD_WIDTH};

/// Gutter between cards, in columns.
pub const CARD_GAP: usize = 2;

/// Columns from the start of one card to the start of the next.
pub const CARD_STRIDE: usize = CARD_WIDTH + CARD_GAP;

/// State for the carousel: which card has keyboard focus and where the
/// viewport is scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub metrics: ScrollMetrics,
    /// Focused card index (0-based)
    pub selected: usize,
    /// Number of cards
    pub total: usize,
}

impl CarouselState {
    /// Carousel over `total` cards shown through a `client_width`-column
    /// viewport, scrolled to the start with the first card focused.
    pub fn new(total: usize, client_width: u32) -> Self {
        let scroll_width = (total * CARD_STRIDE) as u32;
        Self {
            metrics: ScrollMetrics::new(scroll_width, client_width),
            selected: 0,
            total,
        }
    }

    /// Request one fixed-step scroll to the right (nav arrow / right key).
    pub fn scroll_next(&mut self) {
        self.metrics.scroll_next();
    }

    /// Request one fixed-step scroll to the left.
    pub fn scroll_prev(&mut self) {
        self.metrics.scroll_prev();
    }

    /// Move card focus forward (wraps at the end) and keep it visible.
    pub fn select_next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.selected = (self.selected + 1) % self.total;
        self.ensure_selected_visible();
    }

    /// Move card focus backward (wraps at the start) and keep it visible.
    pub fn select_prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        self.ensure_selected_visible();
    }

    /// Arrow visibility, recomputed from the current metrics.
    pub fn visibility(&self) -> ScrollVisibility {
        self.metrics.visibility()
    }

    /// Viewport width changed (terminal resize).
    pub fn set_client_width(&mut self, client_width: u32) {
        self.metrics.set_client_width(client_width);
    }

    /// Column span `[start, end)` of a card within the composed row.
    pub fn card_span(&self, index: usize) -> (usize, usize) {
        let start = index * CARD_STRIDE;
        (start, start + CARD_WIDTH)
    }

    /// Scroll just enough for the focused card to be fully in view.
    fn ensure_selected_visible(&mut self) {
        let (start, end) = self.card_span(self.selected);
        let view_start = self.metrics.scroll_left as usize;
        let view_end = view_start + self.metrics.client_width as usize;
        if start < view_start {
            self.metrics.scroll_to(start as u32);
        } else if end > view_end {
            let target = end.saturating_sub(self.metrics.client_width as usize);
            self.metrics.scroll_to(target as u32);
        }
    }
}

/// Join per-card line blocks into full-width row lines, one gutter between
/// cards (and after the last, so the row width equals `total × stride`).
pub fn compose_row(cards: &[Vec<String>]) -> Vec<String> {
    let gap = " ".repeat(CARD_GAP);
    (0..CARD_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for card in cards {
                line.push_str(card.get(row).map_or("", String::as_str));
                line.push_str(&gap);
            }
            line
        })
        .collect()
}

/// The visible slice of the composed row for the given metrics.
pub fn visible_row(cards: &[Vec<String>], metrics: &ScrollMetrics) -> Vec<String> {
    compose_row(cards)
        .iter()
        .map(|line| {
            clip_columns(
                line,
                metrics.scroll_left as usize,
                metrics.client_width as usize,
            )
        })
        .collect()
}

/// Clip a line to display columns `[start, start + width)`.
///
/// A wide character straddling either window edge is replaced by spaces for
/// the columns it covers inside the window.
pub fn clip_columns(line: &str, start: usize, width: usize) -> String {
    let end = start + width;
    let mut col = 0usize;
    let mut out = String::new();
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        let ch_start = col;
        let ch_end = col + w;
        col = ch_end;
        if ch_end <= start {
            continue;
        }
        if ch_start >= end {
            break;
        }
        if ch_start < start || ch_end > end {
            for _ in ch_start.max(start)..ch_end.min(end) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
