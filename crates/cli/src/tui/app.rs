// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI application state and main iocraft component.

use iocraft::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

use shopfront_store::{format_rupees, Cart, Product};
use unicode_width::UnicodeWidthStr;

use super::card::render_card;
use super::carousel::{visible_row, CarouselState};
use super::colors::{
    styled_added_notice, styled_cart_badge, styled_gray_text, styled_separator, styled_title,
};
use super::separator::make_separator;
use crate::cli::DEFAULT_TITLE;

/// Configuration for TUI behavior
#[derive(Clone, Debug)]
pub struct TuiConfig {
    /// Shop title shown in the header
    pub title: String,
    /// Whether output is connected to a TTY
    pub is_tty: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            is_tty: false,
        }
    }
}

/// Reason for app exit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitReason {
    UserQuit,      // q or Ctrl+D
    Interrupted,   // Ctrl+C
    Completed,     // Normal completion
    Error(String), // Error occurred
}

/// Default terminal width when not detected
pub const DEFAULT_TERMINAL_WIDTH: u16 = 120;

/// Width of the floating cart summary panel, in columns.
const CART_PANEL_WIDTH: usize = 36;

/// Snapshot of app state for rendering (avoids borrow issues)
#[derive(Clone, Debug)]
pub struct RenderState {
    pub catalog: Vec<Product>,
    pub cart: Cart,
    pub carousel: CarouselState,
    pub title: String,
    pub is_tty: bool,
    pub terminal_width: u16,
    /// Transient "Added …" notice after the last add-to-cart
    pub last_added: Option<String>,
}

/// Shared state for the TUI app that can be accessed from outside the component
#[derive(Clone)]
pub struct TuiAppState {
    inner: Arc<Mutex<TuiAppStateInner>>,
}

struct TuiAppStateInner {
    /// The static product catalog (never mutated)
    catalog: Vec<Product>,

    /// Cart state, mutated only by add-to-cart
    cart: Cart,

    /// Card focus and scroll position
    carousel: CarouselState,

    /// Configuration
    config: TuiConfig,

    /// Current terminal width
    terminal_width: u16,

    /// Notice text after the last add-to-cart
    last_added: Option<String>,

    /// Whether app should exit
    should_exit: bool,

    /// Exit reason (for testing)
    exit_reason: Option<ExitReason>,
}

impl TuiAppState {
    /// Create a new TUI app state over the given catalog
    pub fn new(catalog: Vec<Product>, config: TuiConfig) -> Self {
        let terminal_width = crossterm::terminal::size()
            .map(|(w, _)| w)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        let carousel = CarouselState::new(catalog.len(), u32::from(terminal_width));
        Self {
            inner: Arc::new(Mutex::new(TuiAppStateInner {
                catalog,
                cart: Cart::new(),
                carousel,
                config,
                terminal_width,
                last_added: None,
                should_exit: false,
                exit_reason: None,
            })),
        }
    }

    /// Get the render state snapshot
    pub fn render_state(&self) -> RenderState {
        let inner = self.inner.lock();
        RenderState {
            catalog: inner.catalog.clone(),
            cart: inner.cart.clone(),
            carousel: inner.carousel,
            title: inner.config.title.clone(),
            is_tty: inner.config.is_tty,
            terminal_width: inner.terminal_width,
            last_added: inner.last_added.clone(),
        }
    }

    /// Get a snapshot of the cart
    pub fn cart(&self) -> Cart {
        self.inner.lock().cart.clone()
    }

    /// Get the current carousel state
    pub fn carousel(&self) -> CarouselState {
        self.inner.lock().carousel
    }

    /// Check if app should exit
    pub fn should_exit(&self) -> bool {
        self.inner.lock().should_exit
    }

    /// Get exit reason
    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.inner.lock().exit_reason.clone()
    }

    /// Request app exit
    pub fn exit(&self, reason: ExitReason) {
        let mut inner = self.inner.lock();
        inner.should_exit = true;
        inner.exit_reason = Some(reason);
    }

    /// Update terminal width (called on resize); the carousel viewport
    /// follows and visibility is recomputed at the next render.
    pub fn set_terminal_width(&self, width: u16) {
        let mut inner = self.inner.lock();
        inner.terminal_width = width;
        inner.carousel.set_client_width(u32::from(width));
    }

    /// Handle a key event. Every transition completes synchronously here.
    pub fn handle_key_event(&self, key: KeyEvent) {
        let mut inner = self.inner.lock();

        match (key.modifiers, key.code) {
            // Ctrl+C - Interrupt
            (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
                inner.should_exit = true;
                inner.exit_reason = Some(ExitReason::Interrupted);
            }

            // Ctrl+D or q - Quit
            (m, KeyCode::Char('d')) if m.contains(KeyModifiers::CONTROL) => {
                inner.should_exit = true;
                inner.exit_reason = Some(ExitReason::UserQuit);
            }
            (_, KeyCode::Char('q')) => {
                inner.should_exit = true;
                inner.exit_reason = Some(ExitReason::UserQuit);
            }

            // Left/Right arrows - fixed-step scroll (the nav arrows)
            (_, KeyCode::Left) => {
                inner.carousel.scroll_prev();
            }
            (_, KeyCode::Right) => {
                inner.carousel.scroll_next();
            }

            // Tab / l - focus next card
            (_, KeyCode::Tab) | (_, KeyCode::Char('l')) => {
                inner.carousel.select_next();
            }

            // Shift+Tab / h - focus previous card
            (_, KeyCode::BackTab) | (_, KeyCode::Char('h')) => {
                inner.carousel.select_prev();
            }

            // Enter / a - add the focused product to the cart
            (_, KeyCode::Enter) | (_, KeyCode::Char('a')) => {
                let index = inner.carousel.selected;
                Self::add_to_cart_inner(&mut inner, index);
            }

            // 1-9 - add the nth product directly
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let index = (c as usize) - ('1' as usize);
                if index < inner.catalog.len() {
                    Self::add_to_cart_inner(&mut inner, index);
                }
            }

            _ => {}
        }
    }

    /// Add one unit of `catalog[index]` and refresh the notice line.
    fn add_to_cart_inner(inner: &mut TuiAppStateInner, index: usize) {
        let Some(product) = inner.catalog.get(index).cloned() else {
            return;
        };
        inner.cart.add(&product);
        let qty = inner.cart.quantity_of(&product.id);
        inner.last_added = Some(format!("Added {} (×{} in cart)", product.name, qty));
    }
}

/// Props for the main App component
#[derive(Default, Props)]
pub struct AppProps {
    pub state: Option<TuiAppState>,
}

/// Main TUI App component using iocraft
#[component]
pub fn App(mut hooks: Hooks, props: &AppProps) -> impl Into<AnyElement<'static>> {
    // Get state from props with fallback error display
    let Some(state) = props.state.clone() else {
        return element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Error: TuiAppState must be provided via props")
            }
        };
    };

    let mut should_exit = hooks.use_state(|| false);
    // Render counter to force re-renders when state changes
    let mut render_counter = hooks.use_state(|| 0u64);
    let state_clone = state.clone();

    // Handle terminal events (keyboard input and resize)
    hooks.use_terminal_events({
        let state = state.clone();
        move |event| match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.handle_key_event(key);
                // Increment counter to trigger re-render
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
                if state.should_exit() {
                    should_exit.set(true);
                }
            }
            TerminalEvent::Resize(width, _height) => {
                state.set_terminal_width(width);
                // Increment counter to trigger re-render
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            _ => {}
        }
    });

    // Get current render state
    let render_state = state_clone.render_state();

    // Exit if needed
    let should_exit_val = should_exit.read();
    if *should_exit_val || state_clone.should_exit() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            #(render_main_content(&render_state))
        }
    }
}

/// Render the whole storefront view.
fn render_main_content(state: &RenderState) -> AnyElement<'static> {
    let width = state.terminal_width as usize;
    let use_colors = state.is_tty;

    let header = header_line(state, width);
    let subtitle = {
        let text = format!("  {} products · terminal storefront", state.catalog.len());
        if use_colors {
            styled_gray_text(&text)
        } else {
            text
        }
    };

    // Compose cards at full content width and clip to the viewport.
    let cards: Vec<Vec<String>> = state
        .catalog
        .iter()
        .enumerate()
        .map(|(i, p)| {
            render_card(
                p,
                i == state.carousel.selected,
                state.cart.quantity_of(&p.id),
            )
        })
        .collect();
    let row = visible_row(&cards, &state.carousel.metrics);

    let nav = nav_line(state, width);
    let notice = notice_line(state);

    let separator = if use_colors {
        styled_separator(width)
    } else {
        make_separator(width)
    };
    let status_text =
        "  ←/→ scroll · tab focus · enter add to cart · 1-6 quick add · q quit".to_string();
    let status_bar = if use_colors {
        styled_gray_text(&status_text)
    } else {
        status_text
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            // Header (NoWrap to preserve ANSI)
            // Note: Empty first element to work around iocraft first-element rendering issue
            Text(content: "")
            Text(content: header, wrap: TextWrap::NoWrap)
            Text(content: subtitle, wrap: TextWrap::NoWrap)
            Text(content: "")

            // The carousel slice
            #(row.into_iter().map(|line| {
                element! {
                    Text(content: line, wrap: TextWrap::NoWrap)
                }
            }).collect::<Vec<_>>())

            // Nav arrows, derived from scroll geometry on every render
            Text(content: nav, wrap: TextWrap::NoWrap)
            #(notice)

            // Floating cart summary (only when the cart has lines)
            #(render_cart_panel(state, width))

            // Status bar behind a separator (NoWrap to preserve ANSI)
            Text(content: separator, wrap: TextWrap::NoWrap)
            Text(content: status_bar, wrap: TextWrap::NoWrap)
        }
    }
    .into()
}

/// Header: title at the left edge, cart badge at the right edge.
fn header_line(state: &RenderState, width: usize) -> String {
    let left_plain = format!("✓ {}", state.title);
    let right_plain = format!("cart ({})", state.cart.line_count());
    let pad = padding_between(&left_plain, &right_plain, width);

    if state.is_tty {
        format!(
            "{}{}{}",
            styled_title(&state.title),
            pad,
            styled_cart_badge(state.cart.line_count()),
        )
    } else {
        format!("{}{}{}", left_plain, pad, right_plain)
    }
}

/// Nav indicator row: `‹` and `›` at the edges per visibility flag, card
/// position centered.
fn nav_line(state: &RenderState, width: usize) -> String {
    let vis = state.carousel.visibility();
    let left = if vis.can_scroll_left { "‹" } else { " " };
    let right = if vis.can_scroll_right { "›" } else { " " };
    let center_plain = format!("card {}/{}", state.carousel.selected + 1, state.carousel.total);

    let inner = width.saturating_sub(2);
    let center_w = UnicodeWidthStr::width(center_plain.as_str());
    if inner <= center_w {
        return format!("{}{}{}", left, center_plain, right);
    }
    let lead = (inner - center_w) / 2;
    let trail = inner - center_w - lead;
    let center = if state.is_tty {
        styled_gray_text(&center_plain)
    } else {
        center_plain
    };
    format!(
        "{}{}{}{}{}",
        left,
        " ".repeat(lead),
        center,
        " ".repeat(trail),
        right,
    )
}

/// Transient "Added …" notice, or an empty element.
fn notice_line(state: &RenderState) -> AnyElement<'static> {
    let Some(ref text) = state.last_added else {
        return element! { View {} }.into();
    };
    let line = format!("  ⏺ {}", text);
    let content = if state.is_tty {
        styled_added_notice(&line)
    } else {
        line
    };
    element! {
        Text(content: content, wrap: TextWrap::NoWrap)
    }
    .into()
}

/// Floating cart summary panel, right-aligned under the carousel.
fn render_cart_panel(state: &RenderState, width: usize) -> AnyElement<'static> {
    if state.cart.is_empty() {
        return element! { View {} }.into();
    }

    let panel = cart_panel_lines(&state.cart);
    let indent = " ".repeat(width.saturating_sub(CART_PANEL_WIDTH));

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "")
            #(panel.into_iter().map(|line| {
                let content = format!("{}{}", indent, line);
                element! {
                    Text(content: content, wrap: TextWrap::NoWrap)
                }
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

/// Compose the cart summary as fixed-width boxed lines.
fn cart_panel_lines(cart: &Cart) -> Vec<String> {
    let inner = CART_PANEL_WIDTH - 4;
    let mut lines = Vec::new();

    lines.push(format!(
        "╭─ Cart {}╮",
        "─".repeat(CART_PANEL_WIDTH - 9),
    ));
    for line in cart.lines() {
        let qty = format!("×{}", line.quantity);
        let name_w = inner.saturating_sub(UnicodeWidthStr::width(qty.as_str()) + 1);
        let name = super::card::fit(&line.product.name, name_w);
        let pad = inner
            .saturating_sub(UnicodeWidthStr::width(name.as_str()))
            .saturating_sub(UnicodeWidthStr::width(qty.as_str()));
        lines.push(format!("│ {}{}{} │", name, " ".repeat(pad), qty));
    }
    let items = format!(
        "{} item{} · {} unit{}",
        cart.line_count(),
        if cart.line_count() == 1 { "" } else { "s" },
        cart.unit_count(),
        if cart.unit_count() == 1 { "" } else { "s" },
    );
    let total = format!("Total: {}", format_rupees(cart.total()));
    for text in [items, total] {
        let fitted = super::card::fit(&text, inner);
        let pad = inner.saturating_sub(UnicodeWidthStr::width(fitted.as_str()));
        lines.push(format!("│ {}{} │", fitted, " ".repeat(pad)));
    }
    lines.push(format!("╰{}╯", "─".repeat(CART_PANEL_WIDTH - 2)));
    lines
}

/// Spaces needed between two edge-aligned plain-text segments.
fn padding_between(left: &str, right: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(left) + UnicodeWidthStr::width(right);
    let pad = width.saturating_sub(used).max(2);
    " ".repeat(pad)
}

/// TuiApp wraps the iocraft-based app behind a synchronous interface.
pub struct TuiApp {
    state: TuiAppState,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(catalog: Vec<Product>, config: TuiConfig) -> std::io::Result<Self> {
        let state = TuiAppState::new(catalog, config);
        Ok(Self { state })
    }

    /// Run the main event loop using iocraft fullscreen
    pub fn run(&mut self) -> std::io::Result<ExitReason> {
        let state = self.state.clone();

        // Check if we're already in a tokio runtime
        if tokio::runtime::Handle::try_current().is_ok() {
            // Already in a runtime - use block_in_place to run async code
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    // ignore_ctrl_c() prevents iocraft from exiting on Ctrl+C - we handle it ourselves
                    element!(App(state: Some(state.clone())))
                        .fullscreen()
                        .ignore_ctrl_c()
                        .await
                })
            })?;
        } else {
            // No runtime - create a new one
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                element!(App(state: Some(state.clone())))
                    .fullscreen()
                    .ignore_ctrl_c()
                    .await
            })?;
        }

        Ok(self.state.exit_reason().unwrap_or(ExitReason::Completed))
    }

    /// Get state reference for testing
    pub fn state(&self) -> &TuiAppState {
        &self.state
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
