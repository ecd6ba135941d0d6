// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TUI color definitions and styled text helpers.
//!
//! Styled variants are used only when stdout is a TTY; every helper keeps
//! the display width of its plain counterpart so layout math can run on
//! unstyled text first.

/// Green for the shop mark and "added" notices: RGB(34, 197, 94)
pub const ACCENT_GREEN: (u8, u8, u8) = (34, 197, 94);

/// Red for the cart badge: RGB(239, 68, 68)
pub const BADGE_RED: (u8, u8, u8) = (239, 68, 68);

/// Gray for subtitles, hints, and the status bar: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Dark gray for separator lines: RGB(136, 136, 136)
pub const SEPARATOR_GRAY: (u8, u8, u8) = (136, 136, 136);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Inverse/reverse video
    pub const INVERSE: &str = "\x1b[7m";
}

/// Format the header title: green check mark plus bold title.
///
/// Example output: `[green]✓[reset] [bold]Recommended Mobiles[reset]`
pub fn styled_title(title: &str) -> String {
    let fg_green = escape::fg(ACCENT_GREEN.0, ACCENT_GREEN.1, ACCENT_GREEN.2);
    format!(
        "{fg_green}✓{reset} {bold}{title}{reset}",
        fg_green = fg_green,
        reset = escape::RESET,
        bold = escape::BOLD,
        title = title,
    )
}

/// Format the cart badge. Red once the cart has lines, gray while empty.
pub fn styled_cart_badge(line_count: usize) -> String {
    let (r, g, b) = if line_count > 0 { BADGE_RED } else { TEXT_GRAY };
    format!(
        "{fg}cart ({count}){reset}",
        fg = escape::fg(r, g, b),
        count = line_count,
        reset = escape::RESET,
    )
}

/// Format an "added to cart" notice in green.
pub fn styled_added_notice(text: &str) -> String {
    let fg_green = escape::fg(ACCENT_GREEN.0, ACCENT_GREEN.1, ACCENT_GREEN.2);
    format!(
        "{fg_green}{text}{reset}",
        fg_green = fg_green,
        text = text,
        reset = escape::RESET,
    )
}

/// Format a styled separator line (dim + dark gray).
pub fn styled_separator(width: usize) -> String {
    let fg_gray = escape::fg(SEPARATOR_GRAY.0, SEPARATOR_GRAY.1, SEPARATOR_GRAY.2);
    format!(
        "{dim}{fg_gray}{line}{reset}",
        dim = escape::DIM,
        fg_gray = fg_gray,
        line = "─".repeat(width),
        reset = escape::RESET,
    )
}

/// Format styled gray text (subtitle, nav position, status bar hints).
pub fn styled_gray_text(text: &str) -> String {
    let fg_gray = escape::fg(TEXT_GRAY.0, TEXT_GRAY.1, TEXT_GRAY.2);
    format!(
        "{fg_gray}{text}{reset}",
        fg_gray = fg_gray,
        text = text,
        reset = escape::RESET,
    )
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
