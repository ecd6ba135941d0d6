// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Product card rendering.
//!
//! Cards are composed as plain fixed-width text lines so the carousel can
//! clip them to the viewport by display column without splitting ANSI
//! escape sequences. The focused card is marked with heavy borders and a
//! highlighted button instead of color.

use shopfront_store::Product;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Card width in terminal columns, borders included.
pub const CARD_WIDTH: usize = 30;

/// Card height in terminal rows.
pub const CARD_HEIGHT: usize = 9;

/// Inner content width: borders and one-column padding on each side.
const INNER_WIDTH: usize = CARD_WIDTH - 4;

/// Box drawing characters for one border style.
struct Border {
    top_left: char,
    top: char,
    top_right: char,
    side: char,
    bottom_left: char,
    bottom_right: char,
}

const LIGHT: Border = Border {
    top_left: '╭',
    top: '─',
    top_right: '╮',
    side: '│',
    bottom_left: '╰',
    bottom_right: '╯',
};

const HEAVY: Border = Border {
    top_left: '┏',
    top: '━',
    top_right: '┓',
    side: '┃',
    bottom_left: '┗',
    bottom_right: '┛',
};

/// Render one product card as [`CARD_HEIGHT`] lines of exactly
/// [`CARD_WIDTH`] columns.
///
/// `selected` marks the keyboard-focused card; `in_cart` is the quantity
/// already added (0 when absent), shown next to the button.
pub fn render_card(product: &Product, selected: bool, in_cart: u32) -> Vec<String> {
    let border = if selected { &HEAVY } else { &LIGHT };

    let mut name_lines = wrap_to(&product.name, INNER_WIDTH, 2);
    name_lines.resize(2, String::new());

    let price_line = fit(
        &format!("{} · {}", product.display_price(), product.source),
        INNER_WIDTH,
    );

    let button = if selected {
        "❯ Add to Cart [enter]".to_string()
    } else {
        "[ Add to Cart ]".to_string()
    };
    let qty = if in_cart > 0 {
        format!("×{}", in_cart)
    } else {
        String::new()
    };
    let button_line = spread(&button, &qty, INNER_WIDTH);

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(format!(
        "{}{}{}",
        border.top_left,
        border.top.to_string().repeat(CARD_WIDTH - 2),
        border.top_right,
    ));
    lines.push(boxed(&image_label(&product.image_url), border.side));
    lines.push(boxed("", border.side));
    lines.push(boxed(&name_lines[0], border.side));
    lines.push(boxed(&name_lines[1], border.side));
    lines.push(boxed(&price_line, border.side));
    lines.push(boxed("", border.side));
    lines.push(boxed(&button_line, border.side));
    lines.push(format!(
        "{}{}{}",
        border.bottom_left,
        border.top.to_string().repeat(CARD_WIDTH - 2),
        border.bottom_right,
    ));
    lines
}

/// Placeholder shown for the product image: the last path segment of the
/// image URL, query string stripped, fitted to the card.
pub fn image_label(url: &str) -> String {
    let no_query = url.split(['?', '#']).next().unwrap_or(url);
    let segment = no_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(no_query);
    fit(&format!("▣ {}", segment), INNER_WIDTH)
}

/// Wrap `text` to at most `max_lines` lines of `width` columns, truncating
/// the last line with an ellipsis if it still overflows.
fn wrap_to(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let wrapped = textwrap::wrap(text, width);
    let mut lines: Vec<String> = wrapped
        .iter()
        .take(max_lines)
        .map(|l| l.to_string())
        .collect();
    if wrapped.len() > max_lines {
        if let Some(last) = lines.last_mut() {
            *last = fit(&format!("{}…", last), width);
        }
    }
    lines
}

/// Truncate `text` to `width` display columns, ending with an ellipsis when
/// something was cut.
pub fn fit(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut cols = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        cols += w;
    }
    out.push('…');
    out
}

/// Left text and right text pushed to opposite edges of a `width`-column span.
fn spread(left: &str, right: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(left) + UnicodeWidthStr::width(right);
    if used >= width {
        return fit(&format!("{} {}", left, right), width);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}

/// A content line framed by side borders and padded to the card width.
fn boxed(content: &str, side: char) -> String {
    let content = fit(content, INNER_WIDTH);
    let pad = INNER_WIDTH.saturating_sub(UnicodeWidthStr::width(content.as_str()));
    format!("{} {}{} {}", side, content, " ".repeat(pad), side)
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
