// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use shopfront_store::catalog;
use unicode_width::UnicodeWidthStr;

fn sample() -> Product {
    Product::new(
        "rm-narzo-n53",
        "Realme Narzo N53",
        7499,
        "Gostor.com + others",
        "https://m.media-amazon.com/images/I/71DSxfKzkJL.jpg",
    )
}

#[test]
fn card_has_fixed_height() {
    assert_eq!(render_card(&sample(), false, 0).len(), CARD_HEIGHT);
}

#[test]
fn every_line_is_exactly_card_width_columns() {
    for card in [
        render_card(&sample(), false, 0),
        render_card(&sample(), true, 12),
    ] {
        for line in &card {
            assert_eq!(
                UnicodeWidthStr::width(line.as_str()),
                CARD_WIDTH,
                "line {:?}",
                line
            );
        }
    }
}

#[test]
fn all_catalog_cards_keep_fixed_geometry() {
    for product in &catalog::builtin() {
        let card = render_card(product, false, 0);
        assert_eq!(card.len(), CARD_HEIGHT);
        for line in &card {
            assert_eq!(UnicodeWidthStr::width(line.as_str()), CARD_WIDTH);
        }
    }
}

#[test]
fn selected_card_uses_heavy_border_and_prompt() {
    let card = render_card(&sample(), true, 0);
    assert!(card[0].starts_with('┏'));
    assert!(card.iter().any(|l| l.contains("❯ Add to Cart")));
}

#[test]
fn unselected_card_uses_light_border_and_button() {
    let card = render_card(&sample(), false, 0);
    assert!(card[0].starts_with('╭'));
    assert!(card.iter().any(|l| l.contains("[ Add to Cart ]")));
}

#[test]
fn card_shows_name_and_price_with_source() {
    let card = render_card(&sample(), false, 0);
    let joined = card.join("\n");
    assert!(joined.contains("Realme Narzo N53"));
    assert!(joined.contains("₹7,499 ·"));
}

#[test]
fn quantity_marker_shown_once_in_cart() {
    let card = render_card(&sample(), false, 2);
    assert!(card.iter().any(|l| l.contains("×2")));

    let card = render_card(&sample(), false, 0);
    assert!(!card.iter().any(|l| l.contains('×')));
}

#[test]
fn image_label_strips_query_string() {
    let label = image_label("https://encrypted-tbn0.gstatic.com/images?q=tbn:abc&s");
    assert!(label.contains("images"));
    assert!(!label.contains("tbn"));
}

#[test]
fn image_label_uses_last_path_segment() {
    let label = image_label("https://m.media-amazon.com/images/I/71DSxfKzkJL.jpg");
    assert!(label.contains("71DSxfKzkJL.jpg"));
}

#[test]
fn fit_passes_short_text_through() {
    assert_eq!(fit("abc", 5), "abc");
}

#[test]
fn fit_truncates_with_ellipsis() {
    let out = fit("abcdefgh", 5);
    assert_eq!(out, "abcd…");
    assert_eq!(UnicodeWidthStr::width(out.as_str()), 5);
}

#[test]
fn fit_respects_wide_characters() {
    // 'あ' is two columns; only two fit before the ellipsis in width 6.
    let out = fit("あああああ", 6);
    assert!(UnicodeWidthStr::width(out.as_str()) <= 6);
    assert!(out.ends_with('…'));
}
