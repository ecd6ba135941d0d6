// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn defaults() {
    let cli = Cli::parse_from(["shopfront"]);
    assert!(!cli.list);
    assert_eq!(cli.output_format, OutputFormat::Text);
    assert_eq!(cli.title, DEFAULT_TITLE);
    assert!(!cli.tui);
    assert!(!cli.no_tui);
}

#[test]
fn list_with_json_format() {
    let cli = Cli::parse_from(["shopfront", "--list", "--output-format", "json"]);
    assert!(cli.list);
    assert_eq!(cli.output_format, OutputFormat::Json);
}

#[test]
fn title_override() {
    let cli = Cli::parse_from(["shopfront", "--title", "Weekend Deals"]);
    assert_eq!(cli.title, "Weekend Deals");
}

#[test]
fn no_tui_wins_over_tui() {
    let cli = Cli::parse_from(["shopfront", "--tui", "--no-tui"]);
    assert!(!cli.should_use_tui());
}

#[test]
fn list_mode_never_uses_tui() {
    let cli = Cli::parse_from(["shopfront", "--list", "--tui"]);
    assert!(!cli.should_use_tui());
}

#[test]
fn explicit_tui_flag_forces_tui() {
    let cli = Cli::parse_from(["shopfront", "--tui"]);
    assert!(cli.should_use_tui());
}
