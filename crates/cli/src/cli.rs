// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};

/// Default shop title shown in the TUI header.
pub const DEFAULT_TITLE: &str = "Recommended Mobiles Under ₹15,000";

/// Terminal product carousel storefront
#[derive(Parser, Clone, Debug)]
#[command(name = "shopfront", version, about = "Terminal product carousel storefront")]
pub struct Cli {
    /// List the catalog and exit (non-interactive)
    #[arg(long)]
    pub list: bool,

    /// Output format for --list
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Shop title shown in the header
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Enable TUI mode even when stdin is not a TTY
    #[arg(long, env = "SHOPFRONT_TUI")]
    pub tui: bool,

    /// Force non-TUI mode even if stdin is a TTY
    #[arg(long)]
    pub no_tui: bool,
}

impl Cli {
    /// Determine if TUI mode should be used
    pub fn should_use_tui(&self) -> bool {
        if self.no_tui || self.list {
            return false;
        }
        if self.tui {
            return true;
        }
        // Auto-detect: use TUI if stdin is a TTY and not in list mode
        use std::io::IsTerminal;
        std::io::stdin().is_terminal()
    }
}

/// Output format for catalog listing
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
