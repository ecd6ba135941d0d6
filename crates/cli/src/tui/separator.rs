// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Width-aware separator generation for TUI rendering.

/// Default separator character (box drawing horizontal)
pub const SEPARATOR_CHAR: char = '─';

/// Generate a full-width separator line.
pub fn make_separator(width: usize) -> String {
    SEPARATOR_CHAR.to_string().repeat(width)
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
