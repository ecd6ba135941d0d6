// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-interactive catalog output and stderr diagnostics.

use std::io::{self, IsTerminal, Write};

use shopfront_store::Product;
use thiserror::Error;

use crate::cli::OutputFormat;

/// Failures while writing catalog output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print the catalog to stdout in the requested format.
pub fn print_catalog(products: &[Product], format: OutputFormat) -> Result<(), OutputError> {
    let mut stdout = io::stdout().lock();
    write_catalog(&mut stdout, products, format)
}

/// Write the catalog to an arbitrary writer (testable core of `print_catalog`).
pub fn write_catalog<W: Write>(
    writer: &mut W,
    products: &[Product],
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => write_catalog_table(writer, products)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, products)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_catalog_table<W: Write>(writer: &mut W, products: &[Product]) -> Result<(), io::Error> {
    let id_width = column_width(products.iter().map(|p| p.id.len()), "ID".len());
    let name_width = column_width(products.iter().map(|p| p.name.len()), "NAME".len());
    let price_width = column_width(
        products.iter().map(|p| p.display_price().chars().count()),
        "PRICE".len(),
    );

    writeln!(
        writer,
        "{:<id_width$}  {:<name_width$}  {:>price_width$}  SOURCE",
        "ID", "NAME", "PRICE",
    )?;
    for product in products {
        // display_price contains '₹' (one column, two chars); pad by chars.
        let price = product.display_price();
        let pad = price_width.saturating_sub(price.chars().count());
        writeln!(
            writer,
            "{:<id_width$}  {:<name_width$}  {}{}  {}",
            product.id,
            product.name,
            " ".repeat(pad),
            price,
            product.source,
        )?;
    }
    Ok(())
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.fold(header, usize::max)
}

/// Print an error message to stderr, red when stderr is a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr, yellow when stderr is a terminal.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
