// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shopfront binary entry point.

use std::io::IsTerminal;

use clap::Parser;

use shopfront::cli::Cli;
use shopfront::output::{print_catalog, print_error, print_warning};
use shopfront::store::catalog;
use shopfront::tui::{ExitReason, TuiApp, TuiConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.should_use_tui() {
        run_tui_mode(&cli)
    } else {
        // Non-interactive: print the catalog in the requested format.
        let products = catalog::builtin();
        if let Err(e) = print_catalog(&products, cli.output_format) {
            print_error(e.to_string());
            std::process::exit(1);
        }
        Ok(())
    }
}

/// Run in TUI mode.
fn run_tui_mode(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Ignore SIGINT so Ctrl+C is captured as a key event rather than killing the process.
    #[cfg(unix)]
    {
        use std::sync::atomic::AtomicBool;
        use std::sync::Arc;
        let flag = Arc::new(AtomicBool::new(false));
        if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        {
            print_warning(format_args!("Failed to ignore SIGINT: {}", e));
        }
        // Leak the flag so it stays registered for the lifetime of the process
        std::mem::forget(flag);
    }

    let is_tty = std::io::stdout().is_terminal();
    let config = TuiConfig {
        title: cli.title.clone(),
        is_tty,
    };

    let mut app = TuiApp::new(catalog::builtin(), config)?;
    let exit_reason = app.run()?;

    match exit_reason {
        ExitReason::Interrupted => std::process::exit(130),
        ExitReason::Error(msg) => {
            print_error(&msg);
            std::process::exit(1);
        }
        ExitReason::UserQuit | ExitReason::Completed => Ok(()),
    }
}
