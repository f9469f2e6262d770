// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use tasksh::{CLIArg, run_interactive_shell, ui_str};
use tasksh_readline::{setup_default_miette_global_report_handler,
                      try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ui_str::REPORT_FOOTER);

    let cli_arg = CLIArg::parse();

    let maybe_tracing_config = cli_arg.global_options.tracing_config();
    let should_log = maybe_tracing_config.is_some();
    if let Some(tracing_config) = maybe_tracing_config {
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_interactive_shell();

    if let Err(ref report) = result {
        tracing::error!(message = "tasksh stopped", error = ?report);
    }
    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
