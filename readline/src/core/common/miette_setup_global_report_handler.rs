// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report handler for
//! binaries that return `miette::Result` from `main`.
//!
//! The hook is lazy: it only runs when a report is actually printed, which is after the
//! [`crate::TerminalSession`] has been dropped and the terminal is back in cooked mode.
//! So the terminal width is measured at that moment, not at startup.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback used when the output is not a terminal (eg: piped to a file).
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Register the graphical report handler. `footer` is appended to every report (eg: a
/// link to the issue tracker).
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
