// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::TryReserveError, io};

/// Every way the line editor can fail. Malformed escape sequences and input past the
/// buffer capacity are not errors; they degrade to "no action taken".
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// The input handle is not an interactive terminal, so raw mode was never entered.
    #[error("input is not an interactive terminal")]
    #[diagnostic(
        code(tasksh_readline::session::not_a_terminal),
        help("Run the shell from a terminal emulator, not with piped or redirected stdin")
    )]
    NotATerminal,

    /// Growing a word list or the input buffer failed.
    #[error("out of memory while growing an editor buffer")]
    #[diagnostic(code(tasksh_readline::alloc::out_of_memory))]
    OutOfMemory(#[from] TryReserveError),

    /// Reading keystrokes or writing rendering bytes failed.
    #[error(transparent)]
    #[diagnostic(code(tasksh_readline::io::failure))]
    IoFailure(#[from] io::Error),

    /// `tcgetattr` or `tcsetattr` failed.
    #[error("failed to {operation} terminal attributes")]
    #[diagnostic(
        code(tasksh_readline::session::terminal_attributes),
        help("Check `stty -a`; the terminal may have been closed")
    )]
    TerminalAttributes {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}
