// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;

#[cfg(unix)]
use super::session_unix;
#[cfg(unix)]
use rustix::{fd::AsFd, termios::Termios};
#[cfg(unix)]
use std::io;

/// Owns the editor-mode lifecycle of one terminal handle.
///
/// Creating the session captures the current attributes and installs the editor's mode
/// (see [module documentation]). The saved attributes are restored exactly once:
/// either by [`TerminalSession::end`], which reports failures, or by [`Drop`] on any
/// other exit path (including `?` propagation and panics), which logs them.
///
/// [module documentation]: mod@crate::core::ansi::terminal_session
#[cfg(unix)]
#[derive(Debug)]
pub struct TerminalSession<F: AsFd = io::Stdin> {
    handle: F,
    saved_mode: Option<Termios>,
}

#[cfg(unix)]
impl TerminalSession<io::Stdin> {
    /// Enter editor mode on stdin.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::NotATerminal`] if stdin is redirected or piped.
    /// - [`ReadlineError::TerminalAttributes`] if the attributes can't be read or set.
    pub fn try_new() -> Result<Self, ReadlineError> { Self::try_new_on(io::stdin()) }
}

#[cfg(unix)]
impl<F: AsFd> TerminalSession<F> {
    /// Enter editor mode on any terminal handle (eg: an opened `/dev/tty`).
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::NotATerminal`] if `handle` is not a terminal. Raw mode is not
    ///   entered in this case.
    /// - [`ReadlineError::TerminalAttributes`] if the attributes can't be read or set.
    pub fn try_new_on(handle: F) -> Result<Self, ReadlineError> {
        if !session_unix::is_terminal(&handle) {
            return Err(ReadlineError::NotATerminal);
        }

        let saved_mode = session_unix::get_attributes(&handle)?;
        let editor_mode = session_unix::editor_mode_from(&saved_mode);
        session_unix::set_attributes(&handle, &editor_mode, "install")?;
        tracing::debug!(message = "terminal session started");

        Ok(Self {
            handle,
            saved_mode: Some(saved_mode),
        })
    }

    /// Restore the saved attributes and consume the session.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::TerminalAttributes`] if restoring fails.
    pub fn end(mut self) -> Result<(), ReadlineError> { self.restore() }

    #[must_use]
    pub fn is_active(&self) -> bool { self.saved_mode.is_some() }

    fn restore(&mut self) -> Result<(), ReadlineError> {
        if let Some(saved_mode) = self.saved_mode.take() {
            session_unix::set_attributes(&self.handle, &saved_mode, "restore")?;
            tracing::debug!(message = "terminal session ended");
        }
        Ok(())
    }
}

#[cfg(unix)]
impl<F: AsFd> Drop for TerminalSession<F> {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(message = "failed to restore terminal attributes", ?error);
        }
    }
}

/// Stand-in for platforms without termios: there is no editor mode to enter.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct TerminalSession;

#[cfg(not(unix))]
impl TerminalSession {
    /// # Errors
    ///
    /// Always returns [`ReadlineError::NotATerminal`].
    pub fn try_new() -> Result<Self, ReadlineError> { Err(ReadlineError::NotATerminal) }

    /// # Errors
    ///
    /// Never fails.
    pub fn end(self) -> Result<(), ReadlineError> { Ok(()) }

    #[must_use]
    pub fn is_active(&self) -> bool { false }
}
