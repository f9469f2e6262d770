// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS termios access using rustix's safe API.

use crate::ReadlineError;
use rustix::{fd::AsFd,
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::io;

pub fn is_terminal(fd: impl AsFd) -> bool { termios::isatty(fd) }

/// Get current attributes.
pub fn get_attributes(fd: impl AsFd) -> Result<Termios, ReadlineError> {
    termios::tcgetattr(fd).map_err(|errno| ReadlineError::TerminalAttributes {
        operation: "retrieve",
        source: io::Error::from(errno),
    })
}

/// Set attributes, effective immediately.
pub fn set_attributes(
    fd: impl AsFd,
    termios: &Termios,
    operation: &'static str,
) -> Result<(), ReadlineError> {
    termios::tcsetattr(fd, OptionalActions::Now, termios).map_err(|errno| {
        ReadlineError::TerminalAttributes {
            operation,
            source: io::Error::from(errno),
        }
    })
}

/// Derive the editor's mode from the saved attributes: no canonical buffering, no
/// echo, one byte at a time. Everything else is left as the user had it.
#[must_use]
pub fn editor_mode_from(saved: &Termios) -> Termios {
    let mut it = saved.clone();
    it.local_modes.remove(LocalModes::ICANON | LocalModes::ECHO);
    it.special_codes[SpecialCodeIndex::VMIN] = 1;
    it.special_codes[SpecialCodeIndex::VTIME] = 0;
    it
}
