// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scoped raw-mode session for the controlling terminal.
//!
//! ## Cooked mode vs the editor's mode
//!
//! **Cooked mode** (default): the kernel line discipline buffers input until Enter,
//! echoes typed characters, and handles backspace itself.
//!
//! **Editor mode** (what [`TerminalSession`] installs): canonical mode (`ICANON`) and
//! echo (`ECHO`) are switched off, with `VMIN=1` and `VTIME=0`, so every keystroke byte
//! is delivered to [`crate::Readline`] as soon as it is typed and nothing appears on
//! screen unless the editor writes it. Unlike a full `cfmakeraw`, signal generation
//! (`ISIG`), CR to NL input translation (`ICRNL`), and output post-processing (`OPOST`)
//! stay enabled: Ctrl+C still interrupts, Enter arrives as `\n`, and `\n` written by
//! the editor still returns the carriage.
//!
//! Debug escape sequences from a shell:
//! ```bash
//! stty -icanon -echo; cat -v; stty sane
//! # Left arrow shows: ^[[D (ESC [ D)
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use tasksh_readline::TerminalSession;
//!
//! # fn main() -> Result<(), tasksh_readline::ReadlineError> {
//! let session = TerminalSession::try_new()?;
//! // ... read lines ...
//! session.end()?; // Or just drop it: attributes are restored either way.
//! # Ok(())
//! # }
//! ```

// Private modules (hide internal structure).
mod session_core;

#[cfg(unix)]
mod session_unix;


// Re-export the public API (flat, ergonomic surface).
pub use session_core::*;
