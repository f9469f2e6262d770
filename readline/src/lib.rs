// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `tasksh_readline`
//!
//! A blocking, byte-level line editor for terminals in non-canonical mode. It needs no
//! line editing library and never addresses the terminal cursor absolutely: every edit
//! is rendered with printable bytes, `\b`, and `\n` only.
//!
//! # Features
//!
//! - Insert and delete anywhere in the line, with the tail redrawn in place.
//! - `Ctrl+A` / `Ctrl+E` to jump to the start / end, `Ctrl+U` to clear, `Ctrl+W` to
//!   delete the previous word.
//! - Left / Right arrows (with or without modifiers) jump a word at a time.
//! - `Tab` completes the word before the cursor from the first [`Provider`] that claims
//!   it: a [`StaticVocabulary`] such as command names, or [`FilesystemPath`] listings. A
//!   single candidate is completed in place, several are listed below the line.
//!
//! # Example
//!
//! ```no_run
//! use std::io::{self, Write};
//! use tasksh_readline::{FilesystemPath, ProviderList, Readline, ReadlineConfig,
//!                       ReadlineEvent, StaticVocabulary, TerminalSession};
//!
//! # fn main() -> miette::Result<()> {
//! let session = TerminalSession::try_new()?;
//! let providers = ProviderList::new(StaticVocabulary::try_new(["help", "exit"])?)
//!     .with_provider(FilesystemPath::new());
//! let mut readline = Readline::new(ReadlineConfig::default(), providers);
//!
//! let mut stdin = io::stdin();
//! let mut stdout = io::stdout();
//! let mut prompt = |term: &mut dyn Write| term.write_all(b"> ");
//! while let ReadlineEvent::Line(line) =
//!     readline.read_line(&mut stdin, &mut stdout, &mut prompt)?
//! {
//!     if line.trim_ascii() == b"exit" {
//!         break;
//!     }
//! }
//! session.end()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The library emits [`tracing`] events and never installs a subscriber itself. Binaries
//! can use [`try_initialize_logging_global`]; since the terminal is in editor mode while
//! a line is edited, log to a file (or stderr) rather than stdout.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod readline;

// Re-export.
pub use core::*;
pub use readline::*;
