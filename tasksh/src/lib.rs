// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `tasksh` is a small interactive shell that exercises [`tasksh_readline`]: the prompt
//! shows where you are relative to the directory the shell was started in, and `Tab`
//! completes command names or, for words that look like paths, directory entries.
//!
//! Commands: `help`, `exit`, `go [path]`, `show [path]`. Arguments are split on
//! whitespace; there is no quoting.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod shell;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use shell::*;
