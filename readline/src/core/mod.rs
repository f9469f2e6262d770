// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient plumbing shared by the line editor and the binaries that embed it: terminal
//! mode switching, escape sequence decoding, errors, logging, and test fixtures.

// Attach sources.
pub mod ansi;
pub mod common;
pub mod log;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
pub use test_fixtures::*;
