// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod command;
pub mod launcher;
pub mod shell_state;

// Re-export.
pub use command::*;
pub use launcher::*;
pub use shell_state::*;
