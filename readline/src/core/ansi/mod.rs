// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod escape_decoder;
pub mod terminal_session;

// Re-export.
pub use escape_decoder::*;
pub use terminal_session::*;
