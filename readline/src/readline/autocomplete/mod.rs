// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod engine;
pub mod provider;

// Re-export.
pub use engine::*;
pub use provider::*;
