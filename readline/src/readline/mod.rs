// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod autocomplete;
pub mod input_buffer;
pub mod key_processor;
pub mod readline_api;
pub mod word_list;

// Re-export.
pub use autocomplete::*;
pub use input_buffer::*;
pub use key_processor::*;
pub use readline_api::*;
pub use word_list::*;
