// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded, cursor aware line buffer that renders every edit as it happens.
//!
//! The terminal is driven with nothing but printable bytes, `\b` (move one column left)
//! and `\n`. No absolute cursor addressing is ever emitted, so the editor works on any
//! terminal that honors backspace. Every mutation keeps the screen and the buffer in
//! step:
//!
//! | Module   | Responsibility                                               |
//! |----------|--------------------------------------------------------------|
//! | `state`  | [`InputBuffer`] struct, accessors, prefix word, reset        |
//! | `cursor` | Single step, to-bound, and word-wise cursor movement         |
//! | `edit`   | Insert, delete, clear, delete word, in-place completion      |
//! | `render` | Full re-render, line submission, backspace helper            |
//!
//! The cursor is stored as an index into the content. Callers that think in terms of
//! "how far left of the end is the cursor" use [`InputBuffer::cursor_shift`], which is
//! always in `[-len, 0]`.

// Private modules organized by functional responsibility.
mod cursor;
mod edit;
mod render;
mod state;

// Public re-exports (expose stable API).
pub use state::*;
