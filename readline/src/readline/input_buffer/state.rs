// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;

/// Default hard limit on the number of bytes in one line.
pub const DEFAULT_INPUT_CAPACITY: usize = 4096;

/// The line being edited. Invariant: `cursor <= content.len() <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    pub(super) content: Vec<u8>,
    pub(super) cursor: usize,
    pub(super) capacity: usize,
}

impl Default for InputBuffer {
    fn default() -> Self { Self::new(DEFAULT_INPUT_CAPACITY) }
}

impl InputBuffer {
    /// Storage is grown on demand, up to `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            content: Vec::new(),
            cursor: 0,
            capacity,
        }
    }

    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.content.len() >= self.capacity }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Index of the byte the next insertion lands in front of.
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Signed distance of the cursor from the end of the line: `0` at the end, `-len` at
    /// the start.
    #[must_use]
    pub fn cursor_shift(&self) -> isize {
        let distance_from_end = self.content.len() - self.cursor;
        // A Vec never holds more than isize::MAX bytes.
        -isize::try_from(distance_from_end).unwrap_or(isize::MAX)
    }

    /// Bytes between the last space before the cursor (exclusive) and the cursor. When
    /// there is no space before the cursor this starts at the beginning of the line.
    #[must_use]
    pub fn current_prefix_word(&self) -> &[u8] {
        let before_cursor = &self.content[..self.cursor];
        let start = before_cursor
            .iter()
            .rposition(|byte| *byte == b' ')
            .map_or(0, |space_index| space_index + 1);
        &before_cursor[start..]
    }

    /// Forget the line without emitting anything. Used between lines, once the
    /// submitted (or abandoned) line has already left the screen's edit row.
    pub fn reset(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Put `bytes` in front of the cursor without rendering them, e.g. to offer an
    /// editable default before [`crate::Readline::read_line`] is called (it renders
    /// pre-seeded content right after the prompt). Bytes past the capacity are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if storage can't grow.
    pub fn seed(&mut self, bytes: &[u8]) -> Result<(), ReadlineError> {
        let room = self.capacity.saturating_sub(self.content.len());
        let accepted = &bytes[..bytes.len().min(room)];
        self.content.try_reserve(accepted.len())?;
        self.content
            .splice(self.cursor..self.cursor, accepted.iter().copied());
        self.cursor += accepted.len();
        Ok(())
    }
}
