// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{render::{write_backspaces, write_spaces},
            state::InputBuffer};
use crate::ReadlineError;
use std::io::{self, Write};

const ERASE_ONE: &[u8] = b"\x08 \x08";

impl InputBuffer {
    /// Insert `byte` at the cursor. At the end of the line the byte is simply echoed;
    /// mid-line the tail is reprinted from the inserted byte on and the terminal cursor
    /// is walked back to sit right after it. A full buffer drops the byte.
    ///
    /// # Errors
    ///
    /// Returns an error if storage can't grow or writing to `term` fails.
    pub fn insert_char(&mut self, byte: u8, term: &mut dyn Write) -> Result<(), ReadlineError> {
        if self.is_full() {
            tracing::trace!(message = "input buffer full, byte dropped", byte);
            return Ok(());
        }
        self.content.try_reserve(1)?;
        self.content.insert(self.cursor, byte);

        let tail = &self.content[self.cursor..];
        term.write_all(tail)?;
        write_backspaces(term, tail.len() - 1)?;
        self.cursor += 1;
        Ok(())
    }

    /// Remove the byte before the cursor: step back, reprint the tail followed by one
    /// blank (to wipe the now stale last column), and walk back again.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn delete_before_cursor(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);

        write_backspaces(term, 1)?;
        let tail = &self.content[self.cursor..];
        term.write_all(tail)?;
        write_spaces(term, 1)?;
        write_backspaces(term, tail.len() + 1)
    }

    /// Delete backward at least once, then keep deleting until the cursor is at the start
    /// or the byte before it is a space.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn delete_word_before_cursor(&mut self, term: &mut dyn Write) -> io::Result<()> {
        loop {
            self.delete_before_cursor(term)?;
            if self.cursor == 0 || self.content[self.cursor - 1] == b' ' {
                return Ok(());
            }
        }
    }

    /// Erase the whole line from the screen and the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn clear(&mut self, term: &mut dyn Write) -> io::Result<()> {
        self.move_to_end(term)?;
        for _ in 0..self.content.len() {
            term.write_all(ERASE_ONE)?;
        }
        self.reset();
        Ok(())
    }

    /// Replace the `old_prefix_len` bytes right before the cursor with `replacement`,
    /// leaving the text after the cursor (and so the cursor shift) untouched. If the
    /// replacement is shorter than what it replaces, the leftover columns are blanked.
    /// Nothing happens when the result would not fit in the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if storage can't grow or writing to `term` fails.
    pub fn complete_suffix(
        &mut self,
        old_prefix_len: usize,
        replacement: &[u8],
        term: &mut dyn Write,
    ) -> Result<(), ReadlineError> {
        let old_prefix_len = old_prefix_len.min(self.cursor);
        let new_len = self.content.len() - old_prefix_len + replacement.len();
        if new_len > self.capacity {
            tracing::trace!(
                message = "completion skipped, line would exceed capacity",
                new_len,
                capacity = self.capacity
            );
            return Ok(());
        }
        self.content
            .try_reserve(replacement.len().saturating_sub(old_prefix_len))?;

        let start = self.cursor - old_prefix_len;
        self.content
            .splice(start..self.cursor, replacement.iter().copied());
        self.cursor = start + replacement.len();

        let tail_len = self.content.len() - self.cursor;
        let blanks = old_prefix_len.saturating_sub(replacement.len());
        write_backspaces(term, old_prefix_len)?;
        term.write_all(&self.content[start..])?;
        write_spaces(term, blanks)?;
        write_backspaces(term, tail_len + blanks)?;
        Ok(())
    }
}
