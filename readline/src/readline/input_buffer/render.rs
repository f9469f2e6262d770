// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::state::InputBuffer;
use crate::ReadlineError;
use std::io::{self, Write};

const RUN_LEN: usize = 64;
const BACKSPACE_RUN: [u8; RUN_LEN] = [0x08; RUN_LEN];
const SPACE_RUN: [u8; RUN_LEN] = [b' '; RUN_LEN];

/// Move the terminal cursor `count` columns left.
///
/// # Errors
///
/// Returns an error if writing to `term` fails.
pub fn write_backspaces(term: &mut dyn Write, count: usize) -> io::Result<()> {
    write_run(term, &BACKSPACE_RUN, count)
}

/// # Errors
///
/// Returns an error if writing to `term` fails.
pub fn write_spaces(term: &mut dyn Write, count: usize) -> io::Result<()> {
    write_run(term, &SPACE_RUN, count)
}

fn write_run(term: &mut dyn Write, run: &[u8; RUN_LEN], mut count: usize) -> io::Result<()> {
    while count > 0 {
        let chunk = count.min(RUN_LEN);
        term.write_all(&run[..chunk])?;
        count -= chunk;
    }
    Ok(())
}

impl InputBuffer {
    /// Print the whole line from the current terminal column, then walk back to the
    /// cursor. Used after something else (a prompt, a candidate listing) took the row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn render(&self, term: &mut dyn Write) -> io::Result<()> {
        term.write_all(&self.content)?;
        write_backspaces(term, self.content.len() - self.cursor)
    }

    /// Submit the line: emit the newline the user typed and hand back the content with
    /// its trailing `\n`. The buffer is left empty for the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if storage can't grow or writing to `term` fails.
    pub fn finish_line(&mut self, term: &mut dyn Write) -> Result<Vec<u8>, ReadlineError> {
        term.write_all(b"\n")?;
        let mut line = Vec::new();
        line.try_reserve_exact(self.content.len() + 1)?;
        line.extend_from_slice(&self.content);
        line.push(b'\n');
        self.reset();
        Ok(line)
    }
}
