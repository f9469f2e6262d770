// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BeforePromptFn, ESC, EscapeEvent, InputBuffer, MAX_ESCAPE_LOOKAHEAD,
            ProviderList, ReadlineError, autocomplete, decode_escape_sequence,
            is_incomplete_escape_sequence};
use std::io::Write;

pub const CTRL_A: u8 = 1;
pub const CTRL_E: u8 = 5;
pub const BACKSPACE: u8 = 8;
pub const TAB: u8 = 9;
pub const LINE_FEED: u8 = 10;
pub const CTRL_U: u8 = 21;
pub const CTRL_W: u8 = 23;
pub const DELETE: u8 = 127;

/// Result of feeding one chunk of raw input to [`process_chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// A newline was reached. `line` ends with `\n`; `consumed` counts the chunk bytes up
    /// to and including the newline. Anything after it has not been looked at.
    LineComplete { line: Vec<u8>, consumed: usize },
    /// The chunk was used up without finishing the line. The last `incomplete_tail`
    /// bytes are the start of an escape sequence cut off by the end of the chunk; they
    /// must be fed again, in front of the next chunk.
    Pending { incomplete_tail: usize },
}

/// Route every byte of `chunk` to the matching edit, rendering as it goes.
///
/// | Byte       | Action                                   |
/// |------------|------------------------------------------|
/// | 10         | finish the line                          |
/// | 9          | autocomplete                             |
/// | 127, 8     | delete the byte before the cursor        |
/// | 1, 5       | cursor to start, to end                  |
/// | 21         | clear the line                           |
/// | 23         | delete the word before the cursor        |
/// | 27         | escape sequence; arrows Left/Right jump by word |
/// | 28 and up  | insert                                   |
/// | other      | dropped                                  |
///
/// # Errors
///
/// Returns an error if a buffer or word list can't grow, or writing to `term` fails.
pub fn process_chunk(
    chunk: &[u8],
    buffer: &mut InputBuffer,
    providers: &mut ProviderList,
    term: &mut dyn Write,
    before_prompt: &mut BeforePromptFn<'_>,
) -> Result<ChunkOutcome, ReadlineError> {
    let mut index = 0;
    while let Some(&byte) = chunk.get(index) {
        index += 1;
        match byte {
            LINE_FEED => {
                let line = buffer.finish_line(term)?;
                return Ok(ChunkOutcome::LineComplete {
                    line,
                    consumed: index,
                });
            }
            TAB => {
                autocomplete(buffer, providers, term, before_prompt)?;
            }
            DELETE | BACKSPACE => buffer.delete_before_cursor(term)?,
            CTRL_A => buffer.move_to_start(term)?,
            CTRL_E => buffer.move_to_end(term)?,
            CTRL_U => buffer.clear(term)?,
            CTRL_W => buffer.delete_word_before_cursor(term)?,
            ESC => {
                let window_end = chunk.len().min(index + MAX_ESCAPE_LOOKAHEAD);
                let window = &chunk[index..window_end];
                if window_end == chunk.len() && is_incomplete_escape_sequence(window) {
                    return Ok(ChunkOutcome::Pending {
                        incomplete_tail: 1 + window.len(),
                    });
                }
                let decoded = decode_escape_sequence(window);
                index += decoded.consumed;
                apply_escape_event(decoded.event, buffer, term)?;
            }
            printable if printable > ESC => buffer.insert_char(printable, term)?,
            control => tracing::trace!(message = "control byte dropped", control),
        }
    }
    Ok(ChunkOutcome::Pending { incomplete_tail: 0 })
}

fn apply_escape_event(
    event: EscapeEvent,
    buffer: &mut InputBuffer,
    term: &mut dyn Write,
) -> Result<(), ReadlineError> {
    match event {
        EscapeEvent::Left => buffer.move_word_left(term)?,
        EscapeEvent::Right => buffer.move_word_right(term)?,
        EscapeEvent::Up | EscapeEvent::Down | EscapeEvent::None => {
            tracing::trace!(message = "escape sequence ignored", event = ?event);
        }
    }
    Ok(())
}
