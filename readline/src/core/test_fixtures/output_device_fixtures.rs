// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Replays bytes written by the line editor onto a simulated terminal so tests can
/// assert on what the user actually sees, not on the raw byte stream.
///
/// Only what the editor emits is modeled:
/// - printable bytes overwrite the cell under the cursor and advance it
/// - `\b` moves the cursor one cell left, stopping at column 0
/// - `\n` starts a new row at column 0
///
/// Trailing spaces are trimmed from rows since they are indistinguishable from blank
/// cells on a real terminal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TerminalScreenMock {
    pub rows: Vec<Vec<u8>>,
    pub col: usize,
}

impl TerminalScreenMock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![vec![]],
            col: 0,
        }
    }

    /// Build a screen by replaying all of `bytes`.
    #[must_use]
    pub fn replay(bytes: &[u8]) -> Self {
        let mut screen = Self::new();
        screen.apply(bytes);
        screen
    }

    pub fn apply(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match byte {
                b'\n' => {
                    self.rows.push(vec![]);
                    self.col = 0;
                }
                0x08 => self.col = self.col.saturating_sub(1),
                _ => {
                    let col = self.col;
                    let row = self.current_row_mut();
                    if col < row.len() {
                        row[col] = byte;
                    } else {
                        row.resize(col, b' ');
                        row.push(byte);
                    }
                    self.col += 1;
                }
            }
        }
    }

    fn current_row_mut(&mut self) -> &mut Vec<u8> {
        if self.rows.is_empty() {
            self.rows.push(vec![]);
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Text of the row the cursor is on.
    #[must_use]
    pub fn current_line(&self) -> String {
        self.rows
            .last()
            .map(|row| String::from_utf8_lossy(row).trim_end().to_string())
            .unwrap_or_default()
    }

    /// Text of every row, trailing blanks trimmed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| String::from_utf8_lossy(row).trim_end().to_string())
            .collect()
    }
}
