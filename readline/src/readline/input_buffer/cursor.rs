// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{render::write_backspaces, state::InputBuffer};
use std::io::{self, Write};

impl InputBuffer {
    /// One column left. The terminal cursor follows via `\b`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        write_backspaces(term, 1)
    }

    /// One column right. The terminal cursor follows by re-echoing the byte it passes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_right(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let Some(&byte) = self.content.get(self.cursor) else {
            return Ok(());
        };
        self.cursor += 1;
        term.write_all(&[byte])
    }

    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_to_start(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let steps = self.cursor;
        self.cursor = 0;
        write_backspaces(term, steps)
    }

    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_to_end(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let passed_over = &self.content[self.cursor..];
        term.write_all(passed_over)?;
        self.cursor = self.content.len();
        Ok(())
    }

    /// Step left at least once, then keep stepping until the cursor is at the start or
    /// the byte before it is a space. From `"foo bar|"` this lands on `"foo |bar"`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_word_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        loop {
            self.move_left(term)?;
            if self.cursor == 0 || self.content[self.cursor - 1] == b' ' {
                return Ok(());
            }
        }
    }

    /// Step right at least once, then keep stepping until the cursor is at the end or
    /// the byte under it is a space. From `"|foo bar"` this lands on `"foo| bar"`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn move_word_right(&mut self, term: &mut dyn Write) -> io::Result<()> {
        loop {
            self.move_right(term)?;
            if self.cursor == self.content.len() || self.content[self.cursor] == b' ' {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{InputBuffer, TerminalScreenMock};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn typed(text: &[u8], term: &mut Vec<u8>) -> InputBuffer {
        let mut buffer = InputBuffer::default();
        for &byte in text {
            buffer.insert_char(byte, term).unwrap();
        }
        buffer
    }

    #[test]
    fn test_single_steps_stop_at_bounds() {
        let mut term = vec![];
        let mut buffer = typed(b"ab", &mut term);
        buffer.move_right(&mut term).unwrap();
        assert_eq!(buffer.cursor(), 2);
        for _ in 0..5 {
            buffer.move_left(&mut term).unwrap();
        }
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.cursor_shift(), -2);

        let screen = TerminalScreenMock::replay(&term);
        assert_eq!(screen.current_line(), "ab");
        assert_eq!(screen.col, 0);
    }

    #[test]
    fn test_move_to_start_and_end() {
        let mut term = vec![];
        let mut buffer = typed(b"hello", &mut term);
        buffer.move_to_start(&mut term).unwrap();
        assert_eq!(buffer.cursor_shift(), -5);
        buffer.move_to_end(&mut term).unwrap();
        assert_eq!(buffer.cursor_shift(), 0);

        let screen = TerminalScreenMock::replay(&term);
        assert_eq!(screen.current_line(), "hello");
        assert_eq!(screen.col, 5);
    }

    #[test]
    fn test_word_left_on_foo_bar_lands_after_space() {
        let mut term = vec![];
        let mut buffer = typed(b"foo bar", &mut term);
        buffer.move_word_left(&mut term).unwrap();
        assert_eq!(buffer.cursor(), 4);
        assert_eq!(buffer.cursor_shift(), -3);
        assert_eq!(TerminalScreenMock::replay(&term).col, 4);
    }

    #[test_case(b"foo bar", 7, &[4, 0, 0])]
    #[test_case(b"a b c", 5, &[4, 2, 0])]
    #[test_case(b"word", 2, &[0])]
    #[test_case(b"", 0, &[0])]
    fn test_word_left_sequence(text: &[u8], start: usize, stops: &[usize]) {
        let mut term = vec![];
        let mut buffer = typed(text, &mut term);
        while buffer.cursor() > start {
            buffer.move_left(&mut term).unwrap();
        }
        for &expected in stops {
            buffer.move_word_left(&mut term).unwrap();
            assert_eq!(buffer.cursor(), expected);
        }
    }

    #[test_case(b"foo bar", 0, &[3, 7, 7])]
    #[test_case(b"a b c", 0, &[1, 3, 5])]
    #[test_case(b"foo bar", 3, &[7])]
    fn test_word_right_sequence(text: &[u8], start: usize, stops: &[usize]) {
        let mut term = vec![];
        let mut buffer = typed(text, &mut term);
        buffer.move_to_start(&mut term).unwrap();
        while buffer.cursor() < start {
            buffer.move_right(&mut term).unwrap();
        }
        for &expected in stops {
            buffer.move_word_right(&mut term).unwrap();
            assert_eq!(buffer.cursor(), expected);
        }
        let screen = TerminalScreenMock::replay(&term);
        assert_eq!(screen.col, buffer.cursor());
    }
}
