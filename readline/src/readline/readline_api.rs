// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChunkOutcome, DEFAULT_INPUT_CAPACITY, InputBuffer, ProviderList,
            ReadlineError, process_chunk};
use std::io::{self, Read, Write};

/// Called with the output stream before each prompt, i.e. once at the start of every
/// [`Readline::read_line`] and again after a list of completion candidates has been
/// printed. Prints the prompt; any state it needs is captured by the closure.
pub type BeforePromptFn<'a> = dyn FnMut(&mut dyn Write) -> io::Result<()> + 'a;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadlineConfig {
    /// Longest line, in bytes. Further input is dropped.
    pub capacity: usize,
    /// Upper bound on the bytes taken from the input per read.
    pub read_chunk_size: usize,
}

impl Default for ReadlineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INPUT_CAPACITY,
            read_chunk_size: 4096,
        }
    }
}

/// What ended a [`Readline::read_line`] call. Both carry the edited bytes exactly as
/// typed; the editor is byte-oriented and never assumes an encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The user pressed Enter. Includes the trailing `\n`.
    Line(Vec<u8>),
    /// The input reached end of file. Holds whatever was typed since the last line,
    /// possibly nothing.
    Eof(Vec<u8>),
}

/// Blocking line editor. Owns the line being edited and the completion providers; the
/// caller owns the input and output streams (usually stdin in editor mode, see
/// [`crate::TerminalSession`], and stdout).
#[derive(Debug)]
pub struct Readline {
    buffer: InputBuffer,
    providers: ProviderList,
    config: ReadlineConfig,
    /// Bytes already read but not yet processed: whatever followed the last newline,
    /// or the start of an escape sequence the last read cut in two.
    pending: Vec<u8>,
    read_buf: Vec<u8>,
}

impl Readline {
    #[must_use]
    pub fn new(config: ReadlineConfig, providers: ProviderList) -> Self {
        Self {
            buffer: InputBuffer::new(config.capacity),
            providers,
            config,
            pending: Vec::new(),
            read_buf: vec![0; config.read_chunk_size.max(1)],
        }
    }

    #[must_use]
    pub fn config(&self) -> ReadlineConfig { self.config }

    #[must_use]
    pub fn input_buffer(&self) -> &InputBuffer { &self.buffer }

    /// Pre-seed the next line, see [`InputBuffer::seed`].
    pub fn input_buffer_mut(&mut self) -> &mut InputBuffer { &mut self.buffer }

    pub fn providers_mut(&mut self) -> &mut ProviderList { &mut self.providers }

    /// Print the prompt, then edit one line until Enter or end of input.
    ///
    /// Bytes left over from the previous call are processed before `input` is read
    /// again. Output is flushed after every chunk.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::IoFailure`] if reading `input` or writing `term` fails.
    /// - [`ReadlineError::OutOfMemory`] if a buffer can't grow.
    pub fn read_line(
        &mut self,
        input: &mut dyn Read,
        term: &mut dyn Write,
        before_prompt: &mut BeforePromptFn<'_>,
    ) -> Result<ReadlineEvent, ReadlineError> {
        before_prompt(term)?;
        self.buffer.render(term)?;
        term.flush()?;

        let mut unprocessed = std::mem::take(&mut self.pending);
        let mut should_read = unprocessed.is_empty();
        loop {
            if should_read {
                let count = read_retrying_interrupted(input, &mut self.read_buf)?;
                if count == 0 {
                    let mut partial = Vec::new();
                    partial.try_reserve_exact(self.buffer.len())?;
                    partial.extend_from_slice(self.buffer.content());
                    self.buffer.reset();
                    tracing::debug!(message = "end of input", partial = %partial.escape_ascii());
                    return Ok(ReadlineEvent::Eof(partial));
                }
                unprocessed.try_reserve(count)?;
                unprocessed.extend_from_slice(&self.read_buf[..count]);
            }
            should_read = true;

            let outcome = process_chunk(
                &unprocessed,
                &mut self.buffer,
                &mut self.providers,
                term,
                before_prompt,
            );
            term.flush()?;

            match outcome? {
                ChunkOutcome::LineComplete { line, consumed } => {
                    self.pending = unprocessed.split_off(consumed);
                    tracing::debug!(message = "line submitted", line = %line.escape_ascii());
                    return Ok(ReadlineEvent::Line(line));
                }
                ChunkOutcome::Pending { incomplete_tail } => {
                    let processed = unprocessed.len() - incomplete_tail;
                    unprocessed.drain(..processed);
                }
            }
        }
    }
}

fn read_retrying_interrupted(input: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match input.read(buf) {
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChunkedInputMock, FailingInputMock, FilesystemPath, StaticVocabulary,
                TerminalScreenMock, try_create_temp_dir};
    use pretty_assertions::assert_eq;

    fn prompt(term: &mut dyn Write) -> io::Result<()> { term.write_all(b"$ ") }

    fn shell_readline() -> Readline {
        let vocabulary = StaticVocabulary::try_new(["help", "exit"]).unwrap();
        Readline::new(ReadlineConfig::default(), ProviderList::new(vocabulary))
    }

    #[test]
    fn test_line_includes_newline_and_prompt_printed_once() {
        let mut readline = shell_readline();
        let mut input = ChunkedInputMock::new(["ec", "ho hi", "\n"]);
        let mut term = vec![];

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();

        assert_eq!(event, ReadlineEvent::Line(b"echo hi\n".to_vec()));
        assert_eq!(term, b"$ echo hi\n");
        assert!(readline.input_buffer().is_empty());
    }

    #[test]
    fn test_same_input_renders_identically() {
        let run = || {
            let mut readline = shell_readline();
            let mut input = ChunkedInputMock::new([b"abc\x1b[Dx\x7f\x01he\t\n".as_slice()]);
            let mut term = vec![];
            let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
            (event, term)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_bytes_after_newline_go_to_next_call() {
        let mut readline = shell_readline();
        let mut input = ChunkedInputMock::new(["one\ntwo\nthr", "ee\n"]);
        let mut term = vec![];

        let mut lines = vec![];
        for _ in 0..3 {
            match readline.read_line(&mut input, &mut term, &mut prompt).unwrap() {
                ReadlineEvent::Line(line) => lines.push(line),
                ReadlineEvent::Eof(partial) => panic!("unexpected eof: {partial:?}"),
            }
        }
        assert_eq!(
            lines,
            vec![b"one\n".to_vec(), b"two\n".to_vec(), b"three\n".to_vec()]
        );
        // The second line never needed a read of its own.
        assert_eq!(input.read_count, 2);
        assert_eq!(
            TerminalScreenMock::replay(&term).lines(),
            vec!["$ one", "$ two", "$ three", ""]
        );
    }

    #[test]
    fn test_escape_split_across_reads_is_not_inserted() {
        let mut readline = shell_readline();
        let mut input = ChunkedInputMock::new([
            b"foo bar\x1b[1".as_slice(),
            b";5D".as_slice(),
            b"X\n".as_slice(),
        ]);
        let mut term = vec![];

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Line(b"foo Xbar\n".to_vec()));
    }

    #[test]
    fn test_non_utf8_bytes_are_returned_unchanged() {
        let mut readline = shell_readline();
        // A Latin-1 byte, then a UTF-8 sequence cut in half by one delete.
        let mut input = ChunkedInputMock::new([
            b"caf\xe9\n".as_slice(),
            b"x\xc3\xa9\x7f\n".as_slice(),
        ]);
        let mut term = vec![];

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Line(b"caf\xe9\n".to_vec()));

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Line(b"x\xc3\n".to_vec()));
    }

    #[test]
    fn test_eof_returns_partial_line() {
        let mut readline = shell_readline();
        let mut input = ChunkedInputMock::new(["partial"]);
        let mut term = vec![];

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Eof(b"partial".to_vec()));
        assert!(readline.input_buffer().is_empty());

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Eof(vec![]));
    }

    #[test]
    fn test_read_error_is_io_failure_after_retrying_interrupted() {
        let mut readline = shell_readline();
        let mut input = FailingInputMock {
            kind: io::ErrorKind::BrokenPipe,
            interruptions_left: 3,
        };
        let mut term = vec![];

        let result = readline.read_line(&mut input, &mut term, &mut prompt);
        assert!(matches!(
            result,
            Err(ReadlineError::IoFailure(ref error)) if error.kind() == io::ErrorKind::BrokenPipe
        ));
        assert_eq!(input.interruptions_left, 0);
    }

    #[test]
    fn test_pre_seeded_content_is_rendered_after_prompt() {
        let mut readline = shell_readline();
        readline.input_buffer_mut().seed(b"go ").unwrap();
        let mut input = ChunkedInputMock::new(["src\n"]);
        let mut term = vec![];

        let event = readline.read_line(&mut input, &mut term, &mut prompt).unwrap();
        assert_eq!(event, ReadlineEvent::Line(b"go src\n".to_vec()));
        assert_eq!(term, b"$ go src\n");
    }

    #[test]
    fn test_listing_reprints_prompt_through_hook() {
        let dir = try_create_temp_dir().unwrap();
        std::fs::write(dir.join("a.txt"), b"").unwrap();
        std::fs::write(dir.join("b.txt"), b"").unwrap();
        let mut readline = Readline::new(
            ReadlineConfig::default(),
            ProviderList::new(StaticVocabulary::try_new(["show"]).unwrap())
                .with_provider(FilesystemPath::new().with_base_dir(dir.as_path())),
        );
        let mut input = ChunkedInputMock::new(["show ./\t", "a\t\n"]);
        let mut term = vec![];
        let mut prompt_count = 0;
        let mut counting_prompt = |term: &mut dyn Write| -> io::Result<()> {
            prompt_count += 1;
            term.write_all(b"$ ")
        };

        let event = readline
            .read_line(&mut input, &mut term, &mut counting_prompt)
            .unwrap();
        assert_eq!(event, ReadlineEvent::Line(b"show ./a.txt\n".to_vec()));
        assert_eq!(prompt_count, 2);
        assert_eq!(
            TerminalScreenMock::replay(&term).lines(),
            vec!["$ show ./", "a.txt", "b.txt", "$ show ./a.txt", ""]
        );
    }
}
