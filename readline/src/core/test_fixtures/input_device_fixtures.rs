// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{self, Read}};

/// Mock keyboard that hands out one preset chunk per [`Read::read`] call, the way a raw
/// mode terminal delivers one burst of bytes per keystroke (or paste). Once the chunks
/// run out every read reports end of input.
#[derive(Debug, Default)]
pub struct ChunkedInputMock {
    pub chunks: VecDeque<Vec<u8>>,
    pub read_count: usize,
}

impl ChunkedInputMock {
    #[must_use]
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self {
            chunks: chunks.into_iter().map(|it| it.as_ref().to_vec()).collect(),
            read_count: 0,
        }
    }
}

impl Read for ChunkedInputMock {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_count += 1;
        let Some(mut chunk) = self.chunks.pop_front() else {
            return Ok(0);
        };
        let count = chunk.len().min(buf.len());
        buf[..count].copy_from_slice(&chunk[..count]);
        // Whatever didn't fit is delivered by the next read.
        if count < chunk.len() {
            self.chunks.push_front(chunk.split_off(count));
        }
        Ok(count)
    }
}

/// Mock keyboard whose reads always fail with `kind`, after an optional number of
/// [`io::ErrorKind::Interrupted`] failures.
#[derive(Debug)]
pub struct FailingInputMock {
    pub kind: io::ErrorKind,
    pub interruptions_left: usize,
}

impl FailingInputMock {
    #[must_use]
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            interruptions_left: 0,
        }
    }
}

impl Read for FailingInputMock {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        if self.interruptions_left > 0 {
            self.interruptions_left -= 1;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        Err(io::Error::new(self.kind, "mock input failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chunked_input_mock_hands_out_one_chunk_per_read() {
        let mut input = ChunkedInputMock::new(["ab", "c"]);
        let mut buf = [0_u8; 8];
        assert_eq!(input.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ab");
        assert_eq!(input.read(&mut buf).unwrap(), 1);
        assert_eq!(&buf[..1], b"c");
        assert_eq!(input.read(&mut buf).unwrap(), 0);
        assert_eq!(input.read_count, 3);
    }

    #[test]
    fn test_chunked_input_mock_splits_oversized_chunk() {
        let mut input = ChunkedInputMock::new(["abcd"]);
        let mut buf = [0_u8; 3];
        assert_eq!(input.read(&mut buf).unwrap(), 3);
        assert_eq!(input.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'd');
    }

    #[test]
    fn test_failing_input_mock() {
        let mut input = FailingInputMock {
            kind: io::ErrorKind::BrokenPipe,
            interruptions_left: 1,
        };
        let mut buf = [0_u8; 1];
        assert_eq!(
            input.read(&mut buf).unwrap_err().kind(),
            io::ErrorKind::Interrupted
        );
        assert_eq!(
            input.read(&mut buf).unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
    }
}
