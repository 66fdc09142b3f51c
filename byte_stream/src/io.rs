//! Adapters from `std::io` readers and writers.

use std::io::{self, Read, Write};

use crate::{ByteSink, ByteSource, StreamError};

/// Byte sink over any [`Write`].
///
/// `flush` forwards to the writer. `close` flushes once and refuses any
/// further writes. The writer itself is released when the sink is dropped or
/// unwrapped with [`IoSink::into_inner`].
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    closed: bool,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        self.inner.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.flush()?;
        Ok(())
    }
}

/// Byte source over any [`Read`].
///
/// Mark/reset works like a classic buffered stream. After `mark(limit)` every
/// byte handed out is recorded, up to `limit` bytes. `reset` queues the
/// recording for replay ahead of the reader. Reading past the limit drops
/// the recording and invalidates the mark.
///
/// # Examples
///
/// ```
/// use byte_stream::{ByteSource, IoSource};
///
/// let mut source = IoSource::new(&b"abc"[..]);
/// source.mark(2);
/// assert_eq!(source.read_byte().unwrap(), Some(b'a'));
/// assert_eq!(source.read_byte().unwrap(), Some(b'b'));
/// source.reset().unwrap();
/// assert_eq!(source.read_byte().unwrap(), Some(b'a'));
/// ```
#[derive(Debug)]
pub struct IoSource<R: Read> {
    inner: R,
    replay: Vec<u8>,
    replay_pos: usize,
    mark: Option<Recording>,
}

#[derive(Debug)]
struct Recording {
    limit: usize,
    bytes: Vec<u8>,
    overflowed: bool,
}

impl Recording {
    fn record(&mut self, byte: u8) {
        if self.overflowed {
            return;
        }
        if self.bytes.len() < self.limit {
            self.bytes.push(byte);
        } else {
            self.overflowed = true;
            self.bytes = Vec::new();
        }
    }
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            replay: Vec::new(),
            replay_pos: 0,
            mark: None,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Returns the wrapped reader. Bytes queued for replay are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_from_inner(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.inner.read_exact(&mut byte) {
            Ok(()) => Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        let next = if self.replay_pos < self.replay.len() {
            let byte = self.replay[self.replay_pos];
            self.replay_pos += 1;
            if self.replay_pos == self.replay.len() {
                self.replay = Vec::new();
                self.replay_pos = 0;
            }
            Some(byte)
        } else {
            self.next_from_inner()?
        };

        if let (Some(byte), Some(mark)) = (next, self.mark.as_mut()) {
            mark.record(byte);
        }
        Ok(next)
    }

    fn mark(&mut self, limit: usize) {
        self.mark = Some(Recording {
            limit,
            bytes: Vec::new(),
            overflowed: false,
        });
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        let mark = self.mark.as_mut().ok_or(StreamError::NoMark)?;
        if mark.overflowed {
            return Err(StreamError::MarkInvalidated { limit: mark.limit });
        }

        // Recorded bytes go back in front of whatever was still queued.
        let mut replay = std::mem::take(&mut mark.bytes);
        replay.extend_from_slice(&self.replay[self.replay_pos..]);
        log::trace!("io source reset, {} bytes queued for replay", replay.len());

        self.replay = replay;
        self.replay_pos = 0;
        Ok(())
    }
}
