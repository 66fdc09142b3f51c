//! In-memory sink and source.

use crate::{ByteSink, ByteSource, StreamError};

/// Growable in-memory byte sink.
///
/// # Examples
///
/// ```
/// use byte_stream::{ByteSink, MemorySink, StreamError};
///
/// let mut sink = MemorySink::new();
/// sink.write_byte(1).unwrap();
/// sink.write_byte(2).unwrap();
/// sink.close().unwrap();
///
/// assert!(sink.is_closed());
/// assert!(matches!(sink.write_byte(3), Err(StreamError::Closed)));
/// assert_eq!(sink.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    bytes: Vec<u8>,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            closed: false,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl ByteSink for MemorySink {
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        self.bytes.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.closed = true;
        Ok(())
    }
}

/// In-memory byte source over an owned buffer.
///
/// Mark/reset is position based, so rewinding is cheap. The `limit` passed
/// to [`ByteSource::mark`] is still enforced so behaviour matches
/// stream-backed sources.
///
/// # Examples
///
/// ```
/// use byte_stream::{ByteSource, MemorySource, StreamError};
///
/// let mut source = MemorySource::new(vec![10, 20, 30]);
/// source.mark(1);
/// assert_eq!(source.read_byte().unwrap(), Some(10));
/// assert_eq!(source.read_byte().unwrap(), Some(20));
///
/// // Two bytes were consumed against a limit of one.
/// assert!(matches!(source.reset(), Err(StreamError::MarkInvalidated { limit: 1 })));
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource {
    bytes: Vec<u8>,
    pos: usize,
    mark: Option<Mark>,
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    limit: usize,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
            mark: None,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    /// Current read offset in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before end-of-data.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn get_ref(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for MemorySource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for MemorySource {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl ByteSource for MemorySource {
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        match self.bytes.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }

    fn mark(&mut self, limit: usize) {
        self.mark = Some(Mark {
            pos: self.pos,
            limit,
        });
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        let mark = self.mark.ok_or(StreamError::NoMark)?;
        if self.pos - mark.pos > mark.limit {
            return Err(StreamError::MarkInvalidated { limit: mark.limit });
        }
        self.pos = mark.pos;
        Ok(())
    }
}
