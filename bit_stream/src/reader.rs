//! Bit-granular reader over a [`ByteSource`].
//!
//! # Examples
//!
//! ```rust
//! use bit_stream::BitReader;
//!
//! let mut reader = BitReader::from(vec![0b1011_1000]);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! assert_eq!(reader.buffered_bits(), 3);
//! ```

use std::io;

use byte_stream::{ByteSource, MemorySource};

use crate::bit_ops::{self, Accumulator, BITS_PER_BYTE};
use crate::{BitStreamError, Result};

/// Everything needed to rewind to an exact bit position: the source's own
/// byte-level mark plus the accumulator as it was when the mark was taken.
/// The two only ever move together.
#[derive(Clone, Copy, Debug)]
struct MarkSnapshot {
    limit: usize,
    acc: Accumulator,
}

/// Unpacks values of 1 to 32 bits from a byte source, most significant bit
/// first.
#[derive(Debug)]
pub struct BitReader<S: ByteSource> {
    source: S,
    acc: Accumulator,
    mark: Option<MarkSnapshot>,
}

impl<S: ByteSource> BitReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            acc: Accumulator::EMPTY,
            mark: None,
        }
    }

    /// Reads `n` bits and returns them right-aligned.
    ///
    /// # Errors
    ///
    /// - [`BitStreamError::InvalidBitCount`] if `n` is not in `1..=32`
    /// - [`BitStreamError::EndOfStream`] if the source runs dry first. No
    ///   partial value is returned, but the bits already pulled are consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_stream::{BitReader, BitStreamError};
    ///
    /// let mut reader = BitReader::from(vec![0xAB, 0xCD]);
    /// assert_eq!(reader.read_bits(12).unwrap(), 0xABC);
    /// assert!(matches!(reader.read_bits(5), Err(BitStreamError::EndOfStream)));
    /// ```
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        bit_ops::validate_bit_count(n)?;

        let mut result = 0u32;
        let mut remaining = n;
        while remaining > 0 {
            if self.acc.is_empty() {
                match self.source.read_byte()? {
                    Some(byte) => self.acc.load(byte),
                    None => return Err(BitStreamError::EndOfStream),
                }
            }

            let (bits, count) = self.acc.drain(remaining);
            remaining -= count;
            result |= bits << remaining;
        }
        Ok(result)
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Reads eight bits, returning `None` at end-of-data instead of
    /// [`BitStreamError::EndOfStream`].
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        match self.read_bits(BITS_PER_BYTE) {
            Ok(value) => Ok(Some(value as u8)),
            Err(BitStreamError::EndOfStream) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fills `buf` with whole bytes.
    ///
    /// Returns `None` if end-of-data is hit on the very first byte, otherwise
    /// the number of bytes copied, which is short if the data ran out part
    /// way. An empty `buf` yields `Some(0)`.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        let Some((first, rest)) = buf.split_first_mut() else {
            return Ok(Some(0));
        };
        match self.read_byte()? {
            Some(byte) => *first = byte,
            None => return Ok(None),
        }

        let mut count = 1;
        for slot in rest {
            match self.read_byte()? {
                Some(byte) => *slot = byte,
                None => break,
            }
            count += 1;
        }
        Ok(Some(count))
    }

    /// Skips up to `n` bytes, returning how many were skipped.
    ///
    /// Stops early at end-of-data. Only errors from the source are returned.
    pub fn skip(&mut self, n: u64) -> Result<u64> {
        for count in 0..n {
            if self.read_byte()?.is_none() {
                log::trace!("skip stopped at end of data after {count} of {n} bytes");
                return Ok(count);
            }
        }
        Ok(n)
    }

    /// Marks the current bit position. See [`ByteSource::mark`] for `limit`.
    pub fn mark(&mut self, limit: usize) {
        self.source.mark(limit);
        self.mark = Some(MarkSnapshot {
            limit,
            acc: self.acc,
        });
        log::trace!(
            "mark set, limit {limit}, {} bits buffered",
            self.acc.occupied()
        );
    }

    /// Rewinds to the bit position of the last [`BitReader::mark`].
    ///
    /// The accumulator is only restored once the source itself has rewound.
    /// A failed reset leaves the reader untouched.
    pub fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.acc = match self.mark {
            Some(snapshot) => {
                log::trace!(
                    "reset to mark (limit {}), {} bits buffered",
                    snapshot.limit,
                    snapshot.acc.occupied()
                );
                snapshot.acc
            }
            None => Accumulator::EMPTY,
        };
        Ok(())
    }

    pub fn mark_supported(&self) -> bool {
        self.source.mark_supported()
    }

    /// Drops the unread bits of the current byte.
    pub fn align(&mut self) {
        self.acc = Accumulator::EMPTY;
    }

    pub fn is_aligned(&self) -> bool {
        self.acc.is_empty()
    }

    /// Bits already pulled from the source but not yet returned, in `0..8`.
    pub fn buffered_bits(&self) -> u32 {
        self.acc.occupied()
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the source. Buffered bits are lost.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl From<Vec<u8>> for BitReader<MemorySource> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(MemorySource::new(bytes))
    }
}

impl From<&[u8]> for BitReader<MemorySource> {
    fn from(bytes: &[u8]) -> Self {
        Self::new(MemorySource::from_slice(bytes))
    }
}

impl<S: ByteSource> io::Read for BitReader<S> {
    /// Reports partial progress: an error after at least one byte yields
    /// the count read so far, and the error resurfaces on the next call.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.read_byte() {
                Ok(Some(byte)) => *slot = byte,
                Ok(None) => break,
                Err(e) if count == 0 => return Err(e.into()),
                Err(_) => break,
            }
            count += 1;
        }
        Ok(count)
    }
}
