//! Bit-granular writer over a [`ByteSink`].
//!
//! # Examples
//!
//! ```rust
//! use bit_stream::BitWriter;
//! use byte_stream::MemorySink;
//!
//! let mut writer = BitWriter::new(MemorySink::new());
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! writer.close().unwrap();
//!
//! assert_eq!(writer.get_ref().as_slice(), &[0b1011_1000]);
//! ```

use std::io;

use byte_stream::ByteSink;

use crate::bit_ops::{self, Accumulator, BITS_PER_BYTE};
use crate::{BitStreamError, Result};

/// Packs values of 1 to 32 bits into a byte sink, most significant bit first.
///
/// Bits collect in a one-byte accumulator. A byte is handed to the sink as
/// soon as it is full. A trailing partial byte is only written by
/// [`BitWriter::close`] (or [`BitWriter::align`]), so `close` must always be
/// called to get every bit out.
#[derive(Debug)]
pub struct BitWriter<S: ByteSink> {
    sink: S,
    acc: Accumulator,
    closed: bool,
}

impl<S: ByteSink> BitWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            acc: Accumulator::EMPTY,
            closed: false,
        }
    }

    /// Appends the low `n` bits of `value`, most significant first.
    ///
    /// # Errors
    ///
    /// - [`BitStreamError::InvalidBitCount`] if `n` is not in `1..=32`
    /// - [`BitStreamError::ValueOverflow`] if `value` needs more than `n` bits
    ///
    /// Both are reported before anything is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_stream::{BitStreamError, BitWriter};
    /// use byte_stream::MemorySink;
    ///
    /// let mut writer = BitWriter::new(MemorySink::new());
    /// writer.write_bits(0xABC, 12).unwrap();
    /// assert!(matches!(
    ///     writer.write_bits(4, 2),
    ///     Err(BitStreamError::ValueOverflow(4, 2))
    /// ));
    /// assert_eq!(writer.pending_bits(), 4);
    /// ```
    pub fn write_bits(&mut self, value: u32, n: u32) -> Result<()> {
        bit_ops::validate_bit_count(n)?;
        if value > bit_ops::low_mask(n) {
            return Err(BitStreamError::ValueOverflow(value, n));
        }

        let mut remaining = n;
        while remaining > 0 {
            remaining -= self.acc.fill(value, remaining);
            if self.acc.is_full() {
                self.sink.write_byte(self.acc.take_byte())?;
            }
        }
        Ok(())
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Writes eight bits. Not byte aligned if bits are already pending.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, BITS_PER_BYTE)
    }

    /// Writes every byte of `buf` through the accumulator.
    ///
    /// Pass a sub-slice to write `length` bytes from `offset`.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Does nothing.
    ///
    /// A pending partial byte stays in the accumulator and the sink is not
    /// flushed, so the bit alignment of later writes is unaffected.
    pub fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Zero-pads the pending bits up to the next byte boundary and writes the
    /// byte. A no-op when already aligned.
    pub fn align(&mut self) -> Result<()> {
        if !self.acc.is_empty() {
            self.sink.write_byte(self.acc.take_byte())?;
        }
        Ok(())
    }

    /// Writes the pending partial byte (zero-padded), then flushes and closes
    /// the sink.
    ///
    /// Flush and close are attempted even when writing the final byte fails.
    /// The first error encountered is returned. Closing again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let pending = self.acc.occupied();
        let written = if pending > 0 {
            self.sink.write_byte(self.acc.take_byte())
        } else {
            Ok(())
        };
        log::debug!("closing bit writer, {pending} pending bits");

        if let Err(e) = &written {
            log::debug!("final byte not written: {e}");
        }
        let flushed = self.sink.flush();
        let closed = self.sink.close();

        written?;
        flushed?;
        closed?;
        Ok(())
    }

    /// Number of bits waiting in the accumulator, in `0..8`.
    pub fn pending_bits(&self) -> u32 {
        self.acc.occupied()
    }

    pub fn is_aligned(&self) -> bool {
        self.acc.is_empty()
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the sink. Pending bits are discarded; call
    /// [`BitWriter::close`] first to keep them.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ByteSink> io::Write for BitWriter<S> {
    /// Reports partial progress: an error after at least one byte yields
    /// the count written so far.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        for &byte in buf {
            if let Err(e) = self.write_byte(byte) {
                if written == 0 {
                    return Err(e.into());
                }
                break;
            }
            written += 1;
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        BitWriter::flush(self)?;
        Ok(())
    }
}
