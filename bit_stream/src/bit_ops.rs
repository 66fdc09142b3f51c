//! The single-byte bit accumulator shared by the writer and reader.
//!
//! Both sides keep the meaningful bits at the top of `buffer`, MSB first:
//! the writer fills from the top down, the reader drains from the top and
//! shifts the remainder up.

use crate::{BitStreamError, Result};

pub(crate) const BITS_PER_BYTE: u32 = 8;
pub(crate) const MAX_BITS: u32 = 32;

/// Rejects bit counts outside `1..=32`.
#[inline(always)]
pub(crate) fn validate_bit_count(n: u32) -> Result<()> {
    if (1..=MAX_BITS).contains(&n) {
        Ok(())
    } else {
        Err(BitStreamError::InvalidBitCount(n))
    }
}

/// Mask with the low `n` bits set, for `n` in `0..=32`.
#[inline(always)]
pub(crate) fn low_mask(n: u32) -> u32 {
    if n >= MAX_BITS {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Accumulator {
    occupied: u8,
    buffer: u8,
}

impl Accumulator {
    pub(crate) const EMPTY: Accumulator = Accumulator {
        occupied: 0,
        buffer: 0,
    };

    #[inline]
    pub(crate) fn occupied(&self) -> u32 {
        self.occupied as u32
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.occupied as u32 == BITS_PER_BYTE
    }

    /// Moves as many of the top `remaining` bits of `value` as fit into the
    /// free low part of the buffer. Returns how many bits were taken.
    #[inline]
    pub(crate) fn fill(&mut self, value: u32, remaining: u32) -> u32 {
        debug_assert!(!self.is_full());
        let empty = BITS_PER_BYTE - self.occupied();
        let len = remaining.min(empty);
        let offset = remaining - len;

        let bits = (value >> offset) & low_mask(len);
        self.buffer |= (bits << (empty - len)) as u8;
        self.occupied += len as u8;
        len
    }

    /// Empties a writer accumulator, returning the byte it held.
    #[inline]
    pub(crate) fn take_byte(&mut self) -> u8 {
        let byte = self.buffer;
        *self = Self::EMPTY;
        byte
    }

    /// Replaces a drained reader accumulator with a fresh byte.
    #[inline]
    pub(crate) fn load(&mut self, byte: u8) {
        debug_assert!(self.is_empty());
        self.buffer = byte;
        self.occupied = BITS_PER_BYTE as u8;
    }

    /// Consumes up to `wanted` bits from the top of the buffer.
    /// Returns `(bits, count)` with the bits right-aligned.
    #[inline]
    pub(crate) fn drain(&mut self, wanted: u32) -> (u32, u32) {
        debug_assert!(!self.is_empty());
        let count = wanted.min(self.occupied());
        let bits = (self.buffer >> (BITS_PER_BYTE - count)) as u32;

        self.buffer = ((self.buffer as u16) << count) as u8;
        self.occupied -= count as u8;
        (bits, count)
    }
}
