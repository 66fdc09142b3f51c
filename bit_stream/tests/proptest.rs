// tests/proptest.rs

use bit_stream::byte_stream::{ByteSource, IoSource, MemorySink, MemorySource};
use bit_stream::{BitReader, BitStreamError, BitWriter};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// A bit width in 1..=32 paired with a value that fits in it.
fn field() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=32).prop_flat_map(|n| {
        let max = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        (0..=max, Just(n))
    })
}

fn pack(fields: &[(u32, u32)]) -> Vec<u8> {
    let mut writer = BitWriter::new(MemorySink::new());
    for &(value, n) in fields {
        writer.write_bits(value, n).unwrap();
    }
    writer.close().unwrap();
    writer.into_inner().into_inner()
}

fn total_bits(fields: &[(u32, u32)]) -> usize {
    fields.iter().map(|&(_, n)| n as usize).sum()
}

//
// -----------------------------------------------------------------------------
// Round trip
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_round_trip(ref fields in prop::collection::vec(field(), 0..200)) {
        let bytes = pack(fields);
        prop_assert_eq!(bytes.len(), total_bits(fields).div_ceil(8));

        let mut reader = BitReader::new(MemorySource::new(bytes));
        for &(value, n) in fields {
            prop_assert_eq!(reader.read_bits(n).unwrap(), value);
        }
    }
}

proptest! {
    #[test]
    fn prop_trailing_bits_are_zero(ref fields in prop::collection::vec(field(), 1..50)) {
        let bytes = pack(fields);
        let used = total_bits(fields) % 8;
        if used != 0 {
            let last = *bytes.last().unwrap();
            prop_assert_eq!(last & (0xFF >> used), 0);
        }
    }
}

proptest! {
    #[test]
    fn prop_oversized_values_rejected(n in 1u32..32, excess in 0u32..1024) {
        let value = (1u32 << n).saturating_add(excess);
        let mut writer = BitWriter::new(MemorySink::new());
        let result = writer.write_bits(value, n);
        prop_assert!(matches!(result, Err(BitStreamError::ValueOverflow(v, w)) if v == value && w == n));
        prop_assert!(writer.is_aligned());
        prop_assert!(writer.get_ref().is_empty());
    }
}

//
// -----------------------------------------------------------------------------
// Byte-oriented compatibility
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_bytes_match_write_bits(
        lead in 0u32..8,
        ref data in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        // Byte writes and 8-bit writes must produce the same stream at any offset.
        let mut by_bytes = BitWriter::new(MemorySink::new());
        let mut by_bits = BitWriter::new(MemorySink::new());
        if lead > 0 {
            by_bytes.write_bits(0, lead).unwrap();
            by_bits.write_bits(0, lead).unwrap();
        }
        by_bytes.write_bytes(data).unwrap();
        for &b in data {
            by_bits.write_bits(b as u32, 8).unwrap();
        }
        by_bytes.close().unwrap();
        by_bits.close().unwrap();

        prop_assert_eq!(by_bytes.get_ref().as_slice(), by_bits.get_ref().as_slice());
    }
}

proptest! {
    #[test]
    fn prop_read_past_end_is_all_or_nothing(len in 0usize..8, extra in 1u32..=32) {
        let bytes = vec![0xA5u8; len];
        let available = (len * 8) as u32;
        let mut reader = BitReader::new(MemorySource::new(bytes));

        // ask for more bits than the source holds
        let wanted = available + extra;
        if wanted <= 32 {
            prop_assert!(matches!(reader.read_bits(wanted), Err(BitStreamError::EndOfStream)));
        } else {
            for _ in 0..len {
                reader.read_bits(8).unwrap();
            }
            prop_assert!(matches!(reader.read_bits(extra), Err(BitStreamError::EndOfStream)));
        }
        prop_assert_eq!(reader.read_byte().unwrap(), None);
    }
}

proptest! {
    #[test]
    fn prop_skip_boundary(len in 0usize..64, n in 0u64..128) {
        let mut reader = BitReader::new(MemorySource::new(vec![0u8; len]));
        let skipped = reader.skip(n).unwrap();
        prop_assert_eq!(skipped, n.min(len as u64));
        if n >= len as u64 {
            prop_assert_eq!(reader.read_byte().unwrap(), None);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Mark / reset
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_reset_returns_to_exact_bit(
        ref data in prop::collection::vec(any::<u8>(), 8..32),
        skip_bits in 0u32..24,
        probe in 1u32..=32
    ) {
        let limit = data.len();

        let sources: Vec<Box<dyn ByteSource>> = vec![
            Box::new(MemorySource::from_slice(data)),
            Box::new(IoSource::new(std::io::Cursor::new(data.clone()))),
        ];

        for source in sources {
            let mut reader = BitReader::new(source);
            if skip_bits > 0 {
                reader.read_bits(skip_bits).unwrap();
            }
            reader.mark(limit);
            let first = reader.read_bits(probe).unwrap();

            reader.reset().unwrap();
            prop_assert_eq!(reader.read_bits(probe).unwrap(), first);

            // and again: the mark survives a reset
            reader.reset().unwrap();
            prop_assert_eq!(reader.read_bits(probe).unwrap(), first);
        }
    }
}
