use bit_stream::byte_stream::{MemorySink, MemorySource};
use bit_stream::{BitReader, BitStreamError, BitWriter};

fn main() {
    println!("=== Bit Stream Examples ===\n");

    // Example 1: Packing a record header
    let _ = example_header();

    // Example 2: Peeking with mark/reset
    let _ = example_peek();

    // Example 3: Size comparison
    let _ = example_size();
}

fn example_header() -> Result<(), BitStreamError> {
    println!("Example 1: Packing a header (3-bit version, 1-bit flag, 12-bit length)");

    let mut writer = BitWriter::new(MemorySink::new());
    writer.write_bits(5, 3)?;
    writer.write_bit(true)?;
    writer.write_bits(0xABC, 12)?;
    writer.close()?;

    let bytes = writer.into_inner().into_inner();
    println!("  Encoded: {:02X?}", bytes);

    let mut reader = BitReader::new(MemorySource::new(bytes));
    println!("  Version: {}", reader.read_bits(3)?);
    println!("  Flag:    {}", reader.read_bit()?);
    println!("  Length:  {:#X}", reader.read_bits(12)?);
    println!();

    Ok(())
}

fn example_peek() -> Result<(), BitStreamError> {
    println!("Example 2: Peeking at a tag without consuming it");

    let mut reader = BitReader::from(vec![0b0110_1011, 0b1100_0000]);
    reader.read_bits(2)?;

    reader.mark(2);
    let tag = reader.read_bits(4)?;
    reader.reset()?;

    println!("  Peeked tag: 0b{:04b}", tag);
    println!("  Read again: 0b{:04b}", reader.read_bits(4)?);
    println!();

    Ok(())
}

fn example_size() -> Result<(), BitStreamError> {
    println!("Example 3: Size comparison");

    let count = 10_000u32;
    let mut writer = BitWriter::new(MemorySink::new());
    for i in 0..count {
        writer.write_bits(i % 4096, 12)?;
    }
    writer.close()?;

    let packed_bytes = writer.get_ref().len();
    let standard_bytes = count as usize * 4;
    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Writing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
