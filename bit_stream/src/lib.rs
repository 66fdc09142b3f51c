//! # bit_stream
//!
//! Bit-granular reading and writing layered on byte sinks and sources.
//!
//! Values of 1 to 32 bits are packed most significant bit first within each
//! byte. The trailing partial byte is zero-padded when the writer is closed.
//!
//! ```rust
//! use bit_stream::{BitReader, BitWriter};
//! use byte_stream::{MemorySink, MemorySource};
//!
//! let mut writer = BitWriter::new(MemorySink::new());
//! writer.write_bits(5, 3).unwrap();
//! writer.write_bits(1000, 10).unwrap();
//! writer.write_bit(true).unwrap();
//! writer.close().unwrap();
//!
//! // 14 bits round up to 2 bytes
//! let bytes = writer.into_inner().into_inner();
//! assert_eq!(bytes.len(), 2);
//!
//! let mut reader = BitReader::new(MemorySource::new(bytes));
//! assert_eq!(reader.read_bits(3).unwrap(), 5);
//! assert_eq!(reader.read_bits(10).unwrap(), 1000);
//! assert!(reader.read_bit().unwrap());
//! ```
//!
//! ## Rewinding to a bit position
//!
//! ```rust
//! use bit_stream::BitReader;
//!
//! let mut reader = BitReader::from(vec![0b1110_0101, 0b1000_0000]);
//! reader.read_bits(3).unwrap();
//!
//! reader.mark(4);
//! assert_eq!(reader.read_bits(6).unwrap(), 0b00101_1);
//! reader.reset().unwrap();
//! assert_eq!(reader.read_bits(6).unwrap(), 0b00101_1);
//! ```
//!

pub mod error;
pub use error::{BitStreamError, Result};

mod bit_ops;

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

pub use byte_stream;
