//! # byte_stream
//!
//! Byte-at-a-time sinks and sources with classic stream semantics:
//! flush/close on the write side, end-of-data and mark/reset on the read side.
//!
//! ```rust
//! use byte_stream::{ByteSink, ByteSource, MemorySink, MemorySource};
//!
//! let mut sink = MemorySink::new();
//! sink.write_byte(0xAB).unwrap();
//! sink.close().unwrap();
//!
//! let mut source = MemorySource::new(sink.into_inner());
//! source.mark(1);
//! assert_eq!(source.read_byte().unwrap(), Some(0xAB));
//! assert_eq!(source.read_byte().unwrap(), None);
//!
//! source.reset().unwrap();
//! assert_eq!(source.read_byte().unwrap(), Some(0xAB));
//! ```

pub mod error;
pub mod io;
pub mod memory;
pub mod sink;
pub mod source;

#[cfg(feature = "file")]
pub mod file;

pub use error::StreamError;
pub use io::{IoSink, IoSource};
pub use memory::{MemorySink, MemorySource};
pub use sink::ByteSink;
pub use source::ByteSource;

#[cfg(feature = "file")]
pub use file::{FileSink, FileSource};
