//! Buffered file-backed sinks and sources.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::{IoSink, IoSource, StreamError};

/// Sink writing to a file through a [`BufWriter`].
pub type FileSink = IoSink<BufWriter<File>>;

/// Source reading from a file through a [`BufReader`].
pub type FileSource = IoSource<BufReader<File>>;

impl FileSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let file = File::create(path)?;
        Ok(IoSink::new(BufWriter::new(file)))
    }
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let file = File::open(path)?;
        Ok(IoSource::new(BufReader::new(file)))
    }
}
