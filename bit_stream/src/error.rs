use byte_stream::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitStreamError {
    #[error("Bit count must be in the range 1..=32, got {0}")]
    InvalidBitCount(u32),

    #[error("Value {0} does not fit in {1} bits")]
    ValueOverflow(u32, u32),

    #[error("end of stream reached before all requested bits were read")]
    EndOfStream,

    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
}

impl BitStreamError {
    /// True for argument errors, which are raised before any state changes.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BitStreamError::InvalidBitCount(_) | BitStreamError::ValueOverflow(..)
        )
    }
}

impl From<std::io::Error> for BitStreamError {
    fn from(err: std::io::Error) -> Self {
        BitStreamError::Stream(StreamError::Io(err))
    }
}

impl From<BitStreamError> for std::io::Error {
    fn from(err: BitStreamError) -> Self {
        use std::io::ErrorKind;

        match err {
            BitStreamError::Stream(StreamError::Io(e)) => e,
            BitStreamError::EndOfStream => {
                std::io::Error::new(ErrorKind::UnexpectedEof, BitStreamError::EndOfStream)
            }
            e @ (BitStreamError::InvalidBitCount(_) | BitStreamError::ValueOverflow(..)) => {
                std::io::Error::new(ErrorKind::InvalidInput, e)
            }
            e => std::io::Error::other(e),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitStreamError>;
