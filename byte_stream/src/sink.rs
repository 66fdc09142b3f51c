use crate::StreamError;

/// A destination that accepts one byte at a time.
///
/// Implementations must reject writes after [`ByteSink::close`] with
/// [`StreamError::Closed`]. Closing an already closed sink is a no-op.
pub trait ByteSink {
    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError>;

    /// Pushes any internally buffered bytes to their final destination.
    fn flush(&mut self) -> Result<(), StreamError>;

    /// Flushes and releases the sink.
    fn close(&mut self) -> Result<(), StreamError>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), StreamError> {
        (**self).flush()
    }

    #[inline]
    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), StreamError> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), StreamError> {
        (**self).flush()
    }

    #[inline]
    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
}
