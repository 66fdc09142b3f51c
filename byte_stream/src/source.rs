use crate::StreamError;

/// A byte-at-a-time source with end-of-data and mark/reset support.
///
/// # Mark/reset
///
/// [`ByteSource::mark`] records the current position. A later
/// [`ByteSource::reset`] rewinds to it, provided no more than `limit` bytes
/// were consumed in between. A mark stays valid across resets until the next
/// `mark` replaces it.
pub trait ByteSource {
    /// Reads the next byte, or `None` once the source is exhausted.
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError>;

    /// Remembers the current position, allowing up to `limit` bytes of lookahead.
    fn mark(&mut self, limit: usize);

    /// Rewinds to the last mark.
    ///
    /// # Errors
    ///
    /// - [`StreamError::NoMark`] if `mark` was never called
    /// - [`StreamError::MarkInvalidated`] if more than `limit` bytes were read since
    fn reset(&mut self) -> Result<(), StreamError>;

    /// Whether this source honours `mark`/`reset`.
    fn mark_supported(&self) -> bool {
        true
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        (**self).read_byte()
    }

    #[inline]
    fn mark(&mut self, limit: usize) {
        (**self).mark(limit)
    }

    #[inline]
    fn reset(&mut self) -> Result<(), StreamError> {
        (**self).reset()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, StreamError> {
        (**self).read_byte()
    }

    #[inline]
    fn mark(&mut self, limit: usize) {
        (**self).mark(limit)
    }

    #[inline]
    fn reset(&mut self) -> Result<(), StreamError> {
        (**self).reset()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }
}
