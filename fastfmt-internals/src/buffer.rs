//! The growable text accumulator every argument renders into.
//!
//! An [`OutputBuffer`] is created fresh for each formatting call, reserved
//! once up front from the template length plus the arguments' size
//! estimates, and finally consumed to produce the result string.

use alloc::string::String;

/// Capacity used by [`OutputBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Growable UTF-8 text accumulator with pre-reservation.
///
/// Appends only ever take complete `&str` or `char` values, so the content is
/// always well-formed UTF-8.
///
/// # Examples
///
/// ```
/// use fastfmt_internals::buffer::OutputBuffer;
///
/// let mut buf = OutputBuffer::with_capacity(16);
/// buf.append("answer=");
/// buf.append_char('4');
/// buf.append_char('2');
/// assert_eq!(buf.len(), 9);
/// assert_eq!(buf.take(), "answer=42");
/// assert!(buf.is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct OutputBuffer {
    /// The accumulated text
    inner: String,
}

impl OutputBuffer {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] bytes reserved.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer with at least `capacity` bytes reserved.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    /// Reserves room for at least `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Appends a string slice.
    #[inline]
    pub fn append(&mut self, text: &str) {
        self.inner.push_str(text);
    }

    /// Appends a single character.
    #[inline]
    pub fn append_char(&mut self, ch: char) {
        self.inner.push(ch);
    }

    /// Moves the accumulated text out, leaving the buffer empty.
    ///
    /// The returned string keeps the allocation; the buffer starts over with
    /// no capacity.
    #[must_use]
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.inner)
    }

    /// Consumes the buffer and returns the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Clears the content, retaining the allocation for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Shortens the content to `len` bytes.
    ///
    /// Has no effect if `len` is greater than the current length.
    ///
    /// # Panics
    ///
    /// Panics if `len` does not lie on a `char` boundary.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Length of the content in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no text has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of bytes the buffer can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// The accumulated text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl core::fmt::Write for OutputBuffer {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.append(s);
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> core::fmt::Result {
        self.append_char(c);
        Ok(())
    }
}

impl core::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.inner, f)
    }
}

impl core::fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<OutputBuffer> for String {
    fn from(buffer: OutputBuffer) -> Self {
        buffer.into_string()
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    #[test]
    fn test_new_reserves_default_capacity() {
        let buf = OutputBuffer::new();
        assert!(buf.capacity() >= DEFAULT_CAPACITY);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_reserve_then_append_does_not_reallocate() {
        let mut buf = OutputBuffer::with_capacity(0);
        buf.reserve(64);
        let capacity = buf.capacity();
        for _ in 0..8 {
            buf.append("12345678");
        }
        assert_eq!(buf.len(), 64);
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn test_take_leaves_buffer_empty() {
        let mut buf = OutputBuffer::with_capacity(8);
        buf.append("abc");
        assert_eq!(buf.take(), "abc");
        assert_eq!(buf.len(), 0);
        buf.append_char('x');
        assert_eq!(buf.as_str(), "x");
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut buf = OutputBuffer::with_capacity(32);
        buf.append("some text");
        let capacity = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn test_truncate_and_multibyte() {
        let mut buf = OutputBuffer::with_capacity(8);
        buf.append("ab");
        buf.append_char('é');
        assert_eq!(buf.len(), 4);
        buf.truncate(2);
        assert_eq!(buf.as_str(), "ab");
    }

    #[test]
    fn test_fmt_write() {
        let mut buf = OutputBuffer::with_capacity(8);
        write!(buf, "{}-{}", 1, 'z').unwrap();
        assert_eq!(buf.into_string(), "1-z");
    }
}
