use super::*;

/// `Cursor` wraps an in-memory buffer, providing [`Reader`] functionality for types
/// implementing <code>[AsRef]<\[u8]></code> and [`Writer`] functionality for types
/// implementing <code>[AsMut]<\[u8]></code>.
///
/// Unlike `&[u8]` and `&mut [u8]`, which are consumed as they are read or written,
/// a `Cursor` keeps its buffer and tracks a position, so it can be rewound and reused.
///
/// # Examples
///
/// Writing several varints into a fixed buffer, then reading them back.
///
/// ```
/// use varcode::io::Cursor;
///
/// let mut cursor = Cursor::new([0u8; 16]);
/// varcode::encode_u64(1 << 40, &mut cursor).unwrap();
/// varcode::encode_i32(-3, &mut cursor).unwrap();
/// let written = cursor.position();
///
/// cursor.set_position(0);
/// assert_eq!(varcode::decode_u64(&mut cursor).unwrap(), 1 << 40);
/// assert_eq!(varcode::decode_i32(&mut cursor).unwrap(), -3);
/// assert_eq!(cursor.position(), written);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cursor<T> {
    inner: T,
    pos: usize,
}

impl<T> Cursor<T> {
    pub const fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }

    /// Creates a new cursor at the given position.
    pub const fn new_at(inner: T, pos: usize) -> Self {
        Self { inner, pos }
    }

    /// Sets the position of the cursor.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Consumes the cursor and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Returns a reference to the inner value.
    pub const fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Returns the current position of the cursor.
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Cursor<T>
where
    T: AsRef<[u8]>,
{
    /// Returns a slice of the remaining bytes in the cursor.
    #[inline]
    pub fn remaining_slice(&self) -> &[u8] {
        let slice = self.inner.as_ref();
        &slice[self.pos.min(slice.len())..]
    }
}

impl<T> Reader for Cursor<T>
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn read_byte(&mut self) -> ReadResult<u8> {
        let byte = self.peek()?;
        // `peek` succeeded, so `pos` is in bounds and cannot be `usize::MAX`.
        self.pos = self.pos.wrapping_add(1);
        Ok(byte)
    }

    #[inline]
    fn peek(&mut self) -> ReadResult<u8> {
        self.remaining_slice()
            .first()
            .copied()
            .ok_or_else(end_of_input)
    }
}

impl<T> Writer for Cursor<T>
where
    T: AsMut<[u8]>,
{
    #[inline]
    fn write_byte(&mut self, byte: u8) -> WriteResult<()> {
        let Some(dst) = self.inner.as_mut().get_mut(self.pos) else {
            return Err(write_size_limit(1));
        };
        *dst = byte;
        self.pos = self.pos.wrapping_add(1);
        Ok(())
    }

    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        let pos = self.pos;
        let Some(dst) = pos
            .checked_add(src.len())
            .and_then(|end| self.inner.as_mut().get_mut(pos..end))
        else {
            return Err(write_size_limit(src.len()));
        };
        dst.copy_from_slice(src);
        self.pos = pos.wrapping_add(src.len());
        Ok(())
    }
}
