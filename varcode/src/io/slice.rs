use {super::*, core::mem};

impl Reader for &[u8] {
    #[inline]
    fn read_byte(&mut self) -> ReadResult<u8> {
        let Some((&byte, rest)) = self.split_first() else {
            return Err(end_of_input());
        };
        *self = rest;
        Ok(byte)
    }

    #[inline]
    fn peek(&mut self) -> ReadResult<u8> {
        self.first().copied().ok_or_else(end_of_input)
    }
}

/// Get a slice of `len` bytes for writing, advancing the writer by `len` bytes, or
/// returning an error if the input slice does not have at least `len` bytes remaining.
#[inline]
fn advance_slice_mut_checked<'a>(input: &mut &'a mut [u8], len: usize) -> WriteResult<&'a mut [u8]> {
    let buffer = mem::take(input);
    if buffer.len() < len {
        *input = buffer;
        return Err(write_size_limit(len));
    }
    let (dst, rest) = buffer.split_at_mut(len);
    *input = rest;
    Ok(dst)
}

impl Writer for &mut [u8] {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> WriteResult<()> {
        let Some((dst, rest)) = mem::take(self).split_first_mut() else {
            return Err(write_size_limit(1));
        };
        *dst = byte;
        *self = rest;
        Ok(())
    }

    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        advance_slice_mut_checked(self, src.len())?.copy_from_slice(src);
        Ok(())
    }
}
