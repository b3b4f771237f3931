use {super::*, alloc::vec::Vec};

/// Writer implementation for `Vec<u8>` that appends to the vector. The vector will grow as needed.
///
/// # Examples
///
/// Writing to a new vector.
/// ```
/// # #[cfg(feature = "alloc")] {
/// # use varcode::io::Writer;
/// let mut vec = Vec::new();
/// vec.write_byte(1).unwrap();
/// vec.write(&[2, 3]).unwrap();
/// assert_eq!(vec, &[1, 2, 3]);
/// # }
/// ```
///
/// Writing to an existing vector.
/// ```
/// # #[cfg(feature = "alloc")] {
/// # use varcode::io::Writer;
/// let mut vec = vec![1, 2, 3];
/// varcode::encode_u32(300, &mut vec).unwrap();
/// assert_eq!(vec, &[1, 2, 3, 0xAC, 0x02]);
/// # }
/// ```
impl Writer for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> WriteResult<()> {
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        self.extend_from_slice(src);
        Ok(())
    }
}
