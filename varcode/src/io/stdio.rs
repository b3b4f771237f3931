use {
    super::*,
    std::io::{ErrorKind, Read, Write},
};

/// [`Reader`] over any [`std::io::Read`] implementation.
///
/// Bytes are pulled one at a time, so wrap unbuffered sources (files, sockets) in a
/// [`std::io::BufReader`] first. A short read at the end of the stream surfaces as
/// [`ReadError::EndOfInput`]; every other I/O failure as [`ReadError::Io`].
///
/// # Examples
///
/// ```
/// use varcode::io::IoReader;
///
/// let stream = std::io::Cursor::new([0xAC, 0x02]);
/// let mut reader = IoReader::new(stream);
/// assert_eq!(varcode::decode_u32(&mut reader).unwrap(), 300);
/// ```
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> IoReader<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Consumes the reader and returns the inner value.
    ///
    /// A byte obtained through [`Reader::peek`] and not yet read is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> ReadResult<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Err(end_of_input()),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Err(end_of_input()),
                Err(e) => return Err(ReadError::Io(e)),
            }
        }
    }
}

impl<R: Read> Reader for IoReader<R> {
    #[inline]
    fn read_byte(&mut self) -> ReadResult<u8> {
        match self.peeked.take() {
            Some(byte) => Ok(byte),
            None => self.next_byte(),
        }
    }

    #[inline]
    fn peek(&mut self) -> ReadResult<u8> {
        if let Some(byte) = self.peeked {
            return Ok(byte);
        }
        let byte = self.next_byte()?;
        self.peeked = Some(byte);
        Ok(byte)
    }
}

/// [`Writer`] over any [`std::io::Write`] implementation.
///
/// No buffering is added; [`Writer::finish`] flushes the inner writer.
#[derive(Debug)]
pub struct IoWriter<W> {
    inner: W,
}

impl<W: Write> IoWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consumes the writer and returns the inner value.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Writer for IoWriter<W> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> WriteResult<()> {
        Ok(self.inner.write_all(&[byte])?)
    }

    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        Ok(self.inner.write_all(src)?)
    }

    fn finish(&mut self) -> WriteResult<()> {
        Ok(self.inner.flush()?)
    }
}
