//! [`Reader`] and [`Writer`] implementations.
//!
//! The codec only ever moves one byte at a time, so both traits are byte-oriented.
//! Anything that can hand out or accept bytes in order can sit behind them: slices,
//! vectors, [`Cursor`]s, or (with the `std` feature) any [`std::io::Read`] /
//! [`std::io::Write`] through [`IoReader`] / [`IoWriter`].
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Unexpected end of input")]
    EndOfInput,
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(std::io::Error),
}

pub type ReadResult<T> = core::result::Result<T, ReadError>;

#[cold]
pub const fn end_of_input() -> ReadError {
    ReadError::EndOfInput
}

/// A source of bytes, read in sequence.
///
/// Exhaustion is reported as [`ReadError::EndOfInput`]. Implementations must not
/// advance when they return an error.
pub trait Reader {
    /// Read and consume the next byte.
    fn read_byte(&mut self) -> ReadResult<u8>;

    /// Return the next byte without consuming it.
    fn peek(&mut self) -> ReadResult<u8>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    #[inline]
    fn read_byte(&mut self) -> ReadResult<u8> {
        (**self).read_byte()
    }

    #[inline]
    fn peek(&mut self) -> ReadResult<u8> {
        (**self).peek()
    }
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Attempting to write {0} bytes")]
    WriteSizeLimit(usize),
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cold]
pub const fn write_size_limit(len: usize) -> WriteError {
    WriteError::WriteSizeLimit(len)
}

pub type WriteResult<T> = core::result::Result<T, WriteError>;

/// A sink of bytes, written in sequence.
///
/// No buffering contract is imposed. Bytes accepted before an error stay written.
pub trait Writer {
    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> WriteResult<()>;

    /// Write all of `src`, in order.
    ///
    /// Implementations backed by contiguous memory should override this.
    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        for &byte in src {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Finalize the writer by performing any required cleanup or flushing.
    ///
    /// The codec never calls this itself; flushing policy belongs to the caller.
    fn finish(&mut self) -> WriteResult<()> {
        Ok(())
    }
}

impl<W: Writer + ?Sized> Writer for &mut W {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> WriteResult<()> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write(&mut self, src: &[u8]) -> WriteResult<()> {
        (**self).write(src)
    }

    #[inline]
    fn finish(&mut self) -> WriteResult<()> {
        (**self).finish()
    }
}

mod cursor;
mod slice;
#[cfg(feature = "std")]
mod stdio;
#[cfg(feature = "alloc")]
mod vec;
pub use cursor::Cursor;
#[cfg(feature = "std")]
pub use stdio::{IoReader, IoWriter};
