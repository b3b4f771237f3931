//! Error types and helpers.
use {crate::io, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    WriteError(#[from] WriteError),
    #[error(transparent)]
    ReadError(#[from] ReadError),
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] io::WriteError),
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::ReadError),
    #[error("Variable length quantity is too long: exceeds {max_bytes} bytes")]
    MalformedVarint { max_bytes: usize },
}

impl ReadError {
    /// Whether the source ran out of bytes before a terminating byte was found.
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, ReadError::Io(io::ReadError::EndOfInput))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
pub type WriteResult<T> = core::result::Result<T, WriteError>;
pub type ReadResult<T> = core::result::Result<T, ReadError>;

#[cold]
pub const fn malformed_varint(max_bytes: usize) -> ReadError {
    ReadError::MalformedVarint { max_bytes }
}
