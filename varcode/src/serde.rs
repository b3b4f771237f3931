#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use {
    crate::{
        error::{ReadResult, WriteResult},
        io::{Reader, Writer},
        varint::*,
    },
    pastey::paste,
};

mod sealed {
    pub trait Sealed {}
}

/// Integer types with a varint encoding.
///
/// Implemented for `u32`, `u64`, `i32` and `i64`; signed types use the zigzag mapping.
/// This is the generic face of the free functions in this crate, handy when a caller
/// is itself generic over the integer width.
///
/// # Examples
///
/// ```
/// use varcode::VarInt;
///
/// fn write_all<T: VarInt>(vals: &[T]) -> Vec<u8> {
///     let mut out = Vec::new();
///     for &val in vals {
///         val.encode(&mut out).unwrap();
///     }
///     out
/// }
///
/// assert_eq!(write_all(&[1u32, 300]), [0x01, 0xAC, 0x02]);
/// assert_eq!(write_all(&[-1i64, 1]), [0x01, 0x02]);
/// ```
pub trait VarInt: Copy + sealed::Sealed {
    /// Largest number of bytes an encoded value can occupy.
    const MAX_LEN: usize;

    /// Encode `self` and write it to the writer.
    fn encode(self, writer: &mut impl Writer) -> WriteResult<()>;

    /// Encode `self` into a new, exactly sized `Vec`.
    #[cfg(feature = "alloc")]
    fn encode_to_vec(self) -> Vec<u8>;

    /// Decode a value from the reader.
    fn decode(reader: &mut impl Reader) -> ReadResult<Self>;

    /// Get the encoded size of `self`.
    fn size_of(self) -> usize;
}

macro_rules! impl_var_int {
    ($($ty:ident => $max_len:ident),* $(,)?) => {
        paste! {
            $(
                impl sealed::Sealed for $ty {}

                impl VarInt for $ty {
                    const MAX_LEN: usize = $max_len;

                    #[inline(always)]
                    fn encode(self, writer: &mut impl Writer) -> WriteResult<()> {
                        [<encode_ $ty>](self, writer)
                    }

                    #[cfg(feature = "alloc")]
                    #[inline(always)]
                    fn encode_to_vec(self) -> Vec<u8> {
                        [<encode_ $ty _to_vec>](self)
                    }

                    #[inline(always)]
                    fn decode(reader: &mut impl Reader) -> ReadResult<Self> {
                        [<decode_ $ty>](reader)
                    }

                    #[inline(always)]
                    fn size_of(self) -> usize {
                        [<size_of_ $ty>](self)
                    }
                }
            )*
        }
    };
}

impl_var_int!(u32 => MAX_LEN_U32, u64 => MAX_LEN_U64, i32 => MAX_LEN_U32, i64 => MAX_LEN_U64);

/// Serialize a value into a new `Vec` of exactly [`serialized_size`] bytes.
#[cfg(feature = "alloc")]
#[inline]
pub fn serialize<T: VarInt>(val: T) -> Vec<u8> {
    val.encode_to_vec()
}

/// Serialize a value into the given writer.
///
/// # Examples
///
/// ```
/// let mut buffer = [0u8; 10];
/// let mut writer = buffer.as_mut_slice();
/// varcode::serialize_into(&mut writer, u64::MAX).unwrap();
/// assert!(writer.is_empty());
/// ```
#[inline]
pub fn serialize_into<T: VarInt>(writer: &mut impl Writer, val: T) -> WriteResult<()> {
    val.encode(writer)
}

/// Get the number of bytes `val` serializes to.
#[inline]
pub fn serialized_size<T: VarInt>(val: T) -> usize {
    val.size_of()
}

/// Deserialize a value from the start of `bytes`.
///
/// Unlike the `decode_*_from_slice` functions, truncated input is an error here.
///
/// # Examples
///
/// ```
/// let bytes = varcode::serialize(-300i32);
/// assert_eq!(varcode::deserialize::<i32>(&bytes).unwrap(), -300);
/// assert!(varcode::deserialize::<i32>(&bytes[..1]).unwrap_err().is_end_of_input());
/// ```
#[inline]
pub fn deserialize<T: VarInt>(mut bytes: &[u8]) -> ReadResult<T> {
    T::decode(&mut bytes)
}

/// Deserialize a value from the given reader.
#[inline]
pub fn deserialize_from<T: VarInt>(reader: &mut impl Reader) -> ReadResult<T> {
    T::decode(reader)
}
