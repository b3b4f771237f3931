//! varcode is a variable-length integer codec: the base-128 "varint" scheme found in
//! Protocol Buffers and many storage formats, with zigzag mapping for signed integers.
//!
//! Small magnitudes take few bytes, so integer fields of length-prefixed records and
//! wire formats stop paying for the full fixed width. Values in `[0, 128)` (or, for
//! signed integers, `[-64, 64)`) take a single byte.
//!
//! # Quickstart
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! let bytes = varcode::encode_u64_to_vec(300);
//! assert_eq!(bytes, [0xAC, 0x02]);
//! assert_eq!(varcode::decode_u64_from_slice(&bytes).unwrap(), 300);
//!
//! let bytes = varcode::encode_i32_to_vec(-2);
//! assert_eq!(bytes, [0x03]);
//! assert_eq!(varcode::decode_i32_from_slice(&bytes).unwrap(), -2);
//! # }
//! ```
//!
//! # Readers and writers
//!
//! The streaming functions are generic over the [`io::Reader`] and [`io::Writer`]
//! traits, which move one byte at a time. They are implemented for slices, `Vec<u8>`,
//! [`io::Cursor`], and, with the `std` feature, any [`std::io::Read`] or
//! [`std::io::Write`] through [`io::IoReader`] and [`io::IoWriter`].
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! let mut out = Vec::new();
//! varcode::encode_u32(1, &mut out).unwrap();
//! varcode::encode_i64(-1_000_000, &mut out).unwrap();
//!
//! let mut reader = out.as_slice();
//! assert_eq!(varcode::decode_u32(&mut reader).unwrap(), 1);
//! assert_eq!(varcode::decode_i64(&mut reader).unwrap(), -1_000_000);
//! assert!(reader.is_empty());
//! # }
//! ```
//!
//! # Errors
//!
//! Decoding fails with [`ReadError::MalformedVarint`] when the continuation bits run
//! past the widest encoding of the target type (5 bytes for 32-bit, 10 for 64-bit),
//! and with an end-of-input error when a reader is exhausted mid-value. No other
//! validation is performed. Encoding only fails if the writer does.
//!
//! Code that both reads and writes can use the umbrella [`Error`] and [`Result`], which
//! either side converts into with `?`.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! fn bump(mut src: &[u8], dst: &mut [u8]) -> varcode::Result<usize> {
//!     let val = varcode::decode_u64(&mut src)?;
//!     let mut writer = &mut *dst;
//!     varcode::encode_u64(val.saturating_add(1), &mut writer)?;
//!     Ok(varcode::size_of_u64(val.saturating_add(1)))
//! }
//!
//! let mut out = [0u8; 2];
//! assert_eq!(bump(&[0xFF, 0x00], &mut out).unwrap(), 2);
//! assert_eq!(out, [0x80, 0x01]);
//! assert!(matches!(bump(&[0x80], &mut out), Err(varcode::Error::ReadError(_))));
//! assert!(matches!(bump(&[0xFF, 0x7F], &mut [0u8; 1]), Err(varcode::Error::WriteError(_))));
//! # }
//! ```
//!
//! # Features
//!
//! |Feature|Default|Description
//! |---|---|---|
//! |`std`|yes|[`std::io`] adapters and `std::error::Error` impls. Implies `alloc`.|
//! |`alloc`|via `std`|`Vec`-returning encoders, [`serialize`], and the `Vec<u8>` writer.|
//!
//! Without `std` the crate is `no_std`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub use error::{Error, ReadError, ReadResult, Result, WriteError, WriteResult};
pub mod io;
pub mod varint;
pub use varint::*;
mod serde;
pub use serde::*;
#[cfg(test)]
mod proptest_config;
