//! Variable length integer encoding.
//!
//! Unsigned integers are written as little-endian base-128 groups: every byte carries
//! seven payload bits in its low bits, and the high bit (the continuation bit) is set
//! on every byte except the last.
//!
//! | Value range | Encoded bytes |
//! |---|---|
//! | `[0, 2^7)` | 1 |
//! | `[2^7, 2^14)` | 2 |
//! | `[2^14, 2^21)` | 3 |
//! | ... | ... |
//! | `u32` | at most [`MAX_LEN_U32`] |
//! | `u64` | at most [`MAX_LEN_U64`] |
//!
//! Signed integers are first mapped to unsigned integers of the same width with the
//! zigzag transform, so that values close to zero encode in few bytes regardless of
//! their sign:
//!
//! ```
//! use varcode::{zigzag_i64, unzigzag_u64};
//!
//! assert_eq!(zigzag_i64(0), 0);
//! assert_eq!(zigzag_i64(-1), 1);
//! assert_eq!(zigzag_i64(1), 2);
//! assert_eq!(zigzag_i64(-2), 3);
//! assert_eq!(zigzag_i64(2), 4);
//! // etc
//! assert_eq!(zigzag_i64(i64::MIN), u64::MAX);
//! assert_eq!(unzigzag_u64(u64::MAX), i64::MIN);
//! ```
//!
//! Every operation comes in a streaming flavor, over a [`Writer`] or [`Reader`], and a
//! buffer flavor. The two decode flavors differ on truncated input: [`decode_u64`] and
//! friends fail with an end-of-input error, while [`decode_u64_from_slice`] and friends
//! treat the last available byte as the terminator.
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use {
    crate::{
        error::{malformed_varint, ReadResult, WriteResult},
        io::{Reader, Writer},
    },
    pastey::paste,
};

/// Maximum number of bytes in an encoded `u32` or `i32`.
pub const MAX_LEN_U32: usize = 5;
/// Maximum number of bytes in an encoded `u64` or `i64`.
pub const MAX_LEN_U64: usize = 10;

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;
const PAYLOAD_BITS: u32 = 7;

/// Generate the encode, decode and sizing functions for an unsigned integer type.
macro_rules! impl_varint_unsigned {
    ($ty:ident, $max_len:ident) => {
        paste! {
            #[doc = concat!("Encode a `", stringify!($ty), "` and write it to the writer.")]
            ///
            /// Writes between 1 and
            #[doc = concat!("[`", stringify!($max_len), "`]")]
            /// bytes, one at a time. Bytes written before a writer error are not rolled back.
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub fn [<encode_ $ty>](mut val: $ty, writer: &mut impl Writer) -> WriteResult<()> {
                while val > PAYLOAD_MASK as $ty {
                    writer.write_byte((val as u8 & PAYLOAD_MASK) | CONTINUATION_BIT)?;
                    // Unsigned shift, zero-filling from the top.
                    val >>= PAYLOAD_BITS;
                }
                writer.write_byte(val as u8)?;
                Ok(())
            }

            #[doc = concat!("Encode a `", stringify!($ty), "` into a stack buffer.")]
            ///
            /// Returns the buffer and the number of leading bytes that hold the encoding.
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub const fn [<encode_ $ty _to_array>](mut val: $ty) -> ([u8; $max_len], usize) {
                let mut buf = [0u8; $max_len];
                let mut len = 0;
                while val > PAYLOAD_MASK as $ty {
                    buf[len] = (val as u8 & PAYLOAD_MASK) | CONTINUATION_BIT;
                    val >>= PAYLOAD_BITS;
                    len += 1;
                }
                buf[len] = val as u8;
                (buf, len + 1)
            }

            #[doc = concat!("Encode a `", stringify!($ty), "` into a new, exactly sized `Vec`.")]
            #[cfg(feature = "alloc")]
            #[inline]
            pub fn [<encode_ $ty _to_vec>](val: $ty) -> Vec<u8> {
                let (buf, len) = [<encode_ $ty _to_array>](val);
                buf[..len].to_vec()
            }

            #[doc = concat!("Decode a `", stringify!($ty), "` from the reader.")]
            ///
            /// Fails with [`ReadError::MalformedVarint`](crate::ReadError::MalformedVarint) once
            /// the continuation bits ask for more than
            #[doc = concat!("[`", stringify!($max_len), "`]")]
            /// bytes, and with the reader's end-of-input error if the reader runs dry first.
            /// Payload bits of the final byte that fall outside the type are discarded.
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub fn [<decode_ $ty>](reader: &mut impl Reader) -> ReadResult<$ty> {
                let mut val: $ty = 0;
                let mut shift = 0;
                loop {
                    let byte = reader.read_byte()?;
                    if byte & CONTINUATION_BIT == 0 {
                        return Ok(val | (byte as $ty) << shift);
                    }
                    val |= ((byte & PAYLOAD_MASK) as $ty) << shift;
                    shift += PAYLOAD_BITS;
                    if shift >= <$ty>::BITS {
                        return Err(malformed_varint($max_len));
                    }
                }
            }

            #[doc = concat!("Decode a `", stringify!($ty), "` from the start of `bytes`.")]
            ///
            /// If `bytes` runs out before a byte with a clear continuation bit, the last byte
            /// is taken as the terminator and the bits gathered so far are returned; an empty
            /// slice decodes to `0`. Overlong encodings are still rejected.
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub fn [<decode_ $ty _from_slice>](bytes: &[u8]) -> ReadResult<$ty> {
                let mut val: $ty = 0;
                let mut shift = 0;
                for &byte in bytes {
                    // Only a byte past the widest encoding is malformed; a slice that ends
                    // on a continuation byte at the bound is still truncated input.
                    if shift >= <$ty>::BITS {
                        return Err(malformed_varint($max_len));
                    }
                    val |= ((byte & PAYLOAD_MASK) as $ty) << shift;
                    if byte & CONTINUATION_BIT == 0 {
                        break;
                    }
                    shift += PAYLOAD_BITS;
                }
                Ok(val)
            }

            #[doc = concat!("Get the encoded size of the given `", stringify!($ty), "` value.")]
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub const fn [<size_of_ $ty>](val: $ty) -> usize {
                // `| 1` so that zero still counts one significant bit.
                let bits = <$ty>::BITS - (val | 1).leading_zeros();
                (bits as usize).div_ceil(PAYLOAD_BITS as usize)
            }
        }
    };
}

/// Generate the zigzag wrappers for a signed integer type over its unsigned counterpart.
macro_rules! impl_varint_signed {
    ($ty:ident => $target:ident, $max_len:ident) => {
        paste! {
            #[doc = concat!("Zigzag-map a `", stringify!($ty), "` onto a `", stringify!($target), "`.")]
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub const fn [<zigzag_ $ty>](val: $ty) -> $target {
                ((val << 1) ^ (val >> (<$ty>::BITS - 1))) as $target
            }

            #[doc = concat!("Invert [`zigzag_", stringify!($ty), "`].")]
            ///
            /// The arithmetic runs on the signed reinterpretation of `raw`, then the top bit of
            /// `raw` is flipped back in, so inputs with the top bit set decode correctly.
            #[inline]
            #[expect(clippy::arithmetic_side_effects)]
            pub const fn [<unzigzag_ $target>](raw: $target) -> $ty {
                const TOP: u32 = <$target>::BITS - 1;
                let signed = raw as $ty;
                let mid = (((signed << TOP) >> TOP) ^ signed) >> 1;
                mid ^ (raw & (1 << TOP)) as $ty
            }

            #[doc = concat!("Encode a `", stringify!($ty), "` (zigzag) and write it to the writer.")]
            #[inline]
            pub fn [<encode_ $ty>](val: $ty, writer: &mut impl Writer) -> WriteResult<()> {
                [<encode_ $target>]([<zigzag_ $ty>](val), writer)
            }

            #[doc = concat!("Encode a `", stringify!($ty), "` (zigzag) into a stack buffer.")]
            #[inline]
            pub const fn [<encode_ $ty _to_array>](val: $ty) -> ([u8; $max_len], usize) {
                [<encode_ $target _to_array>]([<zigzag_ $ty>](val))
            }

            #[doc = concat!("Encode a `", stringify!($ty), "` (zigzag) into a new, exactly sized `Vec`.")]
            #[cfg(feature = "alloc")]
            #[inline]
            pub fn [<encode_ $ty _to_vec>](val: $ty) -> Vec<u8> {
                [<encode_ $target _to_vec>]([<zigzag_ $ty>](val))
            }

            #[doc = concat!("Decode a zigzag `", stringify!($ty), "` from the reader.")]
            ///
            #[doc = concat!("Same failure modes as [`decode_", stringify!($target), "`].")]
            #[inline]
            pub fn [<decode_ $ty>](reader: &mut impl Reader) -> ReadResult<$ty> {
                [<decode_ $target>](reader).map([<unzigzag_ $target>])
            }

            #[doc = concat!("Decode a zigzag `", stringify!($ty), "` from the start of `bytes`.")]
            ///
            #[doc = concat!("Same truncation rules as [`decode_", stringify!($target), "_from_slice`].")]
            #[inline]
            pub fn [<decode_ $ty _from_slice>](bytes: &[u8]) -> ReadResult<$ty> {
                [<decode_ $target _from_slice>](bytes).map([<unzigzag_ $target>])
            }

            #[doc = concat!("Get the encoded size of the given `", stringify!($ty), "` value.")]
            #[inline]
            pub const fn [<size_of_ $ty>](val: $ty) -> usize {
                [<size_of_ $target>]([<zigzag_ $ty>](val))
            }
        }
    };
}

impl_varint_unsigned!(u32, MAX_LEN_U32);
impl_varint_unsigned!(u64, MAX_LEN_U64);
impl_varint_signed!(i32 => u32, MAX_LEN_U32);
impl_varint_signed!(i64 => u64, MAX_LEN_U64);

#[cfg(all(test, feature = "alloc"))]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]
    use {
        super::*,
        crate::{error::ReadError, io::Cursor, proptest_config::proptest_cfg},
        alloc::{vec, vec::Vec},
        proptest::prelude::*,
    };

    #[test]
    fn zero_is_a_single_zero_byte() {
        assert_eq!(encode_u32_to_vec(0), [0x00]);
        assert_eq!(encode_u64_to_vec(0), [0x00]);
        assert_eq!(encode_i32_to_vec(0), [0x00]);
        assert_eq!(encode_i64_to_vec(0), [0x00]);
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode_u32_to_vec(1), [0x01]);
        assert_eq!(encode_u32_to_vec(127), [0x7F]);
        assert_eq!(encode_u32_to_vec(128), [0x80, 0x01]);
        assert_eq!(encode_u32_to_vec(300), [0xAC, 0x02]);
        assert_eq!(encode_u32_to_vec(16_384), [0x80, 0x80, 0x01]);
        assert_eq!(encode_u32_to_vec(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(
            encode_u64_to_vec(u64::MAX),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );
        assert_eq!(encode_i32_to_vec(-1), [0x01]);
        assert_eq!(encode_i32_to_vec(1), [0x02]);
        assert_eq!(encode_i32_to_vec(-64), [0x7F]);
        assert_eq!(encode_i32_to_vec(64), [0x80, 0x01]);
        assert_eq!(encode_i32_to_vec(i32::MIN), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(encode_i64_to_vec(i64::MIN), encode_u64_to_vec(u64::MAX));
    }

    #[test]
    fn length_boundaries() {
        for bytes in 1..MAX_LEN_U64 {
            let boundary = 1u64 << (7 * bytes);
            assert_eq!(encode_u64_to_vec(boundary - 1).len(), bytes);
            assert_eq!(encode_u64_to_vec(boundary).len(), bytes + 1);
            if boundary <= u32::MAX as u64 {
                assert_eq!(encode_u32_to_vec(boundary as u32 - 1).len(), bytes);
                assert_eq!(encode_u32_to_vec(boundary as u32).len(), bytes + 1);
            }
        }
        assert_eq!(encode_u32_to_vec(u32::MAX).len(), MAX_LEN_U32);
        assert_eq!(encode_u64_to_vec(u64::MAX).len(), MAX_LEN_U64);
    }

    #[test]
    fn zigzag_known_values() {
        assert_eq!(zigzag_i32(0), 0);
        assert_eq!(zigzag_i32(-1), 1);
        assert_eq!(zigzag_i32(1), 2);
        assert_eq!(zigzag_i32(-2), 3);
        assert_eq!(zigzag_i32(2), 4);
        assert_eq!(zigzag_i32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_i32(i32::MIN), u32::MAX);
        assert_eq!(zigzag_i64(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_i64(i64::MIN), u64::MAX);
    }

    #[test]
    fn unzigzag_top_bit_set() {
        assert_eq!(unzigzag_u32(u32::MAX), i32::MIN);
        assert_eq!(unzigzag_u32(u32::MAX - 1), i32::MAX);
        assert_eq!(unzigzag_u32(1 << 31), 1 << 30);
        assert_eq!(unzigzag_u32((1 << 31) | 1), -(1 << 30) - 1);
        assert_eq!(unzigzag_u64(u64::MAX), i64::MIN);
        assert_eq!(unzigzag_u64(u64::MAX - 1), i64::MAX);
    }

    #[test]
    fn extremes_round_trip() {
        for val in [0, 1, u32::MAX] {
            assert_eq!(decode_u32_from_slice(&encode_u32_to_vec(val)).unwrap(), val);
        }
        for val in [0, 1, u64::MAX] {
            assert_eq!(decode_u64_from_slice(&encode_u64_to_vec(val)).unwrap(), val);
        }
        for val in [0, -1, i32::MIN, i32::MAX] {
            let bytes = encode_i32_to_vec(val);
            assert_eq!(decode_i32(&mut bytes.as_slice()).unwrap(), val);
        }
        for val in [0, -1, i64::MIN, i64::MAX] {
            let bytes = encode_i64_to_vec(val);
            assert_eq!(decode_i64(&mut bytes.as_slice()).unwrap(), val);
        }
    }

    #[test]
    fn decode_rejects_overlong_u32() {
        // Five continuation bytes never terminate within 32 bits.
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x00];
        assert!(matches!(
            decode_u32(&mut bytes.as_slice()),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U32 })
        ));
        assert!(matches!(
            decode_i32(&mut bytes.as_slice()),
            Err(ReadError::MalformedVarint { .. })
        ));
        assert!(matches!(
            decode_u32_from_slice(&bytes),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U32 })
        ));
        // Four are fine.
        assert_eq!(decode_u32(&mut &bytes[1..]).unwrap(), 0);
    }

    #[test]
    fn decode_rejects_overlong_u64() {
        let bytes = [0xFF; 11];
        assert!(matches!(
            decode_u64(&mut bytes.as_slice()),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U64 })
        ));
        assert!(matches!(
            decode_i64_from_slice(&bytes),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U64 })
        ));

        let mut ten = [0xFF; 10];
        ten[9] = 0x01;
        assert_eq!(decode_u64(&mut ten.as_slice()).unwrap(), u64::MAX);
    }

    #[test]
    fn decode_stops_after_terminator() {
        let bytes = [0xAC, 0x02, 0x7F];
        let mut reader = bytes.as_slice();
        assert_eq!(decode_u32(&mut reader).unwrap(), 300);
        assert_eq!(reader, [0x7F]);
        assert_eq!(decode_u64_from_slice(&bytes).unwrap(), 300);
    }

    #[test]
    fn decode_discards_excess_terminator_bits() {
        // The fifth byte of a u32 only has room for four payload bits.
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        assert_eq!(decode_u32(&mut bytes.as_slice()).unwrap(), u32::MAX);
    }

    #[test]
    fn stream_decode_truncated_is_end_of_input() {
        let truncated: [&[u8]; 3] = [&[], &[0x80], &[0xFF, 0xFF]];
        for bytes in truncated {
            let err = decode_u64(&mut &bytes[..]).unwrap_err();
            assert!(err.is_end_of_input(), "{err:?}");
            let err = decode_i32(&mut Cursor::new(bytes)).unwrap_err();
            assert!(err.is_end_of_input(), "{err:?}");
        }
    }

    #[test]
    fn slice_decode_truncated_uses_last_byte() {
        assert_eq!(decode_u32_from_slice(&[]).unwrap(), 0);
        assert_eq!(decode_u64_from_slice(&[]).unwrap(), 0);
        assert_eq!(decode_u32_from_slice(&[0x85]).unwrap(), 5);
        assert_eq!(decode_u32_from_slice(&[0xAC, 0x82]).unwrap(), 300);
        assert_eq!(decode_i64_from_slice(&[0x81]).unwrap(), -1);
    }

    #[test]
    fn slice_decode_truncated_at_max_len() {
        // A slice ending on a continuation byte at the widest length decodes.
        assert_eq!(decode_u32_from_slice(&[0xFF; MAX_LEN_U32]).unwrap(), u32::MAX);
        assert_eq!(decode_u64_from_slice(&[0xFF; MAX_LEN_U64]).unwrap(), u64::MAX);
        assert_eq!(decode_i32_from_slice(&[0xFF; MAX_LEN_U32]).unwrap(), i32::MIN);
        assert_eq!(decode_i64_from_slice(&[0xFF; MAX_LEN_U64]).unwrap(), i64::MIN);
        assert_eq!(decode_u32_from_slice(&[0x80; MAX_LEN_U32]).unwrap(), 0);
        assert_eq!(decode_u32_from_slice(&[0xFF; MAX_LEN_U32 - 1]).unwrap(), (1 << 28) - 1);

        // One byte more is overlong.
        assert!(matches!(
            decode_u32_from_slice(&[0x80; MAX_LEN_U32 + 1]),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U32 })
        ));
        assert!(matches!(
            decode_i32_from_slice(&[0xFF; MAX_LEN_U32 + 1]),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U32 })
        ));
        assert!(matches!(
            decode_u64_from_slice(&[0xFF; MAX_LEN_U64 + 1]),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U64 })
        ));
        assert!(matches!(
            decode_i64_from_slice(&[0x80; MAX_LEN_U64 + 1]),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U64 })
        ));

        // The stream decoder needs a terminator within the bound.
        assert!(matches!(
            decode_u32(&mut [0xFF; MAX_LEN_U32].as_slice()),
            Err(ReadError::MalformedVarint { max_bytes: MAX_LEN_U32 })
        ));
    }

    #[test]
    fn writer_errors_propagate() {
        let mut buf = [0u8; 1];
        let mut writer = buf.as_mut_slice();
        assert!(encode_u32(300, &mut writer).is_err());
        // The first byte made it out before the sink filled up.
        assert_eq!(buf, [0xAC]);
    }

    #[test]
    fn size_of_matches_constants() {
        assert_eq!(size_of_u32(0), 1);
        assert_eq!(size_of_u32(127), 1);
        assert_eq!(size_of_u32(128), 2);
        assert_eq!(size_of_u32(u32::MAX), MAX_LEN_U32);
        assert_eq!(size_of_u64(u64::MAX), MAX_LEN_U64);
        assert_eq!(size_of_i32(-64), 1);
        assert_eq!(size_of_i32(64), 2);
        assert_eq!(size_of_i64(i64::MIN), MAX_LEN_U64);
    }

    fn stream_u64(val: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_u64(val, &mut out).unwrap();
        out
    }

    fn stream_i64(val: i64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_i64(val, &mut out).unwrap();
        out
    }

    proptest! {
        #![proptest_config(proptest_cfg())]

        #[test]
        fn u32_round_trip(val in any::<u32>()) {
            let mut buf = vec![0u8; MAX_LEN_U32];
            let mut writer = buf.as_mut_slice();
            encode_u32(val, &mut writer).unwrap();
            let written = MAX_LEN_U32 - writer.len();
            prop_assert_eq!(written, size_of_u32(val));
            prop_assert_eq!(decode_u32(&mut &buf[..written]).unwrap(), val);
        }

        #[test]
        fn u64_round_trip(val in any::<u64>()) {
            let bytes = stream_u64(val);
            prop_assert_eq!(bytes.len(), size_of_u64(val));
            prop_assert_eq!(decode_u64(&mut bytes.as_slice()).unwrap(), val);
            prop_assert_eq!(decode_u64_from_slice(&bytes).unwrap(), val);
        }

        #[test]
        fn i32_round_trip(val in any::<i32>()) {
            let mut cursor = Cursor::new([0u8; MAX_LEN_U32]);
            encode_i32(val, &mut cursor).unwrap();
            prop_assert_eq!(cursor.position(), size_of_i32(val));
            cursor.set_position(0);
            prop_assert_eq!(decode_i32(&mut cursor).unwrap(), val);
            prop_assert_eq!(decode_i32_from_slice(&encode_i32_to_vec(val)).unwrap(), val);
        }

        #[test]
        fn i64_round_trip(val in any::<i64>()) {
            let bytes = stream_i64(val);
            prop_assert_eq!(bytes.len(), size_of_i64(val));
            prop_assert_eq!(decode_i64(&mut bytes.as_slice()).unwrap(), val);
            prop_assert_eq!(decode_i64_from_slice(&bytes).unwrap(), val);
        }

        #[test]
        fn zigzag_is_a_bijection(val in any::<i64>(), small in any::<i32>()) {
            prop_assert_eq!(unzigzag_u64(zigzag_i64(val)), val);
            prop_assert_eq!(unzigzag_u32(zigzag_i32(small)), small);
            prop_assert_eq!(zigzag_i64(small as i64), zigzag_i32(small) as u64);
        }

        #[test]
        fn buffer_matches_stream(val in any::<u64>(), signed in any::<i64>()) {
            prop_assert_eq!(encode_u64_to_vec(val), stream_u64(val));
            prop_assert_eq!(encode_i64_to_vec(signed), stream_i64(signed));
            let (buf, len) = encode_u64_to_array(val);
            let streamed = stream_u64(val);
            prop_assert_eq!(&buf[..len], streamed.as_slice());
        }

        #[test]
        fn size_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(encode_u64_to_vec(lo).len() <= encode_u64_to_vec(hi).len());
        }

        #[test]
        fn widths_agree_on_u32_values(val in any::<u32>(), signed in any::<i32>()) {
            prop_assert_eq!(encode_u32_to_vec(val), encode_u64_to_vec(val as u64));
            prop_assert_eq!(encode_i32_to_vec(signed), encode_i64_to_vec(signed as i64));
        }

        #[test]
        fn decode_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..=16)) {
            let _ = decode_u32(&mut bytes.as_slice());
            let _ = decode_i64(&mut bytes.as_slice());
            let _ = decode_u64_from_slice(&bytes);
            let _ = decode_i32_from_slice(&bytes);
        }
    }
}
