#![no_main]

use {
    libfuzzer_sys::fuzz_target,
    varcode::{
        decode_i64, decode_u32, decode_u32_from_slice, decode_u64, decode_u64_from_slice,
        encode_u32_to_vec, encode_u64_to_vec, ReadError, MAX_LEN_U32, MAX_LEN_U64,
    },
};

fuzz_target!(|data: &[u8]| {
    // Whatever the stream decoder accepts is canonical up to trailing payload bits,
    // and re-encodes to no more bytes than it consumed.
    let mut reader = data;
    match decode_u64(&mut reader) {
        Ok(val) => {
            let consumed = data.len() - reader.len();
            assert!(consumed <= MAX_LEN_U64);
            assert!(encode_u64_to_vec(val).len() <= consumed);
            assert_eq!(decode_u64_from_slice(data).expect("slice decode"), val);
        }
        Err(ReadError::MalformedVarint { max_bytes }) => assert_eq!(max_bytes, MAX_LEN_U64),
        Err(err) => assert!(err.is_end_of_input()),
    }

    let mut reader = data;
    if let Ok(val) = decode_u32(&mut reader) {
        let consumed = data.len() - reader.len();
        assert!(consumed <= MAX_LEN_U32);
        assert!(encode_u32_to_vec(val).len() <= consumed);
    }

    let _ = decode_i64(&mut &data[..]);
    let _ = decode_u32_from_slice(data);
});
