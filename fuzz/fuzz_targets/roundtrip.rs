#![no_main]

use {
    libfuzzer_sys::fuzz_target,
    varcode::{
        decode_i32, decode_i64, decode_u32, decode_u64, encode_i32, encode_i64, encode_u32,
        encode_u64, io::Cursor, serialized_size,
    },
};

fuzz_target!(|input: (u32, u64, i32, i64)| {
    let (a, b, c, d) = input;
    let mut cursor = Cursor::new([0u8; 30]);
    encode_u32(a, &mut cursor).expect("encode u32");
    encode_u64(b, &mut cursor).expect("encode u64");
    encode_i32(c, &mut cursor).expect("encode i32");
    encode_i64(d, &mut cursor).expect("encode i64");
    assert_eq!(
        cursor.position(),
        serialized_size(a) + serialized_size(b) + serialized_size(c) + serialized_size(d)
    );

    cursor.set_position(0);
    assert_eq!(decode_u32(&mut cursor).expect("decode u32"), a);
    assert_eq!(decode_u64(&mut cursor).expect("decode u64"), b);
    assert_eq!(decode_i32(&mut cursor).expect("decode i32"), c);
    assert_eq!(decode_i64(&mut cursor).expect("decode i64"), d);
});
