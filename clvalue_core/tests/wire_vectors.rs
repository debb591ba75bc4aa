//! Byte-exact layouts and malformed-input rejection.

#![allow(clippy::indexing_slicing)]

use clvalue_core::{decode, encode, ClType, CodecError, Value};
use num_bigint::BigUint;
use testresult::TestResult;

#[test]
fn u8_max_is_one_byte() -> TestResult {
    assert_eq!(encode(&Value::from(255u8), &ClType::U8)?, [0xFF]);
    Ok(())
}

#[test]
fn u512_max_is_prefix_and_64_bytes() -> TestResult {
    let max: BigUint = (BigUint::from(1u8) << 512) - 1u8;
    let bytes = encode(&Value::from(max.clone()), &ClType::U512)?;

    assert_eq!(bytes.len(), 65);
    assert_eq!(bytes[0], 0x40);
    assert!(bytes[1..].iter().all(|&b| b == 0xFF));

    let (value, consumed) = decode(&bytes, &ClType::U512)?;
    assert_eq!(value, Value::from(max));
    assert_eq!(consumed, 65);
    Ok(())
}

#[test]
fn u512_one_past_max_overflows() {
    let too_big = BigUint::from(1u8) << 512;
    assert_eq!(
        encode(&Value::from(too_big), &ClType::U512),
        Err(CodecError::IntegerOverflow {
            cl_type: ClType::U512
        })
    );
}

#[test]
fn empty_list_is_bare_count() -> TestResult {
    let bytes = encode(&Value::List(vec![]), &ClType::list(ClType::U32))?;
    assert_eq!(bytes, [0x00, 0x00, 0x00, 0x00]);
    Ok(())
}

#[test]
fn none_is_single_zero() -> TestResult {
    let bytes = encode(&Value::none(), &ClType::option(ClType::U64))?;
    assert_eq!(bytes, [0x00]);
    Ok(())
}

#[test]
fn empty_string_is_four_zeros() -> TestResult {
    assert_eq!(encode(&Value::from(""), &ClType::String)?, [0, 0, 0, 0]);
    Ok(())
}

#[test]
fn list_count_beyond_buffer_underflows() {
    // claims 3 elements, carries 1
    let mut bytes = vec![0x03, 0x00, 0x00, 0x00];
    bytes.extend_from_slice(&7u64.to_le_bytes());

    assert_eq!(
        decode(&bytes, &ClType::list(ClType::U64)),
        Err(CodecError::BufferUnderflow {
            reading: "List elements",
            offset: 4,
            need: 24,
            have: 8
        })
    );
}

#[test]
fn zero_width_elements_cannot_inflate_a_short_buffer() {
    for cl_type in [
        ClType::list(ClType::Unit),
        ClType::map(ClType::Unit, ClType::Unit),
        ClType::list(ClType::ByteArray(0)),
    ] {
        assert!(
            matches!(
                decode(&[0xFF; 4], &cl_type),
                Err(CodecError::InvalidLength {
                    len: 0xFFFF_FFFF,
                    ..
                })
            ),
            "{cl_type}"
        );
    }
}

#[test]
fn any_inside_a_list_does_not_encode() {
    let value = Value::list([Value::any([1u8, 2]), Value::any([3u8])]);
    assert_eq!(
        encode(&value, &ClType::list(ClType::Any)),
        Err(CodecError::TypeMismatch {
            expected: ClType::list(ClType::Any),
            found: "Any"
        })
    );
}

#[test]
fn option_presence_byte_two_is_invalid() {
    assert_eq!(
        decode(&[0x02], &ClType::option(ClType::U64)),
        Err(CodecError::InvalidTag {
            tag: 0x02,
            type_name: "Option"
        })
    );
}

#[test]
fn nested_option_list_u64() -> TestResult {
    let cl_type = ClType::option(ClType::list(ClType::U64));
    let value = Value::some(Value::list([1u64, 2u64]));

    let bytes = encode(&value, &cl_type)?;
    #[rustfmt::skip]
    let expected: [u8; 21] = [
        0x01,
        0x02, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    assert_eq!(bytes, expected);

    let (decoded, consumed) = decode(&bytes, &cl_type)?;
    assert_eq!(decoded, value);
    assert_eq!(consumed, 17);
    Ok(())
}

#[test]
fn big_integer_wider_than_type() {
    let mut bytes = vec![17u8];
    bytes.extend_from_slice(&[0x01; 17]);
    assert_eq!(
        decode(&bytes, &ClType::U128),
        Err(CodecError::InvalidLength {
            type_name: "U128",
            len: 17,
            limit: 16
        })
    );
}

#[test]
fn big_integer_minimal_lengths() -> TestResult {
    let cases: &[(u128, u8)] = &[
        (0, 0),
        (1, 1),
        (0xFF, 1),
        (0x100, 2),
        (0xFFFF_FFFF, 4),
        (u128::MAX, 16),
    ];
    for &(n, len) in cases {
        for cl_type in [ClType::U128, ClType::U256, ClType::U512] {
            let bytes = encode(&Value::from(n), &cl_type)?;
            assert_eq!(bytes[0], len, "{n} under {cl_type}");
            assert_eq!(bytes.len(), 1 + usize::from(len));
        }
    }
    Ok(())
}

#[test]
fn malformed_utf8() {
    assert_eq!(
        decode(&[0x01, 0x00, 0x00, 0x00, 0xFF], &ClType::String),
        Err(CodecError::MalformedUtf8 { offset: 4 })
    );
}

#[test]
fn signed_fixed_width_is_twos_complement() -> TestResult {
    assert_eq!(encode(&Value::from(-2i32), &ClType::I32)?, [0xFE, 0xFF, 0xFF, 0xFF]);
    assert_eq!(
        decode(&[0x00, 0x00, 0x00, 0x80], &ClType::I32)?,
        (Value::from(i32::MIN), 4)
    );
    Ok(())
}

#[test]
fn overflow_into_narrow_slot() {
    assert_eq!(
        encode(&Value::from(256u32), &ClType::U8),
        Err(CodecError::IntegerOverflow { cl_type: ClType::U8 })
    );
    assert_eq!(
        encode(&Value::from(-1i32), &ClType::U32),
        Err(CodecError::IntegerOverflow {
            cl_type: ClType::U32
        })
    );
}
