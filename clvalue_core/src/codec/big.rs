//! `U128`, `U256`, `U512` via [`clvarint`].

use clvarint::{DecodeError, EncodeError, Width};
use num_bigint::BigInt;

use crate::{cl_type::ClType, cursor::Cursor, error::CodecError};

const fn cl_type(width: Width) -> ClType {
    match width {
        Width::U128 => ClType::U128,
        Width::U256 => ClType::U256,
        Width::U512 => ClType::U512,
    }
}

const fn type_name(width: Width) -> &'static str {
    match width {
        Width::U128 => "U128",
        Width::U256 => "U256",
        Width::U512 => "U512",
    }
}

pub(super) fn encode(n: &BigInt, width: Width, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let overflow = CodecError::IntegerOverflow {
        cl_type: cl_type(width),
    };
    let magnitude = n.to_biguint().ok_or_else(|| overflow.clone())?;
    clvarint::encode(&magnitude, width, buf).map_err(|EncodeError::Overflow { .. }| overflow)?;
    Ok(())
}

pub(super) fn decode(cursor: &mut Cursor<'_>, width: Width) -> Result<BigInt, CodecError> {
    let offset = cursor.position();
    let type_name = type_name(width);
    let (magnitude, len) = clvarint::decode(cursor.rest(), width).map_err(|e| match e {
        DecodeError::BufferTooShort { need, have } => CodecError::BufferUnderflow {
            reading: type_name,
            offset,
            need,
            have,
        },
        DecodeError::LengthTooLarge { len, .. } => CodecError::InvalidLength {
            type_name,
            len,
            limit: width.max_bytes(),
        },
        DecodeError::NonCanonical { .. } => CodecError::NonCanonical { type_name },
    })?;
    cursor.take(len, type_name)?;
    Ok(magnitude.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    type TestResult = Result<(), CodecError>;

    fn round_trip(n: &BigInt, width: Width) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        encode(n, width, &mut buf)?;
        let mut cursor = Cursor::new(&buf);
        assert_eq!(&decode(&mut cursor, width)?, n);
        assert!(cursor.is_empty());
        Ok(buf)
    }

    #[test]
    fn zero_is_one_byte() -> TestResult {
        assert_eq!(round_trip(&BigInt::from(0), Width::U512)?, [0x00]);
        Ok(())
    }

    #[test]
    fn u512_max() -> TestResult {
        let max = BigInt::from(Width::U512.max_value());
        let bytes = round_trip(&max, Width::U512)?;
        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes.first(), Some(&0x40));
        assert!(bytes.iter().skip(1).all(|&b| b == 0xFF));
        Ok(())
    }

    #[test]
    fn width_overflow_and_negative() {
        let too_big = BigInt::from(BigUint::from(1u8) << 128);
        let mut buf = vec![0x99];
        assert_eq!(
            encode(&too_big, Width::U128, &mut buf),
            Err(CodecError::IntegerOverflow {
                cl_type: ClType::U128
            })
        );
        assert_eq!(
            encode(&BigInt::from(-1), Width::U256, &mut buf),
            Err(CodecError::IntegerOverflow {
                cl_type: ClType::U256
            })
        );
        assert_eq!(buf, [0x99]);
    }

    #[test]
    fn length_over_width_is_invalid() {
        let mut bytes = vec![0x21];
        bytes.extend_from_slice(&[0x01; 33]);
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(
            decode(&mut cursor, Width::U256),
            Err(CodecError::InvalidLength {
                type_name: "U256",
                len: 33,
                limit: 32
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn underflow_carries_offset() {
        let bytes = [0xAA, 0x03, 0x01];
        let mut cursor = Cursor::new(&bytes);
        let _ = cursor.u8("pad");
        assert_eq!(
            decode(&mut cursor, Width::U512),
            Err(CodecError::BufferUnderflow {
                reading: "U512",
                offset: 1,
                need: 4,
                have: 2
            })
        );
    }

    #[test]
    fn zero_high_byte_is_non_canonical() {
        let mut cursor = Cursor::new(&[0x02, 0x05, 0x00]);
        assert_eq!(
            decode(&mut cursor, Width::U128),
            Err(CodecError::NonCanonical { type_name: "U128" })
        );
    }
}
