//! Fixed-width integers: little-endian, two's complement when signed.

use num_bigint::BigInt;

use crate::{cl_type::ClType, cursor::Cursor, error::CodecError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FixedWidth {
    I32,
    I64,
    U8,
    U32,
    U64,
}

impl FixedWidth {
    const fn cl_type(self) -> ClType {
        match self {
            FixedWidth::I32 => ClType::I32,
            FixedWidth::I64 => ClType::I64,
            FixedWidth::U8 => ClType::U8,
            FixedWidth::U32 => ClType::U32,
            FixedWidth::U64 => ClType::U64,
        }
    }
}

pub(super) fn encode(n: &BigInt, width: FixedWidth, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let overflow = |_| CodecError::IntegerOverflow {
        cl_type: width.cl_type(),
    };
    match width {
        FixedWidth::I32 => buf.extend_from_slice(&i32::try_from(n).map_err(overflow)?.to_le_bytes()),
        FixedWidth::I64 => buf.extend_from_slice(&i64::try_from(n).map_err(overflow)?.to_le_bytes()),
        FixedWidth::U8 => buf.push(u8::try_from(n).map_err(overflow)?),
        FixedWidth::U32 => buf.extend_from_slice(&u32::try_from(n).map_err(overflow)?.to_le_bytes()),
        FixedWidth::U64 => buf.extend_from_slice(&u64::try_from(n).map_err(overflow)?.to_le_bytes()),
    }
    Ok(())
}

pub(super) fn decode(cursor: &mut Cursor<'_>, width: FixedWidth) -> Result<BigInt, CodecError> {
    Ok(match width {
        FixedWidth::I32 => i32::from_le_bytes(cursor.array("I32")?).into(),
        FixedWidth::I64 => i64::from_le_bytes(cursor.array("I64")?).into(),
        FixedWidth::U8 => cursor.u8("U8")?.into(),
        FixedWidth::U32 => cursor.u32_le("U32")?.into(),
        FixedWidth::U64 => u64::from_le_bytes(cursor.array("U64")?).into(),
    })
}
