//! `Bool`, `String`, `ByteArray(N)` and the shared u32 length prefix.

use crate::{cursor::Cursor, error::CodecError};

const FALSE: u8 = 0x00;
const TRUE: u8 = 0x01;

pub(super) fn encode_bool(b: bool, buf: &mut Vec<u8>) {
    buf.push(if b { TRUE } else { FALSE });
}

pub(super) fn decode_bool(cursor: &mut Cursor<'_>) -> Result<bool, CodecError> {
    match cursor.u8("Bool")? {
        FALSE => Ok(false),
        TRUE => Ok(true),
        tag => Err(CodecError::InvalidTag {
            tag,
            type_name: "Bool",
        }),
    }
}

/// Write a u32 LE length or element count.
pub(crate) fn encode_len(
    len: usize,
    type_name: &'static str,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let prefix = u32::try_from(len).map_err(|_| CodecError::InvalidLength {
        type_name,
        len,
        limit: u32::MAX as usize,
    })?;
    buf.extend_from_slice(&prefix.to_le_bytes());
    Ok(())
}

pub(super) fn encode_string(s: &str, buf: &mut Vec<u8>) -> Result<(), CodecError> {
    encode_len(s.len(), "String", buf)?;
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}

pub(crate) fn decode_string(cursor: &mut Cursor<'_>) -> Result<String, CodecError> {
    let len = cursor.u32_le("String length")? as usize;
    let offset = cursor.position();
    let bytes = cursor.take(len, "String")?;
    core::str::from_utf8(bytes)
        .map(Into::into)
        .map_err(|_| CodecError::MalformedUtf8 { offset })
}

pub(super) fn encode_byte_array(
    bytes: &[u8],
    len: u32,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let len = len as usize;
    if bytes.len() != len {
        return Err(CodecError::InvalidLength {
            type_name: "ByteArray",
            len: bytes.len(),
            limit: len,
        });
    }
    buf.extend_from_slice(bytes);
    Ok(())
}

pub(super) fn decode_byte_array(cursor: &mut Cursor<'_>, len: u32) -> Result<Vec<u8>, CodecError> {
    cursor.take(len as usize, "ByteArray").map(<[u8]>::to_vec)
}
