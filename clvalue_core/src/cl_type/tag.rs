//! Binary form of descriptors.
//!
//! A descriptor is written as its tag byte followed by its children in
//! declaration order. `ByteArray` is followed by its length as a u32 LE.
//!
//! ```text
//! List(Option(U64))      0x0E 0x0D 0x05
//! ByteArray(32)          0x0F 0x20 0x00 0x00 0x00
//! Map(String, U512)      0x11 0x0A 0x08
//! ```

use super::ClType;
use crate::{cursor::Cursor, error::CodecError};

/// `Bool`.
pub const BOOL: u8 = 0;
/// `I32`.
pub const I32: u8 = 1;
/// `I64`.
pub const I64: u8 = 2;
/// `U8`.
pub const U8: u8 = 3;
/// `U32`.
pub const U32: u8 = 4;
/// `U64`.
pub const U64: u8 = 5;
/// `U128`.
pub const U128: u8 = 6;
/// `U256`.
pub const U256: u8 = 7;
/// `U512`.
pub const U512: u8 = 8;
/// `Unit`.
pub const UNIT: u8 = 9;
/// `String`.
pub const STRING: u8 = 10;
/// `Key`.
pub const KEY: u8 = 11;
/// `URef`.
pub const UREF: u8 = 12;
/// `Option`.
pub const OPTION: u8 = 13;
/// `List`.
pub const LIST: u8 = 14;
/// `ByteArray`.
pub const BYTE_ARRAY: u8 = 15;
/// `Result`.
pub const RESULT: u8 = 16;
/// `Map`.
pub const MAP: u8 = 17;
/// `Tuple1`.
pub const TUPLE1: u8 = 18;
/// `Tuple2`.
pub const TUPLE2: u8 = 19;
/// `Tuple3`.
pub const TUPLE3: u8 = 20;
/// `Any`.
pub const ANY: u8 = 21;
/// `PublicKey`.
pub const PUBLIC_KEY: u8 = 22;

impl ClType {
    /// The descriptor's tag byte.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            ClType::Bool => BOOL,
            ClType::I32 => I32,
            ClType::I64 => I64,
            ClType::U8 => U8,
            ClType::U32 => U32,
            ClType::U64 => U64,
            ClType::U128 => U128,
            ClType::U256 => U256,
            ClType::U512 => U512,
            ClType::Unit => UNIT,
            ClType::String => STRING,
            ClType::Key => KEY,
            ClType::URef => UREF,
            ClType::Option(_) => OPTION,
            ClType::List(_) => LIST,
            ClType::ByteArray(_) => BYTE_ARRAY,
            ClType::Result { .. } => RESULT,
            ClType::Map { .. } => MAP,
            ClType::Tuple1(_) => TUPLE1,
            ClType::Tuple2(_) => TUPLE2,
            ClType::Tuple3(_) => TUPLE3,
            ClType::Any => ANY,
            ClType::PublicKey => PUBLIC_KEY,
        }
    }

    /// Append the binary form of this descriptor to `buf`.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.push(self.tag());
        if let ClType::ByteArray(len) = self {
            buf.extend_from_slice(&len.to_le_bytes());
        }
        for child in self.children() {
            child.write_bytes(buf);
        }
    }

    /// The binary form of this descriptor.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_bytes(&mut buf);
        buf
    }

    /// Parse a descriptor from the front of `buf`.
    ///
    /// Returns `(descriptor, bytes_consumed)`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidTag`] for an unknown tag byte.
    /// - [`CodecError::BufferUnderflow`] if `buf` ends mid-descriptor.
    /// - [`CodecError::ExcessiveNestingDepth`] if the descriptor nests
    ///   deeper than `max_depth`.
    pub fn from_bytes(buf: &[u8], max_depth: usize) -> Result<(ClType, usize), CodecError> {
        let mut cursor = Cursor::new(buf);
        let cl_type = read(&mut cursor, 0, max_depth)?;
        Ok((cl_type, cursor.position()))
    }
}

/// Read one descriptor at nesting `depth`.
pub(crate) fn read(
    cursor: &mut Cursor<'_>,
    depth: usize,
    max_depth: usize,
) -> Result<ClType, CodecError> {
    let tag = cursor.u8("ClType tag")?;
    Ok(match tag {
        BOOL => ClType::Bool,
        I32 => ClType::I32,
        I64 => ClType::I64,
        U8 => ClType::U8,
        U32 => ClType::U32,
        U64 => ClType::U64,
        U128 => ClType::U128,
        U256 => ClType::U256,
        U512 => ClType::U512,
        UNIT => ClType::Unit,
        STRING => ClType::String,
        KEY => ClType::Key,
        UREF => ClType::URef,
        BYTE_ARRAY => ClType::ByteArray(cursor.u32_le("ByteArray length")?),
        OPTION => ClType::Option(read_child(cursor, depth, max_depth)?),
        LIST => ClType::List(read_child(cursor, depth, max_depth)?),
        RESULT => {
            let ok = read_child(cursor, depth, max_depth)?;
            let err = read_child(cursor, depth, max_depth)?;
            ClType::Result { ok, err }
        }
        MAP => {
            let key = read_child(cursor, depth, max_depth)?;
            let value = read_child(cursor, depth, max_depth)?;
            ClType::Map { key, value }
        }
        TUPLE1 => ClType::Tuple1([read_child(cursor, depth, max_depth)?]),
        TUPLE2 => ClType::Tuple2([
            read_child(cursor, depth, max_depth)?,
            read_child(cursor, depth, max_depth)?,
        ]),
        TUPLE3 => ClType::Tuple3([
            read_child(cursor, depth, max_depth)?,
            read_child(cursor, depth, max_depth)?,
            read_child(cursor, depth, max_depth)?,
        ]),
        ANY => ClType::Any,
        PUBLIC_KEY => ClType::PublicKey,
        tag => {
            return Err(CodecError::InvalidTag {
                tag,
                type_name: "ClType",
            })
        }
    })
}

fn read_child(
    cursor: &mut Cursor<'_>,
    depth: usize,
    max_depth: usize,
) -> Result<Box<ClType>, CodecError> {
    let depth = depth + 1;
    if depth > max_depth {
        return Err(CodecError::ExcessiveNestingDepth {
            depth,
            max: max_depth,
        });
    }
    read(cursor, depth, max_depth).map(Box::new)
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;

    type TestResult = Result<(), CodecError>;

    #[test]
    fn vectors() -> TestResult {
        let cases: &[(ClType, &[u8])] = &[
            (ClType::U512, &[0x08]),
            (ClType::PublicKey, &[0x16]),
            (ClType::list(ClType::option(ClType::U64)), &[0x0E, 0x0D, 0x05]),
            (ClType::ByteArray(32), &[0x0F, 0x20, 0x00, 0x00, 0x00]),
            (ClType::map(ClType::String, ClType::U512), &[0x11, 0x0A, 0x08]),
            (ClType::result(ClType::Unit, ClType::String), &[0x10, 0x09, 0x0A]),
            (
                ClType::tuple3(ClType::Bool, ClType::Key, ClType::URef),
                &[0x14, 0x00, 0x0B, 0x0C],
            ),
        ];

        for (cl_type, bytes) in cases {
            assert_eq!(cl_type.to_bytes().as_slice(), *bytes, "encoding {cl_type}");
            let (parsed, consumed) = ClType::from_bytes(bytes, DEFAULT_MAX_DEPTH)?;
            assert_eq!(&parsed, cl_type);
            assert_eq!(consumed, bytes.len());
        }
        Ok(())
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            ClType::from_bytes(&[0x17], DEFAULT_MAX_DEPTH),
            Err(CodecError::InvalidTag {
                tag: 0x17,
                type_name: "ClType"
            })
        );
    }

    #[test]
    fn truncated_child() {
        assert!(matches!(
            ClType::from_bytes(&[0x11, 0x0A], DEFAULT_MAX_DEPTH),
            Err(CodecError::BufferUnderflow { offset: 2, .. })
        ));
    }

    #[test]
    fn depth_bound() -> TestResult {
        let mut ok = vec![OPTION; 4];
        ok.push(U8);
        let (parsed, _) = ClType::from_bytes(&ok, 4)?;
        assert_eq!(parsed.depth(), 4);

        let mut too_deep = vec![OPTION; 5];
        too_deep.push(U8);
        assert_eq!(
            ClType::from_bytes(&too_deep, 4),
            Err(CodecError::ExcessiveNestingDepth { depth: 5, max: 4 })
        );
        Ok(())
    }

    #[test]
    fn hostile_nesting_is_bounded() {
        let hostile = vec![LIST; 100_000];
        assert!(matches!(
            ClType::from_bytes(&hostile, DEFAULT_MAX_DEPTH),
            Err(CodecError::ExcessiveNestingDepth { .. })
        ));
    }
}
