//! Value container: encoded bytes, the descriptor that explains them, and
//! optionally the decoded native value.
//!
//! A [`ClValue`] built through [`ClValue::from_value`] or
//! [`ClValue::from_bytes`] is consistent by construction: `bytes` decode
//! under `cl_type` to exactly `parsed`, consuming every byte.
//!
//! # Binary form
//!
//! ```text
//! ┌──────────────┬───────────────┬─────────────────────┐
//! │ len (u32 LE) │ bytes (len)   │ cl_type tag bytes   │
//! └──────────────┴───────────────┴─────────────────────┘
//! ```
//!
//! # JSON form
//!
//! ```json
//! { "cl_type": "U512", "bytes": "0400ca9a3b", "parsed": null }
//! ```
//!
//! On deserialize, `bytes` are decoded under `cl_type`; any supplied
//! `parsed` is ignored.

use serde::{Deserialize, Serialize};

use crate::{
    cl_type::{tag, ClType},
    codec::{encode_len, Codec},
    cursor::Cursor,
    error::CodecError,
    response::ResponseError,
    value::Value,
};

/// An encoded value with its descriptor.
///
/// Equality is wire identity: two containers are equal when their
/// descriptors and bytes are, whether or not either has been decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ClValueJson", into = "ClValueJson")]
pub struct ClValue {
    cl_type: ClType,
    bytes: Vec<u8>,
    parsed: Option<Value>,
}

impl ClValue {
    /// Encode `value` under `cl_type` with the default codec.
    ///
    /// ```
    /// use clvalue_core::{ClType, ClValue};
    ///
    /// let cl_value = ClValue::from_value(1_000_000_000u64.into(), ClType::U512).unwrap();
    /// assert_eq!(cl_value.to_hex(), "0400ca9a3b");
    /// ```
    ///
    /// # Errors
    ///
    /// As [`Codec::encode`].
    pub fn from_value(value: Value, cl_type: ClType) -> Result<Self, CodecError> {
        Self::from_value_with(&Codec::default(), value, cl_type)
    }

    /// Encode `value` under `cl_type` with `codec`.
    ///
    /// # Errors
    ///
    /// As [`Codec::encode`].
    pub fn from_value_with(codec: &Codec, value: Value, cl_type: ClType) -> Result<Self, CodecError> {
        let bytes = codec.encode(&value, &cl_type)?;
        Ok(Self {
            cl_type,
            bytes,
            parsed: Some(value),
        })
    }

    /// Decode `bytes` under `cl_type` with the default codec.
    ///
    /// # Errors
    ///
    /// As [`Codec::decode_exact`].
    pub fn from_bytes(bytes: Vec<u8>, cl_type: ClType) -> Result<Self, CodecError> {
        Self::from_bytes_with(&Codec::default(), bytes, cl_type)
    }

    /// Decode `bytes` under `cl_type` with `codec`.
    ///
    /// # Errors
    ///
    /// As [`Codec::decode_exact`].
    pub fn from_bytes_with(codec: &Codec, bytes: Vec<u8>, cl_type: ClType) -> Result<Self, CodecError> {
        let parsed = codec.decode_exact(&bytes, &cl_type)?;
        Ok(Self {
            cl_type,
            bytes,
            parsed: Some(parsed),
        })
    }

    /// Wrap bytes without decoding them.
    ///
    /// The result has no parsed value; [`ClValue::value`] decodes on demand.
    #[must_use]
    pub const fn from_raw(bytes: Vec<u8>, cl_type: ClType) -> Self {
        Self {
            cl_type,
            bytes,
            parsed: None,
        }
    }

    /// The descriptor.
    #[must_use]
    pub const fn cl_type(&self) -> &ClType {
        &self.cl_type
    }

    /// The encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The decoded value, if known.
    #[must_use]
    pub const fn parsed(&self) -> Option<&Value> {
        self.parsed.as_ref()
    }

    /// The native value, decoding the bytes if it is not already known.
    ///
    /// # Errors
    ///
    /// As [`Codec::decode_exact`].
    pub fn value(&self) -> Result<Value, CodecError> {
        match &self.parsed {
            Some(value) => Ok(value.clone()),
            None => Codec::default().decode_exact(&self.bytes, &self.cl_type),
        }
    }

    /// Lowercase hex of the encoded bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Append the binary form to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] if the bytes are longer than a
    /// u32 prefix can count. `buf` is left unchanged.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        encode_len(self.bytes.len(), "ClValue", buf)?;
        buf.extend_from_slice(&self.bytes);
        self.cl_type.write_bytes(buf);
        Ok(())
    }

    /// The binary form.
    ///
    /// # Errors
    ///
    /// As [`ClValue::write_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        self.write_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Parse the binary form from the front of `buf`, decoding the payload.
    ///
    /// Returns `(container, bytes_consumed)`.
    ///
    /// # Errors
    ///
    /// Any [`CodecError`] from reading the frame, parsing the descriptor, or
    /// decoding the payload, which must fill its length exactly.
    pub fn from_serialized(buf: &[u8], codec: &Codec) -> Result<(Self, usize), CodecError> {
        let mut cursor = Cursor::new(buf);
        let cl_value = Self::read(&mut cursor, codec)?;
        Ok((cl_value, cursor.position()))
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>, codec: &Codec) -> Result<Self, CodecError> {
        let len = cursor.u32_le("ClValue length")? as usize;
        let bytes = cursor.take(len, "ClValue bytes")?.to_vec();
        let cl_type = tag::read(cursor, 0, codec.config().max_depth)?;
        Self::from_bytes_with(codec, bytes, cl_type)
    }
}

impl PartialEq for ClValue {
    fn eq(&self, other: &Self) -> bool {
        self.cl_type == other.cl_type && self.bytes == other.bytes
    }
}

impl Eq for ClValue {}

#[derive(Serialize, Deserialize)]
struct ClValueJson {
    cl_type: ClType,
    bytes: String,
    #[serde(default)]
    parsed: serde_json::Value,
}

impl TryFrom<ClValueJson> for ClValue {
    type Error = ResponseError;

    fn try_from(json: ClValueJson) -> Result<Self, Self::Error> {
        let bytes = hex::decode(&json.bytes)?;
        Ok(ClValue::from_bytes(bytes, json.cl_type)?)
    }
}

impl From<ClValue> for ClValueJson {
    fn from(cl_value: ClValue) -> Self {
        ClValueJson {
            bytes: cl_value.to_hex(),
            cl_type: cl_value.cl_type,
            parsed: serde_json::Value::Null,
        }
    }
}
