//! Producing named arguments for a contract invocation.
//!
//! Each argument is a name plus a [`ClValue`]. A [`RuntimeArgs`] list keeps
//! arguments in insertion order and serializes the way a node expects:
//!
//! - JSON: `[["amount", {"cl_type": "U512", "bytes": "...", "parsed": null}], ...]`
//! - Binary: u32 LE count, then per argument the name as a `String` followed
//!   by the container's binary form.

pub mod standard;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cl_type::ClType,
    cl_value::ClValue,
    codec::{decode_string, encode_len, Codec},
    cursor::Cursor,
    error::CodecError,
    value::Value,
};

/// A named, encoded argument.
///
/// Serializes as a two-element array `[name, value]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedArgument(String, ClValue);

impl EncodedArgument {
    /// Name length, value length and a one-byte descriptor.
    const MIN_ENCODED_LEN: usize = 4 + 4 + 1;

    /// Pair a name with an already-built container.
    #[must_use]
    pub fn new(name: impl Into<String>, value: ClValue) -> Self {
        Self(name.into(), value)
    }

    /// The argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The encoded value.
    #[must_use]
    pub const fn value(&self) -> &ClValue {
        &self.1
    }

    /// Append the binary form to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] if the name or value is longer
    /// than a u32 prefix can count.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        let start = buf.len();
        let result = encode_len(self.0.len(), "String", buf).and_then(|()| {
            buf.extend_from_slice(self.0.as_bytes());
            self.1.write_bytes(buf)
        });
        if result.is_err() {
            buf.truncate(start);
        }
        result
    }

    fn read(cursor: &mut Cursor<'_>, codec: &Codec) -> Result<Self, CodecError> {
        let name = decode_string(cursor)?;
        let value = ClValue::read(cursor, codec)?;
        Ok(Self(name, value))
    }
}

/// Encode `value` under `cl_type` and attach `name`.
///
/// ```
/// use clvalue_core::{encode_argument, ClType};
///
/// let arg = encode_argument("amount", 2_500_000_000u64.into(), ClType::U512).unwrap();
/// assert_eq!(arg.name(), "amount");
/// assert_eq!(arg.value().to_hex(), "0400f90295");
/// ```
///
/// # Errors
///
/// As [`Codec::encode`].
pub fn encode_argument(
    name: impl Into<String>,
    value: Value,
    cl_type: ClType,
) -> Result<EncodedArgument, CodecError> {
    encode_argument_with(&Codec::default(), name, value, cl_type)
}

/// [`encode_argument`] with an explicit codec.
///
/// # Errors
///
/// As [`Codec::encode`].
pub fn encode_argument_with(
    codec: &Codec,
    name: impl Into<String>,
    value: Value,
    cl_type: ClType,
) -> Result<EncodedArgument, CodecError> {
    let name = name.into();
    match ClValue::from_value_with(codec, value, cl_type) {
        Ok(cl_value) => {
            debug!(
                arg = name.as_str(),
                cl_type = %cl_value.cl_type(),
                len = cl_value.bytes().len(),
                "encoded argument"
            );
            Ok(EncodedArgument(name, cl_value))
        }
        Err(e) => {
            debug!(arg = name.as_str(), error = %e, "argument did not encode");
            Err(e)
        }
    }
}

/// Ordered, named invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeArgs(Vec<EncodedArgument>);

impl RuntimeArgs {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add `arg`, replacing any argument of the same name in place.
    ///
    /// Returns the replaced argument.
    pub fn insert(&mut self, arg: EncodedArgument) -> Option<EncodedArgument> {
        match self.0.iter_mut().find(|existing| existing.0 == arg.0) {
            Some(existing) => Some(core::mem::replace(existing, arg)),
            None => {
                self.0.push(arg);
                None
            }
        }
    }

    /// Encode and insert an argument, builder style.
    ///
    /// # Errors
    ///
    /// As [`encode_argument`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        cl_type: ClType,
    ) -> Result<Self, CodecError> {
        self.insert(encode_argument(name, value.into(), cl_type)?);
        Ok(self)
    }

    /// The value of the argument called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClValue> {
        self.0.iter().find(|arg| arg.0 == name).map(|arg| &arg.1)
    }

    /// Arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &EncodedArgument> {
        self.0.iter()
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The binary form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] if any length exceeds a u32.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        encode_len(self.0.len(), "RuntimeArgs", &mut buf)?;
        for arg in &self.0 {
            arg.write_bytes(&mut buf)?;
        }
        Ok(buf)
    }

    /// Parse the binary form from the front of `buf`.
    ///
    /// Returns `(args, bytes_consumed)`. Every value is decoded and checked
    /// against its descriptor.
    ///
    /// # Errors
    ///
    /// Any [`CodecError`] from reading the frame or decoding a value.
    pub fn from_bytes(buf: &[u8], codec: &Codec) -> Result<(Self, usize), CodecError> {
        let mut cursor = Cursor::new(buf);
        let count = cursor.u32_le("RuntimeArgs count")? as usize;
        let need = count.saturating_mul(EncodedArgument::MIN_ENCODED_LEN);
        if need > cursor.remaining() {
            return Err(CodecError::BufferUnderflow {
                reading: "RuntimeArgs entries",
                offset: cursor.position(),
                need,
                have: cursor.remaining(),
            });
        }
        let mut args = Vec::with_capacity(count.min(cursor.remaining()));
        for _ in 0..count {
            args.push(EncodedArgument::read(&mut cursor, codec)?);
        }
        Ok((Self(args), cursor.position()))
    }
}

impl FromIterator<EncodedArgument> for RuntimeArgs {
    fn from_iter<I: IntoIterator<Item = EncodedArgument>>(iter: I) -> Self {
        let mut args = Self::new();
        for arg in iter {
            args.insert(arg);
        }
        args
    }
}

impl<'a> IntoIterator for &'a RuntimeArgs {
    type Item = &'a EncodedArgument;
    type IntoIter = core::slice::Iter<'a, EncodedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn mismatch_surfaces_to_caller() {
        assert_eq!(
            encode_argument("target", Value::from("nope"), ClType::ByteArray(32)),
            Err(CodecError::TypeMismatch {
                expected: ClType::ByteArray(32),
                found: "String"
            })
        );
    }

    #[test]
    fn insert_replaces_by_name() -> TestResult {
        let mut args = RuntimeArgs::new()
            .with("a", 1u8, ClType::U8)?
            .with("b", 2u8, ClType::U8)?;
        let replaced = args.insert(encode_argument("a", 3u8.into(), ClType::U8)?);

        assert_eq!(replaced.map(|arg| arg.value().bytes().to_vec()), Some(vec![1]));
        let names: Vec<_> = args.iter().map(EncodedArgument::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(args.get("a").map(ClValue::bytes), Some(&[3u8][..]));
        assert!(args.get("c").is_none());
        Ok(())
    }

    #[test]
    fn binary_form() -> TestResult {
        let args = RuntimeArgs::new().with("id", Value::some(7u64), ClType::option(ClType::U64))?;
        let bytes = args.to_bytes()?;
        #[rustfmt::skip]
        let expected = [
            1, 0, 0, 0,                         // count
            2, 0, 0, 0, b'i', b'd',             // name
            9, 0, 0, 0,                         // value length
            1, 7, 0, 0, 0, 0, 0, 0, 0,          // Some(7)
            13, 5,                              // Option(U64)
        ];
        assert_eq!(bytes, expected);

        let (parsed, consumed) = RuntimeArgs::from_bytes(&bytes, &Codec::default())?;
        assert_eq!(parsed, args);
        assert_eq!(consumed, bytes.len());
        Ok(())
    }

    #[test]
    fn hostile_count_underflows_up_front() {
        let mut bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        bytes.extend_from_slice(&[0; 9]);
        assert_eq!(
            RuntimeArgs::from_bytes(&bytes, &Codec::default()),
            Err(CodecError::BufferUnderflow {
                reading: "RuntimeArgs entries",
                offset: 4,
                need: 0xFFFF_FFFF * 9,
                have: 9,
            })
        );
    }

    #[test]
    fn json_is_array_of_pairs() -> TestResult {
        let args = RuntimeArgs::new().with("flag", true, ClType::Bool)?;
        let json = serde_json::to_value(&args)?;
        assert_eq!(
            json,
            serde_json::json!([["flag", {"cl_type": "Bool", "bytes": "01", "parsed": null}]])
        );
        let back: RuntimeArgs = serde_json::from_value(json)?;
        assert_eq!(back, args);
        Ok(())
    }
}
