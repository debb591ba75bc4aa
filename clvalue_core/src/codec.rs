//! Type dispatcher.
//!
//! [`Codec`] is the single entry point for turning a [`Value`] into bytes
//! under a [`ClType`] and back. Dispatch is an exhaustive match over the
//! closed descriptor set; each arm hands off to a strategy module:
//!
//! - `fixed`: `I32`, `I64`, `U8`, `U32`, `U64`
//! - `big`: `U128`, `U256`, `U512`
//! - `primitive`: `Bool`, `String`, `ByteArray(N)`
//! - `composite`: `Option`, `Result`, `List`, `Map`, `TupleN`
//!
//! Chain primitives (`Key`, `URef`, `PublicKey`) carry their own layout.
//!
//! Every operation is pure. A failed encode leaves the output buffer as it
//! was; a failed decode returns no value.

mod big;
mod composite;
mod fixed;
mod primitive;

use crate::{
    chain::{Key, PublicKey, URef},
    cl_type::ClType,
    config::CodecConfig,
    cursor::Cursor,
    error::CodecError,
    value::Value,
};

use clvarint::Width;
use composite::ElementBudget;
use fixed::FixedWidth;

pub(crate) use primitive::{decode_string, encode_len};

/// A configured encoder/decoder.
///
/// ```
/// use clvalue_core::{ClType, Codec, CodecConfig, CodecError, Value};
///
/// let codec = Codec::new(CodecConfig::default().with_max_depth(1));
/// let shallow = ClType::list(ClType::U8);
/// assert_eq!(codec.encode(&Value::list([1u8]), &shallow).unwrap(), [1, 0, 0, 0, 1]);
///
/// let deep = ClType::list(shallow);
/// assert_eq!(
///     codec.encode(&Value::list([Value::list([1u8])]), &deep),
///     Err(CodecError::ExcessiveNestingDepth { depth: 2, max: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Reject descriptors this codec cannot round-trip.
    ///
    /// # Errors
    ///
    /// - [`CodecError::ExcessiveNestingDepth`] if `cl_type` is too deep.
    /// - [`CodecError::TypeMismatch`] if `cl_type` places `Any` where other
    ///   bytes could follow it (see [`ClType::misplaced_any`]). `expected`
    ///   is the composite holding it.
    pub fn check_descriptor(&self, cl_type: &ClType) -> Result<(), CodecError> {
        self.check_depth(cl_type)?;
        match cl_type.misplaced_any() {
            Some(holder) => Err(CodecError::TypeMismatch {
                expected: holder.clone(),
                found: "Any",
            }),
            None => Ok(()),
        }
    }

    /// Reject descriptors nested deeper than the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ExcessiveNestingDepth`] if `cl_type` is too deep.
    pub fn check_depth(&self, cl_type: &ClType) -> Result<(), CodecError> {
        let depth = cl_type.depth();
        if depth > self.config.max_depth {
            return Err(CodecError::ExcessiveNestingDepth {
                depth,
                max: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Encode `value` under `cl_type`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::TypeMismatch`] if the value's shape does not fit.
    /// - [`CodecError::IntegerOverflow`] if an integer is out of range.
    /// - [`CodecError::InvalidLength`] if a `ByteArray` has the wrong length
    ///   or a string or collection is longer than a u32 prefix can count.
    /// - [`CodecError::ExcessiveNestingDepth`] if `cl_type` is too deep.
    /// - [`CodecError::TypeMismatch`] if `cl_type` holds `Any` anywhere but
    ///   the end.
    pub fn encode(&self, value: &Value, cl_type: &ClType) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        self.encode_to(value, cl_type, &mut buf)?;
        Ok(buf)
    }

    /// Append the encoding of `value` to `buf`, returning the bytes written.
    ///
    /// On error `buf` is truncated back to its original length.
    ///
    /// # Errors
    ///
    /// As [`Codec::encode`].
    pub fn encode_to(
        &self,
        value: &Value,
        cl_type: &ClType,
        buf: &mut Vec<u8>,
    ) -> Result<usize, CodecError> {
        self.check_descriptor(cl_type)?;
        let start = buf.len();
        match encode_value(value, cl_type, buf) {
            Ok(()) => Ok(buf.len() - start),
            Err(e) => {
                buf.truncate(start);
                Err(e)
            }
        }
    }

    /// Decode one value of type `cl_type` from the front of `bytes`.
    ///
    /// Returns `(value, bytes_consumed)`. Trailing bytes are left unread.
    ///
    /// # Errors
    ///
    /// - [`CodecError::BufferUnderflow`] if `bytes` ends early.
    /// - [`CodecError::BufferUnderflow`] if a `List` or `Map` count claims
    ///   more elements than the rest of `bytes` could hold.
    /// - [`CodecError::InvalidTag`] for an unknown discriminant byte.
    /// - [`CodecError::InvalidLength`] for a big integer wider than its type,
    ///   or for more zero-width collection elements than
    ///   [`CodecConfig::max_zero_width_elements`] allows.
    /// - [`CodecError::NonCanonical`] for a big integer with a zero high byte.
    /// - [`CodecError::MalformedUtf8`] for a string that is not UTF-8.
    /// - [`CodecError::ExcessiveNestingDepth`] if `cl_type` is too deep.
    /// - [`CodecError::TypeMismatch`] if `cl_type` holds `Any` anywhere but
    ///   the end.
    pub fn decode(&self, bytes: &[u8], cl_type: &ClType) -> Result<(Value, usize), CodecError> {
        self.check_descriptor(cl_type)?;
        let mut cursor = Cursor::new(bytes);
        let mut budget = ElementBudget::new(&self.config);
        let value = decode_value(&mut cursor, cl_type, &mut budget)?;
        Ok((value, cursor.position()))
    }

    /// Decode a value that must occupy all of `bytes`.
    ///
    /// # Errors
    ///
    /// As [`Codec::decode`], plus [`CodecError::TrailingBytes`] if bytes
    /// remain after the value.
    pub fn decode_exact(&self, bytes: &[u8], cl_type: &ClType) -> Result<Value, CodecError> {
        let (value, consumed) = self.decode(bytes, cl_type)?;
        let trailing = bytes.len() - consumed;
        if trailing > 0 {
            return Err(CodecError::TrailingBytes {
                cl_type: cl_type.clone(),
                trailing,
            });
        }
        Ok(value)
    }
}

/// Encode with the default configuration.
///
/// # Errors
///
/// As [`Codec::encode`].
pub fn encode(value: &Value, cl_type: &ClType) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode(value, cl_type)
}

/// Decode with the default configuration.
///
/// # Errors
///
/// As [`Codec::decode`].
pub fn decode(bytes: &[u8], cl_type: &ClType) -> Result<(Value, usize), CodecError> {
    Codec::default().decode(bytes, cl_type)
}

pub(crate) fn encode_value(
    value: &Value,
    cl_type: &ClType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match (cl_type, value) {
        (ClType::Bool, Value::Bool(b)) => primitive::encode_bool(*b, buf),
        (ClType::I32, Value::Integer(n)) => fixed::encode(n, FixedWidth::I32, buf)?,
        (ClType::I64, Value::Integer(n)) => fixed::encode(n, FixedWidth::I64, buf)?,
        (ClType::U8, Value::Integer(n)) => fixed::encode(n, FixedWidth::U8, buf)?,
        (ClType::U32, Value::Integer(n)) => fixed::encode(n, FixedWidth::U32, buf)?,
        (ClType::U64, Value::Integer(n)) => fixed::encode(n, FixedWidth::U64, buf)?,
        (ClType::U128, Value::Integer(n)) => big::encode(n, Width::U128, buf)?,
        (ClType::U256, Value::Integer(n)) => big::encode(n, Width::U256, buf)?,
        (ClType::U512, Value::Integer(n)) => big::encode(n, Width::U512, buf)?,
        (ClType::Unit, Value::Unit) => {}
        (ClType::String, Value::String(s)) => primitive::encode_string(s, buf)?,
        (ClType::ByteArray(len), Value::ByteArray(bytes)) => {
            primitive::encode_byte_array(bytes, *len, buf)?;
        }
        (ClType::Key, Value::Key(key)) => key.write_bytes(buf),
        (ClType::URef, Value::URef(uref)) => uref.write_bytes(buf),
        (ClType::PublicKey, Value::PublicKey(key)) => key.write_bytes(buf),
        (ClType::Option(inner), Value::Option(opt)) => {
            composite::encode_option(opt.as_deref(), inner, buf)?;
        }
        (ClType::Result { ok, err }, Value::Result(result)) => {
            composite::encode_result(result, ok, err, buf)?;
        }
        (ClType::List(inner), Value::List(items)) => composite::encode_list(items, inner, buf)?,
        (
            ClType::Map {
                key,
                value: value_type,
            },
            Value::Map(pairs),
        ) => composite::encode_map(pairs, key, value_type, buf)?,
        (ClType::Tuple1(types), Value::Tuple(items)) if items.len() == 1 => {
            composite::encode_tuple(items, types, buf)?;
        }
        (ClType::Tuple2(types), Value::Tuple(items)) if items.len() == 2 => {
            composite::encode_tuple(items, types, buf)?;
        }
        (ClType::Tuple3(types), Value::Tuple(items)) if items.len() == 3 => {
            composite::encode_tuple(items, types, buf)?;
        }
        (ClType::Any, Value::Any(raw)) => buf.extend_from_slice(raw),
        (expected, found) => {
            return Err(CodecError::TypeMismatch {
                expected: expected.clone(),
                found: found.kind(),
            })
        }
    }
    Ok(())
}

fn decode_value(
    cursor: &mut Cursor<'_>,
    cl_type: &ClType,
    budget: &mut ElementBudget,
) -> Result<Value, CodecError> {
    Ok(match cl_type {
        ClType::Bool => Value::Bool(primitive::decode_bool(cursor)?),
        ClType::I32 => Value::Integer(fixed::decode(cursor, FixedWidth::I32)?),
        ClType::I64 => Value::Integer(fixed::decode(cursor, FixedWidth::I64)?),
        ClType::U8 => Value::Integer(fixed::decode(cursor, FixedWidth::U8)?),
        ClType::U32 => Value::Integer(fixed::decode(cursor, FixedWidth::U32)?),
        ClType::U64 => Value::Integer(fixed::decode(cursor, FixedWidth::U64)?),
        ClType::U128 => Value::Integer(big::decode(cursor, Width::U128)?),
        ClType::U256 => Value::Integer(big::decode(cursor, Width::U256)?),
        ClType::U512 => Value::Integer(big::decode(cursor, Width::U512)?),
        ClType::Unit => Value::Unit,
        ClType::String => Value::String(primitive::decode_string(cursor)?),
        ClType::ByteArray(len) => Value::ByteArray(primitive::decode_byte_array(cursor, *len)?),
        ClType::Key => Value::Key(Key::read(cursor)?),
        ClType::URef => Value::URef(URef::read(cursor)?),
        ClType::PublicKey => Value::PublicKey(PublicKey::read(cursor)?),
        ClType::Option(inner) => Value::Option(composite::decode_option(cursor, inner, budget)?),
        ClType::Result { ok, err } => {
            Value::Result(composite::decode_result(cursor, ok, err, budget)?)
        }
        ClType::List(inner) => Value::List(composite::decode_list(cursor, inner, budget)?),
        ClType::Map { key, value } => {
            Value::Map(composite::decode_map(cursor, key, value, budget)?)
        }
        ClType::Tuple1(types) => Value::Tuple(composite::decode_tuple(cursor, types, budget)?),
        ClType::Tuple2(types) => Value::Tuple(composite::decode_tuple(cursor, types, budget)?),
        ClType::Tuple3(types) => Value::Tuple(composite::decode_tuple(cursor, types, budget)?),
        ClType::Any => Value::Any(cursor.take_rest().to_vec()),
    })
}
