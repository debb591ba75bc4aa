//! `Option`, `Result`, `List`, `Map` and `TupleN`.
//!
//! Element bytes come from the dispatcher, so composites nest to any depth
//! the [`Codec`](super::Codec) admits.

use super::{decode_value, encode_value, primitive::encode_len};
use crate::{
    cl_type::ClType, config::CodecConfig, cursor::Cursor, error::CodecError, value::Value,
};

const NONE: u8 = 0x00;
const SOME: u8 = 0x01;

const ERR: u8 = 0x00;
const OK: u8 = 0x01;

/// Admission check for declared `List` and `Map` counts.
///
/// A count must fit the input at the element type's minimum width. Elements
/// that encode to nothing cannot be checked that way, so they draw on an
/// allowance shared by the whole decoded value.
#[derive(Debug)]
pub(super) struct ElementBudget {
    zero_width_left: usize,
}

impl ElementBudget {
    pub(super) const fn new(config: &CodecConfig) -> Self {
        Self {
            zero_width_left: config.max_zero_width_elements,
        }
    }

    fn admit(
        &mut self,
        cursor: &Cursor<'_>,
        count: usize,
        element_len: usize,
        reading: &'static str,
    ) -> Result<(), CodecError> {
        if element_len == 0 {
            if count > self.zero_width_left {
                return Err(CodecError::InvalidLength {
                    type_name: reading,
                    len: count,
                    limit: self.zero_width_left,
                });
            }
            self.zero_width_left -= count;
            return Ok(());
        }

        let need = count.saturating_mul(element_len);
        if need > cursor.remaining() {
            return Err(CodecError::BufferUnderflow {
                reading,
                offset: cursor.position(),
                need,
                have: cursor.remaining(),
            });
        }
        Ok(())
    }
}

pub(super) fn encode_option(
    inner: Option<&Value>,
    inner_type: &ClType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match inner {
        None => buf.push(NONE),
        Some(value) => {
            buf.push(SOME);
            encode_value(value, inner_type, buf)?;
        }
    }
    Ok(())
}

pub(super) fn decode_option(
    cursor: &mut Cursor<'_>,
    inner_type: &ClType,
    budget: &mut ElementBudget,
) -> Result<Option<Box<Value>>, CodecError> {
    match cursor.u8("Option tag")? {
        NONE => Ok(None),
        SOME => decode_value(cursor, inner_type, budget).map(|v| Some(Box::new(v))),
        tag => Err(CodecError::InvalidTag {
            tag,
            type_name: "Option",
        }),
    }
}

pub(super) fn encode_result(
    result: &Result<Box<Value>, Box<Value>>,
    ok_type: &ClType,
    err_type: &ClType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match result {
        Ok(value) => {
            buf.push(OK);
            encode_value(value, ok_type, buf)
        }
        Err(value) => {
            buf.push(ERR);
            encode_value(value, err_type, buf)
        }
    }
}

pub(super) fn decode_result(
    cursor: &mut Cursor<'_>,
    ok_type: &ClType,
    err_type: &ClType,
    budget: &mut ElementBudget,
) -> Result<Result<Box<Value>, Box<Value>>, CodecError> {
    match cursor.u8("Result tag")? {
        OK => decode_value(cursor, ok_type, budget).map(|v| Ok(Box::new(v))),
        ERR => decode_value(cursor, err_type, budget).map(|v| Err(Box::new(v))),
        tag => Err(CodecError::InvalidTag {
            tag,
            type_name: "Result",
        }),
    }
}

pub(super) fn encode_list(
    items: &[Value],
    inner_type: &ClType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    encode_len(items.len(), "List", buf)?;
    for item in items {
        encode_value(item, inner_type, buf)?;
    }
    Ok(())
}

/// The count is admitted against the remaining input before any element
/// is read; elements are then decoded one by one.
pub(super) fn decode_list(
    cursor: &mut Cursor<'_>,
    inner_type: &ClType,
    budget: &mut ElementBudget,
) -> Result<Vec<Value>, CodecError> {
    let count = cursor.u32_le("List count")? as usize;
    budget.admit(cursor, count, inner_type.min_encoded_len(), "List elements")?;
    let mut items = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        items.push(decode_value(cursor, inner_type, budget)?);
    }
    Ok(items)
}

pub(super) fn encode_map(
    pairs: &[(Value, Value)],
    key_type: &ClType,
    value_type: &ClType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    encode_len(pairs.len(), "Map", buf)?;
    for (key, value) in pairs {
        encode_value(key, key_type, buf)?;
        encode_value(value, value_type, buf)?;
    }
    Ok(())
}

pub(super) fn decode_map(
    cursor: &mut Cursor<'_>,
    key_type: &ClType,
    value_type: &ClType,
    budget: &mut ElementBudget,
) -> Result<Vec<(Value, Value)>, CodecError> {
    let count = cursor.u32_le("Map count")? as usize;
    let entry_len = key_type
        .min_encoded_len()
        .saturating_add(value_type.min_encoded_len());
    budget.admit(cursor, count, entry_len, "Map entries")?;
    let mut pairs = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        let key = decode_value(cursor, key_type, budget)?;
        let value = decode_value(cursor, value_type, budget)?;
        pairs.push((key, value));
    }
    Ok(pairs)
}

/// Arity is checked by the dispatcher.
pub(super) fn encode_tuple(
    items: &[Value],
    types: &[Box<ClType>],
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    for (item, cl_type) in items.iter().zip(types) {
        encode_value(item, cl_type, buf)?;
    }
    Ok(())
}

pub(super) fn decode_tuple(
    cursor: &mut Cursor<'_>,
    types: &[Box<ClType>],
    budget: &mut ElementBudget,
) -> Result<Vec<Value>, CodecError> {
    types
        .iter()
        .map(|cl_type| decode_value(cursor, cl_type, budget))
        .collect()
}
