//! Consuming values returned by state queries.
//!
//! A node answers a query with
//!
//! ```json
//! { "stored_value": { "CLValue": { "cl_type": ..., "bytes": "<hex>", "parsed": ... } } }
//! ```
//!
//! or with the `CLValue` object at the top level. Only `cl_type` and
//! `bytes` are trusted; `parsed` is the node's rendering and is ignored.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cl_type::ClType, cl_value::ClValue, codec::Codec, error::CodecError, value::Value,
};

/// Errors from interpreting a query response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The response is not valid JSON, or its shape is wrong.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// The `bytes` field is not valid hex.
    #[error("invalid hex in bytes field: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The bytes do not decode under the declared descriptor.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// No `CLValue` object was found.
    #[error("response carries no CLValue")]
    MissingClValue,
}

/// Decode a response value that must occupy all of `bytes`.
///
/// ```
/// use clvalue_core::{decode_response, ClType, Value};
///
/// let value = decode_response(&[0x02, 0xE8, 0x03], &ClType::U512).unwrap();
/// assert_eq!(value, Value::from(1000u32));
/// ```
///
/// # Errors
///
/// As [`Codec::decode_exact`].
pub fn decode_response(bytes: &[u8], cl_type: &ClType) -> Result<Value, CodecError> {
    decode_response_with(&Codec::default(), bytes, cl_type)
}

/// [`decode_response`] with an explicit codec.
///
/// # Errors
///
/// As [`Codec::decode_exact`].
pub fn decode_response_with(
    codec: &Codec,
    bytes: &[u8],
    cl_type: &ClType,
) -> Result<Value, CodecError> {
    codec
        .decode_exact(bytes, cl_type)
        .inspect(|_| debug!(%cl_type, len = bytes.len(), "decoded query response"))
        .inspect_err(|e| debug!(%cl_type, error = %e, "query response did not decode"))
}

/// Parse a JSON query response into its value container.
///
/// # Errors
///
/// - [`ResponseError::Json`] if `json` is malformed.
/// - [`ResponseError::MissingClValue`] if no `CLValue` object is present.
/// - [`ResponseError::Hex`] or [`ResponseError::Codec`] if the value does
///   not decode.
pub fn parse_query_response(json: &str) -> Result<ClValue, ResponseError> {
    let response: serde_json::Value = serde_json::from_str(json)?;
    parse_query_response_value(&response)
}

/// [`parse_query_response`] over an already-parsed JSON document.
///
/// # Errors
///
/// As [`parse_query_response`].
pub fn parse_query_response_value(response: &serde_json::Value) -> Result<ClValue, ResponseError> {
    let cl_value = response
        .get("CLValue")
        .or_else(|| response.pointer("/stored_value/CLValue"))
        .ok_or(ResponseError::MissingClValue)?;

    cl_value_from_json(cl_value)
        .inspect(|v| debug!(cl_type = %v.cl_type(), len = v.bytes().len(), "parsed query response"))
        .inspect_err(|e| debug!(error = %e, "query response rejected"))
}

fn cl_value_from_json(json: &serde_json::Value) -> Result<ClValue, ResponseError> {
    let raw = RawClValue::deserialize(json)?;
    let bytes = hex::decode(raw.bytes)?;
    Ok(ClValue::from_bytes(bytes, raw.cl_type)?)
}

/// The trusted fields of a `CLValue` object.
#[derive(Deserialize)]
struct RawClValue {
    cl_type: ClType,
    bytes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn exact_consumption() {
        assert_eq!(
            decode_response(&[0x01, 0x00], &ClType::Bool),
            Err(CodecError::TrailingBytes {
                cl_type: ClType::Bool,
                trailing: 1
            })
        );
    }

    #[test]
    fn stored_value_wrapper() -> TestResult {
        let json = r#"{
            "api_version": "1.4.5",
            "stored_value": {
                "CLValue": { "cl_type": "String", "bytes": "0200000068690a", "parsed": "hi" }
            }
        }"#;
        let err = parse_query_response(json).err();
        assert!(matches!(
            err,
            Some(ResponseError::Codec(CodecError::TrailingBytes { trailing: 1, .. }))
        ));

        let json = r#"{"stored_value":{"CLValue":{"cl_type":"String","bytes":"020000006869"}}}"#;
        assert_eq!(parse_query_response(json)?.value()?, Value::from("hi"));
        Ok(())
    }

    #[test]
    fn top_level() -> TestResult {
        let json = r#"{"CLValue":{"cl_type":{"Option":"U8"},"bytes":"0109","parsed":9}}"#;
        assert_eq!(parse_query_response(json)?.parsed(), Some(&Value::some(9u8)));
        Ok(())
    }

    #[test]
    fn missing() {
        assert!(matches!(
            parse_query_response(r#"{"stored_value":{"Account":{}}}"#),
            Err(ResponseError::MissingClValue)
        ));
    }

    #[test]
    fn bad_hex() {
        assert!(matches!(
            parse_query_response(r#"{"CLValue":{"cl_type":"U8","bytes":"zz"}}"#),
            Err(ResponseError::Hex(_))
        ));
    }
}
