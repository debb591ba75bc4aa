//! Error types for the CL value codec.

use thiserror::Error;

use crate::cl_type::ClType;

/// Errors that can occur while encoding or decoding a CL value.
///
/// Every codec operation either succeeds or fails with exactly one of these.
/// There is no partial decode: on failure the in-progress value is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Decoding needs more bytes than remain in the buffer.
    #[error(
        "buffer underflow reading {reading} at offset {offset}: need {need} bytes, have {have}"
    )]
    BufferUnderflow {
        /// What was being read.
        reading: &'static str,

        /// Offset where the read was attempted.
        offset: usize,

        /// Bytes needed from `offset`.
        need: usize,

        /// Bytes available from `offset`.
        have: usize,
    },

    /// A discriminant byte does not match any known variant.
    #[error("invalid tag {tag:#04x} for {type_name}")]
    InvalidTag {
        /// The unrecognized byte.
        tag: u8,

        /// The type whose discriminant it was.
        type_name: &'static str,
    },

    /// A declared or supplied length violates a structural limit.
    #[error("invalid {type_name} length {len} (limit {limit})")]
    InvalidLength {
        /// The type whose length was rejected.
        type_name: &'static str,

        /// The offending length.
        len: usize,

        /// The structural limit (maximum, or exact size for fixed arrays).
        limit: usize,
    },

    /// An integer does not fit the requested width or signedness.
    #[error("integer does not fit in {cl_type}")]
    IntegerOverflow {
        /// The target descriptor.
        cl_type: ClType,
    },

    /// The native value's shape contradicts the requested descriptor.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The descriptor the value was encoded against.
        expected: ClType,

        /// The kind of value actually supplied.
        found: &'static str,
    },

    /// String bytes are not valid UTF-8.
    #[error("malformed UTF-8 in string at offset {offset}")]
    MalformedUtf8 {
        /// Offset of the string's first content byte.
        offset: usize,
    },

    /// A descriptor nests deeper than the configured maximum.
    #[error("nesting depth {depth} exceeds maximum of {max}")]
    ExcessiveNestingDepth {
        /// Depth reached.
        depth: usize,

        /// Configured maximum.
        max: usize,
    },

    /// A big-integer magnitude carries a zero most-significant byte.
    #[error("non-canonical {type_name} encoding")]
    NonCanonical {
        /// The big-integer descriptor name.
        type_name: &'static str,
    },

    /// Bytes remain after the value was fully decoded.
    #[error("{trailing} trailing bytes after {cl_type} value")]
    TrailingBytes {
        /// The descriptor that was decoded.
        cl_type: ClType,

        /// Number of unread bytes.
        trailing: usize,
    },
}
