//! Chain-specific primitives with a fixed binary shape.
//!
//! | Type             | Bytes                                   |
//! |------------------|-----------------------------------------|
//! | [`AccessRights`] | 1 (bit set, `0..=7`)                    |
//! | [`URef`]         | 32 address + 1 access rights            |
//! | [`PublicKey`]    | 1 algorithm tag + 32 (Ed25519) or 33 (secp256k1) |
//! | [`Key`]          | 1 variant tag + 8, 32 or 33 payload bytes |
//!
//! Each also has the node's formatted string form (`uref-…-007`,
//! `01…`, `hash-…`), via [`Display`](core::fmt::Display) and
//! [`FromStr`](core::str::FromStr).

pub mod access_rights;
pub mod key;
pub mod public_key;
pub mod uref;

pub use access_rights::AccessRights;
pub use key::Key;
pub use public_key::PublicKey;
pub use uref::URef;

use thiserror::Error;

/// Length of a hash-like address.
pub const ADDRESS_LENGTH: usize = 32;

/// Errors from parsing the formatted string form of a chain primitive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseKeyError {
    /// The string does not start with a recognized prefix.
    #[error("unrecognized prefix in {0:?}")]
    UnknownPrefix(String),

    /// A hexadecimal field is malformed.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A decoded field has the wrong number of bytes.
    #[error("expected {expected} bytes, got {got}")]
    Length {
        /// Required length.
        expected: usize,

        /// Decoded length.
        got: usize,
    },

    /// The access-rights suffix is not an octal number in `0..=7`.
    #[error("invalid access rights {0:?}")]
    AccessRights(String),

    /// The era id is not a decimal `u64`.
    #[error("invalid era id {0:?}")]
    EraId(String),

    /// The public key algorithm tag is unknown.
    #[error("unknown public key algorithm tag {0:#04x}")]
    Algorithm(u8),
}

/// Decode `hex` into exactly `N` bytes.
pub(crate) fn parse_hex_array<const N: usize>(hex: &str) -> Result<[u8; N], ParseKeyError> {
    let bytes = hex::decode(hex)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseKeyError::Length { expected: N, got })
}
