//! Account public keys.
//!
//! Only the wire shape lives here. Key derivation and signing belong to
//! the account layer.

use core::{fmt, str::FromStr};

use super::{parse_hex_array, ParseKeyError};
use crate::{cursor::Cursor, error::CodecError};

/// Algorithm tag for Ed25519.
pub const ED25519_TAG: u8 = 0x01;

/// Algorithm tag for secp256k1.
pub const SECP256K1_TAG: u8 = 0x02;

/// Ed25519 key length.
pub const ED25519_LENGTH: usize = 32;

/// Compressed secp256k1 key length.
pub const SECP256K1_LENGTH: usize = 33;

/// A public key tagged with its signature algorithm.
///
/// The account-hex form is the tag byte followed by the raw key, both in
/// lowercase hex:
///
/// ```
/// use clvalue_core::PublicKey;
///
/// let key = PublicKey::Ed25519([0x0F; 32]);
/// let hex = key.to_string();
/// assert_eq!(&hex[..4], "010f");
/// assert_eq!(hex.parse::<PublicKey>().unwrap(), key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublicKey {
    /// Ed25519 verifying key.
    Ed25519([u8; ED25519_LENGTH]),

    /// Compressed secp256k1 point.
    Secp256k1([u8; SECP256K1_LENGTH]),
}

impl PublicKey {
    /// The algorithm tag byte.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            PublicKey::Ed25519(_) => ED25519_TAG,
            PublicKey::Secp256k1(_) => SECP256K1_TAG,
        }
    }

    /// The raw key bytes, without the tag.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(raw) => raw,
            PublicKey::Secp256k1(raw) => raw,
        }
    }

    /// Encoded length including the tag.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1 + self.raw().len()
    }

    /// Append the binary form to `buf`.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.push(self.tag());
        buf.extend_from_slice(self.raw());
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        match cursor.u8("PublicKey tag")? {
            ED25519_TAG => cursor.array("Ed25519 key").map(PublicKey::Ed25519),
            SECP256K1_TAG => cursor.array("secp256k1 key").map(PublicKey::Secp256k1),
            tag => Err(CodecError::InvalidTag {
                tag,
                type_name: "PublicKey",
            }),
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{}", self.tag(), hex::encode(self.raw()))
    }
}

impl FromStr for PublicKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag_hex = s.get(..2).ok_or(ParseKeyError::Length {
            expected: 1,
            got: 0,
        })?;
        let rest = s.get(2..).unwrap_or_default();
        let [tag] = parse_hex_array::<1>(tag_hex)?;
        match tag {
            ED25519_TAG => parse_hex_array(rest).map(PublicKey::Ed25519),
            SECP256K1_TAG => parse_hex_array(rest).map(PublicKey::Secp256k1),
            other => Err(ParseKeyError::Algorithm(other)),
        }
    }
}
