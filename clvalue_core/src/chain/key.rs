//! Global state keys.
//!
//! A key is a variant tag followed by a payload whose shape the tag fixes:
//!
//! ```text
//! ┌─────┬────────────┬──────────┬────────────────┐
//! │ Tag │ Variant    │ Payload  │ String form    │
//! ├─────┼────────────┼──────────┼────────────────┤
//! │ 0   │ Account    │ 32 bytes │ account-hash-… │
//! │ 1   │ Hash       │ 32 bytes │ hash-…         │
//! │ 2   │ URef       │ 33 bytes │ uref-…-007     │
//! │ 3   │ Transfer   │ 32 bytes │ transfer-…     │
//! │ 4   │ DeployInfo │ 32 bytes │ deploy-…       │
//! │ 5   │ EraInfo    │ u64 LE   │ era-<n>        │
//! │ 6   │ Balance    │ 32 bytes │ balance-…      │
//! │ 7   │ Bid        │ 32 bytes │ bid-…          │
//! │ 8   │ Withdraw   │ 32 bytes │ withdraw-…     │
//! │ 9   │ Dictionary │ 32 bytes │ dictionary-…   │
//! └─────┴────────────┴──────────┴────────────────┘
//! ```

use core::{fmt, str::FromStr};

use super::{parse_hex_array, ParseKeyError, URef, ADDRESS_LENGTH};
use crate::{cursor::Cursor, error::CodecError};

type Address = [u8; ADDRESS_LENGTH];

/// A key into global state.
///
/// ```
/// use clvalue_core::Key;
///
/// let key: Key = "hash-0101010101010101010101010101010101010101010101010101010101010101"
///     .parse()
///     .unwrap();
/// assert_eq!(key, Key::Hash([0x01; 32]));
/// assert_eq!(key.tag(), 1);
///
/// assert_eq!("era-314".parse::<Key>().unwrap(), Key::EraInfo(314));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Account hash.
    Account(Address),

    /// Contract or contract-package hash.
    Hash(Address),

    /// Unforgeable reference.
    URef(URef),

    /// Transfer record.
    Transfer(Address),

    /// Deploy execution info.
    DeployInfo(Address),

    /// Era info, by era id.
    EraInfo(u64),

    /// Purse balance.
    Balance(Address),

    /// Validator bid.
    Bid(Address),

    /// Unbonding purse.
    Withdraw(Address),

    /// Dictionary item.
    Dictionary(Address),
}

impl Key {
    /// The variant tag byte.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Key::Account(_) => 0,
            Key::Hash(_) => 1,
            Key::URef(_) => 2,
            Key::Transfer(_) => 3,
            Key::DeployInfo(_) => 4,
            Key::EraInfo(_) => 5,
            Key::Balance(_) => 6,
            Key::Bid(_) => 7,
            Key::Withdraw(_) => 8,
            Key::Dictionary(_) => 9,
        }
    }

    /// The string prefix, including its trailing `-`.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Key::Account(_) => "account-hash-",
            Key::Hash(_) => "hash-",
            Key::URef(_) => "uref-",
            Key::Transfer(_) => "transfer-",
            Key::DeployInfo(_) => "deploy-",
            Key::EraInfo(_) => "era-",
            Key::Balance(_) => "balance-",
            Key::Bid(_) => "bid-",
            Key::Withdraw(_) => "withdraw-",
            Key::Dictionary(_) => "dictionary-",
        }
    }

    /// The 32-byte address, for hash-shaped variants.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        match self {
            Key::Account(a)
            | Key::Hash(a)
            | Key::Transfer(a)
            | Key::DeployInfo(a)
            | Key::Balance(a)
            | Key::Bid(a)
            | Key::Withdraw(a)
            | Key::Dictionary(a) => Some(a),
            Key::URef(uref) => Some(uref.address()),
            Key::EraInfo(_) => None,
        }
    }

    /// Append the binary form to `buf`.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.push(self.tag());
        match self {
            Key::URef(uref) => uref.write_bytes(buf),
            Key::EraInfo(era) => buf.extend_from_slice(&era.to_le_bytes()),
            hashed => {
                if let Some(address) = hashed.address() {
                    buf.extend_from_slice(address);
                }
            }
        }
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let tag = cursor.u8("Key tag")?;
        let hashed: fn(Address) -> Key = match tag {
            0 => Key::Account,
            1 => Key::Hash,
            3 => Key::Transfer,
            4 => Key::DeployInfo,
            6 => Key::Balance,
            7 => Key::Bid,
            8 => Key::Withdraw,
            9 => Key::Dictionary,
            2 => return URef::read(cursor).map(Key::URef),
            5 => {
                return cursor
                    .array("EraInfo id")
                    .map(|id| Key::EraInfo(u64::from_le_bytes(id)))
            }
            tag => {
                return Err(CodecError::InvalidTag {
                    tag,
                    type_name: "Key",
                })
            }
        };
        cursor.array("Key address").map(hashed)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::URef(uref) => fmt::Display::fmt(uref, f),
            Key::EraInfo(era) => write!(f, "{}{era}", self.prefix()),
            hashed => match hashed.address() {
                Some(address) => write!(f, "{}{}", self.prefix(), hex::encode(address)),
                None => Ok(()),
            },
        }
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "account-hash-" must be tried before any shorter prefix it contains.
        let hashed: [(&str, fn(Address) -> Key); 8] = [
            ("account-hash-", Key::Account),
            ("hash-", Key::Hash),
            ("transfer-", Key::Transfer),
            ("deploy-", Key::DeployInfo),
            ("balance-", Key::Balance),
            ("bid-", Key::Bid),
            ("withdraw-", Key::Withdraw),
            ("dictionary-", Key::Dictionary),
        ];

        for (prefix, variant) in hashed {
            if let Some(hex) = s.strip_prefix(prefix) {
                return parse_hex_array(hex).map(variant);
            }
        }

        if s.starts_with("uref-") {
            return s.parse().map(Key::URef);
        }

        if let Some(era) = s.strip_prefix("era-") {
            return era
                .parse()
                .map(Key::EraInfo)
                .map_err(|_| ParseKeyError::EraId(era.into()));
        }

        Err(ParseKeyError::UnknownPrefix(s.into()))
    }
}

impl From<URef> for Key {
    fn from(uref: URef) -> Self {
        Key::URef(uref)
    }
}
