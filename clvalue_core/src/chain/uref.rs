//! Unforgeable references.

use core::{fmt, str::FromStr};

use super::{parse_hex_array, AccessRights, ParseKeyError, ADDRESS_LENGTH};
use crate::{cursor::Cursor, error::CodecError};

const PREFIX: &str = "uref-";

/// An unforgeable reference: a 32-byte address plus access rights.
///
/// ```
/// use clvalue_core::{AccessRights, URef};
///
/// let uref = URef::new([0xAB; 32], AccessRights::READ_ADD_WRITE);
/// let s = uref.to_string();
/// assert!(s.starts_with("uref-abab"));
/// assert!(s.ends_with("-007"));
/// assert_eq!(s.parse::<URef>().unwrap(), uref);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct URef {
    address: [u8; ADDRESS_LENGTH],
    access_rights: AccessRights,
}

impl URef {
    /// Encoded length.
    pub const LENGTH: usize = ADDRESS_LENGTH + 1;

    /// Create a reference.
    #[must_use]
    pub const fn new(address: [u8; ADDRESS_LENGTH], access_rights: AccessRights) -> Self {
        Self {
            address,
            access_rights,
        }
    }

    /// The address.
    #[must_use]
    pub const fn address(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.address
    }

    /// The access rights.
    #[must_use]
    pub const fn access_rights(&self) -> AccessRights {
        self.access_rights
    }

    /// The same address with different rights.
    #[must_use]
    pub const fn with_access_rights(self, access_rights: AccessRights) -> Self {
        Self::new(self.address, access_rights)
    }

    /// Append the binary form to `buf`.
    pub fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.address);
        buf.push(self.access_rights.bits());
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let address = cursor.array("URef address")?;
        let access_rights = AccessRights::read(cursor)?;
        Ok(Self::new(address, access_rights))
    }
}

impl fmt::Display for URef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREFIX}{}-{}",
            hex::encode(self.address),
            self.access_rights
        )
    }
}

impl FromStr for URef {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| ParseKeyError::UnknownPrefix(s.into()))?;
        let (address_hex, rights) = body
            .rsplit_once('-')
            .ok_or_else(|| ParseKeyError::AccessRights(String::new()))?;

        let address = parse_hex_array(address_hex)?;
        let access_rights = u8::from_str_radix(rights, 8)
            .ok()
            .and_then(AccessRights::from_bits)
            .ok_or_else(|| ParseKeyError::AccessRights(rights.into()))?;

        Ok(Self::new(address, access_rights))
    }
}
