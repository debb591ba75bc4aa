//! Access rights attached to an unforgeable reference.

use crate::{cursor::Cursor, error::CodecError};

/// A set of `READ`, `WRITE` and `ADD` permissions.
///
/// Encoded as one byte holding the bit set. Bytes above `0x07` are
/// rejected on decode.
///
/// ```
/// use clvalue_core::AccessRights;
///
/// let rights = AccessRights::READ | AccessRights::WRITE;
/// assert!(rights.is_readable());
/// assert!(!rights.is_addable());
/// assert_eq!(rights.to_string(), "003");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccessRights(u8);

impl AccessRights {
    /// No access.
    pub const NONE: Self = Self(0);

    /// Read.
    pub const READ: Self = Self(0b001);

    /// Write.
    pub const WRITE: Self = Self(0b010);

    /// Add.
    pub const ADD: Self = Self(0b100);

    /// Read and add.
    pub const READ_ADD: Self = Self(0b101);

    /// Read and write.
    pub const READ_WRITE: Self = Self(0b011);

    /// Add and write.
    pub const ADD_WRITE: Self = Self(0b110);

    /// Everything.
    pub const READ_ADD_WRITE: Self = Self(0b111);

    /// Build from a raw bit set, rejecting unknown bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= Self::READ_ADD_WRITE.0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// The raw bit set.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every right in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Includes `READ`.
    #[must_use]
    pub const fn is_readable(self) -> bool {
        self.contains(Self::READ)
    }

    /// Includes `WRITE`.
    #[must_use]
    pub const fn is_writeable(self) -> bool {
        self.contains(Self::WRITE)
    }

    /// Includes `ADD`.
    #[must_use]
    pub const fn is_addable(self) -> bool {
        self.contains(Self::ADD)
    }

    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let bits = cursor.u8("AccessRights")?;
        Self::from_bits(bits).ok_or(CodecError::InvalidTag {
            tag: bits,
            type_name: "AccessRights",
        })
    }
}

impl core::ops::BitOr for AccessRights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::fmt::Display for AccessRights {
    /// Three-digit octal, as in `uref-…-007`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}
