//! Length-prefixed little-endian encoding for wide unsigned integers.
//!
//! `clvarint` encodes the 128, 256 and 512-bit unsigned integers of the
//! contract-level type system. Values are written as their _minimal_
//! little-endian magnitude behind a single length byte, so the small
//! amounts that dominate on-chain traffic stay compact while the full
//! width remains available.
//!
//! # Encoding
//!
//! ```text
//! ┌────────┬─────────────────────────────┐
//! │ len 1B │ magnitude (len bytes, LE)   │
//! └────────┴─────────────────────────────┘
//! ```
//!
//! - `len` is the number of magnitude bytes and never exceeds the width's
//!   byte count (16, 32 or 64).
//! - The magnitude has no zero byte in its most-significant position.
//! - Zero has an empty magnitude: the whole encoding is the single byte `0x00`.
//!
//! ```text
//! ┌────────┬───────────┬──────────────────────────────┐
//! │ Width  │ Max len   │ Largest encoding             │
//! ├────────┼───────────┼──────────────────────────────┤
//! │ U128   │ 16 (0x10) │ 17 bytes                     │
//! │ U256   │ 32 (0x20) │ 33 bytes                     │
//! │ U512   │ 64 (0x40) │ 65 bytes                     │
//! └────────┴───────────┴──────────────────────────────┘
//! ```
//!
//! # Canonicality
//!
//! Every value has exactly one encoding. The decoder rejects a length byte
//! wider than the target width, and a magnitude whose final byte is zero
//! (a longer spelling of a shorter value).
//!
//! # Examples
//!
//! ```
//! use clvarint::Width;
//! use num_bigint::BigUint;
//!
//! let mut buf = Vec::new();
//! clvarint::encode(&BigUint::from(300u32), Width::U512, &mut buf).unwrap();
//! assert_eq!(buf, [0x02, 0x2C, 0x01]);
//!
//! let (value, len) = clvarint::decode(&buf, Width::U512).unwrap();
//! assert_eq!(value, BigUint::from(300u32));
//! assert_eq!(len, 3);
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

use alloc::vec::Vec;

use num_bigint::BigUint;

/// Maximum number of bytes any `clvarint` encoding can occupy (`U512`).
pub const MAX_BYTES: usize = 1 + Width::U512.max_bytes();

/// The declared bit-width of a wide unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 128-bit, up to 16 magnitude bytes.
    U128,

    /// 256-bit, up to 32 magnitude bytes.
    U256,

    /// 512-bit, up to 64 magnitude bytes.
    U512,
}

impl Width {
    /// Maximum number of magnitude bytes for this width.
    #[must_use]
    pub const fn max_bytes(self) -> usize {
        match self {
            Width::U128 => 16,
            Width::U256 => 32,
            Width::U512 => 64,
        }
    }

    /// Number of bits in this width.
    #[must_use]
    pub const fn bits(self) -> u64 {
        match self {
            Width::U128 => 128,
            Width::U256 => 256,
            Width::U512 => 512,
        }
    }

    /// The largest value representable at this width (`2^bits - 1`).
    #[must_use]
    pub fn max_value(self) -> BigUint {
        (BigUint::from(1u8) << self.bits()) - 1u8
    }

    /// Whether `value` fits in this width.
    #[must_use]
    pub fn fits(self, value: &BigUint) -> bool {
        value.bits() <= self.bits()
    }
}

impl core::fmt::Display for Width {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Width::U128 => write!(f, "U128"),
            Width::U256 => write!(f, "U256"),
            Width::U512 => write!(f, "U512"),
        }
    }
}

/// Number of bytes in the minimal little-endian magnitude of `value`.
///
/// Zero has an empty magnitude.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
///
/// assert_eq!(clvarint::magnitude_len(&BigUint::from(0u8)), 0);
/// assert_eq!(clvarint::magnitude_len(&BigUint::from(255u8)), 1);
/// assert_eq!(clvarint::magnitude_len(&BigUint::from(256u16)), 2);
/// ```
#[must_use]
pub fn magnitude_len(value: &BigUint) -> usize {
    usize::try_from(value.bits().div_ceil(8)).unwrap_or(usize::MAX)
}

/// Returns the encoded length of `value` in bytes (prefix included).
#[must_use]
pub fn encoded_len(value: &BigUint) -> usize {
    magnitude_len(value).saturating_add(1)
}

/// Encodes `value` at `width`, appending bytes to `buf`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`EncodeError::Overflow`] if `value` needs more magnitude bytes
/// than `width` allows. Nothing is written in that case.
///
/// # Examples
///
/// ```
/// use clvarint::Width;
/// use num_bigint::BigUint;
///
/// let mut buf = Vec::new();
/// clvarint::encode(&BigUint::from(0u8), Width::U128, &mut buf).unwrap();
/// assert_eq!(buf, [0x00]);
///
/// buf.clear();
/// clvarint::encode(&BigUint::from(255u8), Width::U256, &mut buf).unwrap();
/// assert_eq!(buf, [0x01, 0xFF]);
/// ```
pub fn encode(value: &BigUint, width: Width, buf: &mut Vec<u8>) -> Result<usize, EncodeError> {
    let len = magnitude_len(value);
    if len > width.max_bytes() {
        return Err(EncodeError::Overflow { width, len });
    }

    // len <= 64, checked above
    #[allow(clippy::cast_possible_truncation)]
    buf.push(len as u8);
    if len > 0 {
        buf.extend_from_slice(&value.to_bytes_le());
    }

    Ok(1 + len)
}

/// Encodes `value` at `width` into a fresh buffer.
///
/// # Errors
///
/// Returns [`EncodeError::Overflow`] if `value` does not fit in `width`.
pub fn to_vec(value: &BigUint, width: Width) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(encoded_len(value));
    encode(value, width, &mut buf)?;
    Ok(buf)
}

/// Decodes a `width` integer from the front of `buf`.
///
/// Returns `(value, bytes_consumed)` on success. Trailing bytes are left
/// untouched.
///
/// # Errors
///
/// - [`DecodeError::BufferTooShort`] if `buf` is empty or shorter than
///   the declared magnitude.
/// - [`DecodeError::LengthTooLarge`] if the length byte exceeds
///   [`Width::max_bytes`].
/// - [`DecodeError::NonCanonical`] if the magnitude ends in a zero byte.
///
/// # Examples
///
/// ```
/// use clvarint::{DecodeError, Width};
/// use num_bigint::BigUint;
///
/// let (v, n) = clvarint::decode(&[0x01, 0x2A, 0xFF], Width::U128).unwrap();
/// assert_eq!((v, n), (BigUint::from(42u8), 2));
///
/// assert_eq!(
///     clvarint::decode(&[0x11], Width::U128),
///     Err(DecodeError::LengthTooLarge { width: Width::U128, len: 17 })
/// );
/// ```
pub fn decode(buf: &[u8], width: Width) -> Result<(BigUint, usize), DecodeError> {
    let Some((&len, rest)) = buf.split_first() else {
        return Err(DecodeError::BufferTooShort { need: 1, have: 0 });
    };

    let len = usize::from(len);
    if len > width.max_bytes() {
        return Err(DecodeError::LengthTooLarge { width, len });
    }

    let Some(magnitude) = rest.get(..len) else {
        return Err(DecodeError::BufferTooShort {
            need: 1 + len,
            have: buf.len(),
        });
    };

    if magnitude.last() == Some(&0) {
        return Err(DecodeError::NonCanonical { len });
    }

    Ok((BigUint::from_bytes_le(magnitude), 1 + len))
}

/// Errors that can occur when encoding a wide integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The value's magnitude is wider than the target width.
    #[error("value needs {len} magnitude bytes, {width} allows at most {}", .width.max_bytes())]
    Overflow {
        /// Target width.
        width: Width,

        /// Minimal magnitude length of the rejected value.
        len: usize,
    },
}

/// Errors that can occur when decoding a wide integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input buffer is shorter than the encoding requires.
    #[error("buffer too short for clvarint: need {need} bytes, have {have}")]
    BufferTooShort {
        /// Bytes required from the start of the encoding.
        need: usize,

        /// Bytes available.
        have: usize,
    },

    /// The length byte declares more magnitude bytes than the width holds.
    #[error("length byte {len} exceeds {width} maximum of {}", .width.max_bytes())]
    LengthTooLarge {
        /// Target width.
        width: Width,

        /// Declared magnitude length.
        len: usize,
    },

    /// The magnitude's most-significant byte is zero.
    #[error("non-canonical {len}-byte magnitude with zero high byte")]
    NonCanonical {
        /// Declared magnitude length.
        len: usize,
    },
}
