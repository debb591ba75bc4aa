//! Type descriptors.
//!
//! A [`ClType`] is a closed tree of variants. Parameterized variants own
//! their children, so a descriptor alone determines how a value's bytes are
//! laid out.
//!
//! Descriptors travel in two forms:
//!
//! - JSON, as emitted by a node: `"U512"`, `{"List":"U64"}`,
//!   `{"ByteArray":32}`, `{"Map":{"key":"String","value":"U64"}}`.
//! - Binary, as a tag byte followed by any children (see [`tag`]).

pub mod tag;

use serde::{Deserialize, Serialize};

use crate::chain::{public_key::ED25519_LENGTH, URef};

/// A contract-level type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClType {
    /// Boolean.
    Bool,

    /// Signed 32-bit integer.
    I32,

    /// Signed 64-bit integer.
    I64,

    /// Unsigned 8-bit integer.
    U8,

    /// Unsigned 32-bit integer.
    U32,

    /// Unsigned 64-bit integer.
    U64,

    /// Unsigned 128-bit integer, variable width on the wire.
    U128,

    /// Unsigned 256-bit integer, variable width on the wire.
    U256,

    /// Unsigned 512-bit integer, variable width on the wire.
    U512,

    /// The empty value.
    Unit,

    /// UTF-8 string.
    String,

    /// Global state key.
    Key,

    /// Unforgeable reference.
    URef,

    /// Optional value.
    Option(Box<ClType>),

    /// Homogeneous list.
    List(Box<ClType>),

    /// Fixed-length byte array.
    ByteArray(u32),

    /// Success or error.
    Result {
        /// Success payload.
        ok: Box<ClType>,

        /// Error payload.
        err: Box<ClType>,
    },

    /// Key/value pairs in encounter order.
    Map {
        /// Key type.
        key: Box<ClType>,

        /// Value type.
        value: Box<ClType>,
    },

    /// 1-tuple.
    Tuple1([Box<ClType>; 1]),

    /// 2-tuple.
    Tuple2([Box<ClType>; 2]),

    /// 3-tuple.
    Tuple3([Box<ClType>; 3]),

    /// Opaque bytes with no structural layout.
    Any,

    /// Public key.
    PublicKey,
}

impl ClType {
    /// `Option(inner)`.
    #[must_use]
    pub fn option(inner: ClType) -> Self {
        ClType::Option(Box::new(inner))
    }

    /// `List(inner)`.
    #[must_use]
    pub fn list(inner: ClType) -> Self {
        ClType::List(Box::new(inner))
    }

    /// `ByteArray(len)`.
    #[must_use]
    pub const fn byte_array(len: u32) -> Self {
        ClType::ByteArray(len)
    }

    /// `Result(Ok = ok, Err = err)`.
    #[must_use]
    pub fn result(ok: ClType, err: ClType) -> Self {
        ClType::Result {
            ok: Box::new(ok),
            err: Box::new(err),
        }
    }

    /// `Map(key, value)`.
    #[must_use]
    pub fn map(key: ClType, value: ClType) -> Self {
        ClType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// `Tuple1(a)`.
    #[must_use]
    pub fn tuple1(a: ClType) -> Self {
        ClType::Tuple1([Box::new(a)])
    }

    /// `Tuple2(a, b)`.
    #[must_use]
    pub fn tuple2(a: ClType, b: ClType) -> Self {
        ClType::Tuple2([Box::new(a), Box::new(b)])
    }

    /// `Tuple3(a, b, c)`.
    #[must_use]
    pub fn tuple3(a: ClType, b: ClType, c: ClType) -> Self {
        ClType::Tuple3([Box::new(a), Box::new(b), Box::new(c)])
    }

    /// The variant name, without parameters.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ClType::Bool => "Bool",
            ClType::I32 => "I32",
            ClType::I64 => "I64",
            ClType::U8 => "U8",
            ClType::U32 => "U32",
            ClType::U64 => "U64",
            ClType::U128 => "U128",
            ClType::U256 => "U256",
            ClType::U512 => "U512",
            ClType::Unit => "Unit",
            ClType::String => "String",
            ClType::Key => "Key",
            ClType::URef => "URef",
            ClType::Option(_) => "Option",
            ClType::List(_) => "List",
            ClType::ByteArray(_) => "ByteArray",
            ClType::Result { .. } => "Result",
            ClType::Map { .. } => "Map",
            ClType::Tuple1(_) => "Tuple1",
            ClType::Tuple2(_) => "Tuple2",
            ClType::Tuple3(_) => "Tuple3",
            ClType::Any => "Any",
            ClType::PublicKey => "PublicKey",
        }
    }

    /// Child descriptors, in declaration order.
    #[must_use]
    pub fn children(&self) -> Vec<&ClType> {
        match self {
            ClType::Option(inner) | ClType::List(inner) => vec![inner.as_ref()],
            ClType::Result { ok, err } => vec![ok.as_ref(), err.as_ref()],
            ClType::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            ClType::Tuple1(types) => types.iter().map(AsRef::as_ref).collect(),
            ClType::Tuple2(types) => types.iter().map(AsRef::as_ref).collect(),
            ClType::Tuple3(types) => types.iter().map(AsRef::as_ref).collect(),
            _ => Vec::new(),
        }
    }

    /// Nesting depth: 0 for a simple descriptor, one more than the deepest
    /// child for a composite.
    ///
    /// ```
    /// use clvalue_core::ClType;
    ///
    /// assert_eq!(ClType::U64.depth(), 0);
    /// assert_eq!(ClType::option(ClType::list(ClType::U64)).depth(), 2);
    /// assert_eq!(ClType::map(ClType::String, ClType::option(ClType::U8)).depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// The fewest bytes any value of this type can encode to.
    ///
    /// ```
    /// use clvalue_core::ClType;
    ///
    /// assert_eq!(ClType::list(ClType::U512).min_encoded_len(), 4);
    /// assert_eq!(ClType::tuple2(ClType::U64, ClType::Bool).min_encoded_len(), 9);
    /// assert_eq!(ClType::tuple1(ClType::Unit).min_encoded_len(), 0);
    /// ```
    #[must_use]
    pub fn min_encoded_len(&self) -> usize {
        match self {
            ClType::Unit | ClType::Any => 0,
            ClType::Bool
            | ClType::U8
            | ClType::U128
            | ClType::U256
            | ClType::U512
            | ClType::Option(_) => 1,
            ClType::I32 | ClType::U32 | ClType::String | ClType::List(_) | ClType::Map { .. } => 4,
            ClType::I64 | ClType::U64 => 8,
            // tag + era id
            ClType::Key => 1 + 8,
            ClType::URef => URef::LENGTH,
            ClType::PublicKey => 1 + ED25519_LENGTH,
            ClType::ByteArray(len) => *len as usize,
            ClType::Result { ok, err } => ok
                .min_encoded_len()
                .min(err.min_encoded_len())
                .saturating_add(1),
            ClType::Tuple1(_) | ClType::Tuple2(_) | ClType::Tuple3(_) => self
                .children()
                .into_iter()
                .map(ClType::min_encoded_len)
                .fold(0, usize::saturating_add),
        }
    }

    /// The innermost composite holding an `Any` that something could follow.
    ///
    /// `Any` runs to the end of the input, so it may only appear at the top
    /// level, in the last slot of a tuple, or inside an `Option` or `Result`
    /// that itself sits in such a position. It never fits in a `List` or
    /// `Map`.
    ///
    /// ```
    /// use clvalue_core::ClType;
    ///
    /// assert_eq!(ClType::tuple2(ClType::U8, ClType::Any).misplaced_any(), None);
    ///
    /// let list = ClType::list(ClType::Any);
    /// assert_eq!(list.misplaced_any(), Some(&list));
    /// ```
    #[must_use]
    pub fn misplaced_any(&self) -> Option<&ClType> {
        self.find_misplaced_any(true)
    }

    fn find_misplaced_any(&self, last: bool) -> Option<&ClType> {
        let children: Vec<(&ClType, bool)> = match self {
            ClType::Option(inner) => vec![(inner.as_ref(), last)],
            ClType::Result { ok, err } => vec![(ok.as_ref(), last), (err.as_ref(), last)],
            ClType::List(inner) => vec![(inner.as_ref(), false)],
            ClType::Map { key, value } => vec![(key.as_ref(), false), (value.as_ref(), false)],
            ClType::Tuple1(_) | ClType::Tuple2(_) | ClType::Tuple3(_) => {
                let slots = self.children();
                let final_slot = slots.len().saturating_sub(1);
                slots
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| (child, last && i == final_slot))
                    .collect()
            }
            _ => Vec::new(),
        };
        children
            .into_iter()
            .find_map(|(child, child_last)| match child {
                ClType::Any if !child_last => Some(self),
                _ => child.find_misplaced_any(child_last),
            })
    }

    /// Whether this descriptor carries child descriptors.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ClType::Option(_)
                | ClType::List(_)
                | ClType::Result { .. }
                | ClType::Map { .. }
                | ClType::Tuple1(_)
                | ClType::Tuple2(_)
                | ClType::Tuple3(_)
        )
    }
}

impl core::fmt::Display for ClType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClType::Option(inner) => write!(f, "Option({inner})"),
            ClType::List(inner) => write!(f, "List({inner})"),
            ClType::ByteArray(len) => write!(f, "ByteArray({len})"),
            ClType::Result { ok, err } => write!(f, "Result(Ok={ok}, Err={err})"),
            ClType::Map { key, value } => write!(f, "Map({key}, {value})"),
            ClType::Tuple1([a]) => write!(f, "Tuple1({a})"),
            ClType::Tuple2([a, b]) => write!(f, "Tuple2({a}, {b})"),
            ClType::Tuple3([a, b, c]) => write!(f, "Tuple3({a}, {b}, {c})"),
            simple => f.write_str(simple.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod display {
        use super::*;

        #[test]
        fn nested() {
            let cl_type = ClType::result(
                ClType::map(ClType::String, ClType::list(ClType::U512)),
                ClType::tuple2(ClType::ByteArray(32), ClType::Unit),
            );
            assert_eq!(
                cl_type.to_string(),
                "Result(Ok=Map(String, List(U512)), Err=Tuple2(ByteArray(32), Unit))"
            );
        }
    }

    mod depth {
        use super::*;

        #[test]
        fn simple_is_zero() {
            for cl_type in [ClType::Bool, ClType::ByteArray(32), ClType::Any, ClType::Key] {
                assert_eq!(cl_type.depth(), 0);
                assert!(!cl_type.is_composite());
            }
        }

        #[test]
        fn widest_branch_wins() {
            let cl_type = ClType::tuple3(
                ClType::U8,
                ClType::option(ClType::option(ClType::option(ClType::U8))),
                ClType::list(ClType::U8),
            );
            assert_eq!(cl_type.depth(), 4);
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn min_encoded_len() {
            let cases = [
                (ClType::Unit, 0),
                (ClType::ByteArray(0), 0),
                (ClType::map(ClType::Unit, ClType::Unit), 4),
                (ClType::option(ClType::U512), 1),
                (ClType::result(ClType::U64, ClType::Unit), 1),
                (ClType::result(ClType::U64, ClType::U32), 5),
                (ClType::Key, 9),
                (ClType::URef, 33),
                (ClType::PublicKey, 33),
                (ClType::tuple3(ClType::Unit, ClType::ByteArray(0), ClType::Any), 0),
            ];
            for (cl_type, len) in cases {
                assert_eq!(cl_type.min_encoded_len(), len, "{cl_type}");
            }
        }

        #[test]
        fn any_only_in_final_position() {
            let admitted = [
                ClType::Any,
                ClType::option(ClType::Any),
                ClType::result(ClType::Any, ClType::Any),
                ClType::tuple3(ClType::U8, ClType::U8, ClType::option(ClType::Any)),
                ClType::tuple2(ClType::U8, ClType::tuple2(ClType::Bool, ClType::Any)),
                ClType::list(ClType::U8),
            ];
            for cl_type in admitted {
                assert_eq!(cl_type.misplaced_any(), None, "{cl_type}");
            }

            let inner = ClType::tuple2(ClType::option(ClType::Any), ClType::U8);
            let rejected = [
                (ClType::list(ClType::Any), ClType::list(ClType::Any)),
                (ClType::map(ClType::Any, ClType::U8), ClType::map(ClType::Any, ClType::U8)),
                (ClType::map(ClType::U8, ClType::Any), ClType::map(ClType::U8, ClType::Any)),
                (
                    ClType::tuple2(ClType::Any, ClType::U8),
                    ClType::tuple2(ClType::Any, ClType::U8),
                ),
                (inner.clone(), ClType::option(ClType::Any)),
                (ClType::list(ClType::option(ClType::Any)), ClType::option(ClType::Any)),
                (ClType::tuple2(inner.clone(), ClType::Unit), ClType::option(ClType::Any)),
            ];
            for (cl_type, holder) in rejected {
                assert_eq!(cl_type.misplaced_any(), Some(&holder), "{cl_type}");
            }
        }
    }

    mod json {
        use super::*;

        #[test]
        fn node_shapes() -> Result<(), serde_json::Error> {
            let cases = [
                (ClType::U512, r#""U512""#),
                (ClType::URef, r#""URef""#),
                (ClType::PublicKey, r#""PublicKey""#),
                (ClType::option(ClType::U64), r#"{"Option":"U64"}"#),
                (ClType::list(ClType::String), r#"{"List":"String"}"#),
                (ClType::ByteArray(32), r#"{"ByteArray":32}"#),
                (
                    ClType::map(ClType::String, ClType::U64),
                    r#"{"Map":{"key":"String","value":"U64"}}"#,
                ),
                (
                    ClType::result(ClType::Unit, ClType::U32),
                    r#"{"Result":{"ok":"Unit","err":"U32"}}"#,
                ),
                (ClType::tuple1(ClType::Bool), r#"{"Tuple1":["Bool"]}"#),
                (
                    ClType::tuple3(ClType::U8, ClType::Key, ClType::Any),
                    r#"{"Tuple3":["U8","Key","Any"]}"#,
                ),
            ];

            for (cl_type, json) in cases {
                assert_eq!(serde_json::to_string(&cl_type)?, json);
                assert_eq!(serde_json::from_str::<ClType>(json)?, cl_type);
            }
            Ok(())
        }

        #[test]
        fn rejects_wrong_tuple_arity() {
            assert!(serde_json::from_str::<ClType>(r#"{"Tuple2":["U8"]}"#).is_err());
        }
    }
}
