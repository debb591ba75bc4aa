//! Native values.
//!
//! A [`Value`] is the codec's in-memory form of a CL value. It carries no
//! descriptor of its own: the same `Value::Integer(7)` encodes as one byte
//! under `U8`, four under `U32`, or two under `U512`. The dispatcher checks
//! that a value's shape fits the descriptor before writing anything.

use num_bigint::{BigInt, BigUint};

use crate::chain::{Key, PublicKey, URef};

/// A native CL value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// `Bool`.
    Bool(bool),

    /// Any integer descriptor, fixed or variable width.
    ///
    /// Range is checked against the descriptor on encode.
    Integer(BigInt),

    /// `Unit`.
    Unit,

    /// `String`.
    String(String),

    /// `ByteArray(N)`; the length must equal `N` on encode.
    ByteArray(Vec<u8>),

    /// `Key`.
    Key(Key),

    /// `URef`.
    URef(URef),

    /// `PublicKey`.
    PublicKey(PublicKey),

    /// `Option(T)`.
    Option(Option<Box<Value>>),

    /// `List(T)`.
    List(Vec<Value>),

    /// `Result(Ok = T, Err = E)`.
    Result(Result<Box<Value>, Box<Value>>),

    /// `Map(K, V)`, in encounter order. Duplicate keys are kept.
    Map(Vec<(Value, Value)>),

    /// `Tuple1`, `Tuple2` or `Tuple3`, by element count.
    Tuple(Vec<Value>),

    /// `Any`: opaque bytes written verbatim.
    Any(Vec<u8>),
}

impl Value {
    /// `Some(inner)`.
    #[must_use]
    pub fn some(inner: impl Into<Value>) -> Self {
        Value::Option(Some(Box::new(inner.into())))
    }

    /// `None`.
    #[must_use]
    pub const fn none() -> Self {
        Value::Option(None)
    }

    /// `Ok(inner)`.
    #[must_use]
    pub fn ok(inner: impl Into<Value>) -> Self {
        Value::Result(Ok(Box::new(inner.into())))
    }

    /// `Err(inner)`.
    #[must_use]
    pub fn err(inner: impl Into<Value>) -> Self {
        Value::Result(Err(Box::new(inner.into())))
    }

    /// A list from anything convertible.
    #[must_use]
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// A map from `(key, value)` pairs, kept in iteration order.
    #[must_use]
    pub fn map<K: Into<Value>, V: Into<Value>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// A tuple of any arity; the descriptor decides whether it fits.
    #[must_use]
    pub fn tuple<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Raw bytes for a `ByteArray(N)` slot.
    #[must_use]
    pub fn byte_array(bytes: impl Into<Vec<u8>>) -> Self {
        Value::ByteArray(bytes.into())
    }

    /// Opaque bytes for an `Any` slot.
    #[must_use]
    pub fn any(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Any(bytes.into())
    }

    /// The shape of this value, as reported in
    /// [`CodecError::TypeMismatch`](crate::CodecError::TypeMismatch).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Integer(_) => "Integer",
            Value::Unit => "Unit",
            Value::String(_) => "String",
            Value::ByteArray(_) => "ByteArray",
            Value::Key(_) => "Key",
            Value::URef(_) => "URef",
            Value::PublicKey(_) => "PublicKey",
            Value::Option(_) => "Option",
            Value::List(_) => "List",
            Value::Result(_) => "Result",
            Value::Map(_) => "Map",
            Value::Tuple(items) => match items.len() {
                1 => "Tuple1",
                2 => "Tuple2",
                3 => "Tuple3",
                _ => "Tuple",
            },
            Value::Any(_) => "Any",
        }
    }

    /// The integer, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// The string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(BigInt::from(n))
                }
            }
        )*
    };
}

from_integer!(u8, u32, u64, u128, i32, i64);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Value::ByteArray(bytes.to_vec())
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        Value::Key(key)
    }
}

impl From<URef> for Value {
    fn from(uref: URef) -> Self {
        Value::URef(uref)
    }
}

impl From<PublicKey> for Value {
    fn from(key: PublicKey) -> Self {
        Value::PublicKey(key)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Value::Option(opt.map(|inner| Box::new(inner.into())))
    }
}
