//! # CL value codec
//!
//! Typed binary codec for the contract-level ("CL") type system.
//!
//! A node and its smart contracts exchange values in a canonical
//! little-endian binary format. The same format carries arguments _into_ a
//! contract invocation and values _out of_ on-chain state queries. Every
//! encoded value travels with a [`ClType`] descriptor that fully determines
//! its layout, so decoding never needs out-of-band length information.
//!
//! ```text
//!   encode:  Value ──┬── ClType ──► Codec ──► bytes
//!   decode:  bytes ──┴── ClType ──► Codec ──► (Value, consumed)
//! ```
//!
//! # Layout summary
//!
//! | Descriptor            | Bytes                                            |
//! |-----------------------|--------------------------------------------------|
//! | `Bool`                | `0x00` / `0x01`                                  |
//! | `I32` `I64` `U8` `U32` `U64` | fixed-width little-endian                 |
//! | `U128` `U256` `U512`  | length byte + minimal LE magnitude ([`clvarint`]) |
//! | `Unit`                | nothing                                          |
//! | `String`              | u32 LE byte count + UTF-8                        |
//! | `ByteArray(N)`        | exactly `N` raw bytes                            |
//! | `Option(T)`           | `0x00` / `0x01` + `T`                            |
//! | `Result(T, E)`        | `0x00` + `E` / `0x01` + `T`                      |
//! | `List(T)`             | u32 LE count + elements                          |
//! | `Map(K, V)`           | u32 LE count + `(K, V)` pairs                    |
//! | `TupleN`              | elements in order                                |
//!
//! # Example
//!
//! ```
//! use clvalue_core::{ClType, Value};
//!
//! let cl_type = ClType::option(ClType::list(ClType::U64));
//! let value = Value::some(Value::list([1u64, 2u64]));
//!
//! let bytes = clvalue_core::encode(&value, &cl_type).unwrap();
//! assert_eq!(bytes.len(), 17);
//!
//! let (decoded, consumed) = clvalue_core::decode(&bytes, &cl_type).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(consumed, 17);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod argument;
pub mod chain;
pub mod cl_type;
pub mod cl_value;
pub mod codec;
pub mod config;
pub mod cursor;
pub mod error;
pub mod response;
pub mod value;

pub use argument::{encode_argument, EncodedArgument, RuntimeArgs};
pub use chain::{AccessRights, Key, PublicKey, URef};
pub use cl_type::ClType;
pub use cl_value::ClValue;
pub use codec::{decode, encode, Codec};
pub use config::CodecConfig;
pub use error::CodecError;
pub use response::{decode_response, parse_query_response, ResponseError};
pub use value::Value;
