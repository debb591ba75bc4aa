//! Every descriptor variant survives encode then decode.

use clvalue_core::{
    decode, encode, AccessRights, ClType, ClValue, Codec, CodecError, Key, PublicKey, URef, Value,
};
use testresult::TestResult;

fn samples() -> Vec<(Value, ClType)> {
    let uref = URef::new([0x5A; 32], AccessRights::READ_ADD);
    vec![
        (true.into(), ClType::Bool),
        (Value::from(i32::MIN), ClType::I32),
        (Value::from(i64::MAX), ClType::I64),
        (Value::from(0u8), ClType::U8),
        (Value::from(u32::MAX), ClType::U32),
        (Value::from(u64::MAX), ClType::U64),
        (Value::from(u128::MAX), ClType::U128),
        (Value::from(0u8), ClType::U256),
        (Value::from(1_000_000_000_000u64), ClType::U512),
        (Value::Unit, ClType::Unit),
        (Value::from("contract-level ✓"), ClType::String),
        (Key::Account([1; 32]).into(), ClType::Key),
        (Key::EraInfo(77).into(), ClType::Key),
        (Key::URef(uref).into(), ClType::Key),
        (uref.into(), ClType::URef),
        (PublicKey::Ed25519([9; 32]).into(), ClType::PublicKey),
        (PublicKey::Secp256k1([3; 33]).into(), ClType::PublicKey),
        (Value::some("x"), ClType::option(ClType::String)),
        (Value::none(), ClType::option(ClType::Unit)),
        (
            Value::list([Value::list([1u8]), Value::list(Vec::<u8>::new())]),
            ClType::list(ClType::list(ClType::U8)),
        ),
        (Value::byte_array([0xCDu8; 32]), ClType::ByteArray(32)),
        (Value::byte_array(Vec::<u8>::new()), ClType::ByteArray(0)),
        (Value::ok(3u64), ClType::result(ClType::U64, ClType::String)),
        (Value::err("boom"), ClType::result(ClType::U64, ClType::String)),
        (
            Value::map([("b", Value::some(2u32)), ("a", Value::none()), ("b", Value::none())]),
            ClType::map(ClType::String, ClType::option(ClType::U32)),
        ),
        (Value::tuple([7u8]), ClType::tuple1(ClType::U8)),
        (
            Value::tuple([Value::from(false), Value::from(-9i64)]),
            ClType::tuple2(ClType::Bool, ClType::I64),
        ),
        (
            Value::tuple([Value::from("k"), Value::from(uref), Value::from(5u8)]),
            ClType::tuple3(ClType::String, ClType::URef, ClType::U512),
        ),
        (Value::any([0xDEu8, 0xAD]), ClType::Any),
    ]
}

#[test]
fn every_variant() -> TestResult {
    for (value, cl_type) in samples() {
        let bytes = encode(&value, &cl_type)?;
        let (decoded, consumed) = decode(&bytes, &cl_type)?;
        assert_eq!(decoded, value, "{cl_type}");
        assert_eq!(consumed, bytes.len(), "{cl_type}");
    }
    Ok(())
}

#[test]
fn every_variant_through_container() -> TestResult {
    for (value, cl_type) in samples() {
        let encoded = ClValue::from_value(value.clone(), cl_type.clone())?;
        let framed = encoded.to_bytes()?;
        let (decoded, consumed) = ClValue::from_serialized(&framed, &Codec::default())?;

        assert_eq!(decoded.parsed(), Some(&value), "{cl_type}");
        assert_eq!(decoded.cl_type(), &cl_type);
        assert_eq!(consumed, framed.len());

        let json = serde_json::to_string(&encoded)?;
        let from_json: ClValue = serde_json::from_str(&json)?;
        assert_eq!(from_json, encoded, "{json}");
    }
    Ok(())
}

#[test]
fn every_truncation_underflows() -> TestResult {
    for (value, cl_type) in samples() {
        if matches!(cl_type, ClType::Any | ClType::Unit | ClType::ByteArray(0)) {
            continue;
        }
        let bytes = encode(&value, &cl_type)?;
        for cut in 0..bytes.len() {
            let prefix = bytes.get(..cut).unwrap_or_default();
            match decode(prefix, &cl_type) {
                Err(CodecError::BufferUnderflow { .. }) => {}
                other => {
                    return Err(format!("{cl_type} cut at {cut}: {other:?}").into());
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "bolero")]
#[allow(clippy::panic)]
mod property {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)]
    fn scalars_round_trip() {
        bolero::check!()
            .with_type::<(u64, i32, String, Vec<u8>)>()
            .for_each(|(n, i, s, raw)| {
                let cl_type = ClType::tuple3(
                    ClType::U512,
                    ClType::option(ClType::I32),
                    ClType::map(ClType::String, ClType::list(ClType::U8)),
                );
                let value = Value::tuple([
                    Value::from(*n),
                    Value::some(*i),
                    Value::map([(s.as_str(), Value::list(raw.iter().copied()))]),
                ]);
                let bytes = encode(&value, &cl_type)
                    .unwrap_or_else(|e| panic!("encode failed for {value:?}: {e}"));
                let (decoded, consumed) = decode(&bytes, &cl_type)
                    .unwrap_or_else(|e| panic!("decode failed for {value:?}: {e}"));
                assert_eq!(decoded, value);
                assert_eq!(consumed, bytes.len());
            });
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn arbitrary_bytes_never_panic() {
        let cl_type = ClType::map(
            ClType::String,
            ClType::result(ClType::list(ClType::U256), ClType::option(ClType::Key)),
        );
        bolero::check!().with_type::<Vec<u8>>().for_each(|buf| {
            if let Ok((value, consumed)) = decode(buf, &cl_type) {
                let re_encoded = encode(&value, &cl_type).unwrap_or_default();
                assert_eq!(Some(re_encoded.as_slice()), buf.get(..consumed));
            }
        });
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn arbitrary_descriptor_bytes_never_panic() {
        bolero::check!().with_type::<Vec<u8>>().for_each(|buf| {
            let _ = ClType::from_bytes(buf, 8);
        });
    }
}
