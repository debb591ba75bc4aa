//! Argument sets expected by the system contracts.
//!
//! Amounts are in motes and always travel as `U512`.

use num_bigint::BigUint;

use super::RuntimeArgs;
use crate::{
    chain::{PublicKey, URef, ADDRESS_LENGTH},
    cl_type::ClType,
    error::CodecError,
};

/// Payment arguments: `amount`.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn standard_payment(amount: impl Into<BigUint>) -> Result<RuntimeArgs, CodecError> {
    RuntimeArgs::new().with("amount", motes(amount), ClType::U512)
}

/// Native transfer arguments: `amount`, `target` (account hash) and the
/// optional correlation `id`.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn transfer(
    amount: impl Into<BigUint>,
    target: [u8; ADDRESS_LENGTH],
    id: Option<u64>,
) -> Result<RuntimeArgs, CodecError> {
    RuntimeArgs::new()
        .with("amount", motes(amount), ClType::U512)?
        .with("target", target, ClType::ByteArray(32))?
        .with("id", id, ClType::option(ClType::U64))
}

/// Validator auction bid: `amount`, `delegation_rate`, `public_key`.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn add_bid(
    public_key: PublicKey,
    delegation_rate: u8,
    amount: impl Into<BigUint>,
) -> Result<RuntimeArgs, CodecError> {
    RuntimeArgs::new()
        .with("amount", motes(amount), ClType::U512)?
        .with("delegation_rate", delegation_rate, ClType::U8)?
        .with("public_key", public_key, ClType::PublicKey)
}

/// Bid withdrawal: `public_key`, `amount`, optional `unbond_purse`.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn withdraw_bid(
    public_key: PublicKey,
    amount: impl Into<BigUint>,
    unbond_purse: Option<URef>,
) -> Result<RuntimeArgs, CodecError> {
    RuntimeArgs::new()
        .with("public_key", public_key, ClType::PublicKey)?
        .with("amount", motes(amount), ClType::U512)?
        .with("unbond_purse", unbond_purse, ClType::option(ClType::URef))
}

/// Delegation: `amount`, `delegator`, `validator`.
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn delegate(
    delegator: PublicKey,
    validator: PublicKey,
    amount: impl Into<BigUint>,
) -> Result<RuntimeArgs, CodecError> {
    delegation(delegator, validator, motes(amount))
}

/// Undelegation: same arguments as [`delegate`].
///
/// # Errors
///
/// [`CodecError::IntegerOverflow`] if `amount` exceeds `U512`.
pub fn undelegate(
    delegator: PublicKey,
    validator: PublicKey,
    amount: impl Into<BigUint>,
) -> Result<RuntimeArgs, CodecError> {
    delegation(delegator, validator, motes(amount))
}

fn motes(amount: impl Into<BigUint>) -> BigUint {
    amount.into()
}

fn delegation(
    delegator: PublicKey,
    validator: PublicKey,
    amount: BigUint,
) -> Result<RuntimeArgs, CodecError> {
    RuntimeArgs::new()
        .with("amount", amount, ClType::U512)?
        .with("delegator", delegator, ClType::PublicKey)?
        .with("validator", validator, ClType::PublicKey)
}
