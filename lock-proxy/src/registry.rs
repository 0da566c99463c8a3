//! Asset registry
//!
//! A set of registry keys. Presence means the tuple behind the key has been
//! linked. Keys are never removed; callers check `is_registered` before
//! `register`, and a repeated `register` only rewrites the same marker.

use cosmwasm_std::{StdResult, Storage, Uint256};

use crate::state::{DELEGATED_SUPPLY, REGISTERED_MARKER, REGISTRY};

pub fn is_registered(storage: &dyn Storage, key: &[u8; 32]) -> bool {
    REGISTRY.has(storage, key)
}

pub fn register(storage: &mut dyn Storage, key: &[u8; 32]) -> StdResult<()> {
    REGISTRY.save(storage, key, &REGISTERED_MARKER)
}

pub fn delegated_supply(storage: &dyn Storage, key: &[u8; 32]) -> StdResult<Option<Uint256>> {
    DELEGATED_SUPPLY.may_load(storage, key)
}

pub fn record_delegated_supply(
    storage: &mut dyn Storage,
    key: &[u8; 32],
    supply: Uint256,
) -> StdResult<()> {
    DELEGATED_SUPPLY.save(storage, key, &supply)
}
