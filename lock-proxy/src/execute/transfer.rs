//! Transfer handlers (lock, unlock, getAssetBalance).
//!
//! `lock` takes custody on this chain and asks the remote proxy to release
//! the paired asset; `unlock` is the receiving half, relayed by the
//! cross-chain manager.

use common::TransferPayload;
use cosmwasm_std::{Event, Uint256};

use crate::directory;
use crate::error::ProxyError;
use crate::hash::to_hex;
use crate::msg::method;
use crate::proxy::ProxyDeps;
use crate::state::ADDRESS_LENGTH;

/// Balance of `asset_id` held in custody by this proxy
pub fn custody_balance(deps: &ProxyDeps, asset_id: &[u8]) -> Result<Uint256, ProxyError> {
    deps.token
        .balance_of(asset_id, &deps.config.this_contract)
        .map_err(|err| ProxyError::external(format!("balanceOf: {}", err)))
}

pub fn get_asset_balance(deps: &ProxyDeps, asset_id: &[u8]) -> Result<Uint256, ProxyError> {
    custody_balance(deps, asset_id)
}

/// Move `amount` of `local_asset_id` from `sender` into custody and dispatch
/// the matching unlock to the proxy on `dest_chain_id`
///
/// Custody is taken before the dispatch and is kept if the dispatch fails.
pub fn lock(
    deps: &mut ProxyDeps,
    local_asset_id: &[u8],
    sender: &[u8],
    dest_chain_id: u64,
    dest_address: &[u8],
    amount: Uint256,
) -> Result<Event, ProxyError> {
    if local_asset_id.len() != ADDRESS_LENGTH {
        return Err(ProxyError::validation(format!(
            "The parameter local_asset_id should be {}-byte long",
            ADDRESS_LENGTH
        )));
    }
    if sender.len() != ADDRESS_LENGTH {
        return Err(ProxyError::validation(format!(
            "The parameter sender should be {}-byte long",
            ADDRESS_LENGTH
        )));
    }
    if dest_address.is_empty() {
        return Err(ProxyError::validation(
            "The parameter dest_address should not be empty",
        ));
    }

    let dest_asset_id = directory::asset_hash(deps.storage, local_asset_id, dest_chain_id)?
        .ok_or_else(|| ProxyError::not_found("Target chain asset hash"))?;
    let dest_proxy = directory::proxy_hash(deps.storage, dest_chain_id)?
        .ok_or_else(|| ProxyError::not_found("Target chain proxy contract"))?;

    if !deps
        .token
        .transfer(local_asset_id, sender, &deps.config.this_contract, amount)
    {
        return Err(ProxyError::external(
            "Failed to transfer the asset to the proxy contract",
        ));
    }

    let payload = TransferPayload::new(dest_asset_id.clone(), dest_address, amount).encode();
    if !deps
        .ccmc
        .cross_chain(dest_chain_id, &dest_proxy, method::UNLOCK, &payload)
    {
        return Err(ProxyError::external("Failed to call the cross-chain manager"));
    }

    Ok(Event::new("lock")
        .add_attribute("local_asset_id", to_hex(local_asset_id))
        .add_attribute("sender", to_hex(sender))
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("dest_asset_id", to_hex(&dest_asset_id))
        .add_attribute("dest_address", to_hex(dest_address))
        .add_attribute("amount", amount.to_string()))
}

/// Release custody for a lock made on `remote_chain_id`
pub fn unlock(
    deps: &mut ProxyDeps,
    payload: &[u8],
    remote_proxy: &[u8],
    remote_chain_id: u64,
    caller: &[u8],
) -> Result<Event, ProxyError> {
    if caller != deps.config.ccmc.as_slice() {
        return Err(ProxyError::Unauthorized);
    }

    match directory::proxy_hash(deps.storage, remote_chain_id)? {
        Some(stored) if stored.as_slice() == remote_proxy => {}
        _ => return Err(ProxyError::not_found("From proxy contract")),
    }

    let payload = TransferPayload::decode(payload)?;
    if payload.asset_id.len() != ADDRESS_LENGTH {
        return Err(ProxyError::validation(format!(
            "The asset id should be {}-byte long",
            ADDRESS_LENGTH
        )));
    }
    if payload.address.len() != ADDRESS_LENGTH {
        return Err(ProxyError::validation(format!(
            "The recipient address should be {}-byte long",
            ADDRESS_LENGTH
        )));
    }

    if !deps.token.transfer(
        &payload.asset_id,
        &deps.config.this_contract,
        &payload.address,
        payload.amount,
    ) {
        return Err(ProxyError::external(
            "Failed to transfer the asset to the recipient",
        ));
    }

    Ok(Event::new("unlock")
        .add_attribute("asset_id", to_hex(&payload.asset_id))
        .add_attribute("recipient", to_hex(&payload.address))
        .add_attribute("amount", payload.amount.to_string())
        .add_attribute("remote_chain_id", remote_chain_id.to_string()))
}
