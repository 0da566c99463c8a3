//! Asset registration handlers (delegateAsset and registerAsset).
//!
//! A pairing is first delegated on the chain that holds the supply, then
//! relayed through the cross-chain manager and registered on the other side.

use common::RegisterAssetPayload;
use cosmwasm_std::{Event, Uint256};

use crate::error::ProxyError;
use crate::hash::{derive_registry_key, to_hex};
use crate::msg::method;
use crate::proxy::ProxyDeps;
use crate::registry;

use super::custody_balance;

/// Hand `local_asset_id` over to this proxy and announce the pairing to the remote chain
///
/// The registry mark and the declared supply are committed before the
/// cross-chain dispatch and stay in place if the dispatch fails.
pub fn delegate_asset(
    deps: &mut ProxyDeps,
    remote_chain_id: u64,
    remote_proxy: &[u8],
    remote_asset_id: &[u8],
    declared_supply: Uint256,
    local_asset_id: &[u8],
) -> Result<Event, ProxyError> {
    if remote_chain_id == 0 {
        return Err(ProxyError::validation(
            "The parameter remote_chain_id must not be zero",
        ));
    }
    if remote_proxy.is_empty() {
        return Err(ProxyError::validation(
            "The parameter remote_proxy must not be empty",
        ));
    }
    if remote_asset_id.is_empty() {
        return Err(ProxyError::validation(
            "The parameter remote_asset_id must not be empty",
        ));
    }

    let key = derive_registry_key(local_asset_id, remote_chain_id, remote_proxy, remote_asset_id);
    if registry::is_registered(deps.storage, &key) {
        return Err(ProxyError::AlreadyRegistered);
    }
    if registry::delegated_supply(deps.storage, &key)?.is_some() {
        return Err(ProxyError::validation(
            "The balance for this asset must be zero",
        ));
    }

    let actual = custody_balance(deps, local_asset_id)?;
    if actual != declared_supply {
        return Err(ProxyError::BalanceMismatch {
            declared: declared_supply,
            actual,
        });
    }

    registry::register(deps.storage, &key)?;
    registry::record_delegated_supply(deps.storage, &key, declared_supply)?;

    let payload = RegisterAssetPayload::new(local_asset_id, remote_asset_id).encode();
    if !deps.ccmc.cross_chain(
        remote_chain_id,
        remote_proxy,
        method::REGISTER_ASSET,
        &payload,
    ) {
        return Err(ProxyError::external("Failed to call the cross-chain manager"));
    }

    Ok(Event::new("delegate_asset")
        .add_attribute("local_asset_id", to_hex(local_asset_id))
        .add_attribute("remote_chain_id", remote_chain_id.to_string())
        .add_attribute("remote_proxy", to_hex(remote_proxy))
        .add_attribute("remote_asset_id", to_hex(remote_asset_id))
        .add_attribute("declared_supply", declared_supply.to_string())
        .add_attribute("registry_key", to_hex(&key)))
}

/// Record a pairing announced by the proxy on `remote_chain_id`
///
/// The key is derived remote-to-local: the payload's local asset is the
/// remote chain's asset from this side.
pub fn register_asset(
    deps: &mut ProxyDeps,
    payload: &[u8],
    remote_proxy: &[u8],
    remote_chain_id: u64,
    caller: &[u8],
) -> Result<Event, ProxyError> {
    if caller != deps.config.ccmc.as_slice() {
        return Err(ProxyError::Unauthorized);
    }

    let payload = RegisterAssetPayload::decode(payload)?;
    let key = derive_registry_key(
        &payload.remote_asset_id,
        remote_chain_id,
        remote_proxy,
        &payload.local_asset_id,
    );
    if registry::is_registered(deps.storage, &key) {
        return Err(ProxyError::AlreadyRegistered);
    }

    registry::register(deps.storage, &key)?;

    Ok(Event::new("register_asset")
        .add_attribute("local_asset_id", to_hex(&payload.remote_asset_id))
        .add_attribute("remote_chain_id", remote_chain_id.to_string())
        .add_attribute("remote_proxy", to_hex(remote_proxy))
        .add_attribute("remote_asset_id", to_hex(&payload.local_asset_id))
        .add_attribute("registry_key", to_hex(&key)))
}
