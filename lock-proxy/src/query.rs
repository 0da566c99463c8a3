//! Query handlers for the lock proxy contract.
//!
//! Read-only views of the configuration, directory, registry and custody.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult};

use crate::directory;
use crate::hash::derive_registry_key;
use crate::host::{canonical_bytes, Cw20Token};
use crate::msg::{
    AssetBalanceResponse, AssetHashResponse, ConfigResponse, DelegatedSupplyResponse,
    ProxyHashResponse, RegistryKeyResponse,
};
use crate::proxy::TokenCapability;
use crate::registry;
use crate::state::CONFIG;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        ccmc: config.ccmc,
        operator: config.operator,
    })
}

/// Query this proxy's custody balance of a CW20 asset.
pub fn query_asset_balance(
    deps: Deps,
    env: Env,
    asset_id: Binary,
) -> StdResult<AssetBalanceResponse> {
    let this_contract = canonical_bytes(deps.api, &env.contract.address)?;
    let token = Cw20Token::new(deps.querier, deps.api, this_contract.clone());
    let balance = token.balance_of(&asset_id, &this_contract)?;
    Ok(AssetBalanceResponse { asset_id, balance })
}

// ============================================================================
// Directory Queries
// ============================================================================

pub fn query_proxy_hash(deps: Deps, chain_id: u64) -> StdResult<ProxyHashResponse> {
    Ok(ProxyHashResponse {
        chain_id,
        proxy_hash: directory::proxy_hash(deps.storage, chain_id)?,
    })
}

pub fn query_asset_hash(
    deps: Deps,
    asset_id: Binary,
    chain_id: u64,
) -> StdResult<AssetHashResponse> {
    let remote_asset_id = directory::asset_hash(deps.storage, &asset_id, chain_id)?;
    Ok(AssetHashResponse {
        asset_id,
        chain_id,
        remote_asset_id,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

/// Compute the registry key for a tuple and report whether it is registered.
pub fn query_registry_key(
    deps: Deps,
    local_asset_id: Binary,
    remote_chain_id: u64,
    remote_proxy: Binary,
    remote_asset_id: Binary,
) -> StdResult<RegistryKeyResponse> {
    let key = derive_registry_key(
        &local_asset_id,
        remote_chain_id,
        &remote_proxy,
        &remote_asset_id,
    );
    Ok(RegistryKeyResponse {
        key: Binary::from(key.as_slice()),
        registered: registry::is_registered(deps.storage, &key),
    })
}

pub fn query_delegated_supply(deps: Deps, key: Binary) -> StdResult<DelegatedSupplyResponse> {
    let registry_key: [u8; 32] = key
        .as_slice()
        .try_into()
        .map_err(|_| StdError::generic_err("Registry key must be 32 bytes"))?;
    Ok(DelegatedSupplyResponse {
        key,
        supply: registry::delegated_supply(deps.storage, &registry_key)?,
    })
}
