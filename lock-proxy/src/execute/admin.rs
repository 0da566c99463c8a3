//! Directory binding handlers (operator only).
//!
//! This module handles:
//! - Binding the remote proxy contract for a chain
//! - Binding the remote asset paired with a local asset on a chain

use cosmwasm_std::Event;

use crate::directory;
use crate::error::ProxyError;
use crate::hash::to_hex;
use crate::proxy::ProxyDeps;
use crate::state::ADDRESS_LENGTH;

use super::custody_balance;

fn ensure_operator(deps: &ProxyDeps, caller: &[u8]) -> Result<(), ProxyError> {
    if caller != deps.config.operator.as_slice() {
        return Err(ProxyError::UnauthorizedOperator);
    }
    Ok(())
}

// ============================================================================
// Proxy Directory
// ============================================================================

/// Record the proxy contract that speaks for `chain_id`
pub fn bind_proxy_hash(
    deps: &mut ProxyDeps,
    caller: &[u8],
    chain_id: u64,
    proxy_hash: &[u8],
) -> Result<Event, ProxyError> {
    ensure_operator(deps, caller)?;

    if chain_id == 0 {
        return Err(ProxyError::validation(
            "The parameter chain_id must not be zero",
        ));
    }
    if proxy_hash.is_empty() {
        return Err(ProxyError::validation(
            "The parameter proxy_hash must not be empty",
        ));
    }

    directory::set_proxy_hash(deps.storage, chain_id, proxy_hash)?;

    Ok(Event::new("bind_proxy_hash")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("proxy_hash", to_hex(proxy_hash)))
}

// ============================================================================
// Asset Directory
// ============================================================================

/// Record the asset on `chain_id` that `asset_id` is paired with
///
/// The event carries the custody balance at bind time.
pub fn bind_asset_hash(
    deps: &mut ProxyDeps,
    caller: &[u8],
    asset_id: &[u8],
    chain_id: u64,
    remote_asset_id: &[u8],
) -> Result<Event, ProxyError> {
    ensure_operator(deps, caller)?;

    if asset_id.len() != ADDRESS_LENGTH {
        return Err(ProxyError::validation(format!(
            "The parameter asset_id should be {}-byte long",
            ADDRESS_LENGTH
        )));
    }
    if chain_id == 0 {
        return Err(ProxyError::validation(
            "The parameter chain_id must not be zero",
        ));
    }
    if remote_asset_id.is_empty() {
        return Err(ProxyError::validation(
            "The parameter remote_asset_id must not be empty",
        ));
    }

    let initial_amount = custody_balance(deps, asset_id)?;
    directory::set_asset_hash(deps.storage, asset_id, chain_id, remote_asset_id)?;

    Ok(Event::new("bind_asset_hash")
        .add_attribute("asset_id", to_hex(asset_id))
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote_asset_id", to_hex(remote_asset_id))
        .add_attribute("initial_amount", initial_amount.to_string()))
}
