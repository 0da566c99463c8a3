//! Lock Proxy Contract - Entry Points
//!
//! The entry points bind the state machine to the host: identities are the
//! canonical bytes of bech32 addresses, tokens are CW20 contracts, and the
//! cross-chain manager is a contract configured at instantiation.
//! - `execute/` - Operation handlers
//! - `proxy` - Dispatch and outcome reporting
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ProxyError;
use crate::host::{canonical_bytes, CcmcRelay, Cw20Token};
use crate::msg::{method, ExecuteMsg, InstantiateMsg, MigrateMsg, ProxyRequest, QueryMsg};
use crate::proxy::{LockProxy, Outcome, ProxyConfig};
use crate::query::{
    query_asset_balance, query_asset_hash, query_config, query_delegated_supply,
    query_proxy_hash, query_registry_key,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ProxyError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        ccmc: deps.api.addr_validate(&msg.ccmc)?,
        operator: deps.api.addr_validate(&msg.operator)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("ccmc", config.ccmc)
        .add_attribute("operator", config.operator))
}

// ============================================================================
// Execute
// ============================================================================

/// Every operation reports its outcome as response data (`true`/`false`).
/// Operation failures are not errors here: they come back as `false` with a
/// `lock_proxy_failure` event, and only host faults abort the transaction.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ProxyError> {
    let config = CONFIG.load(deps.storage)?;
    let proxy_config = ProxyConfig {
        ccmc: canonical_bytes(deps.api, &config.ccmc)?,
        operator: canonical_bytes(deps.api, &config.operator)?,
        this_contract: canonical_bytes(deps.api, &env.contract.address)?,
    };
    let caller = canonical_bytes(deps.api, &info.sender)?;

    let DepsMut {
        storage,
        api,
        querier,
    } = deps;
    let mut token = Cw20Token::new(querier, api, proxy_config.this_contract.clone());
    let mut relay = CcmcRelay::new(config.ccmc);
    let mut proxy = LockProxy::new(storage, &proxy_config, &mut token, &mut relay);

    let (method_name, outcome) = match msg {
        // Asset registration
        ExecuteMsg::DelegateAsset {
            remote_chain_id,
            remote_proxy,
            remote_asset_id,
            declared_supply,
        } => {
            // The calling token contract delegates itself
            let request = ProxyRequest::DelegateAsset {
                remote_chain_id,
                remote_proxy,
                remote_asset_id,
                declared_supply,
                local_asset_id: caller,
            };
            (request.method().to_string(), proxy.dispatch(request))
        }
        ExecuteMsg::RegisterAsset {
            payload,
            remote_proxy,
            remote_chain_id,
        } => {
            let request = ProxyRequest::RegisterAsset {
                payload,
                remote_proxy,
                remote_chain_id,
                caller,
            };
            (request.method().to_string(), proxy.dispatch(request))
        }

        // Transfers
        ExecuteMsg::Lock {
            local_asset_id,
            sender,
            dest_chain_id,
            dest_address,
            amount,
        } => {
            let request = ProxyRequest::Lock {
                local_asset_id,
                sender,
                dest_chain_id,
                dest_address,
                amount,
            };
            (
                request.method().to_string(),
                dispatch_as(&mut proxy, request, &caller),
            )
        }
        ExecuteMsg::Unlock {
            payload,
            remote_proxy,
            remote_chain_id,
        } => {
            let request = ProxyRequest::Unlock {
                payload,
                remote_proxy,
                remote_chain_id,
                caller,
            };
            (request.method().to_string(), proxy.dispatch(request))
        }

        // Directory management
        ExecuteMsg::BindProxyHash {
            chain_id,
            proxy_hash,
        } => (
            method::BIND_PROXY_HASH.to_string(),
            Outcome::Success(proxy.bind_proxy_hash(&caller, chain_id, &proxy_hash)),
        ),
        ExecuteMsg::BindAssetHash {
            asset_id,
            chain_id,
            remote_asset_id,
        } => (
            method::BIND_ASSET_HASH.to_string(),
            Outcome::Success(proxy.bind_asset_hash(
                &caller,
                &asset_id,
                chain_id,
                &remote_asset_id,
            )),
        ),

        // Untyped entry
        ExecuteMsg::Invoke(invocation) => {
            let method_name = invocation.method.clone();
            let outcome = match ProxyRequest::from_invocation(invocation, caller.clone()) {
                Ok(request) => dispatch_as(&mut proxy, request, &caller),
                Err(err) => proxy.reject(&method_name, err),
            };
            (method_name, outcome)
        }
    };

    let events = proxy.into_events();
    let mut messages = token.into_messages();
    messages.extend(relay.into_messages());

    Ok(Response::new()
        .add_messages(messages)
        .add_events(events)
        .add_attribute("method", method_name)
        .add_attribute("success", outcome.is_success().to_string())
        .set_data(outcome.to_binary()?))
}

/// Dispatch on behalf of `caller`
///
/// CW20 deposits draw on an allowance, so `lock` only moves funds of the
/// account that signs for it.
fn dispatch_as(proxy: &mut LockProxy, request: ProxyRequest, caller: &Binary) -> Outcome {
    if let ProxyRequest::Lock { sender, .. } = &request {
        if sender != caller {
            return proxy.reject(method::LOCK, ProxyError::UnauthorizedSender);
        }
    }
    proxy.dispatch(request)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GetAssetBalance { asset_id } => {
            to_json_binary(&query_asset_balance(deps, env, asset_id)?)
        }
        QueryMsg::ProxyHash { chain_id } => to_json_binary(&query_proxy_hash(deps, chain_id)?),
        QueryMsg::AssetHash { asset_id, chain_id } => {
            to_json_binary(&query_asset_hash(deps, asset_id, chain_id)?)
        }
        QueryMsg::RegistryKey {
            local_asset_id,
            remote_chain_id,
            remote_proxy,
            remote_asset_id,
        } => to_json_binary(&query_registry_key(
            deps,
            local_asset_id,
            remote_chain_id,
            remote_proxy,
            remote_asset_id,
        )?),
        QueryMsg::DelegatedSupply { key } => to_json_binary(&query_delegated_supply(deps, key)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ProxyError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
