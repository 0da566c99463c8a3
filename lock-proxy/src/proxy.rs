//! Lock/unlock state machine
//!
//! `LockProxy` owns nothing: it borrows storage, the immutable configuration,
//! and the two external capabilities for the duration of one invocation.
//! Every operation validates first and returns a boolean outcome; diagnostics
//! travel only through the notification events it records.
//!
//! # Atomicity
//! Writes are not rolled back when a later step fails. `delegateAsset`
//! commits its registry mark and `lock` takes custody before the cross-chain
//! dispatch; a failed dispatch reports `false` with that state left in place.
//! Only a host-level fault discards the invocation as a whole.

use cosmwasm_std::{to_json_binary, Binary, Event, StdResult, Storage, Uint256};

use crate::error::ProxyError;
use crate::execute;
use crate::msg::{Invocation, ProxyRequest};

/// Event type recorded for every failed operation
pub const FAILURE_EVENT: &str = "lock_proxy_failure";

// ============================================================================
// Capabilities
// ============================================================================

/// Fungible token contracts, addressed by asset id
pub trait TokenCapability {
    fn balance_of(&self, asset_id: &[u8], holder: &[u8]) -> StdResult<Uint256>;

    fn transfer(&mut self, asset_id: &[u8], from: &[u8], to: &[u8], amount: Uint256) -> bool;
}

/// Cross-chain management contract
///
/// `false` means the remote side never receives the message; nothing retries.
pub trait CrossChainManager {
    fn cross_chain(
        &mut self,
        to_chain_id: u64,
        to_proxy: &[u8],
        method: &str,
        args: &[u8],
    ) -> bool;
}

// ============================================================================
// Configuration
// ============================================================================

/// Trusted identities, as raw address bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Only caller allowed into `registerAsset` and `unlock`
    pub ccmc: Binary,
    /// Only caller allowed to bind directory entries
    pub operator: Binary,
    /// This proxy's own address (custody holder)
    pub this_contract: Binary,
}

/// Everything an operation handler may touch
pub struct ProxyDeps<'a> {
    pub storage: &'a mut dyn Storage,
    pub config: &'a ProxyConfig,
    pub token: &'a mut dyn TokenCapability,
    pub ccmc: &'a mut dyn CrossChainManager,
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success(bool),
    Balance(Uint256),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Success(false))
    }

    pub fn to_binary(&self) -> StdResult<Binary> {
        match self {
            Outcome::Success(success) => to_json_binary(success),
            Outcome::Balance(balance) => to_json_binary(balance),
        }
    }
}

// ============================================================================
// State Machine
// ============================================================================

pub struct LockProxy<'a> {
    deps: ProxyDeps<'a>,
    events: Vec<Event>,
}

impl<'a> LockProxy<'a> {
    pub fn new(
        storage: &'a mut dyn Storage,
        config: &'a ProxyConfig,
        token: &'a mut dyn TokenCapability,
        ccmc: &'a mut dyn CrossChainManager,
    ) -> Self {
        Self {
            deps: ProxyDeps {
                storage,
                config,
                token,
                ccmc,
            },
            events: vec![],
        }
    }

    /// Notifications recorded during this invocation
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Decode and dispatch an untyped invocation
    ///
    /// Unknown methods and malformed arguments produce `Success(false)`.
    pub fn invoke(&mut self, invocation: Invocation, caller: Binary) -> Outcome {
        let method = invocation.method.clone();
        match ProxyRequest::from_invocation(invocation, caller) {
            Ok(request) => self.dispatch(request),
            Err(err) => self.reject(&method, err),
        }
    }

    pub fn dispatch(&mut self, request: ProxyRequest) -> Outcome {
        match request {
            ProxyRequest::GetAssetBalance { asset_id } => {
                match self.get_asset_balance(&asset_id) {
                    Ok(balance) => Outcome::Balance(balance),
                    Err(err) => self.reject(crate::msg::method::GET_ASSET_BALANCE, err),
                }
            }
            ProxyRequest::DelegateAsset {
                remote_chain_id,
                remote_proxy,
                remote_asset_id,
                declared_supply,
                local_asset_id,
            } => Outcome::Success(self.delegate_asset(
                remote_chain_id,
                &remote_proxy,
                &remote_asset_id,
                declared_supply,
                &local_asset_id,
            )),
            ProxyRequest::RegisterAsset {
                payload,
                remote_proxy,
                remote_chain_id,
                caller,
            } => Outcome::Success(self.register_asset(
                &payload,
                &remote_proxy,
                remote_chain_id,
                &caller,
            )),
            ProxyRequest::Lock {
                local_asset_id,
                sender,
                dest_chain_id,
                dest_address,
                amount,
            } => Outcome::Success(self.lock(
                &local_asset_id,
                &sender,
                dest_chain_id,
                &dest_address,
                amount,
            )),
            ProxyRequest::Unlock {
                payload,
                remote_proxy,
                remote_chain_id,
                caller,
            } => Outcome::Success(self.unlock(&payload, &remote_proxy, remote_chain_id, &caller)),
        }
    }

    /// Record a failure notification for `method` and report `false`
    pub fn reject(&mut self, method: &str, err: ProxyError) -> Outcome {
        self.events.push(
            Event::new(FAILURE_EVENT)
                .add_attribute("method", method)
                .add_attribute("reason", err.to_string()),
        );
        Outcome::Success(false)
    }

    fn settle(&mut self, method: &str, result: Result<Event, ProxyError>) -> bool {
        match result {
            Ok(event) => {
                self.events.push(event);
                true
            }
            Err(err) => {
                self.reject(method, err);
                false
            }
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub fn get_asset_balance(&self, asset_id: &[u8]) -> Result<Uint256, ProxyError> {
        execute::get_asset_balance(&self.deps, asset_id)
    }

    pub fn delegate_asset(
        &mut self,
        remote_chain_id: u64,
        remote_proxy: &[u8],
        remote_asset_id: &[u8],
        declared_supply: Uint256,
        local_asset_id: &[u8],
    ) -> bool {
        let result = execute::delegate_asset(
            &mut self.deps,
            remote_chain_id,
            remote_proxy,
            remote_asset_id,
            declared_supply,
            local_asset_id,
        );
        self.settle(crate::msg::method::DELEGATE_ASSET, result)
    }

    pub fn register_asset(
        &mut self,
        payload: &[u8],
        remote_proxy: &[u8],
        remote_chain_id: u64,
        caller: &[u8],
    ) -> bool {
        let result =
            execute::register_asset(&mut self.deps, payload, remote_proxy, remote_chain_id, caller);
        self.settle(crate::msg::method::REGISTER_ASSET, result)
    }

    pub fn lock(
        &mut self,
        local_asset_id: &[u8],
        sender: &[u8],
        dest_chain_id: u64,
        dest_address: &[u8],
        amount: Uint256,
    ) -> bool {
        let result = execute::lock(
            &mut self.deps,
            local_asset_id,
            sender,
            dest_chain_id,
            dest_address,
            amount,
        );
        self.settle(crate::msg::method::LOCK, result)
    }

    pub fn unlock(
        &mut self,
        payload: &[u8],
        remote_proxy: &[u8],
        remote_chain_id: u64,
        caller: &[u8],
    ) -> bool {
        let result =
            execute::unlock(&mut self.deps, payload, remote_proxy, remote_chain_id, caller);
        self.settle(crate::msg::method::UNLOCK, result)
    }

    pub fn bind_proxy_hash(&mut self, caller: &[u8], chain_id: u64, proxy_hash: &[u8]) -> bool {
        let result = execute::bind_proxy_hash(&mut self.deps, caller, chain_id, proxy_hash);
        self.settle(crate::msg::method::BIND_PROXY_HASH, result)
    }

    pub fn bind_asset_hash(
        &mut self,
        caller: &[u8],
        asset_id: &[u8],
        chain_id: u64,
        remote_asset_id: &[u8],
    ) -> bool {
        let result =
            execute::bind_asset_hash(&mut self.deps, caller, asset_id, chain_id, remote_asset_id);
        self.settle(crate::msg::method::BIND_ASSET_HASH, result)
    }
}
