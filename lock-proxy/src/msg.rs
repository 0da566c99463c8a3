//! Message types for the lock proxy contract
//!
//! Besides the usual instantiate/execute/query messages this module holds the
//! typed request union the state machine dispatches on, and its decoder from
//! the untyped `method + args` invocation form.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint256};
use common::CodecError;

use crate::error::ProxyError;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Cross-chain manager contract address
    pub ccmc: String,
    /// Operator address allowed to populate the directory
    pub operator: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Asset Registration
    // ========================================================================
    /// Delegate the calling token contract to this proxy and announce it to
    /// the proxy on `remote_chain_id`
    ///
    /// Authorization: the token contract itself (its address is the local asset id)
    DelegateAsset {
        /// Chain the asset is linked to (must not be 0)
        remote_chain_id: u64,
        /// Proxy contract on the remote chain
        remote_proxy: Binary,
        /// Asset id on the remote chain
        remote_asset_id: Binary,
        /// Supply this proxy must already hold
        declared_supply: Uint256,
    },

    /// Record a registration announced by a remote proxy
    ///
    /// Authorization: cross-chain manager only
    RegisterAsset {
        /// Encoded `RegisterAssetPayload`
        payload: Binary,
        /// Proxy contract that sent the payload
        remote_proxy: Binary,
        /// Chain the payload came from
        remote_chain_id: u64,
    },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Take custody of `amount` and request its release on `dest_chain_id`
    ///
    /// Authorization: the sender
    Lock {
        /// Local asset id (20 bytes)
        local_asset_id: Binary,
        /// Sender address (20 bytes)
        sender: Binary,
        /// Destination chain
        dest_chain_id: u64,
        /// Recipient on the destination chain
        dest_address: Binary,
        /// Amount to lock
        amount: Uint256,
    },

    /// Release custodied tokens requested by a remote `lock`
    ///
    /// Authorization: cross-chain manager only
    Unlock {
        /// Encoded `TransferPayload`
        payload: Binary,
        /// Proxy contract that sent the payload
        remote_proxy: Binary,
        /// Chain the payload came from
        remote_chain_id: u64,
    },

    // ========================================================================
    // Directory Management
    // ========================================================================
    /// Set the proxy contract for a remote chain
    ///
    /// Authorization: operator only
    BindProxyHash {
        chain_id: u64,
        proxy_hash: Binary,
    },

    /// Set the remote asset for a local asset on a remote chain
    ///
    /// Authorization: operator only
    BindAssetHash {
        /// Local asset id (20 bytes)
        asset_id: Binary,
        chain_id: u64,
        remote_asset_id: Binary,
    },

    // ========================================================================
    // Untyped Entry
    // ========================================================================
    /// Method-name dispatch with an untyped argument list
    ///
    /// Unknown methods and malformed arguments yield a `false` outcome.
    Invoke(Invocation),
}

/// Messages this proxy sends to the cross-chain manager
#[cw_serde]
pub enum CcmcExecuteMsg {
    CrossChain {
        to_chain_id: u64,
        to_contract: Binary,
        method: String,
        tx_data: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the trusted identities
    #[returns(ConfigResponse)]
    Config {},

    /// Returns this proxy's custody balance of an asset
    #[returns(AssetBalanceResponse)]
    GetAssetBalance { asset_id: Binary },

    /// Returns the proxy bound for a remote chain
    #[returns(ProxyHashResponse)]
    ProxyHash { chain_id: u64 },

    /// Returns the remote asset bound for a local asset on a remote chain
    #[returns(AssetHashResponse)]
    AssetHash { asset_id: Binary, chain_id: u64 },

    /// Compute a registry key and report whether it is registered
    #[returns(RegistryKeyResponse)]
    RegistryKey {
        local_asset_id: Binary,
        remote_chain_id: u64,
        remote_proxy: Binary,
        remote_asset_id: Binary,
    },

    /// Returns the supply declared when the asset behind `key` was delegated
    #[returns(DelegatedSupplyResponse)]
    DelegatedSupply { key: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub ccmc: Addr,
    pub operator: Addr,
}

#[cw_serde]
pub struct AssetBalanceResponse {
    pub asset_id: Binary,
    pub balance: Uint256,
}

#[cw_serde]
pub struct ProxyHashResponse {
    pub chain_id: u64,
    pub proxy_hash: Option<Binary>,
}

#[cw_serde]
pub struct AssetHashResponse {
    pub asset_id: Binary,
    pub chain_id: u64,
    pub remote_asset_id: Option<Binary>,
}

#[cw_serde]
pub struct RegistryKeyResponse {
    pub key: Binary,
    pub registered: bool,
}

#[cw_serde]
pub struct DelegatedSupplyResponse {
    pub key: Binary,
    pub supply: Option<Uint256>,
}

// ============================================================================
// Untyped Invocation
// ============================================================================

/// One untyped argument of an invocation
#[cw_serde]
pub enum InvocationArg {
    Bytes(Binary),
    /// Decimal integer; may carry a sign
    Integer(String),
}

/// Method name plus untyped argument list
#[cw_serde]
pub struct Invocation {
    pub method: String,
    pub args: Vec<InvocationArg>,
}

impl InvocationArg {
    fn into_bytes(self, name: &str) -> Result<Binary, ProxyError> {
        match self {
            InvocationArg::Bytes(bytes) => Ok(bytes),
            InvocationArg::Integer(_) => Err(ProxyError::validation(format!(
                "The parameter {} must be a byte string",
                name
            ))),
        }
    }

    fn non_negative_integer(self, name: &str) -> Result<String, ProxyError> {
        match self {
            InvocationArg::Integer(value) if value.trim_start().starts_with('-') => Err(
                ProxyError::validation(format!("The parameter {} must not be negative", name)),
            ),
            InvocationArg::Integer(value) => Ok(value),
            InvocationArg::Bytes(_) => Err(ProxyError::validation(format!(
                "The parameter {} must be an integer",
                name
            ))),
        }
    }

    fn into_chain_id(self, name: &str) -> Result<u64, ProxyError> {
        let value = self.non_negative_integer(name)?;
        common::codec::parse_var_int_value(&value).map_err(|err| integer_error(name, err))
    }

    fn into_amount(self, name: &str) -> Result<Uint256, ProxyError> {
        let value = self.non_negative_integer(name)?;
        common::codec::parse_uint256_value(&value).map_err(|err| integer_error(name, err))
    }
}

/// Malformed digits are a bad argument; only a well-formed value that is too
/// wide stays a codec error
fn integer_error(name: &str, err: CodecError) -> ProxyError {
    match err {
        CodecError::InvalidInteger { .. } => ProxyError::validation(format!(
            "The parameter {} must be a decimal integer",
            name
        )),
        other => other.into(),
    }
}

// ============================================================================
// Typed Requests
// ============================================================================

/// Method names reported in outcomes and failure notifications
///
/// The binding methods are typed-entry only; `ProxyRequest::from_invocation`
/// does not accept them.
pub mod method {
    pub const GET_ASSET_BALANCE: &str = "getAssetBalance";
    pub const DELEGATE_ASSET: &str = "delegateAsset";
    pub const REGISTER_ASSET: &str = "registerAsset";
    pub const LOCK: &str = "lock";
    pub const UNLOCK: &str = "unlock";
    pub const BIND_PROXY_HASH: &str = "bindProxyHash";
    pub const BIND_ASSET_HASH: &str = "bindAssetHash";
}

/// One request to the state machine, with every argument typed
///
/// Caller-derived values (`caller`, the delegating `local_asset_id`) come
/// from the host, never from the argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyRequest {
    GetAssetBalance {
        asset_id: Binary,
    },
    DelegateAsset {
        remote_chain_id: u64,
        remote_proxy: Binary,
        remote_asset_id: Binary,
        declared_supply: Uint256,
        local_asset_id: Binary,
    },
    RegisterAsset {
        payload: Binary,
        remote_proxy: Binary,
        remote_chain_id: u64,
        caller: Binary,
    },
    Lock {
        local_asset_id: Binary,
        sender: Binary,
        dest_chain_id: u64,
        dest_address: Binary,
        amount: Uint256,
    },
    Unlock {
        payload: Binary,
        remote_proxy: Binary,
        remote_chain_id: u64,
        caller: Binary,
    },
}

impl ProxyRequest {
    /// Method name this request is dispatched under
    pub fn method(&self) -> &'static str {
        match self {
            ProxyRequest::GetAssetBalance { .. } => method::GET_ASSET_BALANCE,
            ProxyRequest::DelegateAsset { .. } => method::DELEGATE_ASSET,
            ProxyRequest::RegisterAsset { .. } => method::REGISTER_ASSET,
            ProxyRequest::Lock { .. } => method::LOCK,
            ProxyRequest::Unlock { .. } => method::UNLOCK,
        }
    }

    /// Decode an untyped invocation
    ///
    /// `caller` is the identity of the invoking contract or account; it is
    /// the local asset id for `delegateAsset` and the identity checked by
    /// `registerAsset` and `unlock`.
    pub fn from_invocation(invocation: Invocation, caller: Binary) -> Result<Self, ProxyError> {
        let Invocation { method: name, args } = invocation;
        let expected = match name.as_str() {
            method::GET_ASSET_BALANCE => 1,
            method::DELEGATE_ASSET => 4,
            method::REGISTER_ASSET | method::UNLOCK => 3,
            method::LOCK => 5,
            other => {
                return Err(ProxyError::validation(format!("Unknown method: {}", other)));
            }
        };
        if args.len() != expected {
            return Err(ProxyError::validation(format!(
                "Method {} expects {} arguments, got {}",
                name,
                expected,
                args.len()
            )));
        }

        let mut args = args.into_iter();
        let mut next = || {
            args.next()
                .ok_or_else(|| ProxyError::validation(format!("Missing argument for {}", name)))
        };

        let request = match name.as_str() {
            method::GET_ASSET_BALANCE => ProxyRequest::GetAssetBalance {
                asset_id: next()?.into_bytes("assetId")?,
            },
            method::DELEGATE_ASSET => ProxyRequest::DelegateAsset {
                remote_chain_id: next()?.into_chain_id("remoteChainId")?,
                remote_proxy: next()?.into_bytes("remoteProxyAddress")?,
                remote_asset_id: next()?.into_bytes("remoteAssetId")?,
                declared_supply: next()?.into_amount("declaredSupply")?,
                local_asset_id: caller,
            },
            method::REGISTER_ASSET => ProxyRequest::RegisterAsset {
                payload: next()?.into_bytes("payload")?,
                remote_proxy: next()?.into_bytes("remoteProxyAddress")?,
                remote_chain_id: next()?.into_chain_id("remoteChainId")?,
                caller,
            },
            method::LOCK => ProxyRequest::Lock {
                local_asset_id: next()?.into_bytes("localAssetId")?,
                sender: next()?.into_bytes("senderAddress")?,
                dest_chain_id: next()?.into_chain_id("destChainId")?,
                dest_address: next()?.into_bytes("destAddress")?,
                amount: next()?.into_amount("amount")?,
            },
            _ => ProxyRequest::Unlock {
                payload: next()?.into_bytes("payload")?,
                remote_proxy: next()?.into_bytes("remoteProxyAddress")?,
                remote_chain_id: next()?.into_chain_id("remoteChainId")?,
                caller,
            },
        };
        Ok(request)
    }
}
