//! State definitions for the lock proxy contract
//!
//! Three persistent areas:
//! - the asset registry (linked local/remote asset tuples, never removed)
//! - the directory (remote proxy per chain, remote asset per local asset and chain)
//! - the contract configuration (trusted identities)

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint256};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Cross-chain manager contract, the only caller allowed into
    /// `registerAsset` and `unlock`
    pub ccmc: Addr,
    /// Operator allowed to populate the directory
    pub operator: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:lock-proxy";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker stored for every registered tuple
pub const REGISTERED_MARKER: u8 = 0x01;

/// Length of local asset ids and account addresses
pub const ADDRESS_LENGTH: usize = 20;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Asset registry
/// Key: 32-byte registry key (see `hash::derive_registry_key`), Value: marker byte
pub const REGISTRY: Map<&[u8], u8> = Map::new("registry");

/// Supply declared when an asset was delegated
/// Key: 32-byte registry key, Value: declared supply
pub const DELEGATED_SUPPLY: Map<&[u8], Uint256> = Map::new("balances");

/// Remote proxy contract per chain
/// Key: remote chain id, Value: remote proxy address
pub const PROXY_HASH: Map<u64, Binary> = Map::new("proxy_hash");

/// Remote asset per local asset and chain
/// Key: (local asset id, remote chain id), Value: remote asset id
pub const ASSET_HASH: Map<(&[u8], u64), Binary> = Map::new("asset_hash");
