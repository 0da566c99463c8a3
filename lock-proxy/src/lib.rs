//! Lock Proxy Contract - Cross-Chain Asset Custody
//!
//! This contract holds custody of CW20 tokens and coordinates, through a
//! cross-chain manager contract (CCMC), the release of the paired asset on a
//! remote chain.
//!
//! # Registration Flow
//! 1. A token contract calls `DelegateAsset` once this proxy holds its supply
//! 2. The proxy records the pairing and sends `registerAsset` through the CCMC
//! 3. The remote proxy's CCMC calls `RegisterAsset` there with the same pairing
//!
//! # Transfer Flow
//! 1. A user calls `Lock`; the proxy draws the tokens into custody
//! 2. The proxy sends `unlock` through the CCMC to the destination proxy
//! 3. The destination CCMC calls `Unlock`, which releases custody to the recipient
//!
//! # Wire Format
//! Payloads use the varint/varbytes/uint256 codec in the `common` package so
//! proxies on different chains agree byte-for-byte.
//!
//! # Outcomes
//! Operations report `true`/`false` as response data; failure reasons are
//! carried by `lock_proxy_failure` events.

pub mod contract;
pub mod directory;
pub mod error;
mod execute;
pub mod hash;
pub mod host;
pub mod msg;
pub mod proxy;
mod query;
pub mod registry;
pub mod state;

pub use crate::error::ProxyError;
pub use crate::hash::{derive_registry_key, keccak256};
pub use crate::msg::{Invocation, InvocationArg, ProxyRequest};
pub use crate::proxy::{CrossChainManager, LockProxy, Outcome, ProxyConfig, TokenCapability};
