//! Hash computation for registry keys
//!
//! A registry entry links four values: a local asset, a remote chain, the
//! proxy on that chain, and the remote asset. They are collapsed into one
//! fixed-width storage key.
//!
//! # Preimage Layout
//! ```text
//! varbytes(local_asset) ++ u64_le(remote_chain_id) ++ varbytes(remote_proxy) ++ varbytes(remote_asset)
//! ```
//! Every byte string carries its length prefix so that two different tuples
//! can never produce the same preimage.

use common::codec::write_var_bytes;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the registry key for a (local asset, remote chain, remote proxy, remote asset) tuple
///
/// The remote side of a registration derives the key with the tuple in
/// remote-to-local order, so both chains record the same pairing under their
/// own perspective.
pub fn derive_registry_key(
    local_asset: &[u8],
    remote_chain_id: u64,
    remote_proxy: &[u8],
    remote_asset: &[u8],
) -> [u8; 32] {
    let mut data =
        Vec::with_capacity(local_asset.len() + remote_proxy.len() + remote_asset.len() + 8 + 27);
    write_var_bytes(&mut data, local_asset);
    data.extend_from_slice(&remote_chain_id.to_le_bytes());
    write_var_bytes(&mut data, remote_proxy);
    write_var_bytes(&mut data, remote_asset);
    keccak256(&data)
}

/// Render bytes as a 0x-prefixed hex string (for attributes/logging)
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
