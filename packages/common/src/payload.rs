//! Cross-chain payloads relayed opaquely by the cross-chain manager
//!
//! # RegisterAsset (sent with target method `registerAsset`)
//! ```text
//! varbytes(local_asset_id) ++ varbytes(remote_asset_id)
//! ```
//!
//! # Transfer (sent with target method `unlock`)
//! ```text
//! varbytes(asset_id) ++ varbytes(address) ++ uint256(amount)
//! ```
//!
//! The wire format itself is variable-length; receivers enforce address
//! lengths after decoding. Bytes following a complete payload are ignored.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint256};

use crate::codec::{
    read_uint256, read_var_bytes, var_int_size, write_uint256, write_var_bytes, CodecResult,
    UINT256_WIDTH,
};

/// Arguments of a remote `registerAsset` call
#[cw_serde]
pub struct RegisterAssetPayload {
    /// Asset id on the sending chain
    pub local_asset_id: Binary,
    /// Asset id on the receiving chain
    pub remote_asset_id: Binary,
}

impl RegisterAssetPayload {
    pub fn new(local_asset_id: impl Into<Binary>, remote_asset_id: impl Into<Binary>) -> Self {
        Self {
            local_asset_id: local_asset_id.into(),
            remote_asset_id: remote_asset_id.into(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(
            var_int_size(self.local_asset_id.len() as u64)
                + self.local_asset_id.len()
                + var_int_size(self.remote_asset_id.len() as u64)
                + self.remote_asset_id.len(),
        );
        write_var_bytes(&mut buffer, &self.local_asset_id);
        write_var_bytes(&mut buffer, &self.remote_asset_id);
        buffer
    }

    pub fn decode(data: &[u8]) -> CodecResult<Self> {
        let (local_asset_id, offset) = read_var_bytes(data, 0)?;
        let (remote_asset_id, _) = read_var_bytes(data, offset)?;
        Ok(Self::new(local_asset_id.to_vec(), remote_asset_id.to_vec()))
    }
}

/// Arguments of a remote `unlock` call, produced by `lock`
#[cw_serde]
pub struct TransferPayload {
    /// Asset id on the receiving chain
    pub asset_id: Binary,
    /// Recipient on the receiving chain
    pub address: Binary,
    /// Amount to release
    pub amount: Uint256,
}

impl TransferPayload {
    pub fn new(asset_id: impl Into<Binary>, address: impl Into<Binary>, amount: Uint256) -> Self {
        Self {
            asset_id: asset_id.into(),
            address: address.into(),
            amount,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(
            var_int_size(self.asset_id.len() as u64)
                + self.asset_id.len()
                + var_int_size(self.address.len() as u64)
                + self.address.len()
                + UINT256_WIDTH,
        );
        write_var_bytes(&mut buffer, &self.asset_id);
        write_var_bytes(&mut buffer, &self.address);
        write_uint256(&mut buffer, self.amount);
        buffer
    }

    pub fn decode(data: &[u8]) -> CodecResult<Self> {
        let (asset_id, offset) = read_var_bytes(data, 0)?;
        let (address, offset) = read_var_bytes(data, offset)?;
        let (amount, _) = read_uint256(data, offset)?;
        Ok(Self::new(asset_id.to_vec(), address.to_vec(), amount))
    }
}
