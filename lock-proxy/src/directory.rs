//! Proxy/asset directory
//!
//! Where each local asset lives on every remote chain, and which proxy
//! contract speaks for that chain. Only the operator writes here; an empty
//! stored value reads the same as an absent one.

use cosmwasm_std::{Binary, StdResult, Storage};

use crate::state::{ASSET_HASH, PROXY_HASH};

/// Remote proxy contract recorded for `chain_id`
pub fn proxy_hash(storage: &dyn Storage, chain_id: u64) -> StdResult<Option<Binary>> {
    Ok(PROXY_HASH
        .may_load(storage, chain_id)?
        .filter(|proxy| !proxy.is_empty()))
}

/// Remote asset recorded for `asset_id` on `chain_id`
pub fn asset_hash(
    storage: &dyn Storage,
    asset_id: &[u8],
    chain_id: u64,
) -> StdResult<Option<Binary>> {
    Ok(ASSET_HASH
        .may_load(storage, (asset_id, chain_id))?
        .filter(|asset| !asset.is_empty()))
}

pub fn set_proxy_hash(storage: &mut dyn Storage, chain_id: u64, proxy: &[u8]) -> StdResult<()> {
    PROXY_HASH.save(storage, chain_id, &Binary::from(proxy))
}

pub fn set_asset_hash(
    storage: &mut dyn Storage,
    asset_id: &[u8],
    chain_id: u64,
    remote_asset_id: &[u8],
) -> StdResult<()> {
    ASSET_HASH.save(storage, (asset_id, chain_id), &Binary::from(remote_asset_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_absent_entries_read_as_none() {
        let storage = MockStorage::new();
        assert_eq!(proxy_hash(&storage, 2).unwrap(), None);
        assert_eq!(asset_hash(&storage, &[1; 20], 2).unwrap(), None);
    }

    #[test]
    fn test_empty_entries_read_as_none() {
        let mut storage = MockStorage::new();
        set_proxy_hash(&mut storage, 2, &[]).unwrap();
        set_asset_hash(&mut storage, &[1; 20], 2, &[]).unwrap();

        assert_eq!(proxy_hash(&storage, 2).unwrap(), None);
        assert_eq!(asset_hash(&storage, &[1; 20], 2).unwrap(), None);
    }

    #[test]
    fn test_entries_are_keyed_by_chain() {
        let mut storage = MockStorage::new();
        set_proxy_hash(&mut storage, 2, &[0xB2; 20]).unwrap();
        set_asset_hash(&mut storage, &[1; 20], 2, &[0xC3; 20]).unwrap();

        assert_eq!(
            proxy_hash(&storage, 2).unwrap(),
            Some(Binary::from([0xB2; 20].as_slice()))
        );
        assert_eq!(proxy_hash(&storage, 3).unwrap(), None);
        assert_eq!(
            asset_hash(&storage, &[1; 20], 2).unwrap(),
            Some(Binary::from([0xC3; 20].as_slice()))
        );
        assert_eq!(asset_hash(&storage, &[1; 20], 3).unwrap(), None);
        assert_eq!(asset_hash(&storage, &[2; 20], 2).unwrap(), None);
    }

    #[test]
    fn test_rebinding_overwrites() {
        let mut storage = MockStorage::new();
        set_proxy_hash(&mut storage, 2, &[0xB2; 20]).unwrap();
        set_proxy_hash(&mut storage, 2, &[0xB3; 20]).unwrap();

        assert_eq!(
            proxy_hash(&storage, 2).unwrap(),
            Some(Binary::from([0xB3; 20].as_slice()))
        );
    }
}
