use super::StorageReader;
use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, B256};
use std::collections::BTreeMap;

/// A StorageReader that reads from a genesis document's alloc.
///
/// Lets the readers check the pre-populated staking storage without a running node.
pub struct GenesisStorageReader<'a> {
    alloc: &'a BTreeMap<Address, GenesisAccount>,
}

impl<'a> GenesisStorageReader<'a> {
    /// Create a reader over a genesis alloc.
    pub fn from_genesis(genesis: &'a Genesis) -> Self {
        Self { alloc: &genesis.alloc }
    }
}

impl StorageReader for GenesisStorageReader<'_> {
    fn read_storage(&self, address: Address, key: B256) -> Option<B256> {
        let account = self.alloc.get(&address)?;
        let storage = account.storage.as_ref()?;
        storage.get(&key).copied()
    }

    fn has_storage(&self, address: Address) -> bool {
        self.alloc.get(&address).is_some_and(|account| account.storage.is_some())
    }
}

/// A StorageReader over one account's storage map, deployed at `address`.
pub struct AccountStorageReader<'a> {
    address: Address,
    storage: &'a BTreeMap<B256, B256>,
}

impl<'a> AccountStorageReader<'a> {
    /// Create a reader for `storage` as seen at `address`.
    pub fn new(address: Address, storage: &'a BTreeMap<B256, B256>) -> Self {
        Self { address, storage }
    }
}

impl StorageReader for AccountStorageReader<'_> {
    fn read_storage(&self, address: Address, key: B256) -> Option<B256> {
        if address != self.address {
            return None;
        }
        self.storage.get(&key).copied()
    }

    fn has_storage(&self, address: Address) -> bool {
        address == self.address
    }
}
