//! redb-based durable block store backend.
//!
//! This module provides [`RedbBlockStore`], a persistent [`KeyValueStore`]
//! backed by the redb embedded database.

use std::path::Path;

use hematite_primitives::BlockHash;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::{BlockStoreResult, KeyValueStore};

/// Table definition for block and header envelopes.
/// Key: 32-byte block hash
/// Value: envelope bytes
const BLOCKS_TABLE: TableDefinition<&[u8; 32], &[u8]> = TableDefinition::new("blocks");

/// redb-based envelope store.
///
/// Uses redb for ACID-compliant persistent storage. Thread-safe for
/// concurrent reads and writes.
pub struct RedbBlockStore {
    db: Database,
}

impl RedbBlockStore {
    /// Open or create a block store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> BlockStoreResult<Self> {
        let db = Database::create(path)?;

        // Ensure the blocks table exists
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(BLOCKS_TABLE)?;
        }
        write_txn.commit()?;

        debug!("Opened redb block store");
        Ok(Self { db })
    }

    /// Open an existing store (fails if it doesn't exist).
    pub fn open_existing<P: AsRef<Path>>(path: P) -> BlockStoreResult<Self> {
        let db = Database::open(path)?;
        Ok(Self { db })
    }
}

impl KeyValueStore for RedbBlockStore {
    fn get(&self, hash: &BlockHash) -> BlockStoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(BLOCKS_TABLE)?;
        match table.get(hash.as_bytes())? {
            Some(value) => Ok(Some(value.value().to_vec())),
            None => Ok(None),
        }
    }

    fn put(&self, hash: &BlockHash, value: &[u8]) -> BlockStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(BLOCKS_TABLE)?;
            // Unconditional insert: a header-only record must be replaceable
            // by the full block under the same key.
            table.insert(hash.as_bytes(), value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
