//! Durable key-value backend trait.
//!
//! The [`KeyValueStore`] trait abstracts over the persistent store holding
//! encoded block and header envelopes, allowing backends like redb or
//! in-memory maps for testing.

use crate::BlockStoreResult;
use hematite_primitives::BlockHash;

/// Durable storage backend for encoded envelopes.
///
/// Calls are blocking; implementations must be safe for concurrent readers
/// and writers of individual keys. The coordinator never deletes, so no
/// removal operation is required here.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw envelope bytes stored under `hash`.
    ///
    /// Returns `None` if nothing is stored.
    fn get(&self, hash: &BlockHash) -> BlockStoreResult<Option<Vec<u8>>>;

    /// Store raw envelope bytes under `hash`.
    ///
    /// An existing value under the same key is overwritten; this is how a
    /// header-only record gets upgraded to a full block.
    fn put(&self, hash: &BlockHash, value: &[u8]) -> BlockStoreResult<()>;
}
