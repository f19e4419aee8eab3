//! Read-through, write-avoiding store coordinator.
//!
//! [`BlockStore`] sits between the in-memory [`BlockCache`] and a durable
//! [`KeyValueStore`]. Reads try the cache first and backfill it from the
//! backend on a miss. Saves touch each tier only when it actually needs the
//! write: a block save always refreshes the cache (a full block supersedes
//! whatever was cached) but skips the backend when a full block is already
//! stored, while a header save skips any tier through which the header is
//! already reachable.

use hematite_primitives::{Block, BlockHash, Header};
use tracing::{debug, trace};

use crate::encoder::{decode_block, decode_header, encode_block, encode_header};
use crate::{BlockCache, BlockStoreResult, KeyValueStore};

/// Default number of cache entries.
const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Block store coordinating a bounded cache with a durable backend.
///
/// The check-then-write sequences on the save paths are not atomic across
/// threads; two writers racing on an absent key produce a duplicate write of
/// the same deterministic encoding, which is harmless.
pub struct BlockStore<S: KeyValueStore> {
    db: S,
    cache: BlockCache,
}

impl<S: KeyValueStore> BlockStore<S> {
    /// Create a store with the default cache capacity.
    pub fn new(db: S) -> Self {
        Self::with_cache(db, BlockCache::new(DEFAULT_CACHE_CAPACITY))
    }

    /// Create a store with a custom cache.
    pub fn with_cache(db: S, cache: BlockCache) -> Self {
        Self { db, cache }
    }

    /// Save a full block.
    ///
    /// The cache is always refreshed, overwriting any header cached under
    /// the same hash. The backend is written only when it holds nothing for
    /// this hash or a header-only record, which is upgraded in place.
    pub fn save_block(&self, block: &Block) -> BlockStoreResult<()> {
        let hash = block.hash();
        self.cache.add_block(hash, block.clone());

        let needs_write = match self.db.get(&hash)? {
            None => true,
            Some(existing) => decode_block(&existing)?.is_none(),
        };
        if needs_write {
            self.db.put(&hash, &encode_block(block))?;
            debug!(%hash, "stored block");
        } else {
            trace!(%hash, "block already stored");
        }
        Ok(())
    }

    /// Save a bare header.
    ///
    /// Each tier is checked independently: the cache is written only when
    /// the header is not already reachable there (directly or through a
    /// cached block), and the backend only when it holds no record at all.
    /// An existing header-only record is never re-written.
    pub fn save_header(&self, header: &Header) -> BlockStoreResult<()> {
        let hash = header.hash();

        if self.cache.header_by_hash(&hash).is_none() {
            self.cache.add_header(hash, header.clone());
        }

        if self.db.get(&hash)?.is_none() {
            self.db.put(&hash, &encode_header(header))?;
            debug!(%hash, "stored header");
        } else {
            trace!(%hash, "record already stored");
        }
        Ok(())
    }

    /// Retrieve a full block.
    ///
    /// Returns `None` when nothing is stored under `hash` or when only a
    /// header is. A block read from the backend is backfilled into the
    /// cache.
    pub fn block_by_hash(&self, hash: &BlockHash) -> BlockStoreResult<Option<Block>> {
        if let Some(block) = self.cache.block_by_hash(hash) {
            trace!(%hash, "cache hit");
            return Ok(Some(block));
        }

        let Some(bytes) = self.db.get(hash)? else {
            return Ok(None);
        };
        match decode_block(&bytes)? {
            Some(block) => {
                self.cache.add_block(*hash, block.clone());
                Ok(Some(block))
            }
            None => Ok(None),
        }
    }

    /// Retrieve a header.
    ///
    /// A cached or stored block yields its embedded header. A header read
    /// from the backend is backfilled into the cache.
    pub fn header_by_hash(&self, hash: &BlockHash) -> BlockStoreResult<Option<Header>> {
        if let Some(header) = self.cache.header_by_hash(hash) {
            trace!(%hash, "cache hit");
            return Ok(Some(header));
        }

        let Some(bytes) = self.db.get(hash)? else {
            return Ok(None);
        };
        match decode_header(&bytes)? {
            Some(header) => {
                self.cache.add_header(*hash, header.clone());
                Ok(Some(header))
            }
            None => Ok(None),
        }
    }
}
