//! Bounded access-ordered cache for blocks and headers.
//!
//! [`BlockCache`] stores either a full block or a bare header under the same
//! hash key. Both reads and writes count as an access, so entries that keep
//! getting touched survive eviction while cold ones drop out first.

use crate::Either;
use hematite_primitives::{Block, BlockHash, Header};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

/// LRU cache mapping block hashes to a block or a bare header.
///
/// The capacity is fixed at construction. A single lock guards the map and
/// its access order, so callers need no external synchronization.
pub struct BlockCache {
    inner: Mutex<LruCache<BlockHash, Either<Block, Header>>>,
}

impl BlockCache {
    /// Create a new cache holding at most `capacity` entries.
    ///
    /// A zero capacity is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Look up the entry under `hash`, refreshing its recency.
    pub fn get(&self, hash: &BlockHash) -> Option<Either<Block, Header>> {
        self.inner.lock().get(hash).cloned()
    }

    /// Insert or overwrite the entry under `hash` and mark it most recently
    /// used, evicting the least recently used entry if over capacity.
    pub fn put(&self, hash: BlockHash, value: Either<Block, Header>) {
        self.inner.lock().put(hash, value);
    }

    /// Drop the entry under `hash`, if any.
    pub fn remove(&self, hash: &BlockHash) {
        self.inner.lock().pop(hash);
    }

    /// Add a block, overwriting any block or header stored under the same key.
    pub fn add_block(&self, hash: BlockHash, block: Block) {
        self.put(hash, Either::Left(block));
    }

    /// Add a bare header, overwriting any block or header stored under the
    /// same key.
    pub fn add_header(&self, hash: BlockHash, header: Header) {
        self.put(hash, Either::Right(header));
    }

    /// Retrieve a cached block.
    ///
    /// Returns `None` when nothing is cached under `hash` or when only a
    /// header is; a header is never inflated into a block.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        self.get(hash)?.either(Some, |_| None)
    }

    /// Retrieve a cached header.
    ///
    /// When a full block is cached under `hash`, its embedded header is
    /// returned, so this never needs the durable store for a cached block.
    pub fn header_by_hash(&self, hash: &BlockHash) -> Option<Header> {
        self.get(hash)
            .map(|value| value.either(|block| block.header, |header| header))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
