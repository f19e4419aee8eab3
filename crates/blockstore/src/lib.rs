//! Block and header storage with a shared key space.
//!
//! Blocks and bare headers are stored under the same hash key, both in a
//! bounded in-memory cache and in a durable key-value backend. The on-disk
//! envelope distinguishes the two purely by shape: a block is an RLP list of
//! three elements, a stored header an RLP list of one.
//!
//! The [`BlockStore`] coordinator ties the pieces together with a
//! read-through, write-avoiding policy: reads fall back to the backend and
//! backfill the cache, block saves always refresh the cache but only touch
//! the backend when it holds nothing or a header-only record, and header
//! saves skip whatever is already reachable.

mod cache;
mod either;
mod encoder;
mod error;
mod redb_store;
mod store;
mod traits;

pub use cache::BlockCache;
pub use either::Either;
pub use encoder::{decode_block, decode_header, encode_block, encode_header};
pub use error::{BlockStoreError, BlockStoreResult};
pub use redb_store::RedbBlockStore;
pub use store::BlockStore;
pub use traits::KeyValueStore;
