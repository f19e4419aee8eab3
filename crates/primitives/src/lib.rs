//! Core primitive types for hematite nodes.
//!
//! This crate provides the block, header and hash types used across the
//! stack, kept separate to avoid circular dependencies.

use alloy_primitives::B256;
use alloy_rlp::{RlpDecodableWrapper, RlpEncodableWrapper};
use core::fmt;

mod block;
mod header;

pub use block::{Block, Transaction};
pub use header::Header;

/// Keccak-256 digest identifying a block or a header.
///
/// A block and its own header share the same identifier: the hash is always
/// computed over the header encoding.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    RlpEncodableWrapper,
    RlpDecodableWrapper,
)]
pub struct BlockHash(B256);

impl BlockHash {
    /// Wraps an already-computed digest.
    pub const fn new(digest: B256) -> Self {
        Self(digest)
    }

    /// Returns the raw 32 bytes, suitable as a database key.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }
}

impl From<B256> for BlockHash {
    fn from(digest: B256) -> Self {
        Self(digest)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self.0)
    }
}
