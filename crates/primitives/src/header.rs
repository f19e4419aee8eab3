//! Block header type.

use crate::BlockHash;
use alloy_primitives::{Address, B256, Bytes, U256, keccak256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// Chain-validation metadata for a block.
///
/// The header carries everything needed to link and validate a block without
/// its transaction bodies. Its canonical encoding is an RLP list of the
/// fields in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Header {
    /// Hash of the parent block's header.
    pub parent_hash: BlockHash,
    /// Beneficiary of the block reward.
    pub coinbase: Address,
    /// Root of the state trie after executing this block.
    pub state_root: B256,
    /// Root of the trie over this block's transactions.
    pub transactions_root: B256,
    /// Root of the trie over this block's receipts.
    pub receipts_root: B256,
    /// Mining difficulty target.
    pub difficulty: U256,
    /// Height of this block in the chain.
    pub number: u64,
    /// Unix timestamp at which the block was sealed.
    pub timestamp: u64,
    /// Arbitrary extra bytes chosen by the sealer.
    pub extra_data: Bytes,
}

impl Header {
    /// Computes the Keccak-256 hash of the canonical encoding.
    ///
    /// This is the identifier a block and its header are stored under.
    pub fn hash(&self) -> BlockHash {
        BlockHash::new(keccak256(alloy_rlp::encode(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let header = Header {
            number: 7,
            timestamp: 1_600_000_000,
            ..Default::default()
        };

        assert_eq!(header.hash(), header.hash());
    }

    #[test]
    fn hash_commits_to_contents() {
        let header = Header::default();
        let other = Header {
            number: 1,
            ..Default::default()
        };

        assert_ne!(header.hash(), other.hash());
    }
}
