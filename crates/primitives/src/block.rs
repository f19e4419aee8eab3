//! Block and transaction types.

use crate::{BlockHash, Header};
use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// A single transaction carried in a block body.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Transaction {
    /// Sender account nonce.
    pub nonce: u64,
    /// Maximum gas the transaction may consume.
    pub gas_limit: u64,
    /// Recipient account.
    pub to: Address,
    /// Value transferred to the recipient.
    pub value: U256,
    /// Call data.
    pub payload: Bytes,
}

/// A full block: header plus transaction and uncle-header bodies.
///
/// The canonical encoding is an RLP list of exactly three elements: the
/// header, the transaction list and the uncle-header list.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Block {
    /// The block's header.
    pub header: Header,
    /// Transactions executed in this block.
    pub transactions: Vec<Transaction>,
    /// Headers of referenced uncle blocks.
    pub uncles: Vec<Header>,
}

impl Block {
    /// Returns the block's header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The block's identifier, which is its header's hash.
    pub fn hash(&self) -> BlockHash {
        self.header.hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_rlp::Decodable;

    #[test]
    fn block_and_header_share_hash() {
        let block = Block {
            header: Header {
                number: 3,
                ..Default::default()
            },
            transactions: vec![Transaction::default()],
            uncles: vec![],
        };

        assert_eq!(block.hash(), block.header().hash());
    }

    #[test]
    fn canonical_encoding_round_trips() {
        let block = Block {
            header: Header {
                number: 42,
                timestamp: 1_600_000_000,
                ..Default::default()
            },
            transactions: vec![Transaction {
                nonce: 1,
                gas_limit: 21_000,
                ..Default::default()
            }],
            uncles: vec![Header::default()],
        };

        let encoded = alloy_rlp::encode(&block);
        let decoded = Block::decode(&mut encoded.as_slice()).unwrap();

        assert_eq!(block, decoded);
    }
}
