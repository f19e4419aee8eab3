//! Envelope codec for durably stored blocks and headers.
//!
//! Blocks and bare headers share one key space in the durable store, so the
//! stored bytes must say which of the two they are without an explicit tag:
//! a block is its own canonical encoding, an RLP list of three elements
//! (header, transactions, uncles), while a stored header is wrapped into an
//! RLP list of a single element. The element count of the outer list is the
//! sole discriminant. This shape is a wire-format contract; existing records
//! stay readable only as long as it is preserved exactly.

use crate::{BlockStoreError, BlockStoreResult, Either};
use alloy_rlp::Decodable;
use hematite_primitives::{Block, Header};

/// Encodes a block for the durable store.
///
/// A block's canonical encoding already is the three-element envelope, so it
/// is stored as-is.
pub fn encode_block(block: &Block) -> Vec<u8> {
    alloy_rlp::encode(block)
}

/// Encodes a bare header for the durable store.
///
/// The header's own encoding becomes the single element of a wrapping RLP
/// list.
pub fn encode_header(header: &Header) -> Vec<u8> {
    let encoded = alloy_rlp::encode(header);
    let mut out = Vec::with_capacity(encoded.len() + 9);
    alloy_rlp::Header {
        list: true,
        payload_length: encoded.len(),
    }
    .encode(&mut out);
    out.extend_from_slice(&encoded);
    out
}

/// Decodes a stored envelope into a block or a header, by shape.
fn decode_value(value: &[u8]) -> BlockStoreResult<Either<Block, Header>> {
    let mut buf = value;
    let envelope = alloy_rlp::Header::decode(&mut buf)?;
    if !envelope.list {
        return Err(BlockStoreError::MalformedEnvelope);
    }
    let payload = buf
        .get(..envelope.payload_length)
        .ok_or(alloy_rlp::Error::InputTooShort)?;

    match count_elements(payload)? {
        3 => {
            let mut full = value;
            Ok(Either::Left(Block::decode(&mut full)?))
        }
        1 => {
            let mut element = payload;
            Ok(Either::Right(Header::decode(&mut element)?))
        }
        _ => Err(BlockStoreError::MalformedEnvelope),
    }
}

/// Counts the top-level elements of an RLP list payload.
fn count_elements(mut payload: &[u8]) -> BlockStoreResult<usize> {
    let mut count = 0;
    while !payload.is_empty() {
        let element = alloy_rlp::Header::decode(&mut payload)?;
        payload = payload
            .get(element.payload_length..)
            .ok_or(alloy_rlp::Error::InputTooShort)?;
        count += 1;
    }
    Ok(count)
}

/// Decodes a stored envelope and retrieves the block, if it holds one.
///
/// Returns `None` for a header-only envelope; that is a valid outcome, not
/// an error.
pub fn decode_block(value: &[u8]) -> BlockStoreResult<Option<Block>> {
    Ok(decode_value(value)?.either(Some, |_| None))
}

/// Decodes a stored envelope and retrieves the header.
///
/// A block envelope yields the block's embedded header, so this is `Some`
/// for every well-formed envelope.
pub fn decode_header(value: &[u8]) -> BlockStoreResult<Option<Header>> {
    Ok(Some(decode_value(value)?.either(
        |block| block.header,
        |header| header,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hematite_primitives::Transaction;

    fn test_header() -> Header {
        Header {
            number: 11,
            timestamp: 1_600_000_000,
            ..Default::default()
        }
    }

    fn test_block() -> Block {
        Block {
            header: test_header(),
            transactions: vec![Transaction {
                nonce: 3,
                gas_limit: 21_000,
                ..Default::default()
            }],
            uncles: vec![],
        }
    }

    #[test]
    fn block_envelope_decodes_to_block() {
        let block = test_block();
        let encoded = encode_block(&block);

        assert_eq!(decode_block(&encoded).unwrap(), Some(block));
    }

    #[test]
    fn block_envelope_yields_embedded_header() {
        let block = test_block();
        let encoded = encode_block(&block);

        assert_eq!(decode_header(&encoded).unwrap(), Some(block.header));
    }

    #[test]
    fn header_envelope_decodes_to_header() {
        let header = test_header();
        let encoded = encode_header(&header);

        assert_eq!(decode_header(&encoded).unwrap(), Some(header));
    }

    #[test]
    fn header_envelope_is_not_a_block() {
        let encoded = encode_header(&test_header());

        assert_eq!(decode_block(&encoded).unwrap(), None);
    }

    #[test]
    fn header_envelope_wraps_the_header_encoding() {
        let header = test_header();
        let encoded = encode_header(&header);

        let mut buf = encoded.as_slice();
        let envelope = alloy_rlp::Header::decode(&mut buf).unwrap();
        assert!(envelope.list);
        assert_eq!(buf, alloy_rlp::encode(&header).as_slice());
    }

    #[test]
    fn two_element_envelope_is_rejected() {
        let encoded = alloy_rlp::encode(&vec![1u64, 2u64]);

        assert!(matches!(
            decode_block(&encoded),
            Err(BlockStoreError::MalformedEnvelope)
        ));
        assert!(matches!(
            decode_header(&encoded),
            Err(BlockStoreError::MalformedEnvelope)
        ));
    }

    #[test]
    fn empty_envelope_is_rejected() {
        let encoded = alloy_rlp::encode(&Vec::<u64>::new());

        assert!(matches!(
            decode_block(&encoded),
            Err(BlockStoreError::MalformedEnvelope)
        ));
    }

    #[test]
    fn non_list_input_is_rejected() {
        let encoded = alloy_rlp::encode(&42u64);

        assert!(matches!(
            decode_block(&encoded),
            Err(BlockStoreError::MalformedEnvelope)
        ));
    }

    #[test]
    fn malformed_payload_fails_as_rlp_error() {
        // Right shape (three elements), wrong element types.
        let encoded = alloy_rlp::encode(&vec![1u64, 2u64, 3u64]);

        assert!(matches!(
            decode_block(&encoded),
            Err(BlockStoreError::Rlp(_))
        ));
    }
}
