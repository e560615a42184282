//! Canonical Huffman encoder/decoder with a private, self-describing
//! container format (table header + data header + bit-packed payload).

pub mod builder;
pub mod container;
pub mod tree;

use crate::bitstream::HuffmanBitReader;
use crate::error::{CodecError, Result};
use builder::{build_normalized_symbols, histogram};
use tree::HuffmanDecodeTree;

/// Encodes `bytes` into the Huffman container format described in this
/// crate's design notes. Empty input is a [`CodecError::ContainerFormatError`]
/// since there is no histogram to build a code from.
pub fn huffman_encode(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Err(CodecError::ContainerFormatError);
    }
    log::trace!("huffman_encode: {} input bytes", bytes.len());

    let values: Vec<u32> = bytes.iter().map(|&b| b as u32).collect();
    let hist = histogram(values.iter().copied());
    let symbols = build_normalized_symbols(&hist);

    let table_bytes = container::serialize_table(&symbols)?;
    let payload = container::encode_payload(&symbols, &values);
    let bit_count = symbols
        .iter()
        .map(|s| hist[&s.key] * s.code_length as u64)
        .sum();
    let data_header = container::serialize_data_header(bit_count);

    let mut out = Vec::with_capacity(table_bytes.len() + data_header.len() + payload.len());
    out.extend_from_slice(&table_bytes);
    out.extend_from_slice(&data_header);
    out.extend_from_slice(&payload);
    log::debug!("huffman_encode: {} output bytes", out.len());
    Ok(out)
}

/// Decodes a buffer produced by [`huffman_encode`].
pub fn huffman_decode(bytes: &[u8]) -> Result<Vec<u8>> {
    let (symbols, table_len) = container::deserialize_table(bytes)?;
    let (bit_count, header_len) = container::deserialize_data_header(&bytes[table_len..])?;
    let payload = &bytes[table_len + header_len..];

    let tree = HuffmanDecodeTree::build(&symbols)?;
    let mut reader = HuffmanBitReader::new(payload);
    let mut out = Vec::new();
    while reader.bit_position() < bit_count as usize {
        let symbol = tree.decode_symbol(|| reader.read_bit())?;
        if symbol > 255 {
            return Err(CodecError::ContainerFormatError);
        }
        out.push(symbol as u8);
    }
    log::debug!("huffman_decode: {} output bytes", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_short_text() {
        let input = b"huffman codec";
        let encoded = huffman_encode(input).unwrap();
        let decoded = huffman_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_single_byte() {
        let input = b"a";
        let encoded = huffman_encode(input).unwrap();
        let decoded = huffman_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_repeated_byte() {
        let input = [42u8; 64];
        let encoded = huffman_encode(&input).unwrap();
        let decoded = huffman_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_all_byte_values() {
        let input: Vec<u8> = (0..=255u8).collect();
        let encoded = huffman_encode(&input).unwrap();
        let decoded = huffman_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            huffman_encode(&[]).unwrap_err(),
            CodecError::ContainerFormatError
        );
    }
}
