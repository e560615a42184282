//! Self-describing serialization of a normalized Huffman table plus its
//! bit-packed payload. Private wire format; not meant to interoperate with
//! any external tool.

use super::builder::{assign_codewords, NormalizedSymbol};
use crate::bitstream::{HuffmanBitReader, HuffmanBitWriter};
use crate::error::{CodecError, Result};
use std::collections::HashMap;

fn bit_width(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        64 - value.leading_zeros()
    }
}

fn write_le_bytes(buf: &mut Vec<u8>, mut value: u64, byte_count: u32) {
    for _ in 0..byte_count {
        buf.push((value & 0xff) as u8);
        value >>= 8;
    }
}

fn read_le_bytes(bytes: &[u8], byte_count: usize) -> Result<u64> {
    if bytes.len() < byte_count {
        return Err(CodecError::TruncatedInput);
    }
    let mut value = 0u64;
    for (i, &b) in bytes.iter().take(byte_count).enumerate() {
        value |= (b as u64) << (8 * i);
    }
    Ok(value)
}

/// Serializes the normalized symbol table: header fields followed by the
/// bit-packed `(key, length_delta)` pairs.
pub fn serialize_table(symbols: &[NormalizedSymbol]) -> Result<Vec<u8>> {
    if symbols.is_empty() {
        return Err(CodecError::ContainerFormatError);
    }
    let first_length = symbols[0].code_length;
    let num_symbols = symbols.len() as u64 - 1;
    let num_symbols_bytes = (bit_width(num_symbols) + 7) / 8;
    let max_key = symbols.iter().map(|s| s.key).max().unwrap();
    let symbol_bits = bit_width(max_key as u64);

    let mut last_length = first_length;
    let mut deltas = Vec::with_capacity(symbols.len());
    let mut max_delta = 0u8;
    for symbol in symbols {
        let delta = symbol.code_length - last_length;
        last_length = symbol.code_length;
        deltas.push(delta);
        max_delta = max_delta.max(delta);
    }
    let diff_length_bit_count = bit_width(max_delta as u64);

    let mut out = Vec::new();
    out.push(first_length);
    out.push(diff_length_bit_count as u8);
    out.push(num_symbols_bytes as u8);
    write_le_bytes(&mut out, num_symbols, num_symbols_bytes);
    out.push(symbol_bits as u8);

    let mut writer = HuffmanBitWriter::new();
    for (symbol, &delta) in symbols.iter().zip(deltas.iter()) {
        writer.write(symbol.key, symbol_bits);
        writer.write(delta as u32, diff_length_bit_count);
    }
    let (payload, _) = writer.finish();
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Deserializes a table written by [`serialize_table`]. Returns the
/// symbols and the number of bytes consumed from `bytes`.
pub fn deserialize_table(bytes: &[u8]) -> Result<(Vec<NormalizedSymbol>, usize)> {
    if bytes.len() < 4 {
        return Err(CodecError::TruncatedInput);
    }
    let first_length = bytes[0];
    let diff_length_bit_count = bytes[1] as u32;
    let num_symbols_byte_size = bytes[2] as usize;
    if bytes.len() < 3 + num_symbols_byte_size + 1 {
        return Err(CodecError::TruncatedInput);
    }
    let num_symbols = read_le_bytes(&bytes[3..], num_symbols_byte_size)? + 1;
    let symbol_bits = bytes[3 + num_symbols_byte_size] as u32;

    let payload = &bytes[4 + num_symbols_byte_size..];
    let mut reader = HuffmanBitReader::new(payload);
    let mut symbols = Vec::with_capacity(num_symbols as usize);
    let mut last_length = first_length;
    for _ in 0..num_symbols {
        let key = reader.read(symbol_bits)?;
        let delta = reader.read(diff_length_bit_count)? as u8;
        let length = last_length + delta;
        symbols.push(NormalizedSymbol {
            key,
            code_length: length,
        });
        last_length = length;
    }

    let total_bits = (symbol_bits + diff_length_bit_count) as u64 * num_symbols;
    let total_bytes = ((total_bits + 7) / 8) as usize;
    Ok((symbols, 4 + num_symbols_byte_size + total_bytes))
}

/// Serializes the data header: complete payload byte count plus trailing
/// bit count of the final partial byte.
pub fn serialize_data_header(bit_count: u64) -> Vec<u8> {
    let byte_count = bit_count / 8;
    let trailing_bits = (bit_count % 8) as u8;
    let byte_count_size = (bit_width(byte_count) + 7) / 8;
    let mut out = Vec::new();
    out.push(byte_count_size as u8);
    write_le_bytes(&mut out, byte_count, byte_count_size);
    out.push(trailing_bits);
    out
}

/// Deserializes a data header. Returns the total payload bit count and the
/// number of header bytes consumed.
pub fn deserialize_data_header(bytes: &[u8]) -> Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(CodecError::TruncatedInput);
    }
    let byte_count_size = bytes[0] as usize;
    if bytes.len() < 1 + byte_count_size + 1 {
        return Err(CodecError::TruncatedInput);
    }
    let byte_count = read_le_bytes(&bytes[1..], byte_count_size)?;
    let trailing_bits = bytes[1 + byte_count_size] as u64;
    let bit_count = byte_count * 8 + trailing_bits;
    Ok((bit_count, 2 + byte_count_size))
}

/// Encodes `values` against an already-built code table, returning the
/// bit-packed payload bytes.
pub fn encode_payload(symbols: &[NormalizedSymbol], values: &[u32]) -> Vec<u8> {
    let codes = assign_codewords(symbols);
    let mut code_of: HashMap<u32, (u32, u8)> = HashMap::with_capacity(symbols.len());
    for (symbol, &code) in symbols.iter().zip(codes.iter()) {
        code_of.insert(symbol.key, (code, symbol.code_length));
    }
    let mut writer = HuffmanBitWriter::with_capacity((values.len() + 7) / 8);
    for &v in values {
        let (code, length) = code_of[&v];
        writer.write(code, length as u32);
    }
    writer.finish().0
}
