//! Decode-side Huffman prefix tree, built from a canonicalized
//! `(symbol, code_length)` table. Represented as an arena of small node
//! structs rather than a boxed pointer graph or a flat lookup table: the
//! whole-buffer decode this crate targets walks one bit at a time, so
//! there is no need for a multi-level subtable's bookkeeping, and an
//! index-addressed `Vec` has no cycles to worry about.

use super::builder::{assign_codewords, NormalizedSymbol};
use crate::error::{CodecError, Result};

#[derive(Clone, Copy)]
struct HuffNode {
    children: [Option<u32>; 2],
    symbol: Option<u32>,
}

impl HuffNode {
    fn empty() -> Self {
        Self {
            children: [None, None],
            symbol: None,
        }
    }
}

pub struct HuffmanDecodeTree {
    nodes: Vec<HuffNode>,
}

impl HuffmanDecodeTree {
    /// Builds a decode tree from a normalized symbol table (as produced by
    /// [`super::builder::build_normalized_symbols`] or reconstructed from a
    /// serialized container).
    pub fn build(symbols: &[NormalizedSymbol]) -> Result<Self> {
        let codes = assign_codewords(symbols);
        let mut nodes = vec![HuffNode::empty()];
        for (symbol, &code) in symbols.iter().zip(codes.iter()) {
            if symbol.code_length == 0 {
                continue;
            }
            let mut node_index = 0usize;
            for bit_pos in (0..symbol.code_length as u32).rev() {
                let bit = ((code >> bit_pos) & 1) as usize;
                node_index = match nodes[node_index].children[bit] {
                    Some(child) => child as usize,
                    None => {
                        let new_index = nodes.len() as u32;
                        nodes.push(HuffNode::empty());
                        nodes[node_index].children[bit] = Some(new_index);
                        new_index as usize
                    }
                };
            }
            if nodes[node_index].symbol.is_some() {
                return Err(CodecError::ContainerFormatError);
            }
            nodes[node_index].symbol = Some(symbol.key);
        }
        Ok(Self { nodes })
    }

    /// Decodes one symbol by repeatedly calling `next_bit` until a leaf is
    /// reached. `next_bit` must return 0 or 1.
    pub fn decode_symbol(&self, mut next_bit: impl FnMut() -> Result<u32>) -> Result<u32> {
        let mut node_index = 0usize;
        loop {
            let bit = next_bit()?;
            let node = &self.nodes[node_index];
            let child = node.children[bit as usize].ok_or(CodecError::InvalidHuffmanCode)?;
            node_index = child as usize;
            if let Some(symbol) = self.nodes[node_index].symbol {
                return Ok(symbol);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::builder::{build_normalized_symbols, histogram};

    #[test]
    fn single_symbol_tree_decodes_the_one_bit_it_has() {
        let hist = histogram([9u32; 3]);
        let symbols = build_normalized_symbols(&hist);
        let tree = HuffmanDecodeTree::build(&symbols).unwrap();
        let mut bits = [0u32].into_iter();
        let symbol = tree.decode_symbol(|| Ok(bits.next().unwrap())).unwrap();
        assert_eq!(symbol, 9);
    }

    #[test]
    fn missing_child_is_invalid_huffman_code() {
        // A single-symbol alphabet is clamped to a 1-bit code at '0'; the
        // '1' child is never populated.
        let hist = histogram([5u32; 3]);
        let symbols = build_normalized_symbols(&hist);
        let tree = HuffmanDecodeTree::build(&symbols).unwrap();
        let mut bits = [1u32].into_iter();
        let err = tree.decode_symbol(|| Ok(bits.next().unwrap())).unwrap_err();
        assert_eq!(err, CodecError::InvalidHuffmanCode);
    }
}
