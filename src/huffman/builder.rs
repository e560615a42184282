//! Canonical Huffman code construction: histogram -> weighted tree ->
//! per-symbol code lengths -> normalized table -> canonical codewords.

use std::collections::BTreeMap;

/// A symbol after normalization: sorted by `(code_length, key)` ascending.
/// This order alone determines the canonical codeword (see
/// [`assign_codewords`]).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NormalizedSymbol {
    pub key: u32,
    pub code_length: u8,
}

struct TreeNode {
    count: u64,
    key: Option<u32>,
    parent: Option<usize>,
}

/// Counts occurrences of each distinct value.
pub fn histogram(values: impl IntoIterator<Item = u32>) -> BTreeMap<u32, u64> {
    let mut map = BTreeMap::new();
    for v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

/// Builds the weighted Huffman tree from a histogram and returns each
/// symbol's code length (tree depth). Ties are broken by repeatedly
/// merging the two lowest-count nodes, with new merge nodes inserted back
/// into sorted position so that equal counts are resolved in a
/// deterministic, stable order.
fn code_lengths_from_histogram(hist: &BTreeMap<u32, u64>) -> Vec<(u32, u8)> {
    let mut nodes: Vec<TreeNode> = hist
        .iter()
        .map(|(&key, &count)| TreeNode {
            count,
            key: Some(key),
            parent: None,
        })
        .collect();
    let num_leaves = nodes.len();

    // `active` holds indices into `nodes`, kept sorted ascending by count.
    let mut active: Vec<usize> = (0..num_leaves).collect();
    active.sort_by_key(|&i| nodes[i].count);

    while active.len() > 1 {
        let i0 = active.remove(0);
        let i1 = active.remove(0);
        let merged_count = nodes[i0].count + nodes[i1].count;
        let merged_index = nodes.len();
        nodes[i0].parent = Some(merged_index);
        nodes[i1].parent = Some(merged_index);
        nodes.push(TreeNode {
            count: merged_count,
            key: None,
            parent: None,
        });
        let pos = active
            .iter()
            .position(|&i| nodes[i].count > merged_count)
            .unwrap_or(active.len());
        active.insert(pos, merged_index);
    }

    let mut lengths = Vec::with_capacity(num_leaves);
    for i in 0..num_leaves {
        let mut depth = 0u32;
        let mut parent = nodes[i].parent;
        while let Some(p) = parent {
            depth += 1;
            parent = nodes[p].parent;
        }
        lengths.push((nodes[i].key.unwrap(), depth as u8));
    }
    lengths
}

/// Builds the normalized symbol table for a histogram. A single-symbol
/// alphabet is a degenerate case the tree-merge loop never touches
/// (depth stays 0, which is not decodable); it is clamped to length 1.
pub fn build_normalized_symbols(hist: &BTreeMap<u32, u64>) -> Vec<NormalizedSymbol> {
    let mut lengths = code_lengths_from_histogram(hist);
    if lengths.len() == 1 {
        lengths[0].1 = 1;
    }
    let mut symbols: Vec<NormalizedSymbol> = lengths
        .into_iter()
        .map(|(key, code_length)| NormalizedSymbol { key, code_length })
        .collect();
    symbols.sort_by_key(|s| (s.code_length, s.key));
    symbols
}

/// Assigns canonical codewords to an already-normalized symbol list.
/// Returns one codeword per entry, in the same order as `symbols`.
pub fn assign_codewords(symbols: &[NormalizedSymbol]) -> Vec<u32> {
    if symbols.is_empty() {
        return Vec::new();
    }
    let mut codes = Vec::with_capacity(symbols.len());
    let mut code: u32 = 0;
    codes.push(0);
    let mut last_len = symbols[0].code_length;
    for symbol in &symbols[1..] {
        code += 1;
        if symbol.code_length > last_len {
            code <<= (symbol.code_length - last_len) as u32;
        }
        codes.push(code);
        last_len = symbol.code_length;
    }
    codes
}
