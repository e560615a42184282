//! Burrows-Wheeler block-sort transform, forward and inverse.
//!
//! The forward direction builds the full rotation matrix and sorts it
//! lexicographically; the inverse walks the next-index permutation derived
//! from a stable sort of the last column. Both are O(N^2 log N) /
//! O(N log N) respectively, which is acceptable here: this toolkit targets
//! correctness over throughput for the block-sort stage, leaving a faster
//! suffix-array construction as a possible future upgrade if this ever
//! needs to handle large blocks.

/// Applies the forward transform to `sequence`, returning the primary
/// index (the row of the sorted rotation matrix equal to the original
/// sequence) and the transform's last column.
///
/// Panics if `sequence` is empty; the transform is undefined for a
/// zero-length block.
pub fn bwt_encode<T: Ord + Clone>(sequence: &[T]) -> (usize, Vec<T>) {
    assert!(!sequence.is_empty(), "bwt_encode requires a nonempty sequence");
    let n = sequence.len();

    let mut rotation_starts: Vec<usize> = (0..n).collect();
    rotation_starts.sort_by(|&a, &b| {
        for offset in 0..n {
            let ca = &sequence[(a + offset) % n];
            let cb = &sequence[(b + offset) % n];
            match ca.cmp(cb) {
                std::cmp::Ordering::Equal => continue,
                other => return other,
            }
        }
        std::cmp::Ordering::Equal
    });

    let primary_index = rotation_starts
        .iter()
        .position(|&start| start == 0)
        .expect("identity rotation is always present");

    let last_column: Vec<T> = rotation_starts
        .iter()
        .map(|&start| sequence[(start + n - 1) % n].clone())
        .collect();

    (primary_index, last_column)
}

/// Applies the inverse transform to `(primary_index, last_column)`,
/// reconstructing the original sequence.
pub fn bwt_decode<T: Ord + Clone>(primary_index: usize, last_column: &[T]) -> Vec<T> {
    let n = last_column.len();
    if n == 0 {
        return Vec::new();
    }

    // `next[i]` is the row that row `i`'s first column maps to: the stable
    // rank of `last_column[i]` among equal values, positioned by a stable
    // sort of (value, original index).
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| last_column[a].cmp(&last_column[b]).then(a.cmp(&b)));

    let mut next = vec![0usize; n];
    for (rank, &original_index) in order.iter().enumerate() {
        next[original_index] = rank;
    }

    let mut output = Vec::with_capacity(n);
    let mut i = primary_index;
    for _ in 0..n {
        i = next[i];
        output.push(last_column[i].clone());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_banana() {
        let input: Vec<u8> = b"banana".to_vec();
        let (index, encoded) = bwt_encode(&input);
        let decoded = bwt_decode(index, &encoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_numeric_sequence() {
        let input = vec![4, 2, 3, 3, 4, 2, 1, 5];
        let (index, encoded) = bwt_encode(&input);
        let decoded = bwt_decode(index, &encoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_single_element() {
        let input = vec![42u8];
        let (index, encoded) = bwt_encode(&input);
        assert_eq!(index, 0);
        let decoded = bwt_decode(index, &encoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_all_equal_symbols() {
        let input = vec![7u8; 16];
        let (index, encoded) = bwt_encode(&input);
        let decoded = bwt_decode(index, &encoded);
        assert_eq!(decoded, input);
    }

    #[test]
    fn roundtrip_longer_text() {
        let input: Vec<u8> = b"the quick brown fox jumps over the lazy dog".to_vec();
        let (index, encoded) = bwt_encode(&input);
        let decoded = bwt_decode(index, &encoded);
        assert_eq!(decoded, input);
    }
}
