//! A small compression codec toolkit: a canonical Huffman encoder/decoder
//! with its own container format, an RFC 1951 DEFLATE decoder, and a
//! Burrows-Wheeler block-sort transform.
//!
//! Every entry point here works over a complete in-memory buffer; there is
//! no streaming or incremental decode, no multi-threading, and no DEFLATE
//! *encoder* (only the decoder is implemented).

#[macro_use]
extern crate static_assertions;

pub mod bitstream;
pub mod bwt;
pub mod deflate;
pub mod error;
pub mod huffman;

pub use bwt::{bwt_decode, bwt_encode};
pub use deflate::{deflate_decode, deflate_decode_with_options, DeflateOptions};
pub use error::CodecError;
pub use huffman::{huffman_decode, huffman_encode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huffman_roundtrip_smoke() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let encoded = huffman_encode(input).unwrap();
        let decoded = huffman_decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn bwt_roundtrip_smoke() {
        let input = vec![4u8, 2, 3, 3, 4, 2, 1, 5];
        let (index, encoded) = bwt_encode(&input);
        assert_eq!(bwt_decode(index, &encoded), input);
    }
}
