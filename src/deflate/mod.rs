//! RFC 1951 DEFLATE decoder: stored, fixed-Huffman and dynamic-Huffman
//! blocks, over a complete in-memory input buffer.

pub mod block;
pub mod constants;

pub use block::DeflateOptions;
use crate::error::Result;

/// Decodes a raw DEFLATE bitstream with no output-size limit.
pub fn deflate_decode(bytes: &[u8]) -> Result<Vec<u8>> {
    block::decode(bytes, &DeflateOptions::default())
}

/// Decodes a raw DEFLATE bitstream, failing with
/// [`crate::error::CodecError::OutputLimitExceeded`] rather than growing
/// the output past `options`'s configured limit.
pub fn deflate_decode_with_options(bytes: &[u8], options: DeflateOptions) -> Result<Vec<u8>> {
    block::decode(bytes, &options)
}
