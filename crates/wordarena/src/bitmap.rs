//! Allocation bitmap encoding.
//!
//! Layout: a 16-bit little-endian byte count, then that many bytes with one
//! bit per word. Word `i` lives in byte `i / 8`, bit `i % 8` (LSB first);
//! 1 means allocated. Bits past the end of the arena stay 0.
//!
//! ```text
//! [0,10]-[12,2]-[20,6] free in 26 words
//!   -> 00000000001100111111000000   (word 0 on the left, 1 = allocated)
//!   -> [0x04, 0x00, 0x00, 0xCC, 0x0F, 0x00]
//! ```

use crate::block::Block;

/// Number of payload bytes needed for `size_in_words` bits.
pub fn bitmap_len(size_in_words: usize) -> usize {
    size_in_words.div_ceil(8)
}

/// Encode the allocation bitmap for an arena of `size_in_words` words.
///
/// Words of `allocated` past `size_in_words` are ignored. The length prefix
/// is truncated to 16 bits; arenas are capped well below that limit.
pub fn encode<'a, I>(size_in_words: usize, allocated: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Block>,
{
    let len = bitmap_len(size_in_words);
    let mut out = vec![0u8; 2 + len];
    out[..2].copy_from_slice(&(len as u16).to_le_bytes());
    let bits = &mut out[2..];
    for block in allocated {
        for word in block.offset..block.end().min(size_in_words) {
            bits[word / 8] |= 1 << (word % 8);
        }
    }
    out
}

/// Whether `word` is marked allocated in an encoded bitmap.
///
/// Returns `None` if the bitmap is malformed or `word` is past its end.
pub fn is_allocated(encoded: &[u8], word: usize) -> Option<bool> {
    let prefix: [u8; 2] = encoded.get(..2)?.try_into().ok()?;
    let len = u16::from_le_bytes(prefix) as usize;
    let bits = encoded.get(2..2 + len)?;
    bits.get(word / 8).map(|byte| byte & (1 << (word % 8)) != 0)
}
