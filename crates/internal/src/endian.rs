//! Endianness utility functions
//!
//! The accelerator boundary moves big-endian byte strings, while signatures
//! are carried as little-endian word buffers (least-significant word first).

fn u32_from_be_bytes(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Write an integer held as little-endian words into a big-endian byte buffer
///
/// `out` must be exactly four times as long as `words`.
pub fn le_words_to_be_bytes(words: &[u32], out: &mut [u8]) {
    debug_assert_eq!(out.len(), words.len() * 4);
    for (word, chunk) in words.iter().zip(out.rchunks_exact_mut(4)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Read a big-endian byte buffer into little-endian words
///
/// `bytes` must be exactly four times as long as `out`.
pub fn be_bytes_to_le_words(bytes: &[u8], out: &mut [u32]) {
    debug_assert_eq!(bytes.len(), out.len() * 4);
    for (word, chunk) in out.iter_mut().zip(bytes.rchunks_exact(4)) {
        *word = u32_from_be_bytes(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}
