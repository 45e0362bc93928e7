//! ECDSA/P-384 signature layout
//!
//! A signature is 24 32-bit words: r in words 0..12 and s in words 12..24,
//! each least-significant word first.

use eccel_api::traits::accelerator::SignatureWords;
use eccel_api::{Error, Result};
use eccel_internal::endian::{be_bytes_to_le_words, le_words_to_be_bytes};
use eccel_params::p384::{P384_SCALAR_SIZE, P384_SCALAR_WORDS, P384_SIGNATURE_WORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    words: SignatureWords,
}

impl Signature {
    pub const fn from_words(words: SignatureWords) -> Self {
        Self { words }
    }

    /// Copy from a word slice of exactly 24 words
    pub fn from_word_slice(words: &[u32]) -> Result<Self> {
        let mut out = [0u32; P384_SIGNATURE_WORDS];
        if words.len() != out.len() {
            return Err(Error::bad_argument("Signature::from_word_slice"));
        }
        out.copy_from_slice(words);
        Ok(Self { words: out })
    }

    /// Build from big-endian r and s
    pub fn from_scalars(r: &[u8; P384_SCALAR_SIZE], s: &[u8; P384_SCALAR_SIZE]) -> Self {
        let mut words = [0u32; P384_SIGNATURE_WORDS];
        let (r_words, s_words) = words.split_at_mut(P384_SCALAR_WORDS);
        be_bytes_to_le_words(r, r_words);
        be_bytes_to_le_words(s, s_words);
        Self { words }
    }

    pub fn words(&self) -> &SignatureWords {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut SignatureWords {
        &mut self.words
    }

    /// r as big-endian bytes
    pub fn r_bytes(&self) -> [u8; P384_SCALAR_SIZE] {
        let mut out = [0u8; P384_SCALAR_SIZE];
        le_words_to_be_bytes(&self.words[..P384_SCALAR_WORDS], &mut out);
        out
    }

    /// s as big-endian bytes
    pub fn s_bytes(&self) -> [u8; P384_SCALAR_SIZE] {
        let mut out = [0u8; P384_SCALAR_SIZE];
        le_words_to_be_bytes(&self.words[P384_SCALAR_WORDS..], &mut out);
        out
    }
}

impl From<SignatureWords> for Signature {
    fn from(words: SignatureWords) -> Self {
        Self::from_words(words)
    }
}

impl AsRef<[u32]> for Signature {
    fn as_ref(&self) -> &[u32] {
        &self.words
    }
}
