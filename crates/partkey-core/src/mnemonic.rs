//! Algorand account mnemonics.
//!
//! A mnemonic encodes the 32-byte ed25519 seed as 24 words of 11 bits each
//! (little-endian bit packing) followed by a 25th checksum word derived from
//! the first 11 bits of SHA-512/256 of the seed. The wordlist is the BIP-39
//! English list.

use crate::error::{PartkeyError, Result};
use crate::hash::sha512_256;
use bip39::Language;

/// Number of words in a complete phrase, checksum word included.
const WORD_COUNT: usize = 25;

/// A parsed 25-word account mnemonic.
///
/// Holds the decoded 32-byte key; the phrase can be regenerated with
/// [`Mnemonic::phrase`].
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    key: [u8; 32],
}

impl Mnemonic {
    /// Parse a 25-word phrase, validating word count, wordlist membership,
    /// and the checksum word. All failures are fatal with no recovery.
    pub fn parse(phrase: &str) -> Result<Self> {
        let words: Vec<String> = phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if words.len() != WORD_COUNT {
            return Err(PartkeyError::MnemonicWordCount { got: words.len() });
        }

        // Every word, the checksum word included, must be on the wordlist.
        let mut indices = Vec::with_capacity(WORD_COUNT);
        for word in &words {
            let index = word_index(word).ok_or_else(|| PartkeyError::UnknownWord {
                word: word.clone(),
            })?;
            indices.push(index);
        }

        // 24 * 11 bits unpack to 33 bytes; the final byte carries the
        // 8 bits of zero padding and must be empty.
        let bytes = from_u11(&indices[..WORD_COUNT - 1]);
        if bytes.len() != 33 || bytes[32] != 0 {
            return Err(PartkeyError::ChecksumMismatch);
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes[..32]);

        if words[WORD_COUNT - 1] != checksum_word(&key) {
            return Err(PartkeyError::ChecksumMismatch);
        }

        Ok(Self { key })
    }

    /// Build the mnemonic for an existing 32-byte key.
    #[must_use]
    pub const fn from_key(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// The 32-byte ed25519 seed this mnemonic encodes.
    #[must_use]
    pub const fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// Render the full 25-word phrase.
    #[must_use]
    pub fn phrase(&self) -> String {
        let list = Language::English.word_list();
        let mut words: Vec<&str> = to_u11(&self.key)
            .into_iter()
            .map(|i| list[i as usize])
            .collect();
        words.push(checksum_word(&self.key));
        words.join(" ")
    }
}

impl std::str::FromStr for Mnemonic {
    type Err = PartkeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Phrases are secrets; never print the words.
impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mnemonic(..)")
    }
}

/// The checksum word: first 11 bits of SHA-512/256 over the key.
fn checksum_word(key: &[u8; 32]) -> &'static str {
    let digest = sha512_256(key);
    let index = to_u11(&digest[..2])[0];
    Language::English.word_list()[index as usize]
}

fn word_index(word: &str) -> Option<u16> {
    Language::English
        .word_list()
        .iter()
        .position(|w| *w == word)
        .map(|i| u16::try_from(i).unwrap_or(0))
}

/// Repack bytes into 11-bit values, little-endian within the bit stream.
fn to_u11(data: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity((data.len() * 8).div_ceil(11));
    let mut buf: u32 = 0;
    let mut bits = 0;

    for &byte in data {
        buf |= u32::from(byte) << bits;
        bits += 8;
        while bits >= 11 {
            out.push((buf & 0x7FF) as u16);
            buf >>= 11;
            bits -= 11;
        }
    }
    if bits > 0 {
        out.push((buf & 0x7FF) as u16);
    }
    out
}

/// Inverse of [`to_u11`].
fn from_u11(values: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity((values.len() * 11).div_ceil(8));
    let mut buf: u32 = 0;
    let mut bits = 0;

    for &value in values {
        buf |= u32::from(value) << bits;
        bits += 11;
        while bits >= 8 {
            out.push((buf & 0xFF) as u8);
            buf >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        out.push((buf & 0xFF) as u8);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_key_phrase() {
        let mnemonic = Mnemonic::from_key([0u8; 32]);
        let phrase = mnemonic.phrase();
        let words: Vec<&str> = phrase.split(' ').collect();

        assert_eq!(words.len(), 25);
        assert!(words[..24].iter().all(|w| *w == "abandon"));
        // First 11 bits of SHA-512/256 over 32 zero bytes.
        assert_eq!(words[24], Language::English.word_list()[943]);
    }

    #[test]
    fn phrase_round_trip() {
        let key: [u8; 32] = std::array::from_fn(|i| i as u8);
        let mnemonic = Mnemonic::from_key(key);
        let parsed = Mnemonic::parse(&mnemonic.phrase()).unwrap();
        assert_eq!(parsed.key(), &key);
    }

    #[test]
    fn rejects_wrong_word_count() {
        let err = Mnemonic::parse("abandon abandon abandon").unwrap_err();
        assert!(matches!(err, PartkeyError::MnemonicWordCount { got: 3 }));
    }

    #[test]
    fn rejects_unknown_word() {
        // In a data position.
        let phrase = format!("zzzzzz {}", vec!["abandon"; 24].join(" "));
        let err = Mnemonic::parse(&phrase).unwrap_err();
        assert!(matches!(err, PartkeyError::UnknownWord { .. }));

        // In the checksum position, which must not be mistaken for a
        // checksum mismatch.
        let phrase = format!("{} zzzzzz", vec!["abandon"; 24].join(" "));
        let err = Mnemonic::parse(&phrase).unwrap_err();
        assert!(matches!(err, PartkeyError::UnknownWord { .. }));
    }

    #[test]
    fn rejects_bad_checksum_word() {
        // 24 "abandon" words decode to the zero key; "abandon" is not its
        // checksum word.
        let phrase = vec!["abandon"; 25].join(" ");
        let err = Mnemonic::parse(&phrase).unwrap_err();
        assert!(matches!(err, PartkeyError::ChecksumMismatch));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let phrase = Mnemonic::from_key([0u8; 32]).phrase().to_uppercase();
        assert!(Mnemonic::parse(&phrase).is_ok());
    }

    #[test]
    fn bit_packing_is_lossless() {
        let data: Vec<u8> = (0..32).collect();
        let packed = to_u11(&data);
        assert_eq!(packed.len(), 24);
        let unpacked = from_u11(&packed);
        assert_eq!(&unpacked[..32], data.as_slice());
        assert_eq!(unpacked[32], 0);
    }
}
