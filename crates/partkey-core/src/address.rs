//! Checksummed account addresses.

use crate::error::{PartkeyError, Result};
use crate::hash::sha512_256;
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};

/// Length of the textual form: base32 of 36 bytes without padding.
const ENCODED_LEN: usize = 58;

/// An account address: an ed25519 public key rendered as base32 with a
/// 4-byte SHA-512/256 checksum suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Address of the given public key.
    #[must_use]
    pub const fn new(public_key: [u8; 32]) -> Self {
        Self(public_key)
    }

    /// The raw public key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse and checksum-validate the 58-character textual form.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != ENCODED_LEN {
            return Err(PartkeyError::InvalidAddress(format!(
                "expected {ENCODED_LEN} characters, got {}",
                s.len()
            )));
        }

        let raw = BASE32_NOPAD
            .decode(s.as_bytes())
            .map_err(|e| PartkeyError::InvalidAddress(e.to_string()))?;
        if raw.len() != 36 {
            return Err(PartkeyError::InvalidAddress(format!(
                "decoded to {} bytes, expected 36",
                raw.len()
            )));
        }

        let mut public_key = [0u8; 32];
        public_key.copy_from_slice(&raw[..32]);

        let digest = sha512_256(&public_key);
        if raw[32..] != digest[28..] {
            return Err(PartkeyError::InvalidAddress(
                "checksum mismatch".to_string(),
            ));
        }

        Ok(Self(public_key))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digest = sha512_256(&self.0);
        let mut raw = [0u8; 36];
        raw[..32].copy_from_slice(&self.0);
        raw[32..].copy_from_slice(&digest[28..]);
        f.write_str(&BASE32_NOPAD.encode(&raw))
    }
}

impl std::str::FromStr for Address {
    type Err = PartkeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Public key for the seed 00 01 .. 1f.
    const PUB: [u8; 32] = [
        0x03, 0xa1, 0x07, 0xbf, 0xf3, 0xce, 0x10, 0xbe, 0x1d, 0x70, 0xdd, 0x18, 0xe7, 0x4b,
        0xc0, 0x99, 0x67, 0xe4, 0xd6, 0x30, 0x9b, 0xa5, 0x0d, 0x5f, 0x1d, 0xdc, 0x86, 0x64,
        0x12, 0x55, 0x31, 0xb8,
    ];
    const ENCODED: &str = "AOQQPP7TZYIL4HLQ3UMOOS6ATFT6JVRQTOSQ2XY53SDGIESVGG4MPFYUMQ";

    #[test]
    fn encodes_with_checksum() {
        assert_eq!(Address::new(PUB).to_string(), ENCODED);
    }

    #[test]
    fn parse_round_trip() {
        let addr = Address::parse(ENCODED).unwrap();
        assert_eq!(addr.as_bytes(), &PUB);
    }

    #[test]
    fn rejects_corrupted_checksum() {
        // Flip the final character.
        let mut s = ENCODED.to_string();
        s.pop();
        s.push('A');
        assert!(matches!(
            Address::parse(&s),
            Err(PartkeyError::InvalidAddress(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Address::parse("SHORT").is_err());
    }
}
