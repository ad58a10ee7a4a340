use crate::error::{PartkeyError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A participation key record from `GET /v2/participation`.
///
/// The node keeps one record per generated keypair; the `key` object holds
/// the consensus key material itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationKey {
    /// Participation key ID assigned by the node
    pub id: String,

    /// Address of the account the key votes for
    pub address: String,

    /// Key material and validity window
    pub key: AccountParticipation,

    /// First round the key actually took effect, once registered
    #[serde(default, rename = "effective-first-valid")]
    pub effective_first_valid: Option<u64>,

    /// Last round the key is in effect, once registered
    #[serde(default, rename = "effective-last-valid")]
    pub effective_last_valid: Option<u64>,

    /// Last round this key voted in
    #[serde(default, rename = "last-vote")]
    pub last_vote: Option<u64>,

    /// Last round this key proposed a block
    #[serde(default, rename = "last-block-proposal")]
    pub last_block_proposal: Option<u64>,
}

/// Consensus key material: vote, selection, and state-proof keys plus the
/// validity window and key dilution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountParticipation {
    /// VRF selection key, base64
    #[serde(rename = "selection-participation-key")]
    pub selection_participation_key: String,

    /// State-proof key, base64. Absent on keys generated by very old nodes.
    #[serde(default, rename = "state-proof-key")]
    pub state_proof_key: Option<String>,

    /// Root vote key, base64
    #[serde(rename = "vote-participation-key")]
    pub vote_participation_key: String,

    /// First round the key is valid for voting
    #[serde(rename = "vote-first-valid")]
    pub vote_first_valid: u64,

    /// Last round the key is valid for voting
    #[serde(rename = "vote-last-valid")]
    pub vote_last_valid: u64,

    /// Two-level key derivation schedule parameter
    #[serde(rename = "vote-key-dilution")]
    pub vote_key_dilution: u64,
}

impl AccountParticipation {
    /// Decoded vote key bytes.
    pub fn vote_key_bytes(&self) -> Result<Vec<u8>> {
        decode_key(&self.vote_participation_key, "vote key")
    }

    /// Decoded selection key bytes.
    pub fn selection_key_bytes(&self) -> Result<Vec<u8>> {
        decode_key(&self.selection_participation_key, "selection key")
    }

    /// Decoded state-proof key bytes, if the node reported one.
    pub fn state_proof_key_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.state_proof_key
            .as_deref()
            .map(|k| decode_key(k, "state-proof key"))
            .transpose()
    }
}

fn decode_key(encoded: &str, what: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(encoded)
        .map_err(|e| PartkeyError::InvalidKeyMaterial(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_node_response() {
        let body = r#"{
            "id": "BYKJJ2IIJXE4GZ5UQOXYIEXCVAT2KNDJ6VHXKLVPZZLJV4DNIQGA",
            "address": "TUIDKH2C7MUHZDD77MAMUREJRKNK25SYXB7OAFA6JFBB24PEL5UX4S4GUU",
            "key": {
                "selection-participation-key": "ISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+P0A=",
                "state-proof-key": "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw==",
                "vote-participation-key": "AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyA=",
                "vote-first-valid": 1000,
                "vote-last-valid": 101000,
                "vote-key-dilution": 316
            }
        }"#;

        let key: ParticipationKey = serde_json::from_str(body).unwrap();
        assert_eq!(key.key.vote_first_valid, 1000);
        assert_eq!(key.key.vote_last_valid, 101000);
        assert_eq!(key.key.vote_key_dilution, 316);
        assert_eq!(key.key.vote_key_bytes().unwrap().len(), 32);
        assert_eq!(key.key.selection_key_bytes().unwrap().len(), 32);
        assert_eq!(key.key.state_proof_key_bytes().unwrap().unwrap().len(), 64);
        assert!(key.effective_first_valid.is_none());
    }

    #[test]
    fn bad_base64_is_a_named_error() {
        let part = AccountParticipation {
            selection_participation_key: "not base64!!".to_string(),
            state_proof_key: None,
            vote_participation_key: String::new(),
            vote_first_valid: 1,
            vote_last_valid: 2,
            vote_key_dilution: 1,
        };
        assert!(matches!(
            part.selection_key_bytes(),
            Err(PartkeyError::InvalidKeyMaterial(_))
        ));
    }
}
