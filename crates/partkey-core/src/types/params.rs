use crate::error::{PartkeyError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Network-suggested transaction parameters from `GET /v2/transactions/params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedParams {
    /// Consensus protocol version the network is running
    #[serde(rename = "consensus-version")]
    pub consensus_version: String,

    /// Suggested fee, in microalgos per byte. Usually 0 on an idle network,
    /// in which case the min fee applies.
    #[serde(default)]
    pub fee: u64,

    /// Genesis hash, base64
    #[serde(rename = "genesis-hash")]
    pub genesis_hash: String,

    /// Genesis ID (e.g. `testnet-v1.0`)
    #[serde(rename = "genesis-id")]
    pub genesis_id: String,

    /// Most recent round known to the node
    #[serde(rename = "last-round")]
    pub last_round: u64,

    /// Minimum flat fee in microalgos
    #[serde(rename = "min-fee")]
    pub min_fee: u64,
}

impl SuggestedParams {
    /// The flat fee to put on a transaction: the per-byte suggestion is
    /// normally 0, so the minimum fee is what actually gets charged.
    #[must_use]
    pub fn flat_fee(&self) -> u64 {
        self.fee.max(self.min_fee)
    }

    /// Decoded 32-byte genesis hash.
    pub fn genesis_hash_bytes(&self) -> Result<[u8; 32]> {
        let raw = BASE64
            .decode(&self.genesis_hash)
            .map_err(|e| PartkeyError::InvalidKeyMaterial(format!("genesis hash: {e}")))?;
        raw.try_into().map_err(|raw: Vec<u8>| {
            PartkeyError::InvalidKeyMaterial(format!(
                "genesis hash: {} bytes, expected 32",
                raw.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_node_response() {
        let body = r#"{
            "consensus-version": "https://github.com/algorandfoundation/specs/tree/abc",
            "fee": 0,
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "genesis-id": "testnet-v1.0",
            "last-round": 45000000,
            "min-fee": 1000
        }"#;

        let params: SuggestedParams = serde_json::from_str(body).unwrap();
        assert_eq!(params.flat_fee(), 1000);
        assert_eq!(params.last_round, 45_000_000);
        assert_eq!(params.genesis_hash_bytes().unwrap().len(), 32);
    }

    #[test]
    fn per_byte_fee_above_min_wins() {
        let params = SuggestedParams {
            consensus_version: String::new(),
            fee: 2000,
            genesis_hash: String::new(),
            genesis_id: String::new(),
            last_round: 1,
            min_fee: 1000,
        };
        assert_eq!(params.flat_fee(), 2000);
    }
}
