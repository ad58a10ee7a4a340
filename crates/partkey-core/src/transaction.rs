//! Key-registration transactions: building, canonical encoding, signing.
//!
//! Algorand's canonical encoding is msgpack with map keys in alphabetical
//! order, zero/empty fields omitted, and byte fields as msgpack bin. The
//! structs below declare their fields in wire-name order so the serializer
//! emits them canonically; the skip attributes handle omission.

use crate::address::Address;
use crate::error::{PartkeyError, Result};
use crate::hash::sha512_256;
use crate::types::{AccountParticipation, SuggestedParams};
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Rounds a transaction stays valid for after the suggested first round.
const VALIDITY_WINDOW: u64 = 1000;

/// Domain separation prefix for transaction signing and IDs.
const TX_PREFIX: &[u8] = b"TX";

/// Default key dilution for a validity range: floor(sqrt(num_rounds)).
///
/// 100000 rounds gives 316.
#[must_use]
pub const fn default_key_dilution(num_rounds: u64) -> u64 {
    if num_rounds == 0 {
        return 0;
    }
    let mut x = num_rounds;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + num_rounds / x) / 2;
    }
    x
}

/// An unsigned key-registration transaction.
///
/// Field names are the wire names, declared in alphabetical order for
/// canonical encoding. An online registration carries the participation
/// key material; an offline one omits it, telling the network to stop
/// counting the account's stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyregTransaction {
    /// Flat fee in microalgos
    #[serde(default, skip_serializing_if = "is_zero")]
    pub fee: u64,

    /// First round the transaction is valid
    #[serde(default, skip_serializing_if = "is_zero")]
    pub fv: u64,

    /// Genesis ID
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gen: String,

    /// Genesis hash
    pub gh: ByteBuf,

    /// Last round the transaction is valid
    #[serde(default, skip_serializing_if = "is_zero")]
    pub lv: u64,

    /// VRF selection key (online only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selkey: Option<ByteBuf>,

    /// Sender address bytes
    pub snd: ByteBuf,

    /// State-proof key (online only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprfkey: Option<ByteBuf>,

    /// Transaction type, always `keyreg`
    #[serde(rename = "type")]
    pub type_: String,

    /// First round the participation key is valid (online only)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub votefst: u64,

    /// Key dilution (online only)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub votekd: u64,

    /// Root vote key (online only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votekey: Option<ByteBuf>,

    /// Last round the participation key is valid (online only)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub votelst: u64,
}

impl KeyregTransaction {
    /// Build an online key registration from the node's participation key
    /// material and the network's suggested parameters.
    pub fn online(
        sender: &Address,
        part: &AccountParticipation,
        params: &SuggestedParams,
    ) -> Result<Self> {
        if part.vote_first_valid > part.vote_last_valid {
            return Err(PartkeyError::InvalidValidityWindow {
                first: part.vote_first_valid,
                last: part.vote_last_valid,
            });
        }

        let mut txn = Self::offline(sender, params)?;
        txn.selkey = Some(ByteBuf::from(part.selection_key_bytes()?));
        txn.sprfkey = part.state_proof_key_bytes()?.map(ByteBuf::from);
        txn.votefst = part.vote_first_valid;
        txn.votekd = part.vote_key_dilution;
        txn.votekey = Some(ByteBuf::from(part.vote_key_bytes()?));
        txn.votelst = part.vote_last_valid;
        Ok(txn)
    }

    /// Build an offline key registration, which deregisters the account
    /// from consensus.
    pub fn offline(sender: &Address, params: &SuggestedParams) -> Result<Self> {
        let first = params.last_round;
        Ok(Self {
            fee: params.flat_fee(),
            fv: first,
            gen: params.genesis_id.clone(),
            gh: ByteBuf::from(params.genesis_hash_bytes()?.to_vec()),
            lv: first + VALIDITY_WINDOW,
            selkey: None,
            snd: ByteBuf::from(sender.as_bytes().to_vec()),
            sprfkey: None,
            type_: "keyreg".to_string(),
            votefst: 0,
            votekd: 0,
            votekey: None,
            votelst: 0,
        })
    }

    /// Canonical msgpack encoding of the unsigned transaction.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// The bytes the sender actually signs: `"TX"` followed by the
    /// canonical encoding.
    pub fn bytes_to_sign(&self) -> Result<Vec<u8>> {
        let encoded = self.encode()?;
        let mut out = Vec::with_capacity(TX_PREFIX.len() + encoded.len());
        out.extend_from_slice(TX_PREFIX);
        out.extend_from_slice(&encoded);
        Ok(out)
    }

    /// The transaction ID: base32 of SHA-512/256 over the signed bytes.
    pub fn id(&self) -> Result<String> {
        Ok(BASE32_NOPAD.encode(&sha512_256(&self.bytes_to_sign()?)))
    }
}

/// A signed transaction ready for `POST /v2/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// ed25519 signature over the transaction's signing bytes
    pub sig: ByteBuf,

    /// The signed transaction body
    pub txn: KeyregTransaction,
}

impl SignedTransaction {
    /// Wrap a transaction with its signature.
    #[must_use]
    pub fn new(signature: [u8; 64], txn: KeyregTransaction) -> Self {
        Self {
            sig: ByteBuf::from(signature.to_vec()),
            txn,
        }
    }

    /// The raw signature bytes.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.sig
    }

    /// Canonical msgpack encoding, the wire form the node accepts.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &u64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    fn fixture_part() -> AccountParticipation {
        AccountParticipation {
            selection_participation_key: "ISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+P0A=".into(),
            state_proof_key: Some(
                "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw=="
                    .into(),
            ),
            vote_participation_key: "AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyA=".into(),
            vote_first_valid: 1000,
            vote_last_valid: 101_000,
            vote_key_dilution: 316,
        }
    }

    fn fixture_params() -> SuggestedParams {
        SuggestedParams {
            consensus_version: "future".into(),
            fee: 0,
            // bytes 0x41..=0x60, chosen to never collide with msgpack
            // fixstr key headers in the ordering test below
            genesis_hash: "QUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVpbXF1eX2A=".into(),
            genesis_id: "testnet-v1.0".into(),
            last_round: 5000,
            min_fee: 1000,
        }
    }

    fn fixture_account() -> Account {
        Account::from_seed(std::array::from_fn(|i| i as u8))
    }

    #[test]
    fn dilution_is_floor_sqrt() {
        assert_eq!(default_key_dilution(100_000), 316);
        assert_eq!(default_key_dilution(0), 0);
        assert_eq!(default_key_dilution(1), 1);
        assert_eq!(default_key_dilution(9), 3);
        assert_eq!(default_key_dilution(10), 3);
    }

    #[test]
    fn online_txn_carries_key_validity_range() {
        let account = fixture_account();
        let txn =
            KeyregTransaction::online(account.address(), &fixture_part(), &fixture_params())
                .unwrap();

        // Decode the canonical bytes and check the fields survived.
        let decoded: KeyregTransaction = rmp_serde::from_slice(&txn.encode().unwrap()).unwrap();
        assert_eq!(decoded.votefst, 1000);
        assert_eq!(decoded.votelst, 101_000);
        assert_eq!(decoded.votekd, 316);
        assert_eq!(decoded.type_, "keyreg");
        assert_eq!(decoded.fee, 1000);
        assert_eq!(decoded.fv, 5000);
        assert_eq!(decoded.lv, 6000);
        assert_eq!(decoded.snd.as_ref(), account.address().as_bytes());
        assert_eq!(decoded.votekey.unwrap().len(), 32);
        assert_eq!(decoded.selkey.unwrap().len(), 32);
        assert_eq!(decoded.sprfkey.unwrap().len(), 64);
    }

    #[test]
    fn online_encoding_is_canonical() {
        let account = fixture_account();
        let txn =
            KeyregTransaction::online(account.address(), &fixture_part(), &fixture_params())
                .unwrap();
        let bytes = txn.encode().unwrap();

        // 13-entry map header.
        assert_eq!(bytes[0], 0x8D);

        // Map keys must appear in alphabetical order. Search for each key's
        // fixstr header; the fixtures keep 0xa2..=0xa7 out of the binary
        // payloads, so the positions are unambiguous.
        let keys: [&[u8]; 13] = [
            b"\xa3fee",
            b"\xa2fv",
            b"\xa3gen",
            b"\xa2gh",
            b"\xa2lv",
            b"\xa6selkey",
            b"\xa3snd",
            b"\xa7sprfkey",
            b"\xa4type",
            b"\xa7votefst",
            b"\xa6votekd",
            b"\xa7votekey",
            b"\xa7votelst",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| {
                bytes
                    .windows(k.len())
                    .position(|w| w == *k)
                    .unwrap_or_else(|| panic!("missing key {}", String::from_utf8_lossy(k)))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn offline_txn_omits_participation_fields() {
        let account = fixture_account();
        let txn = KeyregTransaction::offline(account.address(), &fixture_params()).unwrap();
        let bytes = txn.encode().unwrap();

        // fee, fv, gen, gh, lv, snd, type only.
        assert_eq!(bytes[0], 0x87);
        assert!(bytes.windows(8).all(|w| w != b"\xa7votekey".as_slice()));

        let decoded: KeyregTransaction = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded.votekey, None);
        assert_eq!(decoded.votefst, 0);
        assert_eq!(decoded.type_, "keyreg");
    }

    #[test]
    fn signature_verifies_against_public_key() {
        let account = fixture_account();
        let txn =
            KeyregTransaction::online(account.address(), &fixture_part(), &fixture_params())
                .unwrap();
        let to_sign = txn.bytes_to_sign().unwrap();
        let signed = account.sign(txn).unwrap();

        let key = VerifyingKey::from_bytes(&account.public_key()).unwrap();
        let sig = Signature::from_bytes(signed.signature().try_into().unwrap());
        assert!(key.verify(&to_sign, &sig).is_ok());
    }

    #[test]
    fn signed_txn_encodes_sig_then_txn() {
        let account = fixture_account();
        let txn = KeyregTransaction::offline(account.address(), &fixture_params()).unwrap();
        let signed = account.sign(txn).unwrap();
        let bytes = signed.encode().unwrap();

        assert_eq!(bytes[0], 0x82);
        let sig_pos = bytes.windows(4).position(|w| w == b"\xa3sig".as_slice()).unwrap();
        let txn_pos = bytes.windows(4).position(|w| w == b"\xa3txn".as_slice()).unwrap();
        assert!(sig_pos < txn_pos);
    }

    #[test]
    fn txid_is_52_chars() {
        let account = fixture_account();
        let txn = KeyregTransaction::offline(account.address(), &fixture_params()).unwrap();
        let id = txn.id().unwrap();
        assert_eq!(id.len(), 52);
        assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn rejects_inverted_validity_window() {
        let account = fixture_account();
        let mut part = fixture_part();
        part.vote_first_valid = 200;
        part.vote_last_valid = 100;
        assert!(matches!(
            KeyregTransaction::online(account.address(), &part, &fixture_params()),
            Err(PartkeyError::InvalidValidityWindow {
                first: 200,
                last: 100
            })
        ));
    }
}
