//! Accounts derived from a mnemonic or raw seed.

use crate::address::Address;
use crate::error::Result;
use crate::mnemonic::Mnemonic;
use crate::transaction::{KeyregTransaction, SignedTransaction};
use ed25519_dalek::{Signer, SigningKey};

/// A signing account, derived once at startup and held only in memory.
pub struct Account {
    signing_key: SigningKey,
    address: Address,
}

impl Account {
    /// Derive the account for a parsed mnemonic.
    #[must_use]
    pub fn from_mnemonic(mnemonic: &Mnemonic) -> Self {
        Self::from_seed(*mnemonic.key())
    }

    /// Derive the account for a raw 32-byte ed25519 seed.
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let address = Address::new(signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            address,
        }
    }

    /// The account address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// The ed25519 public key.
    #[must_use]
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a transaction. Pure and deterministic, no I/O.
    pub fn sign(&self, txn: KeyregTransaction) -> Result<SignedTransaction> {
        let signature = self.signing_key.sign(&txn.bytes_to_sign()?);
        Ok(SignedTransaction::new(signature.to_bytes(), txn))
    }
}

// Holds a private key; keep it out of logs.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_derives_known_address() {
        let seed: [u8; 32] = std::array::from_fn(|i| i as u8);
        let account = Account::from_seed(seed);
        assert_eq!(
            account.address().to_string(),
            "AOQQPP7TZYIL4HLQ3UMOOS6ATFT6JVRQTOSQ2XY53SDGIESVGG4MPFYUMQ"
        );
    }

    #[test]
    fn mnemonic_and_seed_agree() {
        let seed: [u8; 32] = std::array::from_fn(|i| i as u8);
        let mnemonic = Mnemonic::from_key(seed);
        let from_mnemonic = Account::from_mnemonic(&mnemonic);
        let from_seed = Account::from_seed(seed);
        assert_eq!(from_mnemonic.address(), from_seed.address());
    }
}
