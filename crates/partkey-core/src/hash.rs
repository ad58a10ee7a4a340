//! SHA-512/256, the hash behind address checksums, mnemonic checksums,
//! and transaction IDs.

use sha2::{Digest, Sha512_256};

pub(crate) fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha512_256::digest(data));
    out
}
