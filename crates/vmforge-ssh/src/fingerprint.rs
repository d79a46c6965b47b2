// ABOUTME: SSH public key fingerprint computation.
// ABOUTME: Computes SHA256 fingerprints over the SSH wire-format key encoding.

use crate::error::{KeyPairError, Result};
use sha2::{Digest, Sha256};
use ssh_key::PublicKey;

/// Compute the SHA256 fingerprint of a public key (hex encoded, lowercase).
///
/// The hash is taken over the key's SSH wire-format encoding, i.e. the same
/// bytes that appear base64-encoded in an authorized_keys line. Works for any
/// algorithm the crate generates.
///
/// # Returns
/// A 64-character lowercase hex string representing the SHA256 hash.
///
/// # Errors
/// Returns `KeyPairError::Encode` if the key cannot be wire-encoded.
pub fn compute_fingerprint(public_key: &PublicKey) -> Result<String> {
    let wire_data = public_key.to_bytes().map_err(KeyPairError::Encode)?;

    let mut hasher = Sha256::new();
    hasher.update(&wire_data);
    let hash = hasher.finalize();

    Ok(hex::encode(hash))
}
