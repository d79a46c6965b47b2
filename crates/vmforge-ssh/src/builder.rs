// ABOUTME: Builder for generating SSH key pairs.
// ABOUTME: Accumulates algorithm and name, then generates on build().

use crate::error::{KeyPairError, Result};
use crate::fingerprint::compute_fingerprint;
use crate::{KeyAlgorithm, KeyPair};
use ssh_key::private::{EcdsaKeypair, KeypairData, RsaKeypair};
use ssh_key::{EcdsaCurve, LineEnding, PrivateKey};

/// Builder for [`KeyPair`] values.
///
/// Defaults to ECDSA with no name. Setters chain by value and `build`
/// consumes the builder, so each builder produces at most one key pair.
///
/// Generation is synchronous and CPU-bound (RSA in particular can take a
/// while); callers needing a deadline or parallelism run independent
/// builders on their own threads.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    algorithm: KeyAlgorithm,
    name: String,
}

impl KeyPairBuilder {
    /// Create a builder with the default configuration (ECDSA, no name).
    pub fn new() -> Self {
        Self {
            algorithm: KeyAlgorithm::Ecdsa,
            name: String::new(),
        }
    }

    /// Override the key algorithm.
    pub fn set_type(mut self, algorithm: KeyAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the identifying name rendered as the authorized_keys comment.
    ///
    /// An empty string is treated the same as never setting a name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Generate a key pair for the configured algorithm.
    ///
    /// Draws randomness from the OS CSPRNG. All serializations (PEM block,
    /// authorized_keys base line, fingerprint) are derived here, so the
    /// returned [`KeyPair`] is fully formed and its accessors never fail.
    ///
    /// # Errors
    /// Returns [`KeyPairError`] if generation or serialization fails. There
    /// is no partially built key pair on error.
    pub fn build(self) -> Result<KeyPair> {
        tracing::debug!(algorithm = %self.algorithm, "generating SSH key pair");

        let mut rng = rand::thread_rng();
        let key_data = match self.algorithm {
            KeyAlgorithm::Ecdsa => KeypairData::Ecdsa(
                EcdsaKeypair::random(&mut rng, EcdsaCurve::NistP521).map_err(|e| {
                    KeyPairError::Generate {
                        algorithm: self.algorithm,
                        source: e,
                    }
                })?,
            ),
            KeyAlgorithm::Rsa => KeypairData::Rsa(
                RsaKeypair::random(&mut rng, KeyAlgorithm::Rsa.default_bits() as usize).map_err(
                    |e| KeyPairError::Generate {
                        algorithm: self.algorithm,
                        source: e,
                    },
                )?,
            ),
        };

        // The name doubles as the key comment, so it lands both in the PEM
        // block and in the authorized_keys line.
        let private_key =
            PrivateKey::new(key_data, self.name.clone()).map_err(|e| KeyPairError::Generate {
                algorithm: self.algorithm,
                source: e,
            })?;

        let private_pem = private_key
            .to_openssh(LineEnding::LF)
            .map_err(KeyPairError::Encode)?
            .to_string();
        let public_line = private_key
            .public_key()
            .to_openssh()
            .map_err(KeyPairError::Encode)?;
        let fingerprint = compute_fingerprint(private_key.public_key())?;

        tracing::debug!(%fingerprint, "generated SSH key pair");

        Ok(KeyPair::new(
            self.algorithm,
            self.name,
            private_pem,
            public_line,
            fingerprint,
        ))
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
