// ABOUTME: Error types for SSH key pair construction using thiserror.
// ABOUTME: Raised only by KeyPairBuilder::build; all KeyPair accessors are total.

use thiserror::Error;

/// Errors that can occur while building a key pair.
///
/// Only [`crate::KeyPairBuilder::build`] is fallible. A failed build yields
/// an error and no key pair, never a partially initialized value.
#[derive(Error, Debug)]
pub enum KeyPairError {
    /// The cryptographic primitive or random source failed during generation.
    #[error("failed to generate {algorithm} key pair: {source}")]
    Generate {
        algorithm: crate::KeyAlgorithm,
        #[source]
        source: ssh_key::Error,
    },

    /// Serializing the generated key material failed.
    #[error("failed to encode key pair: {0}")]
    Encode(#[source] ssh_key::Error),
}

/// Result type alias using KeyPairError.
pub type Result<T> = std::result::Result<T, KeyPairError>;
