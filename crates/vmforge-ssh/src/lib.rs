// ABOUTME: SSH key pair generation and encoding for vmforge provisioning.
// ABOUTME: Builder, immutable key pair value, and authorized_keys formatting.

//! # vmforge-ssh
//!
//! SSH key pair generation and encoding for vmforge provisioning.
//!
//! This crate generates RSA or ECDSA key pairs and serializes them for
//! injection into a freshly provisioned machine: the private key as an
//! OpenSSH PEM block, the public key as an authorized_keys line under a
//! chosen line-ending convention.
//!
//! ## Example
//!
//! ```no_run
//! use vmforge_ssh::{KeyAlgorithm, KeyPairBuilder, NewLine};
//!
//! let kp = KeyPairBuilder::new()
//!     .set_type(KeyAlgorithm::Rsa)
//!     .set_name("host-a")
//!     .build()
//!     .expect("key generation should succeed");
//!
//! // "rsa 4096"
//! println!("generated {} ({})", kp.description(), kp.fingerprint());
//!
//! // Write kp.private_key_pem_block() wherever the SSH client reads it,
//! // and the formatted line into the guest's authorized_keys file.
//! let line = kp.public_key_authorized_keys_format(NewLine::Unix);
//! # let _ = line;
//! ```

mod builder;
mod error;
mod fingerprint;
mod keypair;
mod newline;

// Re-export primary types and functions
pub use builder::KeyPairBuilder;
pub use error::{KeyPairError, Result};
pub use fingerprint::compute_fingerprint;
pub use keypair::{KeyAlgorithm, KeyPair};
pub use newline::NewLine;

// Re-export ssh_key types for convenience
pub use ssh_key::PublicKey;
