//! Password hashing and verification.
//!
//! Digests are Argon2id PHC strings, so each one carries its own salt and cost
//! parameters. A fresh random salt is generated for every hash, which means hashing
//! the same password twice yields two different digests; compare with `verify`,
//! never by string equality.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::internal::InternalError;

const DECOY_SALT: &[u8] = b"no-such-user-salt";

#[derive(Clone)]
pub struct CredentialHandler {
    argon2: Argon2<'static>,
}

impl CredentialHandler {
    /// Creates a handler with the given work factor.
    ///
    /// # Arguments
    /// - `memory_cost` - Memory size in KiB
    /// - `iterations` - Number of passes over memory
    ///
    /// # Returns
    /// - `Ok(CredentialHandler)` - Handler using Argon2id v19 with one lane
    /// - `Err(argon2::Error)` - Parameters outside Argon2's accepted ranges
    pub fn new(memory_cost: u32, iterations: u32) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_cost, iterations, Params::DEFAULT_P_COST, None)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes `plaintext` with a freshly generated salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-formatted digest
    /// - `Err(InternalError::PasswordHash)` - Argon2 could not produce a digest
    pub fn hash(&self, plaintext: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut OsRng);

        let digest = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(InternalError::PasswordHash)?;

        Ok(digest.to_string())
    }

    /// Checks `plaintext` against a stored digest.
    ///
    /// Uses the salt and parameters embedded in `digest`, not this handler's own work
    /// factor, so digests created under older settings keep verifying. A digest that
    /// cannot be parsed verifies as `false`.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Rejects `plaintext` for a user that does not exist.
    ///
    /// Runs one Argon2 derivation with this handler's work factor so the rejection
    /// takes as long as checking a password against a current digest.
    pub fn verify_missing(&self, plaintext: &str) -> bool {
        let mut output = [0u8; Params::DEFAULT_OUTPUT_LEN];
        let _ = self
            .argon2
            .hash_password_into(plaintext.as_bytes(), DECOY_SALT, &mut output);

        false
    }
}
