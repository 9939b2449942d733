//! One-way password hashing.
//!
//! Credentials are Argon2id PHC strings with a fresh random salt per hash.
//! Verification recomputes the hash with the stored salt and parameters and
//! compares the raw output in constant time, so the comparison cost does not
//! depend on where the first differing byte sits.

use crate::{HasherParams, Result as ServiceErrorResult, ServiceError};

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use subtle::ConstantTimeEq;

/// Plaintext behind the decoy credential
const DECOY_PLAINTEXT: &str = "decoy-credential-never-assigned";

#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    decoy: Arc<str>,
}

impl CredentialHasher {
    /// Build a hasher with the given cost and pre-compute its decoy credential
    #[track_caller]
    pub fn new(params: HasherParams) -> ServiceErrorResult<Self> {
        let argon2_params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| ServiceError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

        let mut hasher = Self {
            argon2,
            decoy: Arc::from(""),
        };
        hasher.decoy = Arc::from(hasher.hash(DECOY_PLAINTEXT)?);

        Ok(hasher)
    }

    /// Hash a plaintext password into a salted PHC string
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> ServiceErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored credential.
    ///
    /// Malformed credentials verify as `false`.
    pub fn verify(&self, plaintext: &str, credential: &str) -> bool {
        self.recompute_and_compare(plaintext, credential)
            .unwrap_or(false)
    }

    /// Spend one full verification without a real credential.
    ///
    /// Used when a login names an unknown email so that path costs the same
    /// as a wrong password.
    pub fn verify_decoy(&self, plaintext: &str) -> bool {
        std::hint::black_box(self.verify(plaintext, &self.decoy));
        false
    }

    fn recompute_and_compare(&self, plaintext: &str, credential: &str) -> Option<bool> {
        let parsed = PasswordHash::new(credential).ok()?;
        let expected = parsed.hash?;
        let salt = parsed.salt?;
        let params = Params::try_from(&parsed).ok()?;

        let recomputed = self
            .argon2
            .hash_password_customized(
                plaintext.as_bytes(),
                Some(parsed.algorithm),
                parsed.version,
                params,
                salt,
            )
            .ok()?
            .hash?;

        Some(expected.as_bytes().ct_eq(recomputed.as_bytes()).into())
    }
}
