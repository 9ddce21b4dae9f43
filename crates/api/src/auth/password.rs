//! Shared-secret admin password check.
//!
//! Both sides are reduced to SHA-256 digests before comparison so the time
//! taken does not depend on how long the candidate is or where it first
//! differs from the configured password.

use sha2::{Digest, Sha256};

/// Returns `true` if `candidate` equals the configured admin password.
pub fn verify_admin_password(candidate: &str, configured: &str) -> bool {
    let a = Sha256::digest(candidate.as_bytes());
    let b = Sha256::digest(configured.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
