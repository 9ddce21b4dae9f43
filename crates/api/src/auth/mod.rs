//! Admin gate: a single shared-secret comparison. No sessions or tokens are
//! issued.

pub mod password;
