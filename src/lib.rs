#![forbid(unsafe_code)]

//! Core library entry point for the `kctf-gate` challenge verifier.
//!
//! The crate implements a deterministic verification pipeline: fixed 32-bit
//! mixing stages derive an immutable reference set, candidate secrets are
//! checked against it by one of three acceptance policies, and an accepted
//! secret is turned into a `kctf-jr{…}` proof token through a
//! from-first-principles SHA-256 digest engine.  Everything is pure and
//! single-threaded; the only stateful surface is the caller-held
//! [`keys::ReferenceSet`], which is immutable after derivation.

pub mod hash;
pub mod keys;
pub mod mix;
pub mod recover;
pub mod token;
pub mod verify;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use keys::{ChallengeVariant, ReferenceSet};
pub use token::{TOKEN_LEN, TOKEN_PREFIX};
pub use verify::Candidate;

/// Result type used throughout the library to surface deterministic errors.
pub type GateResult<T> = core::result::Result<T, GateError>;

/// Error enumeration for the verification core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateError {
    /// The provided variant name does not identify a shipped challenge.
    UnknownVariant,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::UnknownVariant => f.write_str("unknown challenge variant"),
        }
    }
}

impl std::error::Error for GateError {}

/// Computes the immutable reference set for a challenge variant.
///
/// Pure and deterministic: repeated calls yield bit-identical values.
pub fn derive_references(variant: ChallengeVariant) -> ReferenceSet {
    keys::derive_references(variant)
}

/// Decides whether a candidate secret matches the hidden target.
pub fn verify(references: &ReferenceSet, candidate: Candidate<'_>) -> bool {
    verify::verify(references, candidate)
}

/// Formats the proof token for an accepted secret.
pub fn emit_token(secret: Candidate<'_>) -> String {
    token::emit_token(secret)
}

/// Returns the 64-character lowercase hex digest of arbitrary input bytes.
///
/// Standalone entry point, usable independently of the verification flow.
pub fn digest(bytes: &[u8]) -> String {
    hash::digest_hex(bytes)
}
