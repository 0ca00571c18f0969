//! Acceptance policies over a precomputed [`ReferenceSet`].
//!
//! Verification is a pure function of the reference set and the candidate.
//! Every policy is all-or-nothing: there is no partial-match signal, and a
//! candidate of the wrong shape (wrong length, or a byte sequence where a
//! word is expected) is an ordinary rejection rather than a fault.

use crate::keys::ReferenceSet;
use crate::mix::{cipher_byte, scramble_byte, value_pipeline};

/// A transient secret offered for verification, discarded after comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// A 32-bit value for the value pipeline.
    Word(u32),
    /// A byte sequence for the array and cipher pipelines.
    Bytes(&'a [u8]),
}

/// Decides whether `candidate` matches the hidden target described by
/// `references`.
pub fn verify(references: &ReferenceSet, candidate: Candidate<'_>) -> bool {
    match (references, candidate) {
        (
            ReferenceSet::XorEquality {
                derived_key,
                c1,
                c2,
            },
            Candidate::Word(word),
        ) => value_pipeline(word) ^ derived_key == c1 ^ c2,
        (ReferenceSet::ArrayEquality { target }, Candidate::Bytes(bytes)) => {
            if bytes.len() != target.len() {
                return false;
            }
            bytes
                .iter()
                .enumerate()
                .all(|(index, &byte)| scramble_byte(byte, index) == target[index])
        }
        (ReferenceSet::CipherEquality { target }, Candidate::Bytes(bytes)) => {
            if bytes.len() != target.len() {
                return false;
            }
            bytes
                .iter()
                .enumerate()
                .all(|(index, &byte)| cipher_byte(byte, index) == target[index])
        }
        // Shape mismatch between policy and candidate.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{derive_references, ChallengeVariant};

    #[test]
    fn wrong_shape_is_rejected() {
        let value_refs = derive_references(ChallengeVariant::MagicNumber);
        let array_refs = derive_references(ChallengeVariant::CodeMatrix);
        assert!(!verify(&value_refs, Candidate::Bytes(b"440600951")));
        assert!(!verify(&array_refs, Candidate::Word(440_600_951)));
    }

    #[test]
    fn array_policy_gates_on_length() {
        let refs = derive_references(ChallengeVariant::CodeMatrix);
        assert!(!verify(&refs, Candidate::Bytes(b"")));
        assert!(!verify(&refs, Candidate::Bytes(b"short")));
        assert!(!verify(&refs, Candidate::Bytes(&[b'A'; 17])));
    }
}
