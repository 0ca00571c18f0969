//! Secret recovery for the shipped challenge variants.
//!
//! The value stages are bijective over `u32` (swaps and XORs are
//! involutions, rotations are invertible, the multiplier is odd), so the
//! magic number falls out of a closed-form inversion of the pipeline.  The
//! byte variants are recovered per position by searching the printable ASCII
//! range, mirroring how the challenge secrets were generated.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::keys::{derive_references, ChallengeVariant, ReferenceSet};
use crate::mix::{cipher_byte, scramble_byte, swap_adjacent_bytes, swap_nibbles};

/// Multiplicative inverse of the stage-3 multiplier `0x4141_4141` mod 2^32.
const STAGE3_MUL_INVERSE: u32 = 0xC4EC_4EC1;

/// Printable ASCII range searched for byte-variant secrets.
const PRINTABLE: core::ops::Range<u8> = 0x20..0x7F;

/// Error surfaced when a target table entry has no printable preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoverError {
    /// No byte in the printable ASCII range maps onto the table entry.
    NoPrintableByte {
        /// Zero-based position of the unmatched table entry.
        position: usize,
    },
}

impl fmt::Display for RecoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoverError::NoPrintableByte { position } => {
                write!(f, "no printable byte maps onto target position {position}")
            }
        }
    }
}

impl std::error::Error for RecoverError {}

/// Undoes [`crate::mix::stage1`].
const fn stage1_inverse(x: u32) -> u32 {
    let x = x.rotate_right(13);
    let x = x ^ 0xDEAD_BEEF;
    swap_adjacent_bytes(x)
}

/// Undoes [`crate::mix::stage2`].
const fn stage2_inverse(x: u32) -> u32 {
    let x = x ^ 0xCAFE_BABE;
    let x = swap_nibbles(x);
    x.wrapping_sub(0x1337_1337)
}

/// Undoes [`crate::mix::stage3`].
const fn stage3_inverse(x: u32) -> u32 {
    let x = x ^ 0x5A5A_5A5A;
    let x = x.wrapping_mul(STAGE3_MUL_INVERSE);
    x.rotate_left(7)
}

/// Recovers the unique 32-bit value accepted by the value pipeline.
///
/// The acceptance rule `pipeline(x) ^ key == c1 ^ c2` pins `pipeline(x)` to
/// a single word; running the inverse stages backwards yields the only
/// preimage.
pub fn recover_magic_number() -> u32 {
    let (derived_key, c1, c2) = match derive_references(ChallengeVariant::MagicNumber) {
        ReferenceSet::XorEquality {
            derived_key,
            c1,
            c2,
        } => (derived_key, c1, c2),
        _ => unreachable!("magic-number variant derives xor-equality references"),
    };
    let staged = c1 ^ c2 ^ derived_key;
    stage1_inverse(stage2_inverse(stage3_inverse(staged)))
}

fn search_printable<F>(position: usize, matches: F) -> Result<u8, RecoverError>
where
    F: Fn(u8) -> bool,
{
    PRINTABLE
        .clone()
        .find(|&byte| matches(byte))
        .ok_or(RecoverError::NoPrintableByte { position })
}

/// Recovers the printable 16-byte secret of the array pipeline.
pub fn recover_code_matrix() -> Result<[u8; 16], RecoverError> {
    let target = match derive_references(ChallengeVariant::CodeMatrix) {
        ReferenceSet::ArrayEquality { target } => target,
        _ => unreachable!("code-matrix variant derives array-equality references"),
    };
    let mut secret = [0u8; 16];
    for (index, slot) in secret.iter_mut().enumerate() {
        *slot = search_printable(index, |byte| scramble_byte(byte, index) == target[index])?;
    }
    Ok(secret)
}

/// Recovers the printable 19-byte secret of the position cipher.
pub fn recover_position_cipher() -> Result<[u8; 19], RecoverError> {
    let target = match derive_references(ChallengeVariant::PositionCipher) {
        ReferenceSet::CipherEquality { target } => target,
        _ => unreachable!("position-cipher variant derives cipher-equality references"),
    };
    let mut secret = [0u8; 19];
    for (index, slot) in secret.iter_mut().enumerate() {
        *slot = search_printable(index, |byte| cipher_byte(byte, index) == target[index])?;
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::{stage1, stage2, stage3};

    #[test]
    fn stage_inverses_undo_stages() {
        for x in [0u32, 1, 0x1234_5678, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(stage1_inverse(stage1(x)), x);
            assert_eq!(stage2_inverse(stage2(x)), x);
            assert_eq!(stage3_inverse(stage3(x)), x);
        }
    }

    #[test]
    fn stage3_multiplier_inverse_is_correct() {
        assert_eq!(0x4141_4141u32.wrapping_mul(STAGE3_MUL_INVERSE), 1);
    }
}
