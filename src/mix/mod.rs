//! 32-bit mixing primitives and the named stage pipeline.
//!
//! Every function in this module is a pure, total transform over `u32` (or a
//! byte plus its position) with silent wraparound arithmetic.  The stage
//! compositions and their constants are contractual: the verification
//! references in [`crate::keys`] are derived through these exact stages, so a
//! different rotation amount or a reordered primitive changes every accepted
//! candidate with no diagnostic.

/// Swaps adjacent bytes within each 16-bit half of the word.
///
/// `0xAABBCCDD` becomes `0xBBAADDCC`.
#[inline]
pub const fn swap_adjacent_bytes(x: u32) -> u32 {
    ((x & 0xFF00_FF00) >> 8) | ((x & 0x00FF_00FF) << 8)
}

/// Swaps the high and low nibble of every byte in the word.
///
/// `0xA1B2C3D4` becomes `0x1A2B3C4D`.
#[inline]
pub const fn swap_nibbles(x: u32) -> u32 {
    ((x & 0xF0F0_F0F0) >> 4) | ((x & 0x0F0F_0F0F) << 4)
}

/// First value stage: byte swap, XOR diffusion, rotate left by 13.
pub const fn stage1(x: u32) -> u32 {
    let x = swap_adjacent_bytes(x);
    let x = x ^ 0xDEAD_BEEF;
    x.rotate_left(13)
}

/// Second value stage: additive offset, nibble swap, XOR diffusion.
pub const fn stage2(x: u32) -> u32 {
    let x = x.wrapping_add(0x1337_1337);
    let x = swap_nibbles(x);
    x ^ 0xCAFE_BABE
}

/// Third value stage: rotate right by 7, multiplicative diffusion, XOR.
///
/// The multiplier is odd, so the stage stays bijective over `u32`.
pub const fn stage3(x: u32) -> u32 {
    let x = x.rotate_right(7);
    let x = x.wrapping_mul(0x4141_4141);
    x ^ 0x5A5A_5A5A
}

/// Applies the full value pipeline `stage1 -> stage2 -> stage3`.
pub const fn value_pipeline(x: u32) -> u32 {
    stage3(stage2(stage1(x)))
}

/// Per-byte stage of the array pipeline.
///
/// The byte is widened to a `u32` accumulator before mixing, and the rotate
/// is scoped to the accumulator's low bits rather than being a clean 8-bit
/// rotate: `v >> 7` observes the carry bits that `v * 7 + 13` pushed above
/// bit 7.  This asymmetry is part of the contract and must not be replaced
/// with `u8::rotate_left`.
pub fn scramble_byte(byte: u8, index: usize) -> u32 {
    let mut v = byte as u32;
    v = v.wrapping_mul(7).wrapping_add(13);
    v ^= (index as u32).wrapping_mul(3).wrapping_add(5);
    v = (v << 1) | (v >> 7);
    v & 0xFF
}

/// Per-byte stage of the position cipher.
///
/// The transform cycles through three keyed sub-stages by position; all
/// arithmetic wraps in `u8`.
pub fn cipher_byte(byte: u8, index: usize) -> u8 {
    match index % 3 {
        0 => (byte ^ 0x42).wrapping_add(3),
        1 => (byte ^ 0x37).wrapping_sub(5),
        _ => (byte ^ 0x55).wrapping_add(7),
    }
}
