//! Digest engine public surface.
//!
//! Wraps the from-scratch SHA-256 core in a small deterministic hashing API:
//! a [`Hash`] value type over the 32 digest bytes, a [`HexOutput`] display
//! adapter rendering lowercase hexadecimal, and a streaming [`Hasher`].
//! Digesting is a pure function of the exact input byte sequence, including
//! its length.

use core::fmt;

mod sha256;

use sha256::Sha256;

/// A finalized 256-bit digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash {
    bytes: [u8; 32],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; 32] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a digest, 64 lowercase characters.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; 32]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Streaming digest helper over the SHA-256 core.
#[derive(Clone)]
pub struct Hasher {
    engine: Sha256,
}

impl Hasher {
    /// Creates a fresh hasher.
    pub fn new() -> Self {
        Self {
            engine: Sha256::new(),
        }
    }

    /// Absorbs additional bytes into the digest state.
    pub fn update(&mut self, bytes: &[u8]) {
        self.engine.update(bytes);
    }

    /// Finalises the hasher and returns the 32-byte digest.
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.engine.finalize())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the 32-byte digest of the provided payload.
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Computes the digest of the payload and renders it as a 64-character
/// lowercase hexadecimal string.
pub fn digest_hex(input: &[u8]) -> String {
    hash(input).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_updates_match_one_shot() {
        let mut hasher = Hasher::new();
        hasher.update(b"abc");
        hasher.update(b"");
        hasher.update(b"def");
        assert_eq!(hasher.finalize(), hash(b"abcdef"));
    }

    #[test]
    fn hex_rendering_is_lowercase_and_padded() {
        let rendered = Hash::from_bytes([0x0A; 32]).to_hex().to_string();
        assert_eq!(rendered.len(), 64);
        assert_eq!(&rendered[..4], "0a0a");
    }
}
