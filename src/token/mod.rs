//! Proof-token formatting for accepted secrets.

use crate::hash;
use crate::verify::Candidate;

/// Literal prefix of every emitted token.
pub const TOKEN_PREFIX: &str = "kctf-jr{";

/// Total length of an emitted token: prefix, 64 hex characters, one brace.
pub const TOKEN_LEN: usize = TOKEN_PREFIX.len() + 64 + 1;

/// Formats the proof token for an accepted secret.
///
/// A word secret is rendered as its decimal representation (no sign, no
/// leading zeros) before digesting; a byte secret is digested as-is.  The
/// result is only meaningful for secrets that passed
/// [`crate::verify::verify`], but the template invariant holds for any
/// input: `kctf-jr{` followed by 64 lowercase hex characters and `}`.
pub fn emit_token(secret: Candidate<'_>) -> String {
    let digest = match secret {
        Candidate::Word(value) => hash::digest_hex(value.to_string().as_bytes()),
        Candidate::Bytes(bytes) => hash::digest_hex(bytes),
    };
    format!("{TOKEN_PREFIX}{digest}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_secret_digests_its_decimal_rendering() {
        assert_eq!(
            emit_token(Candidate::Word(42)),
            emit_token(Candidate::Bytes(b"42"))
        );
    }

    #[test]
    fn template_shape_holds() {
        let token = emit_token(Candidate::Bytes(b"anything"));
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.starts_with(TOKEN_PREFIX));
        assert!(token.ends_with('}'));
    }
}
