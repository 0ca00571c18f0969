use kctf_gate::mix::{
    cipher_byte, scramble_byte, stage1, stage2, stage3, swap_adjacent_bytes, swap_nibbles,
    value_pipeline,
};
use kctf_gate::{derive_references, emit_token, verify, Candidate, ChallengeVariant, TOKEN_LEN, TOKEN_PREFIX};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stages_are_deterministic(x in any::<u32>()) {
        prop_assert_eq!(stage1(x), stage1(x));
        prop_assert_eq!(stage2(x), stage2(x));
        prop_assert_eq!(stage3(x), stage3(x));
        prop_assert_eq!(value_pipeline(x), stage3(stage2(stage1(x))));
    }

    #[test]
    fn swaps_are_involutions(x in any::<u32>()) {
        prop_assert_eq!(swap_adjacent_bytes(swap_adjacent_bytes(x)), x);
        prop_assert_eq!(swap_nibbles(swap_nibbles(x)), x);
    }

    #[test]
    fn byte_stages_stay_in_byte_range(byte in any::<u8>(), index in 0usize..256) {
        prop_assert!(scramble_byte(byte, index) <= 0xFF);
        // cipher_byte is u8 -> u8 by construction; pin determinism instead.
        prop_assert_eq!(cipher_byte(byte, index), cipher_byte(byte, index));
    }

    #[test]
    fn word_verification_is_pure(candidate in any::<u32>()) {
        let references = derive_references(ChallengeVariant::MagicNumber);
        let first = verify(&references, Candidate::Word(candidate));
        let second = verify(&references, Candidate::Word(candidate));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn array_policy_rejects_every_wrong_length(
        bytes in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(bytes.len() != 16);
        let references = derive_references(ChallengeVariant::CodeMatrix);
        prop_assert!(!verify(&references, Candidate::Bytes(&bytes)));
    }

    #[test]
    fn cipher_policy_rejects_every_wrong_length(
        bytes in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(bytes.len() != 19);
        let references = derive_references(ChallengeVariant::PositionCipher);
        prop_assert!(!verify(&references, Candidate::Bytes(&bytes)));
    }

    #[test]
    fn token_template_holds_for_byte_secrets(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let token = emit_token(Candidate::Bytes(&bytes));
        prop_assert_eq!(token.len(), TOKEN_LEN);
        prop_assert!(token.starts_with(TOKEN_PREFIX));
        prop_assert!(token.ends_with('}'), "token must end with a closing brace");
        let digest = &token[TOKEN_PREFIX.len()..token.len() - 1];
        prop_assert_eq!(digest.len(), 64);
        prop_assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn token_template_holds_for_word_secrets(value in any::<u32>()) {
        let token = emit_token(Candidate::Word(value));
        prop_assert_eq!(token.len(), TOKEN_LEN);
        prop_assert!(token.starts_with(TOKEN_PREFIX));
        prop_assert!(token.ends_with('}'), "token must end with a closing brace");
    }
}
