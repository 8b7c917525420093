//! Property tests for constraint validation and lenient parsing.

use ethers_core::types::{H256, U256};
use proptest::prelude::*;
use ward_core::{reputation, validate, ConstraintViolation, ExpectedConfig, ProofJournal};

fn trust_root(prefix: &str) -> ExpectedConfig {
    ExpectedConfig {
        notary_fingerprint: H256::repeat_byte(0x11),
        queries_hash: H256::repeat_byte(0x22),
        url_prefix: prefix.to_string(),
        program_id: H256::repeat_byte(0x33),
    }
}

fn journal_with_url(url: &str) -> ProofJournal {
    ProofJournal {
        notary_fingerprint: H256::repeat_byte(0x11),
        method: "GET".to_string(),
        url: url.to_string(),
        timestamp: 1706720000,
        queries_hash: H256::repeat_byte(0x22),
        value: "1".to_string(),
    }
}

proptest! {
    // Any suffix appended to the exact prefix still validates
    #[test]
    fn url_with_matching_prefix_passes(suffix in "[a-z0-9/?=&.]{0,40}") {
        let prefix = "https://api.etherscan.io/api";
        let expected = trust_root(prefix);
        let journal = journal_with_url(&format!("{prefix}{suffix}"));
        prop_assert!(validate(&journal, &expected).is_ok());
    }

    // Flipping any single byte inside the prefix region must fail
    #[test]
    fn url_with_corrupted_prefix_byte_fails(pos in 0usize..28) {
        let prefix = "https://api.etherscan.io/api";
        let expected = trust_root(prefix);

        let mut corrupted = prefix.as_bytes().to_vec();
        corrupted[pos] ^= 0x01;
        let url = String::from_utf8_lossy(&corrupted).into_owned();
        // The flip may produce a byte equal to the original under lossy
        // round-trips only if the byte was non-ASCII; the prefix is ASCII,
        // so the URL is guaranteed to differ.
        let journal = journal_with_url(&url);
        prop_assert!(matches!(
            validate(&journal, &expected),
            Err(ConstraintViolation::UrlMismatch { .. })
        ), "expected UrlMismatch");
    }

    // Any strict prefix of the expected prefix is too short and must fail
    #[test]
    fn url_shorter_than_prefix_fails(len in 0usize..28) {
        let prefix = "https://api.etherscan.io/api";
        let expected = trust_root(prefix);
        let journal = journal_with_url(&prefix[..len]);
        prop_assert!(matches!(
            validate(&journal, &expected),
            Err(ConstraintViolation::UrlMismatch { .. })
        ), "expected UrlMismatch");
    }

    // Lenient parsing of a pure numeral agrees with from_dec_str
    #[test]
    fn lenient_parse_matches_strict_on_digits(n in 0u128..u128::MAX) {
        let s = n.to_string();
        prop_assert_eq!(reputation::lenient_parse(&s), U256::from(n));
    }

    // Interleaving non-digit noise never changes the parsed value
    #[test]
    fn lenient_parse_ignores_noise(n in 0u64..u64::MAX, noise in "[a-z_,. ]{1,5}") {
        let digits = n.to_string();
        let mid = digits.len() / 2;
        let noisy = format!("{}{}{}", &digits[..mid], noise, &digits[mid..]);
        prop_assert_eq!(reputation::lenient_parse(&noisy), U256::from(n));
    }

    // Journal codec round-trips for arbitrary field contents
    #[test]
    fn journal_round_trips(
        url in "https://[a-z0-9./]{1,60}",
        value in "[0-9]{1,30}",
        timestamp in 0u64..u64::MAX,
    ) {
        let journal = ProofJournal {
            notary_fingerprint: H256::repeat_byte(0x11),
            method: "GET".to_string(),
            url,
            timestamp,
            queries_hash: H256::repeat_byte(0x22),
            value,
        };
        let decoded = ProofJournal::decode(&journal.encode()).unwrap();
        prop_assert_eq!(decoded, journal);
    }
}
