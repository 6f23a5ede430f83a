//! Property-based tests for path handling.
//!
//! Note: each path module already carries small property tests. This module
//! runs the cross-module laws with many more cases over a noisier alphabet.

use super::classify::{is_absolute, is_relative};
use super::encode::url_encode_file_path;
use super::join::{append_parts, PathValue};
use super::normalize::normalize;
use super::relative::relative_path;
use super::WikiPath;
use proptest::prelude::*;

// Strategy for raw path-like strings with every character the rules care about
fn noisy_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9./# :_-]{0,32}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

// Absolute paths below a shared top-level directory, so links never climb past it
fn wiki_path_strategy() -> impl Strategy<Value = String> {
    absolute_path_strategy().prop_map(|path| format!("/wiki{path}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(raw in noisy_path_strategy()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    // Constructing from a path's own full path yields an equal path
    #[test]
    fn reconstruction_is_stable(raw in noisy_path_strategy()) {
        let path = WikiPath::new(raw);
        prop_assert_eq!(WikiPath::new(path.full_path()), path);
    }

    // directory + file name == full path
    #[test]
    fn directory_and_name_partition_path(raw in noisy_path_strategy()) {
        let path = WikiPath::new(raw);
        let rebuilt = format!("{}{}", path.directory(), path.file_name());
        prop_assert_eq!(rebuilt.as_str(), path.full_path());
    }

    // Exactly one of absolute/relative holds
    #[test]
    fn absolute_xor_relative(raw in noisy_path_strategy()) {
        prop_assert!(is_absolute(raw.as_str()) ^ is_relative(raw.as_str()));
    }

    // The free function and the trait method agree
    #[test]
    fn append_free_function_matches_trait(
        base in absolute_path_strategy(),
        parts in prop::collection::vec(prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ], 0..6),
    ) {
        let by_trait = WikiPath::from(base.as_str()).append(&parts);
        let by_function = append_parts(&base, &parts, WikiPath::new);
        prop_assert_eq!(by_trait, by_function);
    }

    // Links between paths in one tree resolve back to their target
    #[test]
    fn relative_link_round_trip(from in wiki_path_strategy(), to in wiki_path_strategy()) {
        let link = relative_path(&from, &to, true);
        let directory = WikiPath::from(from.as_str()).directory().to_string();
        let resolved = WikiPath::from(directory.as_str()).append(link.split('/'));
        prop_assert_eq!(resolved.full_path(), to.as_str());
    }

    // Encoding never leaves a raw '#' behind
    #[test]
    fn encoded_path_has_no_anchor(raw in noisy_path_strategy()) {
        prop_assert!(!url_encode_file_path(&raw).contains('#'));
    }
}
