//! Identifier naming
//!
//! Turns JSON keys like `head_block_id` into struct field identifiers like
//! `HeadBlockId`.

use crate::types::UnderscorePolicy;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static UNDERSCORE_LOWER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_([a-z])").unwrap()
});

/// Convert a JSON key to a capitalized camel-case identifier.
///
/// The first character is uppercased, then every `_x` (with `x` a lowercase ASCII
/// letter) becomes `X`. All other characters pass through unchanged, so keys that are
/// already in identifier form map to themselves.
pub fn to_identifier(key: &str, policy: UnderscorePolicy) -> String {
    let capitalized = capitalize(key);
    let camel = UNDERSCORE_LOWER_REGEX.replace_all(&capitalized, |caps: &Captures| {
        caps[1].to_ascii_uppercase()
    });

    match policy {
        UnderscorePolicy::Keep => camel.into_owned(),
        UnderscorePolicy::Drop => camel.replace('_', ""),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(key: &str) -> String {
        to_identifier(key, UnderscorePolicy::Keep)
    }

    #[test]
    fn test_snake_case_keys() {
        assert_eq!(keep("head_block_id"), "HeadBlockId");
        assert_eq!(keep("head_block_number"), "HeadBlockNumber");
        assert_eq!(keep("can_vote"), "CanVote");
    }

    #[test]
    fn test_no_underscores_only_capitalizes() {
        assert_eq!(keep("name"), "Name");
        assert_eq!(keep("x"), "X");
        assert_eq!(keep(""), "");
    }

    #[test]
    fn test_existing_identifiers_are_fixed_points() {
        for key in ["Name", "HeadBlockId", "ID"] {
            assert_eq!(keep(key), key);
        }
    }

    #[test]
    fn test_uppercase_letters_pass_through() {
        assert_eq!(keep("headBlock_id"), "HeadBlockId");
        assert_eq!(keep("api_URL"), "Api_URL");
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(keep("_id"), "Id");
    }

    #[test]
    fn test_orphan_underscores_kept() {
        assert_eq!(keep("a__b"), "A_B");
        assert_eq!(keep("total_"), "Total_");
        assert_eq!(keep("block_2"), "Block_2");
    }

    #[test]
    fn test_orphan_underscores_dropped() {
        let dropped = |key: &str| to_identifier(key, UnderscorePolicy::Drop);
        assert_eq!(dropped("a__b"), "AB");
        assert_eq!(dropped("total_"), "Total");
        assert_eq!(dropped("block_2"), "Block2");
        assert_eq!(dropped("head_block_id"), "HeadBlockId");
    }

    #[test]
    fn test_non_ascii_first_character() {
        assert_eq!(keep("étage_haut"), "ÉtageHaut");
    }
}
