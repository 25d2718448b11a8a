// src/classification.rs

//! The shared contract of every closed option enumeration.
//!
//! Each enumeration is a fixed set of variants, and each variant owns exactly
//! one canonical wire token. Decoding is an exact, case-sensitive lookup in
//! that set: no trimming, no case folding, no aliases.

use crate::config::MAX_LOGGED_TOKEN_LEN;
use crate::error::{ClassificationError, ClassificationResult};

/// A closed, token-backed classification of an option contract.
pub trait Classification: Copy + Eq + Sized + 'static {
    /// Field name reported when a token for this enumeration is rejected.
    const FIELD: &'static str;

    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// The canonical wire token of this member.
    fn as_token(&self) -> &'static str;

    /// Decode a raw token. Only an exact match of a canonical token is accepted.
    fn from_token(token: &str) -> ClassificationResult<Self> {
        match Self::VARIANTS.iter().find(|v| v.as_token() == token) {
            Some(variant) => Ok(*variant),
            None => {
                log::debug!(
                    "rejected {} token {:?}",
                    Self::FIELD,
                    truncate_for_log(token)
                );
                Err(ClassificationError::invalid_token(Self::FIELD, token))
            }
        }
    }

    /// All legal tokens, in declaration order.
    fn tokens() -> impl Iterator<Item = &'static str> {
        Self::VARIANTS.iter().map(|v| v.as_token())
    }
}

/// Decode `raw` as any classification, e.g. `parse_token::<OptionType>("put")`.
pub fn parse_token<T: Classification>(raw: &str) -> ClassificationResult<T> {
    T::from_token(raw)
}

fn truncate_for_log(token: &str) -> &str {
    match token.char_indices().nth(MAX_LOGGED_TOKEN_LEN) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OptionExercise, OptionMoneyness, OptionStyle, OptionType};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse_token_dispatches_on_target_type() {
        init_logger();
        assert_eq!(parse_token::<OptionType>("put").unwrap(), OptionType::Put);
        assert_eq!(
            parse_token::<OptionStyle>("american").unwrap(),
            OptionStyle::American
        );
        // the same token is legal for one enumeration and not another
        let err = parse_token::<OptionStyle>("put").unwrap_err();
        assert_eq!(err.field(), "option_style");
    }

    #[test]
    fn exact_match_only() {
        init_logger();
        for raw in ["CALL", "Call", " call", "call ", "", "c", "C"] {
            let err = OptionType::from_token(raw).unwrap_err();
            assert_eq!(err.token(), raw, "token must be reported verbatim");
        }
    }

    #[test]
    fn variant_counts_are_fixed() {
        assert_eq!(OptionType::VARIANTS.len(), 2);
        assert_eq!(OptionStyle::VARIANTS.len(), 2);
        assert_eq!(OptionExercise::VARIANTS.len(), 2);
        assert_eq!(OptionMoneyness::VARIANTS.len(), 3);
    }

    #[test]
    fn long_rejected_tokens_are_truncated_in_logs_only() {
        init_logger();
        let raw = "x".repeat(MAX_LOGGED_TOKEN_LEN * 4);
        assert_eq!(truncate_for_log(&raw).len(), MAX_LOGGED_TOKEN_LEN);

        let err = OptionMoneyness::from_token(&raw).unwrap_err();
        assert_eq!(err.token().len(), MAX_LOGGED_TOKEN_LEN * 4);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let raw = "€".repeat(MAX_LOGGED_TOKEN_LEN + 1);
        let cut = truncate_for_log(&raw);
        assert_eq!(cut.chars().count(), MAX_LOGGED_TOKEN_LEN);
        assert_eq!(truncate_for_log("ITM"), "ITM");
    }
}
