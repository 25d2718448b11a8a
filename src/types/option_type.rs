// src/types/option_type.rs

use crate::config::FIELD_OPTION_TYPE;

/// Represents the side of the option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl_classification!(OptionType, FIELD_OPTION_TYPE, {
    Call => "call",
    Put => "put",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Classification;
    use crate::error::ClassificationError;

    #[test]
    fn decode_call_and_encode_back() {
        let call: OptionType = "call".parse().unwrap();
        assert_eq!(call, OptionType::Call);
        assert_eq!(call.to_string(), "call");
        assert_eq!(call.as_str(), "call");
    }

    #[test]
    fn token_set_is_exactly_call_put() {
        let tokens: Vec<_> = OptionType::tokens().collect();
        assert_eq!(tokens, vec!["call", "put"]);
    }

    #[test]
    fn uppercase_is_rejected() {
        let err = "CALL".parse::<OptionType>().unwrap_err();
        assert_eq!(
            err,
            ClassificationError::InvalidClassificationToken {
                field: "option_type",
                token: "CALL".to_string(),
            }
        );
    }

    #[test]
    fn conversions_agree_with_from_str() {
        assert_eq!(OptionType::try_from("put").unwrap(), OptionType::Put);
        assert_eq!(
            OptionType::try_from(String::from("put")).unwrap(),
            OptionType::Put
        );
        let token: &'static str = OptionType::Put.into();
        assert_eq!(token, "put");
    }

    #[test]
    fn exhaustive_match_over_variants() {
        // consumers branch on the enum, not on strings
        let rights: Vec<&str> = OptionType::VARIANTS
            .iter()
            .map(|t| match t {
                OptionType::Call => "buy",
                OptionType::Put => "sell",
            })
            .collect();
        assert_eq!(rights, vec!["buy", "sell"]);
    }
}
