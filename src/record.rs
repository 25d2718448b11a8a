// src/record.rs
//! A validated bundle of the four classifications of one option contract.
//
//! This is the boundary layer: raw tokens come in, either a complete record
//! comes out or the first bad field is reported with its raw token.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classification::Classification;
use crate::error::ClassificationResult;
use crate::types::{OptionExercise, OptionMoneyness, OptionStyle, OptionType};

/// One value of each enumeration, as observed at a single point in time.
///
/// `option_moneyness` is only meaningful for the observation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionClassification {
    pub option_type: OptionType,
    pub option_style: OptionStyle,
    pub option_exercise: OptionExercise,
    pub option_moneyness: OptionMoneyness,
}

impl OptionClassification {
    #[inline]
    pub fn new(
        option_type: OptionType,
        option_style: OptionStyle,
        option_exercise: OptionExercise,
        option_moneyness: OptionMoneyness,
    ) -> Self {
        Self {
            option_type,
            option_style,
            option_exercise,
            option_moneyness,
        }
    }

    /// Builds a record from raw tokens.
    ///
    /// Fields are checked in declaration order and the first invalid one is
    /// returned as `InvalidClassificationToken`.
    pub fn parse(
        option_type: &str,
        option_style: &str,
        option_exercise: &str,
        option_moneyness: &str,
    ) -> ClassificationResult<Self> {
        Ok(Self {
            option_type: OptionType::from_token(option_type)?,
            option_style: OptionStyle::from_token(option_style)?,
            option_exercise: OptionExercise::from_token(option_exercise)?,
            option_moneyness: OptionMoneyness::from_token(option_moneyness)?,
        })
    }
}

impl fmt::Display for OptionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.option_type, self.option_style, self.option_exercise, self.option_moneyness
        )
    }
}
