// src/types/option_style.rs

use crate::config::FIELD_OPTION_STYLE;

/// Exercise timing of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionStyle {
    /// Exercisable at any time up to and including expiry.
    American,
    /// Exercisable only at expiry.
    European,
}

impl_classification!(OptionStyle, FIELD_OPTION_STYLE, {
    American => "american",
    European => "european",
});
