// src/config.rs

//! A centralized place for the fixed names and limits of the classification model.

// --- Field names ---
// Used as serde keys on `OptionClassification` and as the `field` of a rejected token.
pub const FIELD_OPTION_TYPE: &str = "option_type";
pub const FIELD_OPTION_STYLE: &str = "option_style";
pub const FIELD_OPTION_EXERCISE: &str = "option_exercise";
pub const FIELD_OPTION_MONEYNESS: &str = "option_moneyness";

// --- Logging ---
// Rejected tokens are cut to this many chars in log lines. Errors keep the full token.
pub const MAX_LOGGED_TOKEN_LEN: usize = 64;
