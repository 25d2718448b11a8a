// src/types/mod.rs
// -----------------
pub mod option_exercise;
pub mod option_moneyness;
pub mod option_style;
pub mod option_type;

// Re-export the enums so callers don't have to dive
// another level down the path.
pub use option_exercise::OptionExercise;
pub use option_moneyness::OptionMoneyness;
pub use option_style::OptionStyle;
pub use option_type::OptionType;
