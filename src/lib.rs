// src/lib.rs

//! Closed vocabulary for classifying option contracts.
//!
//! Four independent enumerations, each with a fixed set of case-sensitive
//! wire tokens:
//!
//! | Enumeration       | Tokens                  |
//! |-------------------|-------------------------|
//! | `OptionType`      | `call`, `put`           |
//! | `OptionStyle`     | `american`, `european`  |
//! | `OptionExercise`  | `long`, `short`         |
//! | `OptionMoneyness` | `ITM`, `OTM`, `ATM`     |
//!
//! ```
//! use option_model::{Classification, OptionMoneyness, OptionType};
//!
//! let side: OptionType = "call".parse().unwrap();
//! assert_eq!(side.as_str(), "call");
//! assert!(OptionMoneyness::from_token("atm").is_err());
//! ```

// === 1. Internal macros (must come before the modules that use them) ===
#[macro_use]
mod macros;

// === 2. Declare all the top-level modules ===
pub mod classification;
pub mod config;
pub mod error;
pub mod record;
pub mod types;

// === 3. Re-export the public-facing components to create a clean API ===
pub use classification::{Classification, parse_token};
pub use error::{ClassificationError, ClassificationResult};
pub use record::OptionClassification;
pub use types::{OptionExercise, OptionMoneyness, OptionStyle, OptionType};
