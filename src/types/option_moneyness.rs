// src/types/option_moneyness.rs

use crate::config::FIELD_OPTION_MONEYNESS;

/// Where the strike sits relative to the underlying price at one observation.
///
/// Moneyness is not a property of the contract itself. It changes with the
/// underlying and is computed by whoever observes the market; this type only
/// carries the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionMoneyness {
    /// In the money (ITM): exercising now would be profitable.
    InTheMoney,
    /// Out of the money (OTM): exercising now would be unprofitable.
    OutOfTheMoney,
    /// At the money (ATM): strike is at the underlying price.
    AtTheMoney,
}

impl_classification!(OptionMoneyness, FIELD_OPTION_MONEYNESS, {
    InTheMoney => "ITM",
    OutOfTheMoney => "OTM",
    AtTheMoney => "ATM",
});
