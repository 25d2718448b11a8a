// src/types/option_exercise.rs

use crate::config::FIELD_OPTION_EXERCISE;

/// The holder's position in the contract.
///
/// `Long` holds the right conferred by the option; `Short` wrote the option
/// and bears the obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionExercise {
    Long,
    Short,
}

impl_classification!(OptionExercise, FIELD_OPTION_EXERCISE, {
    Long => "long",
    Short => "short",
});
