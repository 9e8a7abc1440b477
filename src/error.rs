//! Error types for the liftplan application.

use thiserror::Error;

/// Errors raised when planner input cannot be used.
///
/// These never abort anything: callers show the message and keep their
/// previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("value must be positive: {0}")]
    NonPositive(f64),

    #[error("enter a 1st attempt or a 3rd attempt to calculate from")]
    NothingToProject,

    #[error("unknown lift: {0}")]
    UnknownLift(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("unknown scoring formula: {0}")]
    UnknownFormula(String),

    #[error("unknown warm-up strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown attempt: {0}")]
    UnknownSlot(String),

    #[error("unknown display size: {0}")]
    UnknownSize(String),

    #[error("warm-up index out of range: {0}")]
    WarmupIndex(usize),

    #[error("{0}kg is more than the bar can be loaded with")]
    TooHeavy(f64),
}

/// Errors that can occur when loading a competition plan file.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("invalid plan format: {0}")]
    InvalidFormat(String),
}
