use thiserror::Error;

use crate::types::Type;

/// Contract violations when naming types or building a [`TypeSet`](crate::TypeSet)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unknown type: {0}")]
    Unknown(String),

    #[error("A type set needs at least one type")]
    Empty,

    #[error("A type set holds at most two types, got {0}")]
    TooMany(usize),

    #[error("Duplicate type in type set: {0}")]
    Duplicate(Type),
}

/// Errors raised while building a [`TypeChart`](crate::TypeChart) from records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid multiplier {multiplier} for {attacker} attacking {defender}")]
    InvalidMultiplier {
        attacker: Type,
        defender: Type,
        multiplier: f32,
    },
}
