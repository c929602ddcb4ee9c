use thiserror::Error;

/// Reasons a sequence of dice cannot be evaluated as a roll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// The roll does not hold exactly five dice.
    #[error("a roll has exactly {n} dice, got {len}", n = crate::N_DICE)]
    InvalidRollShape { len: usize },

    /// A die shows something other than an integer in 1..=6.
    #[error("die face must be an integer in 1..=6, got {0:?}")]
    InvalidDieFace(String),
}
