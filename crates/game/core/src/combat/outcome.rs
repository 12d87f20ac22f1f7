//! Fight outcome types.

/// State of a fight after a checked step.
///
/// `Win` and `Lose` are terminal and always taken from the player's point of
/// view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Neither side is down yet.
    Continue,
    /// The boss is down.
    Win,
    /// The player is down.
    Lose,
}

impl Outcome {
    /// Returns true for `Win` and `Lose`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// One side of a fight.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Player,
    Boss,
}

impl Side {
    /// The side that acts after this one.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Boss,
            Self::Boss => Self::Player,
        }
    }
}
