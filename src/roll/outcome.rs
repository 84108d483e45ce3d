use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("an empty roll has no highest or lowest die")]
pub struct EmptyRollError;

/// What one invocation of [`DiceRoll::roll`] produced.
///
/// `rolls` keeps the dice in the order they were rolled. In per-roll
/// mode each entry already includes the modifier; in aggregate mode
/// the entries are raw faces and only `total` carries the modifier.
///
/// [`DiceRoll::roll`]: super::DiceRoll::roll
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    rolls: Vec<i32>,
    total: i32,
}

impl RollOutcome {
    pub(super) fn new(rolls: Vec<i32>, total: i32) -> Self {
        Self { rolls, total }
    }

    pub fn rolls(&self) -> &[i32] {
        &self.rolls
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    /// The highest recorded roll. An empty roll (`count = 0`) is an
    /// error, not a sentinel.
    pub fn highest(&self) -> Result<i32, EmptyRollError> {
        self.rolls.iter().copied().max().ok_or(EmptyRollError)
    }

    /// The lowest recorded roll, erroring like [`Self::highest`] when
    /// the roll is empty.
    pub fn lowest(&self) -> Result<i32, EmptyRollError> {
        self.rolls.iter().copied().min().ok_or(EmptyRollError)
    }
}
