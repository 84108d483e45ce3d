use rand::Rng;
use thiserror::Error;
use tracing::trace;

pub mod natural;
use natural::{NaturalI16, NaturalI16Constants, NaturalI16Error};

mod outcome;
pub use outcome::{EmptyRollError, RollOutcome};

mod parse;

#[derive(Debug, Error, PartialEq)]
pub enum DiceRollError {
    #[error(transparent)]
    InvalidNumber(#[from] NaturalI16Error),

    #[error("no face count")]
    NoFaces,

    #[error("`{0}` is not a valid die count")]
    InvalidCount(String),

    #[error("`{0}` is not a valid modifier")]
    InvalidModifier(String),

    #[error("no dice expression in `{0}`")]
    NoMatch(String),
}

/// A single die with `faces` faces, numbered `1..=faces`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Die {
    pub faces: NaturalI16,
}

impl Die {
    pub fn new(faces: NaturalI16) -> Self {
        Self { faces }
    }

    pub fn roll(&self) -> i16 {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with(&self, rng: &mut impl Rng) -> i16 {
        rng.gen_range(1..=self.faces.get())
    }

    pub fn d6() -> Self {
        Self::new(NaturalI16::six())
    }

    pub fn d20() -> Self {
        Self::new(NaturalI16::twenty())
    }

    pub fn d100() -> Self {
        Self::new(NaturalI16::one_hundred())
    }

    pub fn min(&self) -> i16 {
        NaturalI16::min().get()
    }

    pub fn max(&self) -> i16 {
        self.faces.get()
    }
}

/// One requested roll: `count` dice of `faces` faces plus a modifier.
///
/// With `per_roll` unset (the default) the modifier is added once, to
/// the total only. With it set the modifier is added to every die
/// before the roll is recorded, and the total is the plain sum of the
/// recorded rolls.
///
/// The default roll is a single unmodified d20.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct DiceRoll {
    pub faces: NaturalI16,
    pub count: u16,
    pub modifier: i16,
    pub per_roll: bool,
}

impl Default for DiceRoll {
    fn default() -> Self {
        Self {
            faces: NaturalI16::twenty(),
            count: 1,
            modifier: 0,
            per_roll: false,
        }
    }
}

impl DiceRoll {
    pub fn new(count: u16, faces: NaturalI16, modifier: i16) -> Self {
        Self {
            faces,
            count,
            modifier,
            ..Self::default()
        }
    }

    pub fn per_roll(mut self, per_roll: bool) -> Self {
        self.per_roll = per_roll;
        self
    }

    pub fn die(&self) -> Die {
        Die::new(self.faces)
    }

    /// The smallest total this roll can produce.
    pub fn lowest_possible(&self) -> i32 {
        self.extreme(i32::from(self.die().min()))
    }

    /// The largest total this roll can produce.
    pub fn highest_possible(&self) -> i32 {
        self.extreme(i32::from(self.die().max()))
    }

    fn extreme(&self, face: i32) -> i32 {
        let count = i32::from(self.count);
        let modifier = i32::from(self.modifier);

        if self.per_roll {
            count * (face + modifier)
        } else {
            count * face + modifier
        }
    }

    pub fn roll(&self) -> RollOutcome {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Rolls with the given rng. Same rng state, same outcome.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollOutcome {
        let die = self.die();
        let modifier = i32::from(self.modifier);

        let mut rolls = Vec::with_capacity(usize::from(self.count));

        for _ in 0..self.count {
            let face = i32::from(die.roll_with(rng));
            let recorded = if self.per_roll { face + modifier } else { face };
            rolls.push(recorded);
        }

        let sum: i32 = rolls.iter().sum();
        let total = if self.per_roll { sum } else { sum + modifier };

        trace!(?rolls, total);

        RollOutcome::new(rolls, total)
    }
}
