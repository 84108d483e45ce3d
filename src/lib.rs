#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

//! The dice-rolling core of a chat bot's `roll` command.
//!
//! A [`DiceRoll`] describes one roll: how many dice, how many faces,
//! and an integer modifier applied either to every die or once to the
//! sum. Rolling it produces a [`RollOutcome`] holding the individual
//! rolls in order plus the total.
//!
//! ```
//! use dicecup::DiceRoll;
//!
//! let roll: DiceRoll = "3d6+2".parse()?;
//! let outcome = roll.roll();
//!
//! assert_eq!(outcome.rolls().len(), 3);
//! assert_eq!(
//!     outcome.total(),
//!     outcome.rolls().iter().sum::<i32>() + 2
//! );
//! # Ok::<(), dicecup::DiceRollError>(())
//! ```
//!
//! Randomness is injected: [`DiceRoll::roll_with`] takes any
//! [`rand::Rng`], so a seeded rng reproduces an outcome exactly.
//! The chat-facing layer (command dispatch, message formatting) lives
//! in the host bot, not here.

pub mod roll;

pub use roll::{
    natural::NaturalI16, DiceRoll, DiceRollError, Die, EmptyRollError, RollOutcome,
};
