use std::{ops::Neg, str::FromStr};

use regex::Regex;
use tracing::{debug, instrument, trace};

use super::{DiceRoll, DiceRollError};

impl FromStr for DiceRoll {
    type Err = DiceRollError;

    /// Parses `NdF`, `dF`, `NdF+M` or `NdF-M` dice notation. A missing
    /// count means one die; parsed rolls are always aggregate mode.
    #[instrument]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let regex = Regex::new(r"^\s*([0-9]*)d([0-9]+)\s*(?:(\+|-)\s*([0-9]+))?\s*$")
            .expect("hard-coded regex should be valid");

        let caps = regex
            .captures(text)
            .ok_or_else(|| DiceRollError::NoMatch(text.to_owned()))?;
        trace!(?caps);

        let count = match caps.get(1).map(|mat| mat.as_str()) {
            None | Some("") => 1,
            Some(digits) => digits
                .parse()
                .map_err(|_| DiceRollError::InvalidCount(digits.to_owned()))?,
        };
        trace!(count);

        let faces = caps
            .get(2)
            .ok_or(DiceRollError::NoFaces)?
            .as_str()
            .parse()?;
        trace!(?faces);

        let magnitude = caps
            .get(4)
            .map(|mat| {
                mat.as_str()
                    .parse::<i16>()
                    .map_err(|_| DiceRollError::InvalidModifier(mat.as_str().to_owned()))
            })
            .transpose()?;

        let modifier = match (caps.get(3).map_or("", |mat| mat.as_str()), magnitude) {
            ("+", Some(int)) => int,
            ("-", Some(int)) => int.neg(),
            _ => 0,
        };
        debug!(count, ?faces, modifier);

        Ok(DiceRoll::new(count, faces, modifier))
    }
}
