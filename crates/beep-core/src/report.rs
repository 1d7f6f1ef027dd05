use core::fmt;

use crate::{
    count::RepeatCount,
    player::{PlayResult, Selection},
};

/// Printed once when the repeat count had to be drawn at random.
pub const FALLBACK_WARNING: &str =
    "Invalid or no count provided, deciding how many beeps to play randomly.";

/// Receives the progress of a run, one call per status line.
pub trait Reporter {
    type Error;

    fn starting(&mut self, count: &RepeatCount, selection: Selection) -> Result<(), Self::Error>;

    fn played(&mut self, result: &PlayResult) -> Result<(), Self::Error>;
}

/// Which sound a run plays, as worded in its heading.
pub struct SelectionLabel(pub Selection);

impl fmt::Display for SelectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Selection::Fixed(kind) => write!(f, "the {}", kind),
            Selection::Random => f.write_str("a random"),
        }
    }
}
