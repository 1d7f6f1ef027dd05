//! Repeat count - how many times to beep.
//!
//! A bad or missing count is never an error, it is replaced by a random one
//! drawn once from [`RANDOM_COUNT_RANGE`].

use rand::Rng;

use crate::consts::RANDOM_COUNT_RANGE;

/// Where a repeat count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    Requested,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatCount {
    value: u32,
    source: CountSource,
}

impl RepeatCount {
    /// Use `requested` when it is a positive count, otherwise draw one.
    pub fn resolve<R: Rng>(requested: Option<i64>, rng: &mut R) -> Self {
        match requested
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&n| n > 0)
        {
            Some(value) => Self {
                value,
                source: CountSource::Requested,
            },
            None => {
                let value = rng.random_range(RANDOM_COUNT_RANGE);
                log::debug!("count {:?} unusable, drew {}", requested, value);
                Self {
                    value,
                    source: CountSource::Random,
                }
            }
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn source(&self) -> CountSource {
        self.source
    }

    pub fn is_substituted(&self) -> bool {
        self.source == CountSource::Random
    }
}

/// Parse a command line count. Anything that is not a plain decimal integer
/// yields `None`.
pub fn parse_count(arg: &str) -> Option<i64> {
    arg.parse().ok()
}
