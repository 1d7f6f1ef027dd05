use alloc::string::{String, ToString};
use core::fmt;

use rand::Rng;

use crate::{
    consts::{SUCCESS_SENTINEL, UNKNOWN_ERROR},
    error::PlayError,
    notifier::NotifierTrait,
    sound::{SOUND_KINDS, SoundKind},
};

/// How the player picks the next sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Always the same kind.
    Fixed(SoundKind),
    /// Uniformly among the whole catalog, per play.
    #[default]
    Random,
}

/// Outcome of a single play attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub kind: SoundKind,
    pub outcome: Result<(), PlayError>,
}

impl PlayResult {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Platform diagnostic of a failed play.
    pub fn detail(&self) -> Option<&str> {
        match &self.outcome {
            Ok(()) => None,
            Err(PlayError::PlatformCallFailed { detail }) => Some(detail),
        }
    }
}

impl fmt::Display for PlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(()) => write!(f, "Played beep: {}", self.kind),
            Err(e) => write!(f, "Failed to play beep: {}, error: {}", self.kind, e),
        }
    }
}

/// Picks notification sounds and hands them to the platform.
pub struct BeepPlayer<'a> {
    notifier: &'a dyn NotifierTrait,
    selection: Selection,
}

impl<'a> BeepPlayer<'a> {
    pub fn new(notifier: &'a dyn NotifierTrait, selection: Selection) -> Self {
        Self { notifier, selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_sound<R: Rng>(&self, rng: &mut R) -> SoundKind {
        match self.selection {
            Selection::Fixed(kind) => kind,
            Selection::Random => SOUND_KINDS[rng.random_range(0..SOUND_KINDS.len())],
        }
    }

    /// Ask the platform to play `kind` once.
    ///
    /// Only a zero return value counts as a failure. Text attached to a
    /// non-zero return is informational, Windows reports its "completed
    /// successfully" message there.
    pub fn play(&self, kind: SoundKind) -> PlayResult {
        let reply = self.notifier.notify(kind.code);

        if reply.ret != 0 {
            if let Some(diagnostic) = reply
                .diagnostic
                .as_deref()
                .filter(|d| !is_success_sentinel(d))
            {
                log::debug!("{} played, platform said: {}", kind, diagnostic.trim());
            }
            return PlayResult {
                kind,
                outcome: Ok(()),
            };
        }

        let detail = reply
            .diagnostic
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| String::from(UNKNOWN_ERROR));
        log::warn!("notify({:#x}) failed for {}: {}", kind.code, kind, detail);

        PlayResult {
            kind,
            outcome: Err(PlayError::PlatformCallFailed { detail }),
        }
    }
}

fn is_success_sentinel(diagnostic: &str) -> bool {
    diagnostic.trim().eq_ignore_ascii_case(SUCCESS_SENTINEL)
}
