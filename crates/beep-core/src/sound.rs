//! Sound catalog - the notification sounds `MessageBeep` knows about.
//!
//! Several names alias the same code; they are kept apart because the
//! platform documents them separately.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundKind {
    pub name: &'static str,
    pub code: u32,
    pub description: &'static str,
}

impl SoundKind {
    pub const SIMPLE_BEEP: SoundKind = SoundKind {
        name: "SimpleBeep",
        code: 0xFFFF_FFFF,
        description: "A simple beep. Falls back to the speaker if there is no sound card.",
    };
    pub const ICON_ASTERISK: SoundKind = SoundKind {
        name: "MB_ICONASTERISK",
        code: 0x0000_0040,
        description: "See MB_ICONINFORMATION.",
    };
    pub const ICON_EXCLAMATION: SoundKind = SoundKind {
        name: "MB_ICONEXCLAMATION",
        code: 0x0000_0030,
        description: "See MB_ICONWARNING.",
    };
    pub const ICON_ERROR: SoundKind = SoundKind {
        name: "MB_ICONERROR",
        code: 0x0000_0010,
        description: "The Windows Critical Stop sound.",
    };
    pub const ICON_HAND: SoundKind = SoundKind {
        name: "MB_ICONHAND",
        code: 0x0000_0010,
        description: "See MB_ICONERROR.",
    };
    pub const ICON_INFORMATION: SoundKind = SoundKind {
        name: "MB_ICONINFORMATION",
        code: 0x0000_0040,
        description: "The Windows Asterisk sound.",
    };
    pub const ICON_QUESTION: SoundKind = SoundKind {
        name: "MB_ICONQUESTION",
        code: 0x0000_0020,
        description: "The Windows Question sound.",
    };
    pub const ICON_STOP: SoundKind = SoundKind {
        name: "MB_ICONSTOP",
        code: 0x0000_0010,
        description: "See MB_ICONERROR.",
    };
    pub const ICON_WARNING: SoundKind = SoundKind {
        name: "MB_ICONWARNING",
        code: 0x0000_0030,
        description: "The Windows Exclamation sound.",
    };
    pub const OK: SoundKind = SoundKind {
        name: "MB_OK",
        code: 0x0000_0000,
        description: "The Windows Default Beep sound.",
    };

    /// Look a kind up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<SoundKind> {
        SOUND_KINDS
            .iter()
            .find(|kind| kind.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl fmt::Display for SoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every sound the player may pick from.
///
/// See https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messagebeep.
pub const SOUND_KINDS: &[SoundKind] = &[
    SoundKind::SIMPLE_BEEP,
    SoundKind::ICON_ASTERISK,
    SoundKind::ICON_EXCLAMATION,
    SoundKind::ICON_ERROR,
    SoundKind::ICON_HAND,
    SoundKind::ICON_INFORMATION,
    SoundKind::ICON_QUESTION,
    SoundKind::ICON_STOP,
    SoundKind::ICON_WARNING,
    SoundKind::OK,
];
