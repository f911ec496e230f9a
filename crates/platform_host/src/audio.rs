//! Named UI audio cues and the playback service contract.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::HostFuture;

/// Named audio cue requested by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    /// Navigation click (taskbar, start menu, desktop icons).
    Click,
    /// A window was launched or maximized.
    Open,
    /// A window was closed.
    Close,
    /// A window was minimized or restored from maximize.
    Minimize,
    /// Session logon.
    Startup,
    /// Generic error ding.
    Error,
    /// Exclamation.
    Exclamation,
}

impl SoundCue {
    /// Every cue, in a stable order.
    pub const ALL: [SoundCue; 7] = [
        Self::Click,
        Self::Open,
        Self::Close,
        Self::Minimize,
        Self::Startup,
        Self::Error,
        Self::Exclamation,
    ];

    /// Returns the stable cue token used by adapters and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Open => "open",
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Startup => "startup",
            Self::Error => "error",
            Self::Exclamation => "exclamation",
        }
    }
}

/// Host service for fire-and-forget UI audio playback.
///
/// Callers never wait on the returned future for anything but logging; a failed or missing cue
/// must not affect shell state.
pub trait SoundCueService {
    /// Starts playback of `cue`.
    fn play(&self, cue: SoundCue) -> HostFuture<'static, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent audio service for hosts without audio output.
pub struct NoopSoundCueService;

impl SoundCueService for NoopSoundCueService {
    fn play(&self, _cue: SoundCue) -> HostFuture<'static, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// Audio service that records requested cues instead of playing them.
pub struct MemorySoundCueService {
    played: RefCell<Vec<SoundCue>>,
}

impl MemorySoundCueService {
    /// Returns the cues requested so far, oldest first.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }
}

impl SoundCueService for MemorySoundCueService {
    fn play(&self, cue: SoundCue) -> HostFuture<'static, Result<(), String>> {
        self.played.borrow_mut().push(cue);
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_cues_in_order() {
        let service = MemorySoundCueService::default();
        block_on(service.play(SoundCue::Open)).expect("open cue");
        block_on(service.play(SoundCue::Close)).expect("close cue");

        assert_eq!(service.played(), vec![SoundCue::Open, SoundCue::Close]);
    }

    #[test]
    fn cue_tokens_are_unique() {
        let mut tokens: Vec<_> = SoundCue::ALL.iter().map(|cue| cue.as_str()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), SoundCue::ALL.len());
    }
}
