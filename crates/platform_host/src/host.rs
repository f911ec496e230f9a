//! Host-service bundle assembled by the entry layer and injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ExternalUrlService, NoopExternalUrlService, NoopSoundCueService, RandomSource,
    SeededRandomSource, SoundCueService,
};

/// Host composition selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services.
    Browser,
    /// Silent in-memory services (tests, non-wasm builds).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

#[derive(Clone)]
/// Services the desktop runtime needs from its host.
pub struct HostServices {
    /// Audio cue playback.
    pub sounds: Rc<dyn SoundCueService>,
    /// External link navigation.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Randomness for restore-position jitter.
    pub random: Rc<dyn RandomSource>,
    /// Strategy that produced this bundle.
    pub strategy: HostStrategy,
}

impl HostServices {
    /// Builds a silent, deterministic bundle.
    pub fn headless(seed: u64) -> Self {
        Self {
            sounds: Rc::new(NoopSoundCueService),
            external_urls: Rc::new(NoopExternalUrlService),
            random: Rc::new(SeededRandomSource::new(seed)),
            strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
