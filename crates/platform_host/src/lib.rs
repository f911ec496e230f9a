//! Typed host-service contracts shared by the desktop runtime and its browser adapters.
//!
//! The desktop window manager never talks to the browser directly. Audio cues, external
//! navigation and randomness reach it through the traits in this crate, and concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod external_url;
pub mod host;
pub mod random;

use std::{future::Future, pin::Pin};

/// Object-safe boxed future returned by host services.
pub type HostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

pub use audio::{MemorySoundCueService, NoopSoundCueService, SoundCue, SoundCueService};
pub use external_url::{ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService};
pub use host::{HostServices, HostStrategy};
pub use random::{FixedRandomSource, RandomSource, SeededRandomSource};
