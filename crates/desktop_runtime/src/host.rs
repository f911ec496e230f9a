//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer only emits [`RuntimeEffect`] intents. This module turns them into calls on the
//! injected [`HostServices`] and into timers that feed follow-up actions back into the reducer.

mod host_ui;

use std::rc::Rc;

use platform_host::{ExternalUrlService, HostServices, RandomSource, SoundCueService};

use crate::{
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the bundle assembled by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured sound cue service.
    pub fn sound_cue_service(&self) -> Rc<dyn SoundCueService> {
        self.services.sounds.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the random source handed to the reducer.
    pub fn random_source(&self) -> Rc<dyn RandomSource> {
        self.services.random.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => host_ui::play_sound(self.clone(), cue),
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
            RuntimeEffect::ScheduleLogin { delay_ms } => {
                host_ui::dispatch_after(runtime, DesktopAction::CompleteLogin, delay_ms)
            }
            RuntimeEffect::ScheduleShutdown { delay_ms } => {
                host_ui::dispatch_after(runtime, DesktopAction::CompleteShutdown, delay_ms)
            }
        }
    }

    /// Returns the area above the taskbar that a maximized window fills.
    ///
    /// Read fresh on every call so a maximize after a browser resize uses the current size.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("host_strategy", &self.host_strategy_name())
            .finish()
    }
}
