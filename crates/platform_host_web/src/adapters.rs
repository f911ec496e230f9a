use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopExternalUrlService, NoopSoundCueService, SeededRandomSource,
};

use crate::{WebExternalUrlService, WebRandomSource, WebSoundCueService};

/// Seed used by the headless strategy so its window jitter is reproducible.
const HEADLESS_SEED: u64 = 0x5EED;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Assembles the host bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            sounds: Rc::new(WebSoundCueService),
            external_urls: Rc::new(WebExternalUrlService),
            random: Rc::new(WebRandomSource::default()),
            strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            sounds: Rc::new(NoopSoundCueService),
            external_urls: Rc::new(NoopExternalUrlService),
            random: Rc::new(SeededRandomSource::new(HEADLESS_SEED)),
            strategy: HostStrategy::Headless,
        },
    }
}
