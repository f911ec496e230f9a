use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local};
use platform_host::SoundCue;

use crate::{
    host::DesktopHostContext, model::WindowRect, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn play_sound(host: DesktopHostContext, cue: SoundCue) {
    spawn_local(async move {
        // Autoplay policies reject playback until the first user gesture.
        if let Err(err) = host.sound_cue_service().play(cue).await {
            logging::debug_warn!("sound cue `{}` failed: {err}", cue.as_str());
        }
    });
}

pub(super) fn open_external_url(host: DesktopHostContext, url: &str) {
    let url = url.to_string();
    spawn_local(async move {
        if let Err(err) = host.external_url_service().open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}

pub(super) fn dispatch_after(runtime: DesktopRuntimeContext, action: DesktopAction, delay_ms: u64) {
    set_timeout(
        move || runtime.dispatch_action(action),
        Duration::from_millis(delay_ms),
    );
}

pub(super) fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(0),
                h: (height - taskbar_height_px).max(0),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - taskbar_height_px,
    }
}
