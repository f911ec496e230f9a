//! Drains reducer-emitted [`crate::RuntimeEffect`] values in emission order.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor for `runtime`.
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the queue before running anything so effects that dispatch again (timers completing a
    // login, say) enqueue into a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
