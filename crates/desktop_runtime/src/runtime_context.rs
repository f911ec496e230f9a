//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the app registry
//! and the browser-level listeners that feed the reducer. UI composition stays in
//! [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    apps::{shell_config, AppRegistry},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Slot id to catalog entry and content provider, resolved once at construction.
    pub registry: StoredValue<AppRegistry>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer session state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current work area for maximized windows.
    pub fn work_area(&self) -> WindowRect {
        self.host
            .get_value()
            .desktop_viewport_rect(shell_config().taskbar_height_px)
    }
}

fn install_pointer_session_guards(runtime: DesktopRuntimeContext) {
    let release = move || {
        if runtime.interaction.get_untracked().session.is_some() {
            runtime.dispatch_action(DesktopAction::ReleasePointerSessions);
        }
    };

    let blur_listener = window_event_listener(ev::blur, move |_| release());
    on_cleanup(move || blur_listener.remove());

    let visibility_listener = window_event_listener(ev::visibilitychange, move |_| {
        if document().visibility_state() == web_sys::VisibilityState::Hidden {
            release();
        }
    });
    on_cleanup(move || visibility_listener.remove());
}

fn install_key_listener(runtime: DesktopRuntimeContext) {
    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        runtime.dispatch_action(DesktopAction::KeyPressed { key: ev.key() });
    });
    on_cleanup(move || keydown_listener.remove());
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    install_pointer_session_guards(runtime);
    install_key_listener(runtime);
    effect_executor::install(runtime);
    logging::log!(
        "desktop runtime ready (host strategy: {})",
        runtime.host.get_value().host_strategy_name()
    );
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let registry = store_value(AppRegistry::default());
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_mode = desktop.mode;
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let random = host.with_value(|host| host.random_source());
        let new_effects = reduce_desktop(&mut desktop, &mut ui, action, random.as_ref());

        if desktop.mode != previous_mode {
            logging::log!(
                "desktop presentation mode {:?} -> {:?}",
                previous_mode,
                desktop.mode
            );
        }
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        registry,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
