use super::*;
use crate::model::{AppId, DesktopState};

/// Actions for a press anywhere inside a window: dismiss the start menu, then raise the window.
fn window_press_actions(desktop: &DesktopState, window_id: AppId) -> Vec<DesktopAction> {
    let mut actions = Vec::new();
    if desktop.start_menu_open {
        actions.push(DesktopAction::CloseStartMenu);
    }
    let needs_focus = desktop.active_window != Some(window_id)
        || desktop.window(window_id).is_some_and(|w| w.minimized);
    if needs_focus {
        actions.push(DesktopAction::FocusWindow { window_id });
    }
    actions
}

#[component]
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || runtime.state.with(|desktop| desktop.window(window_id).cloned()));
    let visible = Signal::derive(move || window.get().is_some_and(|w| w.is_visible()));

    let focus = move |_| {
        let actions = runtime
            .state
            .with_untracked(|desktop| window_press_actions(desktop, window_id));
        for action in actions {
            runtime.dispatch_action(action);
        }
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            work_area: runtime.work_area(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            sample: pointer_sample_from_event(&ev, PointerPhase::Start),
        });
    };

    // Content is resolved once; hiding a window keeps its subtree alive.
    let contents = runtime
        .registry
        .with_value(|registry| registry.render_content(window_id))
        .unwrap_or_else(|| view! { <p>"Nothing to show."</p> }.into_view());

    view! {
        <section
            class=move || {
                let maximized = window.get().is_some_and(|w| w.maximized);
                let active = runtime.state.with(|desktop| desktop.active_window == Some(window_id));
                format!(
                    "desktop-window{}{}",
                    if active { " active" } else { "" },
                    if maximized { " maximized" } else { "" },
                )
            }
            style=move || {
                let Some(win) = window.get() else {
                    return "display:none;".to_string();
                };
                let display = if win.is_visible() { "" } else { "display:none;" };
                format!(
                    "{display}left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                )
            }
            data-app=window_id.as_str()
            role="dialog"
            aria-label=move || window.get().map(|w| w.title).unwrap_or_default()
            aria-hidden=move || (!visible.get()).to_string()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">
                        {move || runtime.registry.with_value(|registry| registry.icon_glyph(window_id).to_string())}
                    </span>
                    <span>{move || window.get().map(|w| w.title).unwrap_or_default()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || {
                            if window.get().is_some_and(|w| w.maximized) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || if window.get().is_some_and(|w| w.maximized) { "❐" } else { "□" }}
                    </button>
                    <button
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show
                when=move || window.get().is_some_and(|w| !w.maximized)
                fallback=|| ()
            >
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            sample: pointer_sample_from_event(&ev, PointerPhase::Start),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
