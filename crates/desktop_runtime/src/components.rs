//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod screens;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    menus::{DesktopContextMenu, StartMenu},
    screens::{LoginScreen, ShuttingDownScreen, StopScreen},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps::shell_config,
    host::DesktopHostContext,
    model::{PointerKind, PointerPhase, PointerPosition, PointerSample, PresentationMode, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// How long the desktop flashes after "Refresh".
const REFRESH_FLASH: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DesktopContextMenuState {
    x: i32,
    y: i32,
}

#[component]
/// Renders the full desktop shell UI for the current presentation mode.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let mode = create_memo(move |_| state.get().mode);
    let stop_screen = create_memo(move |_| state.get().stop_screen);

    view! {
        {move || {
            if stop_screen.get() {
                return view! { <StopScreen /> }.into_view();
            }
            match mode.get() {
                PresentationMode::LoggedOut => view! { <LoginScreen /> }.into_view(),
                PresentationMode::ShuttingDown => view! { <ShuttingDownScreen /> }.into_view(),
                PresentationMode::LoggedIn => view! { <DesktopSurface /> }.into_view(),
            }
        }}
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let desktop_context_menu = create_rw_signal(None::<DesktopContextMenuState>);
    let refresh_flash = create_rw_signal(false);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if desktop_context_menu.get_untracked().is_some() {
            desktop_context_menu.set(None);
        }
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let forward_pointer = move |ev: web_sys::PointerEvent, phase: PointerPhase| {
        if runtime.interaction.get_untracked().session.is_none() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerInput {
            sample: pointer_sample_from_event(&ev, phase),
        });
    };
    let refresh = Callback::new(move |_| {
        refresh_flash.set(true);
        set_timeout(move || refresh_flash.set(false), REFRESH_FLASH);
    });

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:click=move |_| {
                desktop_context_menu.set(None);
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
            }
            on:contextmenu=move |ev| {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
                open_desktop_context_menu(
                    runtime.host.get_value(),
                    desktop_context_menu,
                    ev.client_x(),
                    ev.client_y(),
                );
            }
            on:pointermove=move |ev| forward_pointer(ev, PointerPhase::Move)
            on:pointerup=move |ev| forward_pointer(ev, PointerPhase::End)
            on:pointercancel=move |ev| forward_pointer(ev, PointerPhase::Cancel)
        >
            <div class="desktop-wallpaper" aria-hidden="true"></div>

            <div class="desktop-icon-grid" role="group" aria-label="Desktop icons">
                <For
                    each=move || runtime.registry.with_value(|registry| registry.entries().to_vec())
                    key=|entry| entry.slot.app_id
                    let:entry
                >
                    {{
                        let app_id = entry.slot.app_id;
                        view! {
                            <button
                                class="desktop-icon"
                                data-app=app_id.as_str()
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::SelectDesktopIcon { app_id });
                                }
                                on:dblclick=move |ev| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::ActivateDesktopIcon { app_id });
                                }
                            >
                                <span class="desktop-icon-glyph" aria-hidden="true">
                                    {entry.slot.icon_glyph.clone()}
                                </span>
                                <span class="desktop-icon-label">{entry.slot.desktop_label.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| {
                        desktop.windows.iter().map(|win| win.id).collect::<Vec<_>>()
                    })
                    key=|window_id| *window_id
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <Show when=move || refresh_flash.get() fallback=|| ()>
                <div class="desktop-refresh-flash" aria-hidden="true"></div>
            </Show>

            <DesktopContextMenu desktop_context_menu refresh />
            <StartMenu />
            <Taskbar />
        </div>
    }
}

fn open_desktop_context_menu(
    host: DesktopHostContext,
    menu: RwSignal<Option<DesktopContextMenuState>>,
    x: i32,
    y: i32,
) {
    let viewport = host.desktop_viewport_rect(shell_config().taskbar_height_px);
    let (x, y) = clamp_popup_position(viewport.w, viewport.h, x, y, 224, 240);
    menu.set(Some(DesktopContextMenuState { x, y }));
}

/// Keeps a popup of `popup_w`×`popup_h` inside a `viewport_w`×`viewport_h` canvas.
fn clamp_popup_position(
    viewport_w: i32,
    viewport_h: i32,
    x: i32,
    y: i32,
    popup_w: i32,
    popup_h: i32,
) -> (i32, i32) {
    let max_x = (viewport_w - popup_w - 6).max(6);
    let max_y = (viewport_h - popup_h - 6).max(6);
    (x.clamp(6, max_x), y.clamp(6, max_y))
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_kind_from_type(pointer_type: &str) -> PointerKind {
    match pointer_type {
        "touch" => PointerKind::Touch,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Mouse,
    }
}

/// Converts a browser pointer event into the engine's device-neutral sample.
fn pointer_sample_from_event(ev: &web_sys::PointerEvent, phase: PointerPhase) -> PointerSample {
    PointerSample {
        pointer_id: ev.pointer_id(),
        kind: pointer_kind_from_type(&ev.pointer_type()),
        position: PointerPosition {
            x: ev.client_x(),
            y: ev.client_y(),
        },
        phase,
    }
}

/// Primary button for mice; primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    match pointer_kind_from_type(&ev.pointer_type()) {
        PointerKind::Mouse => ev.button() == 0,
        PointerKind::Touch | PointerKind::Pen => ev.is_primary(),
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pointer_types_map_to_kinds() {
        assert_eq!(pointer_kind_from_type("touch"), PointerKind::Touch);
        assert_eq!(pointer_kind_from_type("pen"), PointerKind::Pen);
        assert_eq!(pointer_kind_from_type("mouse"), PointerKind::Mouse);
        assert_eq!(pointer_kind_from_type(""), PointerKind::Mouse);
    }

    #[test]
    fn popup_position_stays_inside_viewport() {
        assert_eq!(clamp_popup_position(1280, 680, 1270, 670, 224, 240), (1050, 434));
        assert_eq!(clamp_popup_position(1280, 680, -40, 12, 224, 240), (6, 12));
        assert_eq!(clamp_popup_position(100, 100, 50, 50, 224, 240), (6, 6));
    }

    #[test]
    fn every_edge_has_a_distinct_handle_class() {
        let mut classes: Vec<&str> = ResizeEdge::ALL.into_iter().map(resize_edge_class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), ResizeEdge::ALL.len());
    }
}
