//! Pointer-driven move and resize sessions.
//!
//! The engine holds at most one [`PointerSession`]. Geometry is always derived from the session's
//! start values and the latest sample, so the outcome depends only on where the pointer ends up.

use crate::{
    apps::shell_config,
    model::{
        AppId, DesktopState, DragSession, InteractionState, PointerPhase, PointerPosition,
        PointerSample, PointerSession, ResizeEdge, ResizeSession, WindowRect,
    },
    window_manager,
};

/// Starts dragging `window_id` from a title-bar press.
///
/// The window is focused first. Maximized windows focus but do not start a session. Any previous
/// session is dropped either way.
pub fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: AppId,
    sample: PointerSample,
) {
    if !window_manager::focus_window(state, window_id) {
        return;
    }
    interaction.session = None;

    let Some(window) = state.window(window_id) else {
        return;
    };
    if window.maximized {
        return;
    }

    let origin = window.rect.position();
    interaction.session = Some(PointerSession::Drag(DragSession {
        window_id,
        pointer_id: sample.pointer_id,
        offset: PointerPosition {
            x: sample.position.x - origin.x,
            y: sample.position.y - origin.y,
        },
    }));
}

/// Starts resizing `window_id` from one of its edge or corner handles.
pub fn begin_resize(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: AppId,
    edge: ResizeEdge,
    sample: PointerSample,
) {
    if !window_manager::focus_window(state, window_id) {
        return;
    }
    interaction.session = None;

    let Some(window) = state.window(window_id) else {
        return;
    };
    if window.maximized {
        return;
    }

    interaction.session = Some(PointerSession::Resize(ResizeSession {
        window_id,
        pointer_id: sample.pointer_id,
        edge,
        pointer_start: sample.position,
        rect_start: window.rect,
    }));
}

/// Feeds one sample into the active session.
///
/// Samples from other pointers are ignored. `End` and `Cancel` close the session without moving the
/// window again.
pub fn apply_pointer_sample(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    sample: PointerSample,
) {
    let Some(session) = interaction.session.as_ref() else {
        return;
    };
    if session.pointer_id() != sample.pointer_id {
        return;
    }

    match sample.phase {
        PointerPhase::Start => {}
        PointerPhase::End | PointerPhase::Cancel => interaction.session = None,
        PointerPhase::Move => match session {
            PointerSession::Drag(drag) => {
                window_manager::move_window(
                    state,
                    drag.window_id,
                    sample.position.x - drag.offset.x,
                    sample.position.y - drag.offset.y,
                );
            }
            PointerSession::Resize(resize) => {
                if state.window(resize.window_id).is_some_and(|w| w.maximized) {
                    return;
                }
                let shell = shell_config();
                let rect = resize_rect_anchored(
                    resize.rect_start,
                    resize.edge,
                    sample.position.x - resize.pointer_start.x,
                    sample.position.y - resize.pointer_start.y,
                    shell.min_window_width,
                    shell.min_window_height,
                );
                window_manager::resize_window(state, resize.window_id, rect);
            }
        },
    }
}

/// Drops any active session. Returns whether one was active.
pub fn release_sessions(interaction: &mut InteractionState) -> bool {
    interaction.session.take().is_some()
}

/// Drops the session when its window is no longer drawn (closed or minimized).
pub fn release_hidden_session(state: &DesktopState, interaction: &mut InteractionState) -> bool {
    let hidden = interaction.session.as_ref().is_some_and(|session| {
        !state
            .window(session.window_id())
            .is_some_and(|window| window.is_visible())
    });
    if hidden {
        interaction.session = None;
    }
    hidden
}

/// Applies pointer deltas to `start` for the sides named by `edge`, flooring the size at
/// `min_w`×`min_h`. North and west resizes keep the opposite edge fixed, including when clamped.
pub fn resize_rect_anchored(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let flags = edge.flags();
    let mut rect = start;

    if flags.east {
        rect.w = start.w + dx;
    }
    if flags.west {
        rect.w = start.w - dx;
    }
    if flags.south {
        rect.h = start.h + dy;
    }
    if flags.north {
        rect.h = start.h - dy;
    }

    rect.w = rect.w.max(min_w);
    rect.h = rect.h.max(min_h);

    if flags.west {
        rect.x = start.right() - rect.w;
    }
    if flags.north {
        rect.y = start.bottom() - rect.h;
    }
    rect
}
