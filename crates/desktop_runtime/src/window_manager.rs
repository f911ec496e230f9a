//! Window entity store: the only code that mutates [`WindowRecord`] flags, stacking and geometry.
//!
//! Every operation is total over [`AppId`]. Targets that are unknown or in the wrong state turn the
//! call into a no-op. Operations report the audio cue they want played and leave effect routing to
//! the reducer.

use platform_host::{RandomSource, SoundCue};

use crate::{
    apps::app_catalog,
    model::{AppId, DesktopState, WindowRect},
};

fn next_z_index(state: &mut DesktopState) -> u32 {
    state.max_z_index = state.max_z_index.saturating_add(1);
    state.max_z_index
}

/// Launches `id`, or focuses it when it is already open.
pub fn open_window(state: &mut DesktopState, id: AppId) -> Option<SoundCue> {
    let already_open = state.window(id)?.is_open;
    if already_open {
        focus_window(state, id);
        return None;
    }

    let z_index = next_z_index(state);
    let window = state.window_mut(id)?;
    window.is_open = true;
    window.minimized = false;
    window.z_index = z_index;
    state.active_window = Some(id);
    Some(SoundCue::Open)
}

/// Raises `id` above every other window, un-minimizes it and makes it active.
///
/// Returns `false` without touching the z counter when the window is not open.
pub fn focus_window(state: &mut DesktopState, id: AppId) -> bool {
    if !state.window(id).is_some_and(|w| w.is_open) {
        return false;
    }

    let z_index = next_z_index(state);
    if let Some(window) = state.window_mut(id) {
        window.z_index = z_index;
        window.minimized = false;
    }
    state.active_window = Some(id);
    true
}

/// Terminates `id`. Geometry is kept so a later open resumes where the window was.
pub fn close_window(state: &mut DesktopState, id: AppId) -> Option<SoundCue> {
    let window = state.window_mut(id)?;
    if !window.is_open {
        return None;
    }
    window.is_open = false;
    window.minimized = false;
    if state.active_window == Some(id) {
        state.active_window = None;
    }
    Some(SoundCue::Close)
}

pub fn minimize_window(state: &mut DesktopState, id: AppId) -> Option<SoundCue> {
    let window = state.window_mut(id)?;
    if !window.is_open {
        return None;
    }
    window.minimized = true;
    if state.active_window == Some(id) {
        state.active_window = None;
    }
    Some(SoundCue::Minimize)
}

/// Jittered restore geometry for `id`: the configured origin plus `[0, jitter)` per axis.
pub fn restore_rect(id: AppId, random: &dyn RandomSource) -> Option<WindowRect> {
    let catalog = app_catalog();
    let defaults = catalog.window_defaults(id)?;
    let shell = &catalog.shell;
    Some(WindowRect {
        x: shell.restore_origin_x + random.next_below(shell.restore_jitter_px),
        y: shell.restore_origin_y + random.next_below(shell.restore_jitter_px),
        w: defaults.restore_width,
        h: defaults.restore_height,
    })
}

/// Maximizes `id` into `work_area`, or restores it to a fresh jittered rect. Always focuses.
pub fn toggle_maximize_window(
    state: &mut DesktopState,
    id: AppId,
    work_area: WindowRect,
    random: &dyn RandomSource,
) -> Option<SoundCue> {
    let window = state.window(id)?;
    if !window.is_open {
        return None;
    }

    let cue = if window.maximized {
        let rect = restore_rect(id, random)?;
        let window = state.window_mut(id)?;
        window.maximized = false;
        window.rect = rect;
        SoundCue::Minimize
    } else {
        let window = state.window_mut(id)?;
        window.maximized = true;
        window.rect = WindowRect {
            x: 0,
            y: 0,
            w: work_area.w,
            h: work_area.h,
        };
        SoundCue::Open
    };
    focus_window(state, id);
    Some(cue)
}

/// Moves `id` to `(x, y)` without clamping. Ignored while maximized.
pub fn move_window(state: &mut DesktopState, id: AppId, x: i32, y: i32) -> bool {
    match state.window_mut(id) {
        Some(window) if !window.maximized => {
            window.rect = window.rect.moved_to(x, y);
            true
        }
        _ => false,
    }
}

/// Sets size and origin together; top/left resizes move the anchor corner too.
pub fn resize_window(state: &mut DesktopState, id: AppId, rect: WindowRect) -> bool {
    match state.window_mut(id) {
        Some(window) => {
            window.rect = rect;
            true
        }
        None => false,
    }
}

/// Minimizes every open window when at least one is visible. There is no matching "restore all".
pub fn show_desktop(state: &mut DesktopState) -> Option<SoundCue> {
    if !state.windows.iter().any(|w| w.is_visible()) {
        return None;
    }
    for window in state.windows.iter_mut().filter(|w| w.is_open) {
        window.minimized = true;
    }
    state.active_window = None;
    Some(SoundCue::Minimize)
}

#[cfg(test)]
mod tests {
    use platform_host::{FixedRandomSource, SeededRandomSource};
    use pretty_assertions::assert_eq;

    use super::*;

    const WORK_AREA: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 680,
    };

    fn record(state: &DesktopState, id: AppId) -> &crate::model::WindowRecord {
        state.window(id).expect("window record")
    }

    fn assert_invariants(state: &DesktopState) {
        for window in &state.windows {
            if !window.is_open {
                assert!(!window.minimized, "{} closed but minimized", window.id);
            }
            assert!(window.z_index <= state.max_z_index);
        }
        if let Some(active) = state.active_window {
            let window = record(state, active);
            assert!(window.is_open && !window.minimized, "active {active} not visible");
        }
    }

    #[test]
    fn initial_state_opens_only_the_default_slot() {
        let state = DesktopState::default();
        assert_eq!(state.active_window, Some(AppId::About));
        assert_eq!(state.max_z_index, 5);
        let open: Vec<AppId> = state
            .windows
            .iter()
            .filter(|w| w.is_open)
            .map(|w| w.id)
            .collect();
        assert_eq!(open, vec![AppId::About]);
        assert!(state.window(AppId::GitHub).is_none());
    }

    #[test]
    fn open_assigns_next_z_and_activates() {
        let mut state = DesktopState::default();
        let cue = open_window(&mut state, AppId::Chat);

        assert_eq!(cue, Some(SoundCue::Open));
        assert_eq!(record(&state, AppId::Chat).z_index, 6);
        assert_eq!(state.max_z_index, 6);
        assert_eq!(state.active_window, Some(AppId::Chat));
    }

    #[test]
    fn open_on_open_window_behaves_like_focus() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Chat);
        minimize_window(&mut state, AppId::About);

        let cue = open_window(&mut state, AppId::About);

        assert_eq!(cue, None);
        let about = record(&state, AppId::About);
        assert!(!about.minimized);
        assert_eq!(about.z_index, state.max_z_index);
        assert_eq!(state.active_window, Some(AppId::About));
    }

    #[test]
    fn focus_on_closed_window_is_a_noop() {
        let mut state = DesktopState::default();
        let before = state.clone();

        assert!(!focus_window(&mut state, AppId::Projects));
        assert_eq!(state, before);
    }

    #[test]
    fn close_clears_active_but_keeps_geometry() {
        let mut state = DesktopState::default();
        move_window(&mut state, AppId::About, 321, 123);
        minimize_window(&mut state, AppId::About);
        focus_window(&mut state, AppId::About);

        assert_eq!(close_window(&mut state, AppId::About), Some(SoundCue::Close));
        let about = record(&state, AppId::About);
        assert!(!about.is_open && !about.minimized);
        assert_eq!(state.active_window, None);

        open_window(&mut state, AppId::About);
        assert_eq!(record(&state, AppId::About).rect.position().x, 321);
    }

    #[test]
    fn minimize_of_inactive_window_keeps_active() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Projects);
        minimize_window(&mut state, AppId::About);

        assert_eq!(state.active_window, Some(AppId::Projects));
        assert!(record(&state, AppId::About).minimized);
    }

    #[test]
    fn maximize_fills_work_area_regardless_of_prior_geometry() {
        let mut state = DesktopState::default();
        move_window(&mut state, AppId::About, -400, 900);
        resize_window(
            &mut state,
            AppId::About,
            WindowRect {
                x: -400,
                y: 900,
                w: 333,
                h: 222,
            },
        );

        let cue = toggle_maximize_window(&mut state, AppId::About, WORK_AREA, &FixedRandomSource(0.0));

        assert_eq!(cue, Some(SoundCue::Open));
        let about = record(&state, AppId::About);
        assert!(about.maximized);
        assert_eq!(about.rect, WindowRect { x: 0, y: 0, w: 1280, h: 680 });
        assert_eq!(about.z_index, state.max_z_index);
    }

    #[test]
    fn restore_lands_inside_jitter_band_and_differs_between_restores() {
        let mut state = DesktopState::default();
        let random = SeededRandomSource::new(42);
        let mut restored = Vec::new();

        for _ in 0..2 {
            toggle_maximize_window(&mut state, AppId::Projects, WORK_AREA, &random);
            // Projects is closed, so nothing happens yet.
            assert!(!record(&state, AppId::Projects).maximized);
        }
        open_window(&mut state, AppId::Projects);

        for _ in 0..2 {
            toggle_maximize_window(&mut state, AppId::Projects, WORK_AREA, &random);
            let cue = toggle_maximize_window(&mut state, AppId::Projects, WORK_AREA, &random);
            assert_eq!(cue, Some(SoundCue::Minimize));
            let rect = record(&state, AppId::Projects).rect;
            assert!((50..100).contains(&rect.x), "x {} outside band", rect.x);
            assert!((50..100).contains(&rect.y), "y {} outside band", rect.y);
            assert_eq!((rect.w, rect.h), (750, 500));
            restored.push(rect);
        }

        assert_ne!(restored[0], restored[1]);
    }

    #[test]
    fn move_is_ignored_while_maximized() {
        let mut state = DesktopState::default();
        toggle_maximize_window(&mut state, AppId::About, WORK_AREA, &FixedRandomSource(0.3));

        assert!(!move_window(&mut state, AppId::About, 10, 10));
        assert_eq!(record(&state, AppId::About).rect.position().x, 0);
        assert_eq!(record(&state, AppId::About).rect.position().y, 0);
    }

    #[test]
    fn move_does_not_clamp_to_canvas() {
        let mut state = DesktopState::default();
        assert!(move_window(&mut state, AppId::About, -5000, 9000));
        let rect = record(&state, AppId::About).rect;
        assert_eq!((rect.x, rect.y), (-5000, 9000));
    }

    #[test]
    fn show_desktop_minimizes_open_windows_only() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Chat);

        assert_eq!(show_desktop(&mut state), Some(SoundCue::Minimize));
        assert_eq!(state.active_window, None);
        assert!(record(&state, AppId::About).minimized);
        assert!(record(&state, AppId::Chat).minimized);
        assert!(!record(&state, AppId::Projects).minimized);
        assert_invariants(&state);
    }

    #[test]
    fn show_desktop_with_nothing_visible_leaves_state_unchanged() {
        let mut state = DesktopState::default();
        close_window(&mut state, AppId::About);
        open_window(&mut state, AppId::Contact);
        minimize_window(&mut state, AppId::Contact);
        let before = state.clone();

        assert_eq!(show_desktop(&mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn random_operation_sequences_keep_invariants_and_monotonic_z() {
        let random = SeededRandomSource::new(0xD35C);
        let ids = [
            AppId::About,
            AppId::Projects,
            AppId::Chat,
            AppId::Contact,
            AppId::ImageGen,
            AppId::GitHub,
        ];

        for _ in 0..50 {
            let mut state = DesktopState::default();
            let mut highest_seen = state.max_z_index;
            for _ in 0..200 {
                let id = ids[random.next_below(ids.len() as i32) as usize];
                let before_max = state.max_z_index;
                let raised = match random.next_below(5) {
                    0 => {
                        open_window(&mut state, id);
                        true
                    }
                    1 => {
                        close_window(&mut state, id);
                        false
                    }
                    2 => {
                        minimize_window(&mut state, id);
                        false
                    }
                    3 => focus_window(&mut state, id),
                    _ => {
                        toggle_maximize_window(&mut state, id, WORK_AREA, &random);
                        true
                    }
                };

                assert!(state.max_z_index >= before_max);
                if let Some(window) = state.window(id) {
                    if raised && window.is_open && state.max_z_index > before_max {
                        assert!(window.z_index > highest_seen);
                        assert_eq!(window.z_index, state.max_z_index);
                    }
                }
                highest_seen = highest_seen.max(state.max_z_index);
                assert_invariants(&state);
            }
        }
    }
}
