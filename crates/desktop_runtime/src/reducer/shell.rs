//! Reducer helpers for shell surfaces: desktop icons, taskbar, start menu, login/shutdown and the
//! stop screen.

use platform_host::SoundCue;

use crate::{
    apps::{app_catalog, shell_config},
    geometry,
    model::{AppId, DesktopState, InteractionState, PresentationMode},
    reducer::{push_cue, DesktopAction, RuntimeEffect},
    window_manager,
};

/// One running-window button on the taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app_id: AppId,
    pub title: String,
    pub minimized: bool,
    /// Active and not minimized.
    pub highlighted: bool,
}

/// Open windows in slot order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .filter(|window| window.is_open)
        .map(|window| TaskbarEntry {
            app_id: window.id,
            title: window.title.clone(),
            minimized: window.minimized,
            highlighted: state.active_window == Some(window.id) && !window.minimized,
        })
        .collect()
}

/// Handles shell-level actions. Returns `false` for actions that belong to the window manager.
pub(super) fn reduce_shell_action(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    let accepts_input = state.accepts_window_input();
    match action {
        DesktopAction::ActivateDesktopIcon { app_id } => {
            if accepts_input {
                launch_slot(state, *app_id, effects);
            }
        }
        DesktopAction::SelectDesktopIcon { .. } => {
            if accepts_input {
                push_cue(state, effects, Some(SoundCue::Click));
            }
        }
        DesktopAction::TaskbarClick { app_id } => {
            if accepts_input {
                taskbar_click(state, *app_id, effects);
            }
        }
        DesktopAction::ToggleStartMenu => {
            if accepts_input {
                state.start_menu_open = !state.start_menu_open;
                push_cue(state, effects, Some(SoundCue::Click));
            }
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SelectStartMenuItem { app_id } => {
            if accepts_input {
                push_cue(state, effects, Some(SoundCue::Click));
                state.start_menu_open = false;
                launch_slot(state, *app_id, effects);
            }
        }
        DesktopAction::ShowDesktop => {
            if accepts_input {
                let cue = window_manager::show_desktop(state);
                push_cue(state, effects, cue);
            }
        }
        DesktopAction::RequestLogin => {
            if state.mode == PresentationMode::LoggedOut && !state.login_pending {
                state.login_pending = true;
                effects.push(RuntimeEffect::ScheduleLogin {
                    delay_ms: shell_config().login_delay_ms,
                });
            }
        }
        DesktopAction::CompleteLogin => {
            if state.mode == PresentationMode::LoggedOut && state.login_pending {
                state.login_pending = false;
                state.mode = PresentationMode::LoggedIn;
                push_cue(state, effects, Some(SoundCue::Startup));
            }
        }
        DesktopAction::RequestShutdown => {
            if state.mode == PresentationMode::LoggedIn {
                state.mode = PresentationMode::ShuttingDown;
                state.start_menu_open = false;
                geometry::release_sessions(interaction);
                effects.push(RuntimeEffect::ScheduleShutdown {
                    delay_ms: shell_config().shutdown_delay_ms,
                });
            }
        }
        DesktopAction::CompleteShutdown => {
            if state.mode == PresentationMode::ShuttingDown {
                *state = DesktopState::initial(app_catalog());
                geometry::release_sessions(interaction);
            }
        }
        DesktopAction::KeyPressed { key } => {
            if !state.stop_screen && record_key(state, key) {
                state.stop_screen = true;
                state.start_menu_open = false;
                geometry::release_sessions(interaction);
            }
        }
        DesktopAction::DismissStopScreen => {
            state.stop_screen = false;
        }
        DesktopAction::SetAudioEnabled { enabled } => {
            state.audio_enabled = *enabled;
        }
        _ => return false,
    }
    true
}

/// Opens a windowed slot or hands an external slot to the host.
fn launch_slot(state: &mut DesktopState, app_id: AppId, effects: &mut Vec<RuntimeEffect>) {
    if let Some(url) = app_catalog().external_url(app_id) {
        push_cue(state, effects, Some(SoundCue::Click));
        effects.push(RuntimeEffect::OpenExternalUrl(url.to_string()));
        return;
    }
    let cue = window_manager::open_window(state, app_id);
    push_cue(state, effects, cue);
}

/// Decides from the state as it was before this click: restore/raise, or minimize the active window.
fn taskbar_click(state: &mut DesktopState, app_id: AppId, effects: &mut Vec<RuntimeEffect>) {
    push_cue(state, effects, Some(SoundCue::Click));
    state.start_menu_open = false;

    let Some(window) = state.window(app_id) else {
        return;
    };
    if !window.is_open {
        return;
    }

    let raise = window.minimized || state.active_window != Some(app_id);
    if raise {
        window_manager::focus_window(state, app_id);
    } else {
        let cue = window_manager::minimize_window(state, app_id);
        push_cue(state, effects, cue);
    }
}

/// Appends a key to the recent-key buffer and reports whether the stop-screen sequence completed.
///
/// Named keys (`Shift`, `Enter`, ...) break the sequence.
fn record_key(state: &mut DesktopState, key: &str) -> bool {
    let sequence = shell_config().stop_screen_sequence.to_lowercase();
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => state.recent_keys.extend(ch.to_lowercase()),
        _ => {
            state.recent_keys.clear();
            return false;
        }
    }

    let limit = sequence.chars().count();
    let excess = state.recent_keys.chars().count().saturating_sub(limit);
    if excess > 0 {
        state.recent_keys = state.recent_keys.chars().skip(excess).collect();
    }

    if state.recent_keys == sequence {
        state.recent_keys.clear();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use platform_host::FixedRandomSource;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action, &FixedRandomSource(0.0))
    }

    fn logged_in() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::RequestLogin);
        reduce(&mut state, &mut interaction, DesktopAction::CompleteLogin);
        (state, interaction)
    }

    fn cue(cue: SoundCue) -> RuntimeEffect {
        RuntimeEffect::PlaySound(cue)
    }

    #[test]
    fn login_schedules_completion_once_and_plays_startup() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = reduce(&mut state, &mut interaction, DesktopAction::RequestLogin);
        let second = reduce(&mut state, &mut interaction, DesktopAction::RequestLogin);
        assert_eq!(first, vec![RuntimeEffect::ScheduleLogin { delay_ms: 1200 }]);
        assert!(second.is_empty());
        assert_eq!(state.mode, PresentationMode::LoggedOut);

        let done = reduce(&mut state, &mut interaction, DesktopAction::CompleteLogin);
        assert_eq!(done, vec![cue(SoundCue::Startup)]);
        assert_eq!(state.mode, PresentationMode::LoggedIn);
        assert!(!state.login_pending);
    }

    #[test]
    fn complete_login_without_request_is_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        assert!(reduce(&mut state, &mut interaction, DesktopAction::CompleteLogin).is_empty());
        assert_eq!(state.mode, PresentationMode::LoggedOut);
    }

    #[test]
    fn taskbar_scenario_restores_then_minimizes() {
        let (mut state, mut interaction) = logged_in();
        assert_eq!(state.active_window, Some(AppId::About));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDesktopIcon {
                app_id: AppId::Projects,
            },
        );
        assert_eq!(state.active_window, Some(AppId::Projects));
        let projects_z = state.window(AppId::Projects).expect("projects").z_index;
        assert!(projects_z > state.window(AppId::About).expect("about").z_index);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: AppId::Projects,
            },
        );
        assert_eq!(state.active_window, None);
        assert!(state.window(AppId::Projects).expect("projects").minimized);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::TaskbarClick {
                app_id: AppId::Projects,
            },
        );
        assert_eq!(effects, vec![cue(SoundCue::Click)]);
        let projects = state.window(AppId::Projects).expect("projects");
        assert!(!projects.minimized);
        assert_eq!(state.active_window, Some(AppId::Projects));
        assert_eq!(projects.z_index, state.max_z_index);
        assert!(projects.z_index > projects_z);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::TaskbarClick {
                app_id: AppId::Projects,
            },
        );
        assert_eq!(effects, vec![cue(SoundCue::Click), cue(SoundCue::Minimize)]);
        assert!(state.window(AppId::Projects).expect("projects").minimized);
    }

    #[test]
    fn taskbar_click_on_inactive_window_focuses_and_closes_start_menu() {
        let (mut state, mut interaction) = logged_in();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDesktopIcon {
                app_id: AppId::Chat,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::TaskbarClick {
                app_id: AppId::About,
            },
        );

        assert_eq!(state.active_window, Some(AppId::About));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn external_slot_hands_off_url_without_touching_windows() {
        let (mut state, mut interaction) = logged_in();
        let windows = state.windows.clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDesktopIcon {
                app_id: AppId::GitHub,
            },
        );

        assert_eq!(
            effects,
            vec![
                cue(SoundCue::Click),
                RuntimeEffect::OpenExternalUrl("https://github.com".to_string()),
            ]
        );
        assert_eq!(state.windows, windows);
    }

    #[test]
    fn start_menu_item_opens_slot_and_closes_menu() {
        let (mut state, mut interaction) = logged_in();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectStartMenuItem {
                app_id: AppId::Contact,
            },
        );

        assert_eq!(effects, vec![cue(SoundCue::Click), cue(SoundCue::Open)]);
        assert!(!state.start_menu_open);
        assert!(state.window(AppId::Contact).expect("contact").is_open);
    }

    #[test]
    fn shell_input_is_ignored_before_login() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        for action in [
            DesktopAction::ToggleStartMenu,
            DesktopAction::ShowDesktop,
            DesktopAction::ActivateDesktopIcon {
                app_id: AppId::Chat,
            },
            DesktopAction::TaskbarClick {
                app_id: AppId::About,
            },
        ] {
            assert!(reduce(&mut state, &mut interaction, action).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn shutdown_runs_once_and_resets_to_initial_state() {
        let (mut state, mut interaction) = logged_in();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateDesktopIcon {
                app_id: AppId::ImageGen,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::RequestShutdown);
        assert_eq!(effects, vec![RuntimeEffect::ScheduleShutdown { delay_ms: 3000 }]);
        assert_eq!(state.mode, PresentationMode::ShuttingDown);
        assert!(!state.start_menu_open);
        assert!(reduce(&mut state, &mut interaction, DesktopAction::RequestShutdown).is_empty());
        assert!(reduce(&mut state, &mut interaction, DesktopAction::RequestLogin).is_empty());

        reduce(&mut state, &mut interaction, DesktopAction::CompleteShutdown);
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn typing_the_sequence_raises_stop_screen_and_blocks_window_input() {
        let (mut state, mut interaction) = logged_in();
        for key in ["x", "B", "s", "o", "d"] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::KeyPressed {
                    key: key.to_string(),
                },
            );
        }
        assert!(state.stop_screen);

        let before = state.clone();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: AppId::About,
            },
        );
        assert_eq!(state, before);

        reduce(&mut state, &mut interaction, DesktopAction::DismissStopScreen);
        assert!(!state.stop_screen);
        assert!(state.accepts_window_input());
    }

    #[test]
    fn named_keys_break_the_sequence() {
        let (mut state, mut interaction) = logged_in();
        for key in ["b", "s", "Shift", "o", "d"] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::KeyPressed {
                    key: key.to_string(),
                },
            );
        }
        assert!(!state.stop_screen);
        assert_eq!(state.recent_keys, "od");
    }

    #[test]
    fn taskbar_entries_follow_slot_order_and_highlight_active() {
        let (mut state, mut interaction) = logged_in();
        for app_id in [AppId::Contact, AppId::Projects] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateDesktopIcon { app_id },
            );
        }
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: AppId::About,
            },
        );

        let entries = taskbar_entries(&state);
        let ids: Vec<AppId> = entries.iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, vec![AppId::About, AppId::Projects, AppId::Contact]);
        let highlighted: Vec<bool> = entries.iter().map(|entry| entry.highlighted).collect();
        assert_eq!(highlighted, vec![false, true, false]);
        assert!(entries[0].minimized);
    }
}
