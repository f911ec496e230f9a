//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod shell;

use platform_host::{RandomSource, SoundCue};

use crate::{
    geometry,
    model::{AppId, DesktopState, InteractionState, PointerSample, ResizeEdge, WindowRect},
    window_manager,
};

pub use shell::{taskbar_entries, TaskbarEntry};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Double-click on a desktop icon.
    ActivateDesktopIcon {
        /// Slot behind the icon.
        app_id: AppId,
    },
    /// Single click on a desktop icon.
    SelectDesktopIcon {
        /// Slot behind the icon.
        app_id: AppId,
    },
    /// Click on a taskbar entry: restore/raise, or minimize when already active.
    TaskbarClick {
        /// Window behind the entry.
        app_id: AppId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Launch a slot from the start menu.
    SelectStartMenuItem {
        /// Slot behind the menu item.
        app_id: AppId,
    },
    /// Minimize every visible window.
    ShowDesktop,
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: AppId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: AppId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: AppId,
    },
    /// Maximize a window, or restore it when already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: AppId,
        /// Work area read from the host when the action was raised.
        work_area: WindowRect,
    },
    /// Move a window's origin.
    MoveWindow {
        /// Window to move.
        window_id: AppId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Replace a window's rectangle.
    ResizeWindow {
        /// Window to resize.
        window_id: AppId,
        /// New rectangle.
        rect: WindowRect,
    },
    /// Pointer went down on a title bar.
    BeginMove {
        /// Window being dragged.
        window_id: AppId,
        /// Pointer sample at grab time.
        sample: PointerSample,
    },
    /// Pointer went down on a resize handle.
    BeginResize {
        /// Window being resized.
        window_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer sample at grab time.
        sample: PointerSample,
    },
    /// Any later pointer sample while a session may be active.
    PointerInput {
        /// Device-neutral sample.
        sample: PointerSample,
    },
    /// Drop the active pointer session (window blur, page hidden).
    ReleasePointerSessions,
    /// Login button pressed.
    RequestLogin,
    /// Welcome delay elapsed.
    CompleteLogin,
    /// Shut down chosen from the start menu.
    RequestShutdown,
    /// Shutdown screen delay elapsed.
    CompleteShutdown,
    /// A key went down anywhere on the page.
    KeyPressed {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Click on the stop screen overlay.
    DismissStopScreen,
    /// Tray sound toggle.
    SetAudioEnabled {
        /// Whether cues should play.
        enabled: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Play a UI sound cue.
    PlaySound(SoundCue),
    /// Open an external URL (for slots that leave the shell).
    OpenExternalUrl(String),
    /// Dispatch [`DesktopAction::CompleteLogin`] after `delay_ms`.
    ScheduleLogin {
        /// Delay before completing the login.
        delay_ms: u64,
    },
    /// Dispatch [`DesktopAction::CompleteShutdown`] after `delay_ms`.
    ScheduleShutdown {
        /// Delay before returning to the login screen.
        delay_ms: u64,
    },
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This is the only mutation path for [`DesktopState`]. Every action is total: targets that do not
/// apply leave the state untouched. Window, engine, taskbar and start menu actions are ignored unless
/// the shell is logged in with no stop screen up.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
    random: &dyn RandomSource,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    if !shell::reduce_shell_action(state, interaction, &action, &mut effects)
        && state.accepts_window_input()
    {
        reduce_window_action(state, interaction, action, random, &mut effects);
    }
    // Sessions never outlive their window being drawn.
    geometry::release_hidden_session(state, interaction);
    effects
}

fn reduce_window_action(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
    random: &dyn RandomSource,
    effects: &mut Vec<RuntimeEffect>,
) {
    match action {
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus_window(state, window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            let cue = window_manager::close_window(state, window_id);
            push_cue(state, effects, cue);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let cue = window_manager::minimize_window(state, window_id);
            push_cue(state, effects, cue);
        }
        DesktopAction::ToggleMaximize {
            window_id,
            work_area,
        } => {
            let cue = window_manager::toggle_maximize_window(state, window_id, work_area, random);
            push_cue(state, effects, cue);
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            window_manager::move_window(state, window_id, x, y);
        }
        DesktopAction::ResizeWindow { window_id, rect } => {
            window_manager::resize_window(state, window_id, rect);
        }
        DesktopAction::BeginMove { window_id, sample } => {
            geometry::begin_drag(state, interaction, window_id, sample);
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            sample,
        } => {
            geometry::begin_resize(state, interaction, window_id, edge, sample);
        }
        DesktopAction::PointerInput { sample } => {
            geometry::apply_pointer_sample(state, interaction, sample);
        }
        DesktopAction::ReleasePointerSessions => {
            geometry::release_sessions(interaction);
        }
        _ => {}
    }
}

/// Queues `cue` unless audio is muted.
pub(crate) fn push_cue(
    state: &DesktopState,
    effects: &mut Vec<RuntimeEffect>,
    cue: Option<SoundCue>,
) {
    if let Some(cue) = cue {
        if state.audio_enabled {
            effects.push(RuntimeEffect::PlaySound(cue));
        }
    }
}
