use serde::{Deserialize, Serialize};

use crate::apps::AppCatalog;

/// Application slot identity. The set is closed; windows are never created dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    About,
    Projects,
    Chat,
    Contact,
    ImageGen,
    #[serde(rename = "github")]
    GitHub,
}

impl AppId {
    pub const ALL: [AppId; 6] = [
        Self::About,
        Self::Projects,
        Self::Chat,
        Self::Contact,
        Self::ImageGen,
        Self::GitHub,
    ];

    /// Stable token used by the app catalog and DOM ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Chat => "chat",
            Self::Contact => "contact",
            Self::ImageGen => "image-gen",
            Self::GitHub => "github",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == token)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn position(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u32,
    /// Position and size; meaningless while `maximized`.
    pub rect: WindowRect,
}

impl WindowRecord {
    /// Whether the window is drawn on the canvas (and therefore hit-testable).
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.minimized
    }
}

/// Top-level presentation mode of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationMode {
    LoggedOut,
    LoggedIn,
    ShuttingDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub mode: PresentationMode,
    /// Login was requested and the welcome delay is running.
    pub login_pending: bool,
    pub windows: Vec<WindowRecord>,
    pub active_window: Option<AppId>,
    /// Running maximum of every z-index ever assigned this session.
    pub max_z_index: u32,
    pub start_menu_open: bool,
    pub stop_screen: bool,
    /// Most recent lower-cased key presses, bounded by the stop-screen sequence length.
    pub recent_keys: String,
    pub audio_enabled: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::initial(crate::apps::app_catalog())
    }
}

impl DesktopState {
    /// Builds the start-of-session state: one record per windowed slot, in catalog order.
    pub fn initial(catalog: &AppCatalog) -> Self {
        let mut active_window = None;
        let windows: Vec<WindowRecord> = catalog
            .window_slots()
            .enumerate()
            .map(|(idx, (app_id, slot, window))| {
                if window.default_open && active_window.is_none() {
                    active_window = Some(app_id);
                }
                WindowRecord {
                    id: app_id,
                    title: slot.title.clone(),
                    is_open: window.default_open,
                    minimized: false,
                    maximized: false,
                    z_index: (idx + 1) as u32,
                    rect: window.default_rect(),
                }
            })
            .collect();
        let max_z_index = windows.len() as u32;

        Self {
            mode: PresentationMode::LoggedOut,
            login_pending: false,
            windows,
            active_window,
            max_z_index,
            start_menu_open: false,
            stop_screen: false,
            recent_keys: String::new(),
            audio_enabled: true,
        }
    }

    pub fn window(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Window input is only honored while logged in and no full-screen overlay is up.
    pub fn accepts_window_input(&self) -> bool {
        self.mode == PresentationMode::LoggedIn && !self.stop_screen
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Device-neutral pointer event fed to the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub position: PointerPosition,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub fn mouse(phase: PointerPhase, x: i32, y: i32) -> Self {
        Self {
            pointer_id: 1,
            kind: PointerKind::Mouse,
            position: PointerPosition { x, y },
            phase,
        }
    }

    pub fn touch(pointer_id: i32, phase: PointerPhase, x: i32, y: i32) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            position: PointerPosition { x, y },
            phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Which sides of the window a resize handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeFlags {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn flags(self) -> EdgeFlags {
        let (north, south, east, west) = match self {
            Self::North => (true, false, false, false),
            Self::South => (false, true, false, false),
            Self::East => (false, false, true, false),
            Self::West => (false, false, false, true),
            Self::NorthEast => (true, false, true, false),
            Self::NorthWest => (true, false, false, true),
            Self::SouthEast => (false, true, true, false),
            Self::SouthWest => (false, true, false, true),
        };
        EdgeFlags {
            north,
            south,
            east,
            west,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: AppId,
    pub pointer_id: i32,
    /// Pointer position minus window origin at grab time.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub pointer_id: i32,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// The single pointer-driven session the engine may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl PointerSession {
    pub fn window_id(&self) -> AppId {
        match self {
            Self::Drag(session) => session.window_id,
            Self::Resize(session) => session.window_id,
        }
    }

    pub fn pointer_id(&self) -> i32 {
        match self {
            Self::Drag(session) => session.pointer_id,
            Self::Resize(session) => session.pointer_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub session: Option<PointerSession>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Some(PointerSession::Drag(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.session, Some(PointerSession::Resize(_)))
    }
}
