//! Application-slot catalog and the id → content lookup table.
//!
//! The catalog is authored in `app_catalog.toml`, validated by the build script and embedded as
//! JSON. [`AppRegistry`] pairs every slot with its content provider once, at shell construction, so
//! the window renderer never matches on [`AppId`] itself.

mod placeholders;

use std::sync::OnceLock;

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AppId, WindowRect};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub taskbar_height_px: i32,
    pub login_delay_ms: u64,
    pub shutdown_delay_ms: u64,
    pub min_window_width: i32,
    pub min_window_height: i32,
    pub restore_origin_x: i32,
    pub restore_origin_y: i32,
    pub restore_jitter_px: i32,
    pub stop_screen_sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDefaults {
    #[serde(default)]
    pub default_open: bool,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub restore_width: i32,
    pub restore_height: i32,
}

impl WindowDefaults {
    pub fn default_rect(&self) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    Window(WindowDefaults),
    External { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSlot {
    pub app_id: AppId,
    pub title: String,
    pub desktop_label: String,
    pub launcher_label: String,
    pub launcher_subtitle: String,
    pub icon_glyph: String,
    pub launch: LaunchTarget,
}

#[derive(Debug, Clone, Deserialize)]
struct RawAppSlot {
    app_id: AppId,
    title: String,
    desktop_label: String,
    launcher_label: String,
    launcher_subtitle: String,
    icon_glyph: String,
    window: Option<WindowDefaults>,
    external_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawAppCatalog {
    schema_version: u32,
    shell: ShellConfig,
    apps: Vec<RawAppSlot>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("app catalog is not valid json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("app catalog schema mismatch: expected {expected} found {found}")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("app slot `{0}` must declare exactly one of a window or an external url")]
    LaunchTarget(AppId),
    #[error("app slot `{0}` is missing from the catalog")]
    MissingSlot(AppId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCatalog {
    pub shell: ShellConfig,
    slots: Vec<AppSlot>,
}

impl AppCatalog {
    /// Decodes and checks a catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawAppCatalog = serde_json::from_str(raw)?;
        if raw.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion {
                expected: CATALOG_SCHEMA_VERSION,
                found: raw.schema_version,
            });
        }

        let mut slots = Vec::with_capacity(raw.apps.len());
        for app in raw.apps {
            let launch = match (app.window, app.external_url) {
                (Some(window), None) => LaunchTarget::Window(window),
                (None, Some(url)) if !url.trim().is_empty() => LaunchTarget::External { url },
                _ => return Err(CatalogError::LaunchTarget(app.app_id)),
            };
            slots.push(AppSlot {
                app_id: app.app_id,
                title: app.title,
                desktop_label: app.desktop_label,
                launcher_label: app.launcher_label,
                launcher_subtitle: app.launcher_subtitle,
                icon_glyph: app.icon_glyph,
                launch,
            });
        }

        if let Some(missing) = AppId::ALL
            .into_iter()
            .find(|id| slots.iter().all(|slot| slot.app_id != *id))
        {
            return Err(CatalogError::MissingSlot(missing));
        }

        Ok(Self {
            shell: raw.shell,
            slots,
        })
    }

    pub fn slots(&self) -> &[AppSlot] {
        &self.slots
    }

    pub fn slot(&self, app_id: AppId) -> Option<&AppSlot> {
        self.slots.iter().find(|slot| slot.app_id == app_id)
    }

    /// Slots that own a window, in catalog order.
    pub fn window_slots(&self) -> impl Iterator<Item = (AppId, &AppSlot, &WindowDefaults)> {
        self.slots.iter().filter_map(|slot| match &slot.launch {
            LaunchTarget::Window(window) => Some((slot.app_id, slot, window)),
            LaunchTarget::External { .. } => None,
        })
    }

    pub fn window_defaults(&self, app_id: AppId) -> Option<&WindowDefaults> {
        match &self.slot(app_id)?.launch {
            LaunchTarget::Window(window) => Some(window),
            LaunchTarget::External { .. } => None,
        }
    }

    pub fn external_url(&self, app_id: AppId) -> Option<&str> {
        match &self.slot(app_id)?.launch {
            LaunchTarget::External { url } => Some(url.as_str()),
            LaunchTarget::Window(_) => None,
        }
    }
}

/// Returns the embedded catalog.
///
/// # Panics
///
/// Panics if the embedded catalog fails to decode, which the build script rules out.
pub fn app_catalog() -> &'static AppCatalog {
    static CATALOG: OnceLock<AppCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        AppCatalog::from_json(APP_CATALOG_JSON).expect("build script validates the app catalog")
    })
}

pub fn shell_config() -> &'static ShellConfig {
    &app_catalog().shell
}

/// Renders the body of a window slot.
pub type ContentProvider = fn() -> View;

#[derive(Debug, Clone)]
pub struct AppEntry {
    pub slot: AppSlot,
    /// `None` for external-link slots.
    pub content: Option<ContentProvider>,
}

/// Lookup table from slot id to its catalog entry and content provider.
#[derive(Debug, Clone)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

impl AppRegistry {
    pub fn from_catalog(catalog: &AppCatalog) -> Self {
        let entries = catalog
            .slots()
            .iter()
            .map(|slot| AppEntry {
                content: match slot.launch {
                    LaunchTarget::Window(_) => Some(placeholders::content_provider(slot.app_id)),
                    LaunchTarget::External { .. } => None,
                },
                slot: slot.clone(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn entry(&self, app_id: AppId) -> Option<&AppEntry> {
        self.entries.iter().find(|entry| entry.slot.app_id == app_id)
    }

    pub fn render_content(&self, app_id: AppId) -> Option<View> {
        self.entry(app_id)?.content.map(|provider| provider())
    }

    pub fn icon_glyph(&self, app_id: AppId) -> &str {
        self.entry(app_id)
            .map(|entry| entry.slot.icon_glyph.as_str())
            .unwrap_or("▫")
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::from_catalog(app_catalog())
    }
}
