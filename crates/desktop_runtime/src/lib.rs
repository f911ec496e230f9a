//! Desktop metaphor runtime: window manager state, pointer engine, shell flow and the Leptos
//! surfaces that render them.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use apps::{app_catalog, shell_config, AppCatalog, AppRegistry, CatalogError};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, taskbar_entries, DesktopAction, RuntimeEffect, TaskbarEntry};
