use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_APP_IDS: [&str; 6] = ["about", "projects", "chat", "contact", "image-gen", "github"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellConfig {
    taskbar_height_px: i32,
    login_delay_ms: u64,
    shutdown_delay_ms: u64,
    min_window_width: i32,
    min_window_height: i32,
    restore_origin_x: i32,
    restore_origin_y: i32,
    restore_jitter_px: i32,
    stop_screen_sequence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    #[serde(default)]
    default_open: bool,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    restore_width: i32,
    restore_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppSlot {
    app_id: String,
    title: String,
    desktop_label: String,
    launcher_label: String,
    launcher_subtitle: String,
    icon_glyph: String,
    window: Option<WindowDefaults>,
    external_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    shell: ShellConfig,
    apps: Vec<AppSlot>,
}

fn validate(catalog: &AppCatalog) -> Result<(), String> {
    if catalog.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            catalog.schema_version
        ));
    }

    let shell = &catalog.shell;
    if shell.taskbar_height_px <= 0 {
        return Err("taskbar_height_px must be positive".to_string());
    }
    if shell.min_window_width <= 0 || shell.min_window_height <= 0 {
        return Err("minimum window size must be positive".to_string());
    }
    if shell.restore_jitter_px < 0 {
        return Err("restore_jitter_px must not be negative".to_string());
    }
    if shell.stop_screen_sequence.trim().is_empty() {
        return Err("stop_screen_sequence must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    let mut default_open = 0;
    for app in &catalog.apps {
        if !KNOWN_APP_IDS.contains(&app.app_id.as_str()) {
            return Err(format!("unknown app id `{}`", app.app_id));
        }
        if !seen.insert(app.app_id.clone()) {
            return Err(format!("duplicate app id `{}`", app.app_id));
        }
        match (&app.window, &app.external_url) {
            (Some(window), None) => {
                if window.default_open {
                    default_open += 1;
                }
                let too_small = window.width < shell.min_window_width
                    || window.height < shell.min_window_height
                    || window.restore_width < shell.min_window_width
                    || window.restore_height < shell.min_window_height;
                if too_small {
                    return Err(format!(
                        "window defaults for `{}` are below the minimum window size",
                        app.app_id
                    ));
                }
            }
            (None, Some(url)) if !url.trim().is_empty() => {}
            _ => {
                return Err(format!(
                    "`{}` needs exactly one of a window table or an external_url",
                    app.app_id
                ));
            }
        }
    }
    for id in KNOWN_APP_IDS {
        if !seen.contains(id) {
            return Err(format!("missing app slot `{id}`"));
        }
    }
    if default_open > 1 {
        return Err("at most one app slot may be default_open".to_string());
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&catalog) {
        panic!("invalid app catalog {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
