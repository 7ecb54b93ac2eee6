//! Application catalog parsing.
//!
//! The portfolio's fixed set of applications is authored as a TOML manifest and compiled into JSON
//! by the site's build script. This module turns that JSON into [`DesktopConfig`] plus one
//! [`WindowConfig`] per application, resolving content keys through a caller-supplied lookup so
//! the runtime never needs to know what the panels are.

use std::collections::HashSet;

use desktop_app_contract::ContentModule;
use serde::{Deserialize, Serialize};
use system_ui::IconName;
use thiserror::Error;

use crate::model::{
    DesktopConfig, OpenPolicy, WindowConfig, WindowPosition, WindowSize, DEFAULT_DOCK_HEIGHT,
    DEFAULT_DRAG_MIN_VISIBLE,
};

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(String),
    #[error("unsupported catalog schema version {0}")]
    SchemaVersion(u32),
    #[error("application id `{0}` is listed more than once")]
    DuplicateId(String),
    #[error("application id must not be empty")]
    EmptyId,
    #[error("application `{app}` uses unknown icon `{icon}`")]
    UnknownIcon { app: String, icon: String },
    #[error("application `{app}` uses unknown content `{content}`")]
    UnknownContent { app: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSection {
    #[serde(default)]
    pub open_policy: OpenPolicy,
    #[serde(default = "default_drag_min_visible")]
    pub drag_min_visible: i32,
    #[serde(default = "default_dock_height")]
    pub dock_height: i32,
}

impl Default for DesktopSection {
    fn default() -> Self {
        Self {
            open_policy: OpenPolicy::default(),
            drag_min_visible: DEFAULT_DRAG_MIN_VISIBLE,
            dock_height: DEFAULT_DOCK_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogApp {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub content: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    #[serde(default = "default_true")]
    pub show_on_desktop: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub schema_version: u32,
    #[serde(default)]
    pub desktop: DesktopSection,
    pub apps: Vec<CatalogApp>,
}

/// Parsed catalog ready to hand to the desktop composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopCatalog {
    pub config: DesktopConfig,
    pub windows: Vec<WindowConfig>,
}

fn default_drag_min_visible() -> i32 {
    DEFAULT_DRAG_MIN_VISIBLE
}

fn default_dock_height() -> i32 {
    DEFAULT_DOCK_HEIGHT
}

fn default_true() -> bool {
    true
}

/// Parses and validates catalog JSON.
///
/// # Errors
///
/// Returns a [`CatalogError`] for malformed JSON, a schema mismatch, empty or duplicate ids, or
/// icon and content keys that cannot be resolved.
pub fn parse_catalog(
    json: &str,
    resolve_content: impl Fn(&str) -> Option<ContentModule>,
) -> Result<DesktopCatalog, CatalogError> {
    let manifest: CatalogManifest =
        serde_json::from_str(json).map_err(|err| CatalogError::Malformed(err.to_string()))?;
    build_catalog(manifest, resolve_content)
}

pub fn build_catalog(
    manifest: CatalogManifest,
    resolve_content: impl Fn(&str) -> Option<ContentModule>,
) -> Result<DesktopCatalog, CatalogError> {
    if manifest.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::SchemaVersion(manifest.schema_version));
    }

    let mut seen = HashSet::new();
    let mut windows = Vec::with_capacity(manifest.apps.len());
    for app in manifest.apps {
        if app.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !seen.insert(app.id.clone()) {
            return Err(CatalogError::DuplicateId(app.id));
        }
        let icon = IconName::from_token(&app.icon).ok_or_else(|| CatalogError::UnknownIcon {
            app: app.id.clone(),
            icon: app.icon.clone(),
        })?;
        let content =
            resolve_content(&app.content).ok_or_else(|| CatalogError::UnknownContent {
                app: app.id.clone(),
                content: app.content.clone(),
            })?;

        let mut window = WindowConfig::new(app.id.as_str(), app.title, icon, content);
        window.position = match (app.x, app.y) {
            (Some(x), Some(y)) => Some(WindowPosition { x, y }),
            _ => None,
        };
        window.size = match (app.width, app.height) {
            (Some(width), Some(height)) => Some(WindowSize { width, height }.sanitized()),
            _ => None,
        };
        window.show_on_desktop = app.show_on_desktop;
        windows.push(window);
    }

    let desktop = manifest.desktop;
    Ok(DesktopCatalog {
        config: DesktopConfig {
            open_policy: desktop.open_policy,
            drag_min_visible: desktop.drag_min_visible.max(0),
            dock_height: if desktop.dock_height > 0 {
                desktop.dock_height
            } else {
                DEFAULT_DOCK_HEIGHT
            },
        },
        windows,
    })
}
