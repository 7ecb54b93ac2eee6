//! Dock toggle semantics: one icon per registered window acting as launch, restore, hide or raise.

use system_ui::IconName;

use crate::{
    model::{WindowId, WindowState},
    registry::WindowRegistry,
};

/// Registry operation a dock click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    Open,
    Focus,
    Minimize,
}

/// Visual marker under a dock icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockMarker {
    Closed,
    Running,
    Active,
    Minimized,
}

impl DockMarker {
    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Running => "running",
            Self::Active => "active",
            Self::Minimized => "minimized",
        }
    }

    pub fn has_open_window(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub marker: DockMarker,
}

/// Resolves a dock click on `id`:
///
/// | window state                    | action     |
/// |---------------------------------|------------|
/// | not open                        | `Open`     |
/// | open, minimized                 | `Focus`    |
/// | open, not minimized, active     | `Minimize` |
/// | open, not minimized, not active | `Focus`    |
///
/// Returns `None` for unregistered ids.
pub fn dock_click_action(registry: &WindowRegistry, id: &WindowId) -> Option<DockAction> {
    let window = registry.get(id)?;
    let action = if !window.is_open {
        DockAction::Open
    } else if window.is_minimized {
        DockAction::Focus
    } else if registry.is_active(id) {
        DockAction::Minimize
    } else {
        DockAction::Focus
    };
    Some(action)
}

pub fn dock_marker(window: &WindowState, active: bool) -> DockMarker {
    if !window.is_open {
        DockMarker::Closed
    } else if window.is_minimized {
        DockMarker::Minimized
    } else if active {
        DockMarker::Active
    } else {
        DockMarker::Running
    }
}

/// One entry per registered window, in registration order, open or not.
pub fn dock_entries(registry: &WindowRegistry) -> Vec<DockEntry> {
    registry
        .windows()
        .iter()
        .map(|w| DockEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            icon: w.icon,
            marker: dock_marker(w, registry.is_active(&w.id)),
        })
        .collect()
}

pub fn dock_aria_label(entry: &DockEntry) -> String {
    match entry.marker {
        DockMarker::Closed => entry.title.clone(),
        DockMarker::Running => format!("{}, open", entry.title),
        DockMarker::Active => format!("{}, active", entry.title),
        DockMarker::Minimized => format!("{}, minimized", entry.title),
    }
}
