//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::ShellEvent;

use crate::{
    dock::{dock_click_action, DockAction},
    model::{
        DesktopConfig, DragSession, DragState, PointerPosition, WindowConfig, WindowId, WindowRect,
    },
    registry::WindowRegistry,
    window_manager::{clamp_position, drag_position},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate the [`WindowRegistry`].
pub enum DesktopAction {
    /// Register a catalog window (no-op when the id already exists).
    Register(WindowConfig),
    /// Open (or re-raise) a window.
    Open {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized layout and focus the window.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Focus (and raise) a window.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Apply the dock's open/focus/minimize toggle for a window.
    DockClick {
        /// Window associated with the dock icon.
        window_id: WindowId,
    },
    /// Pointer went down on a title bar: focus the window and start dragging it.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Desktop area the window is clamped into.
        viewport: WindowRect,
    },
    /// Pointer released or capture lost: end any drag.
    EndMove,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Publish a lifecycle event to subscribers (for example the sound player).
    Announce(ShellEvent),
    /// Move keyboard focus into the newly focused window.
    FocusWindowInput(WindowId),
}

/// Applies a [`DesktopAction`] to the registry and drag state and collects resulting side effects.
///
/// Actions that address unknown or inapplicable windows leave the state untouched and return no
/// effects.
pub fn reduce_desktop(
    registry: &mut WindowRegistry,
    drag: &mut DragState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    match action {
        DesktopAction::Register(window) => {
            registry.register(window);
            Vec::new()
        }
        DesktopAction::Open { window_id } => {
            let events = registry.open(&window_id);
            raise_effects(events, window_id)
        }
        DesktopAction::Close { window_id } => announce(registry.close(&window_id)),
        DesktopAction::Minimize { window_id } => announce(registry.minimize(&window_id)),
        DesktopAction::ToggleMaximize { window_id } => {
            let events = registry.maximize(&window_id);
            raise_effects(events, window_id)
        }
        DesktopAction::Focus { window_id } => {
            let events = registry.focus(&window_id);
            raise_effects(events, window_id)
        }
        DesktopAction::DockClick { window_id } => {
            let next = match dock_click_action(registry, &window_id) {
                Some(DockAction::Open) => DesktopAction::Open { window_id },
                Some(DockAction::Focus) => DesktopAction::Focus { window_id },
                Some(DockAction::Minimize) => DesktopAction::Minimize { window_id },
                None => return Vec::new(),
            };
            reduce_desktop(registry, drag, config, next)
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = registry.get(&window_id).filter(|w| w.is_visible()) else {
                return Vec::new();
            };
            let maximized = window.is_maximized;
            let position_start = window.position;
            let events = registry.focus(&window_id);
            *drag = if maximized {
                DragState::Idle
            } else {
                DragState::Dragging(DragSession {
                    window_id: window_id.clone(),
                    pointer_start: pointer,
                    position_start,
                })
            };
            raise_effects(events, window_id)
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            let Some(session) = drag.session() else {
                return Vec::new();
            };
            let Some(window) = registry.get(&session.window_id) else {
                return Vec::new();
            };
            let target = clamp_position(
                drag_position(session, pointer),
                window.size,
                viewport,
                config.drag_min_visible,
            );
            registry.move_to(&session.window_id, target);
            Vec::new()
        }
        DesktopAction::EndMove => {
            *drag = DragState::Idle;
            Vec::new()
        }
    }
}

fn announce(events: Vec<ShellEvent>) -> Vec<RuntimeEffect> {
    events.into_iter().map(RuntimeEffect::Announce).collect()
}

fn raise_effects(events: Vec<ShellEvent>, window_id: WindowId) -> Vec<RuntimeEffect> {
    if events.is_empty() {
        return Vec::new();
    }
    let mut effects = announce(events);
    effects.push(RuntimeEffect::FocusWindowInput(window_id));
    effects
}
