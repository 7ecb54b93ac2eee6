//! Session-wide window registry: the single source of truth for window state.
//!
//! The registry owns every [`WindowState`], the monotonic stacking counter, and the active-window
//! pointer. Only the operations here mutate that state. Every operation on an id that is not
//! registered is absorbed as a no-op: launchers, dock entries and keyboard shortcuts are decoupled
//! from registry state and may race with registration.

use desktop_app_contract::{ShellEvent, ShellEventKind};
use leptos::logging;

use crate::model::{OpenPolicy, WindowConfig, WindowId, WindowPosition, WindowState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowState>,
    z_counter: u64,
    active_id: Option<WindowId>,
    open_policy: OpenPolicy,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open_policy(open_policy: OpenPolicy) -> Self {
        Self {
            open_policy,
            ..Self::default()
        }
    }

    pub fn open_policy(&self) -> OpenPolicy {
        self.open_policy
    }

    /// Inserts a closed window for `config.id` unless one is already registered.
    ///
    /// Returns `true` when a new entry was inserted. Re-registering never touches existing state.
    pub fn register(&mut self, config: WindowConfig) -> bool {
        if self.contains(&config.id) {
            return false;
        }
        self.windows.push(WindowState::from_config(config));
        true
    }

    /// Shows the window, clears minimized, raises it and makes it active.
    ///
    /// Opening an already visible window still restacks it.
    pub fn open(&mut self, id: &WindowId) -> Vec<ShellEvent> {
        let policy = self.open_policy;
        let z_index = self.z_counter + 1;
        let Some(window) = self.find_mut(id) else {
            return ignored("open", id);
        };
        window.is_open = true;
        window.is_minimized = false;
        if policy == OpenPolicy::Maximized {
            window.is_maximized = true;
        }
        window.z_index = z_index;
        self.z_counter = z_index;
        self.active_id = Some(id.clone());
        vec![ShellEvent::new(ShellEventKind::Opened, id.as_str())]
    }

    /// Hides the window and drops the maximized layout. Geometry and content are left alone.
    ///
    /// Closing a window that is already closed emits nothing.
    pub fn close(&mut self, id: &WindowId) -> Vec<ShellEvent> {
        let Some(window) = self.find_mut(id).filter(|w| w.is_open) else {
            return ignored("close", id);
        };
        window.is_open = false;
        window.is_maximized = false;
        self.release_active(id);
        vec![ShellEvent::new(ShellEventKind::Closed, id.as_str())]
    }

    pub fn minimize(&mut self, id: &WindowId) -> Vec<ShellEvent> {
        let Some(window) = self.find_mut(id).filter(|w| w.is_open) else {
            return ignored("minimize", id);
        };
        window.is_minimized = true;
        self.release_active(id);
        vec![ShellEvent::new(ShellEventKind::Minimized, id.as_str())]
    }

    /// Toggles the maximized layout, then focuses the window regardless of direction.
    pub fn maximize(&mut self, id: &WindowId) -> Vec<ShellEvent> {
        let Some(window) = self.find_mut(id).filter(|w| w.is_open) else {
            return ignored("maximize", id);
        };
        window.is_maximized = !window.is_maximized;
        let kind = if window.is_maximized {
            ShellEventKind::Maximized
        } else {
            ShellEventKind::Restored
        };
        let mut events = vec![ShellEvent::new(kind, id.as_str())];
        events.extend(self.focus(id));
        events
    }

    /// Makes an open window active, un-minimizes it and raises it above every other window.
    pub fn focus(&mut self, id: &WindowId) -> Vec<ShellEvent> {
        let z_index = self.z_counter + 1;
        let Some(window) = self.find_mut(id).filter(|w| w.is_open) else {
            return ignored("focus", id);
        };
        window.is_minimized = false;
        window.z_index = z_index;
        self.z_counter = z_index;
        self.active_id = Some(id.clone());
        vec![ShellEvent::new(ShellEventKind::Focused, id.as_str())]
    }

    /// Moves an open, windowed (not maximized) window. Size is never changed.
    ///
    /// Returns `true` when the position changed.
    pub fn move_to(&mut self, id: &WindowId, position: WindowPosition) -> bool {
        match self.find_mut(id) {
            Some(window) if window.is_open && !window.is_maximized => {
                let changed = window.position != position;
                window.position = position;
                changed
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Registered windows in registration order.
    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn active_id(&self) -> Option<&WindowId> {
        self.active_id.as_ref()
    }

    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    /// Open, non-minimized windows from bottom to top of the stack.
    pub fn stacked_visible(&self) -> Vec<&WindowState> {
        let mut visible: Vec<&WindowState> =
            self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Last value handed out by the stacking counter.
    pub fn top_z_index(&self) -> u64 {
        self.z_counter
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn find_mut(&mut self, id: &WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| w.id == *id)
    }

    fn release_active(&mut self, id: &WindowId) {
        if self.active_id.as_ref() == Some(id) {
            self.active_id = None;
        }
    }
}

fn ignored(operation: &str, id: &WindowId) -> Vec<ShellEvent> {
    logging::debug_warn!("window registry: ignored {operation} for `{id}`");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{ContentModule, ContentMountContext};
    use leptos::{view, IntoView, View};
    use pretty_assertions::assert_eq;
    use system_ui::IconName;

    use super::*;
    use crate::model::WindowSize;

    fn mount_blank(_: ContentMountContext) -> View {
        view! { <div></div> }.into_view()
    }

    fn config(id: &str) -> WindowConfig {
        WindowConfig::new(
            id,
            id.to_uppercase(),
            IconName::Document,
            ContentModule::new("blank", mount_blank),
        )
    }

    fn registry(ids: &[&str]) -> WindowRegistry {
        let mut registry = WindowRegistry::new();
        for id in ids {
            registry.register(config(id));
        }
        registry
    }

    fn window<'a>(registry: &'a WindowRegistry, id: &str) -> &'a WindowState {
        registry.get(&WindowId::new(id)).expect("registered window")
    }

    fn assert_active_invariant(registry: &WindowRegistry) {
        if let Some(active) = registry.active_id() {
            let state = registry.get(active).expect("active window is registered");
            assert!(state.is_open && !state.is_minimized);
        }
    }

    #[test]
    fn register_inserts_closed_defaults() {
        let registry = registry(&["bio"]);
        let bio = window(&registry, "bio");

        assert!(!bio.is_open);
        assert!(!bio.is_minimized);
        assert!(!bio.is_maximized);
        assert_eq!(bio.z_index, 0);
        assert_eq!(bio.size, WindowSize::default());
        assert_eq!(registry.active_id(), None);
    }

    #[test]
    fn register_twice_keeps_open_state() {
        let mut registry = registry(&["bio"]);
        let id = WindowId::new("bio");
        registry.open(&id);
        let before = registry.clone();

        let mut again = config("bio");
        again.title = "Renamed".to_string();
        assert!(!registry.register(again));
        assert_eq!(registry, before);
    }

    #[test]
    fn register_sanitizes_collapsed_size() {
        let mut registry = WindowRegistry::new();
        let mut cfg = config("game");
        cfg.size = Some(WindowSize {
            width: 0,
            height: -20,
        });
        registry.register(cfg);

        assert_eq!(window(&registry, "game").size, WindowSize::default());
    }

    #[test]
    fn operations_on_unknown_ids_are_noops() {
        let mut registry = registry(&["bio"]);
        registry.open(&WindowId::new("bio"));
        let before = registry.clone();
        let ghost = WindowId::new("ghost");

        assert!(registry.open(&ghost).is_empty());
        assert!(registry.close(&ghost).is_empty());
        assert!(registry.minimize(&ghost).is_empty());
        assert!(registry.maximize(&ghost).is_empty());
        assert!(registry.focus(&ghost).is_empty());
        assert!(!registry.move_to(&ghost, WindowPosition { x: 1, y: 1 }));
        assert_eq!(registry, before);
    }

    #[test]
    fn open_is_idempotent_for_visibility_but_restacks() {
        let mut registry = registry(&["a", "b"]);
        let a = WindowId::new("a");
        let b = WindowId::new("b");

        registry.open(&a);
        registry.open(&b);
        registry.open(&a);

        assert_eq!(window(&registry, "a").z_index, 3);
        assert_eq!(window(&registry, "b").z_index, 2);
        assert!(registry.is_active(&a));
        assert!(window(&registry, "b").is_open);
    }

    #[test]
    fn windowed_policy_keeps_maximize_flag_untouched_on_open() {
        let mut registry = registry(&["a"]);
        registry.open(&WindowId::new("a"));
        assert!(!window(&registry, "a").is_maximized);
    }

    #[test]
    fn maximized_policy_forces_maximize_on_open() {
        let mut registry = WindowRegistry::with_open_policy(OpenPolicy::Maximized);
        registry.register(config("a"));
        registry.open(&WindowId::new("a"));
        assert!(window(&registry, "a").is_maximized);
    }

    #[test]
    fn close_clears_active_without_promoting_another_window() {
        let mut registry = registry(&["a", "b"]);
        let a = WindowId::new("a");
        let b = WindowId::new("b");
        registry.open(&a);
        registry.open(&b);
        registry.maximize(&b);

        let events = registry.close(&b);

        assert_eq!(events, vec![ShellEvent::new(ShellEventKind::Closed, "b")]);
        assert_eq!(registry.active_id(), None);
        assert!(!window(&registry, "b").is_open);
        assert!(!window(&registry, "b").is_maximized);
        assert!(window(&registry, "a").is_open);
    }

    #[test]
    fn closing_a_closed_window_emits_nothing() {
        let mut registry = registry(&["a"]);
        let a = WindowId::new("a");
        assert!(registry.close(&a).is_empty());

        registry.open(&a);
        assert_eq!(
            registry.close(&a),
            vec![ShellEvent::new(ShellEventKind::Closed, "a")]
        );
        let before = registry.clone();
        assert!(registry.close(&a).is_empty());
        assert_eq!(registry, before);
    }

    #[test]
    fn closing_inactive_window_keeps_active_pointer() {
        let mut registry = registry(&["a", "b"]);
        let a = WindowId::new("a");
        let b = WindowId::new("b");
        registry.open(&a);
        registry.open(&b);

        registry.close(&a);

        assert!(registry.is_active(&b));
    }

    #[test]
    fn minimize_releases_active_and_focus_restores() {
        let mut registry = registry(&["a"]);
        let a = WindowId::new("a");
        registry.open(&a);

        registry.minimize(&a);
        assert!(window(&registry, "a").is_minimized);
        assert_eq!(registry.active_id(), None);

        registry.focus(&a);
        assert!(!window(&registry, "a").is_minimized);
        assert!(registry.is_active(&a));
        assert_eq!(window(&registry, "a").z_index, 2);
    }

    #[test]
    fn maximize_toggles_and_always_refocuses() {
        let mut registry = registry(&["a", "b"]);
        let a = WindowId::new("a");
        let b = WindowId::new("b");
        registry.open(&a);
        registry.open(&b);

        let events = registry.maximize(&a);
        assert_eq!(
            events,
            vec![
                ShellEvent::new(ShellEventKind::Maximized, "a"),
                ShellEvent::new(ShellEventKind::Focused, "a"),
            ]
        );
        assert!(window(&registry, "a").is_maximized);
        assert!(registry.is_active(&a));
        assert_eq!(window(&registry, "a").z_index, 3);

        registry.focus(&b);
        registry.maximize(&a);
        assert!(!window(&registry, "a").is_maximized);
        assert!(registry.is_active(&a));
        assert_eq!(window(&registry, "a").z_index, 5);
    }

    #[test]
    fn maximize_preserves_stored_geometry() {
        let mut registry = registry(&["a"]);
        let a = WindowId::new("a");
        registry.open(&a);
        registry.move_to(&a, WindowPosition { x: 210, y: 90 });
        let before = window(&registry, "a").clone();

        registry.maximize(&a);
        registry.maximize(&a);

        let after = window(&registry, "a");
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(!after.is_maximized);
    }

    #[test]
    fn closed_windows_cannot_be_focused_or_minimized() {
        let mut registry = registry(&["a"]);
        let a = WindowId::new("a");

        assert!(registry.focus(&a).is_empty());
        assert!(registry.minimize(&a).is_empty());
        assert!(registry.maximize(&a).is_empty());
        assert_eq!(registry.active_id(), None);
        assert_eq!(registry.top_z_index(), 0);
    }

    #[test]
    fn move_to_ignores_maximized_and_closed_windows() {
        let mut registry = registry(&["a"]);
        let a = WindowId::new("a");
        let target = WindowPosition { x: 300, y: 150 };

        assert!(!registry.move_to(&a, target));
        registry.open(&a);
        registry.maximize(&a);
        assert!(!registry.move_to(&a, target));
        registry.maximize(&a);
        assert!(registry.move_to(&a, target));
        assert_eq!(window(&registry, "a").position, target);
    }

    #[test]
    fn stacked_visible_orders_by_z_and_skips_hidden() {
        let mut registry = registry(&["a", "b", "c"]);
        let a = WindowId::new("a");
        let b = WindowId::new("b");
        let c = WindowId::new("c");
        registry.open(&c);
        registry.open(&a);
        registry.open(&b);
        registry.minimize(&a);
        registry.focus(&c);

        let order: Vec<&str> = registry
            .stacked_visible()
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c"]);
    }

    #[test]
    fn random_operation_sequences_preserve_invariants() {
        let ids: Vec<WindowId> = ["a", "b", "c", "ghost"]
            .into_iter()
            .map(WindowId::new)
            .collect();
        let mut registry = registry(&["a", "b", "c"]);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut last_z = 0;

        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let id = &ids[(seed % ids.len() as u64) as usize];
            let events = match (seed >> 8) % 5 {
                0 => registry.open(id),
                1 => registry.close(id),
                2 => registry.minimize(id),
                3 => registry.maximize(id),
                _ => registry.focus(id),
            };
            let raised = events.iter().any(|e| {
                matches!(e.kind, ShellEventKind::Opened | ShellEventKind::Focused)
            });
            if raised {
                let z = registry.get(id).expect("raised window exists").z_index;
                assert!(z > last_z);
                last_z = z;
            }
            assert_eq!(registry.top_z_index(), last_z);
            assert_active_invariant(&registry);
        }
    }
}
