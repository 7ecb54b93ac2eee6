//! Runtime provider and context wiring for the desktop shell.
//!
//! The window registry itself is created by the caller at session start and injected here, so
//! remounting the provider (or anything below it) never discards window state. This module owns
//! the transient drag gesture, the reducer dispatch callback, and the runtime effect queue. UI
//! composition stays in [`crate::components`].

use desktop_app_contract::ShellEvent;
use leptos::*;

use crate::{
    effect_executor, host,
    model::{DesktopConfig, DragState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    registry::WindowRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Session-wide window registry.
    pub registry: RwSignal<WindowRegistry>,
    /// Title-bar drag gesture state.
    pub drag: RwSignal<DragState>,
    /// Desktop-level configuration from the catalog.
    pub config: StoredValue<DesktopConfig>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Optional lifecycle subscriber (for example a UI sound player).
    pub on_event: Option<Callback<ShellEvent>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Forwards a lifecycle event to the subscriber, if any.
    pub fn announce(&self, event: ShellEvent) {
        if let Some(on_event) = self.on_event {
            on_event.call(event);
        }
    }

    /// Desktop area currently available to windows.
    pub fn viewport(&self) -> WindowRect {
        host::desktop_viewport_rect(self.config.get_value().dock_height)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Session-wide registry owned by the entry layer.
    registry: RwSignal<WindowRegistry>,
    /// Desktop-level configuration.
    #[prop(optional)]
    config: DesktopConfig,
    /// Lifecycle subscriber for the audio-feedback collaborator.
    #[prop(optional)]
    on_event: Option<Callback<ShellEvent>>,
    children: Children,
) -> impl IntoView {
    let config = store_value(config);
    let drag = create_rw_signal(DragState::Idle);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut windows = registry.get_untracked();
        let mut gesture = drag.get_untracked();
        let previous_windows = windows.clone();
        let previous_gesture = gesture.clone();

        let new_effects = reduce_desktop(&mut windows, &mut gesture, &config.get_value(), action);

        if windows != previous_windows {
            registry.set(windows);
        }
        if gesture != previous_gesture {
            drag.set(gesture);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        registry,
        drag,
        config,
        effects,
        dispatch,
        on_event,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
