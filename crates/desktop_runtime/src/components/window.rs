use super::*;
use crate::{host::window_dom_id, model::WindowState};
use desktop_app_contract::ContentMountContext;
use system_ui::{
    IconName, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowInputShield,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline frame style: stored geometry when windowed, the full desktop when maximized.
pub(crate) fn window_frame_style(window: &WindowState) -> String {
    if window.is_maximized {
        format!(
            "position:absolute;left:0;top:0;width:100%;height:100%;z-index:{};",
            window.z_index
        )
    } else {
        let size = window.size.sanitized();
        format!(
            "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            window.position.x, window.position.y, size.width, size.height, window.z_index
        )
    }
}

#[component]
/// Chrome and interaction controller for one registered window.
///
/// Only open, non-minimized windows are mounted.
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| window_id.with_value(|id| registry.get(id).cloned()))
    });
    let visible =
        create_memo(move |_| window.with(|w| w.as_ref().is_some_and(|w| w.is_visible())));

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <WindowChrome window_id=window_id.get_value() window=window />
        </Show>
    }
}

#[component]
fn WindowChrome(window_id: WindowId, window: Memo<Option<WindowState>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = window_dom_id(&window_id);
    let window_id = store_value(window_id);

    let active = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| window_id.with_value(|id| registry.is_active(id)))
    });
    let maximized =
        Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_maximized)));
    let style = Signal::derive(move || {
        window.with(|w| w.as_ref().map(window_frame_style).unwrap_or_default())
    });
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let (icon, content) = window
        .with_untracked(|w| w.as_ref().map(|w| (w.icon, w.content)))
        .unwrap_or_else(|| (IconName::Document, missing_content()));

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::Focus {
            window_id: window_id.get_value(),
        });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let capture_lost = Callback::new(move |_: web_sys::PointerEvent| {
        let dragging_this = runtime.drag.with_untracked(|drag| {
            window_id.with_value(|id| drag.session().is_some_and(|s| s.window_id == *id))
        });
        if dragging_this {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    });
    let toggle_maximize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: window_id.get_value(),
        });
    });
    let minimize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Minimize {
            window_id: window_id.get_value(),
        });
    });
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Close {
            window_id: window_id.get_value(),
        });
    });

    let body = content.mount(ContentMountContext {
        window_id: window_id.with_value(|id| id.to_string()),
        active: active.into(),
    });

    view! {
        <WindowFrame
            id=dom_id
            style=style
            aria_label=title
            active=active
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                on_pointerdown=begin_move
                on_lostpointercapture=capture_lost
                on_dblclick=toggle_maximize
            >
                <WindowTitle>
                    <Icon icon=icon size=IconSize::Sm />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize window" on_click=minimize>
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() {
                                "Restore window"
                            } else {
                                "Maximize window"
                            };
                            label.to_string()
                        })
                        on_click=toggle_maximize
                    >
                        {move || {
                            let icon = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon=icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                {body}
                <Show when=move || !active.get() fallback=|| ()>
                    <WindowInputShield />
                </Show>
            </WindowBody>
        </WindowFrame>
    }
}

fn missing_content() -> desktop_app_contract::ContentModule {
    fn mount_missing(_: ContentMountContext) -> View {
        view! { <p>"Nothing to show."</p> }.into_view()
    }
    desktop_app_contract::ContentModule::new("missing", mount_missing)
}
