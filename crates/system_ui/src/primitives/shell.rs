use super::*;

/// `data-ui-slot` value carried by every titlebar control button.
const WINDOW_CONTROL_SLOT: &str = "window-control";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn window_control_selector() -> String {
    format!("[data-ui-slot=\"{WINDOW_CONTROL_SLOT}\"]")
}

#[cfg(target_arch = "wasm32")]
fn from_window_control(ev: &MouseEvent) -> bool {
    use leptos::wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<leptos::web_sys::Element>().ok())
        .and_then(|element| element.closest(&window_control_selector()).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn from_window_control(_: &MouseEvent) -> bool {
    false
}

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    /// DOM id of the root element.
    #[prop(optional, into)]
    id: Option<String>,
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Pointer movement anywhere over the desktop.
    #[prop(optional)]
    on_pointermove: Option<Callback<PointerEvent>>,
    /// Pointer release or cancellation anywhere over the desktop.
    #[prop(optional)]
    on_pointerup: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let end = move |ev: PointerEvent| {
        if let Some(on_pointerup) = on_pointerup.as_ref() {
            on_pointerup.call(ev);
        }
    };
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            style=DESKTOP_ROOT_STYLE
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=end
            on:pointercancel=end
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=DESKTOP_BACKDROP_STYLE
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid.
pub fn DesktopIconGrid(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Accessible label.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Activation handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Pointer entered the icon.
    #[prop(optional)]
    on_hover: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if let Some(on_hover) = on_hover.as_ref() {
                    on_hover.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window stack host. Covers the backdrop and lets pointer input through outside window frames.
pub fn DesktopWindowLayer(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            style=WINDOW_LAYER_STYLE
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    /// DOM id of the frame.
    #[prop(optional, into)]
    id: Option<String>,
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Geometry and stacking declarations appended to the frame's structural style.
    #[prop(optional, into)]
    style: MaybeSignal<String>,
    /// Accessible label, usually the window title.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Whether this is the active window.
    #[prop(optional, into)]
    active: MaybeSignal<bool>,
    /// Whether the window fills the desktop.
    #[prop(optional, into)]
    maximized: MaybeSignal<bool>,
    /// Pointer pressed anywhere inside the frame.
    #[prop(optional)]
    on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || format!("{WINDOW_FRAME_STYLE}{}", style.get())
            role="dialog"
            tabindex="-1"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-active=move || bool_token(active.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive.
///
/// Double-clicks that land on a titlebar control never reach `on_dblclick`.
pub fn WindowTitleBar(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Pointer pressed on the titlebar; starts a drag.
    #[prop(optional)]
    on_pointerdown: Option<Callback<PointerEvent>>,
    /// Pointer capture released; ends a drag.
    #[prop(optional)]
    on_lostpointercapture: Option<Callback<PointerEvent>>,
    /// Titlebar double-click.
    #[prop(optional)]
    on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:lostpointercapture=move |ev| {
                if let Some(on_lost) = on_lostpointercapture.as_ref() {
                    on_lost.call(ev);
                }
            }
            on:dblclick=move |ev: MouseEvent| {
                if from_window_control(&ev) {
                    return;
                }
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title text container.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar control button.
///
/// Pointer presses, clicks and double-clicks never bubble to the titlebar or frame, so a control
/// only ever runs its own action.
pub fn WindowControlButton(
    /// Accessible label.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Activation handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-slot=WINDOW_CONTROL_SLOT
            on:pointerdown=move |ev: PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared window body primitive. Positioned so the input shield stays inside it.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-window-body"
            style=WINDOW_BODY_STYLE
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Transparent overlay covering the body of an inactive window.
///
/// Embedded interactive content (iframes, canvases) in a window lower in the stack cannot capture
/// pointer input while the shield is mounted; the press reaches the frame instead.
pub fn WindowInputShield() -> impl IntoView {
    view! {
        <div
            class="ui-window-input-shield"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="window-input-shield"
            style=WINDOW_INPUT_SHIELD_STYLE
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn control_selector_matches_control_slot() {
        assert_eq!(window_control_selector(), "[data-ui-slot=\"window-control\"]");
    }
}
