use super::*;

#[component]
/// Shared dock root.
pub fn Dock(
    /// Extra classes appended to the base class.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    /// Accessible label of the toolbar.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Declarations appended to the dock's structural style, such as its height.
    #[prop(optional, into)]
    style: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-dock", layout_class)
            role="toolbar"
            aria-label=aria_label
            style=format!("{DOCK_STYLE}{}", style.unwrap_or_default())
            data-ui-primitive="true"
            data-ui-kind="dock"
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
        >
            {children()}
        </footer>
    }
}

#[component]
/// Shared dock section.
pub fn DockSection(
    /// `data-ui-slot` value naming the section.
    ui_slot: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-dock-section"
            data-ui-primitive="true"
            data-ui-kind="dock-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared dock icon button.
///
/// `marker` is one of `closed`, `running`, `active` or `minimized`; CSS draws the open/active dot
/// from it.
pub fn DockButton(
    /// DOM id of the button.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Window state marker token.
    #[prop(optional, into)]
    marker: MaybeSignal<String>,
    /// `aria-pressed` state.
    #[prop(optional, into)]
    pressed: MaybeSignal<bool>,
    /// `aria-expanded` state, for buttons that toggle a panel.
    #[prop(optional, into)]
    expanded: Option<MaybeSignal<bool>>,
    /// Activation handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Pointer entered the button.
    #[prop(optional)]
    on_hover: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=id
            class="ui-dock-button"
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            aria-expanded=move || expanded.map(|expanded| bool_token(expanded.get()))
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-marker=move || marker.get()
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
            <span class="ui-dock-marker" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Overview panel listing every application.
pub fn OverviewPanel(
    /// DOM id of the panel.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label of the menu.
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-overview-panel"
            style=OVERVIEW_PANEL_STYLE
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="overview-panel"
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Overview panel entry.
pub fn OverviewItem(
    /// Activation handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-overview-item"
            role="menuitem"
            data-ui-primitive="true"
            data-ui-kind="overview-item"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
