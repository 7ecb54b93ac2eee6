use super::*;
use crate::{
    dock::{dock_aria_label, dock_entries, DockEntry},
    host::dock_button_dom_id,
};
use system_ui::{Dock, DockButton, DockSection, IconName, OverviewItem, OverviewPanel};

#[component]
/// Persistent dock: one icon per registered window plus the "all apps" overview toggle.
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let overview_open = create_rw_signal(false);
    let entries = create_memo(move |_| runtime.registry.with(dock_entries));
    let dock_height = runtime.config.get_value().dock_height;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && overview_open.get_untracked() {
            ev.prevent_default();
            overview_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Dock aria_label="Dock" style=format!("height:{dock_height}px;")>
            <DockSection ui_slot="overview">
                <DockButton
                    id="dock-overview-button"
                    aria_label="All apps"
                    pressed=overview_open
                    expanded=overview_open
                    on_click=Callback::new(move |_: web_sys::MouseEvent| {
                        overview_open.update(|open| *open = !*open);
                    })
                >
                    <Icon icon=IconName::Apps size=IconSize::Md />
                </DockButton>
            </DockSection>
            <DockSection ui_slot="apps">
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    <DockItem window_id=entry.id entries=entries />
                </For>
            </DockSection>
            <Show when=move || overview_open.get() fallback=|| ()>
                <OverviewPanel id="dock-overview" aria_label="All applications">
                    <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                        {{
                            let DockEntry { id, title, icon, .. } = entry;
                            view! {
                                <OverviewItem on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                    overview_open.set(false);
                                    runtime.dispatch_action(DesktopAction::Open {
                                        window_id: id.clone(),
                                    });
                                })>
                                    <Icon icon=icon size=IconSize::Sm />
                                    <span>{title}</span>
                                </OverviewItem>
                            }
                        }}
                    </For>
                </OverviewPanel>
            </Show>
        </Dock>
    }
}

#[component]
fn DockItem(window_id: WindowId, entries: Memo<Vec<DockEntry>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = dock_button_dom_id(&window_id);
    let window_id = store_value(window_id);

    let entry = create_memo(move |_| {
        entries.with(|entries| {
            window_id.with_value(|id| entries.iter().find(|entry| entry.id == *id).cloned())
        })
    });
    let marker = Signal::derive(move || {
        entry.with(|entry| {
            entry
                .as_ref()
                .map(|entry| entry.marker.token().to_string())
                .unwrap_or_default()
        })
    });
    let aria_label = Signal::derive(move || {
        entry.with(|entry| entry.as_ref().map(dock_aria_label).unwrap_or_default())
    });
    let pressed = Signal::derive(move || {
        entry.with(|entry| {
            entry
                .as_ref()
                .is_some_and(|entry| entry.marker.has_open_window())
        })
    });
    let icon = entry
        .with_untracked(|entry| entry.as_ref().map(|entry| entry.icon))
        .unwrap_or(IconName::Document);

    view! {
        <DockButton
            id=dom_id
            aria_label=aria_label
            marker=marker
            pressed=pressed
            on_click=Callback::new(move |_: web_sys::MouseEvent| {
                runtime.dispatch_action(DesktopAction::DockClick {
                    window_id: window_id.get_value(),
                });
            })
            on_hover=Callback::new(move |_: web_sys::MouseEvent| {
                window_id.with_value(|id| announce_hover(runtime, id));
            })
        >
            <Icon icon=icon size=IconSize::Md />
        </DockButton>
    }
}
