//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod window;

use desktop_app_contract::{ShellEvent, ShellEventKind};
use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconSize,
};

use self::{dock::DesktopDock, window::DesktopWindow};

use crate::{
    model::{PointerPosition, WindowConfig, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Composition root: registers the catalog, then mounts the desktop once booting has finished.
///
/// Registration is idempotent, so remounting this component never resets windows the user has
/// already opened, moved or minimized.
pub fn Desktop(
    /// Fixed application catalog.
    catalog: Vec<WindowConfig>,
    /// Boot-phase flag owned by the boot sequence; the desktop stays unmounted while it is `true`.
    #[prop(into)]
    booting: Signal<bool>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let registered = catalog.len();
    for window in catalog {
        runtime.dispatch_action(DesktopAction::Register(window));
    }
    logging::log!(
        "desktop: catalog of {registered} applications registered ({} total)",
        runtime.registry.with_untracked(|r| r.len())
    );

    view! {
        <Show when=move || !booting.get() fallback=|| ()>
            <DesktopShell />
        </Show>
    }
}

#[component]
/// Renders the background, desktop icons, window layer and dock against the shared registry.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if runtime.drag.with_untracked(|drag| drag.is_dragging()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
                viewport: runtime.viewport(),
            });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| end_drag(runtime));

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <DesktopBackdrop>
                <div data-ui-slot="wallpaper-layer" aria-hidden="true"></div>
                <DesktopIcons />
                <WindowManager />
            </DesktopBackdrop>
            <DesktopDock />
        </DesktopRoot>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = create_memo(move |_| {
        runtime.registry.with(|registry| {
            registry
                .windows()
                .iter()
                .filter(|w| w.show_on_desktop)
                .map(|w| (w.id.clone(), w.title.clone(), w.icon))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <DesktopIconGrid>
            <For each=move || icons.get() key=|(id, _, _)| id.clone() let:icon>
                {{
                    let (window_id, title, icon) = icon;
                    let hover_id = window_id.clone();
                    view! {
                        <DesktopIconButton
                            aria_label=format!("Open {title}")
                            on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                runtime.dispatch_action(DesktopAction::Open {
                                    window_id: window_id.clone(),
                                });
                            })
                            on_hover=Callback::new(move |_: web_sys::MouseEvent| {
                                announce_hover(runtime, &hover_id)
                            })
                        >
                            <Icon icon=icon size=IconSize::Lg />
                            <span>{title.clone()}</span>
                        </DesktopIconButton>
                    }
                }}
            </For>
        </DesktopIconGrid>
    }
}

#[component]
/// Enumerates the registry and instantiates one [`DesktopWindow`] per registered window.
pub fn WindowManager() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_ids = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| registry.windows().iter().map(|w| w.id.clone()).collect::<Vec<_>>())
    });

    view! {
        <DesktopWindowLayer>
            <For each=move || window_ids.get() key=|id| id.clone() let:window_id>
                <DesktopWindow window_id=window_id />
            </For>
        </DesktopWindowLayer>
    }
}

fn announce_hover(runtime: DesktopRuntimeContext, window_id: &WindowId) {
    runtime.announce(ShellEvent::new(ShellEventKind::Hovered, window_id.as_str()));
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_drag(runtime: DesktopRuntimeContext) {
    if runtime.drag.with_untracked(|drag| drag.is_dragging()) {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}
