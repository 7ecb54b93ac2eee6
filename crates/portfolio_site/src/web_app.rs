use std::time::Duration;

use desktop_runtime::{
    use_desktop_runtime, Desktop, DesktopAction, DesktopCatalog, DesktopConfig, DesktopProvider,
    WindowId, WindowRegistry,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::catalog::load_catalog;

const BOOT_DELAY: Duration = Duration::from_millis(900);

#[derive(Clone, Copy)]
struct SiteSession {
    registry: RwSignal<WindowRegistry>,
    catalog: StoredValue<DesktopCatalog>,
    booting: RwSignal<bool>,
}

fn boot_delay() -> Duration {
    #[cfg(target_arch = "wasm32")]
    {
        let reduced_motion = web_sys::window()
            .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .is_some_and(|query| query.matches());
        if reduced_motion {
            return Duration::ZERO;
        }
    }
    BOOT_DELAY
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let catalog = load_catalog().unwrap_or_else(|err| {
        logging::warn!("portfolio: application catalog rejected, starting empty: {err}");
        DesktopCatalog {
            config: DesktopConfig::default(),
            windows: Vec::new(),
        }
    });
    // Created once per session so route changes and shell remounts keep window state.
    let session = SiteSession {
        registry: create_rw_signal(WindowRegistry::with_open_policy(catalog.config.open_policy)),
        catalog: store_value(catalog),
        booting: create_rw_signal(true),
    };
    provide_context(session);
    set_timeout(move || session.booting.set(false), boot_delay());

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A desktop-style personal portfolio running in the browser." />

        <Router>
            <main class="site-root">
                <Show when=move || session.booting.get() fallback=|| ()>
                    <div class="boot-screen" role="status">"Starting up..."</div>
                </Show>
                <Routes>
                    <Route path="" view=|| view! { <DesktopEntry /> } />
                    <Route path="/apps/:id" view=DeepLinkEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// The desktop bound to the session registry.
pub fn DesktopEntry(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let Some(session) = use_context::<SiteSession>() else {
        logging::warn!("portfolio: desktop mounted outside SiteApp");
        return ().into_view();
    };
    let config = session.catalog.with_value(|catalog| catalog.config);
    let windows = session.catalog.with_value(|catalog| catalog.windows.clone());

    view! {
        <DesktopProvider registry=session.registry config=config>
            <Desktop catalog=windows booting=session.booting />
            {children.map(|children| children())}
        </DesktopProvider>
    }
    .into_view()
}

#[component]
fn DeepLinkEntry() -> impl IntoView {
    view! {
        <DesktopEntry>
            <OpenFromRoute />
        </DesktopEntry>
    }
}

#[component]
fn OpenFromRoute() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let params = use_params_map();

    create_effect(move |_| {
        if let Some(id) = params.with(|map| map.get("id").cloned()) {
            runtime.dispatch_action(DesktopAction::Open {
                window_id: WindowId::new(id),
            });
        }
    });
}
