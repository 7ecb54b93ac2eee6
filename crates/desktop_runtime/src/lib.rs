//! Window-management core for the portfolio desktop: registry, drag geometry, dock semantics,
//! reducer and the Leptos shell that renders them.

pub mod catalog;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod window_manager;

pub use catalog::{parse_catalog, CatalogError, DesktopCatalog};
pub use components::{
    use_desktop_runtime, Desktop, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use registry::WindowRegistry;
