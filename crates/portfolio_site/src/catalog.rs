//! Compiled application catalog.

use desktop_runtime::{parse_catalog, CatalogError, DesktopCatalog};

use crate::panels::content_module;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));
}

/// Parses the catalog compiled from `apps.catalog.toml`.
pub fn load_catalog() -> Result<DesktopCatalog, CatalogError> {
    parse_catalog(generated::APP_CATALOG_JSON, content_module)
}
