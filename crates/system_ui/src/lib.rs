//! Shared UI primitive library for the portfolio desktop shell.
//!
//! The crate owns the stateless Leptos primitives the window manager composes (desktop backdrop,
//! icon grid, window frame, dock) and a centralized icon API. Primitives only emit markup and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS; they never read window state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Dock,
    DockButton, DockSection, OverviewItem, OverviewPanel, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowInputShield, WindowTitle, WindowTitleBar,
};
