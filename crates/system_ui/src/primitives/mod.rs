//! Shared structural primitives for the desktop shell, window chrome, and dock.

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::*;

mod dock;
mod shell;

pub use dock::{Dock, DockButton, DockSection, OverviewItem, OverviewPanel};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowInputShield, WindowTitle,
    WindowTitleBar,
};

// Structural layout carried inline. Window frames are absolutely positioned inside the window
// layer; the input shield is absolutely positioned inside the window body.
const DESKTOP_ROOT_STYLE: &str =
    "position:fixed;inset:0;display:flex;flex-direction:column;overflow:hidden;";
const DESKTOP_BACKDROP_STYLE: &str = "position:relative;flex:1 1 auto;min-height:0;";
const WINDOW_LAYER_STYLE: &str = "position:absolute;inset:0;pointer-events:none;";
const WINDOW_FRAME_STYLE: &str = "display:flex;flex-direction:column;pointer-events:auto;";
const WINDOW_BODY_STYLE: &str = "position:relative;flex:1 1 auto;min-height:0;overflow:auto;";
const WINDOW_INPUT_SHIELD_STYLE: &str = "position:absolute;inset:0;background:transparent;";
const DOCK_STYLE: &str = "position:relative;flex:0 0 auto;";
const OVERVIEW_PANEL_STYLE: &str = "position:absolute;left:0;bottom:100%;";

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-dock", None), "ui-dock");
        assert_eq!(merge_layout_class("ui-dock", Some("")), "ui-dock");
        assert_eq!(merge_layout_class("ui-dock", Some("wide")), "ui-dock wide");
        assert_eq!(bool_token(true), "true");
    }

    #[test]
    fn absolute_layers_have_positioned_containers() {
        assert!(DESKTOP_BACKDROP_STYLE.contains("position:relative;"));
        assert!(WINDOW_LAYER_STYLE.contains("position:absolute;inset:0;"));
        assert!(WINDOW_LAYER_STYLE.contains("pointer-events:none;"));
        assert!(WINDOW_FRAME_STYLE.contains("pointer-events:auto;"));
        assert!(WINDOW_BODY_STYLE.contains("position:relative;"));
        assert!(WINDOW_INPUT_SHIELD_STYLE.contains("position:absolute;inset:0;"));
        assert!(DOCK_STYLE.contains("position:relative;"));
        assert!(OVERVIEW_PANEL_STYLE.contains("position:absolute;"));
    }
}
