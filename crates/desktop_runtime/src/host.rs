//! Browser boundary: viewport measurement and DOM focus handoff.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{WindowId, WindowRect};

/// DOM id of the frame element for `window_id`.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("desktop-window-{}", window_id.as_str())
}

/// DOM id of the dock button for `window_id`.
pub fn dock_button_dom_id(window_id: &WindowId) -> String {
    format!("dock-button-{}", window_id.as_str())
}

/// Returns the desktop area available to windows: the browser viewport minus the dock strip.
pub fn desktop_viewport_rect(dock_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - dock_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - dock_height_px,
    }
}

/// Moves keyboard focus onto the frame of `window_id` once the current event settles.
pub fn focus_window_input(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_dom_id(window_id)) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dom_ids_embed_window_id() {
        let id = WindowId::new("projects");
        assert_eq!(window_dom_id(&id), "desktop-window-projects");
        assert_eq!(dock_button_dom_id(&id), "dock-button-projects");
    }

    #[test]
    fn native_viewport_subtracts_dock() {
        assert_eq!(
            desktop_viewport_rect(56),
            WindowRect {
                x: 0,
                y: 0,
                w: 1024,
                h: 712
            }
        );
    }
}
