//! Drag geometry helpers used by the desktop reducer.

use crate::model::{DragSession, PointerPosition, WindowPosition, WindowSize, WindowRect};

/// Target position for a drag session after the pointer moved to `pointer`.
pub fn drag_position(session: &DragSession, pointer: PointerPosition) -> WindowPosition {
    WindowPosition {
        x: session.position_start.x + (pointer.x - session.pointer_start.x),
        y: session.position_start.y + (pointer.y - session.pointer_start.y),
    }
}

/// Clamps a window's top-left so it cannot be dragged fully off any viewport edge.
///
/// The top-left never goes above or left of the viewport origin, and at least `min_visible`
/// pixels of the window remain inside the right and bottom edges.
pub fn clamp_position(
    position: WindowPosition,
    size: WindowSize,
    viewport: WindowRect,
    min_visible: i32,
) -> WindowPosition {
    let min_visible = min_visible.max(0);
    let visible_w = min_visible.min(size.width.max(0));
    let visible_h = min_visible.min(size.height.max(0));
    let max_x = (viewport.x + viewport.w - visible_w).max(viewport.x);
    let max_y = (viewport.y + viewport.h - visible_h).max(viewport.y);

    WindowPosition {
        x: position.x.clamp(viewport.x, max_x),
        y: position.y.clamp(viewport.y, max_y),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1000,
        h: 700,
    };
    const SIZE: WindowSize = WindowSize {
        width: 400,
        height: 300,
    };

    #[test]
    fn drag_position_applies_pointer_delta() {
        let session = DragSession {
            window_id: WindowId::new("bio"),
            pointer_start: PointerPosition { x: 110, y: 105 },
            position_start: WindowPosition { x: 100, y: 100 },
        };

        assert_eq!(
            drag_position(&session, PointerPosition { x: 310, y: 155 }),
            WindowPosition { x: 300, y: 150 }
        );
    }

    #[test]
    fn clamp_keeps_in_bounds_positions() {
        let position = WindowPosition { x: 300, y: 150 };
        assert_eq!(clamp_position(position, SIZE, VIEWPORT, 64), position);
    }

    #[test]
    fn clamp_stops_at_left_and_top_edges() {
        let clamped = clamp_position(WindowPosition { x: -250, y: -40 }, SIZE, VIEWPORT, 64);
        assert_eq!(clamped, WindowPosition { x: 0, y: 0 });
    }

    #[test]
    fn clamp_keeps_a_strip_visible_on_right_and_bottom() {
        let clamped = clamp_position(WindowPosition { x: 5000, y: 5000 }, SIZE, VIEWPORT, 64);
        assert_eq!(clamped, WindowPosition { x: 936, y: 636 });
    }

    #[test]
    fn clamp_handles_viewport_smaller_than_strip() {
        let tiny = WindowRect {
            x: 0,
            y: 0,
            w: 20,
            h: 10,
        };
        let clamped = clamp_position(WindowPosition { x: 50, y: 50 }, SIZE, tiny, 64);
        assert_eq!(clamped, WindowPosition { x: 0, y: 0 });
    }
}
