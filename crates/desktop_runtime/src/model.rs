use desktop_app_contract::ContentModule;
use serde::{Deserialize, Serialize};
use system_ui::IconName;

pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 440;
pub const DEFAULT_WINDOW_X: i32 = 48;
pub const DEFAULT_WINDOW_Y: i32 = 48;
pub const DEFAULT_DOCK_HEIGHT: i32 = 56;
pub const DEFAULT_DRAG_MIN_VISIBLE: i32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    /// Replaces non-positive dimensions with the defaults so a window never renders collapsed.
    pub fn sanitized(self) -> Self {
        Self {
            width: if self.width > 0 {
                self.width
            } else {
                DEFAULT_WINDOW_WIDTH
            },
            height: if self.height > 0 {
                self.height
            } else {
                DEFAULT_WINDOW_HEIGHT
            },
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Desktop area available to windows, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 1280,
            h: 800 - DEFAULT_DOCK_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Registration payload for one catalog application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub content: ContentModule,
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
    pub show_on_desktop: bool,
}

impl WindowConfig {
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        icon: IconName,
        content: ContentModule,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            content,
            position: None,
            size: None,
            show_on_desktop: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub content: ContentModule,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub show_on_desktop: bool,
}

impl WindowState {
    pub fn from_config(config: WindowConfig) -> Self {
        Self {
            id: config.id,
            title: config.title,
            icon: config.icon,
            content: config.content,
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: config.position.unwrap_or_default(),
            size: config.size.unwrap_or_default().sanitized(),
            show_on_desktop: config.show_on_desktop,
        }
    }

    /// Open and not minimized: the only windows the window manager renders.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// How `open` lays a window out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenPolicy {
    /// Keep the stored geometry and maximize flag.
    #[default]
    Windowed,
    /// Force `is_maximized` on every open.
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub open_policy: OpenPolicy,
    /// Pixels of a dragged window that must stay inside the viewport.
    pub drag_min_visible: i32,
    pub dock_height: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            open_policy: OpenPolicy::Windowed,
            drag_min_visible: DEFAULT_DRAG_MIN_VISIBLE,
            dock_height: DEFAULT_DOCK_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

/// Title-bar drag gesture. Release or capture loss always returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
