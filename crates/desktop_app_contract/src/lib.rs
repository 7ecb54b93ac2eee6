//! Shared contract types between the desktop window manager and the content it hosts.
//!
//! The window manager treats every hosted panel as an opaque [`ContentModule`]: a stable key plus a
//! mount function. It never inspects what the module renders. In the other direction the manager
//! publishes [`ShellEvent`] values so outside collaborators (for example a UI sound player) can
//! react to window lifecycle changes without the manager performing any I/O itself.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Signal, View};
use serde::{Deserialize, Serialize};

/// Function signature used to mount a content panel into a window body.
pub type ContentMountFn = fn(ContentMountContext) -> View;

#[derive(Debug, Clone)]
/// Context passed to a content panel when its window body is mounted.
pub struct ContentMountContext {
    /// Registry id of the hosting window.
    pub window_id: String,
    /// Whether the hosting window is currently the active window.
    pub active: Signal<bool>,
}

#[derive(Debug, Clone, Copy)]
/// Capability handle for one hosted content panel.
///
/// Two handles are equal when their keys are equal; the mount function is never compared.
pub struct ContentModule {
    key: &'static str,
    mount_fn: ContentMountFn,
}

impl ContentModule {
    /// Creates a module from a stable key and a mount function.
    pub const fn new(key: &'static str, mount_fn: ContentMountFn) -> Self {
        Self { key, mount_fn }
    }

    /// Returns the stable content key.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Mounts the panel view with a runtime-provided context.
    pub fn mount(self, context: ContentMountContext) -> View {
        (self.mount_fn)(context)
    }
}

impl PartialEq for ContentModule {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ContentModule {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic window lifecycle events published by the window manager.
pub enum ShellEventKind {
    /// A closed window was opened, or an open window was re-raised through `open`.
    Opened,
    /// A window was closed.
    Closed,
    /// A window was minimized.
    Minimized,
    /// A window became the active window.
    Focused,
    /// A window entered the maximized layout.
    Maximized,
    /// A window left the maximized layout.
    Restored,
    /// The pointer entered a launcher (desktop icon or dock entry).
    Hovered,
}

impl ShellEventKind {
    /// Returns a stable string token for sound lookup and debugging hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Opened => "open",
            Self::Closed => "close",
            Self::Minimized => "minimize",
            Self::Focused => "focus",
            Self::Maximized => "maximize",
            Self::Restored => "restore",
            Self::Hovered => "hover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One lifecycle event for one registered window.
pub struct ShellEvent {
    /// What happened.
    pub kind: ShellEventKind,
    /// Registry id of the affected window.
    pub window_id: String,
}

impl ShellEvent {
    /// Creates an event for `window_id`.
    pub fn new(kind: ShellEventKind, window_id: impl Into<String>) -> Self {
        Self {
            kind,
            window_id: window_id.into(),
        }
    }
}
