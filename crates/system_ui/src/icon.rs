//! Centralized icon API.
//!
//! Icons render as a glyph inside a sized span; the shell CSS swaps glyphs for artwork through the
//! `data-ui-icon` token, so tokens are part of the public contract and must stay stable.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to the shell and to catalog entries.
pub enum IconName {
    /// Person silhouette (bio / about panels).
    Person,
    /// Folder (project galleries).
    Folder,
    /// Envelope (contact forms).
    Mail,
    /// Terminal prompt.
    Terminal,
    /// Game controller.
    Game,
    /// Gear (settings).
    Settings,
    /// Speech bubble (chat).
    Chat,
    /// Generic document.
    Document,
    /// Grid of apps (overview launcher).
    Apps,
    /// Minimize window control.
    WindowMinimize,
    /// Maximize window control.
    WindowMaximize,
    /// Restore window control.
    WindowRestore,
    /// Close / dismiss.
    Dismiss,
}

impl IconName {
    const ALL: [Self; 13] = [
        Self::Person,
        Self::Folder,
        Self::Mail,
        Self::Terminal,
        Self::Game,
        Self::Settings,
        Self::Chat,
        Self::Document,
        Self::Apps,
        Self::WindowMinimize,
        Self::WindowMaximize,
        Self::WindowRestore,
        Self::Dismiss,
    ];

    /// Returns the stable kebab-case token for this icon.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Folder => "folder",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
            Self::Game => "game",
            Self::Settings => "settings",
            Self::Chat => "chat",
            Self::Document => "document",
            Self::Apps => "apps",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Looks an icon up by its token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Person => "\u{1F464}",
            Self::Folder => "\u{1F4C1}",
            Self::Mail => "\u{2709}",
            Self::Terminal => ">_",
            Self::Game => "\u{1F3AE}",
            Self::Settings => "\u{2699}",
            Self::Chat => "\u{1F4AC}",
            Self::Document => "\u{1F4C4}",
            Self::Apps => "\u{25A6}",
            Self::WindowMinimize => "\u{2013}",
            Self::WindowMaximize => "\u{25A1}",
            Self::WindowRestore => "\u{2750}",
            Self::Dismiss => "\u{2715}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size scale.
pub enum IconSize {
    /// 12px, window controls.
    Xs,
    /// 16px, title bars.
    Sm,
    /// 24px, dock.
    #[default]
    Md,
    /// 40px, desktop icons.
    Lg,
}

impl IconSize {
    fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 40,
        }
    }
}

#[component]
/// Renders a named icon.
pub fn Icon(
    /// Icon to draw.
    icon: IconName,
    /// Rendered size; defaults to [`IconSize::Md`].
    #[prop(optional)]
    size: IconSize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-icon=icon.token()
            style=format!("width:{px}px;height:{px}px;font-size:{px}px;")
        >
            {icon.glyph()}
        </span>
    }
}
