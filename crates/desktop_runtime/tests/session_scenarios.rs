use desktop_app_contract::{ContentModule, ContentMountContext, ShellEventKind};
use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopConfig, DragState, PointerPosition, RuntimeEffect,
    WindowConfig, WindowId, WindowPosition, WindowRect, WindowRegistry, WindowSize,
};
use leptos::{view, IntoView, View};
use pretty_assertions::assert_eq;
use system_ui::IconName;

fn mount_blank(_: ContentMountContext) -> View {
    view! { <div></div> }.into_view()
}

struct Session {
    registry: WindowRegistry,
    drag: DragState,
    config: DesktopConfig,
}

impl Session {
    fn with_windows(ids: &[&str]) -> Self {
        let mut session = Self {
            registry: WindowRegistry::new(),
            drag: DragState::Idle,
            config: DesktopConfig::default(),
        };
        for id in ids {
            session.run(DesktopAction::Register(WindowConfig::new(
                *id,
                id.to_uppercase(),
                IconName::Folder,
                ContentModule::new("blank", mount_blank),
            )));
        }
        session
    }

    fn run(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.registry, &mut self.drag, &self.config, action)
    }

    fn dock(&mut self, id: &str) -> Vec<RuntimeEffect> {
        self.run(DesktopAction::DockClick {
            window_id: WindowId::new(id),
        })
    }

    fn z(&self, id: &str) -> u64 {
        self.registry
            .get(&WindowId::new(id))
            .map(|w| w.z_index)
            .unwrap_or_default()
    }

    fn active(&self) -> Option<&str> {
        self.registry.active_id().map(WindowId::as_str)
    }

    fn assert_invariants(&self) {
        let mut visible_z = Vec::new();
        for window in self.registry.windows() {
            if !window.is_open {
                assert!(!self.registry.is_active(&window.id), "{} closed and active", window.id);
            }
            if window.is_visible() {
                visible_z.push(window.z_index);
            }
        }
        let mut deduped = visible_z.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), visible_z.len(), "duplicate z among visible windows");
        if let Some(active) = self.registry.active_id() {
            let window = self.registry.get(active).expect("active window registered");
            assert!(window.is_visible());
            assert_eq!(window.z_index, self.registry.top_z_index());
        }
    }
}

fn announced(effects: &[RuntimeEffect]) -> Vec<ShellEventKind> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            RuntimeEffect::Announce(event) => Some(event.kind),
            RuntimeEffect::FocusWindowInput(_) => None,
        })
        .collect()
}

#[test]
fn dock_clicks_launch_hide_and_raise() {
    let mut session = Session::with_windows(&["a", "b"]);

    let effects = session.dock("a");
    assert_eq!(announced(&effects), vec![ShellEventKind::Opened]);
    assert_eq!((session.active(), session.z("a")), (Some("a"), 1));

    session.dock("b");
    assert_eq!((session.active(), session.z("b")), (Some("b"), 2));

    let effects = session.dock("a");
    assert_eq!(announced(&effects), vec![ShellEventKind::Focused]);
    assert_eq!((session.active(), session.z("a")), (Some("a"), 3));

    let effects = session.dock("a");
    assert_eq!(announced(&effects), vec![ShellEventKind::Minimized]);
    assert_eq!(session.active(), None);
    let a = session.registry.get(&WindowId::new("a")).expect("a registered");
    assert!(a.is_open && a.is_minimized);

    session.dock("a");
    assert_eq!((session.active(), session.z("a")), (Some("a"), 4));
    assert!(!session
        .registry
        .get(&WindowId::new("a"))
        .expect("a registered")
        .is_minimized);
    session.assert_invariants();
}

#[test]
fn dock_restore_keeps_moved_geometry() {
    let mut session = Session::with_windows(&[]);
    let mut config = WindowConfig::new(
        "a",
        "Alpha",
        IconName::Folder,
        ContentModule::new("blank", mount_blank),
    );
    config.size = Some(WindowSize {
        width: 520,
        height: 380,
    });
    session.run(DesktopAction::Register(config));
    let a = WindowId::new("a");
    let viewport = WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 712,
    };

    session.dock("a");
    session.run(DesktopAction::BeginMove {
        window_id: a.clone(),
        pointer: PointerPosition { x: 60, y: 60 },
    });
    session.run(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 333, y: 135 },
        viewport,
    });
    session.run(DesktopAction::EndMove);
    let geometry = |session: &Session| {
        session
            .registry
            .get(&WindowId::new("a"))
            .map(|w| (w.position, w.size))
    };
    let moved = Some((
        WindowPosition { x: 321, y: 123 },
        WindowSize {
            width: 520,
            height: 380,
        },
    ));
    assert_eq!(geometry(&session), moved);

    session.dock("a");
    assert!(session.registry.get(&a).is_some_and(|w| w.is_minimized));
    assert_eq!(geometry(&session), moved);

    session.dock("a");
    assert!(session.registry.get(&a).is_some_and(|w| w.is_visible()));
    assert_eq!(session.active(), Some("a"));
    assert_eq!(geometry(&session), moved);
    session.assert_invariants();
}

#[test]
fn title_bar_drag_follows_pointer_and_clamps() {
    let mut session = Session::with_windows(&["a"]);
    let a = WindowId::new("a");
    session.run(DesktopAction::Open {
        window_id: a.clone(),
    });
    let viewport = WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 712,
    };

    session.run(DesktopAction::BeginMove {
        window_id: a.clone(),
        pointer: PointerPosition { x: 100, y: 100 },
    });
    assert!(session.drag.is_dragging());
    session.run(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 300, y: 150 },
        viewport,
    });
    assert_eq!(
        session.registry.get(&a).map(|w| w.position),
        Some(WindowPosition { x: 248, y: 98 })
    );

    session.run(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: -500, y: 100 },
        viewport,
    });
    assert_eq!(
        session.registry.get(&a).map(|w| w.position),
        Some(WindowPosition { x: 0, y: 48 })
    );

    session.run(DesktopAction::EndMove);
    assert_eq!(session.drag, DragState::Idle);
    session.run(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 600, y: 600 },
        viewport,
    });
    assert_eq!(
        session.registry.get(&a).map(|w| w.position),
        Some(WindowPosition { x: 0, y: 48 })
    );
}

#[test]
fn maximized_window_does_not_drag() {
    let mut session = Session::with_windows(&["a"]);
    let a = WindowId::new("a");
    session.run(DesktopAction::Open {
        window_id: a.clone(),
    });
    session.run(DesktopAction::ToggleMaximize {
        window_id: a.clone(),
    });

    session.run(DesktopAction::BeginMove {
        window_id: a.clone(),
        pointer: PointerPosition { x: 10, y: 10 },
    });
    assert_eq!(session.drag, DragState::Idle);
    assert_eq!(session.active(), Some("a"));
}

#[test]
fn registering_twice_keeps_live_state() {
    let mut session = Session::with_windows(&["a"]);
    let a = WindowId::new("a");
    session.run(DesktopAction::Open {
        window_id: a.clone(),
    });
    let before = session.registry.clone();

    session.run(DesktopAction::Register(WindowConfig::new(
        "a",
        "Replacement",
        IconName::Mail,
        ContentModule::new("other", mount_blank),
    )));

    assert_eq!(session.registry, before);
    assert_eq!(session.registry.len(), 1);
}

#[test]
fn closing_active_window_leaves_nothing_active() {
    let mut session = Session::with_windows(&["a", "b"]);
    session.dock("a");
    session.dock("b");

    let effects = session.run(DesktopAction::Close {
        window_id: WindowId::new("b"),
    });

    assert_eq!(announced(&effects), vec![ShellEventKind::Closed]);
    assert_eq!(session.active(), None);
    session.assert_invariants();
}

#[test]
fn unknown_ids_are_absorbed() {
    let mut session = Session::with_windows(&["a"]);
    let before = session.registry.clone();

    for action in [
        DesktopAction::Open {
            window_id: WindowId::new("ghost"),
        },
        DesktopAction::Focus {
            window_id: WindowId::new("ghost"),
        },
        DesktopAction::DockClick {
            window_id: WindowId::new("ghost"),
        },
        DesktopAction::BeginMove {
            window_id: WindowId::new("ghost"),
            pointer: PointerPosition { x: 0, y: 0 },
        },
    ] {
        assert!(session.run(action).is_empty());
    }

    assert_eq!(session.registry, before);
    assert_eq!(session.drag, DragState::Idle);
}
