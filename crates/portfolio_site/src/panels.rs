//! Placeholder content panels hosted by the desktop's windows.
//!
//! Each panel is an opaque [`ContentModule`]; the catalog refers to them by key.

use desktop_app_contract::{ContentModule, ContentMountContext};
use leptos::*;

const PANELS: [ContentModule; 7] = [
    ContentModule::new("bio", mount_bio),
    ContentModule::new("projects", mount_projects),
    ContentModule::new("contact", mount_contact),
    ContentModule::new("terminal", mount_terminal),
    ContentModule::new("game", mount_game),
    ContentModule::new("settings", mount_settings),
    ContentModule::new("chat", mount_chat),
];

/// Resolves a catalog content key to its panel.
pub fn content_module(key: &str) -> Option<ContentModule> {
    PANELS.iter().copied().find(|panel| panel.key() == key)
}

fn mount_bio(_: ContentMountContext) -> View {
    view! {
        <article class="panel panel-bio">
            <h1>"Hello there"</h1>
            <p>
                "I build software for the web and the systems underneath it. "
                "This desktop is a small window manager written in Rust and compiled to WebAssembly."
            </p>
            <p>"Open the Projects folder to see what I have been working on."</p>
        </article>
    }
    .into_view()
}

fn mount_projects(_: ContentMountContext) -> View {
    let projects = [
        ("Desktop shell", "Window manager, dock and catalog for this site."),
        ("Terminal toy", "A tiny command echo running inside a window."),
        ("Pixel game", "A click-the-target score counter."),
    ];

    view! {
        <section class="panel panel-projects">
            <ul>
                {projects
                    .into_iter()
                    .map(|(name, summary)| {
                        view! {
                            <li>
                                <strong>{name}</strong>
                                <span>{summary}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_view()
}

fn mount_contact(_: ContentMountContext) -> View {
    view! {
        <section class="panel panel-contact">
            <p>"The quickest way to reach me:"</p>
            <ul>
                <li><a href="mailto:hello@example.com">"hello@example.com"</a></li>
                <li><a href="https://github.com/" target="_blank" rel="noopener">"GitHub"</a></li>
            </ul>
        </section>
    }
    .into_view()
}

fn terminal_reply(line: &str) -> String {
    match line.trim() {
        "" => String::new(),
        "help" => "commands: help, whoami, clear, echo <text>".to_string(),
        "whoami" => "guest".to_string(),
        other => match other.strip_prefix("echo ") {
            Some(text) => text.to_string(),
            None => format!("{other}: command not found"),
        },
    }
}

fn mount_terminal(context: ContentMountContext) -> View {
    let history = create_rw_signal(vec!["type `help` to list commands".to_string()]);
    let input = create_rw_signal(String::new());
    let active = context.active;

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let line = input.get_untracked();
        input.set(String::new());
        if line.trim() == "clear" {
            history.set(Vec::new());
            return;
        }
        let reply = terminal_reply(&line);
        history.update(|history| {
            history.push(format!("$ {line}"));
            if !reply.is_empty() {
                history.push(reply);
            }
        });
    };

    view! {
        <section class="panel panel-terminal" data-active=move || active.get().to_string()>
            <pre>{move || history.get().join("\n")}</pre>
            <form on:submit=submit>
                <span aria-hidden="true">"$ "</span>
                <input
                    type="text"
                    aria-label="Terminal input"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </form>
        </section>
    }
    .into_view()
}

fn mount_game(_: ContentMountContext) -> View {
    let score = create_rw_signal(0u32);

    view! {
        <section class="panel panel-game">
            <p>{move || format!("Score: {}", score.get())}</p>
            <button type="button" on:click=move |_| score.update(|score| *score += 1)>
                "Hit the target"
            </button>
        </section>
    }
    .into_view()
}

fn mount_settings(_: ContentMountContext) -> View {
    view! {
        <section class="panel panel-settings">
            <p>"Nothing to configure yet."</p>
        </section>
    }
    .into_view()
}

fn mount_chat(context: ContentMountContext) -> View {
    view! {
        <section class="panel panel-chat">
            <p>"Chat is offline."</p>
            <small>{format!("window: {}", context.window_id)}</small>
        </section>
    }
    .into_view()
}
