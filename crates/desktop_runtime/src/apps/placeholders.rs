//! Static content panels rendered inside window slots.
//!
//! Chat and image generation are network-backed collaborators in a full deployment; here they
//! render a static panel so the window manager has a body to host.

use leptos::*;

use super::ContentProvider;
use crate::model::AppId;

/// Returns the content provider for `app_id`. Resolved once by [`super::AppRegistry`].
pub(super) fn content_provider(app_id: AppId) -> ContentProvider {
    match app_id {
        AppId::About => about_panel,
        AppId::Projects => projects_panel,
        AppId::Chat => chat_panel,
        AppId::Contact => contact_panel,
        AppId::ImageGen => image_gen_panel,
        AppId::GitHub => external_slot_panel,
    }
}

fn about_panel() -> View {
    view! {
        <div class="app-shell app-about">
            <h2>"Hello there"</h2>
            <p>"This desktop is a portfolio dressed up as an operating system."</p>
            <p>"Double-click an icon, drag a title bar, or grab any edge to resize a window."</p>
        </div>
    }
    .into_view()
}

fn projects_panel() -> View {
    let projects = [
        ("Window manager", "Reducer-driven focus, stacking and pointer sessions."),
        ("Taskbar", "Click to restore, click again to minimize."),
        ("Shell", "Login, shutdown and a few surprises."),
    ];
    view! {
        <div class="app-shell app-projects">
            <ul class="app-project-list">
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
        </div>
    }
    .into_view()
}

fn chat_panel() -> View {
    view! {
        <div class="app-shell app-chat">
            <div class="app-chat-log" role="log">
                <p class="app-chat-model">"Hi! The assistant is offline in this build."</p>
            </div>
            <div class="app-toolbar">
                <input class="app-field" type="text" placeholder="Type a message..." disabled=true />
                <button type="button" class="app-action" disabled=true>"Send"</button>
            </div>
        </div>
    }
    .into_view()
}

fn contact_panel() -> View {
    view! {
        <div class="app-shell app-contact">
            <label>"Name" <input class="app-field" type="text" /></label>
            <label>"Message" <textarea class="app-field" rows="6"></textarea></label>
            <button type="button" class="app-action">"Send"</button>
        </div>
    }
    .into_view()
}

fn image_gen_panel() -> View {
    view! {
        <div class="app-shell app-image-gen">
            <p><strong>"AI Image Generator"</strong></p>
            <p>"Image generation is not connected in this build."</p>
            <select class="app-field" disabled=true>
                <option>"1K"</option>
                <option>"2K"</option>
                <option>"4K"</option>
            </select>
        </div>
    }
    .into_view()
}

fn external_slot_panel() -> View {
    view! { <p>"This application opens outside the desktop."</p> }.into_view()
}
