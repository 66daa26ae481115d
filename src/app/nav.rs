use leptos::prelude::*;

use crate::{
    catalog::{SectionId, PROFILE, SECTIONS},
    menu::MenuAction,
};

use super::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<UiState>();

    view! {
        <nav class=move || if ui.scrolled.get() { "scrolled" } else { "" }>
            <a href=SectionId::Home.anchor() class="logo">
                {PROFILE.brand}
            </a>
            <div class="nav-right">
                <div class="nav-links">
                    {SECTIONS
                        .iter()
                        .map(move |section| {
                            let id = section.id;
                            view! {
                                <a
                                    href=section.anchor
                                    class=move || {
                                        if ui.active_section.get() == id { "active" } else { "" }
                                    }
                                >
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="theme-toggle"
                    aria-label="Toggle Theme"
                    on:click=move |_| ui.toggle_theme()
                >
                    // show the mode a click switches to
                    {move || if ui.theme.get().is_dark() { "☀" } else { "☾" }}
                </button>
                <button class="btn btn-outline btn-compact" on:click=move |_| ui.download_resume()>
                    "Resume"
                </button>
                <button
                    class="mobile-menu-btn theme-toggle"
                    aria-label="Open Menu"
                    on:click=move |_| ui.toggle_menu()
                >
                    "☰"
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn MobileOverlay() -> impl IntoView {
    let ui = expect_context::<UiState>();

    view! {
        <div class=move || ui.menu.get().overlay_class()>
            <button class="close-btn" aria-label="Close Menu" on:click=move |_| ui.toggle_menu()>
                "✕"
            </button>
            {SECTIONS
                .iter()
                .map(move |section| {
                    let id = section.id;
                    view! {
                        <a
                            href=section.anchor
                            class="overlay-link"
                            on:click=move |_| ui.select(MenuAction::ScrollTo(id))
                        >
                            {section.label}
                        </a>
                    }
                })
                .collect_view()}
            <button
                class="btn btn-primary"
                on:click=move |_| ui.select(MenuAction::DownloadResume)
            >
                "Download Resume"
            </button>
        </div>
    }
}
