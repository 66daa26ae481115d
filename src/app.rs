mod contact;
mod footer;
mod homepage;
mod nav;
mod projects;
mod skills;
mod storage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::{
    catalog::{SectionId, PROFILE, SECTIONS},
    contact::{resume_acknowledgement, Acknowledgement},
    menu::{MenuAction, NavigationMenu},
    theme::{ThemeMode, ThemePreference},
    tracker::{SectionBounds, ViewportState, ViewportTracker},
};

use footer::Footer;
use homepage::HomePage;
use nav::{MobileOverlay, NavBar};
use storage::LocalPreference;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Page-wide UI state. Created by [`App`] and shared with the sections
/// through context; it lives exactly as long as the page.
#[derive(Clone, Copy)]
pub struct UiState {
    pub theme: RwSignal<ThemeMode>,
    pub menu: RwSignal<NavigationMenu>,
    pub scrolled: RwSignal<bool>,
    pub active_section: RwSignal<SectionId>,
    preference: StoredValue<Option<ThemePreference<LocalPreference>>>,
}

impl UiState {
    fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemeMode::default()),
            menu: RwSignal::new(NavigationMenu::default()),
            scrolled: RwSignal::new(false),
            active_section: RwSignal::new(SectionId::default()),
            preference: StoredValue::new(None),
        }
    }

    fn restore_theme(&self, store: LocalPreference) {
        let pref = ThemePreference::initialize(store);
        self.theme.set(pref.mode());
        self.preference.set_value(Some(pref));
    }

    pub fn toggle_theme(&self) {
        let next = self
            .preference
            .try_update_value(|pref| pref.as_mut().map(ThemePreference::toggle))
            .flatten()
            // not restored yet, flip without persisting
            .unwrap_or_else(|| self.theme.get_untracked().toggled());
        self.theme.set(next);
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| {
            menu.toggle();
        });
    }

    /// Runs a control from the mobile overlay, closing the overlay first.
    /// Anchor links scroll natively once the click handler returns.
    pub fn select(&self, action: MenuAction) {
        let mut chosen = action;
        self.menu.update(|menu| chosen = menu.select(action));
        if chosen == MenuAction::DownloadResume {
            self.download_resume();
        }
    }

    pub fn download_resume(&self) {
        acknowledge(&resume_acknowledgement(&PROFILE));
    }

    /// Publishes a tracker observation, touching only the signals whose value
    /// changed. Returns whether anything was written.
    fn apply_viewport(&self, state: ViewportState) -> bool {
        let mut changed = false;
        if self.scrolled.get_untracked() != state.scrolled {
            self.scrolled.set(state.scrolled);
            changed = true;
        }
        if self.active_section.get_untracked() != state.active {
            self.active_section.set(state.active);
            changed = true;
        }
        changed
    }
}

pub(crate) fn acknowledge(ack: &Acknowledgement) {
    if let Err(err) = window().alert_with_message(ack.message()) {
        log::warn!("couldn't show acknowledgement: {err:?}");
    }
}

fn measure_sections() -> Vec<SectionBounds> {
    let document = document();
    SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = document
                .get_element_by_id(section.id.as_str())?
                .get_bounding_client_rect();
            Some(SectionBounds::new(section.id, rect.top(), rect.bottom()))
        })
        .collect()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let ui = UiState::new();
    provide_context(ui);

    let store = LocalPreference::new();
    // restore after hydration so the server-rendered theme matches the first client render
    Effect::watch(|| (), move |_, _, _| ui.restore_theme(store), true);

    let (_, scroll_y) = use_window_scroll();
    let tracker = StoredValue::new(ViewportTracker::default());
    Effect::new(move |_| {
        let offset = scroll_y.get();
        let bounds = measure_sections();
        if let Some(state) = tracker.try_update_value(|t| t.observe(offset, &bounds)) {
            ui.apply_viewport(state);
        }
    });

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div
                class=move || format!("portfolio-container {}", ui.theme.get().class())
                style=move || format!("color-scheme: {}", ui.theme.get().color_scheme())
            >
                <NavBar />
                <MobileOverlay />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
