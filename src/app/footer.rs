use chrono::Datelike;
use leptos::prelude::*;

use crate::catalog::PROFILE;

const BUILD_STAMP: &str = concat!("Built ", env!("BUILD_TIME"));

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="social-links">
                <a href=PROFILE.github class="theme-toggle" aria-label="GitHub Profile">
                    <span class="glyph">"GH"</span>
                </a>
                <a href=PROFILE.mailto() class="theme-toggle" aria-label="Email">
                    <span class="glyph">"✉"</span>
                </a>
            </div>
            <p class="copyright" title=BUILD_STAMP>
                "© " {year} " " {PROFILE.name} ". All rights reserved."
            </p>
            <p class="brand">{PROFILE.brand.to_uppercase()}</p>
        </footer>
    }
}
