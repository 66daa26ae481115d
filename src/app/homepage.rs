use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{SectionId, PROFILE};

use super::{contact::ContactSection, projects::Projects, skills::Skills};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <p class="hero-tag">"Hello, World!"</p>
            <h1>"I'm " <span class="text-primary">{PROFILE.name}</span></h1>
            <h2 class="hero-role">{PROFILE.role}</h2>
            <p class="hero-desc">{PROFILE.tagline}</p>
            <div class="btn-group">
                <a href=SectionId::Projects.anchor() class="btn btn-primary">
                    "My Work"
                    <span class="glyph">"→"</span>
                </a>
                <a href=SectionId::Contact.anchor() class="btn btn-outline">
                    "Contact Me"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str()>
            <h2 class="section-title">"About Me"</h2>
            <p class="section-subtitle">"Student, Developer, and Continuous Learner"</p>
            <div class="about-grid">
                <div class="about-img-box">
                    <div class="about-img" role="img" aria-label=PROFILE.name>
                        {PROFILE.initials()}
                    </div>
                </div>
                <div class="about-text">
                    <h3>"Bridging Code and Performance"</h3>
                    <p>
                        "I'm a third-year B.E. Computer Engineering student at RMD Sinhgad College of Engineering. Currently, I'm working as a Web Development Intern building real-world features."
                    </p>
                    <p>
                        "My toolkit includes React, Node.js, and Firebase. I'm also actively learning Python and exploring AI-related domains. I focus on writing clean, performance-conscious code that solves real problems."
                    </p>
                    <div class="social-links">
                        <a
                            href=PROFILE.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="theme-toggle"
                            aria-label="GitHub Profile"
                        >
                            <span class="glyph">"GH"</span>
                        </a>
                        <a href=PROFILE.linkedin class="theme-toggle" aria-label="LinkedIn Profile">
                            <span class="glyph">"in"</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
