use leptos::prelude::*;

use crate::catalog::{Project, SectionId, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str()>
            <h2 class="section-title">"Featured Projects"</h2>
            <p class="section-subtitle">
                "Real-world applications built during my internship journey."
            </p>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-img">{project.glyph}</div>
            <div class="project-content">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tech-list">
                    {project
                        .tech_badges()
                        .map(|badge| view! { <span class="tech-item">{badge}</span> })
                        .collect_view()}
                </div>
                <a href=project.link class="btn btn-outline btn-block">
                    "View Project"
                    <span class="glyph">"↗"</span>
                </a>
            </div>
        </div>
    }
}
