use leptos::prelude::*;

use crate::catalog::{SectionId, SkillGroup, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str()>
            <h2 class="section-title">"Technical Skills"</h2>
            <p class="section-subtitle">"The tech stack I use to bring ideas to life."</p>
            <div class="skills-grid">
                {SKILLS.iter().map(|group| view! { <SkillCard group=*group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="skill-card">
            <div class="skill-header">
                <span class="skill-icon">{group.icon.glyph()}</span>
                <h3>{group.category}</h3>
            </div>
            <div class="skill-tags">
                {group
                    .items
                    .iter()
                    .map(|item| view! { <span class="tag">{*item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
