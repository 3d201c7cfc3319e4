use leptos::prelude::*;

use crate::content::AboutContent;

#[component]
pub fn About() -> impl IntoView {
    let content = AboutContent::default();

    view! {
        <section id="about" class="section about">
            <div class="section-heading">
                <h2>{content.title} " " <span class="accent">{content.title_accent}</span></h2>
                <p>{content.intro}</p>
            </div>

            <div class="about-story">
                <div class="story-text">
                    <h3>{content.story_title}</h3>
                    {content.story.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect::<Vec<_>>()}
                </div>
                <div class="founder-card">
                    <div class="founder-name">{content.founder}</div>
                    <div class="founder-role">{content.founder_role}</div>
                    <div class="stat">
                        <div class="stat-value">{content.highlight.value}</div>
                        <div class="stat-label">{content.highlight.label}</div>
                    </div>
                </div>
            </div>

            <div class="feature-grid">
                {content.features.into_iter().map(|feature| view! {
                    <div class="feature">
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
