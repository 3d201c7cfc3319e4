use leptos::prelude::*;

use super::stars;
use crate::content::TestimonialsContent;

#[component]
pub fn Testimonials() -> impl IntoView {
    let content = TestimonialsContent::default();

    view! {
        <section id="reviews" class="section testimonials">
            <div class="section-heading">
                <h2>{content.title}</h2>
                <p>{content.subtitle}</p>
            </div>

            <div class="testimonial-grid">
                {content.testimonials.into_iter().map(|t| {
                    let initials = t.initials();
                    view! {
                        <figure class="testimonial">
                            <div class="rating">{stars(t.rating as usize)}</div>
                            <blockquote>"\u{201c}" {t.quote} "\u{201d}"</blockquote>
                            <div class="testimonial-product">"Verified purchase: " {t.product}</div>
                            <figcaption>
                                <span class="avatar">{initials}</span>
                                <span class="author">
                                    <strong>{t.author_name}</strong>
                                    <span>{t.author_title}</span>
                                </span>
                            </figcaption>
                        </figure>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="stats-row">
                {content.stats.into_iter().map(|stat| view! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
