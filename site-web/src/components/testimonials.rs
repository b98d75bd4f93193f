//! Client testimonials carousel.

use leptos::prelude::*;

use shared::dto::content::TestimonialRecord;

use crate::services::content::ContentStore;

fn fallback_testimonials() -> Vec<TestimonialRecord> {
    vec![
        TestimonialRecord {
            id: "1".into(),
            client_name: "Marcus Chen".into(),
            company: "Vantage Capital Group".into(),
            quote: "Lotus Brothers brought a rare combination of architectural vision and \
                    execution discipline. The Meridian project exceeded our investment thesis \
                    in every metric: occupancy, design awards, and community reception."
                .into(),
            ..Default::default()
        },
        TestimonialRecord {
            id: "2".into(),
            client_name: "Priya Nair".into(),
            company: "Sage Ventures".into(),
            quote: "Working with the Lotus Brothers team felt like a true creative partnership. \
                    They listened deeply to our sustainability goals and delivered a campus that \
                    genuinely reflects our company's values."
                .into(),
            ..Default::default()
        },
        TestimonialRecord {
            id: "3".into(),
            client_name: "James Whitmore".into(),
            company: "Whitmore Family Office".into(),
            quote: "The attention to detail in Cedar Park Villas is extraordinary. Every \
                    material, every sight line. It all feels considered. This is what luxury \
                    real estate should feel like."
                .into(),
            ..Default::default()
        },
    ]
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (testimonials, set_testimonials) = signal(fallback_testimonials());
    let (current, set_current) = signal(0usize);

    leptos::task::spawn_local(async move {
        match ContentStore::new().testimonials().await {
            Ok(records) if !records.is_empty() => set_testimonials.set(records),
            Ok(_) => {}
            Err(err) => log::warn!("testimonials fetch failed: {err}"),
        }
    });

    let total = move || testimonials.with(Vec::len);
    let prev = move |_| set_current.update(|i| *i = (*i + total() - 1) % total());
    let next = move |_| set_current.update(|i| *i = (*i + 1) % total());

    view! {
        <section class="section section-dark">
            <div class="section-inner">
                <div class="section-header">
                    <div>
                        <span class="kicker">"Client Stories"</span>
                        <h2 class="section-title">"In their " <em>"words"</em></h2>
                    </div>
                    <div class="carousel-controls">
                        <button class="carousel-btn" on:click=prev>"‹"</button>
                        <button class="carousel-btn" on:click=next>"›"</button>
                    </div>
                </div>

                {move || {
                    testimonials.with(|records| {
                        records.get(current.get() % records.len().max(1)).map(|record| {
                            view! {
                                <blockquote class="testimonial">
                                    <p class="testimonial-quote">{record.quote.clone()}</p>
                                    <footer>
                                        <span class="testimonial-name">
                                            {record.client_name.clone()}
                                        </span>
                                        <span class="muted">{record.company.clone()}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                    })
                }}

                <div class="carousel-dots">
                    {move || {
                        (0..total())
                            .map(|i| {
                                let active = move || current.get() % total().max(1) == i;
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=active
                                        on:click=move |_| set_current.set(i)
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
