//! Headline figures strip on the home page.

use leptos::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("12+", "Years of Excellence"),
    ("48", "Projects Delivered"),
    ("2.4M", "Sq Ft Developed"),
    ("6", "Cities & Growing"),
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="section section-dark">
            <div class="section-inner stats-grid">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
