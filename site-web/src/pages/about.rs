//! About page: studio story, leadership team, values.

use leptos::prelude::*;

use crate::components::{FooterSection, Navbar};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo_url: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Marcus Chen",
        role: "Chief Executive Officer",
        photo_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&q=80",
    },
    TeamMember {
        name: "David Chen",
        role: "Chief Operating Officer",
        photo_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&q=80",
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "Head of Design",
        photo_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&q=80",
    },
    TeamMember {
        name: "James Park",
        role: "Director of Development",
        photo_url: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=400&q=80",
    },
];

const VALUES: [(&str, &str); 4] = [
    (
        "Sustainability",
        "Every project is designed to give back more than it takes, from passive cooling to \
         native landscaping.",
    ),
    (
        "Innovation",
        "We prototype new materials and construction methods on every build instead of \
         repeating yesterday's playbook.",
    ),
    (
        "Community",
        "Developments succeed when neighborhoods do. We design for the block, not just the lot.",
    ),
    (
        "Integrity",
        "Transparent budgets, honest timelines, and partners who hear from us before the \
         spreadsheet does.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page-offset">
            <section class="section section-light">
                <div class="section-inner">
                    <span class="kicker">"Our Story"</span>
                    <h1 class="section-title section-title-dark">
                        "Two brothers, one " <em>"philosophy"</em>
                    </h1>
                    <div class="about-story">
                        <p>
                            "Lotus Brothers was founded in Austin in 2014 by Marcus and David \
                             Chen with a simple conviction: the places we live and work should \
                             make us calmer, not busier. What began as a two-person studio \
                             restoring mid-century homes has grown into a national development \
                             practice spanning residential, commercial, and hospitality work."
                        </p>
                        <p>
                            "The name comes from the lotus flower, which grows from still water \
                             into something quietly extraordinary. We try to build the same way: \
                             patiently, deliberately, and in harmony with what surrounds us."
                        </p>
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="section-inner">
                    <span class="kicker">"Leadership"</span>
                    <h2 class="section-title">"The " <em>"team"</em></h2>
                    <div class="team-grid">
                        {TEAM
                            .iter()
                            .map(|member| view! {
                                <div class="team-card">
                                    <div class="team-photo">
                                        <img src=member.photo_url alt=member.name/>
                                    </div>
                                    <h3>{member.name}</h3>
                                    <p class="muted">{member.role}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="section section-light">
                <div class="section-inner">
                    <span class="kicker">"What We Stand For"</span>
                    <h2 class="section-title section-title-dark">"Our " <em>"values"</em></h2>
                    <div class="values-grid">
                        {VALUES
                            .iter()
                            .map(|(title, body)| view! {
                                <div class="value-card">
                                    <h3>{*title}</h3>
                                    <p class="muted">{*body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </main>
        <FooterSection/>
    }
}
