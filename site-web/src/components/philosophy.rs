//! "Our Philosophy" section: three pillars and a pull quote.

use leptos::prelude::*;

struct Pillar {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        number: "01",
        title: "Bespoke Architecture",
        description: "Every residence begins as a blank canvas. Proportions, light, and material \
                      are chosen for the unique landscape and the lives that will unfold within.",
    },
    Pillar {
        number: "02",
        title: "Enduring Materials",
        description: "We select stone, timber, and steel that improve with time. No veneer, no \
                      compromise. Only surfaces that grow more beautiful over decades.",
    },
    Pillar {
        number: "03",
        title: "Living in Harmony",
        description: "Our homes integrate with nature, neighbourhood, and community, creating \
                      places of quiet belonging that feel inevitable from the first day.",
    },
];

#[component]
pub fn PhilosophySection() -> impl IntoView {
    view! {
        <section class="section section-dark philosophy">
            <div class="section-inner">
                <div class="philosophy-header">
                    <div>
                        <div class="kicker-row">
                            <span class="rule"></span>
                            <span class="kicker">"Our Philosophy"</span>
                        </div>
                        <h2 class="section-title">
                            "Crafted for"<br/>
                            <span class="section-title-soft">"a quiet life."</span>
                        </h2>
                    </div>
                    <p class="section-lead">
                        "Lotus Brothers was founded on a simple belief: that where you live shapes \
                         how you feel. Every decision we make flows from that conviction."
                    </p>
                </div>

                <div class="pillars">
                    {PILLARS
                        .iter()
                        .map(|pillar| {
                            view! {
                                <div class="pillar-row">
                                    <span class="pillar-number">{pillar.number}</span>
                                    <h3 class="pillar-title">{pillar.title}</h3>
                                    <p class="pillar-description">{pillar.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <figure class="philosophy-quote">
                    <blockquote>"\"A home should feel like an exhale.\""</blockquote>
                    <figcaption class="kicker">"Lotus Brothers"</figcaption>
                </figure>
            </div>
        </section>
    }
}
