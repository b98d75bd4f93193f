//! Featured projects strip on the home page: the three newest portfolio
//! records from the content store, with built-in fixtures as fallback.

use leptos::prelude::*;
use leptos_router::components::A;

use shared::dto::content::ProjectRecord;

use crate::services::content::ContentStore;

fn fallback_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "1".into(),
            title: "The Meridian".into(),
            location: "Austin, TX".into(),
            category: Some("residential".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80".into(),
            ),
            year: Some("2025".into()),
            ..Default::default()
        },
        ProjectRecord {
            id: "2".into(),
            title: "Sage Commerce Center".into(),
            location: "Denver, CO".into(),
            category: Some("commercial".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80".into(),
            ),
            year: Some("2024".into()),
            ..Default::default()
        },
        ProjectRecord {
            id: "3".into(),
            title: "Harmony Residences".into(),
            location: "Portland, OR".into(),
            category: Some("mixed_use".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800&q=80".into(),
            ),
            year: Some("2026".into()),
            ..Default::default()
        },
    ]
}

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let (projects, set_projects) = signal(fallback_projects());

    leptos::task::spawn_local(async move {
        match ContentStore::new().featured_projects(3).await {
            Ok(records) if !records.is_empty() => set_projects.set(records),
            Ok(_) => {}
            Err(err) => log::warn!("featured projects fetch failed: {err}"),
        }
    });

    view! {
        <section id="projects" class="section section-light">
            <div class="section-inner">
                <div class="section-header">
                    <div>
                        <span class="kicker">"Portfolio"</span>
                        <h2 class="section-title section-title-dark">
                            "Featured " <em>"projects"</em>
                        </h2>
                    </div>
                    <A href="/projects" attr:class="link-more">"View All ↗"</A>
                </div>

                <div class="project-grid">
                    <For
                        each=move || projects.get()
                        key=|project| project.id.clone()
                        children=move |project: ProjectRecord| {
                            let image = project.image_url.clone().unwrap_or_default();
                            let year = project.year.clone().unwrap_or_default();
                            view! {
                                <A href="/projects" attr:class="project-card">
                                    <div class="project-card-media">
                                        <img src=image alt=project.title.clone()/>
                                    </div>
                                    <div class="project-card-body">
                                        <span class="kicker">{project.category_label()}</span>
                                        <h3>{project.title.clone()}</h3>
                                        <p class="muted">
                                            {project.location.clone()} " · " {year}
                                        </p>
                                    </div>
                                </A>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
