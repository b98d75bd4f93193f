//! Full portfolio page: category filtering plus a per-project detail
//! overlay opened by clicking a card.

use leptos::prelude::*;

use shared::dto::content::{ProjectRecord, ProjectStatus};

use crate::components::{FooterSection, Navbar};
use crate::services::content::ContentStore;

const CATEGORIES: [(&str, &str); 5] = [
    ("all", "All"),
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("mixed_use", "Mixed Use"),
    ("hospitality", "Hospitality"),
];

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
            status: Some(ProjectStatus::InProgress),
            square_footage: Some("280,000 sq ft".into()),
            description: Some(
                "A 24-story residential tower wrapped in limestone and glass, with a rooftop \
                 garden that filters rainwater for the building's landscaping."
                    .into(),
            ),
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
            status: Some(ProjectStatus::Completed),
            square_footage: Some("145,000 sq ft".into()),
            description: Some(
                "A net-zero office campus organized around a central courtyard, with \
                 mass-timber structure and operable facades on every floor."
                    .into(),
            ),
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
            status: Some(ProjectStatus::Planning),
            square_footage: Some("320,000 sq ft".into()),
            description: Some(
                "Ground-floor retail and maker studios beneath five stories of homes, knit \
                 into the neighborhood by a public mews and pocket park."
                    .into(),
            ),
            ..Default::default()
        },
        ProjectRecord {
            id: "4".into(),
            title: "Oasis Hotel & Spa".into(),
            location: "Scottsdale, AZ".into(),
            category: Some("hospitality".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800&q=80".into(),
            ),
            year: Some("2025".into()),
            status: Some(ProjectStatus::InProgress),
            square_footage: Some("95,000 sq ft".into()),
            description: Some(
                "A desert resort of low rammed-earth pavilions shaded by saguaro and palo \
                 verde, cooled passively through courtyard thermal chimneys."
                    .into(),
            ),
            ..Default::default()
        },
        ProjectRecord {
            id: "5".into(),
            title: "Cedar Park Villas".into(),
            location: "Cedar Park, TX".into(),
            category: Some("residential".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&q=80".into(),
            ),
            year: Some("2023".into()),
            status: Some(ProjectStatus::Completed),
            square_footage: Some("18 villas".into()),
            description: Some(
                "Eighteen courtyard villas in cedar and board-formed concrete, each oriented \
                 to its own live oak and screened from its neighbors."
                    .into(),
            ),
            ..Default::default()
        },
        ProjectRecord {
            id: "6".into(),
            title: "Lumina Tower".into(),
            location: "Dallas, TX".into(),
            category: Some("commercial".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1554469384-e58fac16e23a?w=800&q=80".into(),
            ),
            year: Some("2026".into()),
            status: Some(ProjectStatus::Planning),
            square_footage: Some("410,000 sq ft".into()),
            description: Some(
                "A 38-story headquarters tower with a double-skin facade that dims the \
                 Texas sun and a winter garden spanning the top three floors."
                    .into(),
            ),
            ..Default::default()
        },
    ]
}

/// Detail overlay for one portfolio project.
#[component]
fn ProjectDetailModal(project: ProjectRecord, on_close: Callback<()>) -> impl IntoView {
    let image = project.image_url.clone().unwrap_or_default();
    let year = project.year.clone().unwrap_or_default();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal modal-project" on:click=|ev| ev.stop_propagation()>
                <div class="modal-media">
                    <img src=image alt=project.title.clone()/>
                    {project.status.map(|status| {
                        view! { <span class="status-badge">{status.label()}</span> }
                    })}
                </div>
                <div class="modal-header">
                    <div>
                        <span class="kicker">{project.category_label()}</span>
                        <h3 class="modal-title">{project.title.clone()}</h3>
                        <p class="muted">{project.location.clone()} " · " {year}</p>
                    </div>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                {project.description.clone().map(|description| {
                    view! { <p class="modal-description">{description}</p> }
                })}
                {project.square_footage.clone().map(|footage| {
                    view! {
                        <div class="modal-stat modal-stat-wide">
                            <span class="modal-stat-label">"Scale"</span>
                            <span class="modal-stat-value">{footage}</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (projects, set_projects) = signal(fallback_projects());
    let (category, set_category) = signal("all".to_string());
    let selected: RwSignal<Option<ProjectRecord>> = RwSignal::new(None);

    leptos::task::spawn_local(async move {
        match ContentStore::new().projects().await {
            Ok(records) if !records.is_empty() => set_projects.set(records),
            Ok(_) => {}
            Err(err) => log::warn!("projects fetch failed: {err}"),
        }
    });

    let filtered = move || {
        let selected = category.get();
        projects.with(|records| {
            records
                .iter()
                .filter(|p| selected == "all" || p.category.as_deref() == Some(selected.as_str()))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Navbar/>
        <main>
            <header class="page-header">
                <div class="section-inner">
                    <span class="kicker">"Portfolio"</span>
                    <h1 class="section-title">"Our " <em>"projects"</em></h1>
                    <p class="muted">
                        "A decade of residential, commercial, and hospitality work across the \
                         country."
                    </p>
                </div>
            </header>

            <section class="section section-light">
                <div class="section-inner">
                    <div class="filter-row">
                        {CATEGORIES
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <button
                                        class="chip"
                                        class:active=move || category.get() == value
                                        on:click=move |_| set_category.set(value.to_string())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="project-grid">
                        <For
                            each=filtered
                            key=|project| project.id.clone()
                            children=move |project: ProjectRecord| {
                                let image = project.image_url.clone().unwrap_or_default();
                                let year = project.year.clone().unwrap_or_default();
                                let footage = project.square_footage.clone();
                                let open_project = project.clone();
                                view! {
                                    <div
                                        class="project-card project-card-clickable"
                                        on:click=move |_| {
                                            selected.set(Some(open_project.clone()))
                                        }
                                    >
                                        <div class="project-card-media">
                                            <img src=image alt=project.title.clone()/>
                                            {project.status.map(|status| {
                                                view! {
                                                    <span class="status-badge">
                                                        {status.label()}
                                                    </span>
                                                }
                                            })}
                                        </div>
                                        <div class="project-card-body">
                                            <span class="kicker">
                                                {project.category_label()}
                                            </span>
                                            <h3>{project.title.clone()}</h3>
                                            <p class="muted">
                                                {project.location.clone()} " · " {year}
                                            </p>
                                            {footage.map(|f| {
                                                view! { <p class="muted-small">{f}</p> }
                                            })}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </section>
        </main>

        {move || {
            selected.get().map(|project| {
                view! {
                    <ProjectDetailModal
                        project=project
                        on_close=Callback::new(move |()| selected.set(None))
                    />
                }
            })
        }}

        <FooterSection/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_projects_carry_detail_fields() {
        // The detail overlay renders description and square footage; the
        // built-in records must provide both so it is never empty.
        let projects = fallback_projects();
        assert_eq!(projects.len(), 6);
        for project in &projects {
            assert!(project.description.is_some(), "{} lacks description", project.title);
            assert!(
                project.square_footage.is_some(),
                "{} lacks square footage",
                project.title
            );
            assert!(project.status.is_some(), "{} lacks status", project.title);
        }
    }

    #[test]
    fn fallback_projects_cover_every_filter_category() {
        let projects = fallback_projects();
        for (value, _) in CATEGORIES.iter().skip(1) {
            assert!(
                projects.iter().any(|p| p.category.as_deref() == Some(*value)),
                "no fallback project in category {value}"
            );
        }
    }
}
