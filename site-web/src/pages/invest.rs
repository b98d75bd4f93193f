//! Invest portal: open raises, fund-level stats, and the investment wizard.

use leptos::prelude::*;

use shared::dto::content::ProjectRecord;

use crate::components::{FooterSection, InvestModal, WalletButton};
use crate::services::content::ContentStore;
use crate::utils::format::format_usd_compact;
use crate::utils::url::get_query_param;

fn fallback_raises() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "1".into(),
            title: "The Meridian".into(),
            location: "Dallas, TX".into(),
            asset_type: Some("Residential Tower".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80".into(),
            ),
            raise: Some("$18.5M".into()),
            roi: Some(24),
            raise_pct: Some(82),
            hold_period: Some("5 yrs".into()),
            min_invest: Some("$250".into()),
            raised_usd: Some(15_170_000),
            total_usd: Some(18_500_000),
            ..Default::default()
        },
        ProjectRecord {
            id: "2".into(),
            title: "Lotus Villas".into(),
            location: "Austin, TX".into(),
            asset_type: Some("Villa Community".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&q=80".into(),
            ),
            raise: Some("$12.4M".into()),
            roi: Some(21),
            raise_pct: Some(100),
            hold_period: Some("3 yrs".into()),
            min_invest: Some("$250".into()),
            raised_usd: Some(12_400_000),
            total_usd: Some(12_400_000),
            ..Default::default()
        },
        ProjectRecord {
            id: "3".into(),
            title: "Biscayne Residences".into(),
            location: "Miami, FL".into(),
            asset_type: Some("Waterfront Condos".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800&q=80".into(),
            ),
            raise: Some("$17.3M".into()),
            roi: Some(22),
            raise_pct: Some(66),
            hold_period: Some("5 yrs".into()),
            min_invest: Some("$250".into()),
            raised_usd: Some(11_418_000),
            total_usd: Some(17_300_000),
            ..Default::default()
        },
        ProjectRecord {
            id: "4".into(),
            title: "The Palms Estate".into(),
            location: "Miami, FL".into(),
            asset_type: Some("Luxury Estate".into()),
            image_url: Some(
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800&q=80".into(),
            ),
            raise: Some("$22.1M".into()),
            roi: Some(26),
            raise_pct: Some(45),
            hold_period: Some("6 yrs".into()),
            min_invest: Some("$250".into()),
            raised_usd: Some(9_945_000),
            total_usd: Some(22_100_000),
            ..Default::default()
        },
    ]
}

/// Funding progress bar for a raise card.
#[component]
fn FundRaiseBar(raised: u64, total: u64, pct: u8) -> impl IntoView {
    view! {
        <div class="raise-bar">
            <div class="raise-bar-track">
                <div class="raise-bar-fill" style:width=format!("{pct}%")></div>
            </div>
            <div class="raise-bar-labels">
                <span>{format_usd_compact(raised)} " raised"</span>
                <span>"of " {format_usd_compact(total)}</span>
            </div>
        </div>
    }
}

#[component]
pub fn InvestPage() -> impl IntoView {
    let (raises, set_raises) = signal(fallback_raises());
    let selected: RwSignal<Option<ProjectRecord>> = RwSignal::new(None);

    // ?project=<id> deep links straight into a raise's wizard.
    let preselect = get_query_param("project");
    leptos::task::spawn_local(async move {
        match ContentStore::new().projects().await {
            Ok(records) if !records.is_empty() => set_raises.set(records),
            Ok(_) => {}
            Err(err) => log::warn!("raises fetch failed: {err}"),
        }
        if let Some(id) = preselect {
            let hit = raises.with_untracked(|records| {
                records.iter().find(|p| p.id == id).cloned()
            });
            if let Some(project) = hit {
                selected.set(Some(project));
            }
        }
    });

    let fund_raised = move || {
        raises.with(|records| records.iter().filter_map(|p| p.raised_usd).sum::<u64>())
    };
    let avg_irr = move || {
        raises.with(|records| {
            let rois: Vec<u32> = records.iter().filter_map(|p| p.roi).collect();
            if rois.is_empty() {
                0
            } else {
                rois.iter().sum::<u32>() / rois.len() as u32
            }
        })
    };
    let raise_count = move || raises.with(Vec::len);

    view! {
        <div class="invest-portal">
            <nav class="navbar navbar-dark">
                <div class="navbar-inner">
                    <a href="/" class="brand">
                        <span class="brand-mark">"LB"</span>
                        <span class="brand-name">"Lotus Brothers"</span>
                        <span class="brand-tag">"Invest"</span>
                    </a>
                    <WalletButton/>
                </div>
            </nav>

            <header class="page-header page-header-invest">
                <div class="section-inner">
                    <span class="kicker">"Tokenized Real Estate"</span>
                    <h1 class="section-title">
                        "Invest in Real Estate with " <em>"Crypto."</em>
                    </h1>
                    <p class="muted">
                        "Fractional shares in institutional-grade developments, settled on \
                         Ethereum. From $250 per quarter share."
                    </p>
                </div>
            </header>

            <div class="section-inner fund-stats">
                <div class="fund-stat">
                    <span class="fund-stat-value">
                        {move || format_usd_compact(fund_raised())}
                    </span>
                    <span class="fund-stat-label">"Total Raised"</span>
                </div>
                <div class="fund-stat">
                    <span class="fund-stat-value">{move || format!("{}%", avg_irr())}</span>
                    <span class="fund-stat-label">"Avg Target IRR"</span>
                </div>
                <div class="fund-stat">
                    <span class="fund-stat-value">{raise_count}</span>
                    <span class="fund-stat-label">"Open Raises"</span>
                </div>
                <div class="fund-stat">
                    <span class="fund-stat-value">"Reg D"</span>
                    <span class="fund-stat-label">"506(b) Offering"</span>
                </div>
            </div>

            <section class="section">
                <div class="section-inner">
                    <div class="raise-grid">
                        <For
                            each=move || raises.get()
                            key=|project| project.id.clone()
                            children=move |project: ProjectRecord| {
                                let image = project.image_url.clone().unwrap_or_default();
                                let asset_type = project
                                    .asset_type
                                    .clone()
                                    .unwrap_or_else(|| "Development".into());
                                let roi = project
                                    .roi
                                    .map(|r| format!("{r}%"))
                                    .unwrap_or_else(|| "—".into());
                                let hold = project
                                    .hold_period
                                    .clone()
                                    .unwrap_or_else(|| "—".into());
                                let min = project
                                    .min_invest
                                    .clone()
                                    .unwrap_or_else(|| "$250".into());
                                let bar = match (
                                    project.raised_usd,
                                    project.total_usd,
                                    project.raise_pct,
                                ) {
                                    (Some(raised), Some(total), Some(pct)) => Some(view! {
                                        <FundRaiseBar raised=raised total=total pct=pct/>
                                    }),
                                    _ => None,
                                };
                                let fully_funded = project.raise_pct == Some(100);
                                let open_project = project.clone();
                                view! {
                                    <div class="raise-card">
                                        <div class="raise-card-media">
                                            <img src=image alt=project.title.clone()/>
                                        </div>
                                        <div class="raise-card-body">
                                            <span class="kicker">{asset_type}</span>
                                            <h3>{project.title.clone()}</h3>
                                            <p class="muted">{project.location.clone()}</p>
                                            <div class="raise-terms">
                                                <div class="raise-term">
                                                    <span class="raise-term-label">
                                                        "Target IRR"
                                                    </span>
                                                    <span>{roi}</span>
                                                </div>
                                                <div class="raise-term">
                                                    <span class="raise-term-label">"Hold"</span>
                                                    <span>{hold}</span>
                                                </div>
                                                <div class="raise-term">
                                                    <span class="raise-term-label">"Min"</span>
                                                    <span>{min}</span>
                                                </div>
                                            </div>
                                            {bar}
                                            <button
                                                class="btn btn-primary btn-wide"
                                                disabled=fully_funded
                                                on:click=move |_| {
                                                    selected.set(Some(open_project.clone()))
                                                }
                                            >
                                                {if fully_funded {
                                                    "Fully Funded"
                                                } else {
                                                    "Invest Now"
                                                }}
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </section>

            {move || {
                selected.get().map(|project| {
                    view! {
                        <InvestModal
                            project=project
                            on_close=Callback::new(move |()| selected.set(None))
                        />
                    }
                })
            }}

            <FooterSection/>
        </div>
    }
}
