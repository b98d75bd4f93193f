//! Investment wizard modal.
//!
//! The modal owns one [`InvestWizard`] in an `RwSignal` and translates DOM
//! events into [`WizardEvent`]s. Wallet calls are claimed through
//! `begin_connect` / `begin_submit` first, then run in `spawn_local` against
//! the injected provider, and their results are fed back with `apply`, so
//! every rapid-click and stale-result case is handled by the machine, not by
//! the view.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use shared::dto::content::ProjectRecord;
use shared::utils::truncate_address;

use crate::invest::{
    drive_connect, drive_detect, drive_submit, InvestWizard, PaymentCurrency, WizardEvent,
    WizardStep,
};
use crate::services::ethereum::EthereumWallet;
use crate::utils::constants::{ETH_PRICE_USD, QUICK_PICK_SHARES};
use crate::utils::format::format_usd;

const STEP_LABELS: [&str; 4] = ["Connect Wallet", "Select Amount", "Review", "Confirm"];

#[component]
pub fn InvestModal(project: ProjectRecord, on_close: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(InvestWizard::new(&project.id));

    // Silent session pickup; the machine ignores the result if the user
    // beat it to an explicit connect.
    leptos::task::spawn_local(async move {
        let event = drive_detect(&EthereumWallet::default()).await;
        wizard.update(|w| w.apply(event));
    });

    let emit = move |event: WizardEvent| wizard.update(|w| w.apply(event));

    let connect = move |_| {
        let claimed = wizard.try_update(|w| w.begin_connect()).unwrap_or(false);
        if claimed {
            leptos::task::spawn_local(async move {
                let event = drive_connect(&EthereumWallet::default()).await;
                wizard.update(|w| w.apply(event));
            });
        }
    };

    let submit = move |_| {
        let transfer = wizard.try_update(|w| w.begin_submit()).flatten();
        if let Some(transfer) = transfer {
            leptos::task::spawn_local(async move {
                let event = drive_submit(&EthereumWallet::default(), transfer).await;
                wizard.update(|w| w.apply(event));
            });
        }
    };

    let project_title = project.title.clone();
    let project_location = project.location.clone();
    let stat_raise = project.raise.clone().unwrap_or_else(|| "—".into());
    let stat_roi = project
        .roi
        .map(|roi| format!("{roi}%"))
        .unwrap_or_else(|| "—".into());
    let stat_funded = project
        .raise_pct
        .map(|pct| format!("{pct}%"))
        .unwrap_or_else(|| "—".into());
    let stat_hold = project.hold_period.clone().unwrap_or_else(|| "—".into());

    let step = move || wizard.with(|w| w.step());
    let loading = move || wizard.with(|w| w.is_loading());
    let shares_label = move || wizard.with(|w| w.intent().shares_label());
    let total_usd = move || wizard.with(|w| format_usd(w.intent().total_usd()));
    let total_eth = move || wizard.with(|w| w.intent().total_eth());
    let currency = move || wizard.with(|w| w.intent().currency);

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{project_title.clone()}</h3>
                        <p class="muted">{project_location.clone()}</p>
                    </div>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="modal-stats">
                    <div class="modal-stat">
                        <span class="modal-stat-label">"Raise"</span>
                        <span class="modal-stat-value">{stat_raise}</span>
                    </div>
                    <div class="modal-stat">
                        <span class="modal-stat-label">"Target IRR"</span>
                        <span class="modal-stat-value">{stat_roi}</span>
                    </div>
                    <div class="modal-stat">
                        <span class="modal-stat-label">"Funded"</span>
                        <span class="modal-stat-value">{stat_funded}</span>
                    </div>
                    <div class="modal-stat">
                        <span class="modal-stat-label">"Hold"</span>
                        <span class="modal-stat-value">{stat_hold}</span>
                    </div>
                </div>

                // Step indicator; hidden on the terminal steps.
                {move || {
                    step().indicator_index().map(|active| {
                        view! {
                            <div class="step-indicator">
                                {STEP_LABELS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, label)| {
                                        view! {
                                            <div
                                                class="step-indicator-item"
                                                class:done=move || i < active
                                                class:active=move || i == active
                                            >
                                                <span class="step-dot">{i + 1}</span>
                                                <span class="step-label">{*label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                }}

                {move || match step() {
                    WizardStep::Wallet => view! {
                        <div class="wizard-step">
                            <p class="wizard-lead">
                                "Connect your wallet to reserve shares in this raise."
                            </p>
                            {move || {
                                wizard.with(|w| w.last_error().map(str::to_string)).map(|err| {
                                    view! { <p class="wizard-error">{err}</p> }
                                })
                            }}
                            <button
                                class="btn btn-primary btn-wide"
                                disabled=loading
                                on:click=connect
                            >
                                {move || if loading() {
                                    "Waiting for wallet…"
                                } else {
                                    "Connect MetaMask"
                                }}
                            </button>
                        </div>
                    }
                    .into_any(),

                    WizardStep::Amount => view! {
                        <div class="wizard-step">
                            {move || {
                                wizard.with(|w| {
                                    w.address().map(|address| {
                                        let short = truncate_address(address);
                                        let balance =
                                            w.balance().unwrap_or("0").to_string();
                                        view! {
                                            <p class="wallet-line">
                                                <span class="wallet-dot"></span>
                                                {short} " · " {balance} " ETH"
                                            </p>
                                        }
                                    })
                                })
                            }}

                            <div class="share-stepper">
                                <button
                                    class="stepper-btn"
                                    on:click=move |_| emit(WizardEvent::SharesDecremented)
                                >
                                    "−"
                                </button>
                                <input
                                    class="share-input"
                                    type="number"
                                    step="0.25"
                                    min="0.25"
                                    prop:value=shares_label
                                    on:change=move |ev| {
                                        if let Some(input) = ev
                                            .target()
                                            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                                        {
                                            emit(WizardEvent::SharesInput(input.value()));
                                        }
                                    }
                                />
                                <button
                                    class="stepper-btn"
                                    on:click=move |_| emit(WizardEvent::SharesIncremented)
                                >
                                    "+"
                                </button>
                            </div>
                            <p class="muted-small">"shares · $1,000 each, 0.25 minimum"</p>

                            <div class="quick-picks">
                                {QUICK_PICK_SHARES
                                    .iter()
                                    .map(|&n| {
                                        view! {
                                            <button
                                                class="chip"
                                                on:click=move |_| {
                                                    emit(WizardEvent::SharesPicked(n))
                                                }
                                            >
                                                {n} " shares"
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="currency-row">
                                {PaymentCurrency::ALL
                                    .iter()
                                    .map(|&c| {
                                        view! {
                                            <button
                                                class="chip"
                                                class:active=move || currency() == c
                                                on:click=move |_| {
                                                    emit(WizardEvent::CurrencySelected(c))
                                                }
                                            >
                                                {c.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <Show when=move || currency() != PaymentCurrency::Eth>
                                <p class="muted-small">
                                    "Direct " {move || currency().label()}
                                    " settlement is coming soon — processed as ETH equivalent."
                                </p>
                            </Show>

                            <div class="total-box">
                                <div class="total-line">
                                    <span>"Total"</span>
                                    <span class="total-usd">{total_usd}</span>
                                </div>
                                <div class="total-line muted-small">
                                    <span>"≈ " {total_eth} " ETH"</span>
                                    <span>{format!("@ ${ETH_PRICE_USD}/ETH")}</span>
                                </div>
                            </div>

                            <button
                                class="btn btn-primary btn-wide"
                                on:click=move |_| emit(WizardEvent::ProceedToReview)
                            >
                                "Review Investment"
                            </button>
                        </div>
                    }
                    .into_any(),

                    WizardStep::Review => view! {
                        <div class="wizard-step">
                            <div class="review-grid">
                                <div class="metric-pill">
                                    <span class="metric-label">"Shares"</span>
                                    <span class="metric-value">{shares_label}</span>
                                </div>
                                <div class="metric-pill">
                                    <span class="metric-label">"Total"</span>
                                    <span class="metric-value">{total_usd}</span>
                                </div>
                                <div class="metric-pill">
                                    <span class="metric-label">"Currency"</span>
                                    <span class="metric-value">
                                        {move || currency().label()}
                                    </span>
                                </div>
                                <div class="metric-pill">
                                    <span class="metric-label">"Settlement"</span>
                                    <span class="metric-value">{total_eth} " ETH"</span>
                                </div>
                            </div>
                            <p class="muted-small">
                                "Funds are transferred to the Lotus Brothers escrow wallet and \
                                 allocated to this raise on confirmation."
                            </p>
                            <div class="wizard-actions">
                                <button
                                    class="btn btn-ghost"
                                    on:click=move |_| emit(WizardEvent::BackToAmount)
                                >
                                    "Back"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| emit(WizardEvent::ProceedToConfirm)
                                >
                                    "Continue"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),

                    WizardStep::Confirm => view! {
                        <div class="wizard-step">
                            <div class="confirm-box">
                                <div class="total-line">
                                    <span>"You send"</span>
                                    <span class="total-usd">{total_eth} " ETH"</span>
                                </div>
                                <div class="total-line muted-small">
                                    <span>{shares_label} " shares"</span>
                                    <span>{total_usd}</span>
                                </div>
                            </div>
                            <p class="muted-small">
                                "Your wallet will ask you to approve the transfer. We wait for \
                                 the transaction to confirm before reserving your shares."
                            </p>
                            <div class="wizard-actions">
                                <button
                                    class="btn btn-ghost"
                                    disabled=loading
                                    on:click=move |_| emit(WizardEvent::BackToReview)
                                >
                                    "Back"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    disabled=loading
                                    on:click=submit
                                >
                                    {move || if loading() {
                                        "Confirm in wallet…"
                                    } else {
                                        "Confirm & Send"
                                    }}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),

                    WizardStep::Success => view! {
                        <div class="wizard-step wizard-terminal">
                            <div class="terminal-icon terminal-icon-ok">"✓"</div>
                            <h3>"Investment submitted"</h3>
                            <p class="muted">
                                {shares_label} " shares · " {total_usd}
                            </p>
                            {move || {
                                wizard.with(|w| w.receipt().cloned()).map(|receipt| {
                                    view! {
                                        <a
                                            class="link-more"
                                            href=receipt.explorer_url()
                                            target="_blank"
                                            rel="noopener"
                                        >
                                            "View on Etherscan →"
                                        </a>
                                    }
                                })
                            }}
                            <button
                                class="btn btn-primary btn-wide"
                                on:click=move |_| on_close.run(())
                            >
                                "Done"
                            </button>
                        </div>
                    }
                    .into_any(),

                    WizardStep::Error => view! {
                        <div class="wizard-step wizard-terminal">
                            <div class="terminal-icon terminal-icon-err">"!"</div>
                            <h3>"Transaction failed"</h3>
                            <p class="wizard-error">
                                {move || {
                                    wizard.with(|w| {
                                        w.last_error().unwrap_or("Unknown error").to_string()
                                    })
                                }}
                            </p>
                            <div class="wizard-actions">
                                <button
                                    class="btn btn-ghost"
                                    on:click=move |_| on_close.run(())
                                >
                                    "Dismiss"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| emit(WizardEvent::Retry)
                                >
                                    "Try Again"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
