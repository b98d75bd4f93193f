//! Wallet connect button for the invest portal navigation.
//!
//! Detects an already-authorized MetaMask session on mount, prompts for one
//! on click, and shows the truncated address plus balance once connected.

use leptos::prelude::*;

use shared::utils::truncate_address;

use crate::invest::WalletGateway;
use crate::services::ethereum::EthereumWallet;
use crate::state::wallet::{use_wallet_context, WalletSession};

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet = use_wallet_context();
    let (menu_open, set_menu_open) = signal(false);

    // Silent session pickup; never prompts.
    leptos::task::spawn_local(async move {
        let gateway = EthereumWallet::default();
        if let Some(address) = gateway.authorized_address().await {
            let balance = gateway.balance_of(&address).await;
            wallet.set_connected(address, Some(balance));
        }
    });

    let connect = move |_| {
        if matches!(wallet.session.get_untracked(), WalletSession::Connecting) {
            return;
        }
        wallet.set_connecting();
        leptos::task::spawn_local(async move {
            let gateway = EthereumWallet::default();
            match gateway.request_connection().await {
                Ok(address) => {
                    let balance = gateway.balance_of(&address).await;
                    wallet.set_connected(address, Some(balance));
                }
                Err(err) => {
                    log::warn!("wallet connect declined: {err}");
                    wallet.disconnect();
                }
            }
        });
    };

    view! {
        {move || match wallet.session.get() {
            WalletSession::Disconnected => view! {
                <button class="btn btn-wallet" on:click=connect>
                    "Connect Wallet"
                </button>
            }
            .into_any(),
            WalletSession::Connecting => view! {
                <button class="btn btn-wallet" disabled=true>
                    "Connecting…"
                </button>
            }
            .into_any(),
            WalletSession::Connected { address, balance } => {
                let short = truncate_address(&address);
                view! {
                    <div class="wallet-chip-wrap">
                        <button
                            class="wallet-chip"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="wallet-dot"></span>
                            <span class="wallet-address">{short}</span>
                            {balance.map(|b| view! {
                                <span class="wallet-balance">{b} " ETH"</span>
                            })}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="wallet-menu">
                                <button
                                    class="wallet-menu-item"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        wallet.disconnect();
                                    }
                                >
                                    "Disconnect"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
