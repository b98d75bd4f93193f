//! Gateway between the wizard and the injected wallet provider.
//!
//! The wizard state machine never touches `window.ethereum` directly: the
//! modal runs these drivers in `spawn_local` against the production
//! [`EthereumWallet`](crate::services::ethereum::EthereumWallet) and feeds
//! the resulting [`WizardEvent`] back into the machine. Tests substitute a
//! mock gateway and run the same drivers natively.

use crate::services::ethereum::WalletError;

use super::wizard::{TransferRequest, WizardEvent};

/// The provider operations the invest flow needs.
///
/// All operations may suspend on user interaction with the wallet
/// extension's own UI; none of them are retried automatically.
#[allow(async_fn_in_trait)]
pub trait WalletGateway {
    /// First already-authorized account, without prompting. `None` when no
    /// provider is present or nothing is authorized.
    async fn authorized_address(&self) -> Option<String>;

    /// Prompt the wallet to authorize an account.
    async fn request_connection(&self) -> Result<String, WalletError>;

    /// Native-token balance as a decimal string with 4 places. `"0"` when
    /// the balance cannot be read; never an error.
    async fn balance_of(&self, address: &str) -> String;

    /// Sign and broadcast a native transfer, then wait for inclusion.
    /// Returns the transaction hash.
    async fn submit_transfer(&self, to: &str, eth_amount: &str) -> Result<String, WalletError>;
}

/// Mount-time detection: pick up an already-authorized session silently.
pub async fn drive_detect<G: WalletGateway>(gateway: &G) -> WizardEvent {
    match gateway.authorized_address().await {
        Some(address) => {
            let balance = gateway.balance_of(&address).await;
            WizardEvent::SessionDetected { address, balance }
        }
        None => WizardEvent::NoSession,
    }
}

/// Interactive connect, started only after `InvestWizard::begin_connect`
/// granted the in-flight slot.
pub async fn drive_connect<G: WalletGateway>(gateway: &G) -> WizardEvent {
    match gateway.request_connection().await {
        Ok(address) => {
            let balance = gateway.balance_of(&address).await;
            WizardEvent::ConnectSucceeded { address, balance }
        }
        Err(err) => WizardEvent::ConnectFailed(err.to_string()),
    }
}

/// Submit the frozen transfer. `InvestWizard::begin_submit` guarantees at
/// most one of these is in flight per wizard.
pub async fn drive_submit<G: WalletGateway>(gateway: &G, transfer: TransferRequest) -> WizardEvent {
    match gateway
        .submit_transfer(&transfer.to, &transfer.eth_amount)
        .await
    {
        Ok(hash) => WizardEvent::SubmitSucceeded { hash },
        Err(err) => WizardEvent::SubmitFailed(err.to_string()),
    }
}
