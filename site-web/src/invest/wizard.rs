//! Linear investment wizard state machine.
//!
//! Steps: `Wallet → Amount → Review → Confirm → Success | Error`. The
//! machine is pure and synchronous: user actions and adapter results enter
//! as [`WizardEvent`]s and `apply` performs the transition. Wallet work is
//! requested through [`InvestWizard::begin_connect`] /
//! [`InvestWizard::begin_submit`], which gate on the in-flight flag, and is
//! settled by feeding the driver's resulting event back in. Events that do
//! not fit the current step are ignored, so a stale adapter result or an
//! out-of-order click cannot corrupt the state.

use crate::utils::constants::{ESCROW_ADDRESS, EXPLORER_TX_BASE};

use super::intent::{InvestmentIntent, PaymentCurrency};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Wallet,
    Amount,
    Review,
    Confirm,
    Success,
    Error,
}

impl WizardStep {
    /// Position in the step indicator; terminal steps render none.
    pub fn indicator_index(&self) -> Option<usize> {
        match self {
            WizardStep::Wallet => Some(0),
            WizardStep::Amount => Some(1),
            WizardStep::Review => Some(2),
            WizardStep::Confirm => Some(3),
            WizardStep::Success | WizardStep::Error => None,
        }
    }
}

/// Everything that can drive a transition: user actions plus settled
/// adapter calls.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardEvent {
    /// Mount-time detection found an authorized account.
    SessionDetected { address: String, balance: String },
    /// Mount-time detection found nothing; stay on the wallet step.
    NoSession,
    ConnectSucceeded { address: String, balance: String },
    ConnectFailed(String),
    SharesInput(String),
    SharesPicked(u32),
    SharesIncremented,
    SharesDecremented,
    CurrencySelected(PaymentCurrency),
    ProceedToReview,
    BackToAmount,
    ProceedToConfirm,
    BackToReview,
    SubmitSucceeded { hash: String },
    SubmitFailed(String),
    Retry,
}

/// The transfer the modal hands to the wallet adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub to: String,
    pub eth_amount: String,
}

/// Proof of a successful submission; only used to render an explorer link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub hash: String,
}

impl TransactionReceipt {
    pub fn explorer_url(&self) -> String {
        format!("{EXPLORER_TX_BASE}{}", self.hash)
    }
}

/// One modal session's worth of wizard state. Owned by a single
/// `InvestModal` instance; nothing here is shared or persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct InvestWizard {
    step: WizardStep,
    intent: InvestmentIntent,
    /// Snapshot taken on leaving the amount step; review, confirm, and any
    /// retry all read this, so a slow wallet prompt cannot race an edit.
    frozen: Option<InvestmentIntent>,
    address: Option<String>,
    balance: Option<String>,
    loading: bool,
    last_error: Option<String>,
    receipt: Option<TransactionReceipt>,
}

impl InvestWizard {
    pub fn new(project_id: &str) -> Self {
        Self {
            step: WizardStep::Wallet,
            intent: InvestmentIntent::new(project_id),
            frozen: None,
            address: None,
            balance: None,
            loading: false,
            last_error: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The intent the current step is showing: the frozen snapshot once the
    /// user has left the amount step, the editable one before that.
    pub fn intent(&self) -> &InvestmentIntent {
        self.frozen.as_ref().unwrap_or(&self.intent)
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn receipt(&self) -> Option<&TransactionReceipt> {
        self.receipt.as_ref()
    }

    /// Claim the in-flight slot for an interactive connect. Returns false
    /// if a call is already running or the wizard is past the wallet step.
    #[must_use]
    pub fn begin_connect(&mut self) -> bool {
        if self.loading || self.step != WizardStep::Wallet {
            return false;
        }
        self.loading = true;
        self.last_error = None;
        true
    }

    /// Claim the in-flight slot for the transfer and return what to submit.
    /// `None` while a submission is already running (the re-entrancy guard)
    /// or outside the confirm step.
    #[must_use]
    pub fn begin_submit(&mut self) -> Option<TransferRequest> {
        if self.loading || self.step != WizardStep::Confirm {
            return None;
        }
        let intent = self.frozen.as_ref()?;
        self.loading = true;
        self.last_error = None;
        Some(TransferRequest {
            to: ESCROW_ADDRESS.to_string(),
            eth_amount: intent.total_eth(),
        })
    }

    pub fn apply(&mut self, event: WizardEvent) {
        use WizardEvent::*;
        use WizardStep::*;

        match event {
            // Silent detection only matters while the wallet step is idle;
            // once the user started an explicit connect, its result wins.
            SessionDetected { address, balance } => {
                if self.step == Wallet && !self.loading {
                    self.address = Some(address);
                    self.balance = Some(balance);
                    self.step = Amount;
                }
            }
            NoSession => {}

            ConnectSucceeded { address, balance } => {
                if self.step == Wallet && self.loading {
                    self.loading = false;
                    self.address = Some(address);
                    self.balance = Some(balance);
                    self.step = Amount;
                }
            }
            ConnectFailed(message) => {
                if self.step == Wallet && self.loading {
                    self.loading = false;
                    self.last_error = Some(message);
                }
            }

            SharesInput(raw) => {
                if self.step == Amount {
                    self.intent.set_shares_input(&raw);
                }
            }
            SharesPicked(shares) => {
                if self.step == Amount {
                    self.intent.set_whole_shares(shares);
                }
            }
            SharesIncremented => {
                if self.step == Amount {
                    self.intent.increment();
                }
            }
            SharesDecremented => {
                if self.step == Amount {
                    self.intent.decrement();
                }
            }
            CurrencySelected(currency) => {
                if self.step == Amount {
                    self.intent.currency = currency;
                }
            }

            ProceedToReview => {
                if self.step == Amount {
                    self.frozen = Some(self.intent.clone());
                    self.step = Review;
                }
            }
            BackToAmount => {
                if self.step == Review {
                    self.frozen = None;
                    self.step = Amount;
                }
            }
            ProceedToConfirm => {
                if self.step == Review {
                    self.step = Confirm;
                }
            }
            BackToReview => {
                if self.step == Confirm && !self.loading {
                    self.step = Review;
                }
            }

            SubmitSucceeded { hash } => {
                if self.step == Confirm && self.loading {
                    self.loading = false;
                    self.receipt = Some(TransactionReceipt { hash });
                    self.step = Success;
                }
            }
            SubmitFailed(message) => {
                if self.step == Confirm && self.loading {
                    self.loading = false;
                    self.last_error = Some(message);
                    self.step = Error;
                }
            }

            Retry => {
                if self.step == Error {
                    self.last_error = None;
                    self.step = Confirm;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::super::gateway::{drive_connect, drive_detect, drive_submit, WalletGateway};
    use super::*;
    use crate::services::ethereum::WalletError;

    /// Scripted wallet used in place of the injected provider.
    struct MockWallet {
        authorized: Option<String>,
        balance: String,
        connect: Result<String, WalletError>,
        submit: Result<String, WalletError>,
        submit_calls: Cell<u32>,
    }

    impl MockWallet {
        fn disconnected() -> Self {
            Self {
                authorized: None,
                balance: "0".into(),
                connect: Err(WalletError::ProviderMissing),
                submit: Err(WalletError::ProviderMissing),
                submit_calls: Cell::new(0),
            }
        }

        fn authorized(address: &str, balance: &str) -> Self {
            Self {
                authorized: Some(address.into()),
                balance: balance.into(),
                connect: Ok(address.into()),
                submit: Ok("0xhash".into()),
                submit_calls: Cell::new(0),
            }
        }
    }

    impl WalletGateway for MockWallet {
        async fn authorized_address(&self) -> Option<String> {
            self.authorized.clone()
        }

        async fn request_connection(&self) -> Result<String, WalletError> {
            self.connect.clone()
        }

        async fn balance_of(&self, _address: &str) -> String {
            self.balance.clone()
        }

        async fn submit_transfer(&self, _to: &str, _amount: &str) -> Result<String, WalletError> {
            self.submit_calls.set(self.submit_calls.get() + 1);
            self.submit.clone()
        }
    }

    fn wizard_at_confirm() -> InvestWizard {
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(WizardEvent::SessionDetected {
            address: "0xABCD000000000000000000000000000000001234".into(),
            balance: "2.5000".into(),
        });
        wizard.apply(WizardEvent::ProceedToReview);
        wizard.apply(WizardEvent::ProceedToConfirm);
        wizard
    }

    #[test]
    fn starts_on_wallet_step() {
        let wizard = InvestWizard::new("p1");
        assert_eq!(wizard.step(), WizardStep::Wallet);
        assert!(wizard.address().is_none());
    }

    #[test]
    fn detected_session_skips_to_amount() {
        // Scenario B: pre-authorized wallet with a balance.
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(WizardEvent::SessionDetected {
            address: "0xABCD000000000000000000000000000000001234".into(),
            balance: "2.5000".into(),
        });
        assert_eq!(wizard.step(), WizardStep::Amount);
        assert_eq!(wizard.balance(), Some("2.5000"));
        assert!(wizard.address().unwrap().starts_with("0xABCD"));
    }

    #[test]
    fn no_session_stays_on_wallet() {
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(WizardEvent::NoSession);
        assert_eq!(wizard.step(), WizardStep::Wallet);
    }

    #[tokio::test]
    async fn connect_without_provider_stays_on_wallet() {
        // Scenario A: no provider, connect fails, error is shown in place.
        let wallet = MockWallet::disconnected();
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(drive_detect(&wallet).await);
        assert_eq!(wizard.step(), WizardStep::Wallet);

        assert!(wizard.begin_connect());
        wizard.apply(drive_connect(&wallet).await);
        assert_eq!(wizard.step(), WizardStep::Wallet);
        assert_eq!(
            wizard.last_error(),
            Some(WalletError::ProviderMissing.to_string().as_str())
        );
    }

    #[tokio::test]
    async fn connect_success_moves_to_amount() {
        let wallet = MockWallet::authorized("0xfeed000000000000000000000000000000000001", "1.0000");
        let mut wizard = InvestWizard::new("p1");
        assert!(wizard.begin_connect());
        assert!(wizard.is_loading());
        // Second click while connecting is refused.
        assert!(!wizard.begin_connect());

        wizard.apply(drive_connect(&wallet).await);
        assert_eq!(wizard.step(), WizardStep::Amount);
        assert!(!wizard.is_loading());
        assert_eq!(wizard.balance(), Some("1.0000"));
    }

    #[test]
    fn edits_only_apply_on_amount_step() {
        let mut wizard = wizard_at_confirm();
        let before = wizard.intent().clone();
        wizard.apply(WizardEvent::SharesIncremented);
        wizard.apply(WizardEvent::SharesInput("9".into()));
        wizard.apply(WizardEvent::CurrencySelected(PaymentCurrency::Btc));
        assert_eq!(wizard.intent(), &before);
    }

    #[test]
    fn review_shows_frozen_intent_and_back_unfreezes() {
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(WizardEvent::SessionDetected {
            address: "0x1".into(),
            balance: "1.0000".into(),
        });
        wizard.apply(WizardEvent::SharesInput("2.5".into()));
        wizard.apply(WizardEvent::ProceedToReview);
        assert_eq!(wizard.intent().total_usd(), 2_500);

        wizard.apply(WizardEvent::BackToAmount);
        wizard.apply(WizardEvent::SharesIncremented);
        assert_eq!(wizard.intent().total_usd(), 2_750);
    }

    #[test]
    fn begin_submit_is_single_flight() {
        let mut wizard = wizard_at_confirm();
        let first = wizard.begin_submit();
        assert!(first.is_some());
        // Rapid repeated confirm clicks: the guard holds until the first
        // submission settles.
        assert!(wizard.begin_submit().is_none());
        assert!(wizard.begin_submit().is_none());

        wizard.apply(WizardEvent::SubmitFailed("boom".into()));
        wizard.apply(WizardEvent::Retry);
        assert!(wizard.begin_submit().is_some());
    }

    #[test]
    fn begin_submit_refused_outside_confirm() {
        let mut wizard = InvestWizard::new("p1");
        assert!(wizard.begin_submit().is_none());
        wizard.apply(WizardEvent::SessionDetected {
            address: "0x1".into(),
            balance: "1.0000".into(),
        });
        assert!(wizard.begin_submit().is_none());
    }

    #[tokio::test]
    async fn successful_submit_reaches_success_with_receipt() {
        // Scenario D: the adapter resolves with a hash.
        let mut wallet =
            MockWallet::authorized("0xfeed000000000000000000000000000000000001", "2.5000");
        wallet.submit = Ok("0xdeadbeef".into());

        let mut wizard = wizard_at_confirm();
        let transfer = wizard.begin_submit().expect("submit slot");
        assert_eq!(transfer.eth_amount, "0.312500");
        assert_eq!(transfer.to, crate::utils::constants::ESCROW_ADDRESS);

        wizard.apply(drive_submit(&wallet, transfer).await);
        assert_eq!(wizard.step(), WizardStep::Success);
        let receipt = wizard.receipt().expect("receipt");
        assert_eq!(receipt.hash, "0xdeadbeef");
        assert!(receipt.explorer_url().ends_with("/tx/0xdeadbeef"));
        assert_eq!(wallet.submit_calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_submit_reaches_error_and_retry_resubmits_same_intent() {
        // Scenario E: rejection surfaces verbatim; retry reuses the frozen
        // intent.
        let mut wallet =
            MockWallet::authorized("0xfeed000000000000000000000000000000000001", "0.1000");
        wallet.submit = Err(WalletError::TransactionFailed("insufficient funds".into()));

        let mut wizard = wizard_at_confirm();
        let first = wizard.begin_submit().expect("submit slot");
        wizard.apply(drive_submit(&wallet, first.clone()).await);
        assert_eq!(wizard.step(), WizardStep::Error);
        assert_eq!(wizard.last_error(), Some("insufficient funds"));

        wizard.apply(WizardEvent::Retry);
        assert_eq!(wizard.step(), WizardStep::Confirm);
        let second = wizard.begin_submit().expect("submit slot after retry");
        assert_eq!(second, first);
        wizard.apply(drive_submit(&wallet, second).await);
        assert_eq!(wallet.submit_calls.get(), 2);
    }

    #[test]
    fn stale_adapter_results_are_ignored() {
        // A submit result arriving without a claimed slot does nothing.
        let mut wizard = wizard_at_confirm();
        wizard.apply(WizardEvent::SubmitSucceeded { hash: "0xstale".into() });
        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert!(wizard.receipt().is_none());

        // A late detection after the user already connected is ignored too.
        wizard.apply(WizardEvent::SessionDetected {
            address: "0xother".into(),
            balance: "9.0000".into(),
        });
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    #[test]
    fn back_from_confirm_is_blocked_while_submitting() {
        let mut wizard = wizard_at_confirm();
        let _transfer = wizard.begin_submit().expect("submit slot");
        wizard.apply(WizardEvent::BackToReview);
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    #[test]
    fn non_eth_currency_is_kept_as_label_only() {
        let mut wizard = InvestWizard::new("p1");
        wizard.apply(WizardEvent::SessionDetected {
            address: "0x1".into(),
            balance: "1.0000".into(),
        });
        wizard.apply(WizardEvent::CurrencySelected(PaymentCurrency::Usdc));
        wizard.apply(WizardEvent::ProceedToReview);
        wizard.apply(WizardEvent::ProceedToConfirm);
        // Settlement is still the ETH equivalent.
        let transfer = wizard.begin_submit().expect("submit slot");
        assert_eq!(transfer.eth_amount, "0.312500");
        assert_eq!(wizard.intent().currency, PaymentCurrency::Usdc);
    }
}
