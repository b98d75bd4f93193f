//! Investment wizard domain: intent, gateway abstraction, state machine.
//!
//! Kept free of Leptos so the whole flow can be exercised in native tests
//! with a mock wallet gateway. The `InvestModal` component is the only
//! consumer.

pub mod gateway;
pub mod intent;
pub mod wizard;

pub use gateway::{drive_connect, drive_detect, drive_submit, WalletGateway};
pub use intent::{InvestmentIntent, PaymentCurrency};
pub use wizard::{InvestWizard, TransactionReceipt, TransferRequest, WizardEvent, WizardStep};
