//! Wallet session state, shared through a Leptos context.
//!
//! Nothing beyond what the wallet extension itself remembers survives a
//! reload; "disconnect" only forgets the session on our side.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum WalletSession {
    Disconnected,
    Connecting,
    Connected {
        address: String,
        balance: Option<String>,
    },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn balance(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { balance, .. } => balance.as_deref(),
            _ => None,
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<WalletSession>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(WalletSession::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|session| session.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.session
            .with(|session| session.address().map(str::to_string))
    }

    pub fn set_connecting(&self) {
        self.session.set(WalletSession::Connecting);
    }

    pub fn set_connected(&self, address: String, balance: Option<String>) {
        self.session.set(WalletSession::Connected { address, balance });
    }

    pub fn disconnect(&self) {
        self.session.set(WalletSession::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
