//! EIP-1193 wallet provider interop via wasm-bindgen.
//!
//! This module is the only place that talks to the injected
//! `window.ethereum` object (MetaMask and compatible extensions). Every
//! wallet prompt the user sees — account authorization, transaction
//! signing — originates from one of the calls below.

use wasm_bindgen::prelude::*;

use thiserror::Error;

use crate::invest::gateway::WalletGateway;
use crate::utils::constants::RECEIPT_POLL_MS;

/// Wallet failure taxonomy surfaced to the invest wizard. Messages are shown
/// to the user as-is; transaction failures carry the provider's reason
/// verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("MetaMask is not installed. Please install it from metamask.io")]
    ProviderMissing,
    #[error("Wallet connection request was declined")]
    UserRejected,
    #[error("{0}")]
    TransactionRejected(String),
    #[error("{0}")]
    TransactionFailed(String),
}

// ============================================================================
// PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined';
}

export async function ethereumAuthorizedAccounts() {
    if (!window.ethereum) return [];
    return await window.ethereum.request({ method: 'eth_accounts' });
}

export async function ethereumRequestAccounts() {
    return await window.ethereum.request({ method: 'eth_requestAccounts' });
}

export async function ethereumGetBalance(address) {
    return await window.ethereum.request({
        method: 'eth_getBalance',
        params: [address, 'latest'],
    });
}

export async function ethereumSendTransfer(from, to, valueWeiHex, pollMs) {
    const hash = await window.ethereum.request({
        method: 'eth_sendTransaction',
        params: [{ from: from, to: to, value: valueWeiHex }],
    });
    // Wait for network inclusion before reporting success.
    for (;;) {
        const receipt = await window.ethereum.request({
            method: 'eth_getTransactionReceipt',
            params: [hash],
        });
        if (receipt) {
            if (receipt.status === '0x0') {
                throw new Error('Transaction reverted on-chain');
            }
            return hash;
        }
        await new Promise(resolve => setTimeout(resolve, pollMs));
    }
}
")]
extern "C" {
    /// Whether a wallet extension has injected a provider.
    fn hasEthereumProvider() -> bool;

    /// Already-authorized accounts, without prompting.
    #[wasm_bindgen(catch)]
    async fn ethereumAuthorizedAccounts() -> Result<JsValue, JsValue>;

    /// Prompt the wallet to authorize an account.
    #[wasm_bindgen(catch)]
    async fn ethereumRequestAccounts() -> Result<JsValue, JsValue>;

    /// Balance in wei as a hex quantity string.
    #[wasm_bindgen(catch)]
    async fn ethereumGetBalance(address: &str) -> Result<JsValue, JsValue>;

    /// Sign, broadcast, and wait for inclusion of a native transfer.
    #[wasm_bindgen(catch)]
    async fn ethereumSendTransfer(
        from: &str,
        to: &str,
        value_wei_hex: &str,
        poll_ms: u32,
    ) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET ADAPTER
// ============================================================================

/// The browser-injected wallet, as seen by the rest of the app.
#[derive(Clone, Copy, Default)]
pub struct EthereumWallet;

impl WalletGateway for EthereumWallet {
    async fn authorized_address(&self) -> Option<String> {
        if !hasEthereumProvider() {
            return None;
        }
        let accounts = ethereumAuthorizedAccounts().await.ok()?;
        first_account(accounts)
    }

    async fn request_connection(&self) -> Result<String, WalletError> {
        if !hasEthereumProvider() {
            return Err(WalletError::ProviderMissing);
        }
        // Any provider rejection of eth_requestAccounts means the human (or
        // the wallet on their behalf) declined authorization.
        let accounts = ethereumRequestAccounts()
            .await
            .map_err(|_| WalletError::UserRejected)?;
        first_account(accounts).ok_or(WalletError::UserRejected)
    }

    async fn balance_of(&self, address: &str) -> String {
        if !hasEthereumProvider() {
            return "0".to_string();
        }
        match ethereumGetBalance(address).await {
            Ok(wei) => wei
                .as_string()
                .map(|hex| wei_hex_to_eth(&hex))
                .unwrap_or_else(|| "0".to_string()),
            Err(err) => {
                log::warn!("balance read failed: {}", provider_error_message(&err));
                "0".to_string()
            }
        }
    }

    async fn submit_transfer(&self, to: &str, eth_amount: &str) -> Result<String, WalletError> {
        if !hasEthereumProvider() {
            return Err(WalletError::ProviderMissing);
        }
        let from = self
            .authorized_address()
            .await
            .ok_or_else(|| WalletError::TransactionFailed("No authorized wallet account".into()))?;
        let value = eth_to_wei_hex(eth_amount)?;

        log::info!("submitting transfer of {eth_amount} ETH to {to}");
        match ethereumSendTransfer(&from, to, &value, RECEIPT_POLL_MS).await {
            Ok(hash) => hash.as_string().ok_or_else(|| {
                WalletError::TransactionFailed("Provider returned a non-string hash".into())
            }),
            Err(err) => {
                let message = provider_error_message(&err);
                // EIP-1193 code 4001: the user declined to sign.
                if provider_error_code(&err) == Some(4001) {
                    Err(WalletError::TransactionRejected(message))
                } else {
                    Err(WalletError::TransactionFailed(message))
                }
            }
        }
    }
}

fn first_account(accounts: JsValue) -> Option<String> {
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).ok()?;
    accounts.into_iter().next()
}

fn provider_error_code(err: &JsValue) -> Option<i64> {
    js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
}

fn provider_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

// ============================================================================
// UNIT CONVERSIONS
// ============================================================================

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Parse a decimal ETH amount ("0.312500") into a wei hex quantity
/// ("0x4563918244f40000" for 5 ETH).
pub fn eth_to_wei_hex(amount: &str) -> Result<String, WalletError> {
    let amount = amount.trim();
    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(WalletError::TransactionFailed(format!(
            "Invalid ETH amount: {amount:?}"
        )));
    }
    if frac.len() > 18 {
        return Err(WalletError::TransactionFailed(format!(
            "ETH amount has more than 18 decimal places: {amount:?}"
        )));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| {
            WalletError::TransactionFailed(format!("Invalid ETH amount: {amount:?}"))
        })?
    };
    let frac_wei: u128 = if frac.is_empty() {
        0
    } else {
        let parsed: u128 = frac.parse().map_err(|_| {
            WalletError::TransactionFailed(format!("Invalid ETH amount: {amount:?}"))
        })?;
        parsed * 10u128.pow(18 - frac.len() as u32)
    };

    let wei = whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| {
            WalletError::TransactionFailed(format!("ETH amount out of range: {amount:?}"))
        })?;
    Ok(format!("{wei:#x}"))
}

/// Render a wei hex quantity as an ETH decimal string with 4 places,
/// truncating toward zero. Unparseable input renders as "0".
pub fn wei_hex_to_eth(hex: &str) -> String {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    let Ok(wei) = u128::from_str_radix(digits, 16) else {
        return "0".to_string();
    };
    let whole = wei / WEI_PER_ETH;
    let frac = (wei % WEI_PER_ETH) / (WEI_PER_ETH / 10_000);
    format!("{whole}.{frac:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eth_to_wei_round_numbers() {
        assert_eq!(eth_to_wei_hex("1").unwrap(), "0xde0b6b3a7640000");
        assert_eq!(eth_to_wei_hex("0.312500").unwrap(), "0x4563918244f4000");
        assert_eq!(eth_to_wei_hex("2.5").unwrap(), "0x22b1c8c1227a0000");
        assert_eq!(eth_to_wei_hex(".5").unwrap(), "0x6f05b59d3b20000");
    }

    #[test]
    fn eth_to_wei_rejects_garbage() {
        assert!(eth_to_wei_hex("").is_err());
        assert!(eth_to_wei_hex(".").is_err());
        assert!(eth_to_wei_hex("1.2.3").is_err());
        assert!(eth_to_wei_hex("abc").is_err());
        assert!(eth_to_wei_hex("1.0000000000000000001").is_err());
    }

    #[test]
    fn wei_hex_to_eth_formats_four_places() {
        assert_eq!(wei_hex_to_eth("0x22b1c8c1227a0000"), "2.5000");
        assert_eq!(wei_hex_to_eth("0xde0b6b3a7640000"), "1.0000");
        assert_eq!(wei_hex_to_eth("0x0"), "0.0000");
        // Truncation, not rounding.
        assert_eq!(wei_hex_to_eth("0x4563918244f4000"), "0.3125");
    }

    #[test]
    fn wei_hex_to_eth_survives_garbage() {
        assert_eq!(wei_hex_to_eth("not-hex"), "0");
        assert_eq!(wei_hex_to_eth(""), "0");
    }

    #[test]
    fn wei_round_trip_at_display_precision() {
        let hex = eth_to_wei_hex("0.3125").unwrap();
        assert_eq!(wei_hex_to_eth(&hex), "0.3125");
    }
}
