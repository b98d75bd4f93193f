//! Application constants

/// External content store (entity API) base URL.
pub const CONTENT_API_BASE: &str = "https://content.lotusbrothers.com/api";

/// Escrow wallet that receives crypto investments.
pub const ESCROW_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e";

/// Price of one fractional share, whole USD.
pub const SHARE_PRICE_USD: u64 = 1_000;

/// Simulated ETH price in USD. Fixed at build time, so the conversion the
/// user sees is deliberately stale rather than a live quote.
pub const ETH_PRICE_USD: u64 = 3_200;

/// Block-explorer link prefix for submitted transactions.
pub const EXPLORER_TX_BASE: &str = "https://etherscan.io/tx/";

/// Quick-pick share counts on the amount step.
pub const QUICK_PICK_SHARES: &[u32] = &[1, 2, 5, 10];

/// Receipt polling interval while waiting for transaction inclusion.
pub const RECEIPT_POLL_MS: u32 = 2_000;
