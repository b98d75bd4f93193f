//! A user's intended investment: share count, payment currency, derived
//! totals.
//!
//! Share counts are stored in quarter-share units, so "always a positive
//! multiple of 0.25" holds by construction rather than by floating-point
//! discipline. One share is $1,000, so a quarter share is $250 and every
//! total is exact integer USD.

use crate::utils::constants::{ETH_PRICE_USD, SHARE_PRICE_USD};

/// USD value of one quarter share.
pub const QUARTER_SHARE_USD: u64 = SHARE_PRICE_USD / 4;

/// Currency label the user picked on the amount step.
///
/// Only ETH settlement is implemented; the other labels are accepted and the
/// UI shows a "processed as ETH equivalent" disclaimer instead of pretending
/// to settle multi-asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentCurrency {
    Eth,
    Usdc,
    Btc,
}

impl PaymentCurrency {
    pub const ALL: &'static [PaymentCurrency] =
        &[PaymentCurrency::Eth, PaymentCurrency::Usdc, PaymentCurrency::Btc];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentCurrency::Eth => "ETH",
            PaymentCurrency::Usdc => "USDC",
            PaymentCurrency::Btc => "BTC",
        }
    }
}

/// What the user intends to invest in one project.
///
/// Created when the wizard opens, mutated only on the amount step, and
/// frozen (cloned) the moment the user proceeds to review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestmentIntent {
    pub project_id: String,
    quarter_shares: u32,
    pub currency: PaymentCurrency,
}

impl InvestmentIntent {
    /// One full share in ETH, the defaults the modal opens with.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            quarter_shares: 4,
            currency: PaymentCurrency::Eth,
        }
    }

    /// Share count as a fraction (quarter steps).
    pub fn shares(&self) -> f64 {
        f64::from(self.quarter_shares) / 4.0
    }

    /// Share count for display, without trailing zeros: "1", "1.5", "2.75".
    pub fn shares_label(&self) -> String {
        let whole = self.quarter_shares / 4;
        match self.quarter_shares % 4 {
            0 => whole.to_string(),
            1 => format!("{whole}.25"),
            2 => format!("{whole}.5"),
            _ => format!("{whole}.75"),
        }
    }

    /// Step the count up by a quarter share.
    pub fn increment(&mut self) {
        self.quarter_shares = self.quarter_shares.saturating_add(1);
    }

    /// Step the count down by a quarter share, clamped at the 0.25 floor.
    pub fn decrement(&mut self) {
        if self.quarter_shares > 1 {
            self.quarter_shares -= 1;
        }
    }

    /// Quick-pick a whole number of shares.
    pub fn set_whole_shares(&mut self, shares: u32) {
        self.quarter_shares = shares.saturating_mul(4).max(1);
    }

    /// Coerce free-text input: non-numeric or sub-0.25 values become 0.25,
    /// anything else rounds to the nearest quarter step.
    pub fn set_shares_input(&mut self, raw: &str) {
        let quarters = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| (v * 4.0).round() as i64)
            .unwrap_or(1);
        self.quarter_shares = quarters.clamp(1, i64::from(u32::MAX)) as u32;
    }

    /// Total in whole USD: share count times the $1,000 share price, exact.
    pub fn total_usd(&self) -> u64 {
        u64::from(self.quarter_shares) * QUARTER_SHARE_USD
    }

    /// ETH equivalent of the USD total at the fixed rate, 6 decimal places.
    pub fn total_eth(&self) -> String {
        eth_from_usd(self.total_usd())
    }
}

/// Convert whole USD to an ETH amount string with 6 decimal places.
///
/// Integer micro-ETH arithmetic; the fixed rate divides $250 evenly, so
/// every reachable total is exact. The rate is a compile-time constant and
/// therefore stale relative to the market.
pub fn eth_from_usd(usd: u64) -> String {
    let micro_eth = usd * 1_000_000 / ETH_PRICE_USD;
    format!("{}.{:06}", micro_eth / 1_000_000, micro_eth % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_eth_share() {
        let intent = InvestmentIntent::new("p1");
        assert_eq!(intent.shares(), 1.0);
        assert_eq!(intent.currency, PaymentCurrency::Eth);
        assert_eq!(intent.total_usd(), 1_000);
    }

    #[test]
    fn shares_stay_on_quarter_grid_for_any_input() {
        let inputs = [
            "", "abc", "-3", "0", "0.1", "0.24", "0.25", "0.3", "1.3", "1.4",
            "2.745", "10", "999.99", "NaN", "inf",
        ];
        let mut intent = InvestmentIntent::new("p1");
        for raw in inputs {
            intent.set_shares_input(raw);
            let shares = intent.shares();
            assert!(shares >= 0.25, "floor violated for {raw:?}: {shares}");
            assert_eq!(
                (shares * 4.0).fract(),
                0.0,
                "quarter step violated for {raw:?}: {shares}"
            );
        }
    }

    #[test]
    fn input_coercion_rounds_to_nearest_quarter() {
        let mut intent = InvestmentIntent::new("p1");
        intent.set_shares_input("1.3");
        assert_eq!(intent.shares(), 1.25);
        intent.set_shares_input("1.4");
        assert_eq!(intent.shares(), 1.5);
        intent.set_shares_input("0.1");
        assert_eq!(intent.shares(), 0.25);
        intent.set_shares_input("garbage");
        assert_eq!(intent.shares(), 0.25);
    }

    #[test]
    fn decrement_clamps_at_quarter_share() {
        let mut intent = InvestmentIntent::new("p1");
        intent.set_shares_input("0.5");
        intent.decrement();
        assert_eq!(intent.shares(), 0.25);
        intent.decrement();
        assert_eq!(intent.shares(), 0.25);
        intent.increment();
        assert_eq!(intent.shares(), 0.5);
    }

    #[test]
    fn totals_match_fixed_rates() {
        // One share at $1,000 and the fixed $3,200/ETH rate.
        let intent = InvestmentIntent::new("p1");
        assert_eq!(intent.total_usd(), 1_000);
        assert_eq!(intent.total_eth(), "0.312500");

        let mut intent = intent;
        intent.set_shares_input("0.25");
        assert_eq!(intent.total_usd(), 250);
        assert_eq!(intent.total_eth(), "0.078125");

        intent.set_whole_shares(10);
        assert_eq!(intent.total_usd(), 10_000);
        assert_eq!(intent.total_eth(), "3.125000");
    }

    #[test]
    fn totals_are_idempotent() {
        let intent = InvestmentIntent::new("p1");
        assert_eq!(intent.total_eth(), intent.total_eth());
        assert_eq!(intent.total_usd(), intent.total_usd());
    }

    #[test]
    fn shares_label_trims_zeros() {
        let mut intent = InvestmentIntent::new("p1");
        assert_eq!(intent.shares_label(), "1");
        intent.set_shares_input("1.25");
        assert_eq!(intent.shares_label(), "1.25");
        intent.set_shares_input("2.5");
        assert_eq!(intent.shares_label(), "2.5");
        intent.set_shares_input("0.75");
        assert_eq!(intent.shares_label(), "0.75");
    }
}
