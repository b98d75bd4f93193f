//! Leptos contexts shared across pages.

pub mod wallet;
