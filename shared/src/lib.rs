//! # Shared Data Transfer Objects Library
//!
//! This library defines the records the site exchanges with the external
//! content store, plus small display utilities shared across the frontend.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the content store
//!   - **[`dto::content`]**: Projects, testimonials, and contact inquiries
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::content::{ContactInquiry, InquiryType};
//! use shared::utils::truncate_address;
//!
//! let inquiry = ContactInquiry {
//!     name: "Jane Smith".to_string(),
//!     email: "jane@example.com".to_string(),
//!     phone: None,
//!     message: "Interested in The Meridian.".to_string(),
//!     inquiry_type: InquiryType::Investment,
//! };
//! let body = serde_json::to_string(&inquiry).unwrap();
//! assert!(!body.contains("phone"));
//!
//! assert_eq!(
//!     truncate_address("0x742d35Cc6634C0532925a3b8D4C9E4F3b3c75d8e"),
//!     "0x742d…5d8e"
//! );
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
