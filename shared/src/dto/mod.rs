//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the external content store. The store
//! exposes a generic entity API (list/create keyed by entity name); these
//! are the record shapes the site reads and writes through it.
//!
//! ## Module Organization
//!
//! - [`content`] - Project, testimonial, and contact-inquiry records
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings using `#[serde(rename_all = "snake_case")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/entities/Project?sort=-created_date&limit=3
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   {
//!     "id": "1",
//!     "title": "The Meridian",
//!     "location": "Austin, TX",
//!     "category": "residential",
//!     "status": "in_progress",
//!     "year": "2025"
//!   }
//! ]
//! ```

pub mod content;

pub use content::*;
