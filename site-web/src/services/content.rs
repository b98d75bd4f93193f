//! External content store client.
//!
//! The store exposes a generic entity API: list records by entity name with
//! sort-and-limit query parameters, and create new records. The marketing
//! pages read projects and testimonials through it and write contact
//! inquiries; nothing is persisted locally.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::dto::content::{ContactInquiry, ProjectRecord, TestimonialRecord};

use crate::utils::constants::CONTENT_API_BASE;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store request failed: {0}")]
    Network(String),
    #[error("content store returned status {0}")]
    Status(u16),
    #[error("could not decode content store response: {0}")]
    Decode(String),
}

/// Handle on the entity API. Cheap to construct per call site.
#[derive(Clone)]
pub struct ContentStore {
    base: String,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self::with_base(CONTENT_API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// List records of one entity, sorted (`-` prefix for descending) and
    /// optionally limited.
    pub async fn list<T: DeserializeOwned>(
        &self,
        entity: &str,
        sort: &str,
        limit: Option<u32>,
    ) -> Result<Vec<T>, ContentError> {
        let mut url = format!(
            "{}/entities/{entity}?sort={}",
            self.base,
            urlencoding::encode(sort)
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={limit}"));
        }

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ContentError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| ContentError::Decode(err.to_string()))
    }

    /// Create one record of the given entity.
    pub async fn create<T: Serialize>(&self, entity: &str, record: &T) -> Result<(), ContentError> {
        let response = Request::post(&format!("{}/entities/{entity}", self.base))
            .json(record)
            .map_err(|err| ContentError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ContentError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }
        Ok(())
    }

    /// Newest projects for the home-page strip.
    pub async fn featured_projects(&self, limit: u32) -> Result<Vec<ProjectRecord>, ContentError> {
        self.list("Project", "-created_date", Some(limit)).await
    }

    /// Full portfolio, newest first.
    pub async fn projects(&self) -> Result<Vec<ProjectRecord>, ContentError> {
        self.list("Project", "-created_date", None).await
    }

    /// Testimonials in editorial order.
    pub async fn testimonials(&self) -> Result<Vec<TestimonialRecord>, ContentError> {
        self.list("Testimonial", "order", None).await
    }

    /// File a contact-form submission.
    pub async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> Result<(), ContentError> {
        self.create("ContactInquiry", inquiry).await
    }
}
