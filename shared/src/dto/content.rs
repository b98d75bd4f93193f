//! Content store record shapes: projects, testimonials, contact inquiries.
//!
//! Every field that editorial staff may leave blank is optional and omitted
//! from JSON when `None`, so partially filled records round-trip cleanly
//! through the entity API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a development project as shown on the portfolio pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Human-readable label ("in_progress" -> "In Progress").
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// A development project record.
///
/// The marketing pages use the descriptive fields; the invest portal reads
/// the raise terms (`raise`, `roi`, `raise_pct`, `hold_period`, ...) as a
/// read-only projection when opening the investment wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Total capital raise, preformatted ("$18.5M").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise: Option<String>,
    /// Projected IRR, whole percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_roi: Option<u32>,
    /// Raise progress, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_pct: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_invest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raised_usd: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_usd: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

impl ProjectRecord {
    /// Category with underscores replaced for display ("mixed_use" -> "mixed use").
    pub fn category_label(&self) -> String {
        self.category
            .as_deref()
            .unwrap_or("Development")
            .replace('_', " ")
    }
}

/// A client testimonial shown in the home-page carousel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Carousel position; records are listed sorted by this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// What a contact-form submission is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    General,
    Investment,
    Partnership,
    Residence,
}

impl InquiryType {
    pub const ALL: &'static [InquiryType] = &[
        InquiryType::General,
        InquiryType::Investment,
        InquiryType::Partnership,
        InquiryType::Residence,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General",
            InquiryType::Investment => "Investment",
            InquiryType::Partnership => "Partnership",
            InquiryType::Residence => "Residence",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Investment => "investment",
            InquiryType::Partnership => "partnership",
            InquiryType::Residence => "residence",
        }
    }

    pub fn parse(value: &str) -> Option<InquiryType> {
        InquiryType::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// A contact-form submission, created through the entity API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
}

impl Default for ContactInquiry {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: None,
            message: String::new(),
            inquiry_type: InquiryType::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_round_trips_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: ProjectStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectStatus::InProgress);
    }

    #[test]
    fn sparse_project_record_deserializes() {
        // The store returns only the fields an editor filled in.
        let json = r#"{
            "id": "1",
            "title": "The Meridian",
            "location": "Austin, TX",
            "category": "mixed_use",
            "status": "in_progress"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "The Meridian");
        assert_eq!(record.status, Some(ProjectStatus::InProgress));
        assert_eq!(record.category_label(), "mixed use");
        assert!(record.roi.is_none());
    }

    #[test]
    fn inquiry_skips_missing_phone() {
        let inquiry = ContactInquiry {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
            ..ContactInquiry::default()
        };
        let json = serde_json::to_string(&inquiry).unwrap();
        assert!(!json.contains("phone"));
        assert!(json.contains("\"inquiry_type\":\"general\""));
    }

    #[test]
    fn inquiry_type_parse_matches_as_str() {
        for ty in InquiryType::ALL {
            assert_eq!(InquiryType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(InquiryType::parse("bogus"), None);
    }
}
