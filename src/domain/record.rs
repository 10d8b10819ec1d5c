//! The uniform content record.
//!
//! Every page, whatever its type, is reduced to this one shape before being
//! partitioned or persisted. All optional fields default to the empty string
//! (`rating` to 0) so downstream consumers never deal with absent values.

use serde::{Deserialize, Serialize};

/// Content classification, derived from the `type` select property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Page sections (hero, claim, services, ...); also the fallback bucket
    Section,

    /// A course offering
    Course,

    /// A testimonial / feature card
    Feature,

    /// The single contact record
    Contact,

    /// A teacher profile
    Teacher,
}

impl ContentType {
    /// Classify a raw type value; unknown or empty values land in Section
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "course" => ContentType::Course,
            "teacher" => ContentType::Teacher,
            "testimonial" | "feature" => ContentType::Feature,
            "contact" => ContentType::Contact,
            _ => ContentType::Section,
        }
    }

    /// Output subdirectory for the batch path.
    ///
    /// Total: contact records and anything unrecognized go to `sections`.
    pub fn output_dir(&self) -> &'static str {
        match self {
            ContentType::Course => "courses",
            ContentType::Teacher => "teachers",
            ContentType::Feature => "testimonials",
            ContentType::Section | ContentType::Contact => "sections",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContentType::Section => "section",
            ContentType::Course => "course",
            ContentType::Feature => "feature",
            ContentType::Contact => "contact",
            ContentType::Teacher => "teacher",
        };
        write!(f, "{name}")
    }
}

/// The normalized shape all content types are reduced to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Stable identifier, sourced from the raw page
    pub id: String,

    /// Content classification
    #[serde(rename = "type")]
    pub record_type: ContentType,

    pub title: String,

    /// Correlation key; records without a slug are dropped from output
    pub slug: String,

    pub status: String,

    pub seo_description: String,
    pub body: String,

    /// Plain-text bullet list, one `- ` line per entry
    pub features: String,

    // course
    pub price: String,
    pub duration: String,
    pub schedule: String,
    pub level: String,
    pub teacher: String,

    // teacher
    pub role: String,
    pub languages: String,
    pub photo: String,

    // testimonial
    pub rating: f64,

    // contact
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: String,
    pub instagram: String,

    pub tags: Vec<String>,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            record_type: ContentType::Section,
            title: String::new(),
            slug: String::new(),
            status: String::new(),
            seo_description: String::new(),
            body: String::new(),
            features: String::new(),
            price: String::new(),
            duration: String::new(),
            schedule: String::new(),
            level: String::new(),
            teacher: String::new(),
            role: String::new(),
            languages: String::new(),
            photo: String::new(),
            rating: 0.0,
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            facebook: String::new(),
            instagram: String::new(),
            tags: Vec::new(),
        }
    }
}

impl ContentRecord {
    /// Split the plain-text `features` field into individual bullets.
    ///
    /// Only lines starting with `-` count; the dash prefix is stripped.
    pub fn feature_bullets(&self) -> Vec<String> {
        self.features
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('-'))
            .map(|line| line.trim_start_matches('-').trim_start().to_string())
            .collect()
    }
}
