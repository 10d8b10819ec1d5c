//! Markdown materialization for the batch path.
//!
//! Each record becomes one `{category}/{slug}.md` document: a `---`-delimited
//! YAML frontmatter header carrying the mapped fields, a blank line, and the
//! markdown body. The header must parse back to an equal value; the static
//! site build consumes these files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::{ContentRecord, ContentType};
use crate::error::{Result, SyncError};

/// Frontmatter fields persisted with every document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub seo_description: String,
    #[serde(rename = "type")]
    pub record_type: ContentType,
    pub tags: Vec<String>,
    pub price: String,
    pub duration: String,
    pub schedule: String,
    pub level: String,
    pub teacher: String,
    pub role: String,
    pub languages: String,
    pub photo: String,
    pub rating: f64,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub facebook: String,
    pub instagram: String,
}

impl Frontmatter {
    /// Extract the persisted fields from a mapped record
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            seo_description: record.seo_description.clone(),
            record_type: record.record_type,
            tags: record.tags.clone(),
            price: record.price.clone(),
            duration: record.duration.clone(),
            schedule: record.schedule.clone(),
            level: record.level.clone(),
            teacher: record.teacher.clone(),
            role: record.role.clone(),
            languages: record.languages.clone(),
            photo: record.photo.clone(),
            rating: record.rating,
            phone: record.phone.clone(),
            email: record.email.clone(),
            address: record.address.clone(),
            facebook: record.facebook.clone(),
            instagram: record.instagram.clone(),
        }
    }
}

/// Serialize frontmatter and body into one document
pub fn render_document(frontmatter: &Frontmatter, body: &str) -> Result<String> {
    let header = serde_yaml::to_string(frontmatter)?;

    let mut document = String::with_capacity(header.len() + body.len() + 16);
    document.push_str("---\n");
    document.push_str(&header);
    document.push_str("---\n");

    if !body.is_empty() {
        document.push('\n');
        document.push_str(body);
        if !body.ends_with('\n') {
            document.push('\n');
        }
    }

    Ok(document)
}

/// Split a document back into frontmatter and body.
///
/// Inverse of [`render_document`]; the build step and tests rely on the
/// header being parseable.
pub fn parse_document(document: &str) -> Result<(Frontmatter, String)> {
    let rest = document.strip_prefix("---\n").ok_or_else(|| {
        SyncError::Document("document has no frontmatter header".to_string())
    })?;
    let (header, body) = rest.split_once("---\n").ok_or_else(|| {
        SyncError::Document("unterminated frontmatter header".to_string())
    })?;

    let frontmatter: Frontmatter = serde_yaml::from_str(header)?;
    Ok((frontmatter, body.trim_start_matches('\n').to_string()))
}

/// Write one record's document under `{root}/{category}/{slug}.md`
pub async fn write_record(root: &Path, record: &ContentRecord, body: &str) -> Result<PathBuf> {
    let dir = root.join(record.record_type.output_dir());
    fs::create_dir_all(&dir).await.map_err(|source| SyncError::Write {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(format!("{}.md", record.slug));
    let document = render_document(&Frontmatter::from_record(record), body)?;
    fs::write(&path, document)
        .await
        .map_err(|source| SyncError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontmatter_round_trips() {
        let frontmatter = Frontmatter::from_record(&ContentRecord {
            title: "Intro to French".into(),
            slug: "intro-french".into(),
            record_type: ContentType::Course,
            price: "99".into(),
            tags: vec!["beginner".into()],
            ..ContentRecord::default()
        });

        let document = render_document(&frontmatter, "").unwrap();
        let (parsed, body) = parse_document(&document).unwrap();

        assert_eq!(parsed, frontmatter);
        assert_eq!(body, "");
    }

    #[test]
    fn body_is_separated_by_a_blank_line() {
        let frontmatter = Frontmatter::from_record(&ContentRecord::default());
        let document = render_document(&frontmatter, "# Hola\n\nBienvenidos.").unwrap();

        assert!(document.starts_with("---\n"));
        assert!(document.contains("---\n\n# Hola"));
        assert!(document.ends_with("Bienvenidos.\n"));

        let (_, body) = parse_document(&document).unwrap();
        assert_eq!(body, "# Hola\n\nBienvenidos.\n");
    }

    #[tokio::test]
    async fn write_record_places_file_by_type_and_slug() {
        let temp = tempfile::TempDir::new().unwrap();
        let record = ContentRecord {
            title: "Marie".into(),
            slug: "marie".into(),
            record_type: ContentType::Teacher,
            ..ContentRecord::default()
        };

        let path = write_record(temp.path(), &record, "Profesora nativa.")
            .await
            .unwrap();

        assert_eq!(path, temp.path().join("teachers").join("marie.md"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("title: Marie"));
        assert!(written.contains("Profesora nativa."));
    }
}
