//! Property mapper: raw page → uniform content record.
//!
//! Pure and total. Every field lookup resolves to its documented default
//! when the property is absent, mistyped, or empty; unknown extra properties
//! are ignored. Mapping the same page twice yields identical records.

use crate::domain::{ContentRecord, ContentType};
use crate::notion::{Page, PropertyValue};

/// Map a raw page into the uniform content record
pub fn map_page(page: &Page) -> ContentRecord {
    let text = |name: &str| {
        page.property(name)
            .map(PropertyValue::as_text)
            .unwrap_or_default()
    };
    let url = |name: &str| {
        page.property(name)
            .map(PropertyValue::as_url)
            .unwrap_or_default()
    };

    let record_type = page
        .property("type")
        .map(|p| {
            let value = p.as_select();
            if value.is_empty() {
                p.as_text()
            } else {
                value
            }
        })
        .map(|value| ContentType::parse(&value))
        .unwrap_or(ContentType::Section);

    // Schemas have carried the photo as a `photo` url/files property or as a
    // separate `Photo URL` url property
    let photo = {
        let direct = url("photo");
        let from_files = page
            .property("photo")
            .map(PropertyValue::first_file_url)
            .unwrap_or_default();
        if !direct.is_empty() {
            direct
        } else if !from_files.is_empty() {
            from_files
        } else {
            url("Photo URL")
        }
    };

    let seo_description = {
        let compact = text("seoDescription");
        if compact.is_empty() {
            text("SEO Description")
        } else {
            compact
        }
    };

    ContentRecord {
        id: page.id.clone(),
        record_type,
        title: text("title"),
        slug: text("slug"),
        status: page
            .property("status")
            .map(PropertyValue::as_status)
            .unwrap_or_default(),
        seo_description,
        body: text("body"),
        features: text("features"),
        price: text("price"),
        duration: text("duration"),
        schedule: text("schedule"),
        level: text("level"),
        teacher: text("teacher"),
        role: text("role"),
        languages: text("languages"),
        photo,
        rating: page
            .property("rating")
            .and_then(PropertyValue::as_number)
            .unwrap_or(0.0),
        phone: text("phone"),
        email: text("email"),
        address: text("address"),
        facebook: url("facebook"),
        instagram: url("instagram"),
        tags: page
            .property("tags")
            .map(PropertyValue::as_multi_select)
            .unwrap_or_default(),
    }
}
