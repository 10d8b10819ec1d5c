//! Render-time aggregate consumed by the templating layer.

use serde::Serialize;

use super::record::{ContentRecord, ContentType};

/// Slug of the home hero section
pub const SLUG_HOME: &str = "home";
/// Slug of the guarantee/claim section
pub const SLUG_CLAIM: &str = "garantia";
/// Slug of the experience section
pub const SLUG_EXPERIENCIA: &str = "experiencia-profesionalidad";
/// Slug of the services section
pub const SLUG_SERVICIOS: &str = "nuestros-servicios";

/// Everything a single render needs, partitioned by type.
///
/// Slices keep query-result order. The named sections and the contact record
/// are optional; an absent one is simply `None`, never an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteData {
    pub courses: Vec<ContentRecord>,
    pub teachers: Vec<ContentRecord>,
    pub features: Vec<ContentRecord>,
    pub sections: Vec<ContentRecord>,

    pub home: Option<ContentRecord>,
    pub claim: Option<ContentRecord>,
    pub experiencia: Option<ContentRecord>,
    pub servicios: Option<ContentRecord>,

    /// First contact-typed record, if any
    pub contact: Option<ContentRecord>,
}

impl SiteData {
    /// Partition mapped records into the render-time shape
    pub fn from_records(records: Vec<ContentRecord>) -> Self {
        let mut data = SiteData::default();

        for record in records {
            match record.record_type {
                ContentType::Course => data.courses.push(record),
                ContentType::Teacher => data.teachers.push(record),
                ContentType::Feature => data.features.push(record),
                ContentType::Contact => {
                    if data.contact.is_none() {
                        data.contact = Some(record);
                    }
                }
                ContentType::Section => data.sections.push(record),
            }
        }

        data.home = find_by_slug(&data.sections, SLUG_HOME);
        data.claim = find_by_slug(&data.sections, SLUG_CLAIM);
        data.experiencia = find_by_slug(&data.sections, SLUG_EXPERIENCIA);
        data.servicios = find_by_slug(&data.sections, SLUG_SERVICIOS);

        data
    }
}

fn find_by_slug(records: &[ContentRecord], slug: &str) -> Option<ContentRecord> {
    records.iter().find(|r| r.slug == slug).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(record_type: ContentType, slug: &str) -> ContentRecord {
        ContentRecord {
            id: format!("id-{slug}"),
            record_type,
            slug: slug.to_string(),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn partitions_by_type_in_arrival_order() {
        let data = SiteData::from_records(vec![
            record(ContentType::Course, "frances-a1"),
            record(ContentType::Section, "home"),
            record(ContentType::Course, "frances-b2"),
            record(ContentType::Teacher, "marie"),
            record(ContentType::Feature, "ana-says"),
        ]);

        let course_slugs: Vec<_> = data.courses.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(course_slugs, vec!["frances-a1", "frances-b2"]);
        assert_eq!(data.teachers.len(), 1);
        assert_eq!(data.features.len(), 1);
        assert_eq!(data.sections.len(), 1);
        assert!(data.contact.is_none());
    }

    #[test]
    fn named_sections_are_selected_by_exact_slug() {
        let data = SiteData::from_records(vec![
            record(ContentType::Section, "home"),
            record(ContentType::Section, "garantia"),
            record(ContentType::Section, "experiencia-profesionalidad"),
            record(ContentType::Section, "nuestros-servicios"),
            record(ContentType::Section, "otra-seccion"),
        ]);

        assert_eq!(data.home.as_ref().unwrap().slug, "home");
        assert_eq!(data.claim.as_ref().unwrap().slug, "garantia");
        assert_eq!(
            data.experiencia.as_ref().unwrap().slug,
            "experiencia-profesionalidad"
        );
        assert_eq!(data.servicios.as_ref().unwrap().slug, "nuestros-servicios");
    }

    #[test]
    fn absent_named_sections_are_none() {
        let data = SiteData::from_records(vec![record(ContentType::Section, "otra")]);
        assert!(data.home.is_none());
        assert!(data.claim.is_none());
        assert!(data.experiencia.is_none());
        assert!(data.servicios.is_none());
    }

    #[test]
    fn first_contact_wins() {
        let data = SiteData::from_records(vec![
            record(ContentType::Contact, "contacto-1"),
            record(ContentType::Contact, "contacto-2"),
            record(ContentType::Contact, "contacto-3"),
        ]);
        assert_eq!(data.contact.unwrap().slug, "contacto-1");
        // contact records never land in the sections slice
    }
}
