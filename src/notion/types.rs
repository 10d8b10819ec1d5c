//! Wire types for the Notion content API.
//!
//! Property values arrive as a tagged union keyed on `"type"`. Every
//! extraction helper is total: absent, mistyped, or empty data yields the
//! field's documented default instead of an error, and property kinds this
//! crate does not understand deserialize into [`PropertyValue::Unsupported`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A fragment of rich text; only the rendered plain text is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

/// A select / multi-select / status option
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

/// A hosted or external file attachment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub file: Option<FileUrl>,
    #[serde(default)]
    pub external: Option<FileUrl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileUrl {
    #[serde(default)]
    pub url: String,
}

/// A single property value on a page, tagged by kind
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Number {
        number: Option<f64>,
    },
    Url {
        url: Option<String>,
    },
    Files {
        files: Vec<FileRef>,
    },
    Status {
        status: Option<SelectOption>,
    },
    /// Any property kind this pipeline does not consume
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// Plain text of a title or rich-text property, fragments joined
    pub fn as_text(&self) -> String {
        match self {
            PropertyValue::Title { title } => join_plain_text(title),
            PropertyValue::RichText { rich_text } => join_plain_text(rich_text),
            _ => String::new(),
        }
    }

    /// Name of a select option, empty if unset or not a select
    pub fn as_select(&self) -> String {
        match self {
            PropertyValue::Select { select } => {
                select.as_ref().map(|s| s.name.clone()).unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    /// Option names of a multi-select property
    pub fn as_multi_select(&self) -> Vec<String> {
        match self {
            PropertyValue::MultiSelect { multi_select } => {
                multi_select.iter().map(|s| s.name.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Numeric value, `None` if unset or not a number property
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number { number } => *number,
            _ => None,
        }
    }

    /// URL value; a rich-text property holding a bare link also qualifies
    pub fn as_url(&self) -> String {
        match self {
            PropertyValue::Url { url } => url.clone().unwrap_or_default(),
            _ => self.as_text(),
        }
    }

    /// Status name; falls back to select name for databases that model the
    /// publication state as a plain select
    pub fn as_status(&self) -> String {
        match self {
            PropertyValue::Status { status } => {
                status.as_ref().map(|s| s.name.clone()).unwrap_or_default()
            }
            PropertyValue::Select { .. } => self.as_select(),
            _ => String::new(),
        }
    }

    /// URL of the first attachment in a files property
    pub fn first_file_url(&self) -> String {
        match self {
            PropertyValue::Files { files } => files
                .first()
                .and_then(|f| {
                    f.file
                        .as_ref()
                        .or(f.external.as_ref())
                        .map(|u| u.url.clone())
                })
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

fn join_plain_text(fragments: &[RichText]) -> String {
    fragments
        .iter()
        .map(|t| t.plain_text.as_str())
        .collect::<Vec<_>>()
        .join("")
}

/// A raw page record as returned by a query
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Look up a property by name.
    ///
    /// Exact match first, then an ASCII-case-insensitive scan; the two
    /// schemas this tool has synced from disagree on key casing
    /// (`Title` vs `title`) and both must map identically.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        if let Some(value) = self.properties.get(name) {
            return Some(value);
        }
        self.properties
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}

/// Body of a paginated query request
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<serde_json::Value>,
}

/// One page of query results
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Database metadata, used only for schema discovery
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub data_sources: Vec<DataSourceRef>,
}

/// Reference to a delegated data source exposed by a database
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceRef {
    pub id: String,
}

/// A block with its identity and nesting flag
#[derive(Debug, Clone, Deserialize)]
pub struct BlockObject {
    pub id: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(flatten)]
    pub block: Block,
}

/// Block payloads this pipeline can render to markdown
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        paragraph: RichTextContent,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: RichTextContent,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: RichTextContent,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: RichTextContent,
    },
    BulletedListItem {
        bulleted_list_item: RichTextContent,
    },
    NumberedListItem {
        numbered_list_item: RichTextContent,
    },
    Quote {
        quote: RichTextContent,
    },
    Code {
        code: CodeContent,
    },
    Divider,
    /// Any block kind this pipeline does not render
    #[serde(other)]
    Unsupported,
}

/// Rich text carried by most block kinds
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// Code block payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RichTextContent {
    /// Rendered plain text of the block
    pub fn text(&self) -> String {
        join_plain_text(&self.rich_text)
    }
}

impl CodeContent {
    pub fn text(&self) -> String {
        join_plain_text(&self.rich_text)
    }
}

/// One page of block children
#[derive(Debug, Clone, Deserialize)]
pub struct BlockChildrenResponse {
    #[serde(default)]
    pub results: Vec<BlockObject>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_values_deserialize_by_tag() {
        let value: PropertyValue = serde_json::from_value(json!({
            "id": "abc",
            "type": "rich_text",
            "rich_text": [
                {"plain_text": "intro-"},
                {"plain_text": "french"}
            ]
        }))
        .unwrap();
        assert_eq!(value.as_text(), "intro-french");

        let value: PropertyValue = serde_json::from_value(json!({
            "type": "select",
            "select": {"name": "course"}
        }))
        .unwrap();
        assert_eq!(value.as_select(), "course");

        let value: PropertyValue = serde_json::from_value(json!({
            "type": "number",
            "number": 4.5
        }))
        .unwrap();
        assert_eq!(value.as_number(), Some(4.5));
    }

    #[test]
    fn unknown_property_kind_is_tolerated() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "rollup",
            "rollup": {"type": "number", "number": 3}
        }))
        .unwrap();
        assert!(matches!(value, PropertyValue::Unsupported));
        assert_eq!(value.as_text(), "");
        assert_eq!(value.as_number(), None);
    }

    #[test]
    fn extraction_defaults_on_unset_values() {
        let value: PropertyValue =
            serde_json::from_value(json!({"type": "select", "select": null})).unwrap();
        assert_eq!(value.as_select(), "");
        assert_eq!(value.as_status(), "");

        let value: PropertyValue =
            serde_json::from_value(json!({"type": "url", "url": null})).unwrap();
        assert_eq!(value.as_url(), "");

        let value: PropertyValue =
            serde_json::from_value(json!({"type": "files", "files": []})).unwrap();
        assert_eq!(value.first_file_url(), "");
    }

    #[test]
    fn files_property_prefers_hosted_url() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "files",
            "files": [
                {"file": {"url": "https://files.example/photo.jpg"}},
                {"external": {"url": "https://cdn.example/other.jpg"}}
            ]
        }))
        .unwrap();
        assert_eq!(value.first_file_url(), "https://files.example/photo.jpg");
    }

    #[test]
    fn status_falls_back_to_select() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "select",
            "select": {"name": "Published"}
        }))
        .unwrap();
        assert_eq!(value.as_status(), "Published");
    }

    #[test]
    fn page_property_lookup_is_case_insensitive() {
        let page: Page = serde_json::from_value(json!({
            "id": "p1",
            "properties": {
                "Title": {"type": "title", "title": [{"plain_text": "Hola"}]}
            }
        }))
        .unwrap();

        assert_eq!(page.property("Title").unwrap().as_text(), "Hola");
        assert_eq!(page.property("title").unwrap().as_text(), "Hola");
        assert!(page.property("missing").is_none());
    }

    #[test]
    fn block_payloads_deserialize_by_tag() {
        let block: BlockObject = serde_json::from_value(json!({
            "id": "b1",
            "has_children": false,
            "type": "heading_2",
            "heading_2": {"rich_text": [{"plain_text": "Precios"}]}
        }))
        .unwrap();
        match block.block {
            Block::Heading2 { heading_2 } => assert_eq!(heading_2.text(), "Precios"),
            other => panic!("unexpected block: {other:?}"),
        }

        let block: BlockObject = serde_json::from_value(json!({
            "id": "b2",
            "type": "child_database",
            "child_database": {"title": "ignored"}
        }))
        .unwrap();
        assert!(matches!(block.block, Block::Unsupported));
    }
}
