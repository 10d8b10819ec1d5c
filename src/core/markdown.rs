//! Block tree → markdown conversion.
//!
//! Walks a page's block children (paginated), rendering the kinds the site
//! actually uses and skipping everything else. Children of a block are
//! rendered after it; children of list items are indented to nest.

use crate::error::Result;
use crate::notion::{Block, BlockObject, ContentApi};

/// Render a page's content blocks as a markdown string (possibly empty)
pub async fn page_to_markdown(api: &dyn ContentApi, page_id: &str) -> Result<String> {
    let blocks = fetch_children(api, page_id).await?;
    let mut lines = Vec::new();
    render_blocks(api, &blocks, 0, &mut lines).await?;
    Ok(lines.join("\n\n"))
}

/// Fetch all children of a block, following continuation cursors
async fn fetch_children(api: &dyn ContentApi, block_id: &str) -> Result<Vec<BlockObject>> {
    let mut blocks = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let response = api.list_block_children(block_id, cursor.as_deref()).await?;
        blocks.extend(response.results);

        cursor = match (response.has_more, response.next_cursor) {
            (true, Some(next)) if !next.is_empty() => Some(next),
            _ => break,
        };
    }

    Ok(blocks)
}

// Recursion through an async fn needs a boxed future
fn render_blocks<'a>(
    api: &'a dyn ContentApi,
    blocks: &'a [BlockObject],
    depth: usize,
    out: &'a mut Vec<String>,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let indent = "  ".repeat(depth);
        let mut numbered = 0u32;

        for block in blocks {
            let is_list_item = matches!(
                block.block,
                Block::BulletedListItem { .. } | Block::NumberedListItem { .. }
            );
            if !matches!(block.block, Block::NumberedListItem { .. }) {
                numbered = 0;
            }

            match &block.block {
                Block::Paragraph { paragraph } => {
                    let text = paragraph.text();
                    if !text.is_empty() {
                        out.push(format!("{indent}{text}"));
                    }
                }
                Block::Heading1 { heading_1 } => {
                    out.push(format!("{indent}# {}", heading_1.text()));
                }
                Block::Heading2 { heading_2 } => {
                    out.push(format!("{indent}## {}", heading_2.text()));
                }
                Block::Heading3 { heading_3 } => {
                    out.push(format!("{indent}### {}", heading_3.text()));
                }
                Block::BulletedListItem {
                    bulleted_list_item,
                } => {
                    out.push(format!("{indent}- {}", bulleted_list_item.text()));
                }
                Block::NumberedListItem {
                    numbered_list_item,
                } => {
                    numbered += 1;
                    out.push(format!("{indent}{numbered}. {}", numbered_list_item.text()));
                }
                Block::Quote { quote } => {
                    out.push(format!("{indent}> {}", quote.text()));
                }
                Block::Code { code } => {
                    let language = code.language.clone().unwrap_or_default();
                    out.push(format!(
                        "{indent}```{language}\n{}\n{indent}```",
                        code.text()
                    ));
                }
                Block::Divider => {
                    out.push(format!("{indent}---"));
                }
                Block::Unsupported => {}
            }

            if block.has_children && !matches!(block.block, Block::Unsupported) {
                let children = fetch_children(api, &block.id).await?;
                let child_depth = if is_list_item { depth + 1 } else { depth };
                render_blocks(api, &children, child_depth, out).await?;
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::SyncError;
    use crate::notion::{
        BlockChildrenResponse, Database, QueryRequest, QueryResponse, QueryTarget,
    };

    /// Serves canned child pages keyed by (block id, cursor)
    struct FakeBlocks {
        children: HashMap<(String, Option<String>), BlockChildrenResponse>,
    }

    impl FakeBlocks {
        fn new() -> Self {
            Self {
                children: HashMap::new(),
            }
        }

        fn with_page(
            mut self,
            block_id: &str,
            cursor: Option<&str>,
            blocks: serde_json::Value,
            next_cursor: Option<&str>,
        ) -> Self {
            let response = BlockChildrenResponse {
                results: serde_json::from_value(blocks).unwrap(),
                has_more: next_cursor.is_some(),
                next_cursor: next_cursor.map(String::from),
            };
            self.children
                .insert((block_id.to_string(), cursor.map(String::from)), response);
            self
        }
    }

    #[async_trait]
    impl ContentApi for FakeBlocks {
        async fn retrieve_database(&self, _database_id: &str) -> Result<Database> {
            Err(SyncError::Query("not used".into()))
        }

        async fn query(
            &self,
            _target: &QueryTarget,
            _request: &QueryRequest,
        ) -> Result<QueryResponse> {
            Err(SyncError::Query("not used".into()))
        }

        async fn list_block_children(
            &self,
            block_id: &str,
            start_cursor: Option<&str>,
        ) -> Result<BlockChildrenResponse> {
            let key = (block_id.to_string(), start_cursor.map(String::from));
            Ok(self
                .children
                .get(&key)
                .cloned()
                .unwrap_or(BlockChildrenResponse {
                    results: Vec::new(),
                    has_more: false,
                    next_cursor: None,
                }))
        }
    }

    fn paragraph(id: &str, text: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "paragraph",
            "paragraph": {"rich_text": [{"plain_text": text}]}
        })
    }

    #[tokio::test]
    async fn child_pages_follow_continuation_cursors() {
        let api = FakeBlocks::new()
            .with_page("page", None, json!([paragraph("b1", "uno")]), Some("c1"))
            .with_page(
                "page",
                Some("c1"),
                json!([paragraph("b2", "dos"), paragraph("b3", "tres")]),
                None,
            );

        let markdown = page_to_markdown(&api, "page").await.unwrap();
        assert_eq!(markdown, "uno\n\ndos\n\ntres");
    }

    #[tokio::test]
    async fn list_item_children_nest_with_indentation() {
        let api = FakeBlocks::new()
            .with_page(
                "page",
                None,
                json!([
                    {
                        "id": "b1",
                        "has_children": true,
                        "type": "bulleted_list_item",
                        "bulleted_list_item": {"rich_text": [{"plain_text": "parent"}]}
                    },
                    {
                        "id": "b2",
                        "type": "numbered_list_item",
                        "numbered_list_item": {"rich_text": [{"plain_text": "uno"}]}
                    },
                    {
                        "id": "b3",
                        "type": "numbered_list_item",
                        "numbered_list_item": {"rich_text": [{"plain_text": "dos"}]}
                    }
                ]),
                None,
            )
            .with_page(
                "b1",
                None,
                json!([{
                    "id": "b1-1",
                    "type": "bulleted_list_item",
                    "bulleted_list_item": {"rich_text": [{"plain_text": "child"}]}
                }]),
                None,
            );

        let markdown = page_to_markdown(&api, "page").await.unwrap();
        assert_eq!(markdown, "- parent\n\n  - child\n\n1. uno\n\n2. dos");
    }

    #[tokio::test]
    async fn non_list_children_render_at_the_same_depth() {
        let api = FakeBlocks::new()
            .with_page(
                "page",
                None,
                json!([{
                    "id": "b1",
                    "has_children": true,
                    "type": "heading_2",
                    "heading_2": {"rich_text": [{"plain_text": "Precios"}]}
                }]),
                None,
            )
            .with_page("b1", None, json!([paragraph("b1-1", "Desde 99.")]), None);

        let markdown = page_to_markdown(&api, "page").await.unwrap();
        assert_eq!(markdown, "## Precios\n\nDesde 99.");
    }
}
