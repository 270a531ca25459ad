//! The document root: metadata and the page tree.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Page;
use crate::error::Result;

/// Provenance metadata of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Tool or person that created the annotation
    pub creator: Option<String>,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,

    /// Timestamp of the last modification
    pub last_change: Option<DateTime<Utc>>,

    /// Free-form comments
    pub comments: Option<String>,
}

/// A page-layout document: one page with its region tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: Option<String>,

    /// Provenance metadata
    pub metadata: Option<Metadata>,

    /// The page
    pub page: Page,
}

impl Document {
    /// Create a document around a page.
    pub fn new(page: Page) -> Self {
        Self {
            id: None,
            metadata: None,
            page,
        }
    }

    /// Set the document identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_json_round_trip() {
        let page = Page::new("page_0001.tif", 100, 50).with_border(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(0.0, 50.0),
        ]);
        let doc = Document::new(page).with_id("doc-1");

        let json = doc.to_json_string().unwrap();
        let parsed = Document::from_json_str(&json).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("doc-1"));
        assert_eq!(parsed.page.image_width, 100);
        assert!(parsed.page.border.is_some());
    }

    #[test]
    fn test_metadata_dates_deserialize() {
        let json = r#"{
            "id": "doc-1",
            "metadata": {
                "creator": "ocr/engine 1.0",
                "created": "2024-03-01T12:00:00Z"
            },
            "page": {
                "image_filename": "p.png",
                "image_width": 10,
                "image_height": 10,
                "border": null
            }
        }"#;
        let doc = Document::from_json_str(json).unwrap();
        let metadata = doc.metadata.unwrap();
        assert_eq!(metadata.creator.as_deref(), Some("ocr/engine 1.0"));
        assert!(metadata.created.is_some());
        assert!(metadata.last_change.is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Document::from_json_str("not json").is_err());
    }
}
