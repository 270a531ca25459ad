//! The page element: image reference, printspace border and top-level regions.

use serde::{Deserialize, Serialize};

use super::{Point, Region};

/// The printspace border of a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Border {
    /// Outline polygon of the printspace
    pub coords: Vec<Point>,
}

impl Border {
    /// Create a border from its outline polygon.
    pub fn new(coords: Vec<Point>) -> Self {
        Self { coords }
    }
}

/// A single page of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Filename of the page image
    pub image_filename: String,

    /// Width of the page image in pixels
    pub image_width: u32,

    /// Height of the page image in pixels
    pub image_height: u32,

    /// Printspace border, if annotated
    pub border: Option<Border>,

    /// Top-level layout regions, in reading order
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Page {
    /// Create an empty page for the given image.
    pub fn new(image_filename: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            image_filename: image_filename.into(),
            image_width: width,
            image_height: height,
            border: None,
            regions: Vec::new(),
        }
    }

    /// Set the printspace border.
    pub fn with_border(mut self, coords: Vec<Point>) -> Self {
        self.border = Some(Border::new(coords));
        self
    }

    /// Append a top-level region.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegionKind;

    #[test]
    fn test_page_builder() {
        let mut page = Page::new("page_0001.tif", 1295, 919).with_border(vec![
            Point::new(0.0, 0.0),
            Point::new(1295.0, 0.0),
            Point::new(1295.0, 919.0),
            Point::new(0.0, 919.0),
        ]);
        page.add_region(Region::new("r1", RegionKind::Text));

        assert_eq!(page.image_width, 1295);
        assert!(page.border.is_some());
        assert_eq!(page.regions.len(), 1);
    }

    #[test]
    fn test_sparse_json_deserializes() {
        let page: Page = serde_json::from_str(
            r#"{"image_filename":"p.png","image_width":10,"image_height":10,"border":null}"#,
        )
        .unwrap();
        assert!(page.border.is_none());
        assert!(page.regions.is_empty());
    }
}
