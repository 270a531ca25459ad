//! Layout regions and their kinds.

use serde::{Deserialize, Serialize};

use super::{Point, TextEquiv, TextLine};

/// The kind of a layout region.
///
/// Mirrors the region element names of the PAGE layout vocabulary.
/// `Unknown` covers region elements without a more specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Advert,
    Chart,
    Chem,
    Graphic,
    LineDrawing,
    Maths,
    Music,
    Noise,
    Separator,
    Table,
    Text,
    Unknown,
}

impl RegionKind {
    /// Element tag name used in reports and log output.
    pub fn tag(&self) -> &'static str {
        match self {
            RegionKind::Advert => "AdvertRegion",
            RegionKind::Chart => "ChartRegion",
            RegionKind::Chem => "ChemRegion",
            RegionKind::Graphic => "GraphicRegion",
            RegionKind::LineDrawing => "LineDrawingRegion",
            RegionKind::Maths => "MathsRegion",
            RegionKind::Music => "MusicRegion",
            RegionKind::Noise => "NoiseRegion",
            RegionKind::Separator => "SeparatorRegion",
            RegionKind::Table => "TableRegion",
            RegionKind::Text => "TextRegion",
            RegionKind::Unknown => "UnknownRegion",
        }
    }
}

/// A layout region on a page.
///
/// Regions of any kind may nest sub-regions; only [`RegionKind::Text`]
/// regions additionally carry text lines and text readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Identifier, unique within the document
    pub id: String,

    /// Kind of the region
    pub kind: RegionKind,

    /// Outline polygon of the region
    pub coords: Option<Vec<Point>>,

    /// Alternative text readings (text regions only)
    #[serde(default)]
    pub text_equivs: Vec<TextEquiv>,

    /// Nested sub-regions, in reading order
    #[serde(default)]
    pub regions: Vec<Region>,

    /// Text lines, in reading order (text regions only)
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

impl Region {
    /// Create an empty region of the given kind.
    pub fn new(id: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            coords: None,
            text_equivs: Vec::new(),
            regions: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Create an empty text region.
    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, RegionKind::Text)
    }

    /// Set the outline polygon.
    pub fn with_coords(mut self, coords: Vec<Point>) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Set a single unindexed text reading.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_equivs = vec![TextEquiv::new(text)];
        self
    }

    /// Append a text line.
    pub fn add_line(&mut self, line: TextLine) {
        self.lines.push(line);
    }

    /// Append a nested sub-region.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }
}
