//! Textual elements: lines, words, glyphs and their text readings.

use serde::{Deserialize, Serialize};

use super::Point;

/// One alternative text reading of an element.
///
/// Elements can carry several readings (e.g. from different OCR engines);
/// the [`crate::text`] module selects the canonical one among them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEquiv {
    /// Rank of this reading; `1` marks the preferred one
    pub index: Option<u32>,

    /// Recognition confidence in `0.0..=1.0`
    pub conf: Option<f32>,

    /// The text content
    pub unicode: String,
}

impl TextEquiv {
    /// Create a reading with no index.
    pub fn new(unicode: impl Into<String>) -> Self {
        Self {
            index: None,
            conf: None,
            unicode: unicode.into(),
        }
    }

    /// Create a reading with an explicit index.
    pub fn indexed(index: u32, unicode: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            conf: None,
            unicode: unicode.into(),
        }
    }

    /// Attach a confidence value.
    pub fn with_conf(mut self, conf: f32) -> Self {
        self.conf = Some(conf);
        self
    }
}

/// A single line of text within a text region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLine {
    /// Identifier, unique within the document
    pub id: String,

    /// Outline polygon of the line
    pub coords: Option<Vec<Point>>,

    /// Polyline marking the writing line
    pub baseline: Option<Vec<Point>>,

    /// Alternative text readings of the whole line
    #[serde(default)]
    pub text_equivs: Vec<TextEquiv>,

    /// Words on the line, in reading order
    #[serde(default)]
    pub words: Vec<Word>,
}

impl TextLine {
    /// Create an empty line.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coords: None,
            baseline: None,
            text_equivs: Vec::new(),
            words: Vec::new(),
        }
    }

    /// Set the outline polygon.
    pub fn with_coords(mut self, coords: Vec<Point>) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Set the baseline polyline.
    pub fn with_baseline(mut self, baseline: Vec<Point>) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Set a single unindexed text reading.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_equivs = vec![TextEquiv::new(text)];
        self
    }

    /// Append a word.
    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }
}

/// A word within a text line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Identifier, unique within the document
    pub id: String,

    /// Outline polygon of the word
    pub coords: Option<Vec<Point>>,

    /// Alternative text readings of the word
    #[serde(default)]
    pub text_equivs: Vec<TextEquiv>,

    /// Glyphs of the word, in reading order
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

impl Word {
    /// Create an empty word.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coords: None,
            text_equivs: Vec::new(),
            glyphs: Vec::new(),
        }
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

    /// Append a glyph.
    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }
}

/// A single glyph within a word. Glyphs are the leaves of the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    /// Identifier, unique within the document
    pub id: String,

    /// Outline polygon of the glyph
    pub coords: Option<Vec<Point>>,

    /// Alternative text readings of the glyph
    #[serde(default)]
    pub text_equivs: Vec<TextEquiv>,
}

impl Glyph {
    /// Create an empty glyph.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coords: None,
            text_equivs: Vec::new(),
        }
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
}
