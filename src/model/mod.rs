//! Data model for page-layout documents.
//!
//! A [`Document`] holds one [`Page`]; the page holds a [`Border`] and a
//! tree of [`Region`]s, which in turn hold [`TextLine`]s, [`Word`]s and
//! [`Glyph`]s. Every level can carry [`TextEquiv`] readings.

mod document;
mod page;
mod point;
mod region;
mod text;

pub use document::{Document, Metadata};
pub use page::{Border, Page};
pub use point::{format_points, parse_points, Point};
pub use region::{Region, RegionKind};
pub use text::{Glyph, TextEquiv, TextLine, Word};
