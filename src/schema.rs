//! The containment schema: which element kinds may appear inside which,
//! and how child text joins into parent text.

use crate::model::RegionKind;

/// Parent side of a containment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Page,
    /// Any region kind
    Region,
    /// Text regions specifically
    TextRegion,
    TextLine,
    Word,
}

/// Child side of a containment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Region(RegionKind),
    TextLine,
    Word,
    Glyph,
}

/// One row of the containment schema.
///
/// `join` is the delimiter used when concatenating child text into the
/// parent's text; `None` means the children carry no text to concatenate.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyRule {
    pub parent: ParentKind,
    pub child: ChildKind,
    pub join: Option<&'static str>,
}

const fn region_rule(parent: ParentKind, kind: RegionKind) -> HierarchyRule {
    HierarchyRule {
        parent,
        child: ChildKind::Region(kind),
        join: None,
    }
}

const fn text_rule(parent: ParentKind, child: ChildKind, join: &'static str) -> HierarchyRule {
    HierarchyRule {
        parent,
        child,
        join: Some(join),
    }
}

/// The full containment schema, in checking order.
///
/// Pages and regions may nest any region kind; text flows only through
/// the text region, line, word and glyph levels. Glyphs are terminal.
pub static HIERARCHY: [HierarchyRule; 27] = [
    region_rule(ParentKind::Page, RegionKind::Advert),
    region_rule(ParentKind::Page, RegionKind::Chart),
    region_rule(ParentKind::Page, RegionKind::Chem),
    region_rule(ParentKind::Page, RegionKind::Graphic),
    region_rule(ParentKind::Page, RegionKind::LineDrawing),
    region_rule(ParentKind::Page, RegionKind::Maths),
    region_rule(ParentKind::Page, RegionKind::Music),
    region_rule(ParentKind::Page, RegionKind::Noise),
    region_rule(ParentKind::Page, RegionKind::Separator),
    region_rule(ParentKind::Page, RegionKind::Table),
    region_rule(ParentKind::Page, RegionKind::Text),
    region_rule(ParentKind::Page, RegionKind::Unknown),
    region_rule(ParentKind::Region, RegionKind::Advert),
    region_rule(ParentKind::Region, RegionKind::Chart),
    region_rule(ParentKind::Region, RegionKind::Chem),
    region_rule(ParentKind::Region, RegionKind::Graphic),
    region_rule(ParentKind::Region, RegionKind::LineDrawing),
    region_rule(ParentKind::Region, RegionKind::Maths),
    region_rule(ParentKind::Region, RegionKind::Music),
    region_rule(ParentKind::Region, RegionKind::Noise),
    region_rule(ParentKind::Region, RegionKind::Separator),
    region_rule(ParentKind::Region, RegionKind::Table),
    region_rule(ParentKind::Region, RegionKind::Text),
    region_rule(ParentKind::Region, RegionKind::Unknown),
    text_rule(ParentKind::TextRegion, ChildKind::TextLine, "\n"),
    text_rule(ParentKind::TextLine, ChildKind::Word, " "),
    text_rule(ParentKind::Word, ChildKind::Glyph, ""),
];

/// Rules whose parent matches exactly.
pub fn rules_for(parent: ParentKind) -> impl Iterator<Item = &'static HierarchyRule> {
    HIERARCHY.iter().filter(move |rule| rule.parent == parent)
}

/// Rules applying to a region of the given kind.
///
/// Every region may nest sub-regions; text regions additionally
/// contain text lines.
pub fn region_rules(kind: RegionKind) -> impl Iterator<Item = &'static HierarchyRule> {
    HIERARCHY.iter().filter(move |rule| {
        rule.parent == ParentKind::Region
            || (kind == RegionKind::Text && rule.parent == ParentKind::TextRegion)
    })
}
