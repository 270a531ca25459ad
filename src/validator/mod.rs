//! The consistency validator.
//!
//! [`PageValidator`] walks the page tree top-down. At every element it
//! checks the element's own outline, each child's outline and containment,
//! the baseline of text lines, and whether the element's text equals the
//! concatenation of its children's texts. Findings are collected in a
//! [`ValidationReport`]; with [`Strictness::Fix`] textual mismatches are
//! repaired in place instead of reported.

mod options;

pub use options::{Strictness, ValidatorOptions};

use geo::Polygon;

use crate::geometry;
use crate::model::{Document, Point, Region, TextEquiv, TextLine, Word};
use crate::report::{ValidationError, ValidationReport};
use crate::schema::{region_rules, rules_for, ChildKind, ParentKind};
use crate::text;

/// Validator for page-layout documents.
#[derive(Debug, Clone, Default)]
pub struct PageValidator {
    options: ValidatorOptions,
}

impl PageValidator {
    /// Create a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// The options this validator runs with.
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate a document, collecting findings into a fresh report.
    ///
    /// The document is only modified under [`Strictness::Fix`], where
    /// inconsistent parent text is overwritten by the concatenation of
    /// its children's texts.
    pub fn validate(&self, document: &mut Document) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.validate_into(document, &mut report);
        report
    }

    /// Validate a document into an existing report.
    ///
    /// Returns `true` when the run added no findings, i.e. repaired or
    /// tolerated mismatches leave the result `true`.
    pub fn validate_into(&self, document: &mut Document, report: &mut ValidationReport) -> bool {
        let mut walk = Walk {
            options: self.options,
            report,
        };
        walk.document(document)
    }
}

/// Reference outline a child is checked against.
struct Frame {
    tag: &'static str,
    points: Vec<Point>,
    polygon: Polygon<f64>,
}

struct Walk<'a> {
    options: ValidatorOptions,
    report: &'a mut ValidationReport,
}

impl Walk<'_> {
    fn document(&mut self, document: &mut Document) -> bool {
        let id = document.id.clone().unwrap_or_default();
        log::debug!("Validating Page {}", id);
        let mut consistent = true;

        // the page is checked against its printspace border
        let border = document.page.border.as_ref().map(|b| b.coords.clone());
        let frame = self.frame("Page", &id, border.as_deref(), &mut consistent);

        for rule in rules_for(ParentKind::Page) {
            if let ChildKind::Region(kind) = rule.child {
                for region in document.page.regions.iter_mut() {
                    if region.kind != kind {
                        continue;
                    }
                    consistent &= self.region(region);
                    self.child_coords(
                        frame.as_ref(),
                        region.kind.tag(),
                        &region.id,
                        region.coords.as_deref(),
                        &mut consistent,
                    );
                }
            }
        }
        consistent
    }

    fn region(&mut self, region: &mut Region) -> bool {
        let tag = region.kind.tag();
        let id = region.id.clone();
        log::debug!("Validating {} {}", tag, id);
        let mut consistent = true;
        let frame = self.frame(tag, &id, region.coords.as_deref(), &mut consistent);

        for rule in region_rules(region.kind) {
            match rule.child {
                ChildKind::Region(kind) => {
                    for child in region.regions.iter_mut() {
                        if child.kind != kind {
                            continue;
                        }
                        consistent &= self.region(child);
                        self.child_coords(
                            frame.as_ref(),
                            child.kind.tag(),
                            &child.id,
                            child.coords.as_deref(),
                            &mut consistent,
                        );
                    }
                }
                ChildKind::TextLine => {
                    for line in region.lines.iter_mut() {
                        consistent &= self.line(line);
                        self.child_coords(
                            frame.as_ref(),
                            "TextLine",
                            &line.id,
                            line.coords.as_deref(),
                            &mut consistent,
                        );
                    }
                    if let Some(delimiter) = rule.join {
                        let concatenated = text::concatenate(
                            region.lines.iter().map(|l| l.text_equivs.as_slice()),
                            delimiter,
                            self.options.strategy,
                        );
                        self.text_check(
                            tag,
                            &id,
                            concatenated,
                            &mut region.text_equivs,
                            &mut consistent,
                        );
                    }
                }
                ChildKind::Word | ChildKind::Glyph => {}
            }
        }
        consistent
    }

    fn line(&mut self, line: &mut TextLine) -> bool {
        let id = line.id.clone();
        log::debug!("Validating TextLine {}", id);
        let mut consistent = true;
        let frame = self.frame("TextLine", &id, line.coords.as_deref(), &mut consistent);

        for rule in rules_for(ParentKind::TextLine) {
            for word in line.words.iter_mut() {
                consistent &= self.word(word);
                self.child_coords(
                    frame.as_ref(),
                    "Word",
                    &word.id,
                    word.coords.as_deref(),
                    &mut consistent,
                );
            }
            if self.options.check_baseline {
                if let Some(baseline) = line.baseline.clone() {
                    self.baseline_checks(frame.as_ref(), &id, &baseline, &mut consistent);
                }
            }
            if let Some(delimiter) = rule.join {
                let concatenated = text::concatenate(
                    line.words.iter().map(|w| w.text_equivs.as_slice()),
                    delimiter,
                    self.options.strategy,
                );
                self.text_check(
                    "TextLine",
                    &id,
                    concatenated,
                    &mut line.text_equivs,
                    &mut consistent,
                );
            }
        }
        consistent
    }

    fn word(&mut self, word: &mut Word) -> bool {
        let id = word.id.clone();
        log::debug!("Validating Word {}", id);
        let mut consistent = true;
        let frame = self.frame("Word", &id, word.coords.as_deref(), &mut consistent);

        for rule in rules_for(ParentKind::Word) {
            // glyphs are terminal, only their coords are checked
            for glyph in word.glyphs.iter() {
                self.child_coords(
                    frame.as_ref(),
                    "Glyph",
                    &glyph.id,
                    glyph.coords.as_deref(),
                    &mut consistent,
                );
            }
            if let Some(delimiter) = rule.join {
                let concatenated = text::concatenate(
                    word.glyphs.iter().map(|g| g.text_equivs.as_slice()),
                    delimiter,
                    self.options.strategy,
                );
                self.text_check(
                    "Word",
                    &id,
                    concatenated,
                    &mut word.text_equivs,
                    &mut consistent,
                );
            }
        }
        consistent
    }

    /// Build the element's own reference frame.
    ///
    /// An element without an outline yields no frame; an unusable outline
    /// is reported and likewise yields no frame, so containment checks
    /// against it are skipped rather than run on broken geometry.
    fn frame(
        &mut self,
        tag: &'static str,
        id: &str,
        coords: Option<&[Point]>,
        consistent: &mut bool,
    ) -> Option<Frame> {
        if !self.options.check_coords && !self.options.check_baseline {
            return None;
        }
        let points = coords?;
        if !geometry::validate_polygon(points) {
            self.report.add_error(ValidationError::CoordinateValidity {
                tag,
                id: id.to_string(),
                points: points.to_vec(),
            });
            log::info!("Invalid coords of {} {}", tag, id);
            *consistent = false;
            return None;
        }
        Some(Frame {
            tag,
            points: points.to_vec(),
            polygon: geometry::to_polygon(points),
        })
    }

    /// Check a child's outline for validity and containment in the frame.
    fn child_coords(
        &mut self,
        frame: Option<&Frame>,
        child_tag: &'static str,
        child_id: &str,
        coords: Option<&[Point]>,
        consistent: &mut bool,
    ) {
        if !self.options.check_coords {
            return;
        }
        let (frame, points) = match (frame, coords) {
            (Some(frame), Some(points)) => (frame, points),
            _ => return,
        };
        if !geometry::validate_polygon(points) {
            self.report.add_error(ValidationError::CoordinateValidity {
                tag: child_tag,
                id: child_id.to_string(),
                points: points.to_vec(),
            });
            log::info!("Invalid coords of {} {}", child_tag, child_id);
            *consistent = false;
        } else if !geometry::polygon_within(&geometry::to_polygon(points), &frame.polygon) {
            self.report.add_error(ValidationError::CoordinateConsistency {
                tag: frame.tag,
                id: child_id.to_string(),
                outer: frame.points.clone(),
                inner: points.to_vec(),
            });
            log::info!("Inconsistent coords of {} {}", child_tag, child_id);
            *consistent = false;
        }
    }

    /// Check a text line's baseline for validity and containment.
    fn baseline_checks(
        &mut self,
        frame: Option<&Frame>,
        id: &str,
        baseline: &[Point],
        consistent: &mut bool,
    ) {
        if !geometry::validate_line(baseline) {
            self.report.add_error(ValidationError::CoordinateValidity {
                tag: "Baseline",
                id: id.to_string(),
                points: baseline.to_vec(),
            });
            log::info!("Invalid coords of baseline in {}", id);
            *consistent = false;
        } else if let Some(frame) = frame {
            if !geometry::line_within(&geometry::to_linestring(baseline), &frame.polygon) {
                self.report.add_error(ValidationError::CoordinateConsistency {
                    tag: "Baseline",
                    id: id.to_string(),
                    outer: frame.points.clone(),
                    inner: baseline.to_vec(),
                });
                log::info!("Inconsistent coords of baseline in TextLine {}", id);
                *consistent = false;
            }
        }
    }

    /// Compare the element's text against the concatenation of its
    /// children's texts, reporting or repairing a mismatch.
    ///
    /// The check only applies when both sides are non-empty.
    fn text_check(
        &mut self,
        tag: &'static str,
        id: &str,
        concatenated: String,
        equivs: &mut Vec<TextEquiv>,
        consistent: &mut bool,
    ) {
        if self.options.strictness == Strictness::Off {
            return;
        }
        let actual = text::select_text(equivs, self.options.strategy).to_string();
        if concatenated.is_empty() || actual.is_empty() || concatenated == actual {
            return;
        }
        if self.options.strictness == Strictness::Fix {
            log::info!("Repaired text of {} {}", tag, id);
            text::set_text(equivs, &concatenated, self.options.strategy);
            return;
        }
        // strict reports every mismatch, lax only those beyond whitespace
        if self.options.strictness == Strictness::Strict
            || !text::compare_without_whitespace(&concatenated, &actual)
        {
            log::info!("Inconsistent text of {} {}", tag, id);
            self.report.add_error(ValidationError::TextConsistency {
                tag,
                id: id.to_string(),
                actual,
                expected: concatenated,
            });
            *consistent = false;
        }
    }
}
