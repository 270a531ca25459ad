//! Validation findings and the report collecting them.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::{format_points, Point};

/// A single violation found during validation.
///
/// The `tag` names the element level the finding is filed under and the
/// `id` the element concerned. Containment findings carry the parent's
/// tag with the child's id, matching how they are checked.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// An element's text does not equal the concatenation of its
    /// children's texts.
    #[error("INCONSISTENCY in {tag} ID '{id}': text results '{actual}' != concatenated '{expected}'")]
    TextConsistency {
        tag: &'static str,
        id: String,
        actual: String,
        expected: String,
    },

    /// An element's outline is not contained in its parent's outline.
    #[error("INCONSISTENCY in {tag} ID '{id}': coords '{}' not within parent coords '{}'", format_points(.inner), format_points(.outer))]
    CoordinateConsistency {
        tag: &'static str,
        id: String,
        outer: Vec<Point>,
        inner: Vec<Point>,
    },

    /// An element's outline or baseline is unusable as geometry.
    #[error("INVALIDITY in {tag} ID '{id}': coords '{}'", format_points(.points))]
    CoordinateValidity {
        tag: &'static str,
        id: String,
        points: Vec<Point>,
    },
}

impl ValidationError {
    /// Element level the finding is filed under.
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationError::TextConsistency { tag, .. } => tag,
            ValidationError::CoordinateConsistency { tag, .. } => tag,
            ValidationError::CoordinateValidity { tag, .. } => tag,
        }
    }

    /// Identifier of the element concerned.
    pub fn id(&self) -> &str {
        match self {
            ValidationError::TextConsistency { id, .. } => id,
            ValidationError::CoordinateConsistency { id, .. } => id,
            ValidationError::CoordinateValidity { id, .. } => id,
        }
    }
}

/// Collected findings of one validation run.
///
/// A fresh report is valid; every finding added makes it invalid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// File a finding.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// All findings, in the order they were filed.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether no findings were filed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report holds no findings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Move all findings of `other` into this report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "OK");
        }
        write!(f, "INVALID[ {} errors ]", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(offset: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(offset, offset),
            Point::new(offset + size, offset),
            Point::new(offset + size, offset + size),
            Point::new(offset, offset + size),
        ]
    }

    #[test]
    fn test_text_consistency_message() {
        let error = ValidationError::TextConsistency {
            tag: "TextLine",
            id: "l1".to_string(),
            actual: "fo o".to_string(),
            expected: "foo o".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "INCONSISTENCY in TextLine ID 'l1': text results 'fo o' != concatenated 'foo o'"
        );
    }

    #[test]
    fn test_coordinate_consistency_message() {
        let error = ValidationError::CoordinateConsistency {
            tag: "TextLine",
            id: "w1".to_string(),
            outer: square(0.0, 100.0),
            inner: square(50.0, 100.0),
        };
        assert_eq!(
            error.to_string(),
            "INCONSISTENCY in TextLine ID 'w1': coords '50,50 150,50 150,150 50,150' \
             not within parent coords '0,0 100,0 100,100 0,100'"
        );
    }

    #[test]
    fn test_coordinate_validity_message() {
        let error = ValidationError::CoordinateValidity {
            tag: "Word",
            id: "w1".to_string(),
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        };
        assert_eq!(
            error.to_string(),
            "INVALIDITY in Word ID 'w1': coords '0,0 10,10'"
        );
    }

    #[test]
    fn test_report_collects_findings() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "OK");

        report.add_error(ValidationError::CoordinateValidity {
            tag: "Word",
            id: "w1".to_string(),
            points: Vec::new(),
        });
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
        assert!(report.to_string().starts_with("INVALID[ 1 errors ]"));
    }

    #[test]
    fn test_report_merge() {
        let mut first = ValidationReport::new();
        first.add_error(ValidationError::CoordinateValidity {
            tag: "Word",
            id: "w1".to_string(),
            points: Vec::new(),
        });
        let mut second = ValidationReport::new();
        second.add_error(ValidationError::CoordinateValidity {
            tag: "Word",
            id: "w2".to_string(),
            points: Vec::new(),
        });
        first.merge(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.errors()[1].id(), "w2");
    }

    #[test]
    fn test_findings_serialize_with_kind() {
        let error = ValidationError::CoordinateValidity {
            tag: "Word",
            id: "w1".to_string(),
            points: vec![Point::new(1.0, 2.0)],
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains(r#""kind":"coordinate_validity""#));
        assert!(json.contains(r#""tag":"Word""#));
    }
}
