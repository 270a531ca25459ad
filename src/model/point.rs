//! 2-D points and the space-separated points string convention.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2-D coordinate on the page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (grows rightwards)
    pub x: f64,

    /// Vertical position (grows downwards)
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Parse a points string of the form `"x1,y1 x2,y2 …"` into points.
///
/// This is the interchange convention page-layout formats use for polygon
/// outlines and baselines. Whitespace between pairs is flexible; an empty
/// string yields an empty point list.
///
/// # Example
///
/// ```
/// use pagecheck::model::parse_points;
///
/// let points = parse_points("0,0 100,0 100,50 0,50").unwrap();
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[2].y, 50.0);
/// ```
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for pair in s.split_whitespace() {
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| Error::InvalidPoints(format!("missing comma in '{pair}'")))?;
        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidPoints(format!("bad x coordinate in '{pair}'")))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidPoints(format!("bad y coordinate in '{pair}'")))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Render points back into the `"x1,y1 x2,y2 …"` string form.
///
/// Integral coordinates print without a fractional part, so round-tripping
/// a typical pixel polygon reproduces the input exactly.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", trim_float(p.x), trim_float(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
