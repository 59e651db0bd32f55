//! Reading points from comma-delimited text: one point per line, one decimal real per field.

use crate::{memory::*, KMeansError, Point};
use std::{fs, path::Path};

/// Parse all points of **dimension** coordinates from the given text.
///
/// Blank lines are skipped and whitespace around fields is ignored. A row with a differing
/// amount of fields, or a field that is not a finite real number (`NaN`, `inf`), aborts parsing with the
/// (1-based) line number of the offending row.
pub fn parse_points<T: Primitive>(text: &str, dimension: usize) -> Result<Vec<Point<T>>, KMeansError> {
    let mut points = try_with_capacity(text.lines().count())?;
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut coordinates = try_with_capacity(dimension)?;
        for field in line.split(',').map(str::trim) {
            let value = field.parse::<T>().ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| KMeansError::Parse { line: idx + 1, field: field.to_owned() })?;
            coordinates.push(value);
        }
        if coordinates.len() != dimension {
            return Err(KMeansError::RowLength { line: idx + 1, expected: dimension, found: coordinates.len() });
        }
        points.push(Point::from_vec(coordinates));
    }
    log::debug!("parsed {} points of dimension {}", points.len(), dimension);
    Ok(points)
}

/// Read and parse the file at **path**, see [`parse_points`].
pub fn read_points<T: Primitive, P: AsRef<Path>>(path: P, dimension: usize) -> Result<Vec<Point<T>>, KMeansError> {
    let text = fs::read_to_string(path.as_ref())?;
    log::info!("loading points from {}", path.as_ref().display());
    parse_points(&text, dimension)
}
