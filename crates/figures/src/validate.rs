//! Precondition checks shared by the figure constructors.

use crate::error::FigureError;

/// Fail with `err` if any value is `<= 0` (zero is rejected).
///
/// NaN compares false against `<= 0` and therefore passes; inputs are
/// expected to be finite.
pub fn validate_positive(values: &[f64], err: FigureError) -> Result<(), FigureError> {
    if values.iter().any(|&v| v <= 0.0) {
        return Err(err);
    }
    Ok(())
}

/// Strict triangle inequality on sides already known to be positive.
///
/// Sorted `x <= y <= z`; fails with `InvalidTriangle` when `z >= x + y`,
/// so a flat triangle (`z == x + y`) is rejected too.
pub fn validate_triangle_sides(a: f64, b: f64, c: f64) -> Result<(), FigureError> {
    let mut sides = [a, b, c];
    sides.sort_by(|p, q| p.partial_cmp(q).unwrap_or(std::cmp::Ordering::Equal));
    let [x, y, z] = sides;
    if z >= x + y {
        return Err(FigureError::InvalidTriangle);
    }
    Ok(())
}
