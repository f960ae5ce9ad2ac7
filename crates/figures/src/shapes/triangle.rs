use crate::error::FigureError;
use crate::figure::Figure;
use crate::round::rounded_area;
use crate::types::{Color, Shape};
use crate::validate::{validate_positive, validate_triangle_sides};

/// Triangle given by its three side lengths.
///
/// Invariants:
/// - All sides `> 0`.
/// - Strict triangle inequality: longest side `<` sum of the other two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    color: Color,
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Positivity is checked before the inequality, so `(-1, 1, 1)` reports
    /// a non-positive side rather than an invalid triangle.
    pub fn new(color: Color, a: f64, b: f64, c: f64) -> Result<Self, FigureError> {
        validate_positive(
            &[a, b, c],
            FigureError::NonPositiveDimension {
                shape: Shape::Triangle,
            },
        )?;
        validate_triangle_sides(a, b, c)?;
        Ok(Self { color, a, b, c })
    }

    #[inline]
    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Figure for Triangle {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Triangle
    }
    #[inline]
    fn color(&self) -> Color {
        self.color
    }
    /// Heron's formula; the radicand is non-negative by the strict inequality.
    fn area(&self) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        let p = (a + b + c) / 2.0;
        rounded_area((p * (p - a) * (p - b) * (p - c)).sqrt())
    }
}
