//! Construction failures.

use std::fmt;

use crate::types::Shape;

/// Errors surfaced by figure constructors.
///
/// Area computation never fails; every invariant is enforced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureError {
    /// A side, radius, width or height was `<= 0`. Does not say which one.
    NonPositiveDimension { shape: Shape },
    /// Longest side `>=` sum of the other two (equality included).
    InvalidTriangle,
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureError::NonPositiveDimension { shape } => match shape {
                Shape::Triangle => write!(
                    f,
                    "The length of each side of the triangle must be greater than zero"
                ),
                Shape::Circle => write!(f, "The radius of the circle must be greater than zero"),
                Shape::Rectangle => write!(
                    f,
                    "The length of each side of the rectangle must be greater than zero"
                ),
            },
            FigureError::InvalidTriangle => write!(
                f,
                "The longest side of a triangle cannot be greater than \
                 the sum of the lengths of the other two sides"
            ),
        }
    }
}

impl std::error::Error for FigureError {}
