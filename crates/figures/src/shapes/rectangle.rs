use crate::error::FigureError;
use crate::figure::Figure;
use crate::round::rounded_area;
use crate::types::{Color, Shape};
use crate::validate::validate_positive;

/// Axis-free rectangle given by width and height (both `> 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    color: Color,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// A single error covers both dimensions; it does not say which failed.
    pub fn new(color: Color, width: f64, height: f64) -> Result<Self, FigureError> {
        validate_positive(
            &[width, height],
            FigureError::NonPositiveDimension {
                shape: Shape::Rectangle,
            },
        )?;
        Ok(Self {
            color,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Figure for Rectangle {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Rectangle
    }
    #[inline]
    fn color(&self) -> Color {
        self.color
    }
    fn area(&self) -> f64 {
        rounded_area(self.width * self.height)
    }
}
