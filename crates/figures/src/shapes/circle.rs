use std::f64::consts::PI;

use crate::error::FigureError;
use crate::figure::Figure;
use crate::round::rounded_area;
use crate::types::{Color, Shape};
use crate::validate::validate_positive;

/// Circle given by its radius (`> 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    color: Color,
    radius: f64,
}

impl Circle {
    pub fn new(color: Color, radius: f64) -> Result<Self, FigureError> {
        validate_positive(
            &[radius],
            FigureError::NonPositiveDimension {
                shape: Shape::Circle,
            },
        )?;
        Ok(Self { color, radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Figure for Circle {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Circle
    }
    #[inline]
    fn color(&self) -> Color {
        self.color
    }
    fn area(&self) -> f64 {
        rounded_area(PI * self.radius.powi(2))
    }
}
