//! The capability shared by all figures.

use crate::types::{Color, Shape};

/// A value exposing a shape tag, a color tag and an area.
///
/// Object safe: `info` accepts `&dyn Figure` as well as concrete types.
pub trait Figure {
    fn shape(&self) -> Shape;
    fn color(&self) -> Color;
    /// Area truncated to two decimals. Never fails.
    fn area(&self) -> f64;
}

impl<F: Figure + ?Sized> Figure for &F {
    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
    #[inline]
    fn color(&self) -> Color {
        (**self).color()
    }
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<F: Figure + ?Sized> Figure for Box<F> {
    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
    #[inline]
    fn color(&self) -> Color {
        (**self).color()
    }
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
}
