//! Curated surface for callers that want everything in one import.
//!
//! Mirrors the crate root re-exports plus the helpers that are otherwise
//! reached through their modules.

pub use crate::error::FigureError;
pub use crate::figure::Figure;
pub use crate::info::info;
pub use crate::round::rounded_area;
pub use crate::shapes::{Circle, Rectangle, Triangle};
pub use crate::types::{Color, ParseColorError, Shape};
pub use crate::validate::{validate_positive, validate_triangle_sides};
