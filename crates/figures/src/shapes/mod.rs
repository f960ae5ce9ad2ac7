//! Figure variants.
//!
//! Each variant owns its dimensions, validates them in `new`, and implements
//! `Figure` independently; there is no shared base state.

mod circle;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::Triangle;
