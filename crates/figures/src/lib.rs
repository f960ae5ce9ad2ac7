//! Area and description of basic plane figures.
//!
//! Each figure (`Triangle`, `Circle`, `Rectangle`) is an immutable value
//! validated at construction. Areas are truncated to two decimals and
//! `info` renders a one-line summary for any `Figure`.
//!
//! API Policy
//! - Constructors are the only fallible entry points; once a figure exists
//!   its area computation cannot fail.
//! - The crate does no I/O and no logging. Callers decide what to do with a
//!   `FigureError`.

pub mod api;
mod cfg;
pub mod error;
pub mod figure;
pub mod info;
pub mod round;
pub mod shapes;
pub mod types;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::FigureError;
pub use figure::Figure;
pub use info::info;
pub use shapes::{Circle, Rectangle, Triangle};
pub use types::{Color, ParseColorError, Shape};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::FigureError;
    pub use crate::figure::Figure;
    pub use crate::info::info;
    pub use crate::shapes::{Circle, Rectangle, Triangle};
    pub use crate::types::{Color, Shape};
}
