//! Immutable vector, point and polar-point value types with arithmetic,
//! coordinate conversion, axis-aligned rectangles and viewport clipping.
//!
//! Layout
//! - `vector`: the numeric tuple every family is built on, plus operands.
//! - `family`: the `Coordinates` contract and the `AnyPoint` tagged union.
//! - `cartesian` / `polar`: the two coordinate families; Cartesian is the
//!   canonical pivot every conversion and cross-family operation goes through.
//! - `path`: sequences of points with broadcast arithmetic.
//! - `block`: normalized rectangles, region bit-flags, Cohen–Sutherland.
//! - `iter`: linear and per-coordinate interpolation between two points.
//!
//! Every operation returns a new value; arithmetic that may need a conversion
//! returns `Result<_, PointError>`.

#[macro_use]
mod family;

pub mod block;
pub mod cartesian;
mod cfg;
pub mod error;
pub mod iter;
pub mod path;
pub mod polar;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use block::{clip_path_to_viewport, clip_segment, Block, ClipError, Position};
pub use cartesian::{CartesianPoint, IntPoint, RoundedPoint, Rounding};
pub use error::PointError;
pub use family::{AnyPoint, Coordinates};
pub use path::{Path, PathOperand};
pub use polar::PolarPoint;
pub use vector::{BinaryOp, Operand, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::block::{clip_path_to_viewport, Block, ClipError, Position};
    pub use crate::cartesian::{CartesianPoint, IntPoint, RoundedPoint, Rounding};
    pub use crate::error::PointError;
    pub use crate::family::{AnyPoint, Coordinates};
    pub use crate::iter::{
        iter_linear_steps_between, iter_linear_steps_between_into, iter_natural_steps_between,
        iter_natural_steps_between_into,
    };
    pub use crate::path::Path;
    pub use crate::polar::PolarPoint;
    pub use crate::vector::Vector;
}
