//! Construction and conversion errors shared by every point family.

use std::fmt;

/// Errors surfaced while building or converting vectors, points, paths and blocks.
#[derive(Clone, Debug, PartialEq)]
pub enum PointError {
    /// A path element (or block corner) is not a member of the vector family.
    NotAVector { value: String },
    /// No mapping between two coordinate families for this many components.
    Conversion {
        family: &'static str,
        len: usize,
        value: String,
    },
    /// A matrix transform does not match the vector length.
    Dimension { expected: usize, found: usize },
    /// A block can only be built from a path of one or two points.
    PathLength { len: usize, value: String },
    /// The input shape does not describe a block.
    NotABlock { value: String },
    /// A textual component could not be read as a number.
    Parse { input: String },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NotAVector { value } => {
                write!(f, "path members must be vectors, {value} is not")
            }
            PointError::Conversion { family, len, value } => write!(
                f,
                "no conversion defined for a {family} with {len} components: {value}"
            ),
            PointError::Dimension { expected, found } => write!(
                f,
                "transform expects {expected} components, vector has {found}"
            ),
            PointError::PathLength { len, value } => write!(
                f,
                "a block needs a path of 1 or 2 points, got {len}: {value}"
            ),
            PointError::NotABlock { value } => {
                write!(f, "{value} cannot be interpreted as a block")
            }
            PointError::Parse { input } => write!(f, "{input:?} is not a number"),
        }
    }
}

impl std::error::Error for PointError {}
