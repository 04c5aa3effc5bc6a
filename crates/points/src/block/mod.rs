//! Axis-aligned rectangles and viewport clipping.
//!
//! Purpose
//! - `Block` stores a normalized `(min_point, max_point)` pair, whatever the
//!   order or orientation of the corners it was built from.
//! - `Position` classifies a point against the rectangle, one bit per excluded
//!   half-plane, for the Cohen–Sutherland clipper in `clip`.
//!
//! Boundaries
//! - `surrounds` is half-open: the max edges are outside.
//! - `relative_point_position` is inclusive on both ends. The clipper relies on
//!   intersections landing exactly on the max edge counting as inside.
//!
//! Screen convention: `y` grows downward, so the min corner is `upper_left`.

mod clip;

pub use clip::{clip_path_to_viewport, clip_segment, ClipError};

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::cartesian::CartesianPoint;
use crate::error::PointError;
use crate::family::Coordinates;
use crate::path::Path;
use crate::vector::Operand;

bitflags! {
    /// Excluded half-planes a point lies in, relative to a `Block`.
    ///
    /// The empty set is `Position::INSIDE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Position: u8 {
        const BELOW_XMIN = 1;
        const ABOVE_XMAX = 1 << 1;
        const BELOW_YMIN = 1 << 2;
        const ABOVE_YMAX = 1 << 3;
        const BELOW_XMIN_BELOW_YMIN = Self::BELOW_XMIN.bits() | Self::BELOW_YMIN.bits();
        const BELOW_XMIN_ABOVE_YMAX = Self::BELOW_XMIN.bits() | Self::ABOVE_YMAX.bits();
        const ABOVE_XMAX_BELOW_YMIN = Self::ABOVE_XMAX.bits() | Self::BELOW_YMIN.bits();
        const ABOVE_XMAX_ABOVE_YMAX = Self::ABOVE_XMAX.bits() | Self::ABOVE_YMAX.bits();
    }
}

impl Position {
    /// Within both ranges.
    pub const INSIDE: Position = Position::empty();

    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// Normalized axis-aligned rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    min_point: CartesianPoint,
    max_point: CartesianPoint,
}

impl Block {
    /// Rectangle spanned by corners `(x1, y1)` and `(x2, y2)`, in any order.
    ///
    /// A NaN bound makes both bounds on that axis NaN.
    pub fn from_scalars(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x_min, x_max) = span(x1, x2);
        let (y_min, y_max) = span(y1, y2);
        Self {
            min_point: CartesianPoint::xy(x_min, y_min),
            max_point: CartesianPoint::xy(x_max, y_max),
        }
    }

    /// Rectangle from the origin to `(width, height)`.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::from_scalars(0.0, 0.0, width, height)
    }

    /// Rectangle from the origin to `corner` (converted to Cartesian first).
    pub fn from_point<P: Coordinates>(corner: &P) -> Result<Self, PointError> {
        let c = corner.as_cartesian()?;
        Ok(Self::from_size(c.x(), c.y()))
    }

    /// Rectangle spanned by two corners of any family.
    pub fn from_corners<P, Q>(a: &P, b: &Q) -> Result<Self, PointError>
    where
        P: Coordinates,
        Q: Coordinates,
    {
        let (a, b) = (a.as_cartesian()?, b.as_cartesian()?);
        Ok(Self::from_scalars(a.x(), a.y(), b.x(), b.y()))
    }

    /// One point: origin to that point. Two points: those corners.
    pub fn from_path(path: &Path) -> Result<Self, PointError> {
        match path.points() {
            [corner] => Self::from_point(corner),
            [a, b] => Self::from_corners(a, b),
            other => Err(PointError::PathLength {
                len: other.len(),
                value: path.to_string(),
            }),
        }
    }

    /// Dispatch on a loosely typed sequence.
    ///
    /// - All scalars: one value `v` spans `(0, 0)..(v, 0)`, two are a size,
    ///   four are two corners.
    /// - Otherwise one or two entries are read as corner points; raw
    ///   component rows are taken as Cartesian.
    pub fn from_values<I>(values: I) -> Result<Self, PointError>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let values: Vec<Operand> = values.into_iter().map(Into::into).collect();
        let scalars: Option<Vec<f64>> = values
            .iter()
            .map(|v| match v {
                Operand::Scalar(s) => Some(*s),
                _ => None,
            })
            .collect();
        match (scalars.as_deref(), values.as_slice()) {
            (Some(&[v]), _) => Ok(Self::from_size(v, 0.0)),
            (Some(&[w, h]), _) => Ok(Self::from_size(w, h)),
            (Some(&[x1, y1, x2, y2]), _) => Ok(Self::from_scalars(x1, y1, x2, y2)),
            (None, [corner]) => Self::from_point(&CartesianPoint::convert(corner.clone())?),
            (None, [a, b]) => Self::from_corners(
                &CartesianPoint::convert(a.clone())?,
                &CartesianPoint::convert(b.clone())?,
            ),
            _ => Err(PointError::NotABlock {
                value: format!("{values:?}"),
            }),
        }
    }

    #[inline]
    pub fn min_point(&self) -> &CartesianPoint {
        &self.min_point
    }

    #[inline]
    pub fn max_point(&self) -> &CartesianPoint {
        &self.max_point
    }

    #[inline]
    pub fn upper_left(&self) -> &CartesianPoint {
        &self.min_point
    }

    #[inline]
    pub fn lower_right(&self) -> &CartesianPoint {
        &self.max_point
    }

    pub fn upper_right(&self) -> CartesianPoint {
        CartesianPoint::xy(self.x_max(), self.y_min())
    }

    pub fn lower_left(&self) -> CartesianPoint {
        CartesianPoint::xy(self.x_min(), self.y_max())
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.min_point.y()
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.upper()
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.max_point.y()
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.lower()
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min_point.x()
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.left()
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.max_point.x()
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.right()
    }

    pub fn center(&self) -> CartesianPoint {
        CartesianPoint::xy(
            (self.x_max() - self.x_min()) / 2.0 + self.x_min(),
            (self.y_max() - self.y_min()) / 2.0 + self.y_min(),
        )
    }

    pub fn size(&self) -> CartesianPoint {
        CartesianPoint::xy(self.x_max() - self.x_min(), self.y_max() - self.y_min())
    }

    /// Half-open containment: `x_min <= x < x_max` and `y_min <= y < y_max`.
    pub fn surrounds<P: Coordinates>(&self, point: &P) -> Result<bool, PointError> {
        let p = point.as_cartesian()?;
        Ok((self.x_min() <= p.x() && p.x() < self.x_max())
            && (self.y_min() <= p.y() && p.y() < self.y_max()))
    }

    /// Inclusive classification against both ranges.
    pub fn relative_point_position(&self, point: &CartesianPoint) -> Position {
        self.classify(point.x(), point.y())
    }

    pub(crate) fn classify(&self, x: f64, y: f64) -> Position {
        let mut position = Position::INSIDE;
        if x < self.x_min() {
            position |= Position::BELOW_XMIN;
        } else if x > self.x_max() {
            position |= Position::ABOVE_XMAX;
        }
        if y < self.y_min() {
            position |= Position::BELOW_YMIN;
        } else if y > self.y_max() {
            position |= Position::ABOVE_YMAX;
        }
        position
    }

    /// The two corners as a path, min first.
    pub fn to_path(&self) -> Path {
        Path::new([self.min_point.clone(), self.max_point.clone()])
    }
}

fn span(a: f64, b: f64) -> (f64, f64) {
    if a.is_nan() || b.is_nan() {
        (f64::NAN, f64::NAN)
    } else {
        (a.min(b), a.max(b))
    }
}

impl FromStr for Block {
    type Err = PointError;

    /// Comma-delimited list of 1, 2 or 4 finite numbers, e.g. `"100, 0, 0, 100"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| match t.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(PointError::Parse {
                    input: t.to_string(),
                }),
            })
            .collect::<Result<Vec<f64>, _>>()?;
        Self::from_values(values)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.x_min(),
            self.y_min(),
            self.x_max(),
            self.y_max()
        )
    }
}

#[cfg(test)]
mod tests;
