//! Ordered sequence of points (a polyline or trajectory).
//!
//! Broadcasting
//! - A scalar or a single point is applied to every member.
//! - Another path, or any sequence of points or component rows, is zipped
//!   member by member and the result is as long as the shorter side.
//!
//! Each member keeps its own family: the member-level operation is the
//! member's `element_wise`, so a Cartesian member converts a polar operand to
//! Cartesian, a polar member routes through Cartesian and comes back polar.

use std::fmt;
use std::ops::Index;

use crate::cartesian::{CartesianPoint, RoundedPoint};
use crate::error::PointError;
use crate::family::{AnyPoint, Coordinates};
use crate::polar::PolarPoint;
use crate::vector::{BinaryOp, Operand, Vector};

/// Ordered sequence of vector-family members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<AnyPoint>,
}

impl Path {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<AnyPoint>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from loosely typed operands; every member must be a point.
    pub fn try_from_operands<I>(operands: I) -> Result<Self, PointError>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        operands
            .into_iter()
            .map(|o| match o.into() {
                Operand::Point(p) => Ok(p),
                Operand::Scalar(value) => Err(PointError::NotAVector {
                    value: value.to_string(),
                }),
                Operand::Components(values) => Err(PointError::NotAVector {
                    value: format!("{values:?}"),
                }),
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&AnyPoint> {
        self.points.get(index)
    }

    #[inline]
    pub fn points(&self) -> &[AnyPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyPoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<AnyPoint> {
        self.points
    }

    /// `member op other` for every member, broadcasting or zipping `other`.
    pub fn element_wise(
        &self,
        other: impl Into<PathOperand>,
        op: BinaryOp,
    ) -> Result<Path, PointError> {
        match other.into() {
            PathOperand::Scalar(value) => self.broadcast(Operand::Scalar(value), op),
            PathOperand::Point(point) => self.broadcast(Operand::Point(point), op),
            PathOperand::Sequence(rhs) => self
                .points
                .iter()
                .zip(rhs)
                .map(|(p, o)| p.element_wise(o, op))
                .collect(),
        }
    }

    fn broadcast(&self, operand: Operand, op: BinaryOp) -> Result<Path, PointError> {
        self.points
            .iter()
            .map(|p| p.element_wise(operand.clone(), op))
            .collect()
    }

    pub fn floor_div(&self, other: impl Into<PathOperand>) -> Result<Path, PointError> {
        self.element_wise(other, BinaryOp::FloorDiv)
    }

    pub fn pow(&self, other: impl Into<PathOperand>) -> Result<Path, PointError> {
        self.element_wise(other, BinaryOp::Pow)
    }
}

macro_rules! impl_path_arithmetic {
    ($($trait:ident, $method:ident);*) => {
        $(
            impl<T: Into<PathOperand>> std::ops::$trait<T> for Path {
                type Output = Result<Path, PointError>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    self.element_wise(rhs, BinaryOp::$trait)
                }
            }

            impl<'a, T: Into<PathOperand>> std::ops::$trait<T> for &'a Path {
                type Output = Result<Path, PointError>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    self.element_wise(rhs, BinaryOp::$trait)
                }
            }
        )*
    };
}

impl_path_arithmetic!(Add, add; Sub, sub; Mul, mul; Div, div);

impl Index<usize> for Path {
    type Output = AnyPoint;

    fn index(&self, index: usize) -> &AnyPoint {
        &self.points[index]
    }
}

impl<P: Into<AnyPoint>> FromIterator<P> for Path {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Path {
    type Item = AnyPoint;
    type IntoIter = std::vec::IntoIter<AnyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a AnyPoint;
    type IntoIter = std::slice::Iter<'a, AnyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

/// Other side of a path operation.
#[derive(Clone, Debug, PartialEq)]
pub enum PathOperand {
    /// Applied to every member.
    Scalar(f64),
    /// Applied to every member.
    Point(AnyPoint),
    /// Zipped with the members; the shorter side wins.
    Sequence(Vec<Operand>),
}

impl From<f64> for PathOperand {
    fn from(value: f64) -> Self {
        PathOperand::Scalar(value)
    }
}

impl From<i32> for PathOperand {
    fn from(value: i32) -> Self {
        PathOperand::Scalar(f64::from(value))
    }
}

impl From<Path> for PathOperand {
    fn from(path: Path) -> Self {
        PathOperand::Sequence(path.points.into_iter().map(Operand::Point).collect())
    }
}

impl From<&Path> for PathOperand {
    fn from(path: &Path) -> Self {
        PathOperand::Sequence(path.points.iter().map(Operand::from).collect())
    }
}

impl From<Vec<Operand>> for PathOperand {
    fn from(operands: Vec<Operand>) -> Self {
        PathOperand::Sequence(operands)
    }
}

impl<const N: usize> From<Vec<[f64; N]>> for PathOperand {
    fn from(rows: Vec<[f64; N]>) -> Self {
        PathOperand::Sequence(rows.into_iter().map(Operand::from).collect())
    }
}

impl From<Vec<Vec<f64>>> for PathOperand {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        PathOperand::Sequence(rows.into_iter().map(Operand::from).collect())
    }
}

macro_rules! path_operand_from_member {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PathOperand {
                fn from(point: $ty) -> Self {
                    PathOperand::Point(point.into())
                }
            }

            impl From<&$ty> for PathOperand {
                fn from(point: &$ty) -> Self {
                    PathOperand::Point(point.clone().into())
                }
            }

            impl From<Vec<$ty>> for PathOperand {
                fn from(points: Vec<$ty>) -> Self {
                    PathOperand::Sequence(points.into_iter().map(Operand::from).collect())
                }
            }
        )*
    };
}

path_operand_from_member!(AnyPoint, Vector, CartesianPoint, RoundedPoint, PolarPoint);
