//! The vector family: one trait every coordinate type implements, plus a
//! tagged union for heterogeneous collections and operands.
//!
//! Purpose
//! - `Coordinates` is the conversion and arithmetic contract. Each family
//!   states how to rebuild itself from raw components, how to coerce another
//!   member into itself (`as_my_type`), and how to reach the canonical
//!   Cartesian form (`as_cartesian`).
//! - Default method bodies implement plain element-wise arithmetic on the
//!   receiver's own components. `PolarPoint` overrides them to route through
//!   Cartesian.
//!
//! Why Cartesian is the pivot
//! - Exactly one family is canonical; every other family converts to and from
//!   it, and cross-family arithmetic is defined in terms of it.

use std::borrow::Cow;
use std::fmt;

use nalgebra::DMatrix;

use crate::cartesian::{CartesianPoint, RoundedPoint};
use crate::cfg::ROUND_TRIP_EPS;
use crate::error::PointError;
use crate::polar::PolarPoint;
use crate::vector::{broadcast, zip_truncated, BinaryOp, Operand, Vector};

/// `+ - * /` for a family member (by value and by reference), each producing
/// `Result<Self, PointError>` through `Coordinates::element_wise`.
macro_rules! impl_arithmetic {
    ($ty:ty) => {
        impl_arithmetic!(@op $ty, Add, add);
        impl_arithmetic!(@op $ty, Sub, sub);
        impl_arithmetic!(@op $ty, Mul, mul);
        impl_arithmetic!(@op $ty, Div, div);
    };
    (@op $ty:ty, $trait:ident, $method:ident) => {
        impl<T: Into<$crate::vector::Operand>> std::ops::$trait<T> for $ty {
            type Output = Result<$ty, $crate::error::PointError>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $crate::family::Coordinates::element_wise(
                    &self,
                    rhs.into(),
                    $crate::vector::BinaryOp::$trait,
                )
            }
        }

        impl<'a, T: Into<$crate::vector::Operand>> std::ops::$trait<T> for &'a $ty {
            type Output = Result<$ty, $crate::error::PointError>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $crate::family::Coordinates::element_wise(
                    self,
                    rhs.into(),
                    $crate::vector::BinaryOp::$trait,
                )
            }
        }
    };
}

/// Conversion and arithmetic contract of the vector family.
pub trait Coordinates: Clone + Into<AnyPoint> {
    /// Raw component storage.
    fn vector(&self) -> &Vector;

    /// A value of the same concrete family (same rounding, if any) holding
    /// `components`.
    fn rebuild(&self, components: Vec<f64>) -> Self;

    /// Coerce `other` into this family. The single conversion chokepoint used
    /// by arithmetic broadcasting.
    fn as_my_type(&self, other: Operand) -> Result<Self, PointError>;

    /// Canonical Cartesian form.
    fn as_cartesian(&self) -> Result<CartesianPoint, PointError>;

    #[inline]
    fn components(&self) -> &[f64] {
        self.vector().as_slice()
    }

    #[inline]
    fn len(&self) -> usize {
        self.vector().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.vector().is_empty()
    }

    /// Raw result components of `self op other`, before rebuilding.
    fn combine(&self, other: Operand, op: BinaryOp) -> Result<Vec<f64>, PointError> {
        Ok(match other {
            Operand::Scalar(scalar) => broadcast(self.components(), scalar, op),
            Operand::Components(rhs) => zip_truncated(self.components(), &rhs, op),
            point @ Operand::Point(_) => {
                let rhs = self.as_my_type(point)?;
                zip_truncated(self.components(), rhs.components(), op)
            }
        })
    }

    fn element_wise(&self, other: Operand, op: BinaryOp) -> Result<Self, PointError> {
        Ok(self.rebuild(self.combine(other, op)?))
    }

    fn floor_div(&self, other: impl Into<Operand>) -> Result<Self, PointError> {
        self.element_wise(other.into(), BinaryOp::FloorDiv)
    }

    fn pow(&self, other: impl Into<Operand>) -> Result<Self, PointError> {
        self.element_wise(other.into(), BinaryOp::Pow)
    }

    fn map_components(&self, f: fn(f64) -> f64) -> Result<Self, PointError> {
        Ok(self.rebuild(self.components().iter().map(|&c| f(c)).collect()))
    }

    fn negated(&self) -> Result<Self, PointError> {
        self.map_components(|c| -c)
    }

    /// Truncate every component toward zero.
    fn trunc(&self) -> Result<Self, PointError> {
        self.map_components(f64::trunc)
    }

    /// Round every component to the nearest integer, ties to even.
    fn round(&self) -> Result<Self, PointError> {
        self.map_components(f64::round_ties_even)
    }

    /// Sum of pairwise products (truncated to the shorter length).
    fn dot(&self, other: impl Into<Operand>) -> Result<f64, PointError> {
        Ok(self.combine(other.into(), BinaryOp::Mul)?.iter().sum())
    }

    /// Apply the linear map `m` and rewrap as the same family.
    fn transform(&self, m: &DMatrix<f64>) -> Result<Self, PointError> {
        if m.ncols() != self.len() {
            return Err(PointError::Dimension {
                expected: m.ncols(),
                found: self.len(),
            });
        }
        let image = m * self.vector().as_dvector();
        Ok(self.rebuild(image.as_slice().to_vec()))
    }

    /// Component-wise comparison with the round-trip tolerance.
    fn is_close(&self, other: &Self) -> bool {
        self.is_close_eps(other, ROUND_TRIP_EPS)
    }

    fn is_close_eps(&self, other: &Self, eps: f64) -> bool {
        self.len() == other.len()
            && self
                .components()
                .iter()
                .zip(other.components())
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

/// Any member of the vector family.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyPoint {
    Vector(Vector),
    Cartesian(CartesianPoint),
    Rounded(RoundedPoint),
    Polar(PolarPoint),
}

macro_rules! dispatch {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            AnyPoint::Vector($p) => $body,
            AnyPoint::Cartesian($p) => $body,
            AnyPoint::Rounded($p) => $body,
            AnyPoint::Polar($p) => $body,
        }
    };
}

impl AnyPoint {
    /// Display name of the concrete family, e.g. `"PolarPoint"` or `"Rounded2Point"`.
    pub fn family_name(&self) -> Cow<'static, str> {
        match self {
            AnyPoint::Vector(_) => Cow::Borrowed("Vector"),
            AnyPoint::Cartesian(_) => Cow::Borrowed("CartesianPoint"),
            AnyPoint::Rounded(p) => Cow::Owned(p.rounding().name()),
            AnyPoint::Polar(_) => Cow::Borrowed("PolarPoint"),
        }
    }
}

impl Coordinates for AnyPoint {
    fn vector(&self) -> &Vector {
        dispatch!(self, p => p.vector())
    }

    fn rebuild(&self, components: Vec<f64>) -> Self {
        dispatch!(self, p => p.rebuild(components).into())
    }

    fn as_my_type(&self, other: Operand) -> Result<Self, PointError> {
        dispatch!(self, p => p.as_my_type(other).map(AnyPoint::from))
    }

    fn as_cartesian(&self) -> Result<CartesianPoint, PointError> {
        dispatch!(self, p => p.as_cartesian())
    }

    fn element_wise(&self, other: Operand, op: BinaryOp) -> Result<Self, PointError> {
        dispatch!(self, p => p.element_wise(other, op).map(AnyPoint::from))
    }

    fn map_components(&self, f: fn(f64) -> f64) -> Result<Self, PointError> {
        dispatch!(self, p => p.map_components(f).map(AnyPoint::from))
    }

    fn dot(&self, other: impl Into<Operand>) -> Result<f64, PointError> {
        dispatch!(self, p => p.dot(other))
    }

    fn transform(&self, m: &DMatrix<f64>) -> Result<Self, PointError> {
        dispatch!(self, p => p.transform(m).map(AnyPoint::from))
    }
}

impl_arithmetic!(AnyPoint);

impl fmt::Display for AnyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, p => fmt::Display::fmt(p, f))
    }
}

impl From<Vector> for AnyPoint {
    fn from(v: Vector) -> Self {
        AnyPoint::Vector(v)
    }
}

impl From<CartesianPoint> for AnyPoint {
    fn from(p: CartesianPoint) -> Self {
        AnyPoint::Cartesian(p)
    }
}

impl From<RoundedPoint> for AnyPoint {
    fn from(p: RoundedPoint) -> Self {
        AnyPoint::Rounded(p)
    }
}

impl From<PolarPoint> for AnyPoint {
    fn from(p: PolarPoint) -> Self {
        AnyPoint::Polar(p)
    }
}
