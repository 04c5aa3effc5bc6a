//! Numeric tuple vector.
//!
//! Purpose
//! - Fixed-length, immutable sequence of `f64` components with element-wise
//!   arithmetic against scalars, other family members, or raw sequences.
//! - Shared storage for every point family (`CartesianPoint`, `RoundedPoint`,
//!   `PolarPoint`); the families differ only in how they interpret and convert
//!   components.
//!
//! Conventions
//! - Scalars broadcast to every component.
//! - Sequences zip and truncate to the shorter length (no padding).
//! - Every operation returns a new value.

mod operand;

pub use operand::{BinaryOp, Operand};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use nalgebra::DVector;

use crate::cartesian::CartesianPoint;
use crate::error::PointError;
use crate::family::{AnyPoint, Coordinates};

/// Immutable ordered sequence of scalars; the base of the point family.
///
/// The base vector attaches no meaning to its components: converting it to a
/// point family reinterprets the raw values.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coords: DVector<f64>,
}

impl Vector {
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            coords: DVector::from_vec(values.into_iter().collect()),
        }
    }

    #[inline]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            coords: DVector::from_column_slice(values),
        }
    }

    /// Build from any family member (or raw sequence) without reinterpreting it.
    pub fn convert(other: impl Into<Operand>) -> Self {
        match other.into() {
            Operand::Point(AnyPoint::Vector(v)) => v,
            Operand::Point(p) => Self::from_slice(p.components()),
            Operand::Components(values) => Self::new(values),
            Operand::Scalar(value) => Self::new([value]),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    /// Component `index`, or `0.0` when the vector is shorter.
    #[inline]
    pub fn get_or_zero(&self, index: usize) -> f64 {
        self.get(index).unwrap_or(0.0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.coords.as_slice()
    }

    #[inline]
    pub fn as_dvector(&self) -> &DVector<f64> {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for c in self.iter() {
            // -0.0 == 0.0, so both must hash alike.
            let c = if c == 0.0 { 0.0 } else { c };
            c.to_bits().hash(state);
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self {
            coords: DVector::from_vec(values),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.as_slice())
    }
}

impl Coordinates for Vector {
    #[inline]
    fn vector(&self) -> &Vector {
        self
    }

    fn rebuild(&self, components: Vec<f64>) -> Self {
        Self::from(components)
    }

    fn as_my_type(&self, other: Operand) -> Result<Self, PointError> {
        Ok(Self::convert(other))
    }

    /// The base vector has no coordinate meaning; its components are taken as
    /// Cartesian as-is.
    fn as_cartesian(&self) -> Result<CartesianPoint, PointError> {
        Ok(CartesianPoint::from_slice(self.as_slice()))
    }
}

impl_arithmetic!(Vector);

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from(-self.coords)
    }
}

impl From<DVector<f64>> for Vector {
    fn from(coords: DVector<f64>) -> Self {
        Self { coords }
    }
}

/// `op(lhs[i], scalar)` for every component.
pub(crate) fn broadcast(lhs: &[f64], scalar: f64, op: BinaryOp) -> Vec<f64> {
    lhs.iter().map(|&a| op.apply(a, scalar)).collect()
}

/// `op(lhs[i], rhs[i])`, truncated to the shorter length.
pub(crate) fn zip_truncated(lhs: &[f64], rhs: &[f64], op: BinaryOp) -> Vec<f64> {
    lhs.iter()
        .zip(rhs)
        .map(|(&a, &b)| op.apply(a, b))
        .collect()
}

/// `(a, b, c)`; shared by every family's `Display`.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, ")")
}
