//! Cartesian points and their rounding variants.
//!
//! - `CartesianPoint`: the canonical family. Components are orthogonal axis
//!   magnitudes; `x`, `y`, `z` read as `0.0` when absent.
//! - `Rounding`: factory for `RoundedPoint`, a Cartesian point whose
//!   components are quantized to a fixed number of decimal digits (or to
//!   integers) on construction.

use std::fmt;

use crate::cfg::EXACT_DECIMAL_PLACES;
use crate::error::PointError;
use crate::family::{AnyPoint, Coordinates};
use crate::vector::{write_components, Operand, Vector};

/// Point in orthogonal axis coordinates.
#[derive(Clone, Debug, Default, PartialEq, Hash)]
pub struct CartesianPoint {
    coords: Vector,
}

impl CartesianPoint {
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            coords: Vector::new(values),
        }
    }

    #[inline]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            coords: Vector::from_slice(values),
        }
    }

    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::from_slice(&[x, y])
    }

    #[inline]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_slice(&[x, y, z])
    }

    /// Coerce any family member or raw sequence into Cartesian form.
    ///
    /// Family members convert through their own `as_cartesian`; raw sequences
    /// and base vectors are reinterpreted as Cartesian components; a bare
    /// scalar becomes a one-component point.
    pub fn convert(other: impl Into<Operand>) -> Result<Self, PointError> {
        match other.into() {
            Operand::Point(p) => p.as_cartesian(),
            Operand::Components(values) => Ok(Self::new(values)),
            Operand::Scalar(value) => Ok(Self::new([value])),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.get_or_zero(0)
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.get_or_zero(1)
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coords.get_or_zero(2)
    }

    /// Same components, quantized by `rounding`.
    pub fn as_cartesian_with(&self, rounding: Rounding) -> RoundedPoint {
        rounding.point(self.coords.iter())
    }
}

impl Coordinates for CartesianPoint {
    #[inline]
    fn vector(&self) -> &Vector {
        &self.coords
    }

    fn rebuild(&self, components: Vec<f64>) -> Self {
        Self {
            coords: Vector::from(components),
        }
    }

    fn as_my_type(&self, other: Operand) -> Result<Self, PointError> {
        Self::convert(other)
    }

    #[inline]
    fn as_cartesian(&self) -> Result<CartesianPoint, PointError> {
        Ok(self.clone())
    }
}

impl_arithmetic!(CartesianPoint);

impl std::ops::Neg for CartesianPoint {
    type Output = CartesianPoint;

    fn neg(self) -> CartesianPoint {
        Self {
            coords: -self.coords,
        }
    }
}

impl FromIterator<f64> for CartesianPoint {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[f64; N]> for CartesianPoint {
    fn from(values: [f64; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl From<RoundedPoint> for CartesianPoint {
    fn from(p: RoundedPoint) -> Self {
        Self { coords: p.coords }
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.components())
    }
}

/// Quantization applied by a `RoundedPoint` family.
///
/// `digits = Some(n)` rounds to `n` decimal places; `None` rounds to the
/// nearest integer. Both break ties to even on the *binary* value: a literal
/// such as `2.225` is stored slightly above the tie and rounds up, while
/// `2.222222225` is stored slightly below and rounds down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rounding {
    digits: Option<u32>,
}

impl Rounding {
    /// Integer rounding (the `IntPoint` family).
    pub const INTEGER: Rounding = Rounding { digits: None };

    #[inline]
    pub const fn new(digits: Option<u32>) -> Self {
        Self { digits }
    }

    #[inline]
    pub const fn places(digits: u32) -> Self {
        Self {
            digits: Some(digits),
        }
    }

    #[inline]
    pub const fn integer() -> Self {
        Self::INTEGER
    }

    #[inline]
    pub fn digits(&self) -> Option<u32> {
        self.digits
    }

    /// Family name: `"IntPoint"` or `"Rounded{n}Point"`.
    pub fn name(&self) -> String {
        match self.digits {
            None => "IntPoint".to_string(),
            Some(n) => format!("Rounded{n}Point"),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self.digits {
            None => value.round_ties_even(),
            Some(n) if n >= EXACT_DECIMAL_PLACES || !value.is_finite() => value,
            // Fixed-precision formatting rounds the exact binary value.
            Some(n) => format!("{value:.prec$}", prec = n as usize)
                .parse()
                .unwrap_or(value),
        }
    }

    pub fn point<I: IntoIterator<Item = f64>>(&self, values: I) -> RoundedPoint {
        RoundedPoint {
            rounding: *self,
            coords: values.into_iter().map(|v| self.apply(v)).collect(),
        }
    }

    /// Coerce `other` into this rounding family (via Cartesian).
    ///
    /// A point already carrying this rounding is returned unchanged.
    pub fn convert(&self, other: impl Into<Operand>) -> Result<RoundedPoint, PointError> {
        match other.into() {
            Operand::Point(AnyPoint::Rounded(p)) if p.rounding == *self => Ok(p),
            other => {
                let cartesian = CartesianPoint::convert(other)?;
                Ok(self.point(cartesian.coords.iter()))
            }
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Cartesian point whose components are quantized by a `Rounding`.
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct RoundedPoint {
    rounding: Rounding,
    coords: Vector,
}

/// Integer-rounded Cartesian point; built with `Rounding::INTEGER`.
pub type IntPoint = RoundedPoint;

impl RoundedPoint {
    /// Integer-rounded point from `values`.
    pub fn int<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Rounding::INTEGER.point(values)
    }

    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.get_or_zero(0)
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.get_or_zero(1)
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coords.get_or_zero(2)
    }
}

impl Coordinates for RoundedPoint {
    #[inline]
    fn vector(&self) -> &Vector {
        &self.coords
    }

    fn rebuild(&self, components: Vec<f64>) -> Self {
        self.rounding.point(components)
    }

    fn as_my_type(&self, other: Operand) -> Result<Self, PointError> {
        self.rounding.convert(other)
    }

    fn as_cartesian(&self) -> Result<CartesianPoint, PointError> {
        Ok(CartesianPoint::from(self.clone()))
    }
}

impl_arithmetic!(RoundedPoint);

impl std::ops::Neg for RoundedPoint {
    type Output = RoundedPoint;

    fn neg(self) -> RoundedPoint {
        let rounding = self.rounding;
        rounding.point(self.coords.iter().map(|c| -c))
    }
}

impl PartialEq<CartesianPoint> for RoundedPoint {
    fn eq(&self, other: &CartesianPoint) -> bool {
        self.coords == other.coords
    }
}

impl PartialEq<RoundedPoint> for CartesianPoint {
    fn eq(&self, other: &RoundedPoint) -> bool {
        self.coords == other.coords
    }
}

impl fmt::Display for RoundedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.components())
    }
}
