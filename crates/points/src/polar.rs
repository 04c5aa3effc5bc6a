//! Polar / spherical points `(ρ, θ, φ)`.
//!
//! Conventions
//! - `ρ` radius (component 0), `θ` azimuth in radians (component 1), `φ`
//!   inclination from the +z axis in radians (component 2). Missing components
//!   read as `0.0`.
//! - Only 2- and 3-component points convert; longer ones construct fine but
//!   every conversion or arithmetic operation on them fails.
//! - Arithmetic never happens in polar form: the point is converted to
//!   Cartesian, the Cartesian operation runs, and the result converts back.

use std::fmt;

use nalgebra::DMatrix;

use crate::cartesian::{CartesianPoint, RoundedPoint, Rounding};
use crate::error::PointError;
use crate::family::{AnyPoint, Coordinates};
use crate::vector::{write_components, BinaryOp, Operand, Vector};

/// Point in polar (2D) or spherical (3D) coordinates.
#[derive(Clone, Debug, Default, PartialEq, Hash)]
pub struct PolarPoint {
    coords: Vector,
}

impl PolarPoint {
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
    pub fn planar(rho: f64, theta: f64) -> Self {
        Self::from_slice(&[rho, theta])
    }

    #[inline]
    pub fn spatial(rho: f64, theta: f64, phi: f64) -> Self {
        Self::from_slice(&[rho, theta, phi])
    }

    #[inline]
    pub fn rho(&self) -> f64 {
        self.coords.get_or_zero(0)
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        self.coords.get_or_zero(1)
    }

    #[inline]
    pub fn phi(&self) -> f64 {
        self.coords.get_or_zero(2)
    }

    /// Polar form of a 2D or 3D Cartesian point.
    pub fn as_polar(p: &CartesianPoint) -> Result<Self, PointError> {
        match *p.components() {
            [x, y] => Ok(Self::planar(x.hypot(y), y.atan2(x))),
            [x, y, z] => {
                let planar = x.hypot(y);
                Ok(Self::spatial(
                    (x * x + y * y + z * z).sqrt(),
                    y.atan2(x),
                    planar.atan2(z),
                ))
            }
            _ => Err(PointError::Conversion {
                family: "CartesianPoint",
                len: p.len(),
                value: p.to_string(),
            }),
        }
    }

    /// Coerce `other` into polar form.
    ///
    /// - Polar points are returned unchanged.
    /// - Cartesian (and rounded) points convert geometrically.
    /// - Base vectors and raw sequences carry no coordinate meaning and are
    ///   taken as polar components as-is.
    /// - A bare scalar is `ρ` with `θ = φ = 0`.
    pub fn convert(other: impl Into<Operand>) -> Result<Self, PointError> {
        match other.into() {
            Operand::Point(AnyPoint::Polar(p)) => Ok(p),
            Operand::Point(AnyPoint::Vector(v)) => Ok(Self { coords: v }),
            Operand::Point(p) => Self::as_polar(&p.as_cartesian()?),
            Operand::Components(values) => Ok(Self::new(values)),
            Operand::Scalar(rho) => Ok(Self::new([rho])),
        }
    }

    /// Cartesian form quantized by `rounding`.
    pub fn as_cartesian_with(&self, rounding: Rounding) -> Result<RoundedPoint, PointError> {
        Ok(self.as_cartesian()?.as_cartesian_with(rounding))
    }

    /// Run `f` on the Cartesian form and convert the result back.
    fn via_cartesian<F>(&self, f: F) -> Result<Self, PointError>
    where
        F: FnOnce(CartesianPoint) -> Result<CartesianPoint, PointError>,
    {
        Self::as_polar(&f(self.as_cartesian()?)?)
    }
}

impl Coordinates for PolarPoint {
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

    fn as_cartesian(&self) -> Result<CartesianPoint, PointError> {
        match *self.components() {
            [rho, theta] => Ok(CartesianPoint::xy(rho * theta.cos(), rho * theta.sin())),
            [rho, theta, phi] => Ok(CartesianPoint::xyz(
                rho * phi.sin() * theta.cos(),
                rho * phi.sin() * theta.sin(),
                rho * phi.cos(),
            )),
            _ => Err(PointError::Conversion {
                family: "PolarPoint",
                len: self.len(),
                value: self.to_string(),
            }),
        }
    }

    fn element_wise(&self, other: Operand, op: BinaryOp) -> Result<Self, PointError> {
        self.via_cartesian(|c| c.element_wise(other, op))
    }

    fn map_components(&self, f: fn(f64) -> f64) -> Result<Self, PointError> {
        self.via_cartesian(|c| c.map_components(f))
    }

    fn dot(&self, other: impl Into<Operand>) -> Result<f64, PointError> {
        self.as_cartesian()?.dot(other)
    }

    fn transform(&self, m: &DMatrix<f64>) -> Result<Self, PointError> {
        self.via_cartesian(|c| c.transform(m))
    }
}

impl_arithmetic!(PolarPoint);

impl std::ops::Neg for PolarPoint {
    type Output = Result<PolarPoint, PointError>;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<const N: usize> From<[f64; N]> for PolarPoint {
    fn from(values: [f64; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl fmt::Display for PolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.components())
    }
}
