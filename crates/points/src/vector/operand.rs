//! Right-hand sides accepted by element-wise arithmetic.

use crate::cartesian::{CartesianPoint, RoundedPoint};
use crate::family::AnyPoint;
use crate::polar::PolarPoint;

use super::Vector;

/// Dyadic scalar operation applied component by component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `floor(a / b)`.
    FloorDiv,
    Pow,
}

impl BinaryOp {
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::FloorDiv => (a / b).floor(),
            BinaryOp::Pow => a.powf(b),
        }
    }
}

/// Other side of an element-wise operation.
///
/// - `Scalar`: broadcast against every component.
/// - `Point`: a vector-family member; converted to the receiver's family
///   before zipping.
/// - `Components`: a plain sequence of scalars; zipped as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Point(AnyPoint),
    Components(Vec<f64>),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for Operand {
    fn from(values: Vec<f64>) -> Self {
        Operand::Components(values)
    }
}

impl From<&[f64]> for Operand {
    fn from(values: &[f64]) -> Self {
        Operand::Components(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Operand {
    fn from(values: [f64; N]) -> Self {
        Operand::Components(values.to_vec())
    }
}

impl From<AnyPoint> for Operand {
    fn from(point: AnyPoint) -> Self {
        Operand::Point(point)
    }
}

impl From<&AnyPoint> for Operand {
    fn from(point: &AnyPoint) -> Self {
        Operand::Point(point.clone())
    }
}

macro_rules! operand_from_member {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(point: $ty) -> Self {
                    Operand::Point(point.into())
                }
            }

            impl From<&$ty> for Operand {
                fn from(point: &$ty) -> Self {
                    Operand::Point(point.clone().into())
                }
            }
        )*
    };
}

operand_from_member!(Vector, CartesianPoint, RoundedPoint, PolarPoint);
