//! Interpolation between two points of the same family.
//!
//! - `iter_linear_steps_between`: vector interpolation in the family's own
//!   arithmetic. Cartesian members walk a straight line; polar members do too,
//!   because their arithmetic runs in Cartesian.
//! - `iter_natural_steps_between`: every coordinate is interpolated on its own
//!   and the result rebuilt in the start's family. For polar points that winds
//!   the angle independently of the radius and traces a spiral.
//!
//! Both yield exactly `n` points, `start` first, `stop` excluded. The `_into`
//! variants pass every step through a target conversion such as
//! `|p| Rounding::INTEGER.convert(p)`.

use std::iter::FusedIterator;

use crate::error::PointError;
use crate::family::Coordinates;
use crate::vector::{BinaryOp, Operand};

/// `start + (stop - start) / n * i` for `i in 0..n`.
pub fn iter_linear_steps_between<P: Coordinates>(
    start: &P,
    stop: &P,
    n: usize,
) -> Result<LinearSteps<P>, PointError> {
    let span = stop.element_wise(Operand::Point(start.clone().into()), BinaryOp::Sub)?;
    let increment = span.element_wise(Operand::Scalar(n as f64), BinaryOp::Div)?;
    Ok(LinearSteps {
        start: start.clone(),
        increment,
        index: 0,
        count: n,
    })
}

/// Like `iter_linear_steps_between`, but per coordinate.
pub fn iter_natural_steps_between<P: Coordinates>(
    start: &P,
    stop: &P,
    n: usize,
) -> NaturalSteps<P> {
    let increments = start
        .components()
        .iter()
        .zip(stop.components())
        .map(|(a, b)| (b - a) / n as f64)
        .collect();
    NaturalSteps {
        start: start.clone(),
        increments,
        index: 0,
        count: n,
    }
}

/// Linear steps converted by `target`, e.g. into another family.
pub fn iter_linear_steps_between_into<P, T, F>(
    start: &P,
    stop: &P,
    n: usize,
    mut target: F,
) -> Result<impl ExactSizeIterator<Item = Result<T, PointError>> + FusedIterator, PointError>
where
    P: Coordinates,
    F: FnMut(P) -> Result<T, PointError>,
{
    Ok(iter_linear_steps_between(start, stop, n)?.map(move |step| step.and_then(&mut target)))
}

/// Per-coordinate steps converted by `target`.
pub fn iter_natural_steps_between_into<P, T, F>(
    start: &P,
    stop: &P,
    n: usize,
    target: F,
) -> impl ExactSizeIterator<Item = Result<T, PointError>> + FusedIterator
where
    P: Coordinates,
    F: FnMut(P) -> Result<T, PointError>,
{
    iter_natural_steps_between(start, stop, n).map(target)
}

/// Drop every item equal to the one before it.
pub fn no_consecutive_repeats<I>(iter: I) -> NoConsecutiveRepeats<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
{
    NoConsecutiveRepeats {
        inner: iter.into_iter(),
        previous: None,
    }
}

#[derive(Clone, Debug)]
pub struct LinearSteps<P> {
    start: P,
    increment: P,
    index: usize,
    count: usize,
}

impl<P: Coordinates> Iterator for LinearSteps<P> {
    type Item = Result<P, PointError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index as f64;
        self.index += 1;
        let step = match self.increment.element_wise(Operand::Scalar(i), BinaryOp::Mul) {
            Ok(step) => step,
            Err(e) => return Some(Err(e)),
        };
        Some(self.start.element_wise(Operand::Point(step.into()), BinaryOp::Add))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl<P: Coordinates> ExactSizeIterator for LinearSteps<P> {}
impl<P: Coordinates> FusedIterator for LinearSteps<P> {}

#[derive(Clone, Debug)]
pub struct NaturalSteps<P> {
    start: P,
    increments: Vec<f64>,
    index: usize,
    count: usize,
}

impl<P: Coordinates> Iterator for NaturalSteps<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index as f64;
        self.index += 1;
        let components = self
            .start
            .components()
            .iter()
            .zip(&self.increments)
            .map(|(a, d)| a + d * i)
            .collect();
        Some(self.start.rebuild(components))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl<P: Coordinates> ExactSizeIterator for NaturalSteps<P> {}
impl<P: Coordinates> FusedIterator for NaturalSteps<P> {}

pub struct NoConsecutiveRepeats<I: Iterator> {
    inner: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for NoConsecutiveRepeats<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.inner.next()?;
            if self.previous.as_ref() != Some(&item) {
                self.previous = Some(item.clone());
                return Some(item);
            }
        }
    }
}
