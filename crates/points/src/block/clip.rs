//! Cohen–Sutherland clipping of a line segment to a `Block` viewport.
//!
//! Loop
//! - Classify both endpoints. Both inside: done. A shared excluded half-plane:
//!   the whole segment is outside.
//! - Otherwise move one outside endpoint (the first, if both are outside) to
//!   the boundary line its classification points at, round it to an integer
//!   point and classify again.
//!
//! Only one endpoint moves per iteration, so two outside endpoints take at
//! least two iterations. A viewport with fractional edges can keep a rounded
//! intersection outside forever; `CLIP_STEP_BUDGET` turns that into
//! `ClipError::NotConverged`.

use std::fmt;

use tracing::{debug, trace};

use super::{Block, Position};
use crate::cartesian::{CartesianPoint, RoundedPoint};
use crate::cfg::CLIP_STEP_BUDGET;
use crate::error::PointError;
use crate::family::Coordinates;
use crate::path::Path;

/// Classifications corrected against `y = y_max`.
const TOWARD_Y_MAX: [Position; 3] = [
    Position::ABOVE_YMAX,
    Position::ABOVE_XMAX_ABOVE_YMAX,
    Position::BELOW_XMIN_ABOVE_YMAX,
];
/// Classifications corrected against `y = y_min`.
const TOWARD_Y_MIN: [Position; 3] = [
    Position::BELOW_YMIN,
    Position::BELOW_XMIN_BELOW_YMIN,
    Position::ABOVE_XMAX_BELOW_YMIN,
];

#[derive(Clone, Debug, PartialEq)]
pub enum ClipError {
    /// The segment lies entirely outside the viewport; nothing to draw.
    Outside { segment: String },
    /// The dispatch met a classification it has no boundary for.
    InvalidPosition(Position),
    /// A segment is exactly two points.
    Segment { len: usize, value: String },
    /// Rounded intersections kept landing outside the viewport.
    NotConverged { steps: usize },
    /// An endpoint has no Cartesian form.
    Point(PointError),
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::Outside { segment } => write!(f, "entirely outside viewport: {segment}"),
            ClipError::InvalidPosition(p) => write!(f, "invalid position state {p:?}"),
            ClipError::Segment { len, value } => {
                write!(f, "a line segment has 2 points, got {len}: {value}")
            }
            ClipError::NotConverged { steps } => {
                write!(f, "clipping did not settle after {steps} steps")
            }
            ClipError::Point(e) => write!(f, "segment endpoint: {e}"),
        }
    }
}

impl std::error::Error for ClipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipError::Point(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PointError> for ClipError {
    fn from(e: PointError) -> Self {
        ClipError::Point(e)
    }
}

/// Clip a two-point path to `viewport`. Endpoints of any family are converted
/// to Cartesian first; the result holds two `IntPoint`s.
pub fn clip_path_to_viewport(viewport: &Block, segment: &Path) -> Result<Path, ClipError> {
    match segment.points() {
        [a, b] => clip_segment(viewport, &a.as_cartesian()?, &b.as_cartesian()?),
        other => Err(ClipError::Segment {
            len: other.len(),
            value: segment.to_string(),
        }),
    }
}

/// Clip the segment `first`–`second` to `viewport`.
pub fn clip_segment(
    viewport: &Block,
    first: &CartesianPoint,
    second: &CartesianPoint,
) -> Result<Path, ClipError> {
    let (mut x1, mut y1) = (first.x(), first.y());
    let (mut x2, mut y2) = (second.x(), second.y());
    let mut first_position = viewport.classify(x1, y1);
    let mut second_position = viewport.classify(x2, y2);
    let mut steps = 0;

    while !(first_position | second_position).is_inside() {
        if !(first_position & second_position).is_inside() {
            debug!(%first, %second, %viewport, "segment outside viewport");
            return Err(ClipError::Outside {
                segment: format!("({first}, {second})"),
            });
        }
        if steps == CLIP_STEP_BUDGET {
            debug!(%first, %second, %viewport, steps, "clipping did not converge");
            return Err(ClipError::NotConverged { steps });
        }
        steps += 1;

        let move_first = !first_position.is_inside();
        let position = if move_first {
            first_position
        } else {
            second_position
        };
        let (x, y) = if TOWARD_Y_MAX.contains(&position) {
            let y_max = viewport.y_max();
            (x1 + (x2 - x1) * (y_max - y1) / (y2 - y1), y_max)
        } else if TOWARD_Y_MIN.contains(&position) {
            let y_min = viewport.y_min();
            (x1 + (x2 - x1) * (y_min - y1) / (y2 - y1), y_min)
        } else if position == Position::ABOVE_XMAX {
            let x_max = viewport.x_max();
            (x_max, y1 + (y2 - y1) * (x_max - x1) / (x2 - x1))
        } else if position == Position::BELOW_XMIN {
            let x_min = viewport.x_min();
            (x_min, y1 + (y2 - y1) * (x_min - x1) / (x2 - x1))
        } else {
            return Err(ClipError::InvalidPosition(position));
        };

        let moved = RoundedPoint::int([x, y]);
        let moved_position = viewport.classify(moved.x(), moved.y());
        trace!(step = steps, move_first, ?position, %moved, ?moved_position, "endpoint moved");
        if move_first {
            (x1, y1) = (moved.x(), moved.y());
            first_position = moved_position;
        } else {
            (x2, y2) = (moved.x(), moved.y());
            second_position = moved_position;
        }
    }

    Ok(Path::new([
        RoundedPoint::int([x1, y1]),
        RoundedPoint::int([x2, y2]),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::AnyPoint;
    use crate::polar::PolarPoint;
    use std::f64::consts::FRAC_PI_4;

    fn viewport() -> Block {
        Block::from_scalars(0.0, 0.0, 100.0, 100.0)
    }

    fn segment(a: [f64; 2], b: [f64; 2]) -> Path {
        Path::new([CartesianPoint::from(a), CartesianPoint::from(b)])
    }

    fn assert_segment(clipped: &Path, expected: [[f64; 2]; 2]) {
        assert_eq!(clipped.len(), 2);
        for (p, e) in clipped.iter().zip(expected) {
            assert!(matches!(p, AnyPoint::Rounded(_)), "{p} is not an IntPoint");
            assert_eq!(p.components(), &e, "{clipped}");
        }
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let clipped = clip_path_to_viewport(&viewport(), &segment([10.0, 10.0], [90.0, 90.0]));
        assert_segment(&clipped.unwrap(), [[10.0, 10.0], [90.0, 90.0]]);
    }

    #[test]
    fn diagonal_through_both_corners() {
        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-10.0, -10.0], [110.0, 110.0])).unwrap();
        assert_segment(&clipped, [[0.0, 0.0], [100.0, 100.0]]);

        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-10.0, 110.0], [110.0, -10.0])).unwrap();
        assert_segment(&clipped, [[0.0, 100.0], [100.0, 0.0]]);
    }

    #[test]
    fn horizontal_and_vertical() {
        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-10.0, 50.0], [110.0, 50.0])).unwrap();
        assert_segment(&clipped, [[0.0, 50.0], [100.0, 50.0]]);

        let clipped =
            clip_path_to_viewport(&viewport(), &segment([50.0, -10.0], [50.0, 110.0])).unwrap();
        assert_segment(&clipped, [[50.0, 0.0], [50.0, 100.0]]);
    }

    #[test]
    fn partial_corner_cut() {
        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-10.0, 15.0], [15.0, -10.0])).unwrap();
        assert_segment(&clipped, [[0.0, 5.0], [5.0, 0.0]]);
    }

    #[test]
    fn outside_segments_are_rejected() {
        let err = clip_path_to_viewport(&viewport(), &segment([200.0, 200.0], [300.0, 300.0]));
        assert!(matches!(err, Err(ClipError::Outside { .. })));

        // Spans the full width, but above the viewport.
        let err = clip_path_to_viewport(&viewport(), &segment([-300.0, 300.0], [300.0, 300.0]));
        assert!(matches!(err, Err(ClipError::Outside { .. })));
    }

    #[test]
    fn opposite_corners_converge() {
        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-50.0, 150.0], [150.0, -50.0])).unwrap();
        assert_segment(&clipped, [[0.0, 100.0], [100.0, 0.0]]);
    }

    #[test]
    fn corner_endpoint_may_need_two_moves() {
        // The first move lands on y = 100 still left of the viewport.
        let clipped =
            clip_path_to_viewport(&viewport(), &segment([-50.0, 120.0], [50.0, 50.0])).unwrap();
        assert_segment(&clipped, [[0.0, 85.0], [50.0, 50.0]]);
    }

    #[test]
    fn corner_miss_is_outside_after_a_move() {
        let err = clip_path_to_viewport(&viewport(), &segment([-50.0, 80.0], [30.0, 160.0]));
        assert!(matches!(err, Err(ClipError::Outside { .. })));
    }

    #[test]
    fn fractional_viewport_reports_not_converged() {
        let vp = Block::from_scalars(0.0, 0.0, 100.0, 100.7);
        let err = clip_path_to_viewport(&vp, &segment([50.0, 50.0], [50.0, 200.0]));
        assert_eq!(
            err,
            Err(ClipError::NotConverged {
                steps: CLIP_STEP_BUDGET
            })
        );
    }

    #[test]
    fn polar_endpoints_are_converted() {
        let seg = Path::new([
            PolarPoint::planar(2f64.sqrt() * 10.0, FRAC_PI_4 + std::f64::consts::PI),
            PolarPoint::planar(2f64.sqrt() * 110.0, FRAC_PI_4),
        ]);
        let clipped = clip_path_to_viewport(&viewport(), &seg).unwrap();
        assert_segment(&clipped, [[0.0, 0.0], [100.0, 100.0]]);
    }

    #[test]
    fn segment_must_have_two_points() {
        let three = Path::new([
            CartesianPoint::xy(0.0, 0.0),
            CartesianPoint::xy(1.0, 1.0),
            CartesianPoint::xy(2.0, 2.0),
        ]);
        let err = clip_path_to_viewport(&viewport(), &three).unwrap_err();
        assert!(matches!(err, ClipError::Segment { len: 3, .. }));
        assert_eq!(
            err.to_string(),
            "a line segment has 2 points, got 3: [(0, 0), (1, 1), (2, 2)]"
        );
        let bad = Path::new([PolarPoint::new([1.0, 2.0, 3.0, 4.0]), PolarPoint::planar(1.0, 0.0)]);
        let err = clip_path_to_viewport(&viewport(), &bad).unwrap_err();
        assert!(matches!(
            err,
            ClipError::Point(PointError::Conversion { len: 4, .. })
        ));
        assert!(err.to_string().ends_with("(1, 2, 3, 4)"), "{err}");
    }

    #[test]
    fn clip_segment_direct() {
        let clipped = clip_segment(
            &viewport(),
            &CartesianPoint::xy(50.0, 50.0),
            &CartesianPoint::xy(250.0, 50.0),
        )
        .unwrap();
        assert_segment(&clipped, [[50.0, 50.0], [100.0, 50.0]]);
    }
}
