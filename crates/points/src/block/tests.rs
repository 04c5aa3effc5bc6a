use super::*;
use crate::cartesian::RoundedPoint;
use crate::polar::PolarPoint;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;

fn xy(x: f64, y: f64) -> CartesianPoint {
    CartesianPoint::xy(x, y)
}

fn surrounds(b: &Block, x: f64, y: f64) -> bool {
    b.surrounds(&xy(x, y)).unwrap()
}

#[test]
fn scalars_give_all_corners_and_edges() {
    let b = Block::from_scalars(0.0, 5.0, 10.0, 20.0);
    assert_eq!(b.upper_left(), &xy(0.0, 5.0));
    assert_eq!(b.lower_right(), &xy(10.0, 20.0));
    assert_eq!(b.upper_right(), xy(10.0, 5.0));
    assert_eq!(b.lower_left(), xy(0.0, 20.0));
    assert_eq!((b.upper(), b.lower(), b.left(), b.right()), (5.0, 20.0, 0.0, 10.0));
    assert_eq!((b.y_min(), b.y_max(), b.x_min(), b.x_max()), (5.0, 20.0, 0.0, 10.0));
    assert_eq!(b.center(), xy(5.0, 12.5));
    assert!(surrounds(&b, 0.0, 5.0));
    assert!(!surrounds(&b, 10.0, 20.0));
    assert!(!surrounds(&b, 10.0, 5.0));
    assert!(!surrounds(&b, 0.0, 20.0));
    assert!(surrounds(&b, 5.0, 12.5));
    assert!(!surrounds(&b, 500.0, 1000.0));
}

#[test]
fn corner_order_does_not_matter() {
    let b = Block::from_scalars(1000.0, 4000.0, 60.0, 5000.0);
    assert_eq!(b.upper_left(), &xy(60.0, 4000.0));
    assert_eq!(b.lower_right(), &xy(1000.0, 5000.0));
    assert_eq!(b.upper_right(), xy(1000.0, 4000.0));
    assert_eq!(b.lower_left(), xy(60.0, 5000.0));
    assert_eq!(b.center(), xy(530.0, 4500.0));
    assert!(surrounds(&b, 60.0, 4000.0));
    assert!(surrounds(&b, 999.0, 4999.0));
    assert!(!surrounds(&b, 1000.0, 5000.0));

    let from_points = Block::from_corners(&xy(1000.0, 4000.0), &xy(60.0, 5000.0)).unwrap();
    assert_eq!(from_points, b);
}

#[test]
fn size_and_single_point_start_at_origin() {
    let b = Block::from_size(10.0, 20.0);
    assert_eq!(b.upper_left(), &xy(0.0, 0.0));
    assert_eq!(b.lower_right(), &xy(10.0, 20.0));
    assert_eq!(b.center(), xy(5.0, 10.0));
    assert!(surrounds(&b, 9.0, 0.0));
    assert!(!surrounds(&b, 10.0, 0.0));

    assert_eq!(Block::from_point(&xy(10.0, 20.0)).unwrap(), b);
}

#[test]
fn from_path_takes_one_or_two_points() {
    let p1 = xy(0.0, 5.0);
    let p2 = xy(10.0, 20.0);
    let b = Block::from_path(&Path::new([p1.clone(), p2.clone()])).unwrap();
    assert_eq!(b, Block::from_corners(&p1, &p2).unwrap());
    assert_eq!(b.to_path(), Path::new([p1.clone(), p2.clone()]));

    let short = Block::from_path(&Path::new([p2.clone()])).unwrap();
    assert_eq!(short, Block::from_size(10.0, 20.0));

    let long = Path::new([p1, p2, xy(100.0, 200.0)]);
    let err = Block::from_path(&long).unwrap_err();
    assert!(matches!(err, PointError::PathLength { len: 3, .. }));
    assert_eq!(
        err.to_string(),
        "a block needs a path of 1 or 2 points, got 3: [(0, 5), (10, 20), (100, 200)]"
    );
}

#[test]
fn polar_corners_are_converted() {
    let b = Block::from_point(&PolarPoint::planar(10.0, 0.0)).unwrap();
    assert_eq!(b.lower_right(), &xy(10.0, 0.0));

    let b = Block::from_corners(
        &PolarPoint::planar(10.0, 0.0),
        &PolarPoint::planar(10.0, FRAC_PI_2),
    )
    .unwrap();
    assert!(b.upper_left().is_close(&xy(0.0, 0.0)));
    assert!(b.lower_right().is_close(&xy(10.0, 10.0)));
}

#[test]
fn from_values_dispatches_on_shape() {
    let rows = Block::from_values([[0.0, 0.0], [3.0, 3.0]]).unwrap();
    assert_eq!(rows, Block::from_size(3.0, 3.0));

    let scalars = Block::from_values([0.0, 0.0, 3.0, 3.0]).unwrap();
    assert_eq!(scalars, rows);
    assert_eq!(Block::from_values([3.0, 4.0]).unwrap(), Block::from_size(3.0, 4.0));
    assert_eq!(Block::from_values([5.0]).unwrap(), Block::from_size(5.0, 0.0));

    let mixed = Block::from_values([
        Operand::from(RoundedPoint::int([1.0, 2.0])),
        Operand::from(PolarPoint::planar(10.0, 0.0)),
    ])
    .unwrap();
    assert_eq!(mixed, Block::from_scalars(1.0, 2.0, 10.0, 0.0));

    assert!(matches!(
        Block::from_values([1.0, 2.0, 3.0]),
        Err(PointError::NotABlock { .. })
    ));
    assert!(matches!(
        Block::from_values(Vec::<f64>::new()),
        Err(PointError::NotABlock { .. })
    ));
}

#[test]
fn parses_delimited_strings() {
    let b: Block = "100, 0, 0, 100".parse().unwrap();
    assert_eq!(b.upper_left(), &xy(0.0, 0.0));
    assert_eq!(b.lower_right(), &xy(100.0, 100.0));
    assert_eq!("3840,2160".parse::<Block>().unwrap(), Block::from_size(3840.0, 2160.0));
    assert_eq!(
        "1, x, 2, 3".parse::<Block>(),
        Err(PointError::Parse {
            input: "x".to_string()
        })
    );
    assert!(matches!(
        "1,2,3".parse::<Block>(),
        Err(PointError::NotABlock { .. })
    ));
    for token in ["nan", "inf", "-inf"] {
        assert_eq!(
            format!("{token},0,10,10").parse::<Block>(),
            Err(PointError::Parse {
                input: token.to_string()
            })
        );
    }
}

#[test]
fn nan_bound_is_kept() {
    let b = Block::from_scalars(f64::NAN, 0.0, 10.0, 10.0);
    assert!(b.x_min().is_nan() && b.x_max().is_nan());
    assert_eq!((b.y_min(), b.y_max()), (0.0, 10.0));
    let b = Block::from_scalars(0.0, 0.0, 10.0, f64::NAN);
    assert!(b.y_min().is_nan() && b.y_max().is_nan());
    assert!(!surrounds(&b, 5.0, 5.0));
}

#[test]
fn displays_normalized_scalars() {
    assert_eq!(Block::from_scalars(0.0, 100.0, 100.0, 0.0).to_string(), "0, 0, 100, 100");
    assert_eq!(Block::from_size(3840.0, 2160.0).to_string(), "0, 0, 3840, 2160");
    let round_trip: Block = Block::from_scalars(-1.5, 2.0, 3.0, -4.0)
        .to_string()
        .parse()
        .unwrap();
    assert_eq!(round_trip, Block::from_scalars(-1.5, -4.0, 3.0, 2.0));
}

#[test]
fn center_and_size() {
    assert_eq!(Block::from_scalars(0.0, 100.0, 100.0, 0.0).center(), xy(50.0, 50.0));
    assert_eq!(Block::from_scalars(-100.0, -100.0, 100.0, 100.0).center(), xy(0.0, 0.0));
    assert_eq!(Block::from_scalars(0.0, 0.0, 100.0, 100.0).size(), xy(100.0, 100.0));
    assert_eq!(Block::from_scalars(-100.0, -100.0, 100.0, 100.0).size(), xy(200.0, 200.0));
}

#[test]
fn surrounds_is_half_open() {
    let b = Block::from_scalars(0.0, 0.0, 100.0, 100.0);
    assert!(!surrounds(&b, 100.0, 100.0));
    assert!(surrounds(&b, 99.0, 99.0));
    assert!(surrounds(&b, 0.0, 0.0));
    assert!(surrounds(&b, 50.0, 50.0));
    assert!(!surrounds(&b, -50.0, -50.0));
    assert!(!surrounds(&b, 0.0, -50.0));
    assert!(!surrounds(&b, 150.0, 150.0));
    assert!(!surrounds(&b, 150.0, 0.0));
    assert!(!surrounds(&b, 0.0, 150.0));
    // Polar input is converted first.
    assert!(b.surrounds(&PolarPoint::planar(10.0, 0.5)).unwrap());
}

#[test]
fn relative_position_is_inclusive() {
    let b = Block::from_scalars(0.0, 0.0, 100.0, 100.0);
    let pos = |x, y| b.relative_point_position(&xy(x, y));
    assert_eq!(pos(100.0, 100.0), Position::INSIDE);
    assert_eq!(pos(0.0, 0.0), Position::INSIDE);
    assert!(pos(50.0, 50.0).is_inside());

    assert_eq!(pos(-50.0, -50.0), Position::BELOW_XMIN_BELOW_YMIN);
    assert_eq!(pos(0.0, -50.0), Position::BELOW_YMIN);
    assert_eq!(pos(101.0, 101.0), Position::ABOVE_XMAX_ABOVE_YMAX);
    assert_eq!(pos(150.0, 0.0), Position::ABOVE_XMAX);
    assert_eq!(pos(0.0, 150.0), Position::ABOVE_YMAX);
    assert_eq!(pos(-1.0, 150.0), Position::BELOW_XMIN_ABOVE_YMAX);
    assert_eq!(pos(150.0, -1.0), Position::ABOVE_XMAX_BELOW_YMIN);
    assert!(!pos(0.0, 150.0).intersects(Position::BELOW_XMIN | Position::ABOVE_XMAX));
}

#[test]
fn random_points_agree_between_surrounds_and_position() {
    // Anything `surrounds` accepts is inside the inclusive classification too.
    let mut rng = StdRng::seed_from_u64(7);
    let b = Block::from_scalars(-20.0, 10.0, 30.0, 60.0);
    for _ in 0..1000 {
        let p = xy(rng.gen_range(-50.0..50.0), rng.gen_range(-10.0..80.0));
        if b.surrounds(&p).unwrap() {
            assert!(b.relative_point_position(&p).is_inside(), "{p}");
        }
    }
}

proptest! {
    #[test]
    fn normalization_takes_min_and_max(
        a in -1e6f64..1e6, b in -1e6f64..1e6, c in -1e6f64..1e6, d in -1e6f64..1e6,
    ) {
        let block = Block::from_scalars(a, b, c, d);
        prop_assert_eq!(block.min_point().x(), a.min(c));
        prop_assert_eq!(block.max_point().x(), a.max(c));
        prop_assert_eq!(block.min_point().y(), b.min(d));
        prop_assert_eq!(block.max_point().y(), b.max(d));
    }

    #[test]
    fn min_corner_inside_max_corner_outside(
        a in -1e6f64..1e6, b in -1e6f64..1e6, c in -1e6f64..1e6, d in -1e6f64..1e6,
    ) {
        prop_assume!(a != c && b != d);
        let block = Block::from_scalars(a, b, c, d);
        prop_assert!(block.surrounds(block.min_point()).unwrap());
        prop_assert!(!block.surrounds(block.max_point()).unwrap());
    }
}
