use super::*;

#[test]
fn shifts_min_corner_to_origin() {
    let n = normalize(&[Point::new(0, 1), Point::new(2, 3)]).unwrap();
    assert_eq!(n.points, vec![Point::new(0, 0), Point::new(2, 2)]);
    assert_eq!((n.width, n.height), (3, 3));
    assert_eq!(n.source_bounds.min(), Point::new(0, 1));
}

#[test]
fn negative_coordinates() {
    let n = normalize(&[Point::new(-2, -2), Point::new(2, 2)]).unwrap();
    assert_eq!(n.points, vec![Point::new(0, 0), Point::new(4, 4)]);
    assert_eq!((n.width, n.height), (5, 5));
}

#[test]
fn single_point_is_one_by_one() {
    let n = normalize(&[Point::new(-7, 12)]).unwrap();
    assert_eq!(n.points, vec![Point::ORIGIN]);
    assert_eq!((n.width, n.height), (1, 1));
}

#[test]
fn width_follows_first_coordinate() {
    let n = normalize(&[Point::new(0, 0), Point::new(9, 1)]).unwrap();
    assert_eq!((n.width, n.height), (10, 2));
}

#[test]
fn empty_is_empty_input_error() {
    assert!(matches!(normalize(&[]), Err(PlotError::EmptyInput)));
}

#[test]
fn idempotent() {
    let once = normalize(&[Point::new(5, -3), Point::new(-1, 8), Point::new(5, -3)]).unwrap();
    let twice = normalize(&once.points).unwrap();
    assert_eq!(twice.points, once.points);
    assert_eq!((twice.width, twice.height), (once.width, once.height));
    assert_eq!(twice.source_bounds.min(), Point::ORIGIN);
}

#[test]
fn coordinates_beyond_i64_normalize() {
    let far = 100_000_000_000_000_000_000i128;
    let n = normalize(&[Point::new(far, -far)]).unwrap();
    assert_eq!(n.points, vec![Point::ORIGIN]);
    assert_eq!((n.width, n.height), (1, 1));

    let n = normalize(&[Point::new(far, 0), Point::new(far + 2, 1)]).unwrap();
    assert_eq!(n.points, vec![Point::new(0, 0), Point::new(2, 1)]);
    assert_eq!((n.width, n.height), (3, 2));
}

#[test]
fn extent_wider_than_u32_is_rejected() {
    let err = normalize(&[Point::new(0, 0), Point::new(i128::from(u32::MAX), 0)]).unwrap_err();
    assert!(matches!(err, PlotError::Extent(_)));
}
