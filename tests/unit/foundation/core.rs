use super::*;

#[test]
fn bounding_box_of_empty_is_none() {
    assert_eq!(BoundingBox::of(&[]), None);
}

#[test]
fn bounding_box_tracks_each_axis_independently() {
    let pts = [Point::new(3, -1), Point::new(-2, 7), Point::new(0, 0)];
    let bb = BoundingBox::of(&pts).unwrap();
    assert_eq!(bb.min(), Point::new(-2, -1));
    assert_eq!(bb.max(), Point::new(3, 7));
    assert_eq!(bb.extent(), (6, 9));
}

#[test]
fn center_matches_midpoint() {
    let bb = BoundingBox::of(&[Point::new(-3, -3), Point::new(3, 2)]).unwrap();
    assert_eq!(bb.center(), (0.0, -0.5));
}

#[test]
fn extent_past_i64_is_exact() {
    let bb = BoundingBox::of(&[
        Point::new(i128::from(i64::MIN), 0),
        Point::new(i128::from(i64::MAX), 0),
    ])
    .unwrap();
    let (w, h) = bb.extent();
    assert_eq!(w, u128::from(u64::MAX) + 1);
    assert_eq!(h, 1);
}

#[test]
fn extent_saturates_at_i128_limits() {
    let bb = BoundingBox::of(&[Point::new(i128::MIN, 0), Point::new(i128::MAX, 0)]).unwrap();
    assert_eq!(bb.extent().0, u128::MAX);
}

#[test]
fn occupied_collapses_duplicates() {
    let n = NormalizedPoints {
        points: vec![Point::ORIGIN, Point::new(1, 0), Point::ORIGIN],
        width: 2,
        height: 1,
        source_bounds: BoundingBox::of(&[Point::ORIGIN, Point::new(1, 0)]).unwrap(),
    };
    assert_eq!(n.points.len(), 3);
    assert_eq!(n.distinct_len(), 2);
}

#[test]
fn point_from_tuple() {
    assert_eq!(Point::from((4, -5)), Point::new(4, -5));
}
