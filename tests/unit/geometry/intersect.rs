use super::*;

fn close(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12
}

#[test]
fn horizontal_pair_crosses_on_the_bisector() {
    let pts = find_circles_intersection(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), 2f64.sqrt());
    assert_eq!(pts.len(), 2);
    assert!(close(pts[0], 0.0, 1.0));
    assert!(close(pts[1], 0.0, -1.0));
}

#[test]
fn vertical_pair_lists_left_point_first() {
    let pts = find_circles_intersection(Point::new(0.0, -3.0), Point::new(0.0, 3.0), 5.0);
    assert_eq!(pts.len(), 2);
    assert!(close(pts[0], -4.0, 0.0));
    assert!(close(pts[1], 4.0, 0.0));
}

#[test]
fn diagonal_points_lie_on_both_circles() {
    let a = Point::new(-0.3, 0.2);
    let b = Point::new(0.9, 1.1);
    let r = 1.5;
    let pts = find_circles_intersection(a, b, r);
    assert_eq!(pts.len(), 2);
    for p in pts {
        assert!((p.distance(a) - r).abs() < 1e-12);
        assert!((p.distance(b) - r).abs() < 1e-12);
    }
}

#[test]
fn tangent_circles_touch_once() {
    let pts = find_circles_intersection(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), 1.0);
    assert_eq!(pts.len(), 1);
    assert!(close(pts[0], 0.0, 0.0));
}

#[test]
fn separated_coincident_and_degenerate_inputs_yield_nothing() {
    let a = Point::new(0.0, 0.0);
    assert!(find_circles_intersection(a, Point::new(3.0, 0.0), 1.0).is_empty());
    assert!(find_circles_intersection(a, a, 1.0).is_empty());
    assert!(find_circles_intersection(a, Point::new(1.0, 0.0), -1.0).is_empty());
    assert!(find_circles_intersection(a, Point::new(1.0, 0.0), f64::NAN).is_empty());
}

#[test]
fn nearest_and_farthest_pick_by_distance() {
    let pts = [Point::new(0.0, 1.0), Point::new(0.0, -1.0)];
    let from = Point::new(0.0, 3.0);
    assert_eq!(find_nearest(from, &pts), Some(Point::new(0.0, 1.0)));
    assert_eq!(find_farthest(from, &pts), Some(Point::new(0.0, -1.0)));
    assert_eq!(find_farthest(from, &[]), None);
}

#[test]
fn rotate_about_quarter_turn() {
    let p = rotate_about(
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        std::f64::consts::FRAC_PI_2,
    );
    assert!((p.x - 1.0).abs() < 1e-12);
    assert!((p.y - 2.0).abs() < 1e-12);
}

#[test]
fn midpoint_and_dist2() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(3.0, 6.0);
    assert_eq!(midpoint(a, b), Point::new(2.0, 4.0));
    assert_eq!(dist2(a, b), 20.0);
}
