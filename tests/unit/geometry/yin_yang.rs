use super::*;

use kurbo::{PathEl, Shape};

use crate::geometry::polygon::to_bez_path;

#[test]
fn sample_counts_follow_the_step() {
    let g = YinYang::new(4.0).unwrap();
    assert_eq!(g.left_half_circle().len(), 315);
    assert_eq!(g.right_half_circle().len(), 315);
    assert_eq!(g.middle_s().len(), 630);
    assert_eq!(g.full_circle().len(), 630);
    assert_eq!(g.left_half().len(), 945);
    assert_eq!(g.right_half().len(), 945);
}

#[test]
fn outline_holds_rim_s_curve_and_both_eyes() {
    let g = YinYang::new(4.0).unwrap();
    let outline = g.outline();
    let els = outline.elements();
    // 1260 polyline vertices, then two eyes of one move, four cubic quarters and a close.
    assert_eq!(els.len(), 1260 + 2 * 6);
    let moves: Vec<Point> = els
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(moves.len(), 4);
    assert!(moves[2].distance(Point::new(0.5, 2.0)) < 1e-12);
    assert!(moves[3].distance(Point::new(0.5, -2.0)) < 1e-12);
    assert_eq!(els.iter().filter(|el| matches!(el, PathEl::ClosePath)).count(), 2);
}

#[test]
fn eyes_sit_halfway_to_the_rim() {
    let g = YinYang::new(4.0).unwrap();
    let [top, bottom] = g.eyes();
    assert_eq!(top.center, Point::new(0.0, 2.0));
    assert_eq!(bottom.center, Point::new(0.0, -2.0));
    assert_eq!(top.radius, 0.5);
    assert_eq!(bottom.radius, 0.5);
}

#[test]
fn fill_halves_chain_rim_and_s_curve() {
    let g = YinYang::new(4.0).unwrap();
    let left = g.left_half();
    let right = g.right_half();
    let rim_left = g.left_half_circle();
    let s = g.middle_s();

    assert_eq!(left[0], rim_left[0]);
    assert_eq!(left[rim_left.len()], s[0]);
    assert_eq!(right[0], s[0]);
    assert_eq!(right[s.len()], g.right_half_circle()[0]);
    assert!(left[0].distance(Point::new(0.0, -4.0)) < 1e-12);
    assert!(s[0].distance(Point::new(0.0, 4.0)) < 1e-12);
}

#[test]
fn each_half_holds_one_eye_and_half_the_disc() {
    let g = YinYang::new(4.0).unwrap();
    let [top, bottom] = g.eyes();
    let left = to_bez_path(&g.left_half());
    let right = to_bez_path(&g.right_half());

    assert!(left.contains(top.center));
    assert!(!left.contains(bottom.center));
    assert!(right.contains(bottom.center));
    assert!(!right.contains(top.center));

    let half_disc = PI * 16.0 / 2.0;
    assert!((left.area().abs() - half_disc).abs() < 0.05);
    assert!((right.area().abs() - half_disc).abs() < 0.05);
}

#[test]
fn halves_sit_on_their_side_of_the_circle() {
    let g = YinYang::new(4.0).unwrap();
    for p in g.left_half_circle() {
        assert!(p.x <= 1e-12);
        assert!((p.distance(Point::ORIGIN) - 4.0).abs() < 1e-12);
    }
    for p in g.right_half_circle() {
        assert!(p.x >= -1e-12);
    }
}

#[test]
fn s_curve_runs_top_to_bottom_through_the_centre() {
    let g = YinYang::new(4.0).unwrap();
    let top = g.s_curve(0.0).unwrap();
    let mid = g.s_curve(PI).unwrap();
    let bottom = g.s_curve(TAU).unwrap();
    assert!(top.distance(Point::new(0.0, 4.0)) < 1e-12);
    assert!(mid.distance(Point::ORIGIN) < 1e-12);
    assert!(bottom.distance(Point::new(0.0, -4.0)) < 1e-12);

    let just_after = g.s_curve(PI + 1e-9).unwrap();
    assert!(just_after.distance(mid) < 1e-8);
}

#[test]
fn s_curve_rejects_out_of_range_parameter() {
    let g = YinYang::new(1.0).unwrap();
    assert!(g.s_curve(-0.1).is_err());
    assert!(g.s_curve(7.0).is_err());
    assert!(g.s_curve(f64::NAN).is_err());
}

#[test]
fn full_circle_starts_at_the_top() {
    let g = YinYang::new(2.0).unwrap();
    let first = g.full_circle()[0];
    assert!(first.distance(Point::new(0.0, 2.0)) < 1e-12);
}

#[test]
fn invalid_construction_is_rejected() {
    assert!(YinYang::new(0.0).is_err());
    assert!(YinYang::with_step(1.0, 0.0).is_err());
    assert!(YinYang::with_step(1.0, 4.0).is_err());
}
