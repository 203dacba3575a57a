use crate::foundation::core::{Affine, Point};

/// Midpoint of the segment `a`-`b`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Squared Euclidean distance.
#[inline]
pub fn dist2(a: Point, b: Point) -> f64 {
    a.distance_squared(b)
}

/// Candidate closest to `from`, or `None` for an empty slice.
pub fn find_nearest(from: Point, candidates: &[Point]) -> Option<Point> {
    candidates
        .iter()
        .copied()
        .min_by(|p, q| dist2(from, *p).total_cmp(&dist2(from, *q)))
}

/// Candidate farthest from `from`, or `None` for an empty slice.
pub fn find_farthest(from: Point, candidates: &[Point]) -> Option<Point> {
    candidates
        .iter()
        .copied()
        .max_by(|p, q| dist2(from, *p).total_cmp(&dist2(from, *q)))
}

/// Rotate `p` counter-clockwise by `angle` radians around `origin`.
#[inline]
pub fn rotate_about(p: Point, origin: Point, angle: f64) -> Point {
    Affine::rotate_about(angle, origin) * p
}

/// Intersection points of two circles of equal radius `r` centred at `a` and `b`.
///
/// Returns two points for crossing circles, one for tangent circles, none when the circles are
/// apart. Coincident centres have no isolated intersections and yield none as well.
///
/// The half-chord is measured along whichever axis separates the centres the most, so the slope
/// term never divides by a near-zero difference. Point order is stable: for mostly horizontal
/// separation the upper point comes first, for mostly vertical separation the left one.
pub fn find_circles_intersection(a: Point, b: Point, r: f64) -> Vec<Point> {
    if !(r.is_finite() && r >= 0.0) || a == b {
        return Vec::new();
    }

    let o = midpoint(a, b);
    let l2 = dist2(o, a);
    let r2 = r * r;
    if l2 > r2 {
        return Vec::new();
    }

    let (p, q) = if (a.x - b.x).abs() > (a.y - b.y).abs() {
        let alpha = (o.y - a.y) / (o.x - a.x);
        let beta = ((r2 - l2) / (1.0 + alpha * alpha)).sqrt();
        (
            Point::new(o.x - alpha * beta, o.y + beta),
            Point::new(o.x + alpha * beta, o.y - beta),
        )
    } else {
        let alpha = (o.x - a.x) / (o.y - a.y);
        let beta = ((r2 - l2) / (1.0 + alpha * alpha)).sqrt();
        (
            Point::new(o.x - beta, o.y + alpha * beta),
            Point::new(o.x + beta, o.y - alpha * beta),
        )
    };

    if p == q { vec![p] } else { vec![p, q] }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/intersect.rs"]
mod tests;
