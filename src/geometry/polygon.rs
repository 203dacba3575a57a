//! Polygon construction and recursive inscription.

use crate::{
    foundation::core::{BezPath, Point, Vec2},
    foundation::error::{GeomotionError, GeomotionResult},
};

/// Consecutive vertex pairs, closing back to the first vertex.
pub fn zip_pairs(vertices: &[Point]) -> Vec<(Point, Point)> {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
        .collect()
}

/// Point at fraction `p` along `start`-`end`.
#[inline]
pub fn point_on_segment(start: Point, end: Point, p: f64) -> Point {
    start.lerp(end, p)
}

fn check_ratio(p: f64) -> GeomotionResult<()> {
    if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
        return Err(GeomotionError::validation(format!(
            "inscription ratio must be within [0, 1], got {p}"
        )));
    }
    Ok(())
}

/// Polygon whose vertex `i` sits at fraction `p` along edge `v[i]`-`v[i+1]`.
pub fn inscribe(vertices: &[Point], p: f64) -> GeomotionResult<Vec<Point>> {
    if vertices.len() < 3 {
        return Err(GeomotionError::validation(
            "a polygon needs at least 3 vertices",
        ));
    }
    check_ratio(p)?;
    Ok(zip_pairs(vertices)
        .into_iter()
        .map(|(start, end)| point_on_segment(start, end, p))
        .collect())
}

/// The outer polygon followed by `depth` successive inscriptions.
pub fn inscription_sequence(
    vertices: &[Point],
    p: f64,
    depth: usize,
) -> GeomotionResult<Vec<Vec<Point>>> {
    let mut out = Vec::with_capacity(depth + 1);
    let mut current = vertices.to_vec();
    for _ in 0..depth {
        let next = inscribe(&current, p)?;
        out.push(std::mem::replace(&mut current, next));
    }
    if depth == 0 && current.len() < 3 {
        return Err(GeomotionError::validation(
            "a polygon needs at least 3 vertices",
        ));
    }
    out.push(current);
    Ok(out)
}

/// Axis-aligned square centred on the origin, clockwise from the top-left corner.
pub fn square(size: f64) -> Vec<Point> {
    let d = size / 2.0;
    vec![
        Point::new(-d, d),
        Point::new(d, d),
        Point::new(d, -d),
        Point::new(-d, -d),
    ]
}

/// Regular `n`-gon on a circle of `radius`, first vertex straight up, then clockwise.
pub fn regular_polygon(n: usize, radius: f64) -> GeomotionResult<Vec<Point>> {
    if n < 3 {
        return Err(GeomotionError::validation(
            "a polygon needs at least 3 vertices",
        ));
    }
    Ok((0..n)
        .map(|i| {
            let a = (i as f64) * std::f64::consts::TAU / (n as f64);
            Point::new(radius * a.sin(), radius * a.cos())
        })
        .collect())
}

/// `n` points evenly spaced on the circle of `radius` about `center`, counter-clockwise from
/// `start_angle`.
pub fn vertices_on_circle(radius: f64, start_angle: f64, center: Point, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = start_angle + (i as f64) * std::f64::consts::TAU / (n as f64);
            center + Vec2::from_angle(a) * radius
        })
        .collect()
}

/// Line envelope ("string art") inside the lower-left corner of a `size` square.
///
/// Segment `i` runs from `(-d, d - i·step)` on the left edge to `(-d + i·step, -d)` on the bottom
/// edge, with `step = size / count` and `d = size / 2`; the segments trace a parabolic envelope.
pub fn string_art(size: f64, count: usize) -> GeomotionResult<Vec<(Point, Point)>> {
    if count == 0 {
        return Err(GeomotionError::validation("string art needs at least one segment"));
    }
    if !(size.is_finite() && size > 0.0) {
        return Err(GeomotionError::validation("string art size must be > 0"));
    }
    let d = size / 2.0;
    let step = size / (count as f64);
    Ok((0..=count)
        .map(|i| {
            let s = (i as f64) * step;
            (Point::new(-d, d - s), Point::new(-d + s, -d))
        })
        .collect())
}

/// Closed path through `vertices`.
pub fn to_bez_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = vertices.iter().copied();
    if let Some(first) = it.next() {
        path.move_to(first);
        for v in it {
            path.line_to(v);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/polygon.rs"]
mod tests;
