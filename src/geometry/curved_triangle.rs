//! Rotating-circle construction of a curved (Reuleaux-like) triangle.
//!
//! Three helper circles, each with radius equal to the triangle side, start centred on the
//! triangle vertices. Every centre rotates about the previous vertex; the far intersection of
//! each neighbouring pair of helper circles marks where an arc from the matching vertex ends.

use std::f64::consts::PI;

use crate::{
    foundation::core::{Point, linspace},
    foundation::error::{GeomotionError, GeomotionResult},
    geometry::intersect::{find_circles_intersection, find_farthest, rotate_about},
    geometry::polygon::regular_polygon,
};

/// Circumradius used by the reference construction.
pub const DEFAULT_CIRCUMRADIUS: f64 = 4.0;

/// State of the construction at one rotation angle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CurvedTriangleFrame {
    /// Rotation angle in radians.
    pub angle: f64,
    /// Helper circle centres.
    pub centers: [Point; 3],
    /// Arc end point for each triangle vertex.
    pub arc_ends: [Point; 3],
    /// Opacity of the helper markers at this angle.
    pub helper_opacity: f64,
}

/// Equilateral triangle and helper radius for the construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CurvedTriangle {
    /// Triangle vertices, first one straight up.
    pub vertices: [Point; 3],
    /// Helper circle radius (the triangle side length).
    pub helper_radius: f64,
}

impl CurvedTriangle {
    /// Triangle inscribed in a circle of `circumradius`.
    pub fn new(circumradius: f64) -> GeomotionResult<Self> {
        if !(circumradius.is_finite() && circumradius > 0.0) {
            return Err(GeomotionError::validation("circumradius must be > 0"));
        }
        let v = regular_polygon(3, circumradius)?;
        Ok(Self {
            vertices: [v[0], v[1], v[2]],
            helper_radius: 3f64.sqrt() * circumradius,
        })
    }

    /// Helper centres and arc ends after rotating by `angle`.
    pub fn at(&self, angle: f64) -> GeomotionResult<CurvedTriangleFrame> {
        let vs = self.vertices;
        let c1 = rotate_about(vs[0], vs[2], angle);
        let c2 = rotate_about(vs[1], vs[0], angle);
        let c3 = rotate_about(vs[2], vs[1], angle);

        let mut arc_ends = [Point::ORIGIN; 3];
        for (i, (a, b)) in [(c1, c2), (c2, c3), (c3, c1)].into_iter().enumerate() {
            let hits = find_circles_intersection(a, b, self.helper_radius);
            arc_ends[i] = find_farthest(vs[i], &hits).ok_or_else(|| {
                GeomotionError::geometry(format!(
                    "helper circles {i} and {} do not intersect at angle {angle}",
                    (i + 1) % 3
                ))
            })?;
        }

        Ok(CurvedTriangleFrame {
            angle,
            centers: [c1, c2, c3],
            arc_ends,
            helper_opacity: helper_opacity(angle),
        })
    }

    /// Frames for `count` angles spread evenly over `[start_angle, end_angle]`.
    ///
    /// At angle 0 both intersections of a helper pair are equally far from the vertex, so sweeps
    /// normally start slightly above 0.
    pub fn sweep(
        &self,
        start_angle: f64,
        end_angle: f64,
        count: usize,
    ) -> GeomotionResult<Vec<CurvedTriangleFrame>> {
        linspace(start_angle, end_angle, count)?
            .into_iter()
            .map(|a| self.at(a))
            .collect()
    }
}

/// Helper marker opacity: opaque until π/16, fading out linearly to 0 at π/8.
pub fn helper_opacity(angle: f64) -> f64 {
    const FADE_START: f64 = PI / 16.0;
    const FADE_END: f64 = PI / 8.0;
    if angle <= FADE_START {
        1.0
    } else if angle < FADE_END {
        (FADE_END - angle) / (FADE_END - FADE_START)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curved_triangle.rs"]
mod tests;
