//! Three-circle figure built on a downward-pointing equilateral triangle.
//!
//! Each triangle side carries a root circle of radius `scale` centred on the side midpoint, so
//! every root circle runs through two triangle vertices and touches the outer circle of radius
//! `scale·(1 + 1/√3)` from inside. A hexagon on the triangle's circumcircle is tied to one small
//! hexagon per root circle by connector triangles. Twelve satellite dots sit on a halo just
//! outside the outer circle.

use std::f64::consts::{FRAC_PI_3, PI, TAU};

use crate::{
    foundation::core::Point,
    foundation::error::{GeomotionError, GeomotionResult},
    geometry::intersect::midpoint,
    geometry::polygon::vertices_on_circle,
};

/// Root circle radius of the reference figure.
pub const DEFAULT_SCALE: f64 = 3.0;

/// Gap between the outer circle and the satellite halo in the reference figure.
pub const DEFAULT_HALO_GAP: f64 = 0.3;

/// First triangle vertex points straight down.
const START_ANGLE: f64 = 3.0 * PI / 2.0;

/// A small dot on the halo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Satellite {
    pub center: Point,
    pub radius: f64,
}

/// Every point and radius of the figure, centred on the origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ThreeCircles {
    /// Root circle radius.
    pub scale: f64,
    /// Circumradius of the triangle and the outer hexagon, `2·scale/√3`.
    pub circumradius: f64,
    /// Triangle vertices, counter-clockwise from the bottom one.
    pub triangle: [Point; 3],
    /// Root circle `i` sits on the midpoint of side `triangle[i]`-`triangle[i + 1]`.
    pub root_centers: [Point; 3],
    /// Hexagon on the circumcircle; even vertices coincide with the triangle.
    pub hexagon: Vec<Point>,
    /// Far ends of the spokes drawn from the origin to the odd hexagon vertices.
    pub spokes: [Point; 3],
    /// One hexagon of radius `scale` per root circle. Vertices 3 and 4 of hexagon `i` land on
    /// the other two root centres.
    pub inner_hexagons: [Vec<Point>; 3],
    /// Triangle `i` joins spoke end `i` to the first two vertices of inner hexagon `i`.
    pub connectors: [[Point; 3]; 3],
    /// Radius of the circle enclosing the root circles.
    pub outer_radius: f64,
    /// Radius the satellites sit on.
    pub halo_radius: f64,
    /// Four large satellites on the axes, then four on each side of them at ±π/12.
    pub satellites: Vec<Satellite>,
}

impl ThreeCircles {
    /// Build the figure for root circles of radius `scale`, with the satellite halo
    /// `halo_gap` outside the outer circle.
    pub fn new(scale: f64, halo_gap: f64) -> GeomotionResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(GeomotionError::validation(format!(
                "three-circles scale must be > 0, got {scale}"
            )));
        }
        if !(halo_gap.is_finite() && halo_gap >= 0.0) {
            return Err(GeomotionError::validation(format!(
                "halo gap must be >= 0, got {halo_gap}"
            )));
        }

        let circumradius = 2.0 * scale / 3f64.sqrt();
        let v = vertices_on_circle(circumradius, START_ANGLE, Point::ORIGIN, 3);
        let triangle = [v[0], v[1], v[2]];
        let root_centers = [
            midpoint(v[0], v[1]),
            midpoint(v[1], v[2]),
            midpoint(v[2], v[0]),
        ];

        let hexagon = vertices_on_circle(circumradius, START_ANGLE, Point::ORIGIN, 6);
        let spokes = [hexagon[1], hexagon[3], hexagon[5]];

        let inner_hexagons = [0, 1, 2].map(|i| {
            let start = -FRAC_PI_3 + (i as f64) * TAU / 3.0;
            vertices_on_circle(scale, start, root_centers[i], 6)
        });
        let connectors = [0, 1, 2].map(|i| {
            let inner = &inner_hexagons[i];
            [spokes[i], inner[0], inner[1]]
        });

        let outer_radius = scale * (1.0 + 1.0 / 3f64.sqrt());
        let halo_radius = outer_radius + halo_gap;
        let rings = [
            (0.0, scale / 30.0),
            (PI / 12.0, scale / 60.0),
            (-PI / 12.0, scale / 60.0),
        ];
        let satellites = rings
            .into_iter()
            .flat_map(|(start, radius)| {
                vertices_on_circle(halo_radius, start, Point::ORIGIN, 4)
                    .into_iter()
                    .map(move |center| Satellite { center, radius })
            })
            .collect();

        Ok(Self {
            scale,
            circumradius,
            triangle,
            root_centers,
            hexagon,
            spokes,
            inner_hexagons,
            connectors,
            outer_radius,
            halo_radius,
            satellites,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/three_circles.rs"]
mod tests;
