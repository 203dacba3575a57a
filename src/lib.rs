//! Geomotion computes the state behind geometric constructions and small physics animations.
//!
//! The crate is organised around three numerical kernels and the constructions built on them:
//!
//! - [`solve`] integrates an ODE on a fixed time grid ([`Rk4`] by default)
//! - [`find_circles_intersection`] and the polygon helpers drive the geometry constructions
//! - [`GameOfLife`] evolves Life-like cellular automata
//!
//! A [`Scenario`] bundles any of these behind a JSON description and produces a serialisable
//! [`ScenarioOutput`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod automaton;
pub(crate) mod geometry;
pub(crate) mod mechanics;
pub(crate) mod ode;
pub(crate) mod scenario;

pub use crate::foundation::core::{
    Affine, BezPath, Circle, Fps, FrameIndex, Point, Vec2, linspace,
};
pub use crate::foundation::error::{GeomotionError, GeomotionResult};
pub use crate::foundation::rng::Rng64;

pub use crate::ode::integrator::{
    Derivative, Euler, Integrator, IntegratorKind, Midpoint, Rk4, Scratch, StepCtx,
    integrate_rk4,
};
pub use crate::ode::solver::{Trajectory, solve};

pub use crate::mechanics::pendulum::{PendulumParams, PendulumRun, STANDARD_GRAVITY};
pub use crate::mechanics::wheel::{WheelParams, WheelRun};

pub use crate::geometry::curved_triangle::{CurvedTriangle, CurvedTriangleFrame, helper_opacity};
pub use crate::geometry::intersect::{
    dist2, find_circles_intersection, find_farthest, find_nearest, midpoint, rotate_about,
};
pub use crate::geometry::polygon::{
    inscribe, inscription_sequence, point_on_segment, regular_polygon, square, string_art,
    to_bez_path, vertices_on_circle, zip_pairs,
};
pub use crate::geometry::spiral::{BlockSpiral, generate_spiral};
pub use crate::geometry::three_circles::{Satellite, ThreeCircles};
pub use crate::geometry::yin_yang::YinYang;

pub use crate::automaton::grid::Grid;
pub use crate::automaton::life::{BirthMode, Boundary, CellChange, GameOfLife};
pub use crate::automaton::raster::{BLACK, PINK, save_png, to_image};
pub use crate::automaton::rule::Rule;

pub use crate::scenario::model::{
    BlockSpiralScenario, CirclesScenario, CurvedTriangleScenario, InscriptionScenario,
    LifeScenario, PendulumScenario, Scenario, Seeding, Shape, ThreeCirclesScenario, WheelScenario,
    YinYangScenario,
};
pub use crate::scenario::run::{
    CirclesOutput, CurvedTriangleOutput, FrameSample, InscriptionOutput, LifeOutput,
    PendulumOutput, ScenarioOutput, WheelOutput, YinYangOutput,
};
