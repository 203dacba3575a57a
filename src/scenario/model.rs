use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    automaton::life::{BirthMode, Boundary},
    automaton::rule::Rule,
    foundation::core::{Fps, Point},
    foundation::error::{GeomotionError, GeomotionResult},
    geometry::curved_triangle::DEFAULT_CIRCUMRADIUS,
    geometry::three_circles::{DEFAULT_HALO_GAP, DEFAULT_SCALE},
    mechanics::pendulum::PendulumParams,
    mechanics::wheel::{DEFAULT_DURATION, DEFAULT_STEPS, DEFAULT_THETA0, WheelParams},
    ode::integrator::IntegratorKind,
};

/// A runnable computation, selected by the `kind` field of its JSON form.
///
/// Every parameter is optional in JSON; missing ones take the defaults of the matching
/// construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    Pendulum(PendulumScenario),
    UnbalancedWheel(WheelScenario),
    GameOfLife(LifeScenario),
    Inscription(InscriptionScenario),
    CurvedTriangle(CurvedTriangleScenario),
    YinYang(YinYangScenario),
    BlockSpiral(BlockSpiralScenario),
    CirclesIntersection(CirclesScenario),
    ThreeCircles(ThreeCirclesScenario),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PendulumScenario {
    /// Physical parameters and initial state.
    pub params: PendulumParams,
    /// Number of time-grid samples, endpoints included. At least 2.
    pub steps: usize,
    /// Simulated seconds; one small-angle period when absent.
    pub duration: Option<f64>,
    /// Fixed-step scheme used to advance the state.
    pub integrator: IntegratorKind,
    /// When set, per-frame samples are added to the output.
    pub fps: Option<Fps>,
}

impl Default for PendulumScenario {
    fn default() -> Self {
        Self {
            params: PendulumParams::default(),
            steps: 1000,
            duration: None,
            integrator: IntegratorKind::default(),
            fps: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WheelScenario {
    /// Wheel and mass geometry, mass and friction.
    pub params: WheelParams,
    /// Initial angle of the off-centre mass in radians.
    pub theta0: f64,
    /// Number of time-grid samples, endpoints included. At least 2.
    pub steps: usize,
    /// Simulated seconds.
    pub duration: f64,
    /// Fixed-step scheme used to advance the state.
    pub integrator: IntegratorKind,
    /// Frame rate for per-frame samples; none are produced when absent.
    pub fps: Option<Fps>,
}

impl Default for WheelScenario {
    fn default() -> Self {
        Self {
            params: WheelParams::default(),
            theta0: DEFAULT_THETA0,
            steps: DEFAULT_STEPS,
            duration: DEFAULT_DURATION,
            integrator: IntegratorKind::default(),
            fps: None,
        }
    }
}

/// Initial grid contents for an automaton run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seeding {
    /// Three cells around the centre.
    Manual,
    /// Independent cells alive with probability `density`.
    Random {
        #[serde(default = "default_seed")]
        seed: u64,
        #[serde(default = "default_density")]
        density: f64,
    },
    /// Explicit rows of `#`/`.` text, placed at the top-left corner.
    Pattern { rows: Vec<String> },
}

fn default_seed() -> u64 {
    42
}

fn default_density() -> f64 {
    0.5
}

impl Default for Seeding {
    fn default() -> Self {
        Self::Random {
            seed: default_seed(),
            density: default_density(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LifeScenario {
    /// `B/S` rule string or preset name in JSON.
    pub rule: Rule,
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// How cells past the edge count as neighbours.
    pub boundary: Boundary,
    /// Whether birth counts also keep live cells alive.
    pub birth_mode: BirthMode,
    /// Initial grid contents.
    pub seeding: Seeding,
    /// Generations to evolve after the initial grid.
    pub generations: u64,
    /// Include the changed cells of every generation in the output.
    pub record_changes: bool,
}

impl Default for LifeScenario {
    fn default() -> Self {
        Self {
            rule: Rule::LABYRINTH,
            rows: 48,
            cols: 48,
            boundary: Boundary::Dead,
            birth_mode: BirthMode::DeadOnly,
            seeding: Seeding::default(),
            generations: 100,
            record_changes: false,
        }
    }
}

/// Outer polygon of an inscription sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned square with side `size`.
    Square { size: f64 },
    /// Regular polygon with `sides` vertices on a circle of `radius`.
    Regular { sides: usize, radius: f64 },
}

impl Default for Shape {
    fn default() -> Self {
        Self::Square { size: 4.0 }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InscriptionScenario {
    /// Outer polygon.
    pub shape: Shape,
    /// Position of each new vertex along its edge, in `[0, 1]`.
    pub p: f64,
    /// Number of polygons inscribed inside the outer one.
    pub depth: usize,
}

impl Default for InscriptionScenario {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            p: 0.15,
            depth: 15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurvedTriangleScenario {
    /// Circumradius of the underlying equilateral triangle.
    pub circumradius: f64,
    /// Rotation angle of the first frame, in radians.
    pub start_angle: f64,
    /// Rotation angle of the last frame, in radians.
    pub end_angle: f64,
    /// Number of frames spread evenly over the sweep.
    pub frames: usize,
}

impl Default for CurvedTriangleScenario {
    fn default() -> Self {
        Self {
            circumradius: DEFAULT_CIRCUMRADIUS,
            start_angle: 0.01,
            end_angle: PI / 8.0,
            frames: 60,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct YinYangScenario {
    /// Outer circle radius.
    pub radius: f64,
    /// Angular sampling step in radians, within `(0, π)`.
    pub step: f64,
}

impl Default for YinYangScenario {
    fn default() -> Self {
        Self {
            radius: 4.0,
            step: 0.01,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockSpiralScenario {
    /// Grid side; must be even.
    pub n: usize,
}

impl Default for BlockSpiralScenario {
    fn default() -> Self {
        Self { n: 8 }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CirclesScenario {
    /// Centre of the first circle.
    pub a: Point,
    /// Centre of the second circle.
    pub b: Point,
    /// Radius shared by both circles.
    pub r: f64,
}

impl Default for CirclesScenario {
    fn default() -> Self {
        Self {
            a: Point::new(-0.3, 0.0),
            b: Point::new(0.3, 0.0),
            r: 1.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThreeCirclesScenario {
    /// Root circle radius.
    pub scale: f64,
    /// Distance from the outer circle to the satellite halo.
    pub halo_gap: f64,
}

impl Default for ThreeCirclesScenario {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            halo_gap: DEFAULT_HALO_GAP,
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> GeomotionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GeomotionError::validation(format!("parse scenario JSON: {e}")))
    }

    /// Parse a scenario from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GeomotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GeomotionError::validation(format!("open scenario JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The `kind` tag of this scenario.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pendulum(_) => "pendulum",
            Self::UnbalancedWheel(_) => "unbalanced_wheel",
            Self::GameOfLife(_) => "game_of_life",
            Self::Inscription(_) => "inscription",
            Self::CurvedTriangle(_) => "curved_triangle",
            Self::YinYang(_) => "yin_yang",
            Self::BlockSpiral(_) => "block_spiral",
            Self::CirclesIntersection(_) => "circles_intersection",
            Self::ThreeCircles(_) => "three_circles",
        }
    }

    /// Reject parameters that cannot run, before doing any work.
    pub fn validate(&self) -> GeomotionResult<()> {
        match self {
            Self::Pendulum(s) => {
                s.params.validate()?;
                check_steps(s.steps)?;
                if let Some(d) = s.duration {
                    check_duration(d)?;
                }
                check_fps(s.fps)
            }
            Self::UnbalancedWheel(s) => {
                s.params.validate()?;
                check_steps(s.steps)?;
                check_duration(s.duration)?;
                if !s.theta0.is_finite() {
                    return Err(GeomotionError::validation("theta0 must be finite"));
                }
                check_fps(s.fps)
            }
            Self::GameOfLife(s) => {
                if s.rows == 0 || s.cols == 0 {
                    return Err(GeomotionError::validation(
                        "automaton grid must be at least 1x1",
                    ));
                }
                match &s.seeding {
                    Seeding::Manual if s.rows < 4 || s.cols < 4 => Err(
                        GeomotionError::validation("manual seeding needs a grid of at least 4x4"),
                    ),
                    Seeding::Random { density, .. }
                        if !(density.is_finite() && (0.0..=1.0).contains(density)) =>
                    {
                        Err(GeomotionError::validation(format!(
                            "density must be within [0, 1], got {density}"
                        )))
                    }
                    Seeding::Pattern { rows }
                        if rows.len() > s.rows
                            || rows.iter().any(|r| r.chars().count() > s.cols) =>
                    {
                        Err(GeomotionError::validation(format!(
                            "pattern does not fit a {}x{} grid",
                            s.rows, s.cols
                        )))
                    }
                    _ => Ok(()),
                }
            }
            Self::Inscription(s) => {
                if !(s.p.is_finite() && (0.0..=1.0).contains(&s.p)) {
                    return Err(GeomotionError::validation(format!(
                        "p must be within [0, 1], got {}",
                        s.p
                    )));
                }
                match s.shape {
                    Shape::Square { size } => check_positive("square size", size),
                    Shape::Regular { sides, radius } => {
                        if sides < 3 {
                            return Err(GeomotionError::validation(
                                "regular polygon needs at least 3 sides",
                            ));
                        }
                        check_positive("polygon radius", radius)
                    }
                }
            }
            Self::CurvedTriangle(s) => {
                check_positive("circumradius", s.circumradius)?;
                if !(s.start_angle.is_finite() && s.end_angle.is_finite()) {
                    return Err(GeomotionError::validation("sweep angles must be finite"));
                }
                if s.frames == 0 {
                    return Err(GeomotionError::validation("frames must be > 0"));
                }
                Ok(())
            }
            Self::YinYang(s) => {
                check_positive("yin-yang radius", s.radius)?;
                if !(s.step.is_finite() && s.step > 0.0 && s.step < PI) {
                    return Err(GeomotionError::validation(
                        "yin-yang step must be within (0, π)",
                    ));
                }
                Ok(())
            }
            Self::BlockSpiral(s) => {
                if s.n == 0 || s.n % 2 != 0 {
                    return Err(GeomotionError::validation(format!(
                        "block spiral side must be even and > 0, got {}",
                        s.n
                    )));
                }
                Ok(())
            }
            Self::CirclesIntersection(s) => {
                let coords = [s.a.x, s.a.y, s.b.x, s.b.y];
                if coords.iter().any(|v| !v.is_finite()) {
                    return Err(GeomotionError::validation("circle centres must be finite"));
                }
                check_positive("circle radius", s.r)
            }
            Self::ThreeCircles(s) => {
                check_positive("three-circles scale", s.scale)?;
                if !(s.halo_gap.is_finite() && s.halo_gap >= 0.0) {
                    return Err(GeomotionError::validation(format!(
                        "halo gap must be >= 0, got {}",
                        s.halo_gap
                    )));
                }
                Ok(())
            }
        }
    }
}

fn check_steps(steps: usize) -> GeomotionResult<()> {
    if steps < 2 {
        return Err(GeomotionError::validation("steps must be >= 2"));
    }
    Ok(())
}

fn check_fps(fps: Option<Fps>) -> GeomotionResult<()> {
    match fps {
        Some(f) => Fps::new(f.num, f.den).map(|_| ()),
        None => Ok(()),
    }
}

fn check_duration(duration: f64) -> GeomotionResult<()> {
    check_positive("duration", duration)
}

fn check_positive(what: &str, v: f64) -> GeomotionResult<()> {
    if !(v.is_finite() && v > 0.0) {
        return Err(GeomotionError::validation(format!(
            "{what} must be > 0, got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scenario/model.rs"]
mod tests;
