use crate::{
    automaton::grid::Grid,
    automaton::life::{BirthMode, Boundary, CellChange, GameOfLife},
    automaton::rule::Rule,
    foundation::core::{Circle, Fps, FrameIndex, Point},
    foundation::error::GeomotionResult,
    geometry::curved_triangle::{CurvedTriangle, CurvedTriangleFrame},
    geometry::intersect::find_circles_intersection,
    geometry::polygon::{inscription_sequence, regular_polygon, square, to_bez_path},
    geometry::spiral::{BlockSpiral, generate_spiral},
    geometry::three_circles::ThreeCircles,
    geometry::yin_yang::YinYang,
    mechanics::pendulum::PendulumRun,
    mechanics::wheel::WheelRun,
    ode::solver::Trajectory,
    scenario::model::{LifeScenario, Scenario, Seeding, Shape},
};

/// One animation frame mapped onto a trajectory sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Frame number.
    pub frame: FrameIndex,
    /// Animation time of the frame in seconds.
    pub time: f64,
    /// Trajectory row shown on this frame.
    pub row: usize,
    /// State at that row.
    pub state: Vec<f64>,
}

/// Result of [`Scenario::run`], tagged with the same `kind` as the input.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioOutput {
    Pendulum(PendulumOutput),
    UnbalancedWheel(WheelOutput),
    GameOfLife(LifeOutput),
    Inscription(InscriptionOutput),
    CurvedTriangle(CurvedTriangleOutput),
    YinYang(YinYangOutput),
    BlockSpiral(BlockSpiral),
    CirclesIntersection(CirclesOutput),
    ThreeCircles(ThreeCircles),
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PendulumOutput {
    #[serde(flatten)]
    pub run: PendulumRun,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<FrameSample>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct WheelOutput {
    #[serde(flatten)]
    pub run: WheelRun,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<FrameSample>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct LifeOutput {
    pub rule: Rule,
    pub boundary: Boundary,
    pub birth_mode: BirthMode,
    pub rows: usize,
    pub cols: usize,
    /// Population of the initial grid followed by one entry per generation.
    pub population: Vec<usize>,
    pub initial: Vec<String>,
    #[serde(rename = "final")]
    pub final_grid: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<Vec<CellChange>>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct InscriptionOutput {
    /// Outer polygon first, then each inscribed one.
    pub polygons: Vec<Vec<Point>>,
    /// SVG path data for each polygon.
    pub svg: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CurvedTriangleOutput {
    pub triangle: CurvedTriangle,
    pub frames: Vec<CurvedTriangleFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct YinYangOutput {
    pub glyph: YinYang,
    pub left_half_circle: Vec<Point>,
    pub right_half_circle: Vec<Point>,
    pub middle_s: Vec<Point>,
    pub full_circle: Vec<Point>,
    /// Upper eye first, then the lower one.
    pub eyes: [Circle; 2],
    /// Closed fill boundary of the half holding the upper eye.
    pub left_half: Vec<Point>,
    /// Closed fill boundary of the half holding the lower eye.
    pub right_half: Vec<Point>,
    pub svg: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct CirclesOutput {
    pub a: Point,
    pub b: Point,
    pub r: f64,
    pub points: Vec<Point>,
}

impl ScenarioOutput {
    /// The `kind` tag of this output.
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
}

impl Scenario {
    /// Validate, then compute the scenario.
    #[tracing::instrument(skip(self), fields(kind = self.kind()))]
    pub fn run(&self) -> GeomotionResult<ScenarioOutput> {
        self.validate()?;
        let out = match self {
            Self::Pendulum(s) => {
                let duration = s
                    .duration
                    .unwrap_or_else(|| s.params.small_angle_period());
                let run = s.params.simulate(s.steps, duration, s.integrator)?;
                let frames = sample_frames(&run.trajectory, s.fps);
                ScenarioOutput::Pendulum(PendulumOutput { run, frames })
            }
            Self::UnbalancedWheel(s) => {
                let run = s
                    .params
                    .simulate(s.theta0, s.steps, s.duration, s.integrator)?;
                let frames = sample_frames(&run.trajectory, s.fps);
                ScenarioOutput::UnbalancedWheel(WheelOutput { run, frames })
            }
            Self::GameOfLife(s) => ScenarioOutput::GameOfLife(run_life(s)?),
            Self::Inscription(s) => {
                let outer = match s.shape {
                    Shape::Square { size } => square(size),
                    Shape::Regular { sides, radius } => regular_polygon(sides, radius)?,
                };
                let polygons = inscription_sequence(&outer, s.p, s.depth)?;
                let svg = polygons.iter().map(|p| to_bez_path(p).to_svg()).collect();
                ScenarioOutput::Inscription(InscriptionOutput { polygons, svg })
            }
            Self::CurvedTriangle(s) => {
                let triangle = CurvedTriangle::new(s.circumradius)?;
                let frames = triangle.sweep(s.start_angle, s.end_angle, s.frames)?;
                ScenarioOutput::CurvedTriangle(CurvedTriangleOutput { triangle, frames })
            }
            Self::YinYang(s) => {
                let glyph = YinYang::with_step(s.radius, s.step)?;
                ScenarioOutput::YinYang(YinYangOutput {
                    glyph,
                    left_half_circle: glyph.left_half_circle(),
                    right_half_circle: glyph.right_half_circle(),
                    middle_s: glyph.middle_s(),
                    full_circle: glyph.full_circle(),
                    eyes: glyph.eyes(),
                    left_half: glyph.left_half(),
                    right_half: glyph.right_half(),
                    svg: glyph.outline().to_svg(),
                })
            }
            Self::BlockSpiral(s) => ScenarioOutput::BlockSpiral(generate_spiral(s.n)?),
            Self::CirclesIntersection(s) => ScenarioOutput::CirclesIntersection(CirclesOutput {
                a: s.a,
                b: s.b,
                r: s.r,
                points: find_circles_intersection(s.a, s.b, s.r),
            }),
            Self::ThreeCircles(s) => {
                ScenarioOutput::ThreeCircles(ThreeCircles::new(s.scale, s.halo_gap)?)
            }
        };
        tracing::debug!("scenario finished");
        Ok(out)
    }
}

/// Frames `0..=floor(span * fps)` each mapped to the trajectory row shown at its time.
fn sample_frames(trajectory: &Trajectory, fps: Option<Fps>) -> Vec<FrameSample> {
    let Some(fps) = fps else {
        return Vec::new();
    };
    let times = trajectory.times();
    let (t0, t_end) = (times[0], times[times.len() - 1]);
    let count = fps.secs_to_frames_floor(t_end - t0);
    (0..=count)
        .filter_map(|frame| {
            let time = fps.frames_to_secs(frame);
            let row = trajectory.step_for_time(t0 + time);
            trajectory.state(row).map(|state| FrameSample {
                frame: FrameIndex(frame),
                time,
                row,
                state: state.to_vec(),
            })
        })
        .collect()
}

fn run_life(s: &LifeScenario) -> GeomotionResult<LifeOutput> {
    let mut life = GameOfLife::new(s.rule, s.rows, s.cols)?
        .with_boundary(s.boundary)
        .with_birth_mode(s.birth_mode);
    match &s.seeding {
        Seeding::Manual => life.seed_manual()?,
        Seeding::Random { seed, density } => life.seed_random(*seed, *density)?,
        Seeding::Pattern { rows } => {
            let pattern = Grid::from_rows(rows)?;
            let mut grid = Grid::new(s.rows, s.cols)?;
            for (r, c) in pattern.alive_cells() {
                grid.set(r, c, true)?;
            }
            life.set_state(grid)?;
        }
    }

    let initial = life.state().to_rows();
    let mut population = vec![life.state().population()];
    let mut changes = Vec::new();
    if s.record_changes {
        for _ in 0..s.generations {
            changes.push(life.step());
            population.push(life.state().population());
        }
    } else {
        population.extend(life.run(s.generations));
    }

    Ok(LifeOutput {
        rule: s.rule,
        boundary: s.boundary,
        birth_mode: s.birth_mode,
        rows: s.rows,
        cols: s.cols,
        population,
        initial,
        final_grid: life.state().to_rows(),
        changes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scenario/run.rs"]
mod tests;
