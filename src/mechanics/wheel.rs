use crate::{
    foundation::core::{Point, linspace},
    foundation::error::{GeomotionError, GeomotionResult},
    mechanics::pendulum::STANDARD_GRAVITY,
    ode::integrator::{IntegratorKind, StepCtx},
    ode::solver::{Trajectory, solve},
};

/// Default simulated time in seconds.
pub const DEFAULT_DURATION: f64 = 24.0;
/// Default number of samples.
pub const DEFAULT_STEPS: usize = 12_000;
/// Default initial angle (`3π/5`).
pub const DEFAULT_THETA0: f64 = 3.0 * std::f64::consts::PI / 5.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Weightless wheel rolling without slipping, carrying one point mass off its axis.
///
/// `θ` is measured from the upward vertical through the centre; the mass sits at
/// `(r sin θ, r cos θ)` relative to the centre and the centre advances by `θ R`.
pub struct WheelParams {
    /// Distance from the wheel centre to the mass.
    pub r: f64,
    /// Wheel radius.
    #[serde(rename = "R", alias = "big_r")]
    pub big_r: f64,
    /// Point mass.
    pub m: f64,
    /// Rayleigh friction coefficient.
    pub b: f64,
    /// Gravitational acceleration.
    pub gravity: f64,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            r: 1.0,
            big_r: 2.0,
            m: 1.0,
            b: 0.8,
            gravity: STANDARD_GRAVITY,
        }
    }
}

/// Sampled wheel motion and energy bookkeeping.
#[derive(Clone, Debug, serde::Serialize)]
pub struct WheelRun {
    /// Parameters the run was produced with.
    pub params: WheelParams,
    /// Raw `[θ, ω]` solution.
    pub trajectory: Trajectory,
    /// Wheel angle per sample.
    pub thetas: Vec<f64>,
    /// Horizontal position of the wheel centre per sample (`θ R`).
    pub positions: Vec<f64>,
    /// Mass position per sample, wheel centre at height 0.
    pub mass: Vec<Point>,
    /// Floor contact point per sample.
    pub contact: Vec<Point>,
    /// Kinetic energy per sample.
    pub kinetic: Vec<f64>,
    /// Potential energy per sample, floor at height `-R`.
    pub potential: Vec<f64>,
    /// Rayleigh dissipation function per sample.
    pub dissipation: Vec<f64>,
}

impl WheelParams {
    /// Check that the parameters keep the equation of motion regular.
    pub fn validate(&self) -> GeomotionResult<()> {
        let all = [self.r, self.big_r, self.m, self.b, self.gravity];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeomotionError::validation("wheel parameters must be finite"));
        }
        if self.big_r <= 0.0 {
            return Err(GeomotionError::validation("wheel radius R must be > 0"));
        }
        if self.m <= 0.0 {
            return Err(GeomotionError::validation("wheel mass m must be > 0"));
        }
        if self.b < 0.0 {
            return Err(GeomotionError::validation("friction b must be >= 0"));
        }
        // Effective inertia r² + R² + 2rR sin θ reaches (R - r)², which must stay positive.
        if self.r < 0.0 || self.r >= self.big_r {
            return Err(GeomotionError::validation(
                "mass offset r must satisfy 0 <= r < R",
            ));
        }
        Ok(())
    }

    fn inertia(&self, theta: f64) -> f64 {
        let (r, big_r) = (self.r, self.big_r);
        r * r + big_r * big_r + 2.0 * r * big_r * theta.sin()
    }

    /// `θ''(r² + R² + 2rR sin θ) + rR θ'² cos θ - g r sin θ + θ' b/m = 0` for `[θ, ω]`.
    pub fn derivatives(&self, state: &[f64], _ctx: StepCtx, out: &mut [f64]) {
        let (th, w) = (state[0], state[1]);
        let (r, big_r) = (self.r, self.big_r);
        out[0] = w;
        out[1] = (self.gravity * r * th.sin() - r * big_r * w * w * th.cos() - w * self.b / self.m)
            / self.inertia(th);
    }

    /// Kinetic energy `½ m θ'² (r² + R² + 2rR sin θ)`.
    pub fn kinetic_energy(&self, theta: f64, omega: f64) -> f64 {
        0.5 * self.m * omega * omega * self.inertia(theta)
    }

    /// Potential energy `m g (R + r cos θ)`.
    pub fn potential_energy(&self, theta: f64) -> f64 {
        self.m * self.gravity * (self.big_r + self.r * theta.cos())
    }

    /// Rayleigh dissipation `½ b θ'²`.
    pub fn dissipation(&self, omega: f64) -> f64 {
        0.5 * self.b * omega * omega
    }

    /// Integrate from rest at `theta0` over `duration` seconds with `steps` samples.
    #[tracing::instrument(skip(self))]
    pub fn simulate(
        &self,
        theta0: f64,
        steps: usize,
        duration: f64,
        integrator: IntegratorKind,
    ) -> GeomotionResult<WheelRun> {
        self.validate()?;
        if !theta0.is_finite() {
            return Err(GeomotionError::validation("initial angle must be finite"));
        }
        if !(duration.is_finite() && duration > 0.0) {
            return Err(GeomotionError::validation("duration must be > 0"));
        }
        if steps < 2 {
            return Err(GeomotionError::validation("steps must be >= 2"));
        }

        tracing::info!("solving unbalanced wheel equations");
        let times = linspace(0.0, duration, steps)?;
        let f = |s: &[f64], ctx: StepCtx, out: &mut [f64]| self.derivatives(s, ctx, out);
        let trajectory = solve(&[theta0, 0.0], &times, &integrator, &f)?;
        tracing::info!(steps = trajectory.len(), "solved");

        let thetas = trajectory.column(0)?;
        let positions: Vec<f64> = thetas.iter().map(|th| th * self.big_r).collect();
        let mass = thetas
            .iter()
            .zip(&positions)
            .map(|(&th, &x)| Point::new(self.r * th.sin() + x, self.r * th.cos()))
            .collect();
        let contact = positions
            .iter()
            .map(|&x| Point::new(x, -self.big_r))
            .collect();

        let mut kinetic = Vec::with_capacity(trajectory.len());
        let mut potential = Vec::with_capacity(trajectory.len());
        let mut dissipation = Vec::with_capacity(trajectory.len());
        for row in trajectory.rows() {
            kinetic.push(self.kinetic_energy(row[0], row[1]));
            potential.push(self.potential_energy(row[0]));
            dissipation.push(self.dissipation(row[1]));
        }

        Ok(WheelRun {
            params: *self,
            trajectory,
            thetas,
            positions,
            mass,
            contact,
            kinetic,
            potential,
            dissipation,
        })
    }
}

impl WheelRun {
    /// Total mechanical energy per sample.
    pub fn total_energy(&self) -> Vec<f64> {
        self.kinetic
            .iter()
            .zip(&self.potential)
            .map(|(k, v)| k + v)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mechanics/wheel.rs"]
mod tests;
