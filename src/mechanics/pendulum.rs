use crate::{
    foundation::core::{Point, linspace},
    foundation::error::{GeomotionError, GeomotionResult},
    ode::integrator::{IntegratorKind, StepCtx},
    ode::solver::{Trajectory, solve},
};

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Simple (rigid, massless rod) pendulum.
pub struct PendulumParams {
    /// Rod length.
    pub length: f64,
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Initial angle from the downward vertical, radians.
    pub theta0: f64,
    /// Initial angular velocity, radians per second.
    pub omega0: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            length: 2.0,
            gravity: STANDARD_GRAVITY,
            theta0: std::f64::consts::PI / 6.0,
            omega0: 0.0,
        }
    }
}

/// Sampled pendulum motion.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PendulumRun {
    /// Parameters the run was produced with.
    pub params: PendulumParams,
    /// Raw `[θ, ω]` solution.
    pub trajectory: Trajectory,
    /// Angle per sample.
    pub thetas: Vec<f64>,
    /// Bob position relative to the pivot per sample.
    pub bob: Vec<Point>,
    /// Mechanical energy per unit mass per sample.
    pub energy: Vec<f64>,
}

impl PendulumParams {
    /// Check that the parameters describe a physical pendulum.
    pub fn validate(&self) -> GeomotionResult<()> {
        let all = [self.length, self.gravity, self.theta0, self.omega0];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeomotionError::validation(
                "pendulum parameters must be finite",
            ));
        }
        if self.length <= 0.0 {
            return Err(GeomotionError::validation("pendulum length must be > 0"));
        }
        if self.gravity <= 0.0 {
            return Err(GeomotionError::validation("pendulum gravity must be > 0"));
        }
        Ok(())
    }

    /// Small-angle period `2π √(L/g)`.
    pub fn small_angle_period(&self) -> f64 {
        std::f64::consts::TAU * (self.length / self.gravity).sqrt()
    }

    /// `θ'' = -(g/L) sin θ` for the state `[θ, ω]`.
    pub fn derivatives(&self, state: &[f64], _ctx: StepCtx, out: &mut [f64]) {
        out[0] = state[1];
        out[1] = -self.gravity / self.length * state[0].sin();
    }

    /// Bob position for angle `theta`, pivot at the origin.
    pub fn bob_position(&self, theta: f64) -> Point {
        Point::new(self.length * theta.sin(), -self.length * theta.cos())
    }

    /// Kinetic plus potential energy per unit mass, zero at rest at the bottom.
    pub fn energy(&self, theta: f64, omega: f64) -> f64 {
        0.5 * (self.length * omega).powi(2) + self.gravity * self.length * (1.0 - theta.cos())
    }

    /// Integrate `steps` samples spanning `duration` seconds.
    #[tracing::instrument(skip(self))]
    pub fn simulate(
        &self,
        steps: usize,
        duration: f64,
        integrator: IntegratorKind,
    ) -> GeomotionResult<PendulumRun> {
        self.validate()?;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(GeomotionError::validation("duration must be > 0"));
        }
        if steps < 2 {
            return Err(GeomotionError::validation("steps must be >= 2"));
        }

        tracing::info!("solving pendulum equations");
        let times = linspace(0.0, duration, steps)?;
        let f = |s: &[f64], ctx: StepCtx, out: &mut [f64]| self.derivatives(s, ctx, out);
        let trajectory = solve(&[self.theta0, self.omega0], &times, &integrator, &f)?;
        tracing::info!(steps = trajectory.len(), "solved");

        let thetas = trajectory.column(0)?;
        let bob = thetas.iter().map(|&th| self.bob_position(th)).collect();
        let energy = trajectory
            .rows()
            .map(|row| self.energy(row[0], row[1]))
            .collect();

        Ok(PendulumRun {
            params: *self,
            trajectory,
            thetas,
            bob,
            energy,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mechanics/pendulum.rs"]
mod tests;
