use crate::{
    foundation::error::{GeomotionError, GeomotionResult},
    ode::integrator::{Derivative, Integrator, Scratch, StepCtx},
};

/// Sampled solution of an initial value problem on a fixed time grid.
///
/// States are stored row-major: row `i` is the state at `times[i]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Trajectory {
    times: Vec<f64>,
    dim: usize,
    data: Vec<f64>,
}

impl Trajectory {
    /// Number of samples (always equal to the length of the time grid).
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of state components.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Time grid the trajectory was sampled on.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// State at sample `i`.
    pub fn state(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dim)?;
        self.data.get(start..start + self.dim)
    }

    /// Final state.
    pub fn last(&self) -> &[f64] {
        let start = (self.len() - 1) * self.dim;
        &self.data[start..]
    }

    /// Iterate over all states in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dim)
    }

    /// One state component across all samples.
    pub fn column(&self, c: usize) -> GeomotionResult<Vec<f64>> {
        if c >= self.dim {
            return Err(GeomotionError::validation(format!(
                "column {c} out of range for {}-dimensional state",
                self.dim
            )));
        }
        Ok(self.rows().map(|row| row[c]).collect())
    }

    /// Map an animation time onto a sample index.
    ///
    /// The time is scaled linearly from `[t0, t_end]` onto `[0, len]` and floored; times at or
    /// past the end map to the last sample, times before `t0` to the first.
    pub fn step_for_time(&self, t: f64) -> usize {
        let last = self.len() - 1;
        let t0 = self.times[0];
        let span = self.times[last] - t0;
        if last == 0 || span <= 0.0 || !t.is_finite() {
            return 0;
        }
        let scaled = ((t - t0) / span * self.len() as f64).floor();
        if scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(last)
        }
    }
}

/// Integrate `derivative` from `initial` over the `times` grid.
///
/// Row `0` of the result is `initial`; every later row is produced from the previous one with a
/// single step of `integrator`, using the spacing of the grid as the step size.
#[tracing::instrument(skip_all, fields(dim = initial.len(), samples = times.len(), method = integrator.name()))]
pub fn solve<I, D>(
    initial: &[f64],
    times: &[f64],
    integrator: &I,
    derivative: &D,
) -> GeomotionResult<Trajectory>
where
    I: Integrator + ?Sized,
    D: Derivative + ?Sized,
{
    if initial.is_empty() {
        return Err(GeomotionError::validation("initial state must not be empty"));
    }
    if initial.iter().any(|v| !v.is_finite()) {
        return Err(GeomotionError::validation("initial state must be finite"));
    }
    validate_time_grid(times)?;

    let dim = initial.len();
    let mut data = vec![0.0; dim * times.len()];
    data[..dim].copy_from_slice(initial);

    let mut scratch = Scratch::new(dim);
    for step in 1..times.len() {
        let t = times[step - 1];
        let ctx = StepCtx {
            step: step - 1,
            t,
            dt: times[step] - t,
        };
        let (done, rest) = data.split_at_mut(step * dim);
        let prev = &done[(step - 1) * dim..];
        let next = &mut rest[..dim];
        integrator.advance(derivative, prev, ctx, &mut scratch, next);

        if next.iter().any(|v| !v.is_finite()) {
            return Err(GeomotionError::solver(format!(
                "state became non-finite at step {} (t = {t})",
                step - 1
            )));
        }
    }

    tracing::debug!(steps = times.len() - 1, "integration finished");
    Ok(Trajectory {
        times: times.to_vec(),
        dim,
        data,
    })
}

fn validate_time_grid(times: &[f64]) -> GeomotionResult<()> {
    if times.is_empty() {
        return Err(GeomotionError::validation("time grid must not be empty"));
    }
    if times.iter().any(|t| !t.is_finite()) {
        return Err(GeomotionError::validation("time grid must be finite"));
    }
    if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
        return Err(GeomotionError::validation(format!(
            "time grid must be strictly increasing (index {})",
            i + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ode/solver.rs"]
mod tests;
