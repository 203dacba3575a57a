//! Fixed-step explicit integrators.

/// Position of the integrator on the time grid, handed to every derivative evaluation.
///
/// `t` is the time of the evaluated stage (so RK4's midpoint stages see `t + dt/2`), while
/// `step` and `dt` describe the step being taken.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepCtx {
    /// 0-based index of the step being taken.
    pub step: usize,
    /// Stage time.
    pub t: f64,
    /// Step size.
    pub dt: f64,
}

impl StepCtx {
    fn at(self, t: f64) -> Self {
        Self { t, ..self }
    }
}

/// Right-hand side of `y' = f(y, t)`.
///
/// Implementations write the derivative of every state component into `out`, which always has
/// the same length as `state`.
pub trait Derivative {
    /// Evaluate the derivative.
    fn eval(&self, state: &[f64], ctx: StepCtx, out: &mut [f64]);
}

impl<F> Derivative for F
where
    F: Fn(&[f64], StepCtx, &mut [f64]),
{
    fn eval(&self, state: &[f64], ctx: StepCtx, out: &mut [f64]) {
        self(state, ctx, out)
    }
}

/// Stage buffers reused across steps so the hot loop does not allocate.
#[derive(Clone, Debug)]
pub struct Scratch {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    tmp: Vec<f64>,
}

impl Scratch {
    /// Allocate buffers for a state of `dim` components.
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![0.0; dim],
            k2: vec![0.0; dim],
            k3: vec![0.0; dim],
            k4: vec![0.0; dim],
            tmp: vec![0.0; dim],
        }
    }

    fn dim(&self) -> usize {
        self.tmp.len()
    }
}

/// One-step method advancing `state` by `ctx.dt`.
pub trait Integrator {
    /// Short stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Write the state at `ctx.t + ctx.dt` into `out`.
    ///
    /// `state`, `out` and `scratch` must share the same dimension.
    fn advance<D: Derivative + ?Sized>(
        &self,
        f: &D,
        state: &[f64],
        ctx: StepCtx,
        scratch: &mut Scratch,
        out: &mut [f64],
    );
}

/// Classical fourth-order Runge-Kutta.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn advance<D: Derivative + ?Sized>(
        &self,
        f: &D,
        state: &[f64],
        ctx: StepCtx,
        scratch: &mut Scratch,
        out: &mut [f64],
    ) {
        debug_assert_eq!(state.len(), scratch.dim());
        let dt = ctx.dt;
        let half = 0.5 * dt;
        let Scratch {
            k1,
            k2,
            k3,
            k4,
            tmp,
        } = scratch;

        f.eval(state, ctx, &mut k1[..]);

        for i in 0..state.len() {
            tmp[i] = state[i] + half * k1[i];
        }
        f.eval(&tmp[..], ctx.at(ctx.t + half), &mut k2[..]);

        for i in 0..state.len() {
            tmp[i] = state[i] + half * k2[i];
        }
        f.eval(&tmp[..], ctx.at(ctx.t + half), &mut k3[..]);

        for i in 0..state.len() {
            tmp[i] = state[i] + dt * k3[i];
        }
        f.eval(&tmp[..], ctx.at(ctx.t + dt), &mut k4[..]);

        for i in 0..state.len() {
            out[i] = state[i] + (dt / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
    }
}

/// Explicit midpoint method (second order).
#[derive(Clone, Copy, Debug, Default)]
pub struct Midpoint;

impl Integrator for Midpoint {
    fn name(&self) -> &'static str {
        "midpoint"
    }

    fn advance<D: Derivative + ?Sized>(
        &self,
        f: &D,
        state: &[f64],
        ctx: StepCtx,
        scratch: &mut Scratch,
        out: &mut [f64],
    ) {
        let half = 0.5 * ctx.dt;
        f.eval(state, ctx, &mut scratch.k1);
        for i in 0..state.len() {
            scratch.tmp[i] = state[i] + half * scratch.k1[i];
        }
        f.eval(&scratch.tmp, ctx.at(ctx.t + half), &mut scratch.k2);
        for i in 0..state.len() {
            out[i] = state[i] + ctx.dt * scratch.k2[i];
        }
    }
}

/// Explicit (forward) Euler. First order; mostly useful as a baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn advance<D: Derivative + ?Sized>(
        &self,
        f: &D,
        state: &[f64],
        ctx: StepCtx,
        scratch: &mut Scratch,
        out: &mut [f64],
    ) {
        f.eval(state, ctx, &mut scratch.k1);
        for i in 0..state.len() {
            out[i] = state[i] + ctx.dt * scratch.k1[i];
        }
    }
}

/// Serializable integrator selector for configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    /// [`Rk4`].
    #[default]
    Rk4,
    /// [`Midpoint`].
    Midpoint,
    /// [`Euler`].
    Euler,
}

impl Integrator for IntegratorKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Rk4 => Rk4.name(),
            Self::Midpoint => Midpoint.name(),
            Self::Euler => Euler.name(),
        }
    }

    fn advance<D: Derivative + ?Sized>(
        &self,
        f: &D,
        state: &[f64],
        ctx: StepCtx,
        scratch: &mut Scratch,
        out: &mut [f64],
    ) {
        match self {
            Self::Rk4 => Rk4.advance(f, state, ctx, scratch, out),
            Self::Midpoint => Midpoint.advance(f, state, ctx, scratch, out),
            Self::Euler => Euler.advance(f, state, ctx, scratch, out),
        }
    }
}

/// Single RK4 step returning the new state.
///
/// Convenience wrapper over [`Rk4`] for callers that step manually; [`crate::solve`] is the
/// allocation-free path for whole time grids.
pub fn integrate_rk4<D: Derivative + ?Sized>(f: &D, state: &[f64], ctx: StepCtx) -> Vec<f64> {
    let mut scratch = Scratch::new(state.len());
    let mut out = vec![0.0; state.len()];
    Rk4.advance(f, state, ctx, &mut scratch, &mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/ode/integrator.rs"]
mod tests;
