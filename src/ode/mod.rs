//! Initial value problem solving on fixed time grids.

pub(crate) mod integrator;
pub(crate) mod solver;
