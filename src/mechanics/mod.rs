//! Lagrangian mechanics models integrated with [`crate::solve`].

pub(crate) mod pendulum;
pub(crate) mod wheel;
