use crate::foundation::error::{GeomotionError, GeomotionResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Vec2};

/// Absolute 0-based frame index in animation time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Create a validated frame rate.
    pub fn new(num: u32, den: u32) -> GeomotionResult<Self> {
        if den == 0 {
            return Err(GeomotionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GeomotionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as floating-point frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to a frame count, rounding down. Negative inputs clamp to 0.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> GeomotionResult<Vec<f64>> {
    if n == 0 {
        return Err(GeomotionError::validation("linspace needs at least one sample"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(GeomotionError::validation("linspace bounds must be finite"));
    }
    if n == 1 {
        return Ok(vec![start]);
    }

    let span = end - start;
    let last = (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n - 1 {
        out.push(start + span * (i as f64) / last);
    }
    // Pin the endpoint exactly.
    out.push(end);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
